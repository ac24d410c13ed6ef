use crate::constants::{STARS_SELECTOR, STAR_CLASS};
use crate::dom;
use elements_core::{Particle, ParticleField};
use wasm_bindgen::JsCast;
use web_sys as web;

/// One absolutely positioned `div.star` per particle.
pub struct StarLayer {
    nodes: Vec<web::HtmlElement>,
}

impl StarLayer {
    pub fn create(document: &web::Document, field: &ParticleField) -> Option<Self> {
        let Some(container) = dom::query_html(document, STARS_SELECTOR) else {
            log::warn!("[stars] missing {STARS_SELECTOR}; star field disabled");
            return None;
        };
        let mut nodes = Vec::with_capacity(field.particles.len());
        for p in &field.particles {
            let Some(node) = document
                .create_element("div")
                .ok()
                .and_then(|el| el.dyn_into::<web::HtmlElement>().ok())
            else {
                continue;
            };
            node.set_class_name(STAR_CLASS);
            let style = node.style();
            _ = style.set_property("top", &format!("{}%", p.top));
            _ = style.set_property("width", &format!("{}px", p.size));
            apply(&node, p);
            if container.append_child(&node).is_ok() {
                nodes.push(node);
            }
        }
        log::info!("[stars] created {}", nodes.len());
        Some(Self { nodes })
    }

    pub fn update(&self, field: &ParticleField) {
        for (node, p) in self.nodes.iter().zip(&field.particles) {
            apply(node, p);
        }
    }
}

fn apply(node: &web::HtmlElement, p: &Particle) {
    let style = node.style();
    _ = style.set_property("left", &format!("{}%", p.x_pos));
    _ = style.set_property("height", &format!("{}px", p.height));
    _ = style.set_property(
        "transform",
        &format!("translateY({}px)", p.vertical_offset),
    );
}
