use crate::constants::*;
use crate::dom;
use elements_core::{nearest_snap, SceneState, ScrollTrigger, SessionClock, VelocityTracker};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// A pinned slide and the side bar scrubbed by its scroll range.
struct Slide {
    element: web::HtmlElement,
    side: Option<web::HtmlElement>,
}

struct ScrollState {
    tracker: VelocityTracker,
    snap_timer: Option<i32>,
}

pub struct ScrollWiring {
    pub document: web::Document,
    pub scene: Rc<RefCell<SceneState>>,
    pub clock: SessionClock,
}

/// Feed the scene from window scroll events and settle on a snap stop once
/// scrolling goes quiet.
pub fn wire_scroll(wiring: ScrollWiring) -> anyhow::Result<()> {
    let ScrollWiring {
        document,
        scene,
        clock,
    } = wiring;
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let container = dom::query_html(&document, SCROLL_CONTAINER_SELECTOR)
        .ok_or_else(|| anyhow::anyhow!("missing {}", SCROLL_CONTAINER_SELECTOR))?;
    let slides: Vec<Slide> = SLIDE_SELECTORS
        .iter()
        .filter_map(|sel| {
            let element = dom::query_html(&document, sel)?;
            let side = dom::query_html(&document, &format!("{sel} {SLIDE_SIDE_SELECTOR}"));
            Some(Slide { element, side })
        })
        .collect();
    log::info!("[scroll] slides={}", slides.len());

    let state = Rc::new(RefCell::new(ScrollState {
        tracker: VelocityTracker::default(),
        snap_timer: None,
    }));

    // Snap callback is created once and re-armed on every scroll event.
    let container_snap = container.clone();
    let snap_closure = Closure::wrap(Box::new(move || {
        settle_on_snap(&container_snap);
    }) as Box<dyn FnMut()>);
    let snap_fn: js_sys::Function = snap_closure.as_ref().unchecked_ref::<js_sys::Function>().clone();
    snap_closure.forget();

    let on_scroll = move || {
        let Some(w) = web::window() else {
            return;
        };
        let scroll_y = w.scroll_y().unwrap_or(0.0);
        let Some(trigger) = container_trigger(&container, scroll_y) else {
            return;
        };
        let progress = trigger.progress(scroll_y as f32);
        let now = clock.elapsed_sec();
        let velocity = state.borrow_mut().tracker.sample(scroll_y as f32, now);
        if let Ok(mut scene) = scene.try_borrow_mut() {
            scene.on_scroll_update(progress, velocity, now);
        }
        scrub_sides(&slides, scroll_y);

        let mut st = state.borrow_mut();
        if let Some(handle) = st.snap_timer.take() {
            w.clear_timeout_with_handle(handle);
        }
        st.snap_timer = w
            .set_timeout_with_callback_and_timeout_and_arguments_0(&snap_fn, SNAP_IDLE_MS)
            .ok();
    };

    // Sync the scene with wherever the page loaded.
    on_scroll();

    let scroll_closure = Closure::wrap(Box::new(on_scroll) as Box<dyn FnMut()>);
    window
        .add_event_listener_with_callback("scroll", scroll_closure.as_ref().unchecked_ref())
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    scroll_closure.forget();
    Ok(())
}

/// "top top" to "bottom bottom" of the scroll container, in page pixels.
fn container_trigger(container: &web::HtmlElement, scroll_y: f64) -> Option<ScrollTrigger> {
    let (_, viewport_h) = dom::viewport_size()?;
    let rect = container.get_bounding_client_rect();
    Some(ScrollTrigger::pinned_container(
        (rect.top() + scroll_y) as f32,
        rect.height() as f32,
        viewport_h as f32,
    ))
}

fn scrub_sides(slides: &[Slide], scroll_y: f64) {
    for slide in slides {
        let Some(side) = &slide.side else {
            continue;
        };
        let rect = slide.element.get_bounding_client_rect();
        let trigger = ScrollTrigger::slide((rect.top() + scroll_y) as f32, rect.height() as f32);
        let pct = trigger.progress(scroll_y as f32) * 100.0;
        _ = side.style().set_property("height", &format!("{pct}%"));
    }
}

fn settle_on_snap(container: &web::HtmlElement) {
    let Some(w) = web::window() else {
        return;
    };
    let scroll_y = w.scroll_y().unwrap_or(0.0);
    let Some(trigger) = container_trigger(container, scroll_y) else {
        return;
    };
    let progress = trigger.progress(scroll_y as f32);
    let stop = nearest_snap(progress);
    let target = trigger.start as f64 + stop as f64 * (trigger.end - trigger.start) as f64;
    if (target - scroll_y).abs() <= SNAP_TOLERANCE_PX {
        return;
    }
    log::debug!("[scroll] snap {progress:.4} -> {stop:.4}");
    let opts = web::ScrollToOptions::new();
    opts.set_top(target);
    opts.set_behavior(web::ScrollBehavior::Smooth);
    w.scroll_to_with_scroll_to_options(&opts);
}
