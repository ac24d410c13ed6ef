#![cfg(target_arch = "wasm32")]
use elements_core::{SceneParams, SceneState, SessionClock};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod assets;
mod constants;
mod dom;
mod frame;
mod render;
mod scroll;
mod stars;

use constants::*;

/// Keep the canvas backing store and the scene projection in step with the
/// window.
fn wire_resize(canvas: &web::HtmlCanvasElement, scene: &Rc<RefCell<SceneState>>) {
    let sync = {
        let canvas = canvas.clone();
        let scene = scene.clone();
        move || {
            dom::sync_canvas_backing_size(&canvas);
            if let Some((w, h)) = dom::viewport_size() {
                // degenerate sizes are logged and leave the projection alone
                _ = scene.borrow_mut().resize(w as f32, h as f32);
            }
        }
    };
    sync();
    let resize_closure = Closure::wrap(Box::new(sync) as Box<dyn FnMut()>);
    if let Some(window) = web::window() {
        _ = window
            .add_event_listener_with_callback("resize", resize_closure.as_ref().unchecked_ref());
    }
    resize_closure.forget();
}

fn wire_back_button(document: &web::Document) {
    dom::add_click_listener(document, BACK_BUTTON_SELECTOR, || {
        if let Some(w) = web::window() {
            let opts = web::ScrollToOptions::new();
            opts.set_top(0.0);
            opts.set_behavior(web::ScrollBehavior::Smooth);
            w.scroll_to_with_scroll_to_options(&opts);
        }
    });
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("elements-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let container = document
        .get_element_by_id(CANVAS_CONTAINER_ID)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", CANVAS_CONTAINER_ID))?;
    let canvas = dom::create_canvas(&document, &container)?;

    let clock = SessionClock::new();
    let scene = Rc::new(RefCell::new(SceneState::new(SceneParams::default())));

    wire_resize(&canvas, &scene);
    wire_back_button(&document);

    let stars = stars::StarLayer::create(&document, &scene.borrow().particles);
    scroll::wire_scroll(scroll::ScrollWiring {
        document: document.clone(),
        scene: scene.clone(),
        clock,
    })?;
    let loaded_images = assets::load_images(&scene);

    // Snapshot the segments so no scene borrow is held across the await
    let segments = scene.borrow().segments.clone();
    let gpu = frame::init_gpu(&canvas, &segments).await;

    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        scene,
        clock,
        canvas,
        stars,
        gpu,
        loaded_images,
    }));
    frame::start_loop(frame_ctx);
    Ok(())
}
