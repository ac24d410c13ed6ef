use crate::assets::ImageQueue;
use crate::render;
use crate::stars::StarLayer;
use elements_core::{SceneState, Segment, SessionClock};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext<'a> {
    pub scene: Rc<RefCell<SceneState>>,
    pub clock: SessionClock,
    pub canvas: web::HtmlCanvasElement,
    pub stars: Option<StarLayer>,
    pub gpu: Option<render::GpuState<'a>>,
    pub loaded_images: ImageQueue,
}

impl<'a> FrameContext<'a> {
    pub fn frame(&mut self) {
        let elapsed = self.clock.elapsed_sec();
        let mut scene = self.scene.borrow_mut();
        scene.frame(elapsed);

        // Drain images decoded since the last frame
        let loaded: Vec<_> = self.loaded_images.borrow_mut().drain(..).collect();
        for (index, image) in loaded {
            if let Err(e) = scene.mark_texture_loaded(index) {
                log::error!("[texture] {e}");
                continue;
            }
            if let Some(g) = &mut self.gpu {
                g.upload_image(index, &image, &scene);
            }
        }

        if let Some(stars) = &self.stars {
            stars.update(&scene.particles);
        }

        if let Some(g) = &mut self.gpu {
            let w = self.canvas.width();
            let h = self.canvas.height();
            g.resize_if_needed(w, h);
            if let Err(e) = g.render(&scene) {
                log::error!("render error: {:?}", e);
            }
        }
    }
}

pub async fn init_gpu(
    canvas: &web::HtmlCanvasElement,
    segments: &[Segment],
) -> Option<render::GpuState<'static>> {
    // leak a canvas clone to satisfy 'static lifetime for surface
    let leaked_canvas = Box::leak(Box::new(canvas.clone()));
    match render::GpuState::new(leaked_canvas, segments).await {
        Ok(g) => Some(g),
        Err(e) => {
            log::error!("WebGPU init error: {:?}", e);
            None
        }
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext<'static>>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    let frame_ctx_tick = frame_ctx.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx_tick.borrow_mut().frame();
        request_frame(&tick_clone);
    }) as Box<dyn FnMut()>));
    request_frame(&tick);
}

fn request_frame(tick: &Rc<RefCell<Option<Closure<dyn FnMut()>>>>) {
    if let (Some(w), Some(cb)) = (web::window(), tick.borrow().as_ref()) {
        _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}
