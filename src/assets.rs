use crate::constants::IMAGE_BASE_PATH;
use elements_core::SceneState;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Decoded images waiting for the next frame to upload them.
pub type ImageQueue = Rc<RefCell<Vec<(usize, web::HtmlImageElement)>>>;

/// Start loading every segment's alpha image. Successes land in the
/// returned queue; failures are recorded on the scene straight away.
pub fn load_images(scene: &Rc<RefCell<SceneState>>) -> ImageQueue {
    let queue: ImageQueue = Rc::new(RefCell::new(Vec::new()));
    let sources: Vec<&'static str> = scene
        .borrow()
        .segments
        .iter()
        .map(|s| s.element.image())
        .collect();
    for (index, file) in sources.into_iter().enumerate() {
        let image = match web::HtmlImageElement::new() {
            Ok(img) => img,
            Err(e) => {
                log::error!("[texture] cannot create image for {file}: {:?}", e);
                continue;
            }
        };

        let queue_ok = queue.clone();
        let image_ok = image.clone();
        let onload = Closure::once_into_js(move || {
            queue_ok.borrow_mut().push((index, image_ok));
        });
        image.set_onload(Some(onload.unchecked_ref()));

        let scene_err = scene.clone();
        let onerror = Closure::once_into_js(move || {
            _ = scene_err.borrow_mut().mark_texture_failed(index);
        });
        image.set_onerror(Some(onerror.unchecked_ref()));

        image.set_src(&format!("{IMAGE_BASE_PATH}{file}"));
    }
    queue
}
