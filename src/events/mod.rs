pub mod pointer;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Run `on_resize` now and on every window resize.
pub fn wire_resize(mut on_resize: impl FnMut() + 'static) {
    on_resize();
    let closure = Closure::wrap(Box::new(move || on_resize()) as Box<dyn FnMut()>);
    if let Some(window) = web::window() {
        _ = window.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}
