use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Per-frame work of one background module.
pub trait FrameContext {
    /// `now_ms` is the `requestAnimationFrame` timestamp.
    fn frame(&mut self, now_ms: f64);
}

type TickSlot = Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>>;

/// Drive `frame_ctx` from `requestAnimationFrame` until the page unloads.
pub fn start_loop<F: FrameContext + 'static>(frame_ctx: Rc<RefCell<F>>) {
    let tick: TickSlot = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move |now_ms: f64| {
        frame_ctx.borrow_mut().frame(now_ms);
        request_frame(&tick_clone);
    }) as Box<dyn FnMut(f64)>));
    request_frame(&tick);
}

fn request_frame(tick: &TickSlot) {
    if let (Some(w), Some(cb)) = (web::window(), tick.borrow().as_ref()) {
        if let Err(e) = w.request_animation_frame(cb.as_ref().unchecked_ref()) {
            log::error!("requestAnimationFrame failed: {:?}", e);
        }
    }
}
