use glam::{Vec2, Vec3};
use web_sys as web;

/// Latest pointer position over a canvas, in normalized device coordinates.
///
/// `ndc` is `None` until the first move and again after the pointer leaves.
/// `moved` is raised by the event handlers and consumed once per frame.
#[derive(Default, Clone, Copy, Debug)]
pub struct PointerState {
    pub ndc: Option<Vec2>,
    pub moved: bool,
}

impl PointerState {
    pub fn move_to(&mut self, ndc: Vec2) {
        self.ndc = Some(ndc);
        self.moved = true;
    }

    pub fn leave(&mut self) {
        self.ndc = None;
        self.moved = true;
    }

    /// Returns true once per batch of pointer events.
    pub fn take_moved(&mut self) -> bool {
        std::mem::take(&mut self.moved)
    }
}

#[inline]
pub fn ray_sphere(ray_origin: Vec3, ray_dir: Vec3, center: Vec3, radius: f32) -> Option<f32> {
    let oc = ray_origin - center;
    let b = oc.dot(ray_dir);
    let c = oc.dot(oc) - radius * radius;
    let disc = b * b - c;
    if disc < 0.0 {
        return None;
    }
    let t = -b - disc.sqrt();
    (t >= 0.0).then_some(t)
}

/// Map a client-space point to NDC relative to a rect (y up).
#[inline]
pub fn client_to_ndc(client_x: f32, client_y: f32, left: f32, top: f32, width: f32, height: f32) -> Option<Vec2> {
    if width <= 0.0 || height <= 0.0 {
        return None;
    }
    let x = ((client_x - left) / width) * 2.0 - 1.0;
    let y = -((client_y - top) / height) * 2.0 + 1.0;
    Some(Vec2::new(x, y))
}

// ---------------- Pointer helpers ----------------
#[inline]
pub fn pointer_ndc(ev: &web::PointerEvent, canvas: &web::HtmlCanvasElement) -> Option<Vec2> {
    let rect = canvas.get_bounding_client_rect();
    client_to_ndc(
        ev.client_x() as f32,
        ev.client_y() as f32,
        rect.left() as f32,
        rect.top() as f32,
        rect.width() as f32,
        rect.height() as f32,
    )
}
