use crate::constants::MAX_PIXEL_RATIO;
use crate::guard;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

/// How a background canvas sits in the page.
#[derive(Clone, Copy, Debug)]
pub struct CanvasLayer {
    /// Let the canvas receive pointer events.
    pub interactive: bool,
    /// Insert as the first child of `<body>` instead of the last.
    pub prepend: bool,
}

/// Create a fixed full-viewport canvas with `id`, unless any of
/// `guard_ids` is already on the page.
///
/// Returns `Ok(None)` when another install got there first.
pub fn claim_canvas(
    document: &web::Document,
    id: &str,
    guard_ids: &[&str],
    layer: CanvasLayer,
) -> anyhow::Result<Option<web::HtmlCanvasElement>> {
    if let Some(existing) = guard::install_blocker(guard_ids, |g| document.get_element_by_id(g).is_some()) {
        log::info!("[{}] #{} already present; not installing", id, existing);
        return Ok(None);
    }
    let body = document
        .body()
        .ok_or_else(|| anyhow::anyhow!("document has no body"))?;
    let canvas: web::HtmlCanvasElement = document
        .create_element("canvas")
        .map_err(|e| anyhow::anyhow!("create canvas: {:?}", e))?
        .dyn_into()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;
    canvas.set_id(id);
    let style = canvas.style();
    for (prop, value) in [
        ("position", "fixed"),
        ("top", "0"),
        ("left", "0"),
        ("width", "100vw"),
        ("height", "100vh"),
        ("z-index", "0"),
        ("pointer-events", if layer.interactive { "auto" } else { "none" }),
    ] {
        style
            .set_property(prop, value)
            .map_err(|e| anyhow::anyhow!("style {}: {:?}", prop, e))?;
    }
    let attached = if layer.prepend {
        body.prepend_with_node_1(&canvas)
    } else {
        body.append_child(&canvas).map(|_| ())
    };
    attached.map_err(|e| anyhow::anyhow!("attach canvas: {:?}", e))?;
    Ok(Some(canvas))
}

/// Viewport size in css pixels.
pub fn viewport_css_size() -> (f64, f64) {
    let Some(w) = web::window() else {
        return (1.0, 1.0);
    };
    let width = w.inner_width().ok().and_then(|v| v.as_f64()).unwrap_or(1.0);
    let height = w.inner_height().ok().and_then(|v| v.as_f64()).unwrap_or(1.0);
    (width.max(1.0), height.max(1.0))
}

/// Match the canvas backing store to the viewport times the (capped)
/// device pixel ratio.
pub fn sync_canvas_backing_size(canvas: &web::HtmlCanvasElement) {
    if let Some(w) = web::window() {
        let dpr = w.device_pixel_ratio().clamp(1.0, MAX_PIXEL_RATIO);
        let (css_w, css_h) = viewport_css_size();
        canvas.set_width(((css_w * dpr) as u32).max(1));
        canvas.set_height(((css_h * dpr) as u32).max(1));
    }
}

/// Milliseconds on the same clock as `requestAnimationFrame` timestamps.
pub fn now_ms() -> f64 {
    web::window()
        .and_then(|w| w.performance())
        .map(|p| p.now())
        .unwrap_or(0.0)
}
