use crate::constants::*;
use crate::core::DriftField;
use crate::dom::{self, CanvasLayer};
use crate::events;
use crate::frame::{self, FrameContext};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

struct FallbackScene {
    ctx: web::CanvasRenderingContext2d,
    field: Rc<RefCell<DriftField>>,
}

pub fn install() -> anyhow::Result<()> {
    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;
    let layer = CanvasLayer {
        interactive: false,
        prepend: true,
    };
    // Either backdrop already on the page wins
    let Some(canvas) =
        dom::claim_canvas(&document, FALLBACK_CANVAS_ID, &FALLBACK_GUARD_IDS, layer)?
    else {
        return Ok(());
    };
    let ctx: web::CanvasRenderingContext2d = canvas
        .get_context("2d")
        .map_err(|e| anyhow::anyhow!("get_context: {:?}", e))?
        .ok_or_else(|| anyhow::anyhow!("2d context unavailable"))?
        .dyn_into()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;

    let (w, h) = dom::viewport_css_size();
    let mut rng = StdRng::from_entropy();
    let field = Rc::new(RefCell::new(DriftField::new(
        FALLBACK_PARTICLE_COUNT,
        w as f32,
        h as f32,
        &mut rng,
    )));

    let field_resize = field.clone();
    events::wire_resize(move || {
        let (w, h) = dom::viewport_css_size();
        canvas.set_width(w as u32);
        canvas.set_height(h as u32);
        field_resize.borrow_mut().resize(w as f32, h as f32);
    });

    log::info!("[fallback] {} particles installed", FALLBACK_PARTICLE_COUNT);
    frame::start_loop(Rc::new(RefCell::new(FallbackScene { ctx, field })));
    Ok(())
}

impl FrameContext for FallbackScene {
    fn frame(&mut self, _now_ms: f64) {
        let mut field = self.field.borrow_mut();
        field.step();
        let (w, h) = field.size();
        let (w, h) = (w as f64, h as f64);

        self.ctx.clear_rect(0.0, 0.0, w, h);
        let wash = self.ctx.create_linear_gradient(0.0, 0.0, 0.0, h);
        _ = wash.add_color_stop(0.0, FALLBACK_WASH_TOP);
        _ = wash.add_color_stop(1.0, FALLBACK_WASH_BOTTOM);
        self.ctx.set_fill_style_canvas_gradient(&wash);
        self.ctx.fill_rect(0.0, 0.0, w, h);

        self.ctx.set_fill_style_str(FALLBACK_PARTICLE_FILL);
        for p in field.particles() {
            self.ctx.begin_path();
            _ = self.ctx.arc(
                p.pos.x as f64,
                p.pos.y as f64,
                p.radius as f64,
                0.0,
                std::f64::consts::TAU,
            );
            self.ctx.fill();
        }
    }
}
