use super::{white_ambient, white_light};
use crate::asset;
use crate::camera::Camera;
use crate::color::hex_to_linear;
use crate::constants::*;
use crate::core::{Aabb, MeshData, ModelSlot, Placement, StarField};
use crate::dom::{self, CanvasLayer};
use crate::error::LoadError;
use crate::events;
use crate::frame::{self, FrameContext};
use crate::render::{GpuMesh, GpuState, Lighting, MeshInstance, PointStyle, SceneFrame, SurfaceOptions};
use glam::Vec3;
use instant::Instant;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

struct ModelScene {
    canvas: web::HtmlCanvasElement,
    gpu: GpuState,
    camera: Camera,
    lighting: Lighting,
    point_style: PointStyle,
    stars: StarField,
    rng: StdRng,
    slot: ModelSlot,
    model_mesh: Option<GpuMesh>,
}

impl ModelScene {
    /// Settle the pending load. The mesh is only uploaded once its bounds
    /// produced a usable placement.
    fn attach_model(&mut self, loaded: Result<MeshData, LoadError>) -> Result<Placement, LoadError> {
        let mesh = match loaded {
            Ok(m) => m,
            Err(e) => return self.slot.finish(Err(e)),
        };
        let bounds = Aabb::from_points(mesh.positions()).ok_or(LoadError::Empty);
        let placement = self.slot.finish(bounds)?;
        self.model_mesh = Some(self.gpu.create_mesh("model", &mesh, 1));
        Ok(placement)
    }
}

pub fn install(asset_path: Option<String>) -> anyhow::Result<()> {
    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;
    let layer = CanvasLayer {
        interactive: false,
        prepend: true,
    };
    let Some(canvas) = dom::claim_canvas(&document, MODEL_CANVAS_ID, &MODEL_GUARD_IDS, layer)?
    else {
        return Ok(());
    };

    let canvas_resize = canvas.clone();
    events::wire_resize(move || dom::sync_canvas_backing_size(&canvas_resize));

    let path = asset_path.unwrap_or_else(|| DEFAULT_MODEL_PATH.to_string());
    spawn_local(async move {
        if let Err(e) = start(canvas, path).await {
            log::error!("[model] init error: {:?}", e);
        }
    });
    Ok(())
}

async fn start(canvas: web::HtmlCanvasElement, path: String) -> anyhow::Result<()> {
    let [r, g, b] = hex_to_linear(BACKDROP_CLEAR_COLOR);
    let gpu = GpuState::new(
        &canvas,
        SurfaceOptions {
            clear_color: wgpu::Color {
                r: r as f64,
                g: g as f64,
                b: b as f64,
                a: 1.0,
            },
            transparent: false,
            point_capacity: BACKDROP_PARTICLE_COUNT as u32,
        },
    )
    .await?;
    let camera = Camera::looking_forward(
        Vec3::from(BACKDROP_CAMERA_EYE),
        BACKDROP_CAMERA_FOV_DEG,
        CAMERA_ZNEAR,
        CAMERA_ZFAR,
    );
    // Screen size of a point matches a size-attenuated sprite of the same nominal size
    let point_size = BACKDROP_PARTICLE_SIZE * (camera.fovy_radians * 0.5).tan();
    let mut rng = StdRng::from_entropy();
    let stars = StarField::new(BACKDROP_PARTICLE_COUNT, &mut rng);

    let scene = Rc::new(RefCell::new(ModelScene {
        canvas,
        gpu,
        camera,
        lighting: Lighting {
            ambient: white_ambient(BACKDROP_AMBIENT),
            lights: [
                white_light(BACKDROP_KEY_DIR, BACKDROP_KEY_LIGHT),
                white_light(BACKDROP_FILL_DIR, BACKDROP_FILL_LIGHT),
            ],
        },
        point_style: PointStyle {
            color: hex_to_linear(BACKDROP_PARTICLE_COLOR),
            opacity: BACKDROP_PARTICLE_OPACITY,
            size: point_size,
        },
        stars,
        rng,
        slot: ModelSlot::default(),
        model_mesh: None,
    }));
    frame::start_loop(scene.clone());

    // Particles render on their own until the model arrives
    scene.borrow_mut().slot.begin_loading();
    let started = Instant::now();
    log::info!("[model] loading {}", path);
    let loaded = asset::load_model(&path).await;
    let settled = scene.borrow_mut().attach_model(loaded);
    match settled {
        Ok(p) => log::info!(
            "[model] loaded {} in {:?} (scale {:.3})",
            path,
            started.elapsed(),
            p.scale
        ),
        Err(e) => log::error!("[model] GLB load error: {}", e),
    }
    Ok(())
}

impl FrameContext for ModelScene {
    fn frame(&mut self, now_ms: f64) {
        let (w, h) = (self.canvas.width(), self.canvas.height());
        self.camera.set_viewport(w, h);
        self.gpu.resize_if_needed(w, h);

        self.slot.step();
        self.stars.step(now_ms, &mut self.rng);

        if let (Some(mesh), Some(model)) = (self.model_mesh.as_mut(), self.slot.transform()) {
            let instance = MeshInstance {
                model: model.to_cols_array_2d(),
                color: [1.0, 1.0, 1.0, 1.0],
                emissive: [0.0; 4],
                // factors come from the file's materials
                material: [1.0, 1.0, 0.0, 0.0],
            };
            self.gpu.write_instances(mesh, &[instance]);
        }

        let frame = SceneFrame {
            camera: &self.camera,
            lighting: &self.lighting,
            points: self.stars.positions(),
            point_style: self.point_style,
            meshes: self.model_mesh.as_slice(),
        };
        if let Err(e) = self.gpu.render(&frame) {
            log::error!("[model] render error: {:?}", e);
        }
    }
}
