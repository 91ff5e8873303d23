use super::{white_ambient, white_light, NO_POINTS};
use crate::camera::Camera;
use crate::constants::*;
use crate::core::spheres::Sphere;
use crate::core::{uv_sphere, SphereField};
use crate::dom::{self, CanvasLayer};
use crate::events;
use crate::events::pointer::{wire_pointer_handlers, PointerWiring};
use crate::frame::{self, FrameContext};
use crate::input::PointerState;
use crate::render::{
    DirectionalLight, GpuMesh, GpuState, Lighting, MeshInstance, SceneFrame, SurfaceOptions,
};
use glam::{Quat, Vec3};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

struct SphereScene {
    canvas: web::HtmlCanvasElement,
    gpu: GpuState,
    mesh: GpuMesh,
    camera: Camera,
    lighting: Lighting,
    field: Rc<RefCell<SphereField>>,
    pointer: Rc<RefCell<PointerState>>,
    instances: Vec<MeshInstance>,
}

pub fn install() -> anyhow::Result<()> {
    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;
    let layer = CanvasLayer {
        interactive: true,
        prepend: false,
    };
    let Some(canvas) = dom::claim_canvas(&document, SPHERE_CANVAS_ID, &SPHERE_GUARD_IDS, layer)?
    else {
        return Ok(());
    };

    let canvas_resize = canvas.clone();
    events::wire_resize(move || dom::sync_canvas_backing_size(&canvas_resize));

    let mut rng = StdRng::from_entropy();
    let field = Rc::new(RefCell::new(SphereField::new(SPHERE_COUNT, &mut rng)));
    let pointer = Rc::new(RefCell::new(PointerState::default()));
    wire_pointer_handlers(PointerWiring {
        canvas: canvas.clone(),
        pointer: pointer.clone(),
        field: field.clone(),
    });

    spawn_local(async move {
        if let Err(e) = start(canvas, field, pointer).await {
            log::error!("[spheres] init error: {:?}", e);
        }
    });
    Ok(())
}

async fn start(
    canvas: web::HtmlCanvasElement,
    field: Rc<RefCell<SphereField>>,
    pointer: Rc<RefCell<PointerState>>,
) -> anyhow::Result<()> {
    let gpu = GpuState::new(
        &canvas,
        SurfaceOptions {
            clear_color: wgpu::Color::TRANSPARENT,
            transparent: true,
            point_capacity: 1,
        },
    )
    .await?;
    let geometry = uv_sphere(SPHERE_RADIUS, SPHERE_SEGMENTS, SPHERE_SEGMENTS);
    let mesh = gpu.create_mesh("sphere", &geometry, SPHERE_COUNT as u32);
    let camera = Camera::looking_forward(
        Vec3::from(SPHERE_CAMERA_EYE),
        SPHERE_CAMERA_FOV_DEG,
        CAMERA_ZNEAR,
        CAMERA_ZFAR,
    );
    let lighting = Lighting {
        ambient: white_ambient(SPHERE_AMBIENT),
        lights: [white_light(SPHERE_SUN_DIR, SPHERE_SUN), DirectionalLight::OFF],
    };
    log::info!("[spheres] {} spheres installed", field.borrow().len());

    frame::start_loop(Rc::new(RefCell::new(SphereScene {
        canvas,
        gpu,
        mesh,
        camera,
        lighting,
        field,
        pointer,
        instances: Vec::with_capacity(SPHERE_COUNT),
    })));
    Ok(())
}

fn sphere_instance(s: &Sphere) -> MeshInstance {
    let model = glam::Mat4::from_scale_rotation_translation(
        Vec3::splat(s.scale),
        Quat::from_rotation_y(s.rotation_y),
        s.position,
    );
    MeshInstance {
        model: model.to_cols_array_2d(),
        color: [s.color[0], s.color[1], s.color[2], 1.0],
        emissive: [s.emissive[0], s.emissive[1], s.emissive[2], 0.0],
        material: [SPHERE_METALNESS, SPHERE_ROUGHNESS, 0.0, 0.0],
    }
}

impl FrameContext for SphereScene {
    fn frame(&mut self, now_ms: f64) {
        let (w, h) = (self.canvas.width(), self.canvas.height());
        self.camera.set_viewport(w, h);
        self.gpu.resize_if_needed(w, h);

        {
            let mut field = self.field.borrow_mut();
            field.animate(now_ms);

            field.update_hover(&mut self.pointer.borrow_mut(), &self.camera);

            self.instances.clear();
            self.instances
                .extend(field.spheres().iter().map(sphere_instance));
        }
        self.gpu.write_instances(&mut self.mesh, &self.instances);

        let frame = SceneFrame {
            camera: &self.camera,
            lighting: &self.lighting,
            points: &[],
            point_style: NO_POINTS,
            meshes: std::slice::from_ref(&self.mesh),
        };
        if let Err(e) = self.gpu.render(&frame) {
            log::error!("[spheres] render error: {:?}", e);
        }
    }
}
