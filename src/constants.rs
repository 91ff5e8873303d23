// Tuning constants for the three background modules.
// Values are in world units unless noted otherwise; colours are sRGB hex and
// get converted to linear before they reach a shader.

// Element ids used for duplicate-install detection
pub const MODEL_CANVAS_ID: &str = "model-background";
pub const FALLBACK_CANVAS_ID: &str = "fallback-bg";
pub const SPHERE_CANVAS_ID: &str = "balls-canvas";

// Ids whose presence blocks each module's install
pub const MODEL_GUARD_IDS: [&str; 1] = [MODEL_CANVAS_ID];
pub const FALLBACK_GUARD_IDS: [&str; 2] = [MODEL_CANVAS_ID, FALLBACK_CANVAS_ID];
pub const SPHERE_GUARD_IDS: [&str; 1] = [SPHERE_CANVAS_ID];

// Canvas backing store
pub const MAX_PIXEL_RATIO: f64 = 2.0;
pub const MSAA_SAMPLE_COUNT: u32 = 4; // both 3D canvases render antialiased

// ---------------- Sphere field ----------------
pub const SPHERE_COUNT: usize = 40;
pub const SPHERE_RADIUS: f32 = 3.0;
pub const SPHERE_SEGMENTS: u32 = 32;

// Placement ranges: x/y are centred spans, z is [Z_NEAR - Z_DEPTH, Z_NEAR)
pub const SPHERE_SPAN_X: f32 = 120.0;
pub const SPHERE_SPAN_Y: f32 = 70.0;
pub const SPHERE_Z_NEAR: f32 = -10.0;
pub const SPHERE_Z_DEPTH: f32 = 80.0;

// Per-frame motion
pub const SPHERE_BOB_FREQ: f64 = 0.0005; // radians per ms
pub const SPHERE_BOB_STEP: f32 = 0.02;
pub const SPHERE_SPIN_STEP: f32 = 0.002;

// Materials
pub const SPHERE_BASE_COLOR: u32 = 0x222222;
pub const SPHERE_HOVER_EMISSIVE: u32 = 0x222222;
pub const SPHERE_FLASH_COLOR: u32 = 0x66a3ff;
pub const SPHERE_FLASH_SCALE: f32 = 1.3;
pub const SPHERE_FLASH_MS: f64 = 400.0;
pub const SPHERE_METALNESS: f32 = 0.3;
pub const SPHERE_ROUGHNESS: f32 = 0.4;

// Camera + lights
pub const SPHERE_CAMERA_FOV_DEG: f32 = 60.0;
pub const SPHERE_CAMERA_EYE: [f32; 3] = [0.0, 0.0, 60.0];
pub const SPHERE_AMBIENT: f32 = 0.6;
pub const SPHERE_SUN: f32 = 0.8;
pub const SPHERE_SUN_DIR: [f32; 3] = [1.0, 1.0, 1.0];

// ---------------- Particle fallback ----------------
pub const FALLBACK_PARTICLE_COUNT: usize = 160;
pub const FALLBACK_MARGIN: f32 = 10.0; // css px beyond each edge before wrapping
pub const FALLBACK_RADIUS_MIN: f32 = 0.6;
pub const FALLBACK_RADIUS_SPAN: f32 = 1.8;
pub const FALLBACK_SPEED_MIN: f32 = 0.2;
pub const FALLBACK_SPEED_SPAN: f32 = 0.8;
pub const FALLBACK_VERTICAL_DAMP: f32 = 0.6;
pub const FALLBACK_TURN_STEP: f32 = 0.003;
pub const FALLBACK_WASH_TOP: &str = "#14171b";
pub const FALLBACK_WASH_BOTTOM: &str = "#0e1114";
pub const FALLBACK_PARTICLE_FILL: &str = "rgba(126,166,255,0.35)";

// ---------------- Model backdrop ----------------
pub const DEFAULT_MODEL_PATH: &str = "assets/models/base_basic_shaded.glb";
pub const MODEL_TARGET_SIZE: f32 = 3.5;
pub const MODEL_Y_OFFSET: f32 = -0.2;
pub const MODEL_SPIN_STEP: f32 = 0.0025;

pub const BACKDROP_PARTICLE_COUNT: usize = 1200;
pub const BACKDROP_SPAN_X: f32 = 60.0;
pub const BACKDROP_SPAN_Y: f32 = 35.0;
pub const BACKDROP_Z_FAR_NEAR: f32 = -10.0; // closest z a recycled particle can spawn at
pub const BACKDROP_Z_DEPTH: f32 = 80.0;
pub const BACKDROP_Z_RESET: f32 = -8.0; // crossing this sends a particle back out
pub const BACKDROP_SPEED_MIN: f32 = 0.02;
pub const BACKDROP_SPEED_SPAN: f32 = 0.08;
pub const BACKDROP_SPEED_SCALE: f32 = 0.01;
pub const BACKDROP_DRIFT_FREQ_X: f64 = 0.0005;
pub const BACKDROP_DRIFT_FREQ_Y: f64 = 0.0004;
pub const BACKDROP_DRIFT_AMP_X: f32 = 0.002;
pub const BACKDROP_DRIFT_AMP_Y: f32 = 0.0015;
pub const BACKDROP_PARTICLE_COLOR: u32 = 0x7ea6ff;
pub const BACKDROP_PARTICLE_SIZE: f32 = 0.06;
pub const BACKDROP_PARTICLE_OPACITY: f32 = 0.9;

pub const BACKDROP_CLEAR_COLOR: u32 = 0x121417;
pub const BACKDROP_CAMERA_FOV_DEG: f32 = 55.0;
pub const BACKDROP_CAMERA_EYE: [f32; 3] = [0.0, 0.5, 6.0];
pub const BACKDROP_AMBIENT: f32 = 0.8;
pub const BACKDROP_KEY_LIGHT: f32 = 0.8;
pub const BACKDROP_KEY_DIR: [f32; 3] = [2.0, 3.0, 4.0];
pub const BACKDROP_FILL_LIGHT: f32 = 0.4;
pub const BACKDROP_FILL_DIR: [f32; 3] = [-3.0, -2.0, -2.0];

// Shared projection planes
pub const CAMERA_ZNEAR: f32 = 0.1;
pub const CAMERA_ZFAR: f32 = 1000.0;
