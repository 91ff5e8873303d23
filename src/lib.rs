#![cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

mod asset;
mod camera;
mod color;
mod constants;
mod core;
mod dom;
mod error;
mod events;
mod frame;
mod guard;
mod input;
mod render;
mod scenes;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("site-backdrops ready");
    Ok(())
}

fn to_js(e: anyhow::Error) -> JsValue {
    log::error!("install error: {:?}", e);
    JsValue::from_str(&e.to_string())
}

/// Interactive field of floating spheres. A no-op when it is already on the page.
#[wasm_bindgen]
pub fn install_sphere_field() -> Result<(), JsValue> {
    scenes::spheres::install().map_err(to_js)
}

/// 2D canvas particle wash for pages that cannot host the model backdrop.
///
/// Refuses to install while the model backdrop canvas exists.
#[wasm_bindgen]
pub fn install_particle_fallback() -> Result<(), JsValue> {
    scenes::fallback::install().map_err(to_js)
}

/// Rotating GLB model over a drifting particle field.
///
/// `asset_path` defaults to the bundled model. Load failures are logged and
/// leave the particles running on their own.
#[wasm_bindgen]
pub fn install_model_backdrop(asset_path: Option<String>) -> Result<(), JsValue> {
    scenes::model::install(asset_path).map_err(to_js)
}
