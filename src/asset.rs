use crate::core::{mesh_from_glb, MeshData};
use crate::error::LoadError;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys as web;

fn fetch_error(path: &str, e: JsValue) -> LoadError {
    LoadError::Fetch {
        path: path.to_string(),
        reason: format!("{:?}", e),
    }
}

/// GET `path` relative to the page and return the body bytes.
pub async fn fetch_bytes(path: &str) -> Result<Vec<u8>, LoadError> {
    let window = web::window().ok_or_else(|| LoadError::Fetch {
        path: path.to_string(),
        reason: "no window".to_string(),
    })?;
    let resp: web::Response = JsFuture::from(window.fetch_with_str(path))
        .await
        .and_then(|v| v.dyn_into())
        .map_err(|e| fetch_error(path, e))?;
    if !resp.ok() {
        return Err(LoadError::Status {
            path: path.to_string(),
            status: resp.status(),
        });
    }
    let body = resp.array_buffer().map_err(|e| fetch_error(path, e))?;
    let buf = JsFuture::from(body)
        .await
        .map_err(|e| fetch_error(path, e))?;
    Ok(js_sys::Uint8Array::new(&buf).to_vec())
}

pub async fn load_model(path: &str) -> Result<MeshData, LoadError> {
    let bytes = fetch_bytes(path).await?;
    log::debug!("[model] fetched {} bytes from {}", bytes.len(), path);
    mesh_from_glb(&bytes)
}
