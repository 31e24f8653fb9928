//! Geolocation
//!
//! One-shot request for the device position.

use js_sys::{Promise, Reflect};
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;

use crate::error::{describe_js, AppError, AppResult};
use crate::models::Coords;

/// Ask the browser for the current position once.
///
/// Permission denial, missing `navigator.geolocation` and host timeouts all
/// end up as `PositionUnavailable`.
pub async fn current_position() -> AppResult<Coords> {
    let window = web_sys::window()
        .ok_or_else(|| AppError::PositionUnavailable("no window".to_string()))?;
    let navigator = window.navigator();

    let supported = Reflect::has(&navigator, &JsValue::from_str("geolocation")).unwrap_or(false);
    if !supported {
        return Err(AppError::PositionUnavailable("geolocation unsupported".to_string()));
    }
    let geolocation = navigator
        .geolocation()
        .map_err(|e| AppError::PositionUnavailable(describe_js(&e)))?;

    let promise = Promise::new(&mut |resolve, reject| {
        if let Err(e) = geolocation.get_current_position_with_error_callback(&resolve, Some(&reject)) {
            let _ = reject.call1(&JsValue::NULL, &e);
        }
    });

    let position = JsFuture::from(promise)
        .await
        .map_err(|e| AppError::PositionUnavailable(describe_js(&e)))?;
    coords_of(&position)
}

/// `position.coords.{latitude,longitude}`
fn coords_of(position: &JsValue) -> AppResult<Coords> {
    let coords = Reflect::get(position, &JsValue::from_str("coords"))?;
    let field = |name: &str| -> AppResult<f64> {
        Reflect::get(&coords, &JsValue::from_str(name))?
            .as_f64()
            .ok_or_else(|| AppError::PositionUnavailable(format!("missing {}", name)))
    };
    Ok(Coords::new(field("latitude")?, field("longitude")?))
}
