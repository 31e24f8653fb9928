//! Application Errors

use wasm_bindgen::JsValue;

/// Alert shown when the position request fails
pub const POSITION_MESSAGE: &str = "Could not get your position";
/// Alert shown when the form values are rejected
pub const INVALID_INPUT_MESSAGE: &str = "Inputs have to be a positive number";

pub type AppResult<T> = Result<T, AppError>;

#[derive(Debug, Clone, PartialEq)]
pub enum AppError {
    /// Geolocation denied, unsupported or failed
    PositionUnavailable(String),
    /// Form values rejected by validation
    InvalidInput(String),
    /// Map used before it was initialized
    MapNotReady,
    /// Exception thrown across the JS bindings
    Js(String),
    /// Malformed runtime configuration
    Config(String),
}

impl AppError {
    /// Text for the blocking alert, if this error is shown to the user
    pub fn user_message(&self) -> Option<&'static str> {
        match self {
            AppError::PositionUnavailable(_) => Some(POSITION_MESSAGE),
            AppError::InvalidInput(_) => Some(INVALID_INPUT_MESSAGE),
            AppError::MapNotReady | AppError::Js(_) | AppError::Config(_) => None,
        }
    }
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AppError::PositionUnavailable(msg) => write!(f, "Position unavailable: {}", msg),
            AppError::InvalidInput(msg) => write!(f, "Invalid input: {}", msg),
            AppError::MapNotReady => write!(f, "Map is not initialized"),
            AppError::Js(msg) => write!(f, "JavaScript error: {}", msg),
            AppError::Config(msg) => write!(f, "Config error: {}", msg),
        }
    }
}

impl std::error::Error for AppError {}

impl From<JsValue> for AppError {
    fn from(value: JsValue) -> Self {
        AppError::Js(describe_js(&value))
    }
}

/// Best-effort text for a thrown JS value (`Error.message`, string, or debug form)
pub fn describe_js(value: &JsValue) -> String {
    if let Some(text) = value.as_string() {
        return text;
    }
    js_sys::Reflect::get(value, &JsValue::from_str("message"))
        .ok()
        .and_then(|message| message.as_string())
        .unwrap_or_else(|| format!("{:?}", value))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_messages() {
        assert_eq!(
            AppError::PositionUnavailable("denied".into()).user_message(),
            Some("Could not get your position")
        );
        assert_eq!(
            AppError::InvalidInput("distance".into()).user_message(),
            Some("Inputs have to be a positive number")
        );
        assert_eq!(AppError::MapNotReady.user_message(), None);
    }

    #[test]
    fn test_display() {
        let err = AppError::InvalidInput("distance must be positive".into());
        assert_eq!(err.to_string(), "Invalid input: distance must be positive");
    }
}
