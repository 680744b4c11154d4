//! Error conversions at the JS boundary

use wasm_bindgen::JsValue;

use crate::classifier::{ConfigError, LandmarkError, UnknownGesture};

impl From<LandmarkError> for JsValue {
    fn from(err: LandmarkError) -> Self {
        JsValue::from_str(&format!("Invalid hand landmarks: {}", err))
    }
}

impl From<ConfigError> for JsValue {
    fn from(err: ConfigError) -> Self {
        JsValue::from_str(&format!("Invalid gesture config: {}", err))
    }
}

impl From<UnknownGesture> for JsValue {
    fn from(err: UnknownGesture) -> Self {
        JsValue::from_str(&err.to_string())
    }
}
