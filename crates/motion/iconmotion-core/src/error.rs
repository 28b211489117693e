//! Error types for the strict parsing and loading paths.
//!
//! Resolution itself never fails; these errors only surface from `FromStr`
//! impls and config loading, for callers that want to validate input up front.

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
#[non_exhaustive]
pub enum MotionError {
    #[error("unknown motion type: {0:?}")]
    UnknownMotionType(String),

    #[error("unknown trigger mode: {0:?}")]
    UnknownTrigger(String),

    #[error("ambient config json: {0}")]
    ConfigJson(String),

    #[error("invalid ambient config: {field} must be finite and > 0, got {value}")]
    InvalidGeometry { field: &'static str, value: f32 },
}

impl From<serde_json::Error> for MotionError {
    fn from(err: serde_json::Error) -> Self {
        MotionError::ConfigJson(err.to_string())
    }
}
