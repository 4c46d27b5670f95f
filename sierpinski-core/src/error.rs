//! Error types shared by the rasterizers and the configuration layer.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum FractalError {
    #[error("invalid argument `{name}`: {reason}")]
    InvalidArgument { name: &'static str, reason: String },

    #[error("failed to parse fractal config: {0}")]
    Config(#[from] serde_json::Error),
}

impl FractalError {
    pub fn invalid_argument(name: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidArgument {
            name,
            reason: reason.into(),
        }
    }

    /// True for out-of-range arguments (as opposed to malformed config input).
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, Self::InvalidArgument { .. })
    }
}
