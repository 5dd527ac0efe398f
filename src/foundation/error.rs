/// Convenience result type used across chartburst.
pub type ChartResult<T> = Result<T, ChartError>;

/// Top-level error taxonomy used by engine APIs.
///
/// Only construction and offline helpers (tuning load, snapshot rasterization) return errors.
/// Runtime anomalies during animation degrade silently.
#[derive(thiserror::Error, Debug)]
pub enum ChartError {
    /// A required argument was missing or unusable.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Invalid user-provided tuning or option data.
    #[error("validation error: {0}")]
    Validation(String),

    /// Errors while producing a snapshot image.
    #[error("render error: {0}")]
    Render(String),

    /// Errors when serializing or deserializing data structures.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl ChartError {
    /// Build a [`ChartError::InvalidArgument`] value.
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }

    /// Build a [`ChartError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`ChartError::Render`] value.
    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render(msg.into())
    }

    /// Build a [`ChartError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

impl From<serde_json::Error> for ChartError {
    fn from(value: serde_json::Error) -> Self {
        Self::Serde(value.to_string())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
