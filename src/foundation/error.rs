/// Convenience result type used across the crate.
pub type MountainsResult<T> = Result<T, MountainsError>;

/// Top-level error taxonomy used by the generator APIs.
#[derive(thiserror::Error, Debug)]
pub enum MountainsError {
    /// Invalid user-provided configuration.
    #[error("validation error: {0}")]
    Validation(String),

    /// A color string that is not six hex digits. Only returned by strict parsing; a render run
    /// falls back to black instead.
    #[error("color error: {0}")]
    Color(String),

    /// The raster sink failed to encode or persist the canvas.
    #[error("encode error: {0}")]
    Encode(String),

    /// Errors when serializing or deserializing configuration.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl MountainsError {
    /// Build a [`MountainsError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`MountainsError::Color`] value.
    pub fn color(msg: impl Into<String>) -> Self {
        Self::Color(msg.into())
    }

    /// Build a [`MountainsError::Encode`] value.
    pub fn encode(msg: impl Into<String>) -> Self {
        Self::Encode(msg.into())
    }

    /// Build a [`MountainsError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
