/// Convenience result type used across inkscribe.
pub type InkscribeResult<T> = Result<T, InkscribeError>;

/// Top-level error taxonomy used by the outer surfaces of the engine.
///
/// The stroke core (variation, interpolation, timing, draw compilation) never fails; it clamps.
/// Errors only come from decoding inputs and from the raster backend.
#[derive(thiserror::Error, Debug)]
pub enum InkscribeError {
    /// Invalid user-provided data (canvas sizes, seek targets, speeds).
    #[error("validation error: {0}")]
    Validation(String),

    /// Malformed glyph library data.
    #[error("glyph error: {0}")]
    Glyph(String),

    /// Errors raised by playback session operations.
    #[error("playback error: {0}")]
    Playback(String),

    /// Errors while rasterizing a frame plan.
    #[error("render error: {0}")]
    Render(String),

    /// Errors when serializing or deserializing data structures.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl InkscribeError {
    /// Build an [`InkscribeError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build an [`InkscribeError::Glyph`] value.
    pub fn glyph(msg: impl Into<String>) -> Self {
        Self::Glyph(msg.into())
    }

    /// Build an [`InkscribeError::Playback`] value.
    pub fn playback(msg: impl Into<String>) -> Self {
        Self::Playback(msg.into())
    }

    /// Build an [`InkscribeError::Render`] value.
    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render(msg.into())
    }

    /// Build an [`InkscribeError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

impl From<serde_json::Error> for InkscribeError {
    fn from(e: serde_json::Error) -> Self {
        Self::serde(e.to_string())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
