/// Convenience result type used across moodwave.
pub type MoodwaveResult<T> = Result<T, MoodwaveError>;

/// Top-level error taxonomy used by the visualization pipeline.
#[derive(thiserror::Error, Debug)]
pub enum MoodwaveError {
    /// Invalid configuration or caller-provided values.
    #[error("validation error: {0}")]
    Validation(String),

    /// The mood dataset could not be read or has a malformed structure.
    #[error("data error: {0}")]
    Data(String),

    /// Errors while building or sampling the reveal schedule.
    #[error("animation error: {0}")]
    Animation(String),

    /// Errors while serializing or rasterizing the drawing surface.
    #[error("render error: {0}")]
    Render(String),

    /// Errors when serializing or deserializing data structures.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl MoodwaveError {
    /// Build a [`MoodwaveError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`MoodwaveError::Data`] value.
    pub fn data(msg: impl Into<String>) -> Self {
        Self::Data(msg.into())
    }

    /// Build a [`MoodwaveError::Animation`] value.
    pub fn animation(msg: impl Into<String>) -> Self {
        Self::Animation(msg.into())
    }

    /// Build a [`MoodwaveError::Render`] value.
    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render(msg.into())
    }

    /// Build a [`MoodwaveError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
