/// Convenience result type used across pawtrail.
pub type PawtrailResult<T> = Result<T, PawtrailError>;

/// Top-level error taxonomy used by crate APIs.
#[derive(thiserror::Error, Debug)]
pub enum PawtrailError {
    /// Invalid user-provided or domain data.
    #[error("validation error: {0}")]
    Validation(String),

    /// Errors while laying out or rasterizing a recap image.
    #[error("render error: {0}")]
    Render(String),

    /// Errors from document or object store backends.
    #[error("storage error: {0}")]
    Storage(String),

    /// A third-party HTTP service failed or returned an unexpected shape.
    #[error("upstream error: {0}")]
    Upstream(String),

    /// A requested upstream host is not on the configured allow-list.
    #[error("forbidden: {0}")]
    Forbidden(String),

    /// A referenced record or object does not exist.
    #[error("not found: {0}")]
    NotFound(String),

    /// Errors when serializing or deserializing data structures.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl PawtrailError {
    /// Build a [`PawtrailError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`PawtrailError::Render`] value.
    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render(msg.into())
    }

    /// Build a [`PawtrailError::Storage`] value.
    pub fn storage(msg: impl Into<String>) -> Self {
        Self::Storage(msg.into())
    }

    /// Build a [`PawtrailError::Upstream`] value.
    pub fn upstream(msg: impl Into<String>) -> Self {
        Self::Upstream(msg.into())
    }

    /// Build a [`PawtrailError::Forbidden`] value.
    pub fn forbidden(msg: impl Into<String>) -> Self {
        Self::Forbidden(msg.into())
    }

    /// Build a [`PawtrailError::NotFound`] value.
    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }

    /// Build a [`PawtrailError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
