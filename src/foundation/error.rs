/// Convenience result type used across uilint.
pub type LintResult<T> = Result<T, LintError>;

/// Top-level error taxonomy used by session-level APIs.
///
/// Checks themselves never fail; only constructing a session (and I/O at the crate boundary)
/// can produce one of these.
#[derive(thiserror::Error, Debug)]
pub enum LintError {
    /// Inconsistent node list or session inputs.
    #[error("validation error: {0}")]
    Validation(String),

    /// The scene could not be resolved into a node list (for example, a missing root).
    #[error("scene error: {0}")]
    Scene(String),

    /// Raster snapshot could not be loaded or decoded.
    #[error("snapshot error: {0}")]
    Snapshot(String),

    /// Invalid configuration file or value.
    #[error("config error: {0}")]
    Config(String),

    /// Errors when serializing or deserializing data structures.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl LintError {
    /// Build a [`LintError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`LintError::Scene`] value.
    pub fn scene(msg: impl Into<String>) -> Self {
        Self::Scene(msg.into())
    }

    /// Build a [`LintError::Snapshot`] value.
    pub fn snapshot(msg: impl Into<String>) -> Self {
        Self::Snapshot(msg.into())
    }

    /// Build a [`LintError::Config`] value.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Build a [`LintError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
