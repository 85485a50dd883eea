/// Convenience result type used across Rxivisual.
pub type RxivisualResult<T> = Result<T, RxivisualError>;

/// Error taxonomy for the fallible edges of the deck engine.
///
/// The transform itself never fails; only configuration and outline loading do.
#[derive(thiserror::Error, Debug)]
pub enum RxivisualError {
    /// Invalid user-provided configuration or outline data.
    #[error("validation error: {0}")]
    Validation(String),

    /// Errors when serializing or deserializing data structures.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl RxivisualError {
    /// Build a [`RxivisualError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`RxivisualError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
