/// Convenience result type used across folio.
pub type FolioResult<T> = Result<T, FolioError>;

/// Top-level error taxonomy for the fallible surfaces of the crate.
///
/// The placement planner itself never fails; errors only come from validating
/// user-provided geometry or configuration.
#[derive(thiserror::Error, Debug)]
pub enum FolioError {
    /// Invalid page geometry or planner parameters.
    #[error("validation error: {0}")]
    Validation(String),

    /// Invalid configuration values.
    #[error("config error: {0}")]
    Config(String),

    /// Errors when serializing or deserializing data structures.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl FolioError {
    /// Build a [`FolioError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`FolioError::Config`] value.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Build a [`FolioError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

impl From<serde_json::Error> for FolioError {
    fn from(err: serde_json::Error) -> Self {
        Self::serde(err.to_string())
    }
}

pub(crate) fn ensure_finite_non_negative(value: f64, field: &str) -> FolioResult<()> {
    if !value.is_finite() || value < 0.0 {
        return Err(FolioError::validation(format!(
            "{field} must be finite and >= 0"
        )));
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
