//! Error types for coordinate transformations.

use crate::context::ContextKey;
use crate::core::domain::{System, Unit};

/// Result type for transformation operations
pub type TransformResult<T> = Result<T, TransformError>;

/// Error type for transformation operations
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum TransformError {
    #[error("Invalid unit: '{0}' (expected one of rad, deg, hour, dms, hms)")]
    InvalidUnit(String),

    #[error("Unsupported coordinate system: '{0}'")]
    UnsupportedSystem(String),

    #[error("Missing parameter '{key}' required by the {system} system")]
    MissingContextParameter { key: ContextKey, system: System },

    #[error("Value shape does not match unit {unit}: {reason}")]
    UnitMismatch { unit: Unit, reason: String },

    #[error("Batch length mismatch: first coordinate has {left} values, second has {right}")]
    LengthMismatch { left: usize, right: usize },

    #[error("Configuration error: {0}")]
    ConfigurationError(String),
}

impl TransformError {
    /// Shorthand used by the context checks of the router.
    pub fn missing(key: ContextKey, system: System) -> Self {
        TransformError::MissingContextParameter { key, system }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_parameter_names_key_and_system() {
        let err = TransformError::missing(ContextKey::SiderealTime, System::Horary);
        let msg = err.to_string();
        assert!(msg.contains("'TS'"), "{}", msg);
        assert!(msg.contains("horario"), "{}", msg);
    }

    #[test]
    fn test_invalid_unit_message() {
        let err = TransformError::InvalidUnit("grad".to_string());
        assert_eq!(
            err.to_string(),
            "Invalid unit: 'grad' (expected one of rad, deg, hour, dms, hms)"
        );
    }
}
