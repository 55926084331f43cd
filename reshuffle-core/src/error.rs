//! Error types for Reshuffle operations.
//!
//! Nothing here is fatal to a run: configuration errors degrade to default
//! substitutions and store errors degrade to a smaller, explicitly reported
//! result set.

use crate::AccountId;
use thiserror::Error;

/// Configuration errors.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Missing required configuration field: {field}")]
    MissingRequired { field: String },

    #[error("Invalid value for {field}: {value} - {reason}")]
    InvalidValue {
        field: String,
        value: String,
        reason: String,
    },
}

/// Account store errors.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum StorageError {
    #[error("Account not found: {id}")]
    AccountNotFound { id: AccountId },

    #[error("Insert failed for account {id}: {reason}")]
    InsertFailed { id: AccountId, reason: String },

    #[error("Assignment update failed for account {id}: {reason}")]
    AssignFailed { id: AccountId, reason: String },

    #[error("Store lock poisoned")]
    LockPoisoned,
}

/// Master error type for all Reshuffle errors.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ReshuffleError {
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),
}

/// Result type alias for Reshuffle operations.
pub type ReshuffleResult<T> = Result<T, ReshuffleError>;

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    #[test]
    fn test_error_display() {
        let err = ConfigError::InvalidValue {
            field: "overdue-days".to_string(),
            value: "-3".to_string(),
            reason: "threshold must be positive, using 90".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Invalid value for overdue-days: -3 - threshold must be positive, using 90"
        );
    }

    #[test]
    fn test_error_conversion() {
        let id = Uuid::now_v7();
        let err: ReshuffleError = StorageError::AccountNotFound { id }.into();
        assert!(matches!(err, ReshuffleError::Storage(_)));
    }
}
