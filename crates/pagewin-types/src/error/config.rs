//! Configuration-related errors.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use validator::ValidationErrors;

/// Errors that can occur while building a pagination config.
#[derive(Debug, Clone, Error, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "type", content = "details")]
pub enum ConfigError {
    /// Config blob parse error (JSON)
    #[error("Config parse error: {message}")]
    ParseError {
        /// Description of the parse failure
        message: String,
    },

    /// Config validation error (invalid values)
    #[error("Config validation error for {field}: {message}")]
    ValidationError {
        /// Name of the field that failed validation
        field: String,
        /// Description of the validation failure
        message: String,
    },
}

impl ConfigError {
    /// Create a parse error from a serde_json error.
    pub fn from_json_error(e: &serde_json::Error) -> Self {
        Self::ParseError { message: e.to_string() }
    }

    /// Collapse validator output into the first failing field.
    ///
    /// Fields are visited in name order so the reported field is stable.
    pub fn from_validation_errors(errors: &ValidationErrors) -> Self {
        let mut fields: Vec<_> = errors.field_errors().into_iter().collect();
        fields.sort_by(|a, b| a.0.cmp(&b.0));

        let Some((field, errs)) = fields.into_iter().next() else {
            return Self::ValidationError {
                field: "config".to_string(),
                message: errors.to_string(),
            };
        };

        let message = errs
            .iter()
            .map(|e| e.message.as_ref().map_or_else(|| e.code.to_string(), ToString::to_string))
            .collect::<Vec<_>>()
            .join(", ");

        Self::ValidationError { field: field.to_string(), message }
    }
}
