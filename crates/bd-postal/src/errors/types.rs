//! Error type definitions for the postal query service

use thiserror::Error;

/// Top-level application error type
///
/// This enum represents all possible errors that can occur in the
/// application. It uses `thiserror` to provide automatic error trait
/// implementations and proper error chaining.
#[derive(Error, Debug)]
pub enum AppError {
    /// Request validation failures surfaced at the web boundary
    #[error("Validation error: {message}")]
    Validation { message: String },

    /// A hierarchical lookup target is absent from the division tree.
    ///
    /// The display form is the wire message ("Division not found",
    /// "Zila not found"), so `resource` carries the capitalized noun only.
    #[error("{resource} not found")]
    NotFound { resource: String },

    /// Dataset file missing or malformed at startup
    #[error("Dataset error: {path}: {message}")]
    Dataset { path: String, message: String },

    /// Configuration errors
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    /// Generic internal errors
    #[error("Internal error: {message}")]
    Internal { message: String },
}

impl AppError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    pub fn not_found(resource: impl Into<String>) -> Self {
        Self::NotFound {
            resource: resource.into(),
        }
    }

    pub fn dataset(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Dataset {
            path: path.into(),
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_display_matches_wire_messages() {
        assert_eq!(
            AppError::not_found("Division").to_string(),
            "Division not found"
        );
        assert_eq!(AppError::not_found("Zila").to_string(), "Zila not found");
    }
}
