//! Validation error types
//!
//! Every configuration type reports *why* it is invalid through
//! [`ValidationError`]. The boolean `validate()` entry points collapse these
//! into a single pass/fail signal and log the reason.

use thiserror::Error;

/// Result type for configuration checks
pub type ValidationResult = Result<(), ValidationError>;

/// Reasons a configuration can fail validation
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    // ─────────────────────────────────────────────────────────────────────────────
    // Field-level errors
    // ─────────────────────────────────────────────────────────────────────────────
    /// A single field holds a value outside its legal domain
    #[error("invalid {field}: {reason}")]
    InvalidField { field: String, reason: String },

    // ─────────────────────────────────────────────────────────────────────────────
    // Backend selection errors
    // ─────────────────────────────────────────────────────────────────────────────
    /// No backend has its model path populated
    #[error("no backend configured, provide a model for one of: {candidates}")]
    NoBackendSelected { candidates: String },

    /// More than one backend has its model path populated
    #[error("ambiguous backend selection, more than one model configured: {}", .0.join(", "))]
    AmbiguousSelection(Vec<String>),

    /// The explicit backend knob names a backend that does not exist
    #[error("unknown backend '{0}'")]
    UnknownBackend(String),

    // ─────────────────────────────────────────────────────────────────────────────
    // Backend-internal errors
    // ─────────────────────────────────────────────────────────────────────────────
    /// The selected backend rejected its own parameters
    #[error("{backend} parameters are invalid: {source}")]
    Backend {
        backend: String,
        #[source]
        source: Box<ValidationError>,
    },
}

impl ValidationError {
    pub(crate) fn invalid(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidField {
            field: field.into(),
            reason: reason.into(),
        }
    }

    pub(crate) fn in_backend(backend: impl Into<String>, source: ValidationError) -> Self {
        Self::Backend {
            backend: backend.into(),
            source: Box::new(source),
        }
    }
}

/// Fails unless `value > 0`
pub(crate) fn require_positive_i32(field: &str, value: i32) -> ValidationResult {
    if value <= 0 {
        return Err(ValidationError::invalid(
            field,
            format!("must be greater than 0, got {value}"),
        ));
    }
    Ok(())
}

/// Fails unless `value` is finite and `> 0.0`
pub(crate) fn require_positive_f32(field: &str, value: f32) -> ValidationResult {
    if !value.is_finite() || value <= 0.0 {
        return Err(ValidationError::invalid(
            field,
            format!("must be greater than 0, got {value}"),
        ));
    }
    Ok(())
}

/// Fails when the string is empty or whitespace-only
pub(crate) fn require_non_empty(field: &str, value: &str) -> ValidationResult {
    if value.trim().is_empty() {
        return Err(ValidationError::invalid(field, "must not be empty"));
    }
    Ok(())
}
