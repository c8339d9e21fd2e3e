//! Error types for cut-plan compilation and rendering.

use thiserror::Error;

/// Coarse error classification.
///
/// Validation errors come from malformed window configurations, service
/// errors from the optimizer boundary, render errors from a single material
/// group or window card that could not be turned into output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Validation,
    Service,
    Render,
}

/// Main error type for the crate.
#[derive(Debug, Error)]
pub enum PlanError {
    #[error("window {window}: no inner sections configured")]
    NoInnerSections { window: usize },

    #[error("window {window}: missing required field '{field}'")]
    MissingField { window: usize, field: String },

    #[error("window {window}: '{field}' must be positive, got {value}")]
    NonPositive {
        window: usize,
        field: String,
        value: f64,
    },

    #[error("window {window}: mullions present but empty")]
    EmptyMullions { window: usize },

    #[error("no window configurations to compile")]
    NoConfigurations,

    #[error("rod length must be positive and finite, got {value}")]
    InvalidRodLength { value: f64 },

    #[error("material {code}: {message}")]
    MaterialRender { code: String, message: String },

    #[error("company '{company}' not found in catalog")]
    UnknownCompany { company: String },

    #[error("window type '{window_type}' not found for company '{company}'")]
    UnknownWindowType {
        company: String,
        window_type: String,
    },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl PlanError {
    /// Get the classification for this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            PlanError::NoInnerSections { .. }
            | PlanError::MissingField { .. }
            | PlanError::NonPositive { .. }
            | PlanError::EmptyMullions { .. }
            | PlanError::NoConfigurations
            | PlanError::InvalidRodLength { .. } => ErrorKind::Validation,
            PlanError::Json(_) | PlanError::Io(_) => ErrorKind::Service,
            PlanError::MaterialRender { .. }
            | PlanError::UnknownCompany { .. }
            | PlanError::UnknownWindowType { .. } => ErrorKind::Render,
        }
    }
}

/// Result type alias for cut-plan operations.
pub type Result<T> = std::result::Result<T, PlanError>;
