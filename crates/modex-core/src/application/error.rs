//! Application layer errors.
//!
//! These errors represent failures in orchestration, not business logic.
//! Business logic errors are `DomainError` from `crate::domain`.

use std::path::PathBuf;
use thiserror::Error;

use crate::error::ErrorCategory;

/// Errors that occur during application orchestration.
#[derive(Debug, Error, Clone)]
pub enum ApplicationError {
    /// Target directory is already taken. Raised before anything is written.
    #[error("Project already exists at {path}")]
    ProjectExists { path: PathBuf },

    /// Filesystem operation failed.
    #[error("Filesystem error at {path}: {reason}")]
    FilesystemError { path: PathBuf, reason: String },

    /// The bundled starter archive could not be unpacked.
    #[error("Starter extraction failed: {reason}")]
    ExtractionFailed { reason: String },

    /// The package manager exited non-zero or could not be spawned.
    #[error("{manager} install failed: {reason}")]
    InstallFailed { manager: String, reason: String },

    /// Validation failed (application-level, not domain).
    #[error("Validation failed: {0}")]
    ValidationFailed(String),
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::ProjectExists { path } => vec![
                format!("Directory already exists: {}", path.display()),
                "Choose a different project name".into(),
                "Or remove the existing directory first".into(),
            ],
            Self::FilesystemError { path, .. } => vec![
                format!("Failed to access: {}", path.display()),
                "Check that you have write permissions".into(),
                "Ensure the parent directory exists".into(),
            ],
            Self::ExtractionFailed { .. } => vec![
                "The bundled starter files could not be written".into(),
                "The project directory was still created; add files manually".into(),
            ],
            Self::InstallFailed { manager, .. } => vec![
                format!("Check that {} is installed and on your PATH", manager),
                "Check your network connection".into(),
                "You can re-run the install inside the project directory".into(),
            ],
            _ => vec!["Check the error details above".into()],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::ProjectExists { .. } => ErrorCategory::Conflict,
            Self::FilesystemError { .. }
            | Self::ExtractionFailed { .. }
            | Self::InstallFailed { .. } => ErrorCategory::External,
            Self::ValidationFailed(_) => ErrorCategory::Validation,
        }
    }
}
