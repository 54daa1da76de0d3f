// ============================================================================
// domain/error.rs - DOMAIN ERROR TYPES
// ============================================================================

use thiserror::Error;

/// Root domain error type.
///
/// All errors are:
/// - Cloneable (for retry logic)
/// - Categorizable (for CLI display)
/// - Actionable (provides suggestions)
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    // ========================================================================
    // Validation Errors (400-level equivalent)
    // ========================================================================
    #[error("module name '{name}' contains no usable characters")]
    UnusableModuleName { name: String },

    #[error("project name must not be empty")]
    EmptyProjectName,

    // ========================================================================
    // Consistency Errors
    // ========================================================================
    #[error("module set has {actual} files, expected {expected}")]
    IncompleteModuleSet { expected: usize, actual: usize },

    #[error("duplicate file name in module set: {name}")]
    DuplicateFileName { name: String },

    #[error("'{from}' imports './{to}' but no such file is in the set")]
    DanglingReference { from: String, to: String },

    // ========================================================================
    // Internal Errors
    // ========================================================================
    #[error("failed to serialize config body: {reason}")]
    SerializationFailed { reason: String },
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::UnusableModuleName { name } => vec![
                format!("'{}' has no letters or digits to build identifiers from", name),
                "Use a name like 'user' or 'order item'".into(),
            ],
            Self::EmptyProjectName => vec![
                "Pass a project name, e.g. modex new shop-api".into(),
            ],
            Self::IncompleteModuleSet { .. }
            | Self::DuplicateFileName { .. }
            | Self::DanglingReference { .. } => vec![
                "The generated file set is inconsistent".into(),
                "Please report this issue".into(),
            ],
            _ => vec!["See documentation for more details".into()],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::UnusableModuleName { .. } | Self::EmptyProjectName => ErrorCategory::Validation,
            Self::IncompleteModuleSet { .. }
            | Self::DuplicateFileName { .. }
            | Self::DanglingReference { .. } => ErrorCategory::Consistency,
            Self::SerializationFailed { .. } => ErrorCategory::Internal,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Consistency,
    Internal,
}
