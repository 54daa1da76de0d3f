//! Application layer for Modex.
//!
//! This layer contains:
//! - **Services**: Use case orchestration (BootstrapService, ModuleService)
//! - **Ports**: Interface definitions (traits) for external dependencies
//! - **Errors**: Application-specific error types
//!
//! The application layer coordinates the domain layer but contains no
//! business logic itself. All business rules live in `crate::domain`.

pub mod error;
pub mod ports;
pub mod services;

// Re-export main services
pub use services::{
    BootstrapReport,
    BootstrapService,
    BootstrapStep,
    ModuleReport, // DTO for display
    ModuleService,
    StepOutcome,
    StepReport,
};

// Re-export port traits (for adapter implementation)
pub use ports::{Filesystem, Installer, StarterArchive};

pub use error::ApplicationError;
