//! Application services - orchestrate use cases.
//!
//! Services coordinate the domain layer and ports to accomplish
//! high-level use cases like "bootstrap a project" or "generate a module".

pub mod bootstrap_service;
pub mod module_service;

pub use bootstrap_service::{
    BootstrapReport, BootstrapService, BootstrapStep, StepOutcome, StepReport,
};
pub use module_service::{MODULES_ROOT, ModuleReport, ModuleService};
