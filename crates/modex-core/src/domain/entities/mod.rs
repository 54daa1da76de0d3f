pub mod bootstrap;
pub mod manifest;
pub mod module_file;

pub use crate::domain::DomainError;
pub use bootstrap::BootstrapPlan;
pub use manifest::{CompilerConfig, FormatterConfig, LinterConfig, ProjectManifest};
pub use module_file::{FileKind, ModuleFile, ModuleFileSet};
