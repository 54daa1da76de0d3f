//! Infrastructure adapters for Modex.
//!
//! This crate implements the ports defined in `modex-core::application::ports`.
//! It contains all external dependencies and I/O operations.

pub mod archive;
pub mod filesystem;
pub mod installer;

// Re-export commonly used adapters
pub use archive::ZipStarterArchive;
pub use filesystem::{LocalFilesystem, MemoryFilesystem};
pub use installer::{InstallCall, NpmInstaller, RecordingInstaller};
