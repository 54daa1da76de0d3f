//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from external systems.
//! The `modex-adapters` crate provides implementations.

use crate::error::ModexResult;
use std::path::Path;

/// Port for filesystem operations.
///
/// Implemented by:
/// - `modex_adapters::filesystem::LocalFilesystem` (production)
/// - `modex_adapters::filesystem::MemoryFilesystem` (testing)
///
/// ## Design Notes
///
/// - No delete operation: partially written output is left in place for the
///   user to inspect, never rolled back
pub trait Filesystem: Send + Sync {
    /// Create a directory and all parent directories.
    fn create_dir_all(&self, path: &Path) -> ModexResult<()>;

    /// Write content to a file, replacing any existing file at that path.
    fn write_file(&self, path: &Path, content: &str) -> ModexResult<()>;

    /// Check if path exists (file or directory).
    fn exists(&self, path: &Path) -> bool;
}

/// Port for the bundled starter file tree.
///
/// Implemented by:
/// - `modex_adapters::archive::ZipStarterArchive` (zip bundled at build time)
pub trait StarterArchive: Send + Sync {
    /// Unpack the whole starter tree under `dest`.
    ///
    /// Returns the number of files written.
    fn unpack(&self, dest: &Path) -> ModexResult<usize>;
}

/// Port for installing packages into a project.
///
/// Implemented by:
/// - `modex_adapters::installer::NpmInstaller` (production)
/// - `modex_adapters::installer::RecordingInstaller` (testing)
pub trait Installer: Send + Sync {
    /// Install `packages` into the project at `project_root`.
    ///
    /// `dev` selects the development dependency table.
    fn install(&self, project_root: &Path, packages: &[&'static str], dev: bool)
    -> ModexResult<()>;
}
