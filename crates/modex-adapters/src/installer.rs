//! Package installer adapters.

use std::path::{Path, PathBuf};
use std::process::Command;
use std::sync::{Arc, Mutex};

use tracing::{debug, info};

use modex_core::{
    application::{ApplicationError, ports::Installer},
    error::{ModexError, ModexResult},
};

/// Installs packages by shelling out to npm or an npm-compatible manager.
pub struct NpmInstaller {
    program: String,
}

impl NpmInstaller {
    pub fn new() -> Self {
        Self::with_program("npm")
    }

    /// Use a different manager binary (pnpm, bun, or a stub in tests).
    pub fn with_program(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }
}

impl Default for NpmInstaller {
    fn default() -> Self {
        Self::new()
    }
}

impl Installer for NpmInstaller {
    fn install(
        &self,
        project_root: &Path,
        packages: &[&'static str],
        dev: bool,
    ) -> ModexResult<()> {
        debug!(program = %self.program, dev, count = packages.len(), "Running install");

        let output = Command::new(&self.program)
            .args(install_args(packages, dev))
            .current_dir(project_root)
            .output()
            .map_err(|e| install_error(&self.program, format!("failed to start: {e}")))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(install_error(
                &self.program,
                format!("{}: {}", output.status, stderr.trim()),
            ));
        }

        info!(program = %self.program, dev, "Install finished");
        Ok(())
    }
}

/// Argument list for one install invocation.
fn install_args(packages: &[&'static str], dev: bool) -> Vec<String> {
    let mut args = vec!["install".to_string()];
    if dev {
        args.push("-D".to_string());
    }
    args.extend(packages.iter().map(|p| p.to_string()));
    args
}

fn install_error(program: &str, reason: String) -> ModexError {
    ApplicationError::InstallFailed {
        manager: program.to_string(),
        reason,
    }
    .into()
}

/// One recorded install request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstallCall {
    pub project_root: PathBuf,
    pub packages: Vec<&'static str>,
    pub dev: bool,
}

/// Records install requests instead of running anything. For tests.
#[derive(Debug, Clone, Default)]
pub struct RecordingInstaller {
    calls: Arc<Mutex<Vec<InstallCall>>>,
}

impl RecordingInstaller {
    pub fn new() -> Self {
        Self::default()
    }

    /// Calls seen so far, in order.
    pub fn calls(&self) -> Vec<InstallCall> {
        self.calls.lock().map(|c| c.clone()).unwrap_or_default()
    }
}

impl Installer for RecordingInstaller {
    fn install(
        &self,
        project_root: &Path,
        packages: &[&'static str],
        dev: bool,
    ) -> ModexResult<()> {
        let mut calls = self
            .calls
            .lock()
            .map_err(|_| install_error("recording", "lock poisoned".into()))?;
        calls.push(InstallCall {
            project_root: project_root.to_path_buf(),
            packages: packages.to_vec(),
            dev,
        });
        Ok(())
    }
}
