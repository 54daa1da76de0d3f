//! Bootstrap Service - creates a new project from scratch.
//!
//! This service coordinates the whole bootstrap workflow:
//! 1. Refuse to touch an existing path
//! 2. Create the project directory
//! 3. Write the manifest
//! 4. Unpack the bundled starter tree
//! 5. Install runtime packages, then development packages
//! 6. Write the compiler, formatter, and linter configs
//!
//! Steps 3-6 never abort the flow: each outcome is recorded in a
//! [`BootstrapReport`] and the partially built project is left in place.

use std::path::{Path, PathBuf};
use tracing::{info, instrument, warn};

use crate::{
    application::{
        ApplicationError,
        ports::{Filesystem, Installer, StarterArchive},
    },
    domain::{
        BootstrapPlan, CompilerConfig, DEV_DEPENDENCIES, DomainError, FormatterConfig,
        LinterConfig, ProjectManifest, RUNTIME_DEPENDENCIES,
        entities::manifest::{
            COMPILER_CONFIG_FILE, FORMATTER_CONFIG_FILE, LINTER_CONFIG_FILE, MANIFEST_FILE,
        },
    },
    error::ModexResult,
};

/// One step of the bootstrap flow, for reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BootstrapStep {
    Manifest,
    Starter,
    RuntimeInstall,
    DevInstall,
    CompilerConfig,
    FormatterConfig,
    LinterConfig,
}

impl BootstrapStep {
    /// Every step in execution order.
    pub const ALL: [Self; 7] = [
        Self::Manifest,
        Self::Starter,
        Self::RuntimeInstall,
        Self::DevInstall,
        Self::CompilerConfig,
        Self::FormatterConfig,
        Self::LinterConfig,
    ];

    /// Human-readable label for CLI display.
    pub fn describe(&self) -> &'static str {
        match self {
            Self::Manifest => "write package.json",
            Self::Starter => "unpack starter files",
            Self::RuntimeInstall => "install dependencies",
            Self::DevInstall => "install dev dependencies",
            Self::CompilerConfig => "write tsconfig.json",
            Self::FormatterConfig => "write .prettierrc",
            Self::LinterConfig => "write .eslintrc.json",
        }
    }
}

/// How a single step ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StepOutcome {
    Completed,
    Failed(String),
    Skipped(String),
}

/// A recorded step outcome.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepReport {
    pub step: BootstrapStep,
    pub outcome: StepOutcome,
}

/// Ordered record of everything the bootstrap flow did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BootstrapReport {
    project_root: PathBuf,
    steps: Vec<StepReport>,
    starter_files: Option<usize>,
}

impl BootstrapReport {
    fn new(project_root: PathBuf) -> Self {
        Self {
            project_root,
            steps: Vec::new(),
            starter_files: None,
        }
    }

    fn record(&mut self, step: BootstrapStep, outcome: StepOutcome) {
        self.steps.push(StepReport { step, outcome });
    }

    pub fn project_root(&self) -> &Path {
        &self.project_root
    }

    /// Steps in the order they were attempted.
    pub fn steps(&self) -> &[StepReport] {
        &self.steps
    }

    /// Number of files unpacked from the starter, when that step completed.
    pub fn starter_files(&self) -> Option<usize> {
        self.starter_files
    }

    pub fn has_failures(&self) -> bool {
        self.steps
            .iter()
            .any(|s| matches!(s.outcome, StepOutcome::Failed(_)))
    }
}

/// Main bootstrap service.
///
/// Orchestrates directory creation, manifest writing, starter extraction,
/// and package installation.
pub struct BootstrapService {
    filesystem: Box<dyn Filesystem>,
    archive: Box<dyn StarterArchive>,
    installer: Box<dyn Installer>,
}

impl BootstrapService {
    /// Create a new bootstrap service with the given adapters.
    pub fn new(
        filesystem: Box<dyn Filesystem>,
        archive: Box<dyn StarterArchive>,
        installer: Box<dyn Installer>,
    ) -> Self {
        Self {
            filesystem,
            archive,
            installer,
        }
    }

    /// Bootstrap a new project.
    ///
    /// Returns `Err` only when nothing could be created at all (the path is
    /// taken, or the directory itself could not be made). Every later step
    /// records its outcome in the returned report instead of failing the
    /// flow, and nothing already written is ever removed.
    #[instrument(
        skip_all,
        fields(project = %plan.name(), root = %plan.project_root().display())
    )]
    pub fn bootstrap(&self, plan: &BootstrapPlan) -> ModexResult<BootstrapReport> {
        let root = plan.project_root();
        info!("Bootstrapping project");

        // 1. Refuse to touch an existing path. Nothing has been written yet.
        if self.filesystem.exists(&root) {
            return Err(ApplicationError::ProjectExists { path: root }.into());
        }

        // 2. Create the project directory.
        self.filesystem.create_dir_all(&root)?;

        let mut report = BootstrapReport::new(root.clone());

        // 3. Manifest.
        let manifest = ProjectManifest::new(plan.name(), plan.description());
        self.write_config(
            &mut report,
            BootstrapStep::Manifest,
            &root.join(MANIFEST_FILE),
            manifest.to_json(),
        );

        // 4. Starter tree.
        match self.archive.unpack(&root) {
            Ok(count) => {
                report.starter_files = Some(count);
                report.record(BootstrapStep::Starter, StepOutcome::Completed);
            }
            Err(e) => {
                warn!(error = %e, "Starter extraction failed");
                report.record(BootstrapStep::Starter, StepOutcome::Failed(e.to_string()));
            }
        }

        // 5. Installs. A runtime failure skips the dev set but nothing else.
        self.run_installs(&mut report, plan, &root);

        // 6. Compiler, formatter, and linter configs.
        self.write_config(
            &mut report,
            BootstrapStep::CompilerConfig,
            &root.join(COMPILER_CONFIG_FILE),
            CompilerConfig::default().to_json(),
        );
        self.write_config(
            &mut report,
            BootstrapStep::FormatterConfig,
            &root.join(FORMATTER_CONFIG_FILE),
            FormatterConfig::default().to_json(),
        );
        self.write_config(
            &mut report,
            BootstrapStep::LinterConfig,
            &root.join(LINTER_CONFIG_FILE),
            LinterConfig::default().to_json(),
        );

        info!(
            steps = report.steps().len(),
            failures = report.has_failures(),
            "Bootstrap finished"
        );
        Ok(report)
    }

    // -------------------------------------------------------------------------
    // Internal Helpers
    // -------------------------------------------------------------------------

    fn run_installs(&self, report: &mut BootstrapReport, plan: &BootstrapPlan, root: &Path) {
        if plan.skip_install() {
            let reason = "install skipped by request".to_string();
            report.record(
                BootstrapStep::RuntimeInstall,
                StepOutcome::Skipped(reason.clone()),
            );
            report.record(BootstrapStep::DevInstall, StepOutcome::Skipped(reason));
            return;
        }

        match self.installer.install(root, RUNTIME_DEPENDENCIES, false) {
            Ok(()) => {
                report.record(BootstrapStep::RuntimeInstall, StepOutcome::Completed);
                match self.installer.install(root, DEV_DEPENDENCIES, true) {
                    Ok(()) => report.record(BootstrapStep::DevInstall, StepOutcome::Completed),
                    Err(e) => {
                        warn!(error = %e, "Dev install failed");
                        report
                            .record(BootstrapStep::DevInstall, StepOutcome::Failed(e.to_string()));
                    }
                }
            }
            Err(e) => {
                warn!(error = %e, "Runtime install failed");
                report.record(
                    BootstrapStep::RuntimeInstall,
                    StepOutcome::Failed(e.to_string()),
                );
                report.record(
                    BootstrapStep::DevInstall,
                    StepOutcome::Skipped("runtime install failed".to_string()),
                );
            }
        }
    }

    /// Serialize and write one config file, recording the outcome.
    fn write_config(
        &self,
        report: &mut BootstrapReport,
        step: BootstrapStep,
        path: &Path,
        body: Result<String, DomainError>,
    ) {
        let outcome = match body {
            Ok(content) => match self.filesystem.write_file(path, &content) {
                Ok(()) => StepOutcome::Completed,
                Err(e) => StepOutcome::Failed(e.to_string()),
            },
            Err(e) => StepOutcome::Failed(e.to_string()),
        };
        if let StepOutcome::Failed(reason) = &outcome {
            warn!(step = step.describe(), %reason, "Bootstrap step failed");
        }
        report.record(step, outcome);
    }
}
