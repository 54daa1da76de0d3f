//! Implementation of the `modex new` command.
//!
//! Responsibility: translate CLI arguments into a `BootstrapPlan`, call the
//! core bootstrap service, and display the step report.  No business logic
//! lives here.

use std::path::Path;

use tracing::{debug, info, instrument, warn};

use modex_adapters::{LocalFilesystem, NpmInstaller, ZipStarterArchive};
use modex_core::application::{BootstrapReport, BootstrapService, BootstrapStep, StepOutcome};
use modex_core::domain::{BootstrapPlan, DEV_DEPENDENCIES, RUNTIME_DEPENDENCIES};

use crate::{
    cli::{NewArgs, OutputFormat, global::GlobalArgs},
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

/// Execute the `modex new` command.
///
/// Dispatch sequence:
/// 1. Resolve the project name and description (prompting when omitted)
/// 2. Validate the name and build a core `BootstrapPlan`
/// 3. Confirm with user unless `--yes` or `--quiet`
/// 4. Early-exit if `--dry-run`
/// 5. Run the flow via `BootstrapService`
/// 6. Print the step report, open the editor on request, show next steps
#[instrument(skip_all)]
pub fn execute(
    args: NewArgs,
    global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    // 1. Resolve name and description
    let name = match &args.name {
        Some(name) => name.clone(),
        None => prompt_name()?,
    };
    validate_project_name(&name)?;

    let description = match &args.description {
        Some(text) => text.clone(),
        // Only prompt when the name was prompted too; `modex new foo`
        // without -d stays non-interactive.
        None if args.name.is_none() => prompt_description()?,
        None => String::new(),
    };

    // The project folder is created, its parent never is.
    if !args.dir.is_dir() {
        return Err(CliError::InvalidInput {
            message: format!("parent directory '{}' does not exist", args.dir.display()),
            source: None,
        });
    }

    // 2. Build the plan
    let plan = BootstrapPlan::new(&name, &args.dir)
        .map_err(|e| CliError::Core(e.into()))?
        .with_description(description)
        .with_skip_install(args.skip_install);
    let manager = resolved_manager(&args, &config);

    debug!(
        project = %plan.name(),
        root = %plan.project_root().display(),
        manager = %manager,
        skip_install = plan.skip_install(),
        "Plan resolved"
    );

    // 3. Show configuration and confirm.  JSON mode never prompts.
    let json = output.format() == OutputFormat::Json;
    if !global.quiet && !args.yes && !args.dry_run && !json {
        show_configuration(&plan, &manager, &output)?;
        if !confirm()? {
            return Err(CliError::Cancelled);
        }
    }

    // 4. Dry run: describe but do not write.
    if args.dry_run {
        return print_dry_run(&plan, &manager, &output);
    }

    // 5. Create adapters and bootstrap
    let service = BootstrapService::new(
        Box::new(LocalFilesystem::new()),
        Box::new(ZipStarterArchive::bundled()),
        Box::new(NpmInstaller::with_program(&manager)),
    );

    output.header(&format!("Creating '{}'...", plan.name()))?;
    info!(project = %plan.name(), path = %plan.project_root().display(), "Bootstrap started");

    // The service blocks on the installs, which dominate the runtime.
    let spinner = output.spinner("Scaffolding project and installing dependencies...");
    let result = service.bootstrap(&plan);
    spinner.finish_and_clear();
    let report = result.map_err(CliError::Core)?;

    if json {
        let steps: Vec<serde_json::Value> = report
            .steps()
            .iter()
            .map(|entry| {
                let outcome = match &entry.outcome {
                    StepOutcome::Completed => "completed".to_string(),
                    StepOutcome::Failed(reason) => format!("failed: {reason}"),
                    StepOutcome::Skipped(reason) => format!("skipped: {reason}"),
                };
                serde_json::json!({ "step": entry.step.describe(), "outcome": outcome })
            })
            .collect();
        let payload = serde_json::json!({
            "project": plan.name(),
            "root": report.project_root(),
            "starter_files": report.starter_files(),
            "steps": steps,
        });
        println!("{payload}");
        return Ok(());
    }

    print_report(&report, &output)?;
    info!(project = %plan.name(), failures = report.has_failures(), "Bootstrap finished");

    // 6. Success + editor + next steps
    if report.has_failures() {
        output.warning(&format!(
            "Project '{}' created with warnings (see above)",
            plan.name()
        ))?;
    } else {
        output.success(&format!("Project '{}' created!", plan.name()))?;
    }

    if args.open {
        open_in_editor(&config.defaults.editor, report.project_root(), &output)?;
    }

    if !global.quiet {
        output.print("")?;
        output.print("Next steps:")?;
        output.print(&format!("  cd {name}"))?;
        if plan.skip_install() {
            output.print(&format!("  {manager} install"))?;
        }
        output.print(&format!("  {manager} run dev"))?;
    }

    Ok(())
}

// ── Name validation ───────────────────────────────────────────────────────────

fn validate_project_name(name: &str) -> CliResult<()> {
    if name.trim().is_empty() {
        return Err(CliError::InvalidProjectName {
            name: name.into(),
            reason: "name cannot be empty".into(),
        });
    }
    if name.starts_with('.') {
        return Err(CliError::InvalidProjectName {
            name: name.into(),
            reason: "name cannot start with '.'".into(),
        });
    }
    if name.contains('/') || name.contains('\\') {
        return Err(CliError::InvalidProjectName {
            name: name.into(),
            reason: "name cannot contain path separators (use --dir)".into(),
        });
    }
    Ok(())
}

/// The `--package-manager` flag wins over the configured default.
fn resolved_manager(args: &NewArgs, config: &AppConfig) -> String {
    args.package_manager
        .clone()
        .unwrap_or_else(|| config.defaults.package_manager.clone())
}

// ── Prompts (interactive builds only) ─────────────────────────────────────────

#[cfg(feature = "interactive")]
fn prompt_name() -> CliResult<String> {
    dialoguer::Input::<String>::new()
        .with_prompt("Project name")
        .interact_text()
        .map_err(|e| super::prompt_error("could not read project name", e))
}

#[cfg(feature = "interactive")]
fn prompt_description() -> CliResult<String> {
    dialoguer::Input::<String>::new()
        .with_prompt("Description")
        .allow_empty(true)
        .interact_text()
        .map_err(|e| super::prompt_error("could not read description", e))
}

#[cfg(not(feature = "interactive"))]
fn prompt_name() -> CliResult<String> {
    Err(CliError::FeatureNotAvailable {
        feature: "interactive",
    })
}

#[cfg(not(feature = "interactive"))]
fn prompt_description() -> CliResult<String> {
    Ok(String::new())
}

// ── UI helpers ────────────────────────────────────────────────────────────────

fn show_configuration(plan: &BootstrapPlan, manager: &str, out: &OutputManager) -> CliResult<()> {
    out.header("Configuration")?;
    out.print(&format!("  Project:         {}", plan.name()))?;
    if !plan.description().is_empty() {
        out.print(&format!("  Description:     {}", plan.description()))?;
    }
    out.print(&format!(
        "  Location:        {}",
        plan.project_root().display()
    ))?;
    out.print(&format!("  Package manager: {manager}"))?;
    if plan.skip_install() {
        out.print("  Installs:        skipped")?;
    }
    out.print("")?;
    Ok(())
}

fn print_dry_run(plan: &BootstrapPlan, manager: &str, out: &OutputManager) -> CliResult<()> {
    out.info(&format!(
        "Dry run: would create '{}' at {}",
        plan.name(),
        plan.project_root().display()
    ))?;
    for step in BootstrapStep::ALL {
        let is_install = matches!(
            step,
            BootstrapStep::RuntimeInstall | BootstrapStep::DevInstall
        );
        if is_install && plan.skip_install() {
            out.print(&format!("  - {} (skipped)", step.describe()))?;
        } else {
            out.print(&format!("  - {}", step.describe()))?;
        }
    }
    if !plan.skip_install() {
        out.print(&format!(
            "  ({} runtime + {} dev packages via {})",
            RUNTIME_DEPENDENCIES.len(),
            DEV_DEPENDENCIES.len(),
            manager
        ))?;
    }
    Ok(())
}

fn print_report(report: &BootstrapReport, out: &OutputManager) -> CliResult<()> {
    for entry in report.steps() {
        let label = entry.step.describe();
        match &entry.outcome {
            StepOutcome::Completed => out.success(&format!("  {label}"))?,
            StepOutcome::Failed(reason) => out.warning(&format!("  {label}: {reason}"))?,
            StepOutcome::Skipped(reason) => out.print(&format!("  - {label} ({reason})"))?,
        }
    }
    if let Some(count) = report.starter_files() {
        out.info(&format!("  {count} starter files unpacked"))?;
    }
    Ok(())
}

/// Launch the configured editor on the project directory.
///
/// A missing or broken editor must not fail the command — the project is
/// already on disk at this point — so every failure path is a warning.
fn open_in_editor(editor: &str, project_root: &Path, out: &OutputManager) -> CliResult<()> {
    match std::process::Command::new(editor).arg(project_root).spawn() {
        Ok(_) => out.info(&format!("Opening in {editor}..."))?,
        Err(e) => {
            warn!(editor, error = %e, "Editor launch failed");
            out.warning(&format!("Could not launch '{editor}': {e}"))?;
        }
    }
    Ok(())
}

fn confirm() -> CliResult<bool> {
    use std::io::{self, Write};

    print!("Continue? [Y/n] ");
    io::stdout().flush().map_err(|e| CliError::IoError {
        message: "failed to flush stdout".into(),
        source: e,
    })?;

    let mut input = String::new();
    io::stdin()
        .read_line(&mut input)
        .map_err(|e| CliError::IoError {
            message: "failed to read confirmation input".into(),
            source: e,
        })?;

    let input = input.trim().to_ascii_lowercase();
    Ok(input.is_empty() || input == "y" || input == "yes")
}

// ── Tests ─────────────────────────────────────────────────────────────────────
