//! Implementation of the `modex generate` command.
//!
//! Derives the module identifiers, renders the seven module files through
//! the core service, and reports what was written.

use tracing::{debug, info, instrument};

use modex_adapters::LocalFilesystem;
use modex_core::application::ModuleService;
use modex_core::domain::{ModuleIdent, render_module_files};

use crate::{
    cli::{GenerateArgs, OutputFormat, global::GlobalArgs},
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

/// Execute the `modex generate` command.
#[instrument(skip_all)]
pub fn execute(
    args: GenerateArgs,
    global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    let name = match &args.name {
        Some(name) => name.clone(),
        None => prompt_name()?,
    };

    // Derive up front so bad names fail before any directory is created and
    // so display uses the canonical spelling, not the raw input.
    let ident = ModuleIdent::derive(&name).map_err(|e| CliError::Core(e.into()))?;

    if !args.project.is_dir() {
        return Err(CliError::InvalidInput {
            message: format!(
                "project directory '{}' does not exist",
                args.project.display()
            ),
            source: None,
        });
    }

    let root = resolved_root(&args, &config);
    let module_dir = args.project.join(&root).join(ident.canonical());

    debug!(input = %name, module = %ident.canonical(), dir = %module_dir.display(), "Identifiers derived");

    // Dry run: render in memory, list names, write nothing.
    if args.dry_run {
        let set = render_module_files(&ident);
        output.info(&format!(
            "Dry run: would write {} files under {}",
            set.len(),
            module_dir.display()
        ))?;
        for file_name in set.file_names() {
            output.print(&format!("  {file_name}"))?;
        }
        return Ok(());
    }

    output.header(&format!("Generating module '{}'...", ident.canonical()))?;
    info!(module = %ident.canonical(), project = %args.project.display(), "Module generation started");

    let service = ModuleService::new(Box::new(LocalFilesystem::new())).with_modules_root(&root);
    let report = service
        .generate(&args.project, &name)
        .map_err(CliError::Core)?;

    // In JSON mode the payload is the only stdout line.
    if output.format() == OutputFormat::Json {
        let payload = serde_json::json!({
            "module": report.ident.canonical(),
            "directory": report.module_dir,
            "files": report.files,
        });
        println!("{payload}");
        return Ok(());
    }

    for file_name in &report.files {
        output.success(&format!("  {file_name}"))?;
    }
    output.success(&format!(
        "Module '{}' created at {}",
        report.ident.canonical(),
        report.module_dir.display()
    ))?;

    if !global.quiet {
        output.print("")?;
        output.print("Wire it up in src/app/routes/index.ts:")?;
        output.print(&format!(
            "  {{ path: '/{}', route: {}Routes }}",
            report.ident.canonical(),
            report.ident.title()
        ))?;
    }

    Ok(())
}

/// The `--root` flag wins over the configured module root.
fn resolved_root(args: &GenerateArgs, config: &AppConfig) -> String {
    args.root
        .clone()
        .unwrap_or_else(|| config.modules.root.clone())
}

#[cfg(feature = "interactive")]
fn prompt_name() -> CliResult<String> {
    dialoguer::Input::<String>::new()
        .with_prompt("Module name")
        .interact_text()
        .map_err(|e| super::prompt_error("could not read module name", e))
}

#[cfg(not(feature = "interactive"))]
fn prompt_name() -> CliResult<String> {
    Err(CliError::FeatureNotAvailable {
        feature: "interactive",
    })
}

// ── Tests ─────────────────────────────────────────────────────────────────────
