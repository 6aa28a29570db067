//! `serve convert` - move a Compass project into the standard layout.

use tracing::{info, instrument};

use serve_core::{application::services::scaffold_service::CONVERT_MOVES, domain::ProjectConfig};

use crate::{
    cli::ConvertArgs,
    commands::{build_scaffolder, project_options, summarize},
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

/// Like `create`, but relocates the Compass directories first.
///
/// Moves cannot be undone, so the user confirms unless `--yes` or `--quiet`.
#[instrument(skip_all, fields(project = %args.project.name))]
pub fn execute(args: ConvertArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let scaffolder = build_scaffolder(&config, &output);
    let project = scaffolder.configure(project_options(args.project, &config))?;

    if !args.yes && !output.is_quiet() {
        describe_moves(&project, &output)?;
        if !confirm()? {
            return Err(CliError::Cancelled);
        }
    }

    output.header(&format!("Converting {}", project.location().display()))?;

    let report = scaffolder.convert(&project)?;
    info!(run_id = %report.run_id, actions = report.actions.len(), "convert finished");

    summarize(&report, &project, "converted", &output)
}

fn describe_moves(project: &ProjectConfig, output: &OutputManager) -> CliResult<()> {
    output.info(&format!(
        "Converting {} moves these directories if present:",
        project.location().display()
    ))?;
    for (from, to) in CONVERT_MOVES {
        output.print(&format!("    {from} => {to}"))?;
    }
    Ok(())
}

#[cfg(feature = "interactive")]
fn confirm() -> CliResult<bool> {
    dialoguer::Confirm::new()
        .with_prompt("Continue?")
        .default(true)
        .interact()
        .map_err(|e| CliError::InvalidInput {
            message: format!("cannot ask for confirmation ({e}); pass --yes"),
        })
}

#[cfg(not(feature = "interactive"))]
fn confirm() -> CliResult<bool> {
    use std::io::{self, Write};

    eprint!("Continue? [Y/n] ");
    io::stderr().flush().map_err(|e| CliError::IoError {
        message: "failed to flush stderr".into(),
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
