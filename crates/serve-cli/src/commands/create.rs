//! `serve create` - scaffold a new project.

use tracing::{info, instrument};

use crate::{
    cli::ProjectArgs,
    commands::{build_scaffolder, project_options, summarize},
    config::AppConfig,
    error::CliResult,
    output::OutputManager,
};

/// Dispatch sequence:
/// 1. Resolve options (flags, then config, then git for the author)
/// 2. Run the scaffolder; actions stream to the console as they happen
/// 3. Print next steps, or the JSON report
#[instrument(skip_all, fields(project = %args.name))]
pub fn execute(args: ProjectArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let scaffolder = build_scaffolder(&config, &output);
    let project = scaffolder.configure(project_options(args, &config))?;

    output.header(&format!(
        "Creating '{}' in {}",
        project.name(),
        project.location().display()
    ))?;

    let report = scaffolder.create(&project)?;
    info!(run_id = %report.run_id, actions = report.actions.len(), "create finished");

    summarize(&report, &project, "created", &output)
}
