//! Subcommand handlers.
//!
//! Each handler translates parsed arguments into core calls and renders the
//! result. Adapter wiring shared by `create` and `convert` lives here.

pub mod completions;
pub mod config;
pub mod convert;
pub mod create;
pub mod init;
pub mod templates;

use std::path::PathBuf;

use tracing::{debug, warn};

use serve_adapters::{
    BuiltinTemplateStore, CommandInstaller, DirectoryTemplateStore, GitConfigReader,
    LocalFilesystem,
};
use serve_core::{
    application::{ProjectScaffolder, ports::TemplateStore},
    domain::{Action, ProjectConfig, ProjectOptions, ScaffoldReport},
    prelude::Reporter,
};

use crate::{cli::ProjectArgs, config::AppConfig, error::CliResult, output::OutputManager};

/// Prints each action as the scaffolder performs it.
struct ConsoleReporter {
    output: OutputManager,
}

impl Reporter for ConsoleReporter {
    fn report(&self, action: &Action) {
        if let Err(e) = self.output.action(action.kind, &action.subject) {
            warn!(error = %e, "failed to print action");
        }
    }
}

/// The template store selected by `templates.dir`.
pub(crate) fn template_store(config: &AppConfig) -> Box<dyn TemplateStore> {
    match &config.templates.dir {
        Some(dir) => {
            debug!(dir = %dir.display(), "using template directory");
            Box::new(DirectoryTemplateStore::new(dir))
        }
        None => Box::new(BuiltinTemplateStore::new()),
    }
}

/// Wire the production adapters into a scaffolder.
pub(crate) fn build_scaffolder(config: &AppConfig, output: &OutputManager) -> ProjectScaffolder {
    let scaffolder = ProjectScaffolder::new(
        Box::new(LocalFilesystem::new()),
        template_store(config),
        Box::new(CommandInstaller::new(config.installer.program.clone())),
        Box::new(GitConfigReader::new()),
    );

    if output.is_quiet() || output.is_json() {
        scaffolder
    } else {
        scaffolder.with_reporter(Box::new(ConsoleReporter {
            output: output.clone(),
        }))
    }
}

/// Flags first, then config defaults.
pub(crate) fn project_options(args: ProjectArgs, config: &AppConfig) -> ProjectOptions {
    let directory = args
        .directory
        .or_else(|| config.project.directory.clone())
        .unwrap_or_else(|| PathBuf::from("."));

    let mut options = ProjectOptions::new(args.name, directory);
    if let Some(framework) = args.framework {
        options = options.with_framework(framework);
    }
    if let Some(author) = args.author.or_else(|| config.project.author.clone()) {
        options = options.with_author(author);
    }
    options
}

/// Closing output shared by `create` and `convert`.
pub(crate) fn summarize(
    report: &ScaffoldReport,
    project: &ProjectConfig,
    done: &str,
    output: &OutputManager,
) -> CliResult<()> {
    if output.is_json() {
        output.json(report)?;
        return Ok(());
    }

    let location = project.location().display().to_string();
    if report.is_noop() {
        output.info(&format!("'{location}' is already up to date"))?;
        return Ok(());
    }

    output.print("")?;
    output.success(&format!("Project '{}' {done} at {location}", project.name()))?;
    output.print("")?;
    output.print("Next steps:")?;
    output.print(&format!("  cd {location}"))?;
    output.print("  serve            # preview at http://localhost:4000")?;
    Ok(())
}
