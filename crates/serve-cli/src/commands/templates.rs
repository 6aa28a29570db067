//! `serve templates` - show where templates come from and which load.

use std::str::FromStr;

use serde::Serialize;

use serve_adapters::DirectoryTemplateStore;
use serve_core::{
    application::{TemplateService, TemplateStatus},
    domain::TemplateName,
};

use crate::{
    commands::template_store, config::AppConfig, error::CliResult, output::OutputManager,
};

#[derive(Serialize)]
struct Inventory {
    source: String,
    templates: Vec<TemplateStatus>,
    ignored: Vec<String>,
}

pub fn execute(config: AppConfig, output: OutputManager) -> CliResult<()> {
    let service = TemplateService::new(template_store(&config));
    let inventory = Inventory {
        source: service.source(),
        templates: service.inventory(),
        ignored: unrecognized_files(&config),
    };

    if output.is_json() {
        output.json(&inventory)?;
        return Ok(());
    }

    output.header(&format!("Templates ({})", inventory.source))?;
    for status in &inventory.templates {
        let line = format!("  {:<16} -> {}", status.name.as_str(), status.output_file);
        match &status.problem {
            None => output.print(&line)?,
            Some(problem) => output.warning(&format!("{line}  ({problem})"))?,
        }
    }
    for name in &inventory.ignored {
        output.warning(&format!("Ignoring unknown template file '{name}'"))?;
    }
    Ok(())
}

/// Files in the template directory that no template would read.
fn unrecognized_files(config: &AppConfig) -> Vec<String> {
    let Some(dir) = &config.templates.dir else {
        return Vec::new();
    };

    DirectoryTemplateStore::new(dir)
        .files()
        .iter()
        .filter_map(|path| path.file_name()?.to_str().map(str::to_string))
        .filter(|name| TemplateName::from_str(name).is_err())
        .collect()
}
