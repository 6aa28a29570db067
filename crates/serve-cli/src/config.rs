//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by value. The
//! CLI layer owns config; the core crate never sees it.
//!
//! # Resolution order (highest priority first)
//!
//! 1. CLI flags (handled at the call-site, not here)
//! 2. Environment variables: `SERVE_<SECTION>__<KEY>`, e.g. `SERVE_TEMPLATES__DIR`
//! 3. Config file: `--config FILE`, else [`AppConfig::config_path`] if present
//! 4. Built-in defaults (always present)

use std::path::{Path, PathBuf};

use anyhow::Context as _;
use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use tracing::debug;

use serve_adapters::DEFAULT_INSTALLER;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub project: ProjectDefaults,
    pub templates: TemplateConfig,
    pub installer: InstallerConfig,
    pub output: OutputConfig,
    pub logging: LoggingConfig,
}

/// Fallbacks for `create`/`convert` flags.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectDefaults {
    /// Used instead of git `user.name` when set.
    pub author: Option<String>,
    /// Parent directory when `--directory` is omitted.
    pub directory: Option<PathBuf>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TemplateConfig {
    /// Read templates from this directory instead of the built-in set.
    pub dir: Option<PathBuf>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InstallerConfig {
    /// Program invoked as `<program> install <framework>`.
    pub program: String,
}

impl Default for InstallerConfig {
    fn default() -> Self {
        Self {
            program: DEFAULT_INSTALLER.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub no_color: bool,
    /// `auto`, `human`, `plain` or `json`; `--output-format` wins.
    pub format: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            no_color: false,
            format: "auto".into(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Also write logs to this file (no colors, never rotated).
    pub file: Option<PathBuf>,
}

impl AppConfig {
    /// Merge defaults, the config file and `SERVE_*` environment variables.
    ///
    /// An explicit `config_file` must exist when `required`; the default
    /// location is always optional.
    pub fn load(config_file: Option<&Path>, required: bool) -> anyhow::Result<Self> {
        let file = match config_file {
            Some(path) => File::from(path).required(required),
            None => File::from(Self::config_path()).required(false),
        };

        let config: Self = Config::builder()
            .add_source(file)
            .add_source(
                Environment::with_prefix("SERVE")
                    .prefix_separator("_")
                    .separator("__"),
            )
            .build()
            .context("failed to read configuration")?
            .try_deserialize()
            .context("invalid configuration")?;

        debug!(?config, "configuration loaded");
        Ok(config)
    }

    /// Path to the default configuration file.
    ///
    /// Uses `directories::ProjectDirs` for cross-platform correctness,
    /// falling back to `.serve.toml` in the current directory.
    pub fn config_path() -> PathBuf {
        directories::ProjectDirs::from("org", "serve", "serve")
            .map(|d| d.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from(".serve.toml"))
    }

    /// Look up a dotted key such as `installer.program`.
    ///
    /// Unset optional values come back as `Some("")`; unknown keys as `None`.
    pub fn get(&self, key: &str) -> Option<String> {
        let tree = serde_json::to_value(self).ok()?;
        let value = key
            .split('.')
            .try_fold(&tree, |node, part| node.as_object()?.get(part))?;

        match value {
            serde_json::Value::Null => Some(String::new()),
            serde_json::Value::String(s) => Some(s.clone()),
            serde_json::Value::Object(_) => None,
            other => Some(other.to_string()),
        }
    }

    /// The configuration as a TOML document.
    pub fn to_toml(&self) -> anyhow::Result<String> {
        toml::to_string_pretty(self).context("failed to serialise configuration")
    }
}
