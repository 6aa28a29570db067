//! Small closed vocabularies used across the scaffolder.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::error::DomainError;

/// The fixed set of templates a project is rendered from.
///
/// Order matches the order the base files are written in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TemplateName {
    ConfigRu,
    License,
    Gitignore,
    CompassConfig,
    Readme,
}

impl TemplateName {
    pub const ALL: [TemplateName; 5] = [
        TemplateName::ConfigRu,
        TemplateName::License,
        TemplateName::Gitignore,
        TemplateName::CompassConfig,
        TemplateName::Readme,
    ];

    /// Name the template is stored under.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::ConfigRu => "config_ru",
            Self::License => "license",
            Self::Gitignore => "gitignore",
            Self::CompassConfig => "compass_config",
            Self::Readme => "readme",
        }
    }

    /// File the rendered template is written to, relative to the project root.
    pub const fn output_file(self) -> &'static str {
        match self {
            Self::ConfigRu => "config.ru",
            Self::License => "LICENSE",
            Self::Gitignore => ".gitignore",
            Self::CompassConfig => "compass.config",
            Self::Readme => "README.markdown",
        }
    }
}

impl fmt::Display for TemplateName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TemplateName {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| DomainError::UnknownTemplate { name: s.to_string() })
    }
}

/// Which entry point produced a report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScaffoldMode {
    Create,
    Convert,
}

impl fmt::Display for ScaffoldMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Create => write!(f, "create"),
            Self::Convert => write!(f, "convert"),
        }
    }
}

/// Result of a single filesystem primitive.
///
/// "Already exists" and "missing move source" are outcomes, not errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FsOutcome {
    Created,
    AlreadyExists,
    Moved,
    Skipped,
}

/// Verb shown next to a reported path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActionKind {
    Create,
    Exists,
    Touch,
    Move,
    Installing,
}

impl ActionKind {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Create => "create",
            Self::Exists => "exists",
            Self::Touch => "touch",
            Self::Move => "move",
            Self::Installing => "installing",
        }
    }
}

impl fmt::Display for ActionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
