// ============================================================================
// domain/error.rs - PROJECT OPTION ERRORS
// ============================================================================

use thiserror::Error;

/// Root domain error type.
///
/// Raised while turning caller options into a [`super::ProjectConfig`]; once a
/// config exists every remaining failure belongs to the application layer.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    #[error("Invalid project name '{name}': {reason}")]
    InvalidProjectName { name: String, reason: String },

    #[error("Base directory must not be empty")]
    MissingBaseDirectory,

    #[error("Unknown template '{name}'")]
    UnknownTemplate { name: String },

    #[error("Working directory must be absolute: {path}")]
    RelativeWorkingDirectory { path: String },
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::InvalidProjectName { name, reason } => vec![
                format!("Project name '{}' is invalid: {}", name, reason),
                "Spaces and hyphens are allowed; they become underscores".into(),
                "Examples: blog-site, \"My Cool Project\", old_site".into(),
            ],
            Self::MissingBaseDirectory => vec![
                "Pass a parent directory with --directory".into(),
                "Use '.' for the current directory".into(),
            ],
            Self::UnknownTemplate { name } => vec![
                format!("'{}' is not one of the project templates", name),
                "Known templates: compass_config, config_ru, gitignore, license, readme".into(),
            ],
            Self::RelativeWorkingDirectory { .. } => {
                vec!["This appears to be a bug in serve".into()]
            }
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidProjectName { .. }
            | Self::MissingBaseDirectory
            | Self::UnknownTemplate { .. } => ErrorCategory::Validation,
            Self::RelativeWorkingDirectory { .. } => ErrorCategory::Internal,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Internal,
}
