//! Application layer errors.
//!
//! These errors represent failures talking to the outside world (templates,
//! disk, installer), not invalid options. Option errors are `DomainError`.

use std::path::PathBuf;
use thiserror::Error;

use crate::error::ErrorCategory;

/// Errors that occur during scaffolding orchestration.
#[derive(Debug, Error, Clone)]
pub enum ApplicationError {
    /// A named template is missing from the store.
    #[error("Template '{name}' not found in {source_description}")]
    TemplateNotFound {
        name: String,
        source_description: String,
    },

    /// A named template exists but could not be read.
    #[error("Template '{name}' could not be read: {reason}")]
    TemplateUnreadable { name: String, reason: String },

    /// Filesystem operation failed.
    #[error("Filesystem error at {path}: {reason}")]
    FilesystemError { path: PathBuf, reason: String },

    /// A move would replace something already at the destination.
    #[error("Cannot move {from} to {to}: destination already exists")]
    MoveDestinationExists { from: PathBuf, to: PathBuf },

    /// The framework installer reported a failure.
    #[error("Failed to install framework '{framework}': {reason}")]
    FrameworkInstallFailed { framework: String, reason: String },

    /// The working directory could not be determined.
    #[error("Cannot determine working directory: {reason}")]
    WorkingDirectoryUnavailable { reason: String },

    /// Shared state inside an adapter was poisoned.
    #[error("Adapter state lock poisoned")]
    LockPoisoned,
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::TemplateNotFound {
                name,
                source_description,
            } => vec![
                format!("Template '{}' is missing from {}", name, source_description),
                "Your installation looks incomplete".into(),
                "Unset SERVE_TEMPLATES__DIR to use the built-in templates".into(),
                "Or run: serve templates  to see which templates are available".into(),
            ],
            Self::TemplateUnreadable { name, .. } => vec![
                format!("Check the permissions of template '{}'", name),
                "Templates must be UTF-8 text".into(),
            ],
            Self::FilesystemError { path, .. } => vec![
                format!("Failed to access: {}", path.display()),
                "Check that you have write permissions".into(),
                "Check available disk space".into(),
            ],
            Self::MoveDestinationExists { to, .. } => vec![
                format!("Something already exists at {}", to.display()),
                "Merge or remove it by hand, then run convert again".into(),
            ],
            Self::FrameworkInstallFailed { framework, .. } => vec![
                format!("The installer could not add '{}'", framework),
                "Ensure the installer program is installed and in your PATH".into(),
                "Set installer.program in your config to change it".into(),
                "Re-running is safe: existing files are left untouched".into(),
            ],
            _ => vec!["Check the error details above".into()],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::TemplateNotFound { .. } | Self::TemplateUnreadable { .. } => {
                ErrorCategory::Configuration
            }
            Self::FilesystemError { .. } | Self::WorkingDirectoryUnavailable { .. } => {
                ErrorCategory::Internal
            }
            Self::MoveDestinationExists { .. } => ErrorCategory::Validation,
            Self::FrameworkInstallFailed { .. } => ErrorCategory::External,
            Self::LockPoisoned => ErrorCategory::Internal,
        }
    }
}
