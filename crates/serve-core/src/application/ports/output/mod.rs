//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the scaffolder needs from external systems.
//! The `serve-adapters` crate provides implementations.

use std::path::Path;

use crate::domain::{Action, TemplateName};
use crate::error::ServeResult;

/// Port for filesystem operations.
///
/// Implemented by:
/// - `serve_adapters::filesystem::LocalFilesystem` (production)
/// - `serve_adapters::filesystem::MemoryFilesystem` (testing)
///
/// Paths are relative to the working directory the scaffolder was given.
#[cfg_attr(test, mockall::automock)]
pub trait Filesystem: Send + Sync {
    /// Check if path exists (file or directory).
    fn exists(&self, path: &Path) -> bool;

    /// Check if path is an existing directory.
    fn is_dir(&self, path: &Path) -> bool;

    /// Create a directory and all parent directories.
    fn create_dir_all(&self, path: &Path) -> ServeResult<()>;

    /// Write content to a file, replacing it.
    fn write_file(&self, path: &Path, content: &str) -> ServeResult<()>;

    /// Create an empty file if absent; never truncate an existing one.
    fn touch(&self, path: &Path) -> ServeResult<()>;

    /// Move a file or directory tree from `from` to exactly `to`.
    fn rename(&self, from: &Path, to: &Path) -> ServeResult<()>;
}

/// Port for template retrieval.
///
/// Implemented by:
/// - `serve_adapters::template_store::BuiltinTemplateStore` (compiled in)
/// - `serve_adapters::template_store::DirectoryTemplateStore` (user directory)
#[cfg_attr(test, mockall::automock)]
pub trait TemplateStore: Send + Sync {
    /// Raw template text. Missing templates are an error.
    fn load(&self, name: TemplateName) -> ServeResult<String>;

    /// Human-readable description of where templates come from.
    fn describe(&self) -> String;
}

/// Port for reading version-control configuration.
///
/// Best-effort: any failure is reported as `None`.
#[cfg_attr(test, mockall::automock)]
pub trait VersionControlConfigReader: Send + Sync {
    fn read(&self, key: &str) -> Option<String>;
}

/// Port for installing a client-side script framework into a project.
#[cfg_attr(test, mockall::automock)]
pub trait FrameworkInstaller: Send + Sync {
    /// Install `framework` into the project at `location`.
    fn install(&self, location: &Path, framework: &str) -> ServeResult<()>;
}

/// Port for live progress output.
pub trait Reporter: Send + Sync {
    fn report(&self, action: &Action);
}

/// Reporter that drops everything; the default when none is configured.
#[derive(Debug, Default, Clone, Copy)]
pub struct SilentReporter;

impl Reporter for SilentReporter {
    fn report(&self, _action: &Action) {}
}
