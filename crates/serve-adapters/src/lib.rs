//! Infrastructure adapters for Serve.
//!
//! This crate implements the ports defined in `serve-core::application::ports`.
//! It contains all external dependencies and I/O operations.

pub mod filesystem;
pub mod installer;
pub mod template_store;
pub mod vcs;

// Re-export commonly used adapters
pub use filesystem::{LocalFilesystem, MemoryFilesystem};
pub use installer::{CommandInstaller, DEFAULT_INSTALLER};
pub use template_store::{BuiltinTemplateStore, DirectoryTemplateStore};
pub use vcs::{GitConfigReader, StaticConfigReader};
