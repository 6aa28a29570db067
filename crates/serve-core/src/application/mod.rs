//! Application layer for Serve.
//!
//! This layer contains:
//! - **Services**: Use case orchestration (ProjectScaffolder, TemplateService)
//! - **Ports**: Interface definitions (traits) for external dependencies
//! - **Errors**: Application-specific error types
//!
//! Option validation and path rules live in `crate::domain`.

pub mod error;
pub mod ports;
pub mod services;

// Re-export main services
pub use services::{ProjectScaffolder, ProjectWriter, TemplateService, TemplateStatus};

// Re-export port traits (for adapter implementation)
pub use ports::{
    Filesystem, FrameworkInstaller, Reporter, SilentReporter, TemplateStore,
    VersionControlConfigReader,
};

pub use error::ApplicationError;
