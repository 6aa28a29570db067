//! Application ports (traits) for external dependencies.
//!
//! In hexagonal architecture, ports define interfaces that the application
//! needs from the outside world. Adapters in `serve-adapters` implement these.
//!
//! ## Port Types
//!
//! - **Driven (Output) Ports**: Called by application, implemented by infrastructure
//!   - `Filesystem`: File operations
//!   - `TemplateStore`: Template retrieval
//!   - `VersionControlConfigReader`: `git config` lookups
//!   - `FrameworkInstaller`: Script framework installation
//!   - `Reporter`: Live progress output

pub mod output;

pub use output::{
    Filesystem, FrameworkInstaller, Reporter, SilentReporter, TemplateStore,
    VersionControlConfigReader,
};

#[cfg(test)]
pub use output::{
    MockFilesystem, MockFrameworkInstaller, MockTemplateStore, MockVersionControlConfigReader,
};
