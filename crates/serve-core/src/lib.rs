//! Serve Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for the `serve`
//! project scaffolder, following hexagonal (ports and adapters) architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │            serve-cli (CLI)              │
//! │     (create / convert / templates)      │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │  (ProjectScaffolder, TemplateService)   │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │ (Filesystem, TemplateStore, Installer,  │
//! │  VersionControlConfigReader, Reporter)  │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │     serve-adapters (Infrastructure)     │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Domain Layer (Pure Logic)       │
//! │ (ProjectConfig, paths, RenderContext)   │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use serve_core::prelude::*;
//!
//! let scaffolder = ProjectScaffolder::new(filesystem, store, installer, git_reader);
//! let config = scaffolder.configure(ProjectOptions::new("blog-site", "/tmp/work"))?;
//! let report = scaffolder.create(&config)?;
//! ```

pub mod domain;

pub mod application;

pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        ProjectScaffolder, TemplateService,
        ports::{Filesystem, FrameworkInstaller, Reporter, TemplateStore, VersionControlConfigReader},
    };
    pub use crate::domain::{
        Action, ActionKind, FsOutcome, ProjectConfig, ProjectOptions, RenderContext,
        ScaffoldMode, ScaffoldReport, TemplateName,
    };
    pub use crate::error::{ServeError, ServeResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
