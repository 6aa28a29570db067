//! Application services - orchestrate use cases.
//!
//! `ProjectScaffolder` drives `create`/`convert`; `TemplateService` loads and
//! renders templates; `ProjectWriter` holds the idempotent file primitives.

pub mod project_writer;
pub mod scaffold_service;
pub mod template_service;

pub use project_writer::ProjectWriter;
pub use scaffold_service::ProjectScaffolder;
pub use template_service::{TemplateService, TemplateStatus};
