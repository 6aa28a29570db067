pub mod project;
pub mod render_context;
pub mod report;

pub use crate::domain::DomainError;
pub use project::{ProjectConfig, ProjectOptions};
pub use render_context::RenderContext;
pub use report::{Action, ScaffoldReport};
