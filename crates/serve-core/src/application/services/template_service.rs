//! Template Service - loading and rendering the project templates.

use serde::Serialize;
use tracing::{debug, instrument};

use crate::{
    application::ports::TemplateStore,
    domain::{RenderContext, TemplateName},
    error::ServeResult,
};

/// Availability of one template in the configured store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TemplateStatus {
    pub name: TemplateName,
    pub output_file: &'static str,
    pub available: bool,
    pub problem: Option<String>,
}

/// Service for template operations.
pub struct TemplateService {
    store: Box<dyn TemplateStore>,
}

impl TemplateService {
    /// Create a new template service.
    pub fn new(store: Box<dyn TemplateStore>) -> Self {
        Self { store }
    }

    /// Load `name` and substitute the context's placeholders.
    ///
    /// A missing or unreadable template is an error.
    #[instrument(skip(self, context), fields(template = %name))]
    pub fn render(&self, name: TemplateName, context: &RenderContext) -> ServeResult<String> {
        let raw = self.store.load(name)?;
        debug!(bytes = raw.len(), "template loaded");
        Ok(context.render(&raw))
    }

    /// Every project template with whether the store can load it.
    pub fn inventory(&self) -> Vec<TemplateStatus> {
        TemplateName::ALL
            .into_iter()
            .map(|name| {
                let problem = self.store.load(name).err().map(|e| e.to_string());
                TemplateStatus {
                    name,
                    output_file: name.output_file(),
                    available: problem.is_none(),
                    problem,
                }
            })
            .collect()
    }

    /// Where templates are loaded from.
    pub fn source(&self) -> String {
        self.store.describe()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::{ApplicationError, ports::MockTemplateStore};

    #[test]
    fn render_substitutes_from_store_text() {
        let mut store = MockTemplateStore::new();
        store
            .expect_load()
            .withf(|name| *name == TemplateName::Readme)
            .returning(|_| Ok("# {{PROJECT_NAME}}".into()));

        let service = TemplateService::new(Box::new(store));
        let ctx = RenderContext::new().with_variable("PROJECT_NAME", "blog");

        assert_eq!(service.render(TemplateName::Readme, &ctx).unwrap(), "# blog");
    }

    #[test]
    fn render_propagates_missing_template() {
        let mut store = MockTemplateStore::new();
        store.expect_load().returning(|name| {
            Err(ApplicationError::TemplateNotFound {
                name: name.to_string(),
                source_description: "test store".into(),
            }
            .into())
        });

        let service = TemplateService::new(Box::new(store));
        assert!(service.render(TemplateName::License, &RenderContext::new()).is_err());
    }

    #[test]
    fn inventory_marks_missing_templates() {
        let mut store = MockTemplateStore::new();
        store.expect_load().returning(|name| match name {
            TemplateName::Gitignore => Err(ApplicationError::TemplateNotFound {
                name: name.to_string(),
                source_description: "test store".into(),
            }
            .into()),
            _ => Ok(String::new()),
        });

        let service = TemplateService::new(Box::new(store));
        let inventory = service.inventory();

        assert_eq!(inventory.len(), 5);
        let missing: Vec<_> = inventory.iter().filter(|s| !s.available).collect();
        assert_eq!(missing.len(), 1);
        assert_eq!(missing[0].name, TemplateName::Gitignore);
        assert_eq!(missing[0].output_file, ".gitignore");
    }
}
