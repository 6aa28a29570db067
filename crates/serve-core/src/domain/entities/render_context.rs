//! Placeholder substitution for project templates.
//!
//! Templates may only reference a fixed set of named placeholders written as
//! `{{NAME}}`. Nothing in template text is ever evaluated.
//!
//! | Placeholder | Example | Source |
//! |-------------|---------|--------|
//! | `PROJECT_NAME` | "blog-site" | User input |
//! | `PROJECT_DIR` | "blog_site" | Underscored name |
//! | `AUTHOR_NAME` | "Ada Lovelace" | git `user.name` or fallback |
//! | `YEAR` | "2026" | Local clock |
//! | `DATE` | "2026-10-19" | Local clock |
//! | `GENERATED_AT` | "2026-10-19T12:00:00+02:00" | Local clock |
//! | `LOCATION` | "sites/blog_site" | Normalized location |
//! | `FRAMEWORK` | "jquery" or "" | User input |

use std::collections::HashMap;

use chrono::{DateTime, Datelike, Local};

use super::project::ProjectConfig;

/// Variables available to a template render.
#[derive(Debug, Clone)]
pub struct RenderContext {
    variables: HashMap<String, String>,
}

impl RenderContext {
    /// Empty context; every placeholder renders verbatim.
    pub fn new() -> Self {
        Self {
            variables: HashMap::new(),
        }
    }

    /// Standard variables for a project, stamped with `now`.
    pub fn for_project(config: &ProjectConfig, now: DateTime<Local>) -> Self {
        Self::new()
            .with_variable("PROJECT_NAME", config.name())
            .with_variable("PROJECT_DIR", config.directory_name())
            .with_variable("AUTHOR_NAME", config.author_name())
            .with_variable("YEAR", now.year().to_string())
            .with_variable("DATE", now.format("%Y-%m-%d").to_string())
            .with_variable("GENERATED_AT", now.to_rfc3339())
            .with_variable("LOCATION", config.location().display().to_string())
            .with_variable("FRAMEWORK", config.framework().unwrap_or_default())
    }

    pub fn with_variable(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.variables.insert(key.into(), value.into());
        self
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.variables.get(key).map(String::as_str)
    }

    /// Substitute known placeholders in a single left-to-right pass.
    ///
    /// Unknown placeholders and unterminated `{{` are copied through
    /// unchanged. Substituted values are never rescanned.
    pub fn render(&self, template: &str) -> String {
        let mut out = String::with_capacity(template.len());
        let mut rest = template;

        while let Some(start) = rest.find("{{") {
            out.push_str(&rest[..start]);
            let after_open = &rest[start + 2..];

            let Some(end) = after_open.find("}}") else {
                out.push_str(&rest[start..]);
                return out;
            };

            let key = after_open[..end].trim();
            match self.variables.get(key) {
                Some(value) => out.push_str(value),
                None => out.push_str(&rest[start..start + 2 + end + 2]),
            }
            rest = &after_open[end + 2..];
        }

        out.push_str(rest);
        out
    }
}

impl Default for RenderContext {
    fn default() -> Self {
        Self::new()
    }
}
