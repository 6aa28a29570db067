//! Templates compiled into the binary.

use serve_core::{application::ports::TemplateStore, domain::TemplateName, error::ServeResult};

const COMPASS_CONFIG: &str = include_str!("../../templates/compass_config");
const CONFIG_RU: &str = include_str!("../../templates/config_ru");
const GITIGNORE: &str = include_str!("../../templates/gitignore");
const LICENSE: &str = include_str!("../../templates/license");
const README: &str = include_str!("../../templates/readme");

/// The default template store; every template is always available.
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinTemplateStore;

impl BuiltinTemplateStore {
    pub fn new() -> Self {
        Self
    }

    /// Raw text of a built-in template.
    pub fn text(name: TemplateName) -> &'static str {
        match name {
            TemplateName::CompassConfig => COMPASS_CONFIG,
            TemplateName::ConfigRu => CONFIG_RU,
            TemplateName::Gitignore => GITIGNORE,
            TemplateName::License => LICENSE,
            TemplateName::Readme => README,
        }
    }
}

impl TemplateStore for BuiltinTemplateStore {
    fn load(&self, name: TemplateName) -> ServeResult<String> {
        Ok(Self::text(name).to_string())
    }

    fn describe(&self) -> String {
        "built-in templates".into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_template_is_present() {
        let store = BuiltinTemplateStore::new();
        for name in TemplateName::ALL {
            assert!(!store.load(name).unwrap().trim().is_empty(), "{name} is empty");
        }
    }

    #[test]
    fn license_names_year_and_author() {
        let license = BuiltinTemplateStore::text(TemplateName::License);
        assert!(license.contains("{{YEAR}}"));
        assert!(license.contains("{{AUTHOR_NAME}}"));
    }

    #[test]
    fn compass_config_matches_project_layout() {
        let compass = BuiltinTemplateStore::text(TemplateName::CompassConfig);
        assert!(compass.contains("sass_dir        = \"sass\""));
        assert!(compass.contains("public/stylesheets"));
    }
}
