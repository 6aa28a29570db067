// ============================================================================
//  CLEAN MODULE BOUNDARIES
// ============================================================================

//! Core domain layer for Serve.
//!
//! Pure logic only: turning caller options into a [`ProjectConfig`],
//! normalizing paths against a working directory, and substituting template
//! placeholders. All I/O happens behind ports in the application layer.
//!
//! - **No I/O**: No filesystem, process, or clock access except through
//!   explicit arguments
//! - **Immutable entities**: a `ProjectConfig` never changes once built
pub mod entities;
pub mod error;
pub mod paths;
pub mod value_objects;

// Re-exports for convenience
pub use entities::{
    project::{DEFAULT_AUTHOR, ProjectConfig, ProjectOptions, underscore},
    render_context::RenderContext,
    report::{Action, ScaffoldReport},
};

pub use error::{DomainError, ErrorCategory};

pub use paths::{normalize_location, normalize_path};

pub use value_objects::{ActionKind, FsOutcome, ScaffoldMode, TemplateName};

#[cfg(test)]
mod tests {
    use std::path::{Path, PathBuf};
    use std::str::FromStr;

    use chrono::{Local, TimeZone};

    use super::*;

    fn config(options: ProjectOptions) -> ProjectConfig {
        ProjectConfig::new(options, None, "/tmp/work").unwrap()
    }

    // ========================================================================
    // Underscore Tests
    // ========================================================================

    #[test]
    fn underscore_collapses_spaces_and_hyphens() {
        assert_eq!(underscore("My Cool-Project"), "My_Cool_Project");
        assert_eq!(underscore("blog-site"), "blog_site");
    }

    #[test]
    fn underscore_collapses_mixed_runs() {
        assert_eq!(underscore("a - b"), "a_b");
        assert_eq!(underscore("a--b"), "a_b");
        assert_eq!(underscore("a \t\n b"), "a_b");
        assert_eq!(underscore("-lead trail-"), "_lead_trail_");
    }

    #[test]
    fn underscore_leaves_plain_names_alone() {
        assert_eq!(underscore("old_site"), "old_site");
        assert_eq!(underscore("Site2"), "Site2");
    }

    // ========================================================================
    // ProjectConfig Tests
    // ========================================================================

    #[test]
    fn location_is_underscored_name_under_base() {
        let cfg = config(ProjectOptions::new("blog-site", "/tmp/work"));
        assert_eq!(cfg.location(), Path::new("blog_site"));
        assert_eq!(cfg.directory_name(), "blog_site");
        assert_eq!(cfg.name(), "blog-site");
    }

    #[test]
    fn location_is_relative_to_working_dir() {
        let cfg = config(ProjectOptions::new("site", "/srv/www"));
        assert_eq!(cfg.location(), Path::new("../../srv/www/site"));
        assert_eq!(cfg.base_directory(), Path::new("/srv/www"));
    }

    #[test]
    fn author_falls_back_to_placeholder() {
        let cfg = config(ProjectOptions::new("site", "."));
        assert_eq!(cfg.author_name(), DEFAULT_AUTHOR);

        let blank = ProjectConfig::new(ProjectOptions::new("site", "."), Some("  ".into()), "/w")
            .unwrap();
        assert_eq!(blank.author_name(), DEFAULT_AUTHOR);
    }

    #[test]
    fn author_lookup_is_used_when_present() {
        let cfg =
            ProjectConfig::new(ProjectOptions::new("site", "."), Some("Ada\n".into()), "/w").unwrap();
        assert_eq!(cfg.author_name(), "Ada");
    }

    #[test]
    fn explicit_author_beats_lookup() {
        let cfg = ProjectConfig::new(
            ProjectOptions::new("site", ".").with_author("Grace"),
            Some("Ada".into()),
            "/w",
        )
        .unwrap();
        assert_eq!(cfg.author_name(), "Grace");
    }

    #[test]
    fn blank_framework_is_absent() {
        let cfg = config(ProjectOptions::new("site", ".").with_framework("  "));
        assert_eq!(cfg.framework(), None);

        let cfg = config(ProjectOptions::new("site", ".").with_framework("jquery"));
        assert_eq!(cfg.framework(), Some("jquery"));
    }

    #[test]
    fn blank_name_is_rejected() {
        let err = ProjectConfig::new(ProjectOptions::new("  ", "."), None, "/w").unwrap_err();
        assert!(matches!(err, DomainError::InvalidProjectName { .. }));
    }

    #[test]
    fn surrounding_whitespace_in_name_is_underscored() {
        let cfg = config(ProjectOptions::new(" site ", "."));
        assert_eq!(cfg.name(), " site ");
        assert_eq!(cfg.location(), Path::new("_site_"));
    }

    #[test]
    fn name_with_separator_is_rejected() {
        let err = ProjectConfig::new(ProjectOptions::new("a/b", "."), None, "/w").unwrap_err();
        assert!(matches!(err, DomainError::InvalidProjectName { .. }));
    }

    #[test]
    fn empty_directory_is_rejected() {
        let err = ProjectConfig::new(ProjectOptions::new("site", ""), None, "/w").unwrap_err();
        assert_eq!(err, DomainError::MissingBaseDirectory);
    }

    #[test]
    fn relative_working_dir_is_rejected() {
        let err = ProjectConfig::new(ProjectOptions::new("site", "."), None, "work").unwrap_err();
        assert!(matches!(err, DomainError::RelativeWorkingDirectory { .. }));
    }

    // ========================================================================
    // TemplateName Tests
    // ========================================================================

    #[test]
    fn template_names_round_trip_through_strings() {
        for name in TemplateName::ALL {
            assert_eq!(TemplateName::from_str(name.as_str()).unwrap(), name);
        }
        assert!(TemplateName::from_str("gemfile").is_err());
    }

    #[test]
    fn template_output_files() {
        let files: Vec<_> = TemplateName::ALL.iter().map(|t| t.output_file()).collect();
        assert_eq!(
            files,
            ["config.ru", "LICENSE", ".gitignore", "compass.config", "README.markdown"]
        );
    }

    // ========================================================================
    // Render Context Tests
    // ========================================================================

    #[test]
    fn render_context_standard_variables() {
        let cfg = ProjectConfig::new(
            ProjectOptions::new("My Site", "sites").with_framework("jquery"),
            Some("Ada".into()),
            "/tmp/work",
        )
        .unwrap();
        let now = Local.with_ymd_and_hms(2026, 3, 14, 9, 26, 53).unwrap();
        let ctx = RenderContext::for_project(&cfg, now);

        assert_eq!(ctx.get("PROJECT_NAME"), Some("My Site"));
        assert_eq!(ctx.get("PROJECT_DIR"), Some("My_Site"));
        assert_eq!(ctx.get("AUTHOR_NAME"), Some("Ada"));
        assert_eq!(ctx.get("YEAR"), Some("2026"));
        assert_eq!(ctx.get("DATE"), Some("2026-03-14"));
        assert_eq!(ctx.get("LOCATION"), Some("sites/My_Site"));
        assert_eq!(ctx.get("FRAMEWORK"), Some("jquery"));
    }

    #[test]
    fn render_substitutes_known_placeholders() {
        let ctx = RenderContext::new()
            .with_variable("PROJECT_NAME", "blog")
            .with_variable("YEAR", "2026");

        assert_eq!(
            ctx.render("Copyright (c) {{YEAR}} {{ PROJECT_NAME }}"),
            "Copyright (c) 2026 blog"
        );
    }

    #[test]
    fn render_keeps_unknown_placeholders() {
        let ctx = RenderContext::new().with_variable("YEAR", "2026");
        assert_eq!(ctx.render("{{YEAR}} {{ MISSING }}"), "2026 {{ MISSING }}");
        assert_eq!(ctx.render("open {{YEAR"), "open {{YEAR");
    }

    #[test]
    fn render_does_not_rescan_values() {
        let ctx = RenderContext::new()
            .with_variable("PROJECT_NAME", "{{AUTHOR_NAME}}")
            .with_variable("AUTHOR_NAME", "Ada");
        assert_eq!(ctx.render("{{PROJECT_NAME}}"), "{{AUTHOR_NAME}}");
    }

    #[test]
    fn render_leaves_ruby_interpolation_alone() {
        let ctx = RenderContext::new().with_variable("PROJECT_NAME", "blog");
        assert_eq!(ctx.render("#{File.dirname(__FILE__)}"), "#{File.dirname(__FILE__)}");
    }

    // ========================================================================
    // Report Tests
    // ========================================================================

    #[test]
    fn report_counts_and_noop() {
        let mut report = ScaffoldReport::new(ScaffoldMode::Create, PathBuf::from("blog"));
        report.push(Action::new(ActionKind::Exists, "blog"));
        assert!(report.is_noop());

        report.push(Action::new(ActionKind::Create, "blog/public"));
        assert!(!report.is_noop());
        assert_eq!(report.count(ActionKind::Create), 1);
        assert_eq!(report.subjects(ActionKind::Exists).collect::<Vec<_>>(), ["blog"]);
    }

    #[test]
    fn report_serializes_lowercase_kinds() {
        let mut report = ScaffoldReport::new(ScaffoldMode::Convert, PathBuf::from("old_site"));
        report.push(Action::new(ActionKind::Move, "old_site{src => sass}"));
        let json = serde_json::to_value(&report).unwrap();

        assert_eq!(json["mode"], "convert");
        assert_eq!(json["actions"][0]["kind"], "move");
    }
}
