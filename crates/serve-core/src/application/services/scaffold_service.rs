//! Scaffold Service - main application orchestrator.
//!
//! `create` and `convert` are fixed sequences of idempotent steps:
//! 1. Establish the base structure (directories, rendered files, restart marker)
//! 2. Mode-specific directories (`create`) or layout moves (`convert`)
//! 3. Hand off to the framework installer when a framework was requested
//!
//! A failing step halts the sequence; everything before it stays on disk and
//! a re-run picks up where it stopped.

use std::path::PathBuf;

use chrono::{DateTime, Local};
use tracing::{info, instrument};

use crate::{
    application::{
        ApplicationError,
        ports::{
            Filesystem, FrameworkInstaller, Reporter, SilentReporter, TemplateStore,
            VersionControlConfigReader,
        },
        services::{project_writer::ProjectWriter, template_service::TemplateService},
    },
    domain::{
        ActionKind, ProjectConfig, ProjectOptions, RenderContext, ScaffoldMode, ScaffoldReport,
        TemplateName, paths::lexical_clean,
    },
    error::ServeResult,
};

/// Directories shared by `create` and `convert`, relative to the location.
pub const BASE_DIRECTORIES: [&str; 4] = [".", "public", "tmp", "views"];

/// Extra directories for a fresh project.
pub const CREATE_DIRECTORIES: [&str; 4] = [
    "public/images",
    "public/javascripts",
    "public/stylesheets",
    "sass",
];

/// `(from, to)` moves applied by `convert`, in order.
pub const CONVERT_MOVES: [(&str, &str); 4] = [
    ("images", "public/"),
    ("stylesheets", "public/"),
    ("javascripts", "public/"),
    ("src", "sass"),
];

/// Marker file Passenger-style servers watch for restarts.
pub const RESTART_MARKER: &str = "tmp/restart.txt";

const AUTHOR_KEY: &str = "user.name";

/// Main scaffolding service.
pub struct ProjectScaffolder {
    filesystem: Box<dyn Filesystem>,
    templates: TemplateService,
    installer: Box<dyn FrameworkInstaller>,
    version_control: Box<dyn VersionControlConfigReader>,
    reporter: Box<dyn Reporter>,
    working_dir: Option<PathBuf>,
    timestamp: Option<DateTime<Local>>,
}

impl ProjectScaffolder {
    /// Create a scaffolder with the given adapters.
    ///
    /// Defaults: process working directory, wall-clock time, no progress output.
    pub fn new(
        filesystem: Box<dyn Filesystem>,
        store: Box<dyn TemplateStore>,
        installer: Box<dyn FrameworkInstaller>,
        version_control: Box<dyn VersionControlConfigReader>,
    ) -> Self {
        Self {
            filesystem,
            templates: TemplateService::new(store),
            installer,
            version_control,
            reporter: Box::new(SilentReporter),
            working_dir: None,
            timestamp: None,
        }
    }

    /// Receive every action as it happens.
    pub fn with_reporter(mut self, reporter: Box<dyn Reporter>) -> Self {
        self.reporter = reporter;
        self
    }

    /// Resolve relative paths against `dir` instead of the process CWD.
    pub fn with_working_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.working_dir = Some(dir.into());
        self
    }

    /// Render templates with a fixed timestamp.
    pub fn with_timestamp(mut self, timestamp: DateTime<Local>) -> Self {
        self.timestamp = Some(timestamp);
        self
    }

    /// Build the immutable config for one run.
    ///
    /// Looks up the author in version control unless the options name one.
    #[instrument(skip_all, fields(project = %options.name))]
    pub fn configure(&self, options: ProjectOptions) -> ServeResult<ProjectConfig> {
        let working_dir = self.working_dir()?;

        let author_lookup = if options.author.is_some() {
            None
        } else {
            self.version_control.read(AUTHOR_KEY)
        };

        let config = ProjectConfig::new(options, author_lookup, working_dir)?;
        info!(
            location = %config.location().display(),
            author = %config.author_name(),
            framework = config.framework().unwrap_or("none"),
            "Project configured"
        );
        Ok(config)
    }

    /// Scaffold a new project.
    #[instrument(skip_all, fields(location = %config.location().display()))]
    pub fn create(&self, config: &ProjectConfig) -> ServeResult<ScaffoldReport> {
        let mut writer = self.writer(config, ScaffoldMode::Create);

        self.setup_base(&mut writer, config)?;
        for dir in CREATE_DIRECTORIES {
            writer.make_path(dir)?;
        }
        self.install_framework(&mut writer, config)?;

        let report = writer.finish();
        info!(actions = report.actions.len(), "Create completed");
        Ok(report)
    }

    /// Convert an existing Compass project layout.
    #[instrument(skip_all, fields(location = %config.location().display()))]
    pub fn convert(&self, config: &ProjectConfig) -> ServeResult<ScaffoldReport> {
        let mut writer = self.writer(config, ScaffoldMode::Convert);

        self.setup_base(&mut writer, config)?;
        for (from, to) in CONVERT_MOVES {
            writer.move_file(from, to)?;
        }
        self.install_framework(&mut writer, config)?;

        let report = writer.finish();
        info!(moved = report.count(ActionKind::Move), "Convert completed");
        Ok(report)
    }

    /// Template availability for the configured store.
    pub fn templates(&self) -> &TemplateService {
        &self.templates
    }

    // -------------------------------------------------------------------------
    // Internal Helpers
    // -------------------------------------------------------------------------

    fn writer<'a>(&'a self, config: &'a ProjectConfig, mode: ScaffoldMode) -> ProjectWriter<'a> {
        ProjectWriter::new(self.filesystem.as_ref(), self.reporter.as_ref(), config, mode)
    }

    /// Directories, rendered boilerplate, and the restart marker.
    ///
    /// All templates are rendered before the first file is written so a
    /// broken template store never leaves half the boilerplate behind.
    fn setup_base(&self, writer: &mut ProjectWriter<'_>, config: &ProjectConfig) -> ServeResult<()> {
        for dir in BASE_DIRECTORIES {
            writer.make_path(dir)?;
        }

        let context = RenderContext::for_project(config, self.timestamp.unwrap_or_else(Local::now));
        let rendered = TemplateName::ALL
            .into_iter()
            .map(|name| self.templates.render(name, &context).map(|text| (name, text)))
            .collect::<ServeResult<Vec<_>>>()?;

        for (name, contents) in rendered {
            writer.create_file(name.output_file(), &contents)?;
        }

        writer.create_empty_file(RESTART_MARKER)?;
        Ok(())
    }

    /// Installer errors are returned unchanged.
    fn install_framework(
        &self,
        writer: &mut ProjectWriter<'_>,
        config: &ProjectConfig,
    ) -> ServeResult<()> {
        let Some(framework) = config.framework() else {
            return Ok(());
        };

        writer.record(ActionKind::Installing, framework.to_string());
        let root = lexical_clean(&config.working_dir().join(config.location()));
        self.installer.install(&root, framework)
    }

    fn working_dir(&self) -> ServeResult<PathBuf> {
        match &self.working_dir {
            Some(dir) => Ok(dir.clone()),
            None => std::env::current_dir().map_err(|e| {
                ApplicationError::WorkingDirectoryUnavailable {
                    reason: e.to_string(),
                }
                .into()
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use super::*;
    use crate::application::ports::{
        MockFilesystem, MockFrameworkInstaller, MockTemplateStore, MockVersionControlConfigReader,
    };
    use crate::error::ServeError;

    fn store() -> MockTemplateStore {
        let mut store = MockTemplateStore::new();
        store
            .expect_load()
            .returning(|name| Ok(format!("{} for {{{{PROJECT_NAME}}}}", name)));
        store
    }

    fn no_git() -> MockVersionControlConfigReader {
        let mut git = MockVersionControlConfigReader::new();
        git.expect_read().returning(|_| None);
        git
    }

    fn idle_installer() -> MockFrameworkInstaller {
        let mut installer = MockFrameworkInstaller::new();
        installer.expect_install().never();
        installer
    }

    #[test]
    fn configure_reads_author_from_version_control() {
        let mut git = MockVersionControlConfigReader::new();
        git.expect_read()
            .withf(|key| key == "user.name")
            .times(1)
            .returning(|_| Some("Ada Lovelace".into()));

        let scaffolder = ProjectScaffolder::new(
            Box::new(MockFilesystem::new()),
            Box::new(store()),
            Box::new(idle_installer()),
            Box::new(git),
        )
        .with_working_dir("/tmp/work");

        let config = scaffolder
            .configure(ProjectOptions::new("blog-site", "/tmp/work"))
            .unwrap();
        assert_eq!(config.author_name(), "Ada Lovelace");
        assert_eq!(config.location(), Path::new("blog_site"));
    }

    #[test]
    fn configure_skips_lookup_for_explicit_author() {
        let mut git = MockVersionControlConfigReader::new();
        git.expect_read().never();

        let scaffolder = ProjectScaffolder::new(
            Box::new(MockFilesystem::new()),
            Box::new(store()),
            Box::new(idle_installer()),
            Box::new(git),
        )
        .with_working_dir("/tmp/work");

        let config = scaffolder
            .configure(ProjectOptions::new("site", ".").with_author("Grace"))
            .unwrap();
        assert_eq!(config.author_name(), "Grace");
    }

    #[test]
    fn create_over_complete_tree_changes_nothing() {
        let mut fs = MockFilesystem::new();
        fs.expect_exists().returning(|_| true);
        fs.expect_create_dir_all().never();
        fs.expect_write_file().never();
        fs.expect_rename().never();
        fs.expect_touch()
            .withf(|path| path == Path::new("blog_site/tmp/restart.txt"))
            .times(1)
            .returning(|_| Ok(()));

        let scaffolder = ProjectScaffolder::new(
            Box::new(fs),
            Box::new(store()),
            Box::new(idle_installer()),
            Box::new(no_git()),
        )
        .with_working_dir("/tmp/work");
        let config = scaffolder
            .configure(ProjectOptions::new("blog-site", "."))
            .unwrap();

        let report = scaffolder.create(&config).unwrap();
        assert!(report.is_noop());
        assert_eq!(report.count(ActionKind::Exists), 4 + 5 + 4);
    }

    #[test]
    fn missing_template_stops_before_files_are_written() {
        let mut fs = MockFilesystem::new();
        fs.expect_exists().returning(|_| false);
        fs.expect_create_dir_all().times(4).returning(|_| Ok(()));
        fs.expect_write_file().never();
        fs.expect_touch().never();

        let mut store = MockTemplateStore::new();
        store.expect_load().returning(|name| match name {
            TemplateName::Readme => Err(ApplicationError::TemplateNotFound {
                name: name.to_string(),
                source_description: "test store".into(),
            }
            .into()),
            _ => Ok("ok".into()),
        });

        let scaffolder = ProjectScaffolder::new(
            Box::new(fs),
            Box::new(store),
            Box::new(idle_installer()),
            Box::new(no_git()),
        )
        .with_working_dir("/tmp/work");
        let config = scaffolder.configure(ProjectOptions::new("site", ".")).unwrap();

        let err = scaffolder.create(&config).unwrap_err();
        assert!(matches!(
            err,
            ServeError::Application(ApplicationError::TemplateNotFound { .. })
        ));
    }

    #[test]
    fn installer_receives_absolute_location_and_errors_pass_through() {
        let mut fs = MockFilesystem::new();
        fs.expect_exists().returning(|_| true);
        fs.expect_touch().returning(|_| Ok(()));

        let mut installer = MockFrameworkInstaller::new();
        installer
            .expect_install()
            .withf(|location, framework| {
                location == Path::new("/tmp/work/sites/blog") && framework == "jquery"
            })
            .times(1)
            .returning(|_, framework| {
                Err(ApplicationError::FrameworkInstallFailed {
                    framework: framework.to_string(),
                    reason: "offline".into(),
                }
                .into())
            });

        let scaffolder = ProjectScaffolder::new(
            Box::new(fs),
            Box::new(store()),
            Box::new(installer),
            Box::new(no_git()),
        )
        .with_working_dir("/tmp/work");
        let config = scaffolder
            .configure(ProjectOptions::new("blog", "sites").with_framework("jquery"))
            .unwrap();

        let err = scaffolder.create(&config).unwrap_err();
        assert!(matches!(
            err,
            ServeError::Application(ApplicationError::FrameworkInstallFailed { ref reason, .. })
                if reason == "offline"
        ));
    }
}
