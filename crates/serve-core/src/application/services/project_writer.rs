//! Idempotent filesystem primitives scoped to one project location.
//!
//! Each primitive resolves its path under the project location, performs at
//! most one change through the [`Filesystem`] port, reports what happened,
//! and returns the [`FsOutcome`]. Pre-existing targets and missing move
//! sources are outcomes, never errors.

use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::{
    application::{
        ApplicationError,
        ports::{Filesystem, Reporter},
    },
    domain::{
        Action, ActionKind, FsOutcome, ProjectConfig, ScaffoldMode, ScaffoldReport,
        normalize_path,
    },
    error::ServeResult,
};

pub struct ProjectWriter<'a> {
    filesystem: &'a dyn Filesystem,
    reporter: &'a dyn Reporter,
    config: &'a ProjectConfig,
    report: ScaffoldReport,
}

impl<'a> ProjectWriter<'a> {
    pub fn new(
        filesystem: &'a dyn Filesystem,
        reporter: &'a dyn Reporter,
        config: &'a ProjectConfig,
        mode: ScaffoldMode,
    ) -> Self {
        Self {
            filesystem,
            reporter,
            config,
            report: ScaffoldReport::new(mode, config.location()),
        }
    }

    /// `location/relative`, expressed relative to the working directory.
    pub fn resolve(&self, relative: impl AsRef<Path>) -> PathBuf {
        normalize_path(
            self.config.working_dir(),
            [self.config.location(), relative.as_ref()],
        )
    }

    /// Ensure `location/relative` exists as a directory, parents included.
    pub fn make_path(&mut self, relative: &str) -> ServeResult<FsOutcome> {
        let path = self.resolve(relative);

        if self.filesystem.exists(&path) {
            self.record(ActionKind::Exists, path.display().to_string());
            return Ok(FsOutcome::AlreadyExists);
        }

        self.record(ActionKind::Create, path.display().to_string());
        self.filesystem.create_dir_all(&path)?;
        Ok(FsOutcome::Created)
    }

    /// Write `contents` to `location/relative` unless something is already there.
    ///
    /// The written file always ends with exactly one trailing newline added
    /// by this call (none is added when `contents` already ends with one).
    pub fn create_file(&mut self, relative: &str, contents: &str) -> ServeResult<FsOutcome> {
        let path = self.resolve(relative);

        if self.filesystem.exists(&path) {
            self.record(ActionKind::Exists, path.display().to_string());
            return Ok(FsOutcome::AlreadyExists);
        }

        self.record(ActionKind::Create, path.display().to_string());
        if contents.ends_with('\n') {
            self.filesystem.write_file(&path, contents)?;
        } else {
            self.filesystem.write_file(&path, &format!("{contents}\n"))?;
        }
        Ok(FsOutcome::Created)
    }

    /// Create an empty file if absent; an existing file is left untouched.
    pub fn create_empty_file(&mut self, relative: &str) -> ServeResult<FsOutcome> {
        let path = self.resolve(relative);
        let existed = self.filesystem.exists(&path);

        self.filesystem.touch(&path)?;

        if existed {
            debug!(path = %path.display(), "touch target already present");
            Ok(FsOutcome::AlreadyExists)
        } else {
            self.record(ActionKind::Touch, path.display().to_string());
            Ok(FsOutcome::Created)
        }
    }

    /// Move `location/from` to `location/to` when the source exists.
    ///
    /// An existing directory at `to` receives the source under its own
    /// basename; otherwise the source is renamed to `to`. The final
    /// destination must not already exist.
    pub fn move_file(&mut self, from: &str, to: &str) -> ServeResult<FsOutcome> {
        let from_path = self.resolve(from);
        let to_path = self.resolve(to);

        if !self.filesystem.exists(&from_path) {
            debug!(from = %from_path.display(), "move source absent, skipping");
            return Ok(FsOutcome::Skipped);
        }

        let destination = match (self.filesystem.is_dir(&to_path), from_path.file_name()) {
            (true, Some(basename)) => to_path.join(basename),
            _ => to_path,
        };

        if self.filesystem.exists(&destination) {
            return Err(ApplicationError::MoveDestinationExists {
                from: from_path,
                to: destination,
            }
            .into());
        }

        self.record(
            ActionKind::Move,
            format!("{}/{{{} => {}}}", self.config.location().display(), from, to),
        );
        self.filesystem.rename(&from_path, &destination)?;
        Ok(FsOutcome::Moved)
    }

    /// Report a non-filesystem step (e.g. framework installation).
    pub fn record(&mut self, kind: ActionKind, subject: String) {
        info!(action = %kind, subject = %subject);
        let action = Action::new(kind, subject);
        self.reporter.report(&action);
        self.report.push(action);
    }

    pub fn finish(self) -> ScaffoldReport {
        self.report
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;
    use crate::{
        application::ports::{MockFilesystem, SilentReporter},
        domain::ProjectOptions,
        error::ServeError,
    };

    fn project() -> ProjectConfig {
        ProjectConfig::new(
            ProjectOptions::new("site", ".").with_author("Ada"),
            None,
            PathBuf::from("/work"),
        )
        .unwrap()
    }

    #[test]
    fn create_file_adds_missing_newline_only() {
        let mut fs = MockFilesystem::new();
        fs.expect_exists().returning(|_| false);
        fs.expect_write_file()
            .withf(|path, content| path == Path::new("site/a") && content == "one\n")
            .times(1)
            .returning(|_, _| Ok(()));
        fs.expect_write_file()
            .withf(|path, content| path == Path::new("site/b") && content == "two\n")
            .times(1)
            .returning(|_, _| Ok(()));

        let config = project();
        let mut writer = ProjectWriter::new(&fs, &SilentReporter, &config, ScaffoldMode::Create);
        assert_eq!(writer.create_file("a", "one").unwrap(), FsOutcome::Created);
        assert_eq!(writer.create_file("b", "two\n").unwrap(), FsOutcome::Created);
    }

    #[test]
    fn existing_file_is_reported_not_written() {
        let mut fs = MockFilesystem::new();
        fs.expect_exists().returning(|_| true);
        fs.expect_write_file().never();

        let config = project();
        let mut writer = ProjectWriter::new(&fs, &SilentReporter, &config, ScaffoldMode::Create);
        assert_eq!(
            writer.create_file("config.ru", "run App").unwrap(),
            FsOutcome::AlreadyExists
        );

        let report = writer.finish();
        assert_eq!(report.actions.len(), 1);
        assert_eq!(report.actions[0].kind, ActionKind::Exists);
        assert_eq!(report.actions[0].subject, "site/config.ru");
    }

    #[test]
    fn move_without_source_is_skipped() {
        let mut fs = MockFilesystem::new();
        fs.expect_exists().returning(|_| false);
        fs.expect_rename().never();

        let config = project();
        let mut writer = ProjectWriter::new(&fs, &SilentReporter, &config, ScaffoldMode::Convert);
        assert_eq!(writer.move_file("src", "sass").unwrap(), FsOutcome::Skipped);
        assert!(writer.finish().actions.is_empty());
    }

    #[test]
    fn move_into_directory_keeps_basename() {
        let mut fs = MockFilesystem::new();
        fs.expect_exists()
            .returning(|path| path == Path::new("site/images"));
        fs.expect_is_dir()
            .returning(|path| path == Path::new("site/public"));
        fs.expect_rename()
            .withf(|from, to| {
                from == Path::new("site/images") && to == Path::new("site/public/images")
            })
            .times(1)
            .returning(|_, _| Ok(()));

        let config = project();
        let mut writer = ProjectWriter::new(&fs, &SilentReporter, &config, ScaffoldMode::Convert);
        assert_eq!(writer.move_file("images", "public").unwrap(), FsOutcome::Moved);
        assert_eq!(writer.finish().actions[0].subject, "site/{images => public}");
    }

    #[test]
    fn move_onto_existing_destination_fails() {
        let mut fs = MockFilesystem::new();
        fs.expect_exists().returning(|_| true);
        fs.expect_is_dir().returning(|_| false);
        fs.expect_rename().never();

        let config = project();
        let mut writer = ProjectWriter::new(&fs, &SilentReporter, &config, ScaffoldMode::Convert);
        let err = writer.move_file("src", "sass").unwrap_err();
        assert!(matches!(
            err,
            ServeError::Application(ApplicationError::MoveDestinationExists { .. })
        ));
    }

    #[test]
    fn touch_reports_only_new_files() {
        let mut fs = MockFilesystem::new();
        fs.expect_exists().times(1).returning(|_| true);
        fs.expect_touch().times(1).returning(|_| Ok(()));

        let config = project();
        let mut writer = ProjectWriter::new(&fs, &SilentReporter, &config, ScaffoldMode::Create);
        assert_eq!(
            writer.create_empty_file("tmp/restart.txt").unwrap(),
            FsOutcome::AlreadyExists
        );
        assert!(writer.finish().actions.is_empty());
    }
}
