//! Templates read from a user-supplied directory.
//!
//! The directory holds one file per template, named after the template
//! (`config_ru`, `license`, ...). Files are read on every load so edits show
//! up without a restart.

use std::{
    fs, io,
    path::{Path, PathBuf},
};

use tracing::{debug, warn};
use walkdir::WalkDir;

use serve_core::{
    application::{ApplicationError, ports::TemplateStore},
    domain::TemplateName,
    error::ServeResult,
};

#[derive(Debug, Clone)]
pub struct DirectoryTemplateStore {
    root: PathBuf,
}

impl DirectoryTemplateStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Regular files directly inside the template directory, sorted.
    ///
    /// Unreadable entries are logged and skipped.
    pub fn files(&self) -> Vec<PathBuf> {
        WalkDir::new(&self.root)
            .min_depth(1)
            .max_depth(1)
            .sort_by_file_name()
            .into_iter()
            .filter_map(|entry| match entry {
                Ok(entry) => Some(entry),
                Err(e) => {
                    warn!(error = %e, "skipping unreadable template entry");
                    None
                }
            })
            .filter(|entry| entry.file_type().is_file())
            .map(|entry| entry.into_path())
            .collect()
    }

    fn path_for(&self, name: TemplateName) -> PathBuf {
        self.root.join(name.as_str())
    }
}

impl TemplateStore for DirectoryTemplateStore {
    fn load(&self, name: TemplateName) -> ServeResult<String> {
        let path = self.path_for(name);
        debug!(path = %path.display(), "reading template");

        fs::read_to_string(&path).map_err(|e| {
            let error = match e.kind() {
                io::ErrorKind::NotFound => ApplicationError::TemplateNotFound {
                    name: name.to_string(),
                    source_description: self.describe(),
                },
                _ => ApplicationError::TemplateUnreadable {
                    name: name.to_string(),
                    reason: e.to_string(),
                },
            };
            error.into()
        })
    }

    fn describe(&self) -> String {
        format!("template directory {}", self.root.display())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serve_core::error::ServeError;

    #[test]
    fn loads_template_by_name() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("readme"), "# {{PROJECT_NAME}}").unwrap();

        let store = DirectoryTemplateStore::new(dir.path());
        assert_eq!(store.load(TemplateName::Readme).unwrap(), "# {{PROJECT_NAME}}");
    }

    #[test]
    fn missing_file_is_template_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let store = DirectoryTemplateStore::new(dir.path());

        let err = store.load(TemplateName::License).unwrap_err();
        assert!(matches!(
            err,
            ServeError::Application(ApplicationError::TemplateNotFound { ref name, .. })
                if name == "license"
        ));
    }

    #[test]
    fn non_utf8_file_is_unreadable() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("gitignore"), [0xff, 0xfe, 0x00]).unwrap();

        let store = DirectoryTemplateStore::new(dir.path());
        let err = store.load(TemplateName::Gitignore).unwrap_err();
        assert!(matches!(
            err,
            ServeError::Application(ApplicationError::TemplateUnreadable { .. })
        ));
    }

    #[test]
    fn files_lists_only_top_level_files() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("readme"), "").unwrap();
        fs::write(dir.path().join("license"), "").unwrap();
        fs::create_dir(dir.path().join("nested")).unwrap();
        fs::write(dir.path().join("nested/gitignore"), "").unwrap();

        let names: Vec<_> = DirectoryTemplateStore::new(dir.path())
            .files()
            .into_iter()
            .filter_map(|p| p.file_name().map(|n| n.to_string_lossy().into_owned()))
            .collect();
        assert_eq!(names, ["license", "readme"]);
    }
}
