//! Local filesystem adapter using std::fs.

use std::fs::{self, OpenOptions};
use std::io;
use std::path::{Path, PathBuf};

use serve_core::{
    application::{ApplicationError, ports::Filesystem},
    error::{ServeError, ServeResult},
};

/// Production filesystem implementation using `std::fs`.
///
/// Relative paths resolve against the process working directory, or against
/// `root` when the adapter was built with [`LocalFilesystem::rooted_at`].
#[derive(Debug, Clone, Default)]
pub struct LocalFilesystem {
    root: Option<PathBuf>,
}

impl LocalFilesystem {
    /// Create a new local filesystem adapter.
    pub fn new() -> Self {
        Self { root: None }
    }

    /// Resolve relative paths under `root` instead of the process CWD.
    pub fn rooted_at(root: impl Into<PathBuf>) -> Self {
        Self {
            root: Some(root.into()),
        }
    }

    fn resolve(&self, path: &Path) -> PathBuf {
        match &self.root {
            Some(root) => root.join(path),
            None => path.to_path_buf(),
        }
    }
}

impl Filesystem for LocalFilesystem {
    fn exists(&self, path: &Path) -> bool {
        self.resolve(path).exists()
    }

    fn is_dir(&self, path: &Path) -> bool {
        self.resolve(path).is_dir()
    }

    fn create_dir_all(&self, path: &Path) -> ServeResult<()> {
        fs::create_dir_all(self.resolve(path)).map_err(|e| map_io_error(path, e, "create directory"))
    }

    fn write_file(&self, path: &Path, content: &str) -> ServeResult<()> {
        fs::write(self.resolve(path), content).map_err(|e| map_io_error(path, e, "write file"))
    }

    fn touch(&self, path: &Path) -> ServeResult<()> {
        OpenOptions::new()
            .create(true)
            .append(true)
            .open(self.resolve(path))
            .map(drop)
            .map_err(|e| map_io_error(path, e, "touch file"))
    }

    fn rename(&self, from: &Path, to: &Path) -> ServeResult<()> {
        fs::rename(self.resolve(from), self.resolve(to))
            .map_err(|e| map_io_error(from, e, &format!("move to {}", to.display())))
    }
}

fn map_io_error(path: &Path, e: io::Error, operation: &str) -> ServeError {
    ApplicationError::FilesystemError {
        path: path.to_path_buf(),
        reason: format!("Failed to {}: {}", operation, e),
    }
    .into()
}
