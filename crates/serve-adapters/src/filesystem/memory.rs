//! In-memory filesystem adapter for testing.

use std::{
    collections::{HashMap, HashSet},
    path::{Path, PathBuf},
    sync::{Arc, RwLock},
};

use serve_core::{
    application::{ApplicationError, ports::Filesystem},
    domain::paths::lexical_clean,
    error::ServeResult,
};

/// In-memory filesystem for testing.
///
/// Paths are cleaned lexically, so `site/./tmp` and `site/tmp` are the same
/// entry. The empty path (the working directory) always exists.
#[derive(Debug, Clone, Default)]
pub struct MemoryFilesystem {
    inner: Arc<RwLock<MemoryFilesystemInner>>,
}

#[derive(Debug, Default)]
struct MemoryFilesystemInner {
    files: HashMap<PathBuf, String>,
    directories: HashSet<PathBuf>,
}

impl MemoryFilesystemInner {
    fn is_dir(&self, key: &Path) -> bool {
        key.as_os_str().is_empty() || self.directories.contains(key)
    }

    fn exists(&self, key: &Path) -> bool {
        self.is_dir(key) || self.files.contains_key(key)
    }

    fn require_parent(&self, key: &Path) -> ServeResult<()> {
        match key.parent() {
            Some(parent) if !self.is_dir(parent) => Err(ApplicationError::FilesystemError {
                path: key.to_path_buf(),
                reason: "Parent directory does not exist".into(),
            }
            .into()),
            _ => Ok(()),
        }
    }
}

impl MemoryFilesystem {
    /// Create a new empty memory filesystem.
    pub fn new() -> Self {
        Self::default()
    }

    /// Read a file's content (testing helper).
    pub fn read_file(&self, path: impl AsRef<Path>) -> Option<String> {
        let inner = self.inner.read().ok()?;
        inner.files.get(&key(path.as_ref())).cloned()
    }

    /// All files, sorted (testing helper).
    pub fn list_files(&self) -> Vec<PathBuf> {
        let Ok(inner) = self.inner.read() else {
            return Vec::new();
        };
        let mut files: Vec<_> = inner.files.keys().cloned().collect();
        files.sort();
        files
    }

    /// Seed a file, creating its parent directories (testing helper).
    pub fn seed_file(&self, path: impl AsRef<Path>, content: &str) -> ServeResult<()> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            self.create_dir_all(parent)?;
        }
        self.write_file(path, content)
    }
}

impl Filesystem for MemoryFilesystem {
    fn exists(&self, path: &Path) -> bool {
        self.inner
            .read()
            .map(|inner| inner.exists(&key(path)))
            .unwrap_or(false)
    }

    fn is_dir(&self, path: &Path) -> bool {
        self.inner
            .read()
            .map(|inner| inner.is_dir(&key(path)))
            .unwrap_or(false)
    }

    fn create_dir_all(&self, path: &Path) -> ServeResult<()> {
        let mut inner = self
            .inner
            .write()
            .map_err(|_| ApplicationError::LockPoisoned)?;

        let mut current = PathBuf::new();
        for component in key(path).components() {
            current.push(component);
            if inner.files.contains_key(&current) {
                return Err(ApplicationError::FilesystemError {
                    path: path.to_path_buf(),
                    reason: format!("{} is a file", current.display()),
                }
                .into());
            }
            inner.directories.insert(current.clone());
        }

        Ok(())
    }

    fn write_file(&self, path: &Path, content: &str) -> ServeResult<()> {
        let mut inner = self
            .inner
            .write()
            .map_err(|_| ApplicationError::LockPoisoned)?;

        let key = key(path);
        inner.require_parent(&key)?;
        inner.files.insert(key, content.to_string());
        Ok(())
    }

    fn touch(&self, path: &Path) -> ServeResult<()> {
        let mut inner = self
            .inner
            .write()
            .map_err(|_| ApplicationError::LockPoisoned)?;

        let key = key(path);
        if inner.exists(&key) {
            return Ok(());
        }
        inner.require_parent(&key)?;
        inner.files.insert(key, String::new());
        Ok(())
    }

    fn rename(&self, from: &Path, to: &Path) -> ServeResult<()> {
        let mut inner = self
            .inner
            .write()
            .map_err(|_| ApplicationError::LockPoisoned)?;

        let from = key(from);
        let to = key(to);

        if !inner.exists(&from) {
            return Err(ApplicationError::FilesystemError {
                path: from,
                reason: "No such file or directory".into(),
            }
            .into());
        }
        inner.require_parent(&to)?;

        if let Some(content) = inner.files.remove(&from) {
            inner.files.insert(to, content);
            return Ok(());
        }

        // Directory: re-home every entry beneath it.
        let moved_dirs: Vec<_> = inner
            .directories
            .iter()
            .filter(|d| d.starts_with(&from))
            .cloned()
            .collect();
        for dir in moved_dirs {
            inner.directories.remove(&dir);
            inner.directories.insert(rebase(&dir, &from, &to));
        }

        let moved_files: Vec<_> = inner
            .files
            .keys()
            .filter(|f| f.starts_with(&from))
            .cloned()
            .collect();
        for file in moved_files {
            if let Some(content) = inner.files.remove(&file) {
                inner.files.insert(rebase(&file, &from, &to), content);
            }
        }

        Ok(())
    }
}

fn key(path: &Path) -> PathBuf {
    lexical_clean(path)
}

fn rebase(path: &Path, from: &Path, to: &Path) -> PathBuf {
    match path.strip_prefix(from) {
        Ok(rest) if rest.as_os_str().is_empty() => to.to_path_buf(),
        Ok(rest) => to.join(rest),
        Err(_) => path.to_path_buf(),
    }
}
