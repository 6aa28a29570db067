//! Version-control configuration readers.

use std::{collections::HashMap, path::PathBuf, process::Command};

use tracing::debug;

use serve_core::application::ports::VersionControlConfigReader;

/// Reads values with `git config <key>`.
///
/// Any failure (git missing, key unset, non-UTF-8 output) reads as `None`.
#[derive(Debug, Clone, Default)]
pub struct GitConfigReader {
    cwd: Option<PathBuf>,
}

impl GitConfigReader {
    pub fn new() -> Self {
        Self::default()
    }

    /// Run git from `dir` so repository-local config is honored.
    pub fn in_dir(dir: impl Into<PathBuf>) -> Self {
        Self {
            cwd: Some(dir.into()),
        }
    }
}

impl VersionControlConfigReader for GitConfigReader {
    fn read(&self, key: &str) -> Option<String> {
        let mut command = Command::new("git");
        command.arg("config").arg(key);
        if let Some(dir) = &self.cwd {
            command.current_dir(dir);
        }

        let output = match command.output() {
            Ok(output) => output,
            Err(e) => {
                debug!(error = %e, "git unavailable");
                return None;
            }
        };

        if !output.status.success() {
            debug!(key, status = %output.status, "git config lookup failed");
            return None;
        }

        let value = String::from_utf8(output.stdout).ok()?;
        let value = value.trim();
        (!value.is_empty()).then(|| value.to_string())
    }
}

/// Fixed key/value reader for tests and for callers that already know the
/// answers.
#[derive(Debug, Clone, Default)]
pub struct StaticConfigReader {
    values: HashMap<String, String>,
}

impl StaticConfigReader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.values.insert(key.into(), value.into());
        self
    }
}

impl VersionControlConfigReader for StaticConfigReader {
    fn read(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn static_reader_returns_known_keys_only() {
        let reader = StaticConfigReader::new().with("user.name", "Ada Lovelace");
        assert_eq!(reader.read("user.name").as_deref(), Some("Ada Lovelace"));
        assert_eq!(reader.read("user.email"), None);
    }

    #[test]
    fn git_reader_never_errors() {
        let dir = tempfile::tempdir().unwrap();
        let reader = GitConfigReader::in_dir(dir.path());
        // Unset or not, an unknown key is never a failure.
        assert_eq!(reader.read("serve.definitely-not-a-key"), None);
    }
}
