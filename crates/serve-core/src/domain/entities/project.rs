//! Project options and the immutable configuration derived from them.

use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::domain::{error::DomainError, paths::normalize_location};

/// Author used when version control has no `user.name`.
pub const DEFAULT_AUTHOR: &str = "Your Full Name";

/// Caller-supplied options for one `create` or `convert` run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectOptions {
    pub name: String,
    pub directory: PathBuf,
    pub framework: Option<String>,
    /// Explicit author; skips the version-control lookup when set.
    pub author: Option<String>,
}

impl ProjectOptions {
    pub fn new(name: impl Into<String>, directory: impl Into<PathBuf>) -> Self {
        Self {
            name: name.into(),
            directory: directory.into(),
            framework: None,
            author: None,
        }
    }

    pub fn with_framework(mut self, framework: impl Into<String>) -> Self {
        self.framework = Some(framework.into());
        self
    }

    pub fn with_author(mut self, author: impl Into<String>) -> Self {
        self.author = Some(author.into());
        self
    }
}

/// Everything one scaffolding run needs, fixed at construction.
///
/// Invariant: `location` is derived once in [`ProjectConfig::new`] and is
/// relative to `working_dir`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProjectConfig {
    name: String,
    base_directory: PathBuf,
    location: PathBuf,
    author_name: String,
    framework: Option<String>,
    #[serde(skip)]
    working_dir: PathBuf,
}

impl ProjectConfig {
    /// Build a config from options.
    ///
    /// `author_lookup` is the best-effort version-control answer; blank values
    /// fall back to [`DEFAULT_AUTHOR`]. An explicit `options.author` wins.
    pub fn new(
        options: ProjectOptions,
        author_lookup: Option<String>,
        working_dir: impl Into<PathBuf>,
    ) -> Result<Self, DomainError> {
        let working_dir = working_dir.into();
        if !working_dir.is_absolute() {
            return Err(DomainError::RelativeWorkingDirectory {
                path: working_dir.display().to_string(),
            });
        }

        let name = validate_name(&options.name)?;
        if options.directory.as_os_str().is_empty() {
            return Err(DomainError::MissingBaseDirectory);
        }

        let location = normalize_location(&working_dir, &options.directory, Some(&name));

        let author_name = options
            .author
            .or(author_lookup)
            .map(|a| a.trim().to_string())
            .filter(|a| !a.is_empty())
            .unwrap_or_else(|| DEFAULT_AUTHOR.to_string());

        let framework = options
            .framework
            .map(|f| f.trim().to_string())
            .filter(|f| !f.is_empty());

        Ok(Self {
            name,
            base_directory: options.directory,
            location,
            author_name,
            framework,
            working_dir,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn base_directory(&self) -> &Path {
        &self.base_directory
    }

    /// Project root, relative to the working directory.
    pub fn location(&self) -> &Path {
        &self.location
    }

    pub fn author_name(&self) -> &str {
        &self.author_name
    }

    pub fn framework(&self) -> Option<&str> {
        self.framework.as_deref()
    }

    pub fn working_dir(&self) -> &Path {
        &self.working_dir
    }

    /// Directory name derived from the project name.
    pub fn directory_name(&self) -> String {
        underscore(&self.name)
    }
}

/// Collapse every run of whitespace and/or hyphens into a single `_`.
pub fn underscore(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut in_run = false;

    for c in name.chars() {
        if c == '-' || c.is_whitespace() {
            if !in_run {
                out.push('_');
                in_run = true;
            }
        } else {
            out.push(c);
            in_run = false;
        }
    }

    out
}

fn validate_name(name: &str) -> Result<String, DomainError> {
    if name.trim().is_empty() {
        return Err(DomainError::InvalidProjectName {
            name: name.into(),
            reason: "name cannot be blank".into(),
        });
    }
    if name.contains('/') || name.contains('\\') {
        return Err(DomainError::InvalidProjectName {
            name: name.into(),
            reason: "name cannot contain path separators; use --directory instead".into(),
        });
    }
    if name == "." || name == ".." {
        return Err(DomainError::InvalidProjectName {
            name: name.into(),
            reason: "name cannot be a relative directory marker".into(),
        });
    }
    Ok(name.to_string())
}
