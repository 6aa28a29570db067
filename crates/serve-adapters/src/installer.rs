//! Framework installer that delegates to an external program.
//!
//! The project location is the child's working directory:
//!
//! ```text
//! <program> install <framework>
//! ```

use std::{path::Path, process::Command};

use tracing::{info, instrument};

use serve_core::{
    application::{ApplicationError, ports::FrameworkInstaller},
    error::{ServeError, ServeResult},
};

/// Program used when no installer is configured.
pub const DEFAULT_INSTALLER: &str = "serve-js";

#[derive(Debug, Clone)]
pub struct CommandInstaller {
    program: String,
}

impl CommandInstaller {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }

    pub fn program(&self) -> &str {
        &self.program
    }
}

impl Default for CommandInstaller {
    fn default() -> Self {
        Self::new(DEFAULT_INSTALLER)
    }
}

impl FrameworkInstaller for CommandInstaller {
    #[instrument(skip(self), fields(program = %self.program, location = %location.display()))]
    fn install(&self, location: &Path, framework: &str) -> ServeResult<()> {
        let executable = which::which(&self.program).map_err(|e| {
            failure(framework, format!("installer '{}' not found: {}", self.program, e))
        })?;

        let status = Command::new(&executable)
            .arg("install")
            .arg(framework)
            .current_dir(location)
            .status()
            .map_err(|e| failure(framework, format!("could not run {}: {}", executable.display(), e)))?;

        if !status.success() {
            return Err(failure(framework, format!("{} exited with {}", self.program, status)));
        }

        info!("framework installed");
        Ok(())
    }
}

fn failure(framework: &str, reason: String) -> ServeError {
    ApplicationError::FrameworkInstallFailed {
        framework: framework.to_string(),
        reason,
    }
    .into()
}
