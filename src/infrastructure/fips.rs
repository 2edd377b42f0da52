//! fips build orchestrator and workspace conventions
//!
//! A fips project carries a `fips` launcher script at its root; the
//! workspace is the directory that contains the fips checkout.

use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use crate::domain::ports::{BuildOrchestrator, WorkspaceResolver};
use crate::error::{WebpageError, WebpageResult};

/// Workspace root = parent of the fips directory
#[derive(Debug, Clone, Copy, Default)]
pub struct FipsWorkspace;

impl WorkspaceResolver for FipsWorkspace {
    fn workspace_dir(&self, fips_dir: &Path) -> PathBuf {
        match fips_dir.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        }
    }
}

/// Runs `<project>/fips gen|build <config>`
#[derive(Debug, Clone, Default)]
pub struct FipsOrchestrator {
    /// Explicit launcher; default is the project's own `fips` script
    launcher: Option<PathBuf>,
}

impl FipsOrchestrator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Use a specific launcher instead of `<project>/fips`
    pub fn with_launcher(launcher: impl Into<PathBuf>) -> Self {
        Self {
            launcher: Some(launcher.into()),
        }
    }

    fn launcher_for(&self, project_dir: &Path) -> PathBuf {
        match &self.launcher {
            Some(l) => l.clone(),
            None if cfg!(windows) => project_dir.join("fips.cmd"),
            None => project_dir.join("fips"),
        }
    }

    fn run(&self, step: &str, project_dir: &Path, config: &str) -> WebpageResult<()> {
        let launcher = self.launcher_for(project_dir);

        let status = Command::new(&launcher)
            .arg(step)
            .arg(config)
            .current_dir(project_dir)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()
            .map_err(|e| WebpageError::CommandFailed {
                program: launcher.display().to_string(),
                message: e.to_string(),
            })?;

        if !status.success() {
            return Err(WebpageError::BuildStepFailed {
                step: step.to_string(),
                config: config.to_string(),
                code: status.code(),
            });
        }
        Ok(())
    }
}

impl BuildOrchestrator for FipsOrchestrator {
    fn generate(&self, project_dir: &Path, config: &str) -> WebpageResult<()> {
        self.run("gen", project_dir, config)
    }

    fn build(&self, project_dir: &Path, config: &str) -> WebpageResult<()> {
        self.run("build", project_dir, config)
    }
}
