//! Error types for the webpage verb
//!
//! Library errors use `thiserror`; the binary wraps them in `anyhow` at the edge.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for webpage operations
pub type WebpageResult<T> = Result<T, WebpageError>;

/// Operational failures. Any of these aborts the current verb.
#[derive(Error, Debug)]
pub enum WebpageError {
    /// A static asset the deploy stage must copy is missing
    #[error("required asset not found: {path}")]
    MissingAsset { path: PathBuf },

    /// Filesystem failure on a known path
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// `fips gen` or `fips build` exited unsuccessfully
    #[error("fips {step} failed for config '{config}' (exit code: {})", format_code(.code))]
    BuildStepFailed {
        step: String,
        config: String,
        code: Option<i32>,
    },

    /// An external program could not be launched at all
    #[error("failed to run '{program}': {message}")]
    CommandFailed { program: String, message: String },

    /// `serve` was invoked before `build`
    #[error("deploy directory not found: {path} (run 'webpage build' first)")]
    DeployDirMissing { path: PathBuf },

    /// Config file could not be parsed
    #[error("invalid config in {file}: {message}")]
    InvalidConfig { file: PathBuf, message: String },
}

impl WebpageError {
    /// Attach a path to an `io::Error`
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Path associated with this error, if any
    pub fn path(&self) -> Option<&std::path::Path> {
        match self {
            WebpageError::MissingAsset { path }
            | WebpageError::Io { path, .. }
            | WebpageError::DeployDirMissing { path }
            | WebpageError::InvalidConfig { file: path, .. } => Some(path),
            _ => None,
        }
    }
}

fn format_code(code: &Option<i32>) -> String {
    match code {
        Some(c) => c.to_string(),
        None => "terminated by signal".to_string(),
    }
}
