//! ShellLauncher port - run a blocking shell command line

use std::path::Path;

use crate::error::WebpageResult;

/// How a blocking shell command ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServeOutcome {
    /// The user pressed Ctrl+C; this is a normal way to stop serving
    Interrupted,
    /// The command exited on its own (`None` if killed by a signal)
    Exited(Option<i32>),
}

impl ServeOutcome {
    /// True for anything the caller should not warn about
    pub fn is_clean(&self) -> bool {
        matches!(self, ServeOutcome::Interrupted | ServeOutcome::Exited(Some(0)))
    }
}

pub trait ShellLauncher {
    /// Run `command` through the platform shell with `cwd` as working directory
    /// and block until it finishes.
    ///
    /// Only a failure to launch the shell is an error.
    fn run_blocking(&self, command: &str, cwd: &Path) -> WebpageResult<ServeOutcome>;
}
