//! Serve Use Case
//!
//! State machine: `Idle -> Serving -> Stopped`. There is no restart; once the
//! server process ends (or the user interrupts it) the use case returns.

use std::path::PathBuf;

use crate::domain::ports::{FileSystem, LogSink, PlatformProbe, ServeOutcome, ShellLauncher};
use crate::domain::value_objects::HostPlatform;
use crate::error::{WebpageError, WebpageResult};

/// What to serve and how to start the server
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServeRequest {
    pub webpage_dir: PathBuf,
    pub url: String,
    /// Command line that runs the blocking HTTP server
    pub server_command: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ServeResult {
    /// No launcher for this platform; nothing was started
    Unsupported(HostPlatform),
    Stopped {
        platform: HostPlatform,
        outcome: ServeOutcome,
    },
}

pub struct ServeUseCase<FS, PP, SL>
where
    FS: FileSystem,
    PP: PlatformProbe,
    SL: ShellLauncher,
{
    file_system: FS,
    platform: PP,
    shell: SL,
}

impl<FS, PP, SL> ServeUseCase<FS, PP, SL>
where
    FS: FileSystem,
    PP: PlatformProbe,
    SL: ShellLauncher,
{
    pub fn new(file_system: FS, platform: PP, shell: SL) -> Self {
        Self {
            file_system,
            platform,
            shell,
        }
    }

    pub fn shell(&self) -> &SL {
        &self.shell
    }

    /// Blocks until the server exits or the user interrupts it.
    pub fn execute(&self, request: &ServeRequest, log: &dyn LogSink) -> WebpageResult<ServeResult> {
        let platform = self.platform.host_platform();

        let Some(command) = platform.serve_command(&request.url, &request.server_command) else {
            log.warn(&format!(
                "serve is not supported on host platform '{}', nothing started",
                platform
            ));
            return Ok(ServeResult::Unsupported(platform));
        };

        if !self.file_system.is_dir(&request.webpage_dir) {
            return Err(WebpageError::DeployDirMissing {
                path: request.webpage_dir.clone(),
            });
        }

        log.info(&format!(
            "> serving {} at {} (Ctrl+C to stop)",
            request.webpage_dir.display(),
            request.url
        ));
        log.debug(&format!("> {command}"));

        let outcome = self.shell.run_blocking(&command, &request.webpage_dir)?;
        if outcome == ServeOutcome::Interrupted {
            log.info("> server stopped");
        } else if !outcome.is_clean() {
            log.warn(&match outcome {
                ServeOutcome::Exited(Some(code)) => format!("server exited with code {code}"),
                _ => "server was terminated by a signal".to_string(),
            });
        }

        Ok(ServeResult::Stopped { platform, outcome })
    }
}
