//! System shell launcher
//!
//! Runs one command line through `sh -c` (or `cmd /C` on Windows) and blocks.
//! A Ctrl+C handler is installed once per process: SIGINT goes to the whole
//! foreground process group, so the child stops while this process only
//! records that the user interrupted.

use std::path::Path;
use std::process::{Command, Stdio};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Once;

use crate::domain::ports::{ServeOutcome, ShellLauncher};
use crate::error::{WebpageError, WebpageResult};

static INTERRUPTED: AtomicBool = AtomicBool::new(false);
static INSTALL_HANDLER: Once = Once::new();

fn install_interrupt_handler() {
    INSTALL_HANDLER.call_once(|| {
        // Another handler may already be installed by an embedding program;
        // then interrupts surface as a non-zero child exit instead.
        let _ = ctrlc::set_handler(|| {
            INTERRUPTED.store(true, Ordering::SeqCst);
        });
    });
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SystemShell;

impl SystemShell {
    pub fn new() -> Self {
        Self
    }

    fn command(line: &str) -> Command {
        if cfg!(windows) {
            let mut cmd = Command::new("cmd");
            cmd.arg("/C").arg(line);
            cmd
        } else {
            let mut cmd = Command::new("sh");
            cmd.arg("-c").arg(line);
            cmd
        }
    }
}

impl ShellLauncher for SystemShell {
    fn run_blocking(&self, command: &str, cwd: &Path) -> WebpageResult<ServeOutcome> {
        install_interrupt_handler();
        INTERRUPTED.store(false, Ordering::SeqCst);

        let status = Self::command(command)
            .current_dir(cwd)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()
            .map_err(|e| WebpageError::CommandFailed {
                program: command.to_string(),
                message: e.to_string(),
            })?;

        if INTERRUPTED.swap(false, Ordering::SeqCst) {
            return Ok(ServeOutcome::Interrupted);
        }
        Ok(ServeOutcome::Exited(status.code()))
    }
}
