//! Domain Ports (Interfaces)
//!
//! These traits define the boundaries of the domain layer.
//! Infrastructure layer provides concrete implementations.

pub mod build_orchestrator;
pub mod file_system;
pub mod log_sink;
pub mod platform;
pub mod shell;
pub mod toolchain;
pub mod workspace;

pub use build_orchestrator::BuildOrchestrator;
pub use file_system::FileSystem;
pub use log_sink::{LogColor, LogLevel, LogLine, LogSink, MemoryLogSink};
pub use platform::PlatformProbe;
pub use shell::{ServeOutcome, ShellLauncher};
pub use toolchain::ToolchainProbe;
pub use workspace::WorkspaceResolver;
