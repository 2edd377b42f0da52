//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//! This layer handles all I/O operations.
//!
//! ## Structure
//!
//! - `fs/` - Local file system
//! - `fips` - Workspace resolution and the `fips gen`/`fips build` orchestrator
//! - `emscripten` - SDK capability probe
//! - `platform` - Host OS detection
//! - `shell` - Blocking shell launcher with Ctrl+C capture

pub mod emscripten;
pub mod fips;
pub mod fs;
pub mod platform;
pub mod shell;

// Re-export for convenience
pub use emscripten::EmscriptenProbe;
pub use fips::{FipsOrchestrator, FipsWorkspace};
pub use fs::LocalFs;
pub use platform::SystemPlatform;
pub use shell::SystemShell;
