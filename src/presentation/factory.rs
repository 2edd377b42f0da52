//! Use Case Factory
//!
//! Creates use cases with infrastructure dependencies wired up.
//! This is the dependency injection point for the binary.

use std::path::Path;

use crate::application::{BuildUseCase, ServeUseCase, WebpageContext};
use crate::config::Config;
use crate::infrastructure::{
    EmscriptenProbe, FipsOrchestrator, FipsWorkspace, LocalFs, SystemPlatform, SystemShell,
};

/// Type alias for the concrete BuildUseCase with all dependencies
pub type ConcreteBuildUseCase = BuildUseCase<LocalFs, EmscriptenProbe, FipsOrchestrator>;

/// Type alias for the concrete ServeUseCase with all dependencies
pub type ConcreteServeUseCase = ServeUseCase<LocalFs, SystemPlatform, SystemShell>;

/// Resolve paths using the fips workspace convention
pub fn create_context(config: Config, project_dir: &Path) -> WebpageContext {
    WebpageContext::resolve(config, project_dir, &FipsWorkspace)
}

/// Build use case probing the emsdk location the context resolved
pub fn create_build_use_case(ctx: &WebpageContext) -> ConcreteBuildUseCase {
    BuildUseCase::new(
        LocalFs::new(),
        EmscriptenProbe::new(ctx.sdk_dir()),
        FipsOrchestrator::new(),
    )
}

pub fn create_serve_use_case() -> ConcreteServeUseCase {
    ServeUseCase::new(LocalFs::new(), SystemPlatform, SystemShell::new())
}
