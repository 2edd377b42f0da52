//! Build-and-Deploy Stage
//!
//! Resets the deploy directory, optionally runs the toolchain build through
//! the orchestrator, then runs the Deploy Stage.

mod options;
mod result;
mod use_case;

pub use options::BuildOptions;
pub use result::BuildResult;
pub use use_case::BuildUseCase;
