//! BuildOrchestrator port - the external build system (fips)

use std::path::Path;

use crate::error::WebpageResult;

/// Generates build files and builds a project for a named build config.
///
/// Failures are returned to the caller unchanged; nothing here retries.
pub trait BuildOrchestrator {
    /// Generate build files (`fips gen <config>`)
    fn generate(&self, project_dir: &Path, config: &str) -> WebpageResult<()>;

    /// Build the project (`fips build <config>`)
    fn build(&self, project_dir: &Path, config: &str) -> WebpageResult<()>;
}
