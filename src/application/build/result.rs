//! Build-and-Deploy result

use std::path::PathBuf;

use crate::application::deploy::DeployReport;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildResult {
    pub webpage_dir: PathBuf,
    /// Whether `generate` + `build` were run
    pub compiled: bool,
    /// A previous deploy directory was removed
    pub replaced_existing: bool,
    pub deploy: DeployReport,
}
