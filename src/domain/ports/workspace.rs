//! WorkspaceResolver port - where build outputs are deposited

use std::path::{Path, PathBuf};

pub trait WorkspaceResolver {
    /// Workspace root for the given fips directory
    fn workspace_dir(&self, fips_dir: &Path) -> PathBuf;
}
