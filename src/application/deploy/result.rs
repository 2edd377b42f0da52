//! Deploy Stage result

use std::path::PathBuf;

/// What the deploy stage put into the deploy directory
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeployReport {
    /// Static files copied, by name
    pub static_files: Vec<String>,
    /// Toolchain artifacts copied, by name
    pub artifacts: Vec<String>,
    /// Toolchain artifacts that were expected but not found
    pub missing_artifacts: Vec<String>,
    /// Whether the toolchain probe succeeded
    pub toolchain_present: bool,
    /// The generated entry point
    pub index_html: PathBuf,
}

impl DeployReport {
    /// Every file name now present in the deploy directory
    pub fn file_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self
            .static_files
            .iter()
            .chain(self.artifacts.iter())
            .cloned()
            .collect();
        if let Some(name) = self.index_html.file_name() {
            names.push(name.to_string_lossy().into_owned());
        }
        names
    }
}
