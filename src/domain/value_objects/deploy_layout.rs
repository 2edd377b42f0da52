//! Deploy layout value object
//!
//! Every path the build, deploy and serve stages touch, resolved once from
//! the configuration and the workspace root.

use std::path::{Path, PathBuf};

/// Name of the directory under the workspace that holds all fips deploy outputs
pub const FIPS_DEPLOY_DIR: &str = "fips-deploy";

/// File name of the generated entry point
pub const INDEX_HTML: &str = "index.html";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeployLayout {
    /// Workspace root (parent of the fips directory)
    pub workspace_dir: PathBuf,
    /// Project being deployed (contains `fips` script and `web/` assets)
    pub project_dir: PathBuf,
    /// Directory of static web assets inside the project
    pub assets_dir: PathBuf,
    /// HTML template that becomes `index.html`
    pub template_path: PathBuf,
    /// Final, servable output directory
    pub webpage_dir: PathBuf,
    /// Where the emscripten build leaves its artifacts
    pub toolchain_deploy_dir: PathBuf,
    /// Template variable `name`, also the stem of the toolchain artifacts
    pub project_name: String,
    pub static_files: Vec<String>,
    pub artifact_extensions: Vec<String>,
}

/// One file to copy
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CopySpec {
    pub name: String,
    pub source: PathBuf,
    pub destination: PathBuf,
}

impl DeployLayout {
    /// `<workspace>/fips-deploy/<dir_name>`
    pub fn deploy_dir(workspace_dir: &Path, dir_name: &str) -> PathBuf {
        workspace_dir.join(FIPS_DEPLOY_DIR).join(dir_name)
    }

    /// Static files, in configured order
    pub fn static_copies(&self) -> Vec<CopySpec> {
        self.static_files
            .iter()
            .map(|name| CopySpec {
                name: name.clone(),
                source: self.assets_dir.join(name),
                destination: self.webpage_dir.join(name),
            })
            .collect()
    }

    /// Optional toolchain artifacts (`<name>.<ext>`), in configured order
    pub fn artifact_copies(&self) -> Vec<CopySpec> {
        self.artifact_extensions
            .iter()
            .map(|ext| {
                let name = format!("{}.{}", self.project_name, ext);
                CopySpec {
                    source: self.toolchain_deploy_dir.join(&name),
                    destination: self.webpage_dir.join(&name),
                    name,
                }
            })
            .collect()
    }

    pub fn index_html(&self) -> PathBuf {
        self.webpage_dir.join(INDEX_HTML)
    }
}
