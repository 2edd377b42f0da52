//! Per-invocation context: config plus every resolved path

use std::path::{Path, PathBuf};

use crate::application::build::BuildOptions;
use crate::application::serve::ServeRequest;
use crate::config::Config;
use crate::domain::ports::WorkspaceResolver;
use crate::domain::value_objects::DeployLayout;

#[derive(Debug, Clone)]
pub struct WebpageContext {
    pub config: Config,
    pub project_dir: PathBuf,
    pub fips_dir: PathBuf,
    pub layout: DeployLayout,
}

impl WebpageContext {
    /// Resolve paths once; `project_dir` should be absolute.
    pub fn resolve(
        config: Config,
        project_dir: &Path,
        workspace: &impl WorkspaceResolver,
    ) -> Self {
        let fips_dir = config.fips_dir(project_dir);
        let workspace_dir = workspace.workspace_dir(&fips_dir);
        let layout = config.layout(&workspace_dir, project_dir);
        Self {
            config,
            project_dir: project_dir.to_path_buf(),
            fips_dir,
            layout,
        }
    }

    pub fn workspace_dir(&self) -> &Path {
        &self.layout.workspace_dir
    }

    pub fn sdk_dir(&self) -> PathBuf {
        self.config.sdk_dir(self.workspace_dir())
    }

    pub fn build_options(&self) -> BuildOptions {
        BuildOptions::from_config(&self.config)
    }

    pub fn serve_request(&self) -> ServeRequest {
        ServeRequest {
            webpage_dir: self.layout.webpage_dir.clone(),
            url: self.config.serve.url.clone(),
            server_command: self.config.server_command(&self.fips_dir),
        }
    }
}
