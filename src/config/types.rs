//! Configuration type definitions

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::domain::value_objects::DeployLayout;
use crate::error::WebpageResult;

use super::loader::{self, ConfigWarning};

/// Project identity and location of the fips checkout
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectConfig {
    /// Template variable `name`; also the stem of the emscripten artifacts
    #[serde(default = "default_project_name")]
    pub name: String,

    /// fips checkout; relative paths are resolved against the project dir.
    /// Default: `fips` next to the project dir.
    #[serde(default)]
    pub fips_dir: Option<PathBuf>,
}

impl Default for ProjectConfig {
    fn default() -> Self {
        Self {
            name: default_project_name(),
            fips_dir: None,
        }
    }
}

fn default_project_name() -> String {
    "VoxelTest".to_string()
}

/// Cross-compilation settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BuildConfig {
    /// Run `fips gen` + `fips build` before deploying (when the SDK exists)
    #[serde(default = "default_true")]
    pub emscripten: bool,

    /// fips build config name
    #[serde(default = "default_build_config")]
    pub config: String,

    /// Directory under `fips-deploy/` where the build leaves its artifacts
    #[serde(default = "default_toolchain_project")]
    pub toolchain_project: String,
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            emscripten: true,
            config: default_build_config(),
            toolchain_project: default_toolchain_project(),
        }
    }
}

fn default_build_config() -> String {
    "emsc-ninja-release".to_string()
}

fn default_toolchain_project() -> String {
    "voxel-test".to_string()
}

/// What ends up in the deploy directory
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeployConfig {
    #[serde(default = "default_dir_name")]
    pub dir_name: String,

    /// Static assets directory, relative to the project dir
    #[serde(default = "default_assets_dir")]
    pub assets_dir: PathBuf,

    #[serde(default = "default_static_files")]
    pub static_files: Vec<String>,

    /// HTML template inside `assets_dir`
    #[serde(default = "default_template")]
    pub template: String,

    #[serde(default = "default_artifact_extensions")]
    pub artifact_extensions: Vec<String>,
}

impl Default for DeployConfig {
    fn default() -> Self {
        Self {
            dir_name: default_dir_name(),
            assets_dir: default_assets_dir(),
            static_files: default_static_files(),
            template: default_template(),
            artifact_extensions: default_artifact_extensions(),
        }
    }
}

fn default_dir_name() -> String {
    "voxel-test-webpage".to_string()
}

fn default_assets_dir() -> PathBuf {
    PathBuf::from("web")
}

fn default_static_files() -> Vec<String> {
    vec![
        "style.css".to_string(),
        "emsc.js".to_string(),
        "favicon.png".to_string(),
    ]
}

fn default_template() -> String {
    "emsc.html".to_string()
}

fn default_artifact_extensions() -> Vec<String> {
    vec!["js".to_string(), "html.mem".to_string()]
}

/// Local HTTP server settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServeConfig {
    #[serde(default = "default_url")]
    pub url: String,

    /// Interpreter used to run the server script
    #[serde(default = "default_python")]
    pub python: String,

    /// Server script, relative to the fips dir
    #[serde(default = "default_server_script")]
    pub server_script: PathBuf,
}

impl Default for ServeConfig {
    fn default() -> Self {
        Self {
            url: default_url(),
            python: default_python(),
            server_script: default_server_script(),
        }
    }
}

fn default_url() -> String {
    "http://localhost:8000".to_string()
}

fn default_python() -> String {
    "python".to_string()
}

fn default_server_script() -> PathBuf {
    PathBuf::from("mod/httpserver.py")
}

/// Toolchain location overrides
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ToolchainConfig {
    /// emsdk directory; default `<workspace>/fips-sdks/emsdk`
    #[serde(default)]
    pub sdk_dir: Option<PathBuf>,
}

/// Console output configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct OutputConfig {
    #[serde(default)]
    pub color: ColorMode,
}

/// Color output mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    #[default]
    Auto,
    Always,
    Never,
}

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub project: ProjectConfig,

    #[serde(default)]
    pub build: BuildConfig,

    #[serde(default)]
    pub deploy: DeployConfig,

    #[serde(default)]
    pub serve: ServeConfig,

    #[serde(default)]
    pub toolchain: ToolchainConfig,

    #[serde(default)]
    pub output: OutputConfig,
}

fn default_true() -> bool {
    true
}

impl Config {
    /// Load configuration and collect non-fatal warnings (e.g. unknown keys).
    pub fn load_with_warnings(path: &Path) -> WebpageResult<(Self, Vec<ConfigWarning>)> {
        loader::load_with_warnings(path)
    }

    /// Load `path` if it exists, defaults otherwise. Env overrides are applied.
    pub fn load_or_default(path: &Path) -> WebpageResult<(Self, Vec<ConfigWarning>)> {
        loader::load_or_default(path)
    }

    /// Apply environment variable overrides (WEBPAGE_* prefix)
    pub fn with_env_overrides(self) -> Self {
        loader::with_env_overrides(self)
    }

    /// Resolved fips directory for a project
    pub fn fips_dir(&self, project_dir: &Path) -> PathBuf {
        match &self.project.fips_dir {
            Some(dir) if dir.is_absolute() => dir.clone(),
            Some(dir) => project_dir.join(dir),
            None => project_dir
                .parent()
                .map(|parent| parent.join("fips"))
                .unwrap_or_else(|| project_dir.join("fips")),
        }
    }

    /// emsdk directory under a workspace, unless overridden
    pub fn sdk_dir(&self, workspace_dir: &Path) -> PathBuf {
        self.toolchain
            .sdk_dir
            .clone()
            .unwrap_or_else(|| workspace_dir.join("fips-sdks").join("emsdk"))
    }

    /// `<python> <fips>/<server_script>`
    pub fn server_command(&self, fips_dir: &Path) -> String {
        format!(
            "{} {}",
            self.serve.python,
            fips_dir.join(&self.serve.server_script).display()
        )
    }

    /// Every path the stages need, for one workspace and project
    pub fn layout(&self, workspace_dir: &Path, project_dir: &Path) -> DeployLayout {
        let assets_dir = project_dir.join(&self.deploy.assets_dir);
        DeployLayout {
            workspace_dir: workspace_dir.to_path_buf(),
            project_dir: project_dir.to_path_buf(),
            template_path: assets_dir.join(&self.deploy.template),
            assets_dir,
            webpage_dir: DeployLayout::deploy_dir(workspace_dir, &self.deploy.dir_name),
            toolchain_deploy_dir: DeployLayout::deploy_dir(
                workspace_dir,
                &self.build.toolchain_project,
            )
            .join(&self.build.config),
            project_name: self.project.name.clone(),
            static_files: self.deploy.static_files.clone(),
            artifact_extensions: self.deploy.artifact_extensions.clone(),
        }
    }
}
