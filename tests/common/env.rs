//! Test environment builder for isolated `webpage` runs.
//!
//! Provides `TestEnv`: a temp directory laid out like a fips workspace
//! (`fips/`, `voxel-test/web/`), plus helpers to run the CLI from the
//! project directory.

#![allow(dead_code)]

use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;

use super::fixtures::*;

/// Result of running a `webpage` command
#[derive(Debug)]
pub struct TestResult {
    pub success: bool,
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl TestResult {
    /// Combine stdout and stderr
    pub fn combined_output(&self) -> String {
        format!("{}\n{}", self.stdout, self.stderr)
    }
}

/// Isolated fips workspace in a temp directory.
pub struct TestEnv {
    pub workspace: TempDir,
    webpage_bin: PathBuf,
}

impl TestEnv {
    pub fn builder() -> TestEnvBuilder {
        TestEnvBuilder::new()
    }

    /// `<workspace>/voxel-test`
    pub fn project_dir(&self) -> PathBuf {
        self.workspace.path().join("voxel-test")
    }

    /// `<workspace>/fips-deploy/voxel-test-webpage`
    pub fn webpage_dir(&self) -> PathBuf {
        self.workspace
            .path()
            .join("fips-deploy")
            .join("voxel-test-webpage")
    }

    pub fn project_path(&self, relative: &str) -> PathBuf {
        self.project_dir().join(relative)
    }

    /// Run the CLI from the project directory
    pub fn run(&self, args: &[&str]) -> TestResult {
        self.run_from_with_env(&self.project_dir(), args, &[])
    }

    pub fn run_with_env(&self, args: &[&str], env_vars: &[(&str, &str)]) -> TestResult {
        self.run_from_with_env(&self.project_dir(), args, env_vars)
    }

    pub fn run_from_with_env(
        &self,
        cwd: &Path,
        args: &[&str],
        env_vars: &[(&str, &str)],
    ) -> TestResult {
        let mut cmd = Command::new(&self.webpage_bin);
        cmd.current_dir(cwd)
            .args(args)
            .env("NO_COLOR", "1")
            .env_remove("WEBPAGE_BUILD_EMSCRIPTEN")
            .env_remove("WEBPAGE_FIPS_DIR")
            .env_remove("WEBPAGE_SDK_DIR")
            .env_remove("WEBPAGE_PYTHON");

        for (key, value) in env_vars {
            cmd.env(key, value);
        }

        let output = cmd.output().expect("Failed to execute webpage");
        to_result(output)
    }

    /// Sorted file names in the deploy directory
    pub fn deployed_files(&self) -> Vec<String> {
        super::assertions::list_files(&self.webpage_dir())
    }

    pub fn read_deployed(&self, name: &str) -> Vec<u8> {
        std::fs::read(self.webpage_dir().join(name))
            .unwrap_or_else(|e| panic!("Failed to read deployed file {}: {}", name, e))
    }

    pub fn write_project_file(&self, relative_path: &str, content: &str) {
        let full_path = self.project_path(relative_path);
        if let Some(parent) = full_path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create directories");
        }
        std::fs::write(&full_path, content).expect("Failed to write file");
    }
}

fn to_result(output: Output) -> TestResult {
    TestResult {
        success: output.status.success(),
        exit_code: output.status.code().unwrap_or(-1),
        stdout: String::from_utf8_lossy(&output.stdout).to_string(),
        stderr: String::from_utf8_lossy(&output.stderr).to_string(),
    }
}

/// Builder for TestEnv with fluent API
pub struct TestEnvBuilder {
    with_assets: bool,
    with_emsdk: bool,
    project_config: Option<String>,
}

impl TestEnvBuilder {
    pub fn new() -> Self {
        Self {
            with_assets: true,
            with_emsdk: false,
            project_config: None,
        }
    }

    /// Leave `voxel-test/web/` empty
    pub fn without_assets(mut self) -> Self {
        self.with_assets = false;
        self
    }

    /// Install a fake emsdk and a fake `fips` launcher (unix only)
    pub fn with_emsdk(mut self) -> Self {
        self.with_emsdk = true;
        self
    }

    /// Write `voxel-test/webpage.toml`
    pub fn with_config(mut self, content: &str) -> Self {
        self.project_config = Some(content.to_string());
        self
    }

    pub fn build(self) -> TestEnv {
        let workspace = tempfile::tempdir().expect("Failed to create temp workspace");
        let root = workspace.path();
        let web = root.join("voxel-test").join("web");
        std::fs::create_dir_all(&web).unwrap();
        std::fs::create_dir_all(root.join("fips")).unwrap();

        if self.with_assets {
            std::fs::write(web.join("style.css"), STYLE_CSS).unwrap();
            std::fs::write(web.join("emsc.js"), EMSC_JS).unwrap();
            std::fs::write(web.join("favicon.png"), FAVICON_PNG).unwrap();
            std::fs::write(web.join("emsc.html"), TEMPLATE_HTML).unwrap();
        }

        if let Some(config) = &self.project_config {
            std::fs::write(root.join("voxel-test").join("webpage.toml"), config).unwrap();
        }

        if self.with_emsdk {
            let sdk = root.join("fips-sdks").join("emsdk");
            std::fs::create_dir_all(&sdk).unwrap();
            std::fs::write(sdk.join("emsdk"), "").unwrap();
            write_executable(&root.join("voxel-test").join("fips"), FAKE_FIPS);
        }

        TestEnv {
            workspace,
            webpage_bin: PathBuf::from(env!("CARGO_BIN_EXE_webpage")),
        }
    }
}

impl Default for TestEnvBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(unix)]
fn write_executable(path: &Path, content: &str) {
    use std::os::unix::fs::PermissionsExt;
    std::fs::write(path, content).unwrap();
    std::fs::set_permissions(path, std::fs::Permissions::from_mode(0o755)).unwrap();
}

#[cfg(not(unix))]
fn write_executable(path: &Path, content: &str) {
    std::fs::write(path, content).unwrap();
}
