//! Test doubles and a temp-dir workspace fixture shared by the use case tests

use std::cell::RefCell;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

use crate::config::Config;
use crate::domain::ports::{BuildOrchestrator, ServeOutcome, ShellLauncher, ToolchainProbe};
use crate::domain::value_objects::DeployLayout;
use crate::error::{WebpageError, WebpageResult};

pub const TEMPLATE: &str = "<html><head><title>${name}</title></head>\
<body><script src=\"${name}.js\"></script><!-- ${missing} --></body></html>\n";

pub struct FakeToolchain(pub bool);

impl ToolchainProbe for FakeToolchain {
    fn name(&self) -> &str {
        "emscripten"
    }

    fn check_exists(&self) -> bool {
        self.0
    }
}

/// Records `(step, config)` calls; fails the named step if asked to
#[derive(Default)]
pub struct RecordingOrchestrator {
    pub calls: RefCell<Vec<(String, String)>>,
    pub fail_step: Option<&'static str>,
    /// Files to drop into this directory on `build`, like a real toolchain would
    pub produce: Option<(PathBuf, Vec<String>)>,
}

impl RecordingOrchestrator {
    fn record(&self, step: &str, config: &str) -> WebpageResult<()> {
        self.calls
            .borrow_mut()
            .push((step.to_string(), config.to_string()));
        if self.fail_step == Some(step) {
            return Err(WebpageError::BuildStepFailed {
                step: step.to_string(),
                config: config.to_string(),
                code: Some(1),
            });
        }
        Ok(())
    }

    pub fn steps(&self) -> Vec<String> {
        self.calls.borrow().iter().map(|(s, _)| s.clone()).collect()
    }
}

impl BuildOrchestrator for RecordingOrchestrator {
    fn generate(&self, _project_dir: &Path, config: &str) -> WebpageResult<()> {
        self.record("gen", config)
    }

    fn build(&self, _project_dir: &Path, config: &str) -> WebpageResult<()> {
        self.record("build", config)?;
        if let Some((dir, names)) = &self.produce {
            std::fs::create_dir_all(dir).map_err(|e| WebpageError::io(dir, e))?;
            for name in names {
                let path = dir.join(name);
                std::fs::write(&path, format!("// {name}")).map_err(|e| WebpageError::io(&path, e))?;
            }
        }
        Ok(())
    }
}

/// Returns a fixed outcome and records `(command, cwd)`
pub struct FakeShell {
    pub outcome: ServeOutcome,
    pub calls: RefCell<Vec<(String, PathBuf)>>,
}

impl FakeShell {
    pub fn new(outcome: ServeOutcome) -> Self {
        Self {
            outcome,
            calls: RefCell::new(Vec::new()),
        }
    }
}

impl ShellLauncher for FakeShell {
    fn run_blocking(&self, command: &str, cwd: &Path) -> WebpageResult<ServeOutcome> {
        self.calls
            .borrow_mut()
            .push((command.to_string(), cwd.to_path_buf()));
        Ok(self.outcome)
    }
}

/// A workspace with `fips/`, `voxel-test/web/` assets and nothing deployed yet
pub struct Workspace {
    pub root: TempDir,
    pub layout: DeployLayout,
}

impl Workspace {
    pub fn new() -> Self {
        let root = tempfile::tempdir().unwrap();
        let project = root.path().join("voxel-test");
        let web = project.join("web");
        std::fs::create_dir_all(&web).unwrap();
        std::fs::create_dir_all(root.path().join("fips")).unwrap();

        std::fs::write(web.join("style.css"), "body { margin: 0; }\n").unwrap();
        std::fs::write(web.join("emsc.js"), "var Module = {};\n").unwrap();
        std::fs::write(web.join("favicon.png"), [0x89, b'P', b'N', b'G']).unwrap();
        std::fs::write(web.join("emsc.html"), TEMPLATE).unwrap();

        let layout = Config::default().layout(root.path(), &project);
        Self { root, layout }
    }

    /// Put emscripten artifacts where the toolchain build leaves them
    pub fn add_artifacts(&self, names: &[&str]) {
        std::fs::create_dir_all(&self.layout.toolchain_deploy_dir).unwrap();
        for name in names {
            std::fs::write(
                self.layout.toolchain_deploy_dir.join(name),
                format!("// {name}"),
            )
            .unwrap();
        }
    }

    pub fn webpage_dir(&self) -> &Path {
        &self.layout.webpage_dir
    }

    /// Sorted file names in the deploy directory
    pub fn deployed_files(&self) -> Vec<String> {
        let mut names: Vec<String> = std::fs::read_dir(self.webpage_dir())
            .unwrap()
            .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
            .collect();
        names.sort();
        names
    }
}
