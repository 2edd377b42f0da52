//! Build-and-Deploy Use Case
//!
//! Orchestrates:
//! 1. Delete the deploy directory if present, then recreate it
//! 2. `generate` + `build` when enabled and the toolchain is installed
//! 3. Deploy Stage
//! 4. Success line naming the deploy directory
//!
//! Any failure stops the sequence. Nothing is rolled back: a failure after
//! step 1 leaves an empty or partially populated directory.

use crate::application::deploy::DeployUseCase;
use crate::domain::ports::{BuildOrchestrator, FileSystem, LogColor, LogSink, ToolchainProbe};
use crate::domain::value_objects::DeployLayout;
use crate::error::WebpageResult;

use super::options::BuildOptions;
use super::result::BuildResult;

pub struct BuildUseCase<FS, TP, BO>
where
    FS: FileSystem,
    TP: ToolchainProbe,
    BO: BuildOrchestrator,
{
    file_system: FS,
    toolchain: TP,
    orchestrator: BO,
}

impl<FS, TP, BO> BuildUseCase<FS, TP, BO>
where
    FS: FileSystem,
    TP: ToolchainProbe,
    BO: BuildOrchestrator,
{
    pub fn new(file_system: FS, toolchain: TP, orchestrator: BO) -> Self {
        Self {
            file_system,
            toolchain,
            orchestrator,
        }
    }

    pub fn orchestrator(&self) -> &BO {
        &self.orchestrator
    }

    pub fn execute(
        &self,
        layout: &DeployLayout,
        options: &BuildOptions,
        log: &dyn LogSink,
    ) -> WebpageResult<BuildResult> {
        let webpage_dir = &layout.webpage_dir;

        let replaced_existing = self.file_system.is_dir(webpage_dir);
        if replaced_existing {
            log.debug(&format!("> remove {}", webpage_dir.display()));
            self.file_system.remove_dir_all(webpage_dir)?;
        }
        self.file_system.create_dir_all(webpage_dir)?;

        let compiled = options.emscripten && self.toolchain.check_exists();
        if compiled {
            log.info(&format!(
                "> {} build: {}",
                self.toolchain.name(),
                options.build_config
            ));
            self.orchestrator
                .generate(&layout.project_dir, &options.build_config)?;
            self.orchestrator
                .build(&layout.project_dir, &options.build_config)?;
        } else if options.emscripten {
            log.debug(&format!(
                "{} not installed, skipping compile",
                self.toolchain.name()
            ));
        }

        let deploy = DeployUseCase::new(&self.file_system, &self.toolchain).execute(layout, log)?;

        log.colored(
            LogColor::Success,
            &format!("Generated web page under {}.", webpage_dir.display()),
        );

        Ok(BuildResult {
            webpage_dir: webpage_dir.clone(),
            compiled,
            replaced_existing,
            deploy,
        })
    }
}
