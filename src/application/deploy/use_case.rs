//! Deploy Use Case
//!
//! 1. Copy every configured static file (a missing one is an error)
//! 2. If the toolchain is installed, copy whichever of its artifacts exist
//! 3. Render the HTML template into `index.html`

use crate::domain::ports::{FileSystem, LogSink, ToolchainProbe};
use crate::domain::services::Template;
use crate::domain::value_objects::DeployLayout;
use crate::error::WebpageResult;

use super::result::DeployReport;

/// Template variable that receives the project name
pub const TEMPLATE_NAME_VAR: &str = "name";

/// Deploy use case, parameterized by its ports
pub struct DeployUseCase<FS, TP>
where
    FS: FileSystem,
    TP: ToolchainProbe,
{
    file_system: FS,
    toolchain: TP,
}

impl<FS, TP> DeployUseCase<FS, TP>
where
    FS: FileSystem,
    TP: ToolchainProbe,
{
    pub fn new(file_system: FS, toolchain: TP) -> Self {
        Self {
            file_system,
            toolchain,
        }
    }

    /// Populate `layout.webpage_dir`, which must already exist.
    pub fn execute(&self, layout: &DeployLayout, log: &dyn LogSink) -> WebpageResult<DeployReport> {
        let mut report = DeployReport {
            index_html: layout.index_html(),
            ..DeployReport::default()
        };

        for copy in layout.static_copies() {
            log.info(&format!("> copy file: {}", copy.name));
            self.file_system.copy(&copy.source, &copy.destination)?;
            report.static_files.push(copy.name);
        }

        report.toolchain_present = self.toolchain.check_exists();
        if report.toolchain_present {
            log.info(&format!(
                "> generate {} HTML page: {}",
                self.toolchain.name(),
                layout.project_name
            ));
            for copy in layout.artifact_copies() {
                if self.file_system.is_file(&copy.source) {
                    self.file_system.copy(&copy.source, &copy.destination)?;
                    report.artifacts.push(copy.name);
                } else {
                    log.debug(&format!("  skip missing artifact: {}", copy.source.display()));
                    report.missing_artifacts.push(copy.name);
                }
            }
        } else {
            log.debug(&format!(
                "{} not found, deploying without compiled artifacts",
                self.toolchain.name()
            ));
        }

        let source = self.file_system.read(&layout.template_path)?;
        let html = Template::parse(&source).substitute_one(TEMPLATE_NAME_VAR, &layout.project_name);
        self.file_system.write(&report.index_html, &html)?;

        Ok(report)
    }
}
