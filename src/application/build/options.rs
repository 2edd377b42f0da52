//! Build-and-Deploy options

use crate::config::Config;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildOptions {
    /// Compile with the cross-compilation toolchain before deploying
    pub emscripten: bool,
    /// Orchestrator build config, e.g. `emsc-ninja-release`
    pub build_config: String,
}

impl BuildOptions {
    pub fn from_config(config: &Config) -> Self {
        Self {
            emscripten: config.build.emscripten,
            build_config: config.build.config.clone(),
        }
    }
}

impl Default for BuildOptions {
    fn default() -> Self {
        Self::from_config(&Config::default())
    }
}
