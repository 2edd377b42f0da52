//! Emscripten SDK probe

use std::path::{Path, PathBuf};

use crate::domain::ports::ToolchainProbe;

/// Reports whether an emsdk checkout is installed at `sdk_dir`.
///
/// fips installs emsdk under `<workspace>/fips-sdks/emsdk`; the SDK counts as
/// present when its `emsdk` launcher exists there.
#[derive(Debug, Clone)]
pub struct EmscriptenProbe {
    sdk_dir: PathBuf,
}

impl EmscriptenProbe {
    pub fn new(sdk_dir: impl Into<PathBuf>) -> Self {
        Self {
            sdk_dir: sdk_dir.into(),
        }
    }

    pub fn sdk_dir(&self) -> &Path {
        &self.sdk_dir
    }

    fn launcher(&self) -> PathBuf {
        if cfg!(windows) {
            self.sdk_dir.join("emsdk.bat")
        } else {
            self.sdk_dir.join("emsdk")
        }
    }
}

impl ToolchainProbe for EmscriptenProbe {
    fn name(&self) -> &str {
        "emscripten"
    }

    fn check_exists(&self) -> bool {
        self.launcher().is_file()
    }
}
