//! Configuration for the webpage verb
//!
//! Precedence, highest first:
//! 1. CLI flags (`--project`, `--fips-dir`, `--color`)
//! 2. Environment variables (WEBPAGE_*)
//! 3. Project config (`<project>/webpage.toml`, or `--config`)
//! 4. Built-in defaults

mod loader;
mod types;

pub use loader::{parse_with_warnings, ConfigWarning};
pub use types::{
    BuildConfig, ColorMode, Config, DeployConfig, OutputConfig, ProjectConfig, ServeConfig,
    ToolchainConfig,
};

/// Default config file name inside the project directory
pub const CONFIG_FILE_NAME: &str = "webpage.toml";
