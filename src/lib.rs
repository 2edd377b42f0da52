//! voxel-webpage - build, deploy and serve the voxel-test web page
//!
//! A fips build verb as a standalone tool: resets the deploy directory,
//! compiles with emscripten when the SDK is installed, copies the static
//! assets and artifacts, renders `index.html` from a template, and serves
//! the result with a local HTTP server.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod presentation;

// Re-exports for convenience
pub use application::{BuildUseCase, DeployUseCase, ServeUseCase, Verb, VerbRequest};
pub use config::Config;
pub use domain::services::Template;
pub use domain::value_objects::{DeployLayout, HostPlatform};
pub use error::{WebpageError, WebpageResult};
