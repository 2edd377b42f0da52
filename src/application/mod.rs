//! Application Layer
//!
//! Use cases that orchestrate the verb's stages.
//! This layer:
//! - Depends on Domain layer (services, ports, value objects)
//! - Coordinates between Infrastructure and Domain
//!
//! ## Use Cases
//!
//! - `DeployUseCase` - Copies assets and artifacts, renders `index.html`
//! - `BuildUseCase` - Resets the deploy dir, compiles, then deploys
//! - `ServeUseCase` - Opens the browser and runs the local HTTP server

pub mod build;
pub mod context;
pub mod deploy;
pub mod serve;
#[cfg(test)]
pub(crate) mod test_support;
pub mod verb;

pub use build::{BuildOptions, BuildResult, BuildUseCase};
pub use context::WebpageContext;
pub use deploy::{DeployReport, DeployUseCase, TEMPLATE_NAME_VAR};
pub use serve::{ServeRequest, ServeResult, ServeUseCase};
pub use verb::{UsageError, Verb, VerbRequest, HELP_COMMANDS, HELP_DESCRIPTION};
