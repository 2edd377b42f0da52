//! Domain Value Objects
//!
//! Immutable value types that represent domain concepts.

mod deploy_layout;
mod host_platform;

pub use deploy_layout::{CopySpec, DeployLayout, FIPS_DEPLOY_DIR, INDEX_HTML};
pub use host_platform::HostPlatform;
