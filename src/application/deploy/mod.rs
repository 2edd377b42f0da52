//! Deploy Stage
//!
//! Populates an existing deploy directory: static assets, optional toolchain
//! artifacts and the rendered `index.html`.

mod result;
mod use_case;

pub use result::DeployReport;
pub use use_case::{DeployUseCase, TEMPLATE_NAME_VAR};
