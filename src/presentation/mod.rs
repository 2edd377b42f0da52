//! Presentation Layer
//!
//! This layer handles:
//! - CLI argument parsing (via clap)
//! - Creating use cases with infrastructure dependencies
//!
//! ## Usage
//!
//! ```ignore
//! use voxel_webpage::presentation::factory;
//!
//! let ctx = factory::create_context(config, &project_dir);
//! let result = factory::create_build_use_case(&ctx).execute(&ctx.layout, &ctx.build_options(), &log);
//! ```

pub mod cli;
pub mod factory;

pub use cli::{Cli, ColorWhen};
pub use factory::{create_build_use_case, create_context, create_serve_use_case};
