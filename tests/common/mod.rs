//! Common test utilities for the `webpage` CLI tests.
//!
//! This module provides:
//! - `TestEnv`: isolated fips workspace in a temp directory
//! - Assertion macros: `assert_deployed!`, `assert_output_contains!`
//! - Fixtures: asset and template content

pub mod assertions;
pub mod env;
pub mod fixtures;

#[allow(unused_imports)]
pub use assertions::*;
pub use env::*;
#[allow(unused_imports)]
pub use fixtures::*;
