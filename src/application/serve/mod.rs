//! Serve Stage
//!
//! Opens the browser and runs the local HTTP server in the deploy directory.

mod use_case;

pub use use_case::{ServeRequest, ServeResult, ServeUseCase};
