//! Console rendering for the `webpage` binary

pub mod context;
pub mod error;
pub mod log;
pub mod primitives;
pub mod terminal;
pub mod theme;
