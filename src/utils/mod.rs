//! Shared utilities.
//!
//! - [`date`]: current-year lookup for copyright templating
//! - [`path`]: filesystem path normalization

pub mod date;
pub mod path;
