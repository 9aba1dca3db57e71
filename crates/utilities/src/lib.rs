//! Utility types and functions for the fasim workspace.
//!
//! Forbid unsafe code in this crate.
#![forbid(unsafe_code)]

mod error;
mod vecset;

pub use error::*;
pub use random_test::*;
pub use vecset::*;
