//!
//! A crate for simulating finite automata, deterministic or nondeterministic
//! and with optional epsilon transitions, one input symbol at a time.
//!
//! This crate does not use unsafe code.

#![forbid(unsafe_code)]

mod automaton;
mod error;
mod label;
mod random_automaton;
mod specification;
mod state;
mod word;

pub use automaton::*;
pub use error::*;
pub use label::*;
pub use random_automaton::*;
pub use specification::*;
pub use state::*;
pub use word::*;
