//! Pure data types for riffle — job messages, states, and wire timestamps.
//!
//! This crate is a leaf dependency with no async runtime and no I/O. It exists
//! so that transports and UI layers can work with riffle's wire vocabulary
//! without pulling the monitor crate's dependencies.

pub mod job;
pub mod time;

// Flat re-exports for convenience
pub use job::*;
pub use time::*;
