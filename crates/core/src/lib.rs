//! Domain types shared by the operator service crates.
//!
//! Holds the identifier and timestamp aliases, the domain error type, and the
//! policy applied when the movie catalog cannot be reached.

pub mod catalog_policy;
pub mod error;
pub mod types;
