//! Target-independent state and data for the D.A.W.LOAD storefront page.
//!
//! Everything here is plain Rust: the browser crate renders these states and
//! drives their transitions from DOM events and timers.

pub mod domain;
pub mod shared;
