//! Speech engine implementations
//!
//! `memory` is always available and backs tests and dry runs.
//! Real backends are feature-gated and can be enabled individually.

pub mod memory;

#[cfg(feature = "espeak")]
pub mod espeak;
