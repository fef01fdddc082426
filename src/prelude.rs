//! Prelude module for range_calendar crate.
//!
//! Re-exports the derive_more derives used across the crate.

#[allow(unused_imports)]
pub use derive_more::{Deref, Display, From};
