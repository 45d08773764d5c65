//! Data models
//!
//! Shared between the drinks server and its API clients.

pub mod drink;

pub use drink::*;
