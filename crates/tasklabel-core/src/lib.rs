//! # tasklabel-core
//!
//! Core types, traits, and abstractions for tasklabel.
//!
//! This crate provides the data model (settings, classification records,
//! summaries) and the repository traits that the storage and HTTP crates
//! build on.

pub mod defaults;
pub mod error;
pub mod logging;
pub mod models;
pub mod traits;

// Re-export commonly used types at crate root
pub use error::{Error, Result};
pub use models::*;
pub use traits::*;
