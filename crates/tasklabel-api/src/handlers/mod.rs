//! HTTP handlers for tasklabel-api.

pub mod categories;
pub mod classifications;
pub mod summary;
