//! # Cookbook
//!
//! Data model and loading for a catalog of named refactoring techniques,
//! each illustrated by a before/after code pair and a list of benefits.

pub mod catalog;
pub mod loader;
pub mod types;

pub use catalog::Catalog;
pub use loader::{CatalogLoader, load};
pub use types::{Entry, EntryField, EntryRecord};
