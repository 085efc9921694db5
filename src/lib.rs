pub mod anchor;
pub mod config;
pub mod cookbook;
pub mod errors;
pub mod renderer;

// Re-export commonly used types
pub use config::{CodeLayout, RenderConfig};
pub use cookbook::{Catalog, CatalogLoader, Entry, EntryField, EntryRecord, load};
pub use errors::CookbookError;
pub use renderer::{MarkdownRenderer, render};
