/// layman-catalog library
///
/// Filtering, sorting and view state for the commands and quotes catalogs.

pub mod catalog;
pub mod config;
pub mod core;
pub mod error;

// Re-exports for convenience
pub use catalog::CatalogStore;
pub use config::Config;
pub use error::{CatalogError, Result};
