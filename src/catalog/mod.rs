/// Catalog module for layman-catalog
///
/// Holds the static command and quote records the pages are built from.

pub mod models;
pub mod store;

pub use models::*;
pub use store::CatalogStore;
