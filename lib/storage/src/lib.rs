//! Catalog file loading for skumatch.
//!
//! Catalog files are attribute-major JSON; [`load_catalog`] transposes them
//! into an item-major [`skumatch_core::Catalog`].

pub mod loader;

pub use loader::{catalog_from_value, catalog_to_value, load_catalog, parse_catalog, save_catalog};
