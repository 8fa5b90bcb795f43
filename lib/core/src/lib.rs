//! # skumatch Core
//!
//! Core library for skumatch.
//!
//! This crate provides the catalog table and everything needed to decide
//! whether it is well formed and to resolve a query against it:
//!
//! - [`Catalog`] - Item-major table of categorical attribute values
//! - [`CatalogValidator`] - Missing-value, prefix and numeric-suffix checks
//! - [`SkuResolver`] - Turns a `sku-<K>` token into a row index
//! - [`Error`] - One variant per failure, with the offending column or value
//!
//! ## Example
//!
//! ```rust
//! use skumatch_core::{Catalog, CatalogValidator, SkuResolver};
//!
//! let catalog = Catalog::from_rows(
//!     ["att-a", "att-b"],
//!     vec![
//!         ("sku-1".to_string(), vec![Some("att-a-1".to_string()), Some("att-b-1".to_string())]),
//!         ("sku-2".to_string(), vec![Some("att-a-1".to_string()), Some("att-b-2".to_string())]),
//!     ],
//! )
//! .unwrap();
//!
//! CatalogValidator::default().validate(&catalog).unwrap();
//! let index = SkuResolver::default().resolve(&catalog, "sku-2").unwrap();
//! assert_eq!(index, 1);
//! ```

pub mod catalog;
pub mod error;
pub mod sku;
pub mod validation;

pub use catalog::Catalog;
pub use error::{Error, Result};
pub use sku::{MembershipAxis, ResolverConfig, SkuId, SkuResolver, SKU_PREFIX};
pub use validation::{CatalogValidator, PrefixRule, ValidatorConfig};
