//! # skumatch
//!
//! Validate a catalog of SKUs described by categorical attributes and find
//! the items most similar to a chosen SKU.
//!
//! Similarity is the number of attributes whose value exactly equals the
//! chosen item's. There is no weighting and no fuzzy matching.
//!
//! ## Quick Start
//!
//! ### As a CLI
//!
//! ```bash
//! skumatch --input catalog.json --sku sku-42 --top-n 10
//! ```
//!
//! ### As a Library
//!
//! ```rust,no_run
//! use skumatch::prelude::*;
//!
//! let catalog = load_catalog("catalog.json")?;
//! let recommender = Recommender::default();
//! let result = recommender.recommend(&catalog, "sku-42")?;
//!
//! for record in ItemRecord::to_json_list(&catalog, &result) {
//!     println!("{}", record);
//! }
//! # Ok::<(), anyhow::Error>(())
//! ```
//!
//! ## Crate Structure
//!
//! - `skumatch-core` - Catalog table, validation rules, SKU resolution, errors
//! - `skumatch-similarity` - Overlap scoring, ranking and output records
//! - `skumatch-storage` - JSON catalog loading

pub mod recommend;

// Re-export core types
pub use skumatch_core::{
    Catalog, CatalogValidator, Error, MembershipAxis, PrefixRule, ResolverConfig, Result, SkuId,
    SkuResolver, ValidatorConfig,
};

// Re-export similarity
pub use skumatch_similarity::{
    ExplainedItem, ItemRecord, RankedResult, RecommendationResponse, ScoredItem, ScorerConfig,
    SimilarityScorer, SimilarityStats, DEFAULT_TOP_N,
};

// Re-export storage
pub use skumatch_storage::{load_catalog, parse_catalog, save_catalog};

pub use recommend::{Recommender, RecommenderConfig};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        load_catalog, Catalog, CatalogValidator, Error, ItemRecord, MembershipAxis, PrefixRule,
        RankedResult, RecommendationResponse, Recommender, RecommenderConfig, Result,
        SimilarityScorer, SkuResolver,
    };
}
