//! # skumatch Similarity
//!
//! Exact attribute-overlap similarity for catalog items.
//!
//! Given a catalog and a reference item, every item is scored by the number
//! of attributes whose value equals the reference's. Items are ranked by
//! score, ties keep catalog order, and the result holds the reference item
//! plus up to `top_n` neighbours.
//!
//! ## Example
//!
//! ```rust
//! use skumatch_core::Catalog;
//! use skumatch_similarity::{ItemRecord, SimilarityScorer};
//!
//! let row = |a: &str, b: &str| vec![Some(a.to_string()), Some(b.to_string())];
//! let catalog = Catalog::from_rows(
//!     ["att-a", "att-b"],
//!     vec![
//!         ("sku-1".to_string(), row("att-a-1", "att-b-1")),
//!         ("sku-2".to_string(), row("att-a-1", "att-b-2")),
//!         ("sku-3".to_string(), row("att-a-9", "att-b-2")),
//!     ],
//! )
//! .unwrap();
//!
//! let result = SimilarityScorer::with_top_n(2).score_and_rank(&catalog, 0).unwrap();
//! let scores: Vec<_> = result.iter().map(|item| item.score).collect();
//! assert_eq!(scores, vec![2, 1, 0]);
//!
//! for record in ItemRecord::to_json_list(&catalog, &result) {
//!     println!("{}", record);
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌─────────────┐
//! │   Catalog   │────>│   Scorer    │────>│   Ranked    │
//! │ (validated) │     │ (overlap)   │     │   Result    │
//! └─────────────┘     └─────────────┘     └─────────────┘
//!                                                │
//!                                         ┌──────┴──────┐
//!                                         │   Explain   │
//!                                         │  (records)  │
//!                                         └─────────────┘
//! ```

pub mod explain;
pub mod overlap;
pub mod scorer;

// Re-export main types for convenience
pub use explain::{attribute_map, ExplainedItem, ItemRecord, RecommendationResponse, SimilarityStats};
pub use overlap::{matched_attributes, overlap_count, value_matches};
pub use scorer::{RankedResult, ScoredItem, ScorerConfig, SimilarityScorer, DEFAULT_TOP_N};
