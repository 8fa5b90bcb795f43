//! Output records for ranked results
//!
//! Turns a [`RankedResult`] back into catalog terms: SKU labels, attribute
//! names and values. The score is only included where it is asked for.

use crate::scorer::{RankedResult, ScoredItem};
use serde::Serialize;
use serde_json::{Map, Value};
use skumatch_core::Catalog;

/// Attribute values of one item as a JSON object, in column order
pub fn attribute_map(catalog: &Catalog, index: usize) -> Map<String, Value> {
    catalog
        .attributes()
        .iter()
        .enumerate()
        .map(|(col, name)| {
            let value = catalog
                .cell(index, col)
                .map(|v| Value::String(v.to_string()))
                .unwrap_or(Value::Null);
            (name.clone(), value)
        })
        .collect()
}

/// A single item keyed by its SKU, score stripped:
/// `{"sku-2": {"att-a": "att-a-1", ...}}`
pub struct ItemRecord;

impl ItemRecord {
    pub fn to_json(catalog: &Catalog, item: &ScoredItem) -> Value {
        let mut record = Map::new();
        record.insert(item.sku.clone(), Value::Object(attribute_map(catalog, item.index)));
        Value::Object(record)
    }

    /// One record per ranked item, best first
    pub fn to_json_list(catalog: &Catalog, result: &RankedResult) -> Vec<Value> {
        result.iter().map(|item| Self::to_json(catalog, item)).collect()
    }
}

/// A ranked item with its score and the attributes it shares with the
/// reference
#[derive(Debug, Clone, Serialize)]
pub struct ExplainedItem {
    /// 1-based rank
    pub rank: usize,
    pub sku: String,
    pub score: usize,
    /// Names of the attributes equal to the reference item's
    pub matched: Vec<String>,
    /// All attribute values of the item
    pub attributes: Map<String, Value>,
}

impl ExplainedItem {
    pub fn from_scored(catalog: &Catalog, rank: usize, item: &ScoredItem) -> Self {
        let matched = item
            .matched_columns
            .iter()
            .filter_map(|&col| catalog.attributes().get(col).cloned())
            .collect();

        Self {
            rank,
            sku: item.sku.clone(),
            score: item.score,
            matched,
            attributes: attribute_map(catalog, item.index),
        }
    }

    pub fn from_ranked_list(catalog: &Catalog, result: &RankedResult) -> Vec<Self> {
        result
            .iter()
            .enumerate()
            .map(|(i, item)| Self::from_scored(catalog, i + 1, item))
            .collect()
    }
}

/// Full response for one query
#[derive(Debug, Clone, Serialize)]
pub struct RecommendationResponse {
    /// SKU the ranking was computed for
    pub reference: String,
    /// Highest possible score
    pub attribute_count: usize,
    pub result: Vec<ExplainedItem>,
    pub stats: SimilarityStats,
}

impl RecommendationResponse {
    pub fn from_ranked(catalog: &Catalog, result: &RankedResult) -> Self {
        Self {
            reference: catalog
                .item_label(result.reference())
                .unwrap_or_default()
                .to_string(),
            attribute_count: result.attribute_count(),
            result: ExplainedItem::from_ranked_list(catalog, result),
            stats: SimilarityStats::compute(result),
        }
    }
}

/// Summary statistics for a ranked result
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SimilarityStats {
    /// Items scored before truncation
    pub candidates_count: usize,
    /// Items returned, reference included
    pub results_count: usize,
    /// Average score of the returned neighbours (reference excluded)
    pub avg_score: f32,
    /// Best score among returned neighbours
    pub best_neighbour_score: Option<usize>,
    /// Returned neighbours identical to the reference on every attribute
    pub exact_duplicates: usize,
}

impl SimilarityStats {
    pub fn compute(result: &RankedResult) -> Self {
        let scores: Vec<usize> = result.neighbours().map(|item| item.score).collect();

        let avg_score = if scores.is_empty() {
            0.0
        } else {
            scores.iter().sum::<usize>() as f32 / scores.len() as f32
        };

        Self {
            candidates_count: result.candidates(),
            results_count: result.len(),
            avg_score,
            best_neighbour_score: scores.iter().copied().max(),
            exact_duplicates: scores
                .iter()
                .filter(|&&s| s == result.attribute_count())
                .count(),
        }
    }
}
