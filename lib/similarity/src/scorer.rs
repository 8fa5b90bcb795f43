//! Similarity scoring and ranking
//!
//! Scores every item of a catalog against a reference item by counting
//! attributes with equal values, then keeps the reference plus its `top_n`
//! nearest neighbours.

use crate::overlap::{overlap_count, value_matches};
use serde::{Deserialize, Serialize};
use skumatch_core::{Catalog, Error, Result};

/// Number of neighbours returned when no other value is configured
pub const DEFAULT_TOP_N: usize = 10;

/// One item with its overlap score against the reference
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScoredItem {
    /// 0-based row index in the catalog
    pub index: usize,
    /// Item label
    pub sku: String,
    /// Number of attributes equal to the reference item's
    pub score: usize,
    /// Column indices of the matching attributes, ascending
    pub matched_columns: Vec<usize>,
}

/// Scored items, best first, truncated to `top_n + 1`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankedResult {
    reference: usize,
    attribute_count: usize,
    candidates: usize,
    items: Vec<ScoredItem>,
}

impl RankedResult {
    /// Row index of the reference item
    pub fn reference(&self) -> usize {
        self.reference
    }

    /// Maximum possible score
    pub fn attribute_count(&self) -> usize {
        self.attribute_count
    }

    /// How many items were scored before truncation
    pub fn candidates(&self) -> usize {
        self.candidates
    }

    pub fn items(&self) -> &[ScoredItem] {
        &self.items
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ScoredItem> {
        self.items.iter()
    }

    pub fn first(&self) -> Option<&ScoredItem> {
        self.items.first()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Entries other than the reference item
    pub fn neighbours(&self) -> impl Iterator<Item = &ScoredItem> {
        let reference = self.reference;
        self.items.iter().filter(move |item| item.index != reference)
    }

    pub fn into_items(self) -> Vec<ScoredItem> {
        self.items
    }
}

impl<'a> IntoIterator for &'a RankedResult {
    type Item = &'a ScoredItem;
    type IntoIter = std::slice::Iter<'a, ScoredItem>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

/// Scorer configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScorerConfig {
    /// Neighbours to keep besides the reference item
    #[serde(default = "default_top_n")]
    pub top_n: usize,
}

fn default_top_n() -> usize {
    DEFAULT_TOP_N
}

impl Default for ScorerConfig {
    fn default() -> Self {
        Self {
            top_n: DEFAULT_TOP_N,
        }
    }
}

/// Ranks catalog items by attribute overlap with a reference item
#[derive(Debug, Clone, Default)]
pub struct SimilarityScorer {
    config: ScorerConfig,
}

impl SimilarityScorer {
    pub fn new(config: ScorerConfig) -> Self {
        Self { config }
    }

    pub fn with_top_n(top_n: usize) -> Self {
        Self::new(ScorerConfig { top_n })
    }

    pub fn top_n(&self) -> usize {
        self.config.top_n
    }

    pub fn config(&self) -> &ScorerConfig {
        &self.config
    }

    /// Score every item against the item at `reference_index` and rank them.
    ///
    /// Items are ordered by score, then the reference item ahead of anything
    /// it ties with, then catalog order. The reference item is always the
    /// first entry, even when exact duplicates of it come earlier in the
    /// catalog. The catalog is only read; scores live in a local accumulator.
    pub fn score_and_rank(&self, catalog: &Catalog, reference_index: usize) -> Result<RankedResult> {
        let item_count = catalog.item_count();
        if reference_index >= item_count {
            return Err(Error::IndexOutOfRange {
                index: reference_index,
                len: item_count,
            });
        }

        let mut scores = vec![0usize; item_count];
        let mut matched: Vec<Vec<usize>> = vec![Vec::new(); item_count];

        for col in 0..catalog.attribute_count() {
            let target = catalog.cell(reference_index, col);
            for (row, value) in catalog.column(col).enumerate() {
                if value_matches(value, target) {
                    scores[row] += 1;
                    matched[row].push(col);
                }
            }
        }

        let mut items: Vec<ScoredItem> = catalog
            .items()
            .iter()
            .zip(scores.into_iter().zip(matched))
            .enumerate()
            .map(|(index, (sku, (score, matched_columns)))| ScoredItem {
                index,
                sku: sku.clone(),
                score,
                matched_columns,
            })
            .collect();

        // Best score first; the reference leads its score group so that
        // truncation can never drop it, other ties keep catalog order.
        items.sort_by(|a, b| {
            b.score
                .cmp(&a.score)
                .then_with(|| (b.index == reference_index).cmp(&(a.index == reference_index)))
                .then_with(|| a.index.cmp(&b.index))
        });
        items.truncate(self.config.top_n.saturating_add(1));

        Ok(RankedResult {
            reference: reference_index,
            attribute_count: catalog.attribute_count(),
            candidates: item_count,
            items,
        })
    }

    /// Overlap score between two individual rows
    pub fn score_pair(&self, catalog: &Catalog, a: usize, b: usize) -> Result<usize> {
        let len = catalog.item_count();
        let row_a = catalog
            .row(a)
            .ok_or(Error::IndexOutOfRange { index: a, len })?;
        let row_b = catalog
            .row(b)
            .ok_or(Error::IndexOutOfRange { index: b, len })?;
        Ok(overlap_count(row_a, row_b))
    }
}
