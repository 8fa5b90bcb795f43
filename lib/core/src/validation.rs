//! Structural validation of a catalog
//!
//! Checks run in a fixed order and stop at the first failure:
//!
//! 1. no cell is missing,
//! 2. per column, every value starts with `<column>-` and the rest is a
//!    non-empty run of ASCII digits,
//! 3. (optional) the row at position `i` is labelled `sku-{i+1}`.

use crate::sku::SkuId;
use crate::{Catalog, Error, Result};
use serde::{Deserialize, Serialize};

/// How many leading bytes of a cell form the `<column>-` prefix
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PrefixRule {
    /// `len(column) + 1`, correct for any attribute-name length
    #[default]
    Derived,
    /// A fixed byte count, whatever the column name's length
    Fixed(usize),
}

impl PrefixRule {
    /// Fixed-width rule of the legacy tool, which only accepted five-character
    /// attribute names such as `att-a`.
    pub const LEGACY: PrefixRule = PrefixRule::Fixed(6);

    /// Prefix length in bytes for the given column
    pub fn prefix_len(&self, column: &str) -> usize {
        match self {
            PrefixRule::Derived => column.len() + 1,
            PrefixRule::Fixed(n) => *n,
        }
    }
}

/// Validator configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidatorConfig {
    #[serde(default)]
    pub prefix: PrefixRule,
    #[serde(default = "default_check_item_labels")]
    pub check_item_labels: bool,
}

fn default_check_item_labels() -> bool {
    true
}

impl Default for ValidatorConfig {
    fn default() -> Self {
        Self {
            prefix: PrefixRule::Derived,
            check_item_labels: true,
        }
    }
}

/// Outcome of checking a single cell against its column
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CellVerdict {
    Ok,
    BadPrefix,
    BadSuffix,
}

/// Decides whether a catalog is well formed
#[derive(Debug, Clone, Default)]
pub struct CatalogValidator {
    config: ValidatorConfig,
}

impl CatalogValidator {
    pub fn new(config: ValidatorConfig) -> Self {
        Self { config }
    }

    /// Validator using the given prefix rule and default remaining options
    pub fn with_prefix_rule(prefix: PrefixRule) -> Self {
        Self::new(ValidatorConfig {
            prefix,
            ..ValidatorConfig::default()
        })
    }

    pub fn config(&self) -> &ValidatorConfig {
        &self.config
    }

    /// Validate the catalog, returning the first failure found.
    ///
    /// Has no side effects; calling it twice on the same catalog gives the
    /// same verdict.
    pub fn validate(&self, catalog: &Catalog) -> Result<()> {
        if catalog.has_missing_values() {
            return Err(Error::MissingValue);
        }

        for (col, column) in catalog.attributes().iter().enumerate() {
            self.validate_column(catalog, col, column)?;
        }

        if self.config.check_item_labels {
            validate_item_labels(catalog)?;
        }

        Ok(())
    }

    /// Prefix first for the whole column, then the numeric suffix.
    fn validate_column(&self, catalog: &Catalog, col: usize, column: &str) -> Result<()> {
        let expected = format!("{}-", column);
        let prefix_len = self.config.prefix.prefix_len(column);

        let verdicts: Vec<(CellVerdict, &str)> = catalog
            .column(col)
            .flatten()
            .map(|value| (check_cell(value, &expected, prefix_len), value))
            .collect();

        if let Some((_, value)) = verdicts.iter().find(|(v, _)| *v == CellVerdict::BadPrefix) {
            return Err(Error::PrefixMismatch {
                column: column.to_string(),
                value: value.to_string(),
            });
        }
        if let Some((_, value)) = verdicts.iter().find(|(v, _)| *v == CellVerdict::BadSuffix) {
            return Err(Error::NonNumericSuffix {
                column: column.to_string(),
                value: value.to_string(),
            });
        }

        Ok(())
    }
}

fn check_cell(value: &str, expected_prefix: &str, prefix_len: usize) -> CellVerdict {
    match (value.get(..prefix_len), value.get(prefix_len..)) {
        (Some(prefix), Some(suffix)) if prefix == expected_prefix => {
            if is_numeric(suffix) {
                CellVerdict::Ok
            } else {
                CellVerdict::BadSuffix
            }
        }
        _ => CellVerdict::BadPrefix,
    }
}

fn is_numeric(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}

fn validate_item_labels(catalog: &Catalog) -> Result<()> {
    for (position, label) in catalog.items().iter().enumerate() {
        if *label != SkuId::from_position(position).to_string() {
            return Err(Error::ItemLabelMismatch {
                position,
                label: label.clone(),
            });
        }
    }
    Ok(())
}
