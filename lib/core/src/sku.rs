//! SKU identifiers and query resolution
//!
//! A SKU label is `sku-<K>` with K a positive, 1-based row number. The
//! resolver turns a user-supplied token into a 0-based row index.

use crate::{Catalog, Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Prefix every item identifier carries
pub const SKU_PREFIX: &str = "sku-";

/// Parsed `sku-<K>` identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct SkuId(u64);

impl SkuId {
    /// Create from a 1-based SKU number. Zero is not a valid SKU number.
    pub fn new(number: u64) -> Option<Self> {
        (number > 0).then_some(Self(number))
    }

    /// SKU for a 0-based row position
    pub fn from_position(position: usize) -> Self {
        Self(position as u64 + 1)
    }

    pub fn number(&self) -> u64 {
        self.0
    }

    /// 0-based row index this SKU refers to
    pub fn position(&self) -> usize {
        (self.0 - 1) as usize
    }
}

impl fmt::Display for SkuId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", SKU_PREFIX, self.0)
    }
}

impl FromStr for SkuId {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let digits = s.strip_prefix(SKU_PREFIX).ok_or_else(|| Error::InvalidFormat {
            input: s.to_string(),
        })?;

        parse_number(digits)
            .and_then(SkuId::new)
            .ok_or_else(|| Error::NotFound { sku: s.to_string() })
    }
}

fn parse_number(digits: &str) -> Option<u64> {
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    digits.parse().ok()
}

/// Which catalog axis the query token is looked up on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MembershipAxis {
    /// Look the token up among item (row) labels
    #[default]
    Items,
    /// Look the token up among attribute (column) labels. Only matches when a
    /// column happens to share the SKU's name; kept for compatibility with
    /// catalogs produced by the legacy tool.
    Attributes,
}

/// Resolver configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ResolverConfig {
    #[serde(default)]
    pub axis: MembershipAxis,
}

/// Turns a raw query token into a row index
#[derive(Debug, Clone, Default)]
pub struct SkuResolver {
    config: ResolverConfig,
}

impl SkuResolver {
    pub fn new(config: ResolverConfig) -> Self {
        Self { config }
    }

    /// Resolver that checks membership on the given axis
    pub fn with_axis(axis: MembershipAxis) -> Self {
        Self::new(ResolverConfig { axis })
    }

    pub fn config(&self) -> &ResolverConfig {
        &self.config
    }

    /// Resolve `raw` to a 0-based row index.
    ///
    /// Fails with [`Error::InvalidFormat`] when the token lacks the `sku-`
    /// prefix and with [`Error::NotFound`] when it is not a member of the
    /// configured axis or its number cannot name a row.
    ///
    /// On the item axis the index is the row the label actually sits on,
    /// which is `K - 1` for catalogs that pass the item-label check. On the
    /// attribute axis there is no row to look at, so `K - 1` is returned
    /// without a bounds check.
    pub fn resolve(&self, catalog: &Catalog, raw: &str) -> Result<usize> {
        if !raw.starts_with(SKU_PREFIX) {
            return Err(Error::InvalidFormat {
                input: raw.to_string(),
            });
        }

        let not_found = || Error::NotFound {
            sku: raw.to_string(),
        };

        match self.config.axis {
            MembershipAxis::Items => {
                // Same number rules as the attribute axis, then the real row
                raw.parse::<SkuId>()?;
                catalog.item_position(raw).ok_or_else(not_found)
            }
            MembershipAxis::Attributes => {
                if !catalog.contains_attribute(raw) {
                    return Err(not_found());
                }
                let sku: SkuId = raw.parse()?;
                Ok(sku.position())
            }
        }
    }
}
