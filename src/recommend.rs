//! Validation, resolution and scoring wired together.

use serde::{Deserialize, Serialize};
use skumatch_core::{
    Catalog, CatalogValidator, ResolverConfig, Result, SkuResolver, ValidatorConfig,
};
use skumatch_similarity::{RankedResult, ScorerConfig, SimilarityScorer};

/// Configuration for every stage of a query
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RecommenderConfig {
    #[serde(default)]
    pub validator: ValidatorConfig,
    #[serde(default)]
    pub resolver: ResolverConfig,
    #[serde(default)]
    pub scorer: ScorerConfig,
}

#[derive(Debug, Clone, Default)]
pub struct Recommender {
    validator: CatalogValidator,
    resolver: SkuResolver,
    scorer: SimilarityScorer,
}

impl Recommender {
    pub fn new(config: RecommenderConfig) -> Self {
        Self {
            validator: CatalogValidator::new(config.validator),
            resolver: SkuResolver::new(config.resolver),
            scorer: SimilarityScorer::new(config.scorer),
        }
    }

    pub fn validator(&self) -> &CatalogValidator {
        &self.validator
    }

    pub fn resolver(&self) -> &SkuResolver {
        &self.resolver
    }

    pub fn scorer(&self) -> &SimilarityScorer {
        &self.scorer
    }

    /// Validate `catalog`, resolve `sku` and rank its neighbours.
    ///
    /// Stops at the first error; nothing is returned for a catalog that fails
    /// validation.
    pub fn recommend(&self, catalog: &Catalog, sku: &str) -> Result<RankedResult> {
        self.validator.validate(catalog)?;
        let index = self.resolver.resolve(catalog, sku)?;
        self.scorer.score_and_rank(catalog, index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use skumatch_core::{Error, MembershipAxis};

    fn create_test_catalog() -> Catalog {
        let row = |a: &str, b: &str| vec![Some(a.to_string()), Some(b.to_string())];
        Catalog::from_rows(
            ["att-a", "att-b"],
            vec![
                ("sku-1".to_string(), row("att-a-1", "att-b-1")),
                ("sku-2".to_string(), row("att-a-1", "att-b-2")),
                ("sku-3".to_string(), row("att-a-9", "att-b-2")),
            ],
        )
        .unwrap()
    }

    #[test]
    fn test_recommend() {
        let catalog = create_test_catalog();
        let result = Recommender::default().recommend(&catalog, "sku-2").unwrap();
        let skus: Vec<_> = result.iter().map(|i| i.sku.as_str()).collect();
        assert_eq!(skus, vec!["sku-2", "sku-1", "sku-3"]);
    }

    #[test]
    fn test_recommend_stops_on_invalid_catalog() {
        let catalog = Catalog::from_rows(
            ["att-a"],
            vec![("sku-1".to_string(), vec![Some("att-a-".to_string())])],
        )
        .unwrap();
        let err = Recommender::default().recommend(&catalog, "abc").unwrap_err();
        assert!(matches!(err, Error::NonNumericSuffix { .. }));
    }

    #[test]
    fn test_attribute_axis_out_of_range() {
        // Column "sku-5" exists, but there is no fifth item
        let catalog = Catalog::from_rows(
            ["sku-5"],
            vec![("sku-1".to_string(), vec![Some("sku-5-1".to_string())])],
        )
        .unwrap();
        let mut config = RecommenderConfig::default();
        config.resolver.axis = MembershipAxis::Attributes;

        let err = Recommender::new(config).recommend(&catalog, "sku-5").unwrap_err();
        assert_eq!(err, Error::IndexOutOfRange { index: 4, len: 1 });
    }

    #[test]
    fn test_config_from_json() {
        let config: RecommenderConfig =
            serde_json::from_str(r#"{"scorer": {"top_n": 3}, "resolver": {"axis": "attributes"}}"#)
                .unwrap();
        assert_eq!(config.scorer.top_n, 3);
        assert_eq!(config.resolver.axis, MembershipAxis::Attributes);
        assert!(config.validator.check_item_labels);
    }
}
