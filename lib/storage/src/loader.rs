use ahash::AHashMap;
use anyhow::{anyhow, bail, Context, Result};
use serde_json::{Map, Value};
use skumatch_core::Catalog;
use std::path::Path;
use tracing::debug;

/// Load an attribute-major JSON catalog file.
///
/// The file holds one object per attribute, each mapping item labels to
/// values:
///
/// ```json
/// { "att-a": { "sku-1": "att-a-1", "sku-2": "att-a-1" },
///   "att-b": { "sku-1": "att-b-1", "sku-2": "att-b-2" } }
/// ```
///
/// Values that are `null`, or items absent from an attribute, become missing
/// cells. They are left for validation to report.
pub fn load_catalog<P: AsRef<Path>>(path: P) -> Result<Catalog> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read catalog file {}", path.display()))?;
    let catalog = parse_catalog(&content)
        .with_context(|| format!("Invalid catalog file {}", path.display()))?;

    debug!(
        "Loaded {} items x {} attributes from {:?}",
        catalog.item_count(),
        catalog.attribute_count(),
        path
    );
    Ok(catalog)
}

/// Parse an attribute-major JSON document into a catalog
pub fn parse_catalog(json: &str) -> Result<Catalog> {
    let value: Value = serde_json::from_str(json).context("Malformed JSON")?;
    catalog_from_value(&value)
}

/// Transpose an attribute-major JSON value into an item-major catalog.
///
/// Attribute order follows the document; item order is the order in which
/// labels first appear across all attribute records.
pub fn catalog_from_value(value: &Value) -> Result<Catalog> {
    let records = value
        .as_object()
        .ok_or_else(|| anyhow!("Expected a JSON object of attributes, got {}", kind(value)))?;

    let mut items: Vec<String> = Vec::new();
    let mut positions: AHashMap<String, usize> = AHashMap::new();
    let mut rows: Vec<Vec<Option<String>>> = Vec::new();
    let width = records.len();

    for (col, (attribute, record)) in records.iter().enumerate() {
        let record = record.as_object().ok_or_else(|| {
            anyhow!(
                "Attribute {} must map item labels to values, got {}",
                attribute,
                kind(record)
            )
        })?;

        for (item, cell) in record {
            let row = match positions.get(item) {
                Some(&row) => row,
                None => {
                    positions.insert(item.clone(), items.len());
                    items.push(item.clone());
                    rows.push(vec![None; width]);
                    items.len() - 1
                }
            };
            rows[row][col] = cell_value(attribute, item, cell)?;
        }
    }

    let catalog = Catalog::from_rows(records.keys().cloned(), items.into_iter().zip(rows).collect())?;
    Ok(catalog)
}

fn cell_value(attribute: &str, item: &str, cell: &Value) -> Result<Option<String>> {
    match cell {
        Value::Null => Ok(None),
        Value::String(s) => Ok(Some(s.clone())),
        other => bail!(
            "Value for {} / {} must be a string, got {}",
            item,
            attribute,
            kind(other)
        ),
    }
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// Convert a catalog back to the attribute-major JSON layout.
///
/// Missing cells are written as `null`.
pub fn catalog_to_value(catalog: &Catalog) -> Value {
    let mut records = Map::new();
    for (col, attribute) in catalog.attributes().iter().enumerate() {
        let record: Map<String, Value> = catalog
            .items()
            .iter()
            .zip(catalog.column(col))
            .map(|(item, cell)| {
                let value = cell
                    .map(|v| Value::String(v.to_string()))
                    .unwrap_or(Value::Null);
                (item.clone(), value)
            })
            .collect();
        records.insert(attribute.clone(), Value::Object(record));
    }
    Value::Object(records)
}

/// Write a catalog to disk in the attribute-major layout
pub fn save_catalog<P: AsRef<Path>>(catalog: &Catalog, path: P) -> Result<()> {
    let path = path.as_ref();
    let json = serde_json::to_string_pretty(&catalog_to_value(catalog))?;
    std::fs::write(path, json)
        .with_context(|| format!("Failed to write catalog file {}", path.display()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_transpose_attribute_major() {
        let catalog = catalog_from_value(&json!({
            "att-a": {"sku-1": "att-a-1", "sku-2": "att-a-1", "sku-3": "att-a-9"},
            "att-b": {"sku-1": "att-b-1", "sku-2": "att-b-2", "sku-3": "att-b-2"}
        }))
        .unwrap();

        assert_eq!(catalog.attributes(), ["att-a", "att-b"]);
        assert_eq!(catalog.items(), ["sku-1", "sku-2", "sku-3"]);
        assert_eq!(catalog.cell(2, 0), Some("att-a-9"));
        assert_eq!(catalog.cell(1, 1), Some("att-b-2"));
    }

    #[test]
    fn test_document_order_preserved() {
        let catalog = parse_catalog(
            r#"{"att-z": {"sku-2": "att-z-1", "sku-1": "att-z-2"},
                "att-a": {"sku-1": "att-a-1", "sku-2": "att-a-2"}}"#,
        )
        .unwrap();

        assert_eq!(catalog.attributes(), ["att-z", "att-a"]);
        assert_eq!(catalog.items(), ["sku-2", "sku-1"]);
        assert_eq!(catalog.cell(1, 1), Some("att-a-1"));
    }

    #[test]
    fn test_later_records_reuse_item_rows() {
        let catalog = catalog_from_value(&json!({
            "att-a": {"sku-1": "att-a-1", "sku-2": "att-a-2", "sku-3": "att-a-3"},
            "att-b": {"sku-3": "att-b-3", "sku-1": "att-b-1", "sku-2": "att-b-2"}
        }))
        .unwrap();

        assert_eq!(catalog.item_count(), 3);
        assert_eq!(catalog.row(0).unwrap()[1].as_deref(), Some("att-b-1"));
        assert_eq!(catalog.row(2).unwrap()[1].as_deref(), Some("att-b-3"));
        assert!(!catalog.has_missing_values());
    }

    #[test]
    fn test_null_and_absent_become_missing() {
        let catalog = catalog_from_value(&json!({
            "att-a": {"sku-1": "att-a-1", "sku-2": null},
            "att-b": {"sku-1": "att-b-1", "sku-3": "att-b-4"}
        }))
        .unwrap();

        assert_eq!(catalog.items(), ["sku-1", "sku-2", "sku-3"]);
        assert_eq!(catalog.cell(1, 0), None);
        assert_eq!(catalog.cell(1, 1), None);
        assert_eq!(catalog.cell(2, 0), None);
        assert!(catalog.has_missing_values());
    }

    #[test]
    fn test_non_string_cell_rejected() {
        let err = catalog_from_value(&json!({"att-a": {"sku-1": 3}})).unwrap_err();
        assert!(err.to_string().contains("must be a string"));
    }

    #[test]
    fn test_non_object_document_rejected() {
        assert!(catalog_from_value(&json!([1, 2, 3])).is_err());
        assert!(catalog_from_value(&json!({"att-a": "att-a-1"})).is_err());
        assert!(parse_catalog("{not json").is_err());
    }

    #[test]
    fn test_empty_document() {
        let catalog = parse_catalog("{}").unwrap();
        assert!(catalog.is_empty());
        assert_eq!(catalog.attribute_count(), 0);
    }

    #[test]
    fn test_save_and_load_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("catalog.json");

        let original = catalog_from_value(&json!({
            "att-a": {"sku-1": "att-a-1", "sku-2": null},
            "att-b": {"sku-1": "att-b-1", "sku-2": "att-b-2"}
        }))
        .unwrap();

        save_catalog(&original, &path).unwrap();
        let loaded = load_catalog(&path).unwrap();
        assert_eq!(loaded, original);
    }

    #[test]
    fn test_missing_file_has_context() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_catalog(dir.path().join("nope.json")).unwrap_err();
        assert!(format!("{:#}", err).contains("Failed to read catalog file"));
    }
}
