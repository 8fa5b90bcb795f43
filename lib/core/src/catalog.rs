use crate::{Error, Result};
use ahash::AHashMap;

/// An item-major table of categorical attribute values.
///
/// Rows are items (SKUs), columns are attributes. Cells are stored row-major;
/// `None` marks a value that was missing in the source. Both axes keep the
/// order they were built in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    attributes: Vec<String>,
    items: Vec<String>,
    cells: Vec<Option<String>>,
    attribute_index: AHashMap<String, usize>,
    item_index: AHashMap<String, usize>,
}

impl Catalog {
    /// Create an empty catalog with the given attribute columns
    pub fn new<I, S>(attributes: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut catalog = Self {
            attributes: Vec::new(),
            items: Vec::new(),
            cells: Vec::new(),
            attribute_index: AHashMap::new(),
            item_index: AHashMap::new(),
        };

        for name in attributes {
            let name = name.into();
            if catalog.attribute_index.contains_key(&name) {
                return Err(Error::DuplicateAttribute(name));
            }
            catalog
                .attribute_index
                .insert(name.clone(), catalog.attributes.len());
            catalog.attributes.push(name);
        }

        Ok(catalog)
    }

    /// Build a catalog from attribute names and `(label, values)` rows.
    pub fn from_rows<A, S>(attributes: A, rows: Vec<(String, Vec<Option<String>>)>) -> Result<Self>
    where
        A: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut catalog = Self::new(attributes)?;
        for (label, values) in rows {
            catalog.push_row(label, values)?;
        }
        Ok(catalog)
    }

    /// Append an item row. The row must have one value per attribute.
    pub fn push_row(&mut self, label: impl Into<String>, values: Vec<Option<String>>) -> Result<usize> {
        let label = label.into();
        if values.len() != self.attributes.len() {
            return Err(Error::RowWidth {
                item: label,
                expected: self.attributes.len(),
                actual: values.len(),
            });
        }
        if self.item_index.contains_key(&label) {
            return Err(Error::DuplicateItem(label));
        }

        let position = self.items.len();
        self.item_index.insert(label.clone(), position);
        self.items.push(label);
        self.cells.extend(values);
        Ok(position)
    }

    pub fn attributes(&self) -> &[String] {
        &self.attributes
    }

    pub fn items(&self) -> &[String] {
        &self.items
    }

    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    pub fn attribute_count(&self) -> usize {
        self.attributes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Value at `(row, col)`; `None` if the cell is missing or out of bounds
    pub fn cell(&self, row: usize, col: usize) -> Option<&str> {
        if row >= self.items.len() || col >= self.attributes.len() {
            return None;
        }
        self.cells[row * self.attributes.len() + col].as_deref()
    }

    /// All cells of one item row
    pub fn row(&self, row: usize) -> Option<&[Option<String>]> {
        if row >= self.items.len() {
            return None;
        }
        let width = self.attributes.len();
        Some(&self.cells[row * width..(row + 1) * width])
    }

    /// Iterate one attribute column top to bottom
    pub fn column(&self, col: usize) -> impl Iterator<Item = Option<&str>> + '_ {
        let width = self.attributes.len();
        let rows = if col < width { self.items.len() } else { 0 };
        (0..rows).map(move |row| self.cells[row * width + col].as_deref())
    }

    pub fn item_label(&self, row: usize) -> Option<&str> {
        self.items.get(row).map(String::as_str)
    }

    pub fn item_position(&self, label: &str) -> Option<usize> {
        self.item_index.get(label).copied()
    }

    pub fn attribute_position(&self, label: &str) -> Option<usize> {
        self.attribute_index.get(label).copied()
    }

    pub fn contains_item(&self, label: &str) -> bool {
        self.item_index.contains_key(label)
    }

    pub fn contains_attribute(&self, label: &str) -> bool {
        self.attribute_index.contains_key(label)
    }

    /// True if any cell anywhere in the table is missing
    pub fn has_missing_values(&self) -> bool {
        self.cells.iter().any(Option::is_none)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(values: &[&str]) -> Vec<Option<String>> {
        values.iter().map(|v| Some(v.to_string())).collect()
    }

    fn create_test_catalog() -> Catalog {
        Catalog::from_rows(
            ["att-a", "att-b"],
            vec![
                ("sku-1".to_string(), row(&["att-a-1", "att-b-1"])),
                ("sku-2".to_string(), row(&["att-a-1", "att-b-2"])),
                ("sku-3".to_string(), vec![Some("att-a-9".to_string()), None]),
            ],
        )
        .unwrap()
    }

    #[test]
    fn test_catalog_shape() {
        let catalog = create_test_catalog();
        assert_eq!(catalog.item_count(), 3);
        assert_eq!(catalog.attribute_count(), 2);
        assert_eq!(catalog.items(), ["sku-1", "sku-2", "sku-3"]);
        assert_eq!(catalog.attributes(), ["att-a", "att-b"]);
        assert!(!catalog.is_empty());
    }

    #[test]
    fn test_cell_access() {
        let catalog = create_test_catalog();
        assert_eq!(catalog.cell(1, 1), Some("att-b-2"));
        assert_eq!(catalog.cell(2, 1), None);
        assert_eq!(catalog.cell(3, 0), None);
        assert_eq!(catalog.cell(0, 2), None);
        assert_eq!(catalog.row(0).unwrap().len(), 2);
        assert!(catalog.row(3).is_none());
    }

    #[test]
    fn test_column_iteration() {
        let catalog = create_test_catalog();
        let col: Vec<_> = catalog.column(0).collect();
        assert_eq!(col, vec![Some("att-a-1"), Some("att-a-1"), Some("att-a-9")]);
        assert_eq!(catalog.column(5).count(), 0);
    }

    #[test]
    fn test_label_lookup() {
        let catalog = create_test_catalog();
        assert_eq!(catalog.item_position("sku-2"), Some(1));
        assert_eq!(catalog.attribute_position("att-b"), Some(1));
        assert!(catalog.contains_item("sku-3"));
        assert!(!catalog.contains_item("att-a"));
        assert!(catalog.contains_attribute("att-a"));
        assert_eq!(catalog.item_label(0), Some("sku-1"));
    }

    #[test]
    fn test_missing_values_detected() {
        assert!(create_test_catalog().has_missing_values());

        let complete = Catalog::from_rows(["att-a"], vec![("sku-1".to_string(), row(&["att-a-1"]))]).unwrap();
        assert!(!complete.has_missing_values());
    }

    #[test]
    fn test_duplicate_item_rejected() {
        let mut catalog = Catalog::new(["att-a"]).unwrap();
        catalog.push_row("sku-1", row(&["att-a-1"])).unwrap();
        assert_eq!(
            catalog.push_row("sku-1", row(&["att-a-2"])),
            Err(Error::DuplicateItem("sku-1".to_string()))
        );
        assert_eq!(catalog.item_count(), 1);
    }

    #[test]
    fn test_duplicate_attribute_rejected() {
        assert_eq!(
            Catalog::new(["att-a", "att-a"]),
            Err(Error::DuplicateAttribute("att-a".to_string()))
        );
    }

    #[test]
    fn test_row_width_checked() {
        let mut catalog = Catalog::new(["att-a", "att-b"]).unwrap();
        let err = catalog.push_row("sku-1", row(&["att-a-1"])).unwrap_err();
        assert_eq!(
            err,
            Error::RowWidth {
                item: "sku-1".to_string(),
                expected: 2,
                actual: 1,
            }
        );
    }
}
