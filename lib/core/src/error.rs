use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("Null values found in the dataset")]
    MissingValue,

    #[error("Values without '{column}-' prefix found in the dataset column {column} (offending value: {value:?})")]
    PrefixMismatch { column: String, value: String },

    #[error("Values without numeric suffix found in the dataset column {column} (offending value: {value:?})")]
    NonNumericSuffix { column: String, value: String },

    #[error("Item at row {position} is labelled {label:?}, expected \"sku-{}\"", .position + 1)]
    ItemLabelMismatch { position: usize, label: String },

    #[error("Invalid sku code {input:?}: expected an sku code with 'sku-' prefix (sku-number)")]
    InvalidFormat { input: String },

    #[error("Sku code not found in dataset: {sku}")]
    NotFound { sku: String },

    #[error("Item index out of range: {index} (catalog has {len} items)")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("Duplicate item label: {0}")]
    DuplicateItem(String),

    #[error("Duplicate attribute label: {0}")]
    DuplicateAttribute(String),

    #[error("Invalid row width for {item}: expected {expected} values, got {actual}")]
    RowWidth { item: String, expected: usize, actual: usize },
}

impl Error {
    /// True for failures raised while checking catalog structure.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Error::MissingValue
                | Error::PrefixMismatch { .. }
                | Error::NonNumericSuffix { .. }
                | Error::ItemLabelMismatch { .. }
        )
    }

    /// True for failures caused by the user-supplied query token.
    pub fn is_query(&self) -> bool {
        matches!(self, Error::InvalidFormat { .. } | Error::NotFound { .. })
    }

    /// The attribute column a validation failure points at, if any.
    pub fn column(&self) -> Option<&str> {
        match self {
            Error::PrefixMismatch { column, .. } | Error::NonNumericSuffix { column, .. } => {
                Some(column)
            }
            _ => None,
        }
    }
}
