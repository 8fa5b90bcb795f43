//! Attribute overlap between catalog rows
//!
//! Values are compared exactly: case-sensitive, no trimming, no partial
//! credit. A missing cell never matches anything, including another missing
//! cell.

/// Whether two cell values count as a match
pub fn value_matches(a: Option<&str>, b: Option<&str>) -> bool {
    match (a, b) {
        (Some(a), Some(b)) => a == b,
        _ => false,
    }
}

/// Number of positions where `reference` and `candidate` hold equal values
///
/// # Arguments
/// * `reference` - Cells of the reference row
/// * `candidate` - Cells of the row being scored, same width as `reference`
pub fn overlap_count(reference: &[Option<String>], candidate: &[Option<String>]) -> usize {
    reference
        .iter()
        .zip(candidate)
        .filter(|(a, b)| value_matches(a.as_deref(), b.as_deref()))
        .count()
}

/// Names of the attributes on which the two rows agree, in column order
pub fn matched_attributes<'a>(
    attributes: &'a [String],
    reference: &[Option<String>],
    candidate: &[Option<String>],
) -> Vec<&'a str> {
    attributes
        .iter()
        .zip(reference.iter().zip(candidate))
        .filter(|(_, (a, b))| value_matches(a.as_deref(), b.as_deref()))
        .map(|(name, _)| name.as_str())
        .collect()
}
