//! Path-based lookup in loosely typed FHIR resources

use serde_json::Value as JsonValue;

use crate::error::FhirError;

/// Walk `doc` one mapping level per path segment.
///
/// A missing intermediate key surfaces as [`FhirError::PathNotFound`] naming
/// the dotted prefix that failed; it is never swallowed here. Whether a field
/// is optional is decided at the call site — a malformed resource must abort
/// the current entry's resolution rather than yield a partial record.
pub fn find_path<'a>(doc: &'a JsonValue, path: &[&str]) -> Result<&'a JsonValue, FhirError> {
    let mut current = doc;
    for (depth, key) in path.iter().enumerate() {
        current = current
            .get(key)
            .ok_or_else(|| FhirError::PathNotFound(path[..=depth].join(".")))?;
    }
    Ok(current)
}
