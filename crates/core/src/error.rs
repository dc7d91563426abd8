use thiserror::Error;

/// Failure modes of bundle entry resolution.
///
/// Two distinct kinds are deliberate: a missing required field
/// (`PathNotFound`) and a dangling reference (`UnresolvedReference`) are both
/// data-integrity failures, but they call for different fixes upstream —
/// the first means the resource is malformed, the second usually means the
/// bundle was fetched without `_include=*`. Neither is ever defaulted over.
#[derive(Debug, Error)]
pub enum FhirError {
    /// A required nested field was absent from a resource
    #[error("required path not found: {0}")]
    PathNotFound(String),

    /// A reference had no match among the bundle's entries
    #[error("unresolved reference: {0} (was the bundle fetched with _include?)")]
    UnresolvedReference(String),

    /// Two bundle entries normalized to the same reference id
    #[error("duplicate reference in bundle: {0}")]
    DuplicateReference(String),
}
