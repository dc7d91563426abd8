//! immucert-client: FHIR search client for Immunization bundles
//!
//! The extraction core needs one fully `_include`-expanded bundle; this crate
//! is the supplier. It runs the Immunization search, follows the server's
//! paging links and hands back a single merged Bundle.

mod error;
mod query;

pub use error::QueryError;
pub use query::{DEFAULT_SERVER, FhirQuery, merge_page, next_link};
