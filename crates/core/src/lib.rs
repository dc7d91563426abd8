//! immucert-core: FHIR Immunization bundle resolution and minimum data sets
//!
//! This crate turns a FHIR search-result Bundle (fetched with
//! `_include=Immunization:patient` so referenced resources travel inside the
//! response) into eHealthNetwork Annex 1 minimum data sets, one per
//! Immunization entry, scoped by disclosure level.

pub mod bundle;
pub mod disclosure;
pub mod error;
pub mod index;
pub mod min_data_set;
pub mod parser;
pub mod path;
pub mod uvci;

// Re-export the public surface
pub use bundle::{Bundle, BundleEntry, BundleLink, BundleType};
pub use disclosure::DisclosureLevel;
pub use error::FhirError;
pub use index::FhirInfo;
pub use min_data_set::{MinDataSet, PatientImmunizationDirectBuilder};
pub use parser::VaccEntryParser;
pub use uvci::UvciInfo;
