//! Bundle entry resolution

use crate::bundle::{Bundle, BundleEntry};
use crate::disclosure::DisclosureLevel;
use crate::error::FhirError;
use crate::index::{FhirInfo, bare_id};
use crate::min_data_set::{MinDataSet, PatientImmunizationDirectBuilder};
use crate::path::find_path;
use crate::uvci::UvciInfo;

/// Resolves FHIR `Immunization` bundle entries into minimum data sets.
///
/// Works over one search-result bundle at a time. The whole response document
/// is required because an Immunization only points at its Patient, which sits
/// in a sibling entry — the query must therefore have been run with
/// `_include=Immunization:patient` (and any paging already merged) before the
/// bundle reaches this type.
///
/// The parser is stateless across [`resolve_entry`](Self::resolve_entry)
/// calls beyond the index built at construction: each call is independent and
/// order-insensitive.
#[derive(Debug)]
pub struct VaccEntryParser {
    info: FhirInfo,
    uvci: UvciInfo,
}

impl VaccEntryParser {
    /// Index the bundle's entries once; every later lookup is O(1).
    ///
    /// Fails if two entries claim the same reference id, which would make
    /// later resolution ambiguous.
    pub fn new(qry_res: &Bundle, uvci: UvciInfo) -> Result<Self, FhirError> {
        let info = FhirInfo::collect(&qry_res.entry)?;
        Ok(Self { info, uvci })
    }

    /// Resolve one entry at the given disclosure level.
    ///
    /// `Ok(None)` means the entry is not an Immunization — bundles
    /// legitimately interleave resource types, so this is a skip, not an
    /// error. A qualifying entry missing its patient reference fails with
    /// [`FhirError::PathNotFound`], and one whose patient is absent from the
    /// bundle fails with [`FhirError::UnresolvedReference`]: an incomplete
    /// record is never emitted.
    pub fn resolve_entry(
        &self,
        entry: &BundleEntry,
        disclosure_level: DisclosureLevel,
    ) -> Result<Option<MinDataSet>, FhirError> {
        if !Self::is_immunization_entry(entry) {
            return Ok(None);
        }

        let reference = find_path(&entry.resource, &["patient", "reference"])?
            .as_str()
            .ok_or_else(|| FhirError::PathNotFound("patient.reference".to_string()))?;
        let patient_id = bare_id(reference);

        let record = PatientImmunizationDirectBuilder::build(
            &self.info,
            patient_id,
            disclosure_level,
            &self.uvci,
        )?;
        Ok(Some(record))
    }

    fn is_immunization_entry(entry: &BundleEntry) -> bool {
        entry.resource_type() == Some("Immunization")
    }
}
