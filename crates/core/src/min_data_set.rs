//! eHN Annex 1 minimum-data-set assembly

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value as JsonValue};

use crate::disclosure::DisclosureLevel;
use crate::error::FhirError;
use crate::index::FhirInfo;
use crate::path::find_path;
use crate::uvci::UvciInfo;

/// Disease code emitted when `protocolApplied.targetDisease` is absent
pub const UNKNOWN_DISEASE: &str = "Unknown";

/// One assembled minimum-data-set record.
///
/// Kept as a field map rather than a struct because the emitted shape varies
/// with the disclosure level. Ownership moves to the caller on return; no
/// state is retained.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(transparent)]
pub struct MinDataSet(Map<String, JsonValue>);

impl MinDataSet {
    pub fn get(&self, field: &str) -> Option<&JsonValue> {
        self.0.get(field)
    }

    pub fn contains(&self, field: &str) -> bool {
        self.0.contains_key(field)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    fn insert(&mut self, field: &str, value: JsonValue) {
        self.0.insert(field.to_string(), value);
    }
}

/// Assembles a minimum-data-set record straight from the indexed bundle.
///
/// Field selection is gated by disclosure level. Required fields go through
/// [`find_path`] so their absence fails the entry; optional fields are
/// defaulted (`dis`) or omitted (`vac`, `lot`) — that asymmetry is the
/// contract, a data-integrity error must never be papered over with a
/// default.
pub struct PatientImmunizationDirectBuilder;

impl PatientImmunizationDirectBuilder {
    pub fn build(
        info: &FhirInfo,
        patient_id: &str,
        disclosure_level: DisclosureLevel,
        uvci: &UvciInfo,
    ) -> Result<MinDataSet, FhirError> {
        let patient = info.resolve_patient(patient_id)?;

        // One event per patient in a certificate bundle; with several, the
        // first in bundle order wins for every call.
        let immunization = info.immunizations_for(patient_id).first().ok_or_else(|| {
            FhirError::UnresolvedReference(format!("Immunization for Patient/{patient_id}"))
        })?;

        let mut record = MinDataSet::default();
        record.insert("nam", find_path(patient, &["name"])?.clone());
        record.insert("dat", find_path(immunization, &["occurrenceDateTime"])?.clone());
        record.insert("dos", find_path(immunization, &["doseQuantity"])?.clone());
        record.insert("dis", target_disease(immunization));
        record.insert("ci", JsonValue::String(uvci.value().to_string()));

        if disclosure_level.includes_identity() {
            record.insert("dob", find_path(patient, &["birthDate"])?.clone());
            record.insert("pid", find_path(patient, &["identifier"])?.clone());
            if let Some(vaccine) = immunization.get("vaccineCode") {
                record.insert("vac", vaccine.clone());
            }
        }

        if disclosure_level.includes_clinical() {
            if let Some(lot) = immunization.get("lotNumber") {
                record.insert("lot", lot.clone());
            }
        }

        Ok(record)
    }
}

/// `protocolApplied.targetDisease` is optional; its absence is a defaulted
/// gap, not an integrity failure.
fn target_disease(immunization: &JsonValue) -> JsonValue {
    match find_path(immunization, &["protocolApplied", "targetDisease"]) {
        Ok(disease) => disease.clone(),
        Err(_) => JsonValue::String(UNKNOWN_DISEASE.to_string()),
    }
}
