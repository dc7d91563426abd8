//! Single-pass reference index over a bundle's entries

use std::collections::HashMap;

use serde_json::Value as JsonValue;

use crate::bundle::BundleEntry;
use crate::error::FhirError;

/// Resources indexed by normalized reference id, plus immunization events
/// grouped by the bare patient id they point at.
///
/// Built once per bundle and read-only afterwards, replacing a linear scan
/// per reference with an O(1) lookup.
#[derive(Debug)]
pub struct FhirInfo {
    resources: HashMap<String, JsonValue>,
    immunizations_by_patient: HashMap<String, Vec<JsonValue>>,
}

impl FhirInfo {
    /// Index all entries in one pass.
    ///
    /// Entries without a `fullUrl` or without a resource object are skipped
    /// from the reference map — nothing can point at them. Two entries
    /// normalizing to the same id are a reportable condition, not a silent
    /// overwrite.
    pub fn collect(entries: &[BundleEntry]) -> Result<Self, FhirError> {
        let mut resources = HashMap::new();
        let mut immunizations_by_patient: HashMap<String, Vec<JsonValue>> = HashMap::new();

        for entry in entries {
            if !entry.resource.is_object() {
                continue;
            }

            if let Some(full_url) = entry.full_url.as_deref() {
                let id = normalize_reference(full_url);
                if resources.insert(id.clone(), entry.resource.clone()).is_some() {
                    return Err(FhirError::DuplicateReference(id));
                }
            }

            // Group immunization events under their patient so the builder
            // can assemble a record from the patient id alone.
            if entry.resource_type() == Some("Immunization") {
                let patient_ref = entry
                    .resource
                    .get("patient")
                    .and_then(|patient| patient.get("reference"))
                    .and_then(JsonValue::as_str);
                if let Some(patient_ref) = patient_ref {
                    immunizations_by_patient
                        .entry(bare_id(patient_ref).to_string())
                        .or_default()
                        .push(entry.resource.clone());
                }
            }
        }

        Ok(Self {
            resources,
            immunizations_by_patient,
        })
    }

    /// Look up a resource by reference, in any of the forms a bundle uses
    pub fn resolve(&self, reference: &str) -> Result<&JsonValue, FhirError> {
        let id = normalize_reference(reference);
        self.resources
            .get(&id)
            .ok_or(FhirError::UnresolvedReference(id))
    }

    /// Look up a patient by bare id: the relative-URL form first, then the
    /// urn-style bare uuid
    pub fn resolve_patient(&self, patient_id: &str) -> Result<&JsonValue, FhirError> {
        let relative = format!("Patient/{patient_id}");
        self.resources
            .get(&relative)
            .or_else(|| self.resources.get(patient_id))
            .ok_or(FhirError::UnresolvedReference(relative))
    }

    /// Immunization events recorded for a patient, in bundle order
    pub fn immunizations_for(&self, patient_id: &str) -> &[JsonValue] {
        self.immunizations_by_patient
            .get(patient_id)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }
}

/// Collapse the representations a reference id can take — `urn:uuid:` form,
/// absolute URL, relative `Type/id` — into one comparable form.
///
/// `fullUrl` and the `reference` fields pointing at it differ only in prefix,
/// so normalizing both through this function turns the original suffix
/// comparison into an exact-match lookup.
pub fn normalize_reference(reference: &str) -> String {
    if let Some(uuid) = reference.strip_prefix("urn:uuid:") {
        return uuid.to_string();
    }
    if let Some((_, rest)) = reference.split_once("://") {
        let mut segments = rest.rsplit('/');
        let id = segments.next().unwrap_or_default();
        let resource_type = segments.next().unwrap_or_default();
        return format!("{resource_type}/{id}");
    }
    reference.to_string()
}

/// Strip the reference scheme (`Patient/`, `urn:uuid:`) down to the bare id
pub fn bare_id(reference: &str) -> &str {
    if let Some(uuid) = reference.strip_prefix("urn:uuid:") {
        return uuid;
    }
    reference.rsplit('/').next().unwrap_or(reference)
}
