use serde::{Deserialize, Serialize};

/// How much of the minimum data set a derived record may expose.
///
/// Tiers follow the EU eHealthNetwork Annex 1 guidance: a venue verifying a
/// certificate needs less than a border agent, who needs less than a treating
/// clinician.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum DisclosureLevel {
    /// Public venue: the least disclosure
    Pv,
    /// Border control: adds identity and vaccine details
    Bc,
    /// Medical: the full minimum data set
    Md,
}

impl DisclosureLevel {
    /// Whether this tier includes the identity fields (birth date, identifier)
    pub fn includes_identity(self) -> bool {
        matches!(self, DisclosureLevel::Bc | DisclosureLevel::Md)
    }

    /// Whether this tier includes the clinical detail fields
    pub fn includes_clinical(self) -> bool {
        matches!(self, DisclosureLevel::Md)
    }
}
