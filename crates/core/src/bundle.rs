use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

/// FHIR Bundle types
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum BundleType {
    Searchset,
    History,
    Collection,
    Document,
    Message,
    Transaction,
    TransactionResponse,
    Batch,
    BatchResponse,
}

/// FHIR Bundle resource (simplified for search responses)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Bundle {
    pub resource_type: String,

    #[serde(rename = "type")]
    pub bundle_type: BundleType,

    /// Match count reported by the server; may exceed the entries present
    /// when the result is paged.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total: Option<u32>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub link: Vec<BundleLink>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub entry: Vec<BundleEntry>,
}

impl Bundle {
    /// Create a `searchset` bundle, the shape a FHIR search returns
    pub fn searchset(total: u32, entries: Vec<BundleEntry>) -> Self {
        Self {
            resource_type: "Bundle".to_string(),
            bundle_type: BundleType::Searchset,
            total: Some(total),
            link: Vec::new(),
            entry: entries,
        }
    }
}

/// Paging link within a search-result bundle (`self`, `next`, ...)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BundleLink {
    pub relation: String,
    pub url: String,
}

/// One bundle element: a resolvable identifier plus its resource.
///
/// Resources stay loosely typed (`serde_json::Value`): entry resolution walks
/// an arbitrary document graph in which only a handful of paths are ever
/// inspected, and non-Immunization resource types are carried along solely to
/// be referenced.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BundleEntry {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub full_url: Option<String>,

    #[serde(default, skip_serializing_if = "JsonValue::is_null")]
    pub resource: JsonValue,
}

impl BundleEntry {
    pub fn new(full_url: Option<String>, resource: JsonValue) -> Self {
        Self { full_url, resource }
    }

    /// The `resourceType` discriminator, if the resource carries one
    pub fn resource_type(&self) -> Option<&str> {
        self.resource.get("resourceType").and_then(JsonValue::as_str)
    }
}
