use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique Vaccination Certificate Identifier, assigned by an external
/// issuing authority.
///
/// The extraction core never inspects the value; it is carried into each
/// assembled record unchanged.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(transparent)]
pub struct UvciInfo(String);

impl UvciInfo {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Mint a demo identifier when no issuing authority supplied one.
    ///
    /// Layout follows UVCI option 3: schema version, issuer, opaque unique
    /// string (no checksum).
    pub fn generate(issuer: &str) -> Self {
        Self(format!("01:{}:{}", issuer, Uuid::new_v4().simple()))
    }

    pub fn value(&self) -> &str {
        &self.0
    }
}
