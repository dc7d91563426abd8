//! Immunization search with server-side reference inclusion and paging

use chrono::NaiveDate;
use immucert_core::Bundle;

use crate::error::QueryError;

/// Public HAPI test server used when no server is configured
pub const DEFAULT_SERVER: &str = "http://hapi.fhir.org/baseR4";

/// Client for the FHIR Immunization search.
///
/// The search asks the server to ship referenced Patient resources inside the
/// response (`_include=Immunization:patient`) so that the extraction core can
/// resolve references without further round trips.
#[derive(Clone)]
pub struct FhirQuery {
    http: reqwest::Client,
    base_url: String,
}

impl FhirQuery {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    /// Run the search and merge all result pages into one bundle.
    ///
    /// `since` restricts results to immunizations on or after that date
    /// (`date=ge...` search parameter).
    pub async fn find(&self, since: Option<NaiveDate>) -> Result<Bundle, QueryError> {
        let mut url = format!(
            "{}/Immunization?_include=Immunization:patient",
            self.base_url.trim_end_matches('/')
        );
        if let Some(date) = since {
            url.push_str(&format!("&date=ge{}", date.format("%Y-%m-%d")));
        }

        let mut merged = self.fetch_page(&url).await?;
        tracing::debug!(entries = merged.entry.len(), "Fetched first result page");

        while let Some(next) = next_link(&merged) {
            let next = next.to_string();
            let page = self.fetch_page(&next).await?;
            tracing::debug!(url = %next, entries = page.entry.len(), "Fetched next result page");
            merge_page(&mut merged, page);
        }

        tracing::info!(
            entries = merged.entry.len(),
            total = merged.total,
            "Immunization search complete"
        );
        Ok(merged)
    }

    async fn fetch_page(&self, url: &str) -> Result<Bundle, QueryError> {
        let response = self
            .http
            .get(url)
            .header(reqwest::header::ACCEPT, "application/fhir+json")
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(QueryError::Status { status, body });
        }

        Ok(response.json::<Bundle>().await?)
    }
}

/// The `next` paging link, if the server reported one
pub fn next_link(bundle: &Bundle) -> Option<&str> {
    bundle
        .link
        .iter()
        .find(|link| link.relation == "next")
        .map(|link| link.url.as_str())
}

/// Fold one result page into the accumulated bundle.
///
/// Entries are appended in server order. `total` counts matches, not pages,
/// so the first page's value stands; it is only filled in if the first page
/// did not report one. The links are replaced wholesale so the paging chain
/// advances to the new page's `next`.
pub fn merge_page(merged: &mut Bundle, page: Bundle) {
    merged.entry.extend(page.entry);
    if merged.total.is_none() {
        merged.total = page.total;
    }
    merged.link = page.link;
}
