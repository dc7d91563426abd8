use thiserror::Error;

/// Failures while querying the FHIR server
#[derive(Debug, Error)]
pub enum QueryError {
    /// Transport failure, or a response body that is not a valid Bundle
    #[error("FHIR request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The server answered with a non-success status
    #[error("FHIR server returned {status}: {body}")]
    Status {
        status: reqwest::StatusCode,
        body: String,
    },
}
