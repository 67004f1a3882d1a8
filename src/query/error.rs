use thiserror::Error;

#[derive(Debug, Error)]
pub enum QueryError {
    #[error("Failed to build HTTP client")]
    ClientBuild(#[source] reqwest::Error),

    #[error("Network request failed for {url}")]
    NetworkRequest {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("SPARQL endpoint {url} answered with status {status}: {body}")]
    HttpStatus {
        url: String,
        status: reqwest::StatusCode,
        body: String,
    },

    #[error("Failed to read response body from {url}")]
    ResponseBody {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("Response is not a SPARQL JSON results document")]
    JsonParse(#[from] serde_json::Error),
}
