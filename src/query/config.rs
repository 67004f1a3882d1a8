//! Describes where a query is sent, what it asks for and how the answer should be shaped.

use bon::Builder;
use std::fmt;
use std::time::Duration;

/// The LINDAS linked-data endpoint of the Swiss federal administration.
pub const DEFAULT_ENDPOINT: &str = "https://politics.ld.admin.ch/query/";

/// Selects station, value and date triples from the default endpoint.
///
/// The graph pattern is kept exactly as published; `?value` is bound through
/// `dct:description` and `?station` through `dct:subject`.
pub const STATION_QUERY: &str = r#"
PREFIX dct: <http://purl.org/dc/terms/>
SELECT ?station ?value ?date
WHERE {
  ?obs dct:subject ?station ;
       dct:date ?date ;
       dct:description ?value .
}
LIMIT 100
"#;

/// The response document format requested from the endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[non_exhaustive]
pub enum ResultFormat {
    /// SPARQL 1.1 Query Results JSON Format.
    #[default]
    Json,
}

impl ResultFormat {
    /// The preferred media type of this format.
    pub fn media_type(&self) -> &'static str {
        match self {
            ResultFormat::Json => "application/sparql-results+json",
        }
    }

    /// The full `Accept` header value, with plain JSON as a fallback.
    pub fn accept(&self) -> &'static str {
        match self {
            ResultFormat::Json => "application/sparql-results+json, application/json;q=0.9",
        }
    }
}

impl fmt::Display for ResultFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResultFormat::Json => write!(f, "json"),
        }
    }
}

/// How the query text travels to the endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum HttpMethod {
    /// `GET endpoint?query=...`
    #[default]
    Get,
    /// `POST endpoint` with an `application/x-www-form-urlencoded` body `query=...`.
    ///
    /// Useful when the query text is too long for a URL.
    Post,
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HttpMethod::Get => write!(f, "GET"),
            HttpMethod::Post => write!(f, "POST"),
        }
    }
}

/// Everything needed to run one query.
///
/// Build one with [`QueryConfig::builder()`], or take [`QueryConfig::default()`]
/// for the station query against [`DEFAULT_ENDPOINT`].
///
/// # Examples
///
/// ```
/// use ldframe::{HttpMethod, QueryConfig, ResultFormat};
///
/// let config = QueryConfig::builder()
///     .endpoint_url("https://example.org/sparql")
///     .query_text("SELECT ?station ?value ?date WHERE { ?s ?p ?o } LIMIT 1")
///     .method(HttpMethod::Post)
///     .build();
///
/// assert_eq!(config.result_format(), ResultFormat::Json);
/// assert_eq!(config.method(), HttpMethod::Post);
/// assert!(config.timeout().is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Builder)]
pub struct QueryConfig {
    #[builder(into)]
    endpoint_url: String,
    #[builder(into)]
    query_text: String,
    #[builder(default)]
    result_format: ResultFormat,
    #[builder(default)]
    method: HttpMethod,
    /// Whole-request timeout. When unset the transport default applies.
    timeout: Option<Duration>,
}

impl QueryConfig {
    pub fn endpoint_url(&self) -> &str {
        &self.endpoint_url
    }

    pub fn query_text(&self) -> &str {
        &self.query_text
    }

    pub fn result_format(&self) -> ResultFormat {
        self.result_format
    }

    pub fn method(&self) -> HttpMethod {
        self.method
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout
    }
}

impl Default for QueryConfig {
    fn default() -> Self {
        Self::builder()
            .endpoint_url(DEFAULT_ENDPOINT)
            .query_text(STATION_QUERY)
            .build()
    }
}
