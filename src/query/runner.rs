use crate::query::config::{HttpMethod, QueryConfig};
use crate::query::error::QueryError;
use crate::query::response::SparqlResults;
use log::{debug, info, warn};
use reqwest::header::ACCEPT;
use reqwest::Client;

const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Sends one configured query to its endpoint and decodes the answer.
pub struct QueryRunner {
    config: QueryConfig,
    client: Client,
}

impl QueryRunner {
    pub fn new(config: QueryConfig) -> Result<QueryRunner, QueryError> {
        let mut builder = Client::builder().user_agent(USER_AGENT);
        if let Some(timeout) = config.timeout() {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().map_err(QueryError::ClientBuild)?;
        Ok(QueryRunner { config, client })
    }

    pub fn config(&self) -> &QueryConfig {
        &self.config
    }

    /// Executes the query once. Failures are returned as-is, nothing is retried.
    pub async fn run(&self) -> Result<SparqlResults, QueryError> {
        let url = self.config.endpoint_url();
        let query = [("query", self.config.query_text())];
        info!(
            "Querying {} via {} for {} results",
            url,
            self.config.method(),
            self.config.result_format()
        );

        let request = match self.config.method() {
            HttpMethod::Get => self.client.get(url).query(&query),
            HttpMethod::Post => self.client.post(url).form(&query),
        };

        let response = request
            .header(ACCEPT, self.config.result_format().accept())
            .send()
            .await
            .map_err(|e| QueryError::NetworkRequest {
                url: url.to_string(),
                source: e,
            })?;

        let status = response.status();
        if !status.is_success() {
            // The endpoint's explanation (e.g. a query parse error) is kept in the error.
            let body = response.text().await.unwrap_or_default();
            warn!("HTTP error {} for {}: {}", status, url, body);
            return Err(QueryError::HttpStatus {
                url: url.to_string(),
                status,
                body,
            });
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| QueryError::ResponseBody {
                url: url.to_string(),
                source: e,
            })?;
        let results: SparqlResults = serde_json::from_slice(&body)?;
        debug!(
            "Received {} bindings over variables {:?} ({} bytes)",
            results.results.bindings.len(),
            results.head.vars,
            body.len()
        );
        Ok(results)
    }
}
