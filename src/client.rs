//! This module provides the main entry point: run the configured query and get
//! a [`StationFrame`] back.

use crate::error::LdFrameError;
use crate::query::config::QueryConfig;
use crate::query::runner::QueryRunner;
use crate::table::flatten::flatten;
use crate::table::frame::StationFrame;
use crate::table::record::StationRecord;
use log::info;

/// The client composing query, flattening and tabulation.
///
/// # Examples
///
/// ```no_run
/// # use ldframe::{LdFrame, LdFrameError, QueryConfig};
/// # #[tokio::main]
/// # async fn main() -> Result<(), LdFrameError> {
/// let client = LdFrame::new(QueryConfig::default())?;
/// let table = client.fetch().await?;
/// println!("{}", table.head(5));
/// # Ok(())
/// # }
/// ```
pub struct LdFrame {
    runner: QueryRunner,
}

impl LdFrame {
    /// Creates a client for one endpoint and query.
    ///
    /// # Errors
    ///
    /// Returns [`LdFrameError::Query`] if the HTTP client cannot be built.
    pub fn new(config: QueryConfig) -> Result<Self, LdFrameError> {
        Ok(Self {
            runner: QueryRunner::new(config)?,
        })
    }

    pub fn config(&self) -> &QueryConfig {
        self.runner.config()
    }

    /// Runs the query and flattens every binding into a [`StationRecord`].
    ///
    /// # Errors
    ///
    /// * [`LdFrameError::Query`] for transport, status or decoding failures.
    /// * [`LdFrameError::Table`] if a binding lacks `station`, `value` or `date`.
    pub async fn fetch_records(&self) -> Result<Vec<StationRecord>, LdFrameError> {
        let results = self.runner.run().await?;
        Ok(flatten(&results.results.bindings)?)
    }

    /// Runs the query and materializes the results as a [`StationFrame`].
    pub async fn fetch(&self) -> Result<StationFrame, LdFrameError> {
        let records = self.fetch_records().await?;
        let table = StationFrame::from_records(&records)?;
        info!(
            "Loaded {} rows from {}",
            table.height(),
            self.config().endpoint_url()
        );
        Ok(table)
    }
}
