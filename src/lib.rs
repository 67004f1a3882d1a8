mod client;
mod display;
mod error;
mod query;
mod table;

pub use client::LdFrame;
pub use error::LdFrameError;

pub use display::{configure_polars_display, write_preview, DEFAULT_PREVIEW_ROWS};

pub use query::config::{HttpMethod, QueryConfig, ResultFormat, DEFAULT_ENDPOINT, STATION_QUERY};
pub use query::error::QueryError;
pub use query::response::{Binding, Head, RdfTerm, ResultSet, SparqlResults, TermKind};
pub use query::runner::QueryRunner;

pub use table::error::TableError;
pub use table::flatten::flatten;
pub use table::frame::StationFrame;
pub use table::record::{StationRecord, STATION_COLUMNS};
