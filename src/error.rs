use crate::query::error::QueryError;
use crate::table::error::TableError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LdFrameError {
    #[error(transparent)]
    Query(#[from] QueryError),

    #[error(transparent)]
    Table(#[from] TableError),

    #[error("Failed to write table preview")]
    Output(#[from] std::io::Error),
}
