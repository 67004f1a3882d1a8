use polars::error::PolarsError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TableError {
    // Binding rows are counted from zero, in the order the endpoint returned them.
    #[error("Binding {row} has no value for variable '?{variable}'")]
    MissingVariable { row: usize, variable: &'static str },

    #[error("Required column '{0}' not found in DataFrame")]
    ColumnNotFound(String, #[source] PolarsError),

    #[error("Column '{column}' holds a null at row {row}")]
    NullValue { column: &'static str, row: usize },

    #[error("Failed processing DataFrame: {0}")]
    DataFrame(#[from] PolarsError),
}
