//! Contains [`StationFrame`], the in-memory table of flattened query results.

use crate::table::error::TableError;
use crate::table::record::{StationRecord, COL_DATE, COL_STATION, COL_VALUE};
use polars::prelude::{Column, DataFrame, StringChunked};
use std::fmt;

/// A wrapper around a Polars `DataFrame` holding station results.
///
/// The frame always has the string columns `station`, `value` and `date`, in
/// that order. Rows appear in the order the endpoint returned them.
///
/// Instances are typically obtained via [`crate::LdFrame::fetch`].
#[derive(Debug, Clone)]
pub struct StationFrame {
    /// The underlying Polars DataFrame.
    pub frame: DataFrame,
}

impl StationFrame {
    /// Builds the table from flattened records.
    ///
    /// # Example
    ///
    /// ```
    /// use ldframe::{StationFrame, StationRecord};
    ///
    /// let records = vec![
    ///     StationRecord::new("A", "1.2", "2024-01-01"),
    ///     StationRecord::new("B", "3.4", "2024-01-02"),
    /// ];
    /// let table = StationFrame::from_records(&records)?;
    /// assert_eq!(table.height(), 2);
    /// # Ok::<(), ldframe::TableError>(())
    /// ```
    pub fn from_records(records: &[StationRecord]) -> Result<Self, TableError> {
        let (stations, (values, dates)): (Vec<String>, (Vec<String>, Vec<String>)) = records
            .iter()
            .map(|r| (r.station.clone(), (r.value.clone(), r.date.clone())))
            .unzip();

        let frame = DataFrame::new(vec![
            Column::new(COL_STATION.into(), stations),
            Column::new(COL_VALUE.into(), values),
            Column::new(COL_DATE.into(), dates),
        ])?;
        Ok(Self { frame })
    }

    pub fn height(&self) -> usize {
        self.frame.height()
    }

    pub fn is_empty(&self) -> bool {
        self.frame.height() == 0
    }

    /// The first `n` rows, or all of them if there are fewer.
    pub fn head(&self, n: usize) -> StationFrame {
        StationFrame {
            frame: self.frame.head(Some(n)),
        }
    }

    /// Collects the table back into records, in row order.
    ///
    /// # Errors
    ///
    /// Returns [`TableError::ColumnNotFound`] if one of the three columns is
    /// missing, [`TableError::DataFrame`] if a column is not of string dtype and
    /// [`TableError::NullValue`] for null cells.
    pub fn records(&self) -> Result<Vec<StationRecord>, TableError> {
        let stations = self.string_column(COL_STATION)?;
        let values = self.string_column(COL_VALUE)?;
        let dates = self.string_column(COL_DATE)?;

        (0..self.frame.height())
            .map(|row| -> Result<StationRecord, TableError> {
                let cell = |ca: &StringChunked, column: &'static str| {
                    ca.get(row)
                        .map(str::to_owned)
                        .ok_or(TableError::NullValue { column, row })
                };
                Ok(StationRecord {
                    station: cell(stations, COL_STATION)?,
                    value: cell(values, COL_VALUE)?,
                    date: cell(dates, COL_DATE)?,
                })
            })
            .collect()
    }

    fn string_column(&self, name: &str) -> Result<&StringChunked, TableError> {
        let column = self
            .frame
            .column(name)
            .map_err(|e| TableError::ColumnNotFound(name.to_string(), e))?;
        Ok(column.str()?)
    }
}

impl fmt::Display for StationFrame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.frame)
    }
}
