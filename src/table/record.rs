use crate::query::response::Binding;
use crate::table::error::TableError;

pub const COL_STATION: &str = "station";
pub const COL_VALUE: &str = "value";
pub const COL_DATE: &str = "date";

/// Column order of every station table.
pub const STATION_COLUMNS: [&str; 3] = [COL_STATION, COL_VALUE, COL_DATE];

/// One flattened result row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StationRecord {
    pub station: String,
    pub value: String,
    pub date: String,
}

impl StationRecord {
    pub fn new(
        station: impl Into<String>,
        value: impl Into<String>,
        date: impl Into<String>,
    ) -> Self {
        Self {
            station: station.into(),
            value: value.into(),
            date: date.into(),
        }
    }

    /// Extracts the three lexical values from the binding at position `row`.
    pub fn from_binding(row: usize, binding: &Binding) -> Result<Self, TableError> {
        let require = |variable: &'static str| {
            binding
                .value(variable)
                .map(str::to_owned)
                .ok_or(TableError::MissingVariable { row, variable })
        };
        Ok(Self {
            station: require(COL_STATION)?,
            value: require(COL_VALUE)?,
            date: require(COL_DATE)?,
        })
    }
}
