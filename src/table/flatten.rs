use crate::query::response::Binding;
use crate::table::error::TableError;
use crate::table::record::StationRecord;
use log::debug;

/// Flattens result bindings into records, keeping the endpoint's row order.
///
/// Fails on the first binding that lacks `station`, `value` or `date`; no
/// partial output is returned.
pub fn flatten(bindings: &[Binding]) -> Result<Vec<StationRecord>, TableError> {
    let records = bindings
        .iter()
        .enumerate()
        .map(|(row, binding)| StationRecord::from_binding(row, binding))
        .collect::<Result<Vec<_>, _>>()?;
    debug!("Flattened {} bindings", records.len());
    Ok(records)
}
