use crate::table::frame::StationFrame;
use std::env;
use std::io::{self, Write};

/// Number of rows shown by [`write_preview`] when the caller has no preference.
pub const DEFAULT_PREVIEW_ROWS: usize = 5;

/// Lets Polars print every column and strings of up to 200 characters.
pub fn configure_polars_display() {
    // show every column
    env::set_var("POLARS_FMT_MAX_COLS", "-1");
    // print strings up to 200 characters before eliding
    env::set_var("POLARS_FMT_STR_LEN", "200");
}

/// Writes the first `rows` rows of `table` to `out`.
pub fn write_preview<W: Write>(out: &mut W, table: &StationFrame, rows: usize) -> io::Result<()> {
    writeln!(out, "{}", table.head(rows))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::record::StationRecord;

    fn render(table: &StationFrame, rows: usize) -> Result<String, Box<dyn std::error::Error>> {
        let mut out = Vec::new();
        write_preview(&mut out, table, rows)?;
        Ok(String::from_utf8(out)?)
    }

    #[test]
    fn test_preview_of_empty_table() -> Result<(), Box<dyn std::error::Error>> {
        let table = StationFrame::from_records(&[])?;
        let text = render(&table, DEFAULT_PREVIEW_ROWS)?;
        assert!(text.contains("shape: (0, 3)"));
        assert!(text.contains("station"));
        assert!(text.contains("date"));
        Ok(())
    }

    #[test]
    fn test_preview_shows_all_of_a_short_table() -> Result<(), Box<dyn std::error::Error>> {
        let table = StationFrame::from_records(&[
            StationRecord::new("A", "1.2", "2024-01-01"),
            StationRecord::new("B", "3.4", "2024-01-02"),
            StationRecord::new("C", "5.6", "2024-01-03"),
        ])?;
        let text = render(&table, DEFAULT_PREVIEW_ROWS)?;
        assert!(text.contains("shape: (3, 3)"));
        let a = text.find("2024-01-01").unwrap();
        let b = text.find("2024-01-02").unwrap();
        let c = text.find("2024-01-03").unwrap();
        assert!(a < b && b < c);
        Ok(())
    }

    #[test]
    fn test_preview_limits_rows() -> Result<(), Box<dyn std::error::Error>> {
        let records: Vec<StationRecord> = (1..=8)
            .map(|d| StationRecord::new("A", d.to_string(), format!("2024-01-0{d}")))
            .collect();
        let table = StationFrame::from_records(&records)?;
        let text = render(&table, DEFAULT_PREVIEW_ROWS)?;
        assert!(text.contains("shape: (5, 3)"));
        assert!(text.contains("2024-01-05"));
        assert!(!text.contains("2024-01-06"));
        Ok(())
    }
}
