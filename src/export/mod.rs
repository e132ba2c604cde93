//! CSV export (semicolon-delimited)
//!
//! Column order follows the table: identity and dates, then weight / loss /
//! status triples per checkpoint, then hatch date and notes. Absent values
//! are empty cells.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use tracing::info;

use crate::record::{CheckpointDay, EggRecord};
use crate::Result;

/// Default export file name.
pub const EXPORT_FILE_NAME: &str = "controle_ovos_ring_neck.csv";

/// Header row, in column order.
pub const CSV_HEADER: [&str; 18] = [
    "Ovo",
    "Data Postura",
    "Peso Inicial (g)",
    "Entrada Chocadeira",
    "Peso 5 Dias (g)",
    "Perda 5 Dias (%)",
    "Status 5 Dias",
    "Peso 10 Dias (g)",
    "Perda 10 Dias (%)",
    "Status 10 Dias",
    "Peso 15 Dias (g)",
    "Perda 15 Dias (%)",
    "Status 15 Dias",
    "Peso 20 Dias (g)",
    "Perda 20 Dias (%)",
    "Status 20 Dias",
    "Data Eclosão",
    "Observações",
];

fn opt_cell<T: ToString>(value: Option<T>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}

/// Cells of one data row, in [`CSV_HEADER`] order.
#[must_use]
pub fn csv_row(egg: &EggRecord) -> Vec<String> {
    let mut row = Vec::with_capacity(CSV_HEADER.len());
    row.push(egg.id().to_string());
    row.push(egg.lay_date().to_string());
    row.push(egg.initial_weight().to_string());
    row.push(egg.incubator_entry_date().to_string());
    for day in CheckpointDay::ALL {
        row.push(opt_cell(egg.weight_at(day)));
        row.push(opt_cell(egg.loss_pct(day).map(|loss| format!("{loss:.1}"))));
        row.push(opt_cell(egg.status(day).map(|status| status.label())));
    }
    row.push(opt_cell(egg.hatch_date()));
    row.push(egg.notes().unwrap_or_default().to_string());
    row
}

/// Write the header and one row per record to `writer`.
///
/// # Errors
///
/// Returns CSV or IO errors from the underlying writer.
pub fn write_csv<W: Write>(records: &[EggRecord], writer: W) -> Result<()> {
    let mut csv_writer = csv::WriterBuilder::new()
        .delimiter(b';')
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(writer);

    csv_writer.write_record(CSV_HEADER)?;
    for egg in records {
        csv_writer.write_record(csv_row(egg))?;
    }
    csv_writer.flush()?;
    Ok(())
}

/// Render the export as a string.
///
/// # Errors
///
/// Returns CSV errors; in practice only on invalid UTF-8, which cannot occur.
pub fn export_csv(records: &[EggRecord]) -> Result<String> {
    let mut buffer = Vec::new();
    write_csv(records, &mut buffer)?;
    String::from_utf8(buffer).map_err(|e| crate::Error::Csv(format!("UTF-8 conversion error: {e}")))
}

/// Write the export to `path`.
///
/// # Errors
///
/// Returns IO errors creating the file, or CSV errors while writing.
pub fn export_to_file(records: &[EggRecord], path: &Path) -> Result<()> {
    let file = File::create(path)?;
    write_csv(records, file)?;
    info!(path = %path.display(), rows = records.len(), "CSV exported");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::seed::seed_records;

    #[test]
    fn test_header_line() {
        let csv = export_csv(&[]).unwrap();
        assert_eq!(csv, format!("{}\n", CSV_HEADER.join(";")));
    }

    #[test]
    fn test_row_b1() {
        let seeds = seed_records();
        let row = csv_row(&seeds[0]);
        assert_eq!(row.len(), CSV_HEADER.len());
        assert_eq!(&row[..7], ["B1", "2025-07-30", "9.1", "2025-08-03", "8.8", "3.3", "IDEAL"]);
        assert!(row[7..].iter().all(String::is_empty));
    }

    #[test]
    fn test_row_b4_unmeasured() {
        let seeds = seed_records();
        let row = csv_row(&seeds[3]);
        assert_eq!(row[2], "10");
        assert_eq!(row[4], "");
        assert_eq!(row[5], "");
        assert_eq!(row[6], "");
    }
}
