use super::*;

use msh_core::import::{suggest_mapping, ColumnMapping, Row};
use thiserror::Error;

pub use usecases::ImportReport;

#[derive(Debug, Error)]
pub enum ImportError {
    #[error("The CSV file has no header row")]
    MissingHeaders,
    #[error("Unable to read CSV data: {0}")]
    Csv(#[from] csv::Error),
}

/// The parsed contents of a CSV file.
#[derive(Debug, Clone, Default)]
pub struct CsvTable {
    pub headers: Vec<String>,
    pub rows: Vec<Row>,
}

/// Reads comma separated values with a header row.
///
/// All cells are trimmed and rows may have a different
/// number of cells than the header.
pub fn read_csv(data: &[u8]) -> std::result::Result<CsvTable, ImportError> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .flexible(true)
        .from_reader(data);
    let headers: Vec<String> = reader
        .headers()?
        .iter()
        .map(|h| h.trim_start_matches('\u{feff}').trim().to_string())
        .collect();
    if headers.iter().all(String::is_empty) {
        return Err(ImportError::MissingHeaders);
    }
    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record?;
        let row = headers
            .iter()
            .zip(record.iter())
            .filter(|(header, _)| !header.is_empty())
            .map(|(header, cell)| (header.clone(), cell.to_string()))
            .collect();
        rows.push(row);
    }
    debug!("Read {} CSV rows with {} columns", rows.len(), headers.len());
    Ok(CsvTable { headers, rows })
}

/// The headers of a CSV file and a suggested binding of
/// import fields to these columns.
pub fn read_import_headers(data: &[u8]) -> Result<(Vec<String>, ColumnMapping)> {
    let CsvTable { headers, .. } = read_csv(data)?;
    let mapping = suggest_mapping(&headers);
    Ok((headers, mapping))
}

/// Imports all valid rows of a CSV file at once.
///
/// Without an explicit mapping the suggested mapping of
/// the headers is used.
pub fn import_facilities(
    connections: &sqlite::Connections,
    data: &[u8],
    mapping: Option<ColumnMapping>,
) -> Result<ImportReport> {
    let CsvTable { headers, rows } = read_csv(data)?;
    let mapping = mapping.unwrap_or_else(|| suggest_mapping(&headers));
    let report = connections
        .exclusive()?
        .transaction(|conn| usecases::import_facilities(conn, &rows, &mapping))
        .map_err(|err| {
            warn!("Failed to import {} CSV rows: {err}", rows.len());
            err
        })?;
    Ok(report)
}
