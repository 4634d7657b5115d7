use std::io::{self, Read};

use crate::error::{ChartError, Result};

/// Raw CSV content: the header row and every record as text.
#[derive(Debug, Clone, PartialEq)]
pub struct CsvData {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

/// Read CSV with a header row. Rows may be shorter or longer than the
/// header row; cells are kept as text.
pub fn read_csv<R: Read>(reader: R) -> Result<CsvData> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::Headers)
        .from_reader(reader);

    let headers = rdr
        .headers()
        .map_err(|e| ChartError::InvalidInput(format!("failed to read CSV headers: {}", e)))?
        .iter()
        .map(|h| h.to_string())
        .collect();

    let mut rows = Vec::new();
    for record in rdr.records() {
        let record =
            record.map_err(|e| ChartError::InvalidInput(format!("failed to read CSV record: {}", e)))?;
        rows.push(record.iter().map(|s| s.to_string()).collect());
    }

    Ok(CsvData { headers, rows })
}

pub fn read_csv_from_stdin() -> Result<CsvData> {
    read_csv(io::stdin().lock())
}
