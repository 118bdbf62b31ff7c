//! CSV ingestion: turns an uploaded file into a dataset creation request.
//!
//! The first record is the header. Every following record becomes one open
//! row keyed by header name, with every cell kept as text; numbers are only
//! recognised later, when a chart is projected. A record whose field count
//! differs from the header's fails the whole upload (no padding).

use crate::error::{DashboardError, DashboardResult};
use crate::registry::DatasetRegistry;
use common::model::dataset::{CellValue, RowData};
use common::requests::{CreateDatasetRequest, UploadMetadata};
use log::info;
use std::collections::HashSet;

const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";
const CANDIDATE_DELIMITERS: [u8; 4] = [b',', b';', b'\t', b'|'];

#[derive(Debug, Clone, PartialEq)]
pub struct ParsedCsv {
    pub columns: Vec<String>,
    pub records: Vec<RowData>,
}

/// Outcome of a successful upload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ingested {
    pub dataset_id: i64,
    pub rows: usize,
}

/// Picks the candidate delimiter that occurs most often in the header line.
/// Ties go to the earlier candidate; a line with none of them is comma separated.
pub fn detect_delimiter(header_line: &str) -> u8 {
    let mut best = (b',', 0);
    for candidate in CANDIDATE_DELIMITERS {
        let count = header_line.bytes().filter(|b| *b == candidate).count();
        if count > best.1 {
            best = (candidate, count);
        }
    }
    best.0
}

pub fn parse_csv(bytes: &[u8]) -> DashboardResult<ParsedCsv> {
    let bytes = bytes.strip_prefix(UTF8_BOM).unwrap_or(bytes);
    let header_end = bytes.iter().position(|&b| b == b'\n').unwrap_or(bytes.len());
    let delimiter = detect_delimiter(&String::from_utf8_lossy(&bytes[..header_end]));

    let mut reader = csv::ReaderBuilder::new()
        .delimiter(delimiter)
        .has_headers(true)
        .flexible(true)
        .from_reader(bytes);

    let columns: Vec<String> = reader
        .headers()?
        .iter()
        .map(|cell| cell.trim().to_string())
        .collect();
    if columns.is_empty() || columns.iter().all(String::is_empty) {
        return Err(DashboardError::EmptyFile);
    }
    validate_header_cells(&columns)?;

    let mut records = Vec::new();
    for result in reader.records() {
        let record = result?;
        if record.len() != columns.len() {
            return Err(DashboardError::MalformedRow {
                line: record.position().map(|p| p.line()).unwrap_or_default(),
                expected: columns.len(),
                found: record.len(),
            });
        }
        let row: RowData = columns
            .iter()
            .zip(record.iter())
            .map(|(column, cell)| (column.clone(), CellValue::from(cell)))
            .collect();
        records.push(row);
    }

    if records.is_empty() {
        return Err(DashboardError::EmptyFile);
    }

    Ok(ParsedCsv { columns, records })
}

/// Header cells become row keys, so they must be non-empty and unique.
fn validate_header_cells(columns: &[String]) -> DashboardResult<()> {
    let mut seen = HashSet::new();
    for column in columns {
        if column.is_empty() {
            return Err(DashboardError::InvalidRequest(
                "CSV header cells must not be empty".to_string(),
            ));
        }
        if !seen.insert(column.as_str()) {
            return Err(DashboardError::InvalidRequest(format!(
                "CSV header '{}' appears more than once",
                column
            )));
        }
    }
    Ok(())
}

/// Parses `bytes` and stores the result as a new dataset.
///
/// Nothing is written unless the whole file parses.
pub fn ingest_csv(
    registry: &DatasetRegistry,
    metadata: UploadMetadata,
    bytes: &[u8],
) -> DashboardResult<Ingested> {
    let parsed = parse_csv(bytes)?;
    let rows = parsed.records.len();

    let dataset_id = registry.create_dataset(CreateDatasetRequest {
        name: metadata.name,
        description: metadata.description,
        columns: parsed.columns,
        data: parsed.records,
    })?;

    info!("Ingested CSV into dataset {} ({} rows)", dataset_id, rows);
    Ok(Ingested { dataset_id, rows })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::{datasets, Database};
    use std::sync::Arc;

    fn metadata(name: &str) -> UploadMetadata {
        UploadMetadata {
            name: name.to_string(),
            description: None,
        }
    }

    #[test]
    fn header_order_and_row_count_are_preserved() {
        let csv = b"zeta, alpha ,mid\n1,2,3\n4,5,6\n";

        let parsed = parse_csv(csv).expect("parse");

        assert_eq!(parsed.columns, vec!["zeta", "alpha", "mid"]);
        assert_eq!(parsed.records.len(), 2);
        assert_eq!(parsed.records[1]["alpha"], CellValue::from("5"));
    }

    #[test]
    fn cells_are_kept_as_text_verbatim() {
        let parsed = parse_csv(b"name,note\n\"Lee, J\", 42 \n").expect("parse");

        assert_eq!(parsed.records[0]["name"], CellValue::from("Lee, J"));
        assert_eq!(parsed.records[0]["note"], CellValue::from(" 42 "));
    }

    #[test]
    fn delimiter_is_detected_from_header() {
        assert_eq!(detect_delimiter("a;b;c"), b';');
        assert_eq!(detect_delimiter("a\tb"), b'\t');
        assert_eq!(detect_delimiter("single"), b',');
        assert_eq!(detect_delimiter("a,b;c"), b',');

        let parsed = parse_csv("\u{feff}mes;ventas\r\nEnero;10\r\n".as_bytes()).expect("parse");
        assert_eq!(parsed.columns, vec!["mes", "ventas"]);
        assert_eq!(parsed.records[0]["ventas"], CellValue::from("10"));
    }

    #[test]
    fn header_only_and_blank_files_are_empty() {
        assert!(matches!(parse_csv(b"a,b\n"), Err(DashboardError::EmptyFile)));
        assert!(matches!(parse_csv(b""), Err(DashboardError::EmptyFile)));
        assert!(matches!(parse_csv(b"\n\n"), Err(DashboardError::EmptyFile)));
    }

    #[test]
    fn short_row_is_malformed() {
        let err = parse_csv(b"a,b,c\n1,2,3\n4,5\n").unwrap_err();
        match err {
            DashboardError::MalformedRow { line, expected, found } => {
                assert_eq!((line, expected, found), (3, 3, 2));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn blank_or_duplicate_headers_are_rejected() {
        assert!(matches!(
            parse_csv(b"a,,c\n1,2,3\n"),
            Err(DashboardError::InvalidRequest(_))
        ));
        assert!(matches!(
            parse_csv(b"a,b,a\n1,2,3\n"),
            Err(DashboardError::InvalidRequest(_))
        ));
    }

    #[test]
    fn non_utf8_file_is_a_client_error() {
        let err = parse_csv(b"name,val\nCaf\xe9,1\n").unwrap_err();

        assert!(matches!(err, DashboardError::Csv(_)));
        assert!(err.is_client_error());
    }

    #[test]
    fn ingest_stores_every_row() {
        let db = Arc::new(Database::open_in_memory().expect("db"));
        let registry = DatasetRegistry::new(db.clone(), 2);

        let ingested = ingest_csv(&registry, metadata("Sales"), b"month,sales\nJan,1\nFeb,2\nMar,3\n")
            .expect("ingest");

        assert_eq!(ingested.rows, 3);
        let loaded = registry.get_dataset(ingested.dataset_id).expect("get");
        assert_eq!(loaded.dataset.columns, vec!["month", "sales"]);
        assert_eq!(loaded.rows.len(), 3);
    }

    #[test]
    fn empty_file_persists_nothing() {
        let db = Arc::new(Database::open_in_memory().expect("db"));
        let registry = DatasetRegistry::new(db.clone(), 100);

        let result = ingest_csv(&registry, metadata("Empty"), b"month,sales\n");

        assert!(matches!(result, Err(DashboardError::EmptyFile)));
        assert_eq!(db.with_conn(datasets::count_datasets).expect("count"), 0);
    }
}
