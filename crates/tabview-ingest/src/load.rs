//! Decoding fixture files into records.

use std::path::Path;

use csv::{ReaderBuilder, Trim};
use serde_json::Value;
use tabview_model::{FieldPath, FieldValue, Record};
use tracing::{debug, info};

use crate::discovery::FixtureFormat;
use crate::error::{IngestError, Result};

/// Loads every record from a `.json` or `.csv` fixture.
///
/// JSON fixtures hold a top-level array of objects. CSV fixtures hold a
/// header row; dotted headers such as `manager.name` build nested maps and
/// every cell is kept as text.
pub fn load_records(path: &Path) -> Result<Vec<Record>> {
    let format = FixtureFormat::from_path(path).ok_or_else(|| {
        IngestError::UnsupportedExtension {
            path: path.to_path_buf(),
        }
    })?;
    if !path.is_file() {
        return Err(IngestError::FileNotFound {
            path: path.to_path_buf(),
        });
    }
    let contents = std::fs::read_to_string(path).map_err(|e| IngestError::FileRead {
        path: path.to_path_buf(),
        source: e,
    })?;

    let records = match format {
        FixtureFormat::Json => parse_json(path, &contents)?,
        FixtureFormat::Csv => parse_csv(path, &contents)?,
    };
    info!(
        path = %path.display(),
        format = ?format,
        records = records.len(),
        "loaded fixture"
    );
    Ok(records)
}

/// Parses a JSON array of objects. `path` is only used in errors.
pub fn parse_json(path: &Path, contents: &str) -> Result<Vec<Record>> {
    let document: Value =
        serde_json::from_str(contents).map_err(|e| IngestError::JsonParse {
            path: path.to_path_buf(),
            source: e,
        })?;
    let items = match document {
        Value::Array(items) => items,
        other => {
            return Err(IngestError::NotAnArray {
                path: path.to_path_buf(),
                found: FieldValue::from(other).kind(),
            });
        }
    };
    items
        .into_iter()
        .enumerate()
        .map(|(index, item)| {
            Record::try_from(item).map_err(|_| IngestError::NotAnObject {
                path: path.to_path_buf(),
                index,
            })
        })
        .collect()
}

/// Parses CSV text with a header row. `path` is only used in errors.
pub fn parse_csv(path: &Path, contents: &str) -> Result<Vec<Record>> {
    let csv_error = |e: csv::Error| IngestError::CsvParse {
        path: path.to_path_buf(),
        source: e,
    };
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .trim(Trim::All)
        .from_reader(contents.as_bytes());

    let headers = reader
        .headers()
        .map_err(csv_error)?
        .iter()
        .map(|raw| {
            let header = raw.trim_matches('\u{feff}');
            FieldPath::new(header).map_err(|_| IngestError::InvalidHeader {
                path: path.to_path_buf(),
                header: header.to_string(),
            })
        })
        .collect::<Result<Vec<_>>>()?;
    debug!(columns = headers.len(), "read CSV header");

    let mut records = Vec::new();
    for row in reader.records() {
        let row = row.map_err(csv_error)?;
        let mut record = Record::new();
        for (header, cell) in headers.iter().zip(row.iter()) {
            record.insert_path(header, FieldValue::Text(cell.to_string()));
        }
        records.push(record);
    }
    Ok(records)
}
