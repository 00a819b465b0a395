//! CSV file reading.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use polars::prelude::{CsvReadOptions, DataFrame, SerReader};
use tracing::{debug, info};

use star_common::column_text;
use star_model::{RawSalesRecord, SalesField};

use crate::error::{IngestError, Result};
use crate::schema::SourceColumns;

fn open_error(path: &Path, error: std::io::Error) -> IngestError {
    if error.kind() == std::io::ErrorKind::NotFound {
        IngestError::FileNotFound {
            path: path.to_path_buf(),
        }
    } else {
        IngestError::FileRead {
            path: path.to_path_buf(),
            source: error,
        }
    }
}

/// Rejects files starting with a UTF-16 byte order mark.
///
/// A UTF-8 BOM is accepted and stripped during header resolution.
pub fn validate_encoding(path: &Path) -> Result<()> {
    let mut file = File::open(path).map_err(|e| open_error(path, e))?;

    let mut buffer = [0u8; 2];
    let bytes_read = file.read(&mut buffer).map_err(|e| IngestError::FileRead {
        path: path.to_path_buf(),
        source: e,
    })?;

    if bytes_read == 2 {
        if buffer == [0xFF, 0xFE] {
            return Err(IngestError::UnsupportedEncoding {
                path: path.to_path_buf(),
                encoding: "UTF-16 LE",
            });
        }
        if buffer == [0xFE, 0xFF] {
            return Err(IngestError::UnsupportedEncoding {
                path: path.to_path_buf(),
                encoding: "UTF-16 BE",
            });
        }
    }

    Ok(())
}

/// Reads only the header row and resolves the required sales columns.
pub fn read_csv_schema(path: &Path) -> Result<SourceColumns> {
    validate_encoding(path)?;
    let file = File::open(path).map_err(|e| open_error(path, e))?;
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(file);
    let headers = reader.headers().map_err(|e| IngestError::CsvParse {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;

    if headers.is_empty() {
        return Err(IngestError::EmptyCsv {
            path: path.to_path_buf(),
        });
    }
    if headers.iter().all(|name| name.trim().is_empty()) {
        return Err(IngestError::NoHeaderDetected {
            path: path.to_path_buf(),
        });
    }

    let columns = SourceColumns::resolve(headers.iter(), path)?;
    debug!(
        path = %path.display(),
        header_count = headers.len(),
        "resolved sales columns"
    );
    Ok(columns)
}

/// Loads the feed into a DataFrame with every column typed as text.
///
/// Schema inference is disabled so identifiers such as `"007"` and date
/// strings reach the transformation stage untouched.
pub fn read_sales_frame(path: &Path) -> Result<DataFrame> {
    read_csv_schema(path)?;

    CsvReadOptions::default()
        .with_has_header(true)
        .with_infer_schema_length(Some(0))
        .try_into_reader_with_file_path(Some(path.to_path_buf()))
        .map_err(|e| IngestError::CsvParse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?
        .finish()
        .map_err(|e| IngestError::CsvParse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
}

/// Converts a loaded feed into raw records, one per row.
///
/// Null cells become empty strings.
pub fn records_from_frame(df: &DataFrame, path: &Path) -> Result<Vec<RawSalesRecord>> {
    let names: Vec<String> = df
        .get_column_names()
        .iter()
        .map(|name| name.to_string())
        .collect();
    let columns = SourceColumns::resolve(&names, path)?;

    let mut records = vec![RawSalesRecord::default(); df.height()];
    for field in SalesField::ALL {
        let header = columns.header(field);
        let values = column_text(df, header).ok_or_else(|| IngestError::MissingColumns {
            columns: vec![header.to_string()],
            path: path.to_path_buf(),
        })?;
        for (record, value) in records.iter_mut().zip(values) {
            field.set(record, value);
        }
    }
    Ok(records)
}

/// Reads the sales feed at `path` into raw records.
pub fn read_sales_records(path: &Path) -> Result<Vec<RawSalesRecord>> {
    let df = read_sales_frame(path)?;
    let records = records_from_frame(&df, path)?;
    info!(
        path = %path.display(),
        record_count = records.len(),
        "sales feed loaded"
    );
    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn create_temp_csv(content: &[u8]) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content).unwrap();
        file
    }

    #[test]
    fn test_validate_encoding_rejects_utf16() {
        let file = create_temp_csv(&[0xFF, 0xFE, b'a', 0]);
        let result = validate_encoding(file.path());

        assert!(matches!(
            result,
            Err(IngestError::UnsupportedEncoding {
                encoding: "UTF-16 LE",
                ..
            })
        ));
    }

    #[test]
    fn test_read_csv_schema_empty_file() {
        let file = create_temp_csv(b"");
        let result = read_csv_schema(file.path());

        assert!(matches!(result, Err(IngestError::EmptyCsv { .. })));
    }

    #[test]
    fn test_read_csv_schema_missing_file() {
        let result = read_csv_schema(Path::new("/nonexistent/dados_brutos.csv"));

        assert!(matches!(result, Err(IngestError::FileNotFound { .. })));
    }
}
