use std::{fs::File, path::Path};

use thiserror::Error;

use crate::{
    config::READER_BUFFER_CAPACITY,
    models::distribution::{ArrivalRecord, Distribution},
};

/// Every way a distribution file can fail to load. All of them are fatal.
#[derive(Error, Debug)]
pub enum ParseError {
    #[error("Failed to open distribution file: {0}")]
    Open(#[source] csv::Error),

    #[error("Failed to read distribution file: {0}")]
    Read(#[source] csv::Error),

    #[error("Line {line}: expected 2 comma-separated fields, found {found}")]
    FieldCount { line: u64, found: usize },

    #[error("Line {line}: {source}")]
    Record { line: u64, source: csv::Error },
}

/// Build CSV reader for headerless `<arrival>,<interarrival>` lines.
///
/// Fields are trimmed so `"1.0, 0.5"` is accepted; quotes are not special, so a
/// quoted field fails to parse as a number. Record lengths are left flexible so
/// [`read_records`] can report the field count itself.
pub fn build_csv_reader(path: &Path) -> Result<csv::Reader<File>, ParseError> {
    csv::ReaderBuilder::new()
        .has_headers(false)
        .trim(csv::Trim::All)
        .quoting(false)
        .flexible(true)
        .buffer_capacity(READER_BUFFER_CAPACITY)
        .from_path(path)
        .map_err(ParseError::Open)
}

/// Parse every record of `reader` into a [`Distribution`], stopping at the first bad line.
pub fn read_records<R: std::io::Read>(
    reader: &mut csv::Reader<R>,
) -> Result<Distribution, ParseError> {
    let mut distribution = Distribution::new();

    for (index, result) in reader.records().enumerate() {
        let record = result.map_err(ParseError::Read)?;
        let line = record
            .position()
            .map_or(index as u64 + 1, |position| position.line());

        if record.len() != 2 {
            return Err(ParseError::FieldCount {
                line,
                found: record.len(),
            });
        }

        let parsed: ArrivalRecord = record
            .deserialize(None)
            .map_err(|source| ParseError::Record { line, source })?;

        distribution.push(parsed);
    }

    Ok(distribution)
}

/// Read a distribution file. The file is closed before this returns, on success or error.
pub fn read_distribution(path: &Path) -> Result<Distribution, ParseError> {
    let mut reader = build_csv_reader(path)?;
    let distribution = read_records(&mut reader)?;

    log::info!(
        "Parsed {} records from {}",
        distribution.len(),
        path.display()
    );

    Ok(distribution)
}
