//! CSV export of scraped venue records.
//!
//! Column order comes from the [`Schema`] passed in, never from the data.
//! The target file is created or truncated on each call, so writing the same
//! records twice leaves the same file as writing them once.

use csv::Writer;
use serde_json::Value;
use std::fmt;
use std::fs::File;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info};

use crate::record::Record;
use crate::schema::Schema;

/// Failure while writing a CSV export.
#[derive(Debug, Error)]
pub enum CsvExportError {
    /// Filesystem failure (permission denied, missing directory, disk full).
    #[error("i/o error writing {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// The CSV encoder failed for a reason other than I/O.
    #[error("csv error writing {path}: {source}")]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
    /// A record carries a field the schema does not declare.
    #[error("record {index} has field {field:?} not in schema")]
    UnknownField { index: usize, field: String },
}

impl CsvExportError {
    fn from_csv(path: &Path, err: csv::Error) -> Self {
        let path = path.to_path_buf();
        match err.kind() {
            csv::ErrorKind::Io(io) => {
                let kind = io.kind();
                CsvExportError::Io {
                    path,
                    source: std::io::Error::new(kind, err),
                }
            }
            _ => CsvExportError::Csv { path, source: err },
        }
    }
}

/// What [`save_venues_to_csv`] did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SaveOutcome {
    /// No records were given; no file was touched.
    Empty,
    /// `count` records were written below the header.
    Saved { count: usize, path: PathBuf },
}

/// The notice printed to stdout after a save.
impl fmt::Display for SaveOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SaveOutcome::Empty => write!(f, "No venues to save."),
            SaveOutcome::Saved { count, path } => {
                write!(f, "Saved {} venues to '{}'.", count, path.display())
            }
        }
    }
}

/// Writes `venues` to `path` as CSV: one header row with the schema's fields,
/// then one row per record.
///
/// Missing fields and `null` values become empty cells. Strings are written
/// verbatim and any other JSON value as its compact JSON text. Records with a
/// field outside the schema are rejected before anything is written.
pub fn save_venues_to_csv(
    venues: &[Record],
    schema: &Schema,
    path: &Path,
) -> Result<SaveOutcome, CsvExportError> {
    if venues.is_empty() {
        info!("no venues to save; {} left untouched", path.display());
        println!("{}", SaveOutcome::Empty);
        return Ok(SaveOutcome::Empty);
    }

    check_fields(venues, schema)?;

    let file = File::create(path).map_err(|source| CsvExportError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let mut writer = Writer::from_writer(file);
    debug!(columns = schema.len(), "writing {} venues to {}", venues.len(), path.display());

    writer
        .write_record(schema.fields())
        .map_err(|e| CsvExportError::from_csv(path, e))?;
    for venue in venues {
        writer
            .write_record(row(venue, schema))
            .map_err(|e| CsvExportError::from_csv(path, e))?;
    }
    writer.flush().map_err(|source| CsvExportError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    info!(count = venues.len(), "saved venues to {}", path.display());
    let outcome = SaveOutcome::Saved {
        count: venues.len(),
        path: path.to_path_buf(),
    };
    println!("{outcome}");
    Ok(outcome)
}

fn check_fields(venues: &[Record], schema: &Schema) -> Result<(), CsvExportError> {
    for (index, venue) in venues.iter().enumerate() {
        if let Some(field) = venue.keys().find(|k| !schema.contains(k)) {
            debug!(index, field = %field, "record rejected by schema [{}]", schema);
            return Err(CsvExportError::UnknownField {
                index,
                field: field.clone(),
            });
        }
    }
    Ok(())
}

fn row(venue: &Record, schema: &Schema) -> Vec<String> {
    schema
        .fields()
        .iter()
        .map(|field| venue.get(field).map(cell).unwrap_or_default())
        .collect()
}

fn cell(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
