//! Record-store boundary.
//!
//! The native check-in/log store and the case-data decoder are external
//! collaborators; this module is the seam where their already-exported
//! records enter the engine. Log entries and check-ins are JSONL files,
//! the case-count series is CSV. Reads take shared file locks and skip
//! malformed rows with a logged warning instead of failing.

use crate::{CovidDatum, DailyCheckIn, Result, SymptomLogEntry};
use chrono::NaiveDate;
use csv::ReaderBuilder;
use fs2::FileExt;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::fs::{File, OpenOptions};
use std::io::{BufRead, BufReader, Write};
use std::path::{Path, PathBuf};

/// Sink for appending records at the store boundary
pub trait EntrySink<T> {
    fn append(&mut self, record: &T) -> Result<()>;
}

/// JSONL-based record sink with file locking
pub struct JsonlSink {
    path: PathBuf,
}

impl JsonlSink {
    /// Create a new JSONL sink for the given path
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Ensure the parent directory exists
    fn ensure_parent_dir(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        Ok(())
    }
}

impl<T: Serialize> EntrySink<T> for JsonlSink {
    fn append(&mut self, record: &T) -> Result<()> {
        self.ensure_parent_dir()?;

        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;

        // Exclusive lock serializes concurrent writers
        file.lock_exclusive()?;

        let mut writer = std::io::BufWriter::new(&file);
        let line = serde_json::to_string(record)?;
        writer.write_all(line.as_bytes())?;
        writer.write_all(b"\n")?;
        writer.flush()?;

        file.unlock()?;

        tracing::debug!("Appended record to {:?}", self.path);
        Ok(())
    }
}

/// Read all symptom log entries from a JSONL file
///
/// A missing file is an empty store, not an error.
pub fn read_log_entries(path: &Path) -> Result<Vec<SymptomLogEntry>> {
    let entries = read_jsonl(path)?;
    tracing::debug!("Read {} log entries from {:?}", entries.len(), path);
    Ok(entries)
}

/// Read all daily check-ins from a JSONL file
pub fn read_check_ins(path: &Path) -> Result<Vec<DailyCheckIn>> {
    let check_ins = read_jsonl(path)?;
    tracing::debug!("Read {} check-ins from {:?}", check_ins.len(), path);
    Ok(check_ins)
}

fn read_jsonl<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>> {
    if !path.exists() {
        return Ok(Vec::new());
    }

    let file = File::open(path)?;
    file.lock_shared()?;

    let reader = BufReader::new(&file);
    let mut records = Vec::new();

    for (line_num, line_result) in reader.lines().enumerate() {
        let line = line_result?;
        if line.trim().is_empty() {
            continue;
        }

        match serde_json::from_str::<T>(&line) {
            Ok(record) => records.push(record),
            Err(e) => {
                tracing::warn!("Failed to parse record at line {}: {}", line_num + 1, e);
                // Continue reading, don't fail completely
            }
        }
    }

    file.unlock()?;
    Ok(records)
}

/// CSV row format for the exported case-count series
#[derive(Debug, Deserialize)]
struct CsvRow {
    date: String,
    positive_cases_new: u32,
    positive_cases_total: u32,
    deaths_new: Option<u32>,
    deaths_total: Option<u32>,
}

impl TryFrom<CsvRow> for CovidDatum {
    type Error = crate::Error;

    fn try_from(row: CsvRow) -> Result<Self> {
        let date = NaiveDate::parse_from_str(&row.date, "%Y-%m-%d")
            .map_err(|e| crate::Error::Store(format!("Invalid date: {}", e)))?;

        Ok(CovidDatum {
            date,
            positive_cases_new: row.positive_cases_new,
            positive_cases_total: row.positive_cases_total,
            deaths_new: row.deaths_new,
            deaths_total: row.deaths_total,
        })
    }
}

/// Read an exported case-count series from a CSV file
///
/// Rows that fail to parse are skipped with a warning; the series keeps
/// the file's row order (newest first, as exported).
pub fn read_case_series(path: &Path) -> Result<Vec<CovidDatum>> {
    if !path.exists() {
        return Ok(Vec::new());
    }

    let mut reader = ReaderBuilder::new().has_headers(true).from_path(path)?;

    let mut series = Vec::new();
    for result in reader.deserialize::<CsvRow>() {
        match result {
            Ok(row) => match CovidDatum::try_from(row) {
                Ok(datum) => series.push(datum),
                Err(e) => {
                    tracing::warn!("Failed to parse case-series row: {}", e);
                }
            },
            Err(e) => {
                tracing::warn!("Failed to deserialize case-series row: {}", e);
            }
        }
    }

    tracing::debug!("Read {} case-series rows from {:?}", series.len(), path);
    Ok(series)
}
