//! Reading and writing whole CSV files.
//!
//! Every file has a header row naming the record's fields. Values are
//! trimmed on read and blank lines are skipped. Full rewrites go through a
//! temporary file in the same directory and are renamed into place, so a
//! crash mid-write leaves the previous file intact.

use std::fs::{self, File, OpenOptions};
use std::io::{Read, Seek, SeekFrom, Write};
use std::path::Path;

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::error::StoreError;

/// Read every row of `path` into records.
///
/// A missing file reads as empty.
///
/// # Errors
///
/// Returns `StoreError::Csv` naming the file when a row cannot be parsed,
/// or `StoreError::Io` when the file cannot be opened.
pub fn read_records<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>, StoreError> {
    if !path.exists() {
        tracing::debug!(path = %path.display(), "CSV file missing; starting empty");
        return Ok(Vec::new());
    }

    let file = File::open(path).map_err(|e| StoreError::io(path, e))?;
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(file);

    let mut records = Vec::new();
    for row in reader.deserialize() {
        records.push(row.map_err(|e| StoreError::csv(path, e))?);
    }
    tracing::debug!(path = %path.display(), count = records.len(), "CSV file loaded");
    Ok(records)
}

/// Rewrite `path` with `headers` followed by one row per record.
///
/// The header row is always written, even for an empty slice.
///
/// # Errors
///
/// Returns `StoreError` if the temporary file cannot be created, written or
/// renamed over `path`.
pub fn write_records<T: Serialize>(
    path: &Path,
    headers: &[&str],
    records: &[T],
) -> Result<(), StoreError> {
    let dir = ensure_parent_dir(path)?;
    let mut tmp = tempfile::NamedTempFile::new_in(dir).map_err(|e| StoreError::io(dir, e))?;

    {
        let mut writer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_writer(tmp.as_file_mut());
        writer
            .write_record(headers)
            .map_err(|e| StoreError::csv(path, e))?;
        for record in records {
            writer.serialize(record).map_err(|e| StoreError::csv(path, e))?;
        }
        writer.flush().map_err(|e| StoreError::io(path, e))?;
    }

    tmp.persist(path).map_err(|e| StoreError::io(path, e.error))?;
    tracing::debug!(path = %path.display(), count = records.len(), "CSV file written");
    Ok(())
}

/// Append a single row to `path`.
///
/// Writes the header first when the file is missing or empty. If an existing
/// file does not end in a newline (hand-edited), one is added before the row.
///
/// # Errors
///
/// Returns `StoreError` if the file cannot be opened or written.
pub fn append_record<T: Serialize>(
    path: &Path,
    headers: &[&str],
    record: &T,
) -> Result<(), StoreError> {
    ensure_parent_dir(path)?;
    let needs_header = fs::metadata(path).map_or(true, |meta| meta.len() == 0);

    let mut file = OpenOptions::new()
        .create(true)
        .read(true)
        .append(true)
        .open(path)
        .map_err(|e| StoreError::io(path, e))?;

    if !needs_header && !ends_with_newline(&mut file).map_err(|e| StoreError::io(path, e))? {
        file.write_all(b"\n").map_err(|e| StoreError::io(path, e))?;
    }

    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(file);
    if needs_header {
        writer
            .write_record(headers)
            .map_err(|e| StoreError::csv(path, e))?;
    }
    writer.serialize(record).map_err(|e| StoreError::csv(path, e))?;
    writer.flush().map_err(|e| StoreError::io(path, e))?;
    Ok(())
}

fn ensure_parent_dir(path: &Path) -> Result<&Path, StoreError> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    fs::create_dir_all(dir).map_err(|e| StoreError::io(dir, e))?;
    Ok(dir)
}

fn ends_with_newline(file: &mut File) -> std::io::Result<bool> {
    let len = file.metadata()?.len();
    if len == 0 {
        return Ok(true);
    }
    file.seek(SeekFrom::Start(len - 1))?;
    let mut last = [0u8; 1];
    file.read_exact(&mut last)?;
    Ok(last[0] == b'\n')
}
