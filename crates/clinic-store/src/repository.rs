//! In-memory list of records mirrored to one CSV file.

use std::path::{Path, PathBuf};

use clinic_core::ids;

use crate::csv_file;
use crate::error::StoreError;
use crate::record::Record;

/// Records of one type, loaded from and saved back to a CSV file.
///
/// A detached repository has no file and never touches disk. Mutations
/// that fail to persist are rolled back in memory.
#[derive(Debug, Clone)]
pub struct CsvRepository<T> {
    path: Option<PathBuf>,
    records: Vec<T>,
}

impl<T: Record> CsvRepository<T> {
    /// Load every record from `path`. A missing file loads as empty.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the file exists but cannot be parsed.
    pub fn load(path: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let path = path.into();
        let records = csv_file::read_records(&path)?;
        tracing::debug!(entity = %T::ENTITY, count = records.len(), "repository loaded");
        Ok(Self {
            path: Some(path),
            records,
        })
    }

    /// An empty repository with no backing file.
    #[must_use]
    pub const fn detached() -> Self {
        Self {
            path: None,
            records: Vec::new(),
        }
    }

    /// A detached repository holding `records`.
    #[must_use]
    pub const fn from_records(records: Vec<T>) -> Self {
        Self {
            path: None,
            records,
        }
    }

    #[must_use]
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    #[must_use]
    pub fn find_by_id(&self, id: &str) -> Option<&T> {
        self.records.iter().find(|r| r.id() == id)
    }

    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.find_by_id(id).is_some()
    }

    #[must_use]
    pub fn get_all(&self) -> &[T] {
        &self.records
    }

    /// Clones of every record matching `predicate`, in file order.
    pub fn find_where(&self, predicate: impl Fn(&T) -> bool) -> Vec<T> {
        self.records.iter().filter(|r| predicate(r)).cloned().collect()
    }

    /// Next free ID under `prefix`.
    #[must_use]
    pub fn next_id(&self, prefix: &str) -> String {
        ids::next_id(prefix, self.records.iter().map(|r| r.id()))
    }

    /// Insert `record` and rewrite the whole file.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::InvalidId` or `StoreError::Duplicate` before any
    /// change, or the write error after rolling the insert back.
    pub fn add(&mut self, record: T) -> Result<(), StoreError> {
        self.check_insert(&record)?;
        self.records.push(record);
        if let Err(e) = self.save_all() {
            self.records.pop();
            return Err(e);
        }
        Ok(())
    }

    /// Insert `record` and append a single line to the file.
    ///
    /// # Errors
    ///
    /// Same as [`Self::add`].
    pub fn add_and_append(&mut self, record: T) -> Result<(), StoreError> {
        self.check_insert(&record)?;
        if let Some(path) = &self.path {
            csv_file::append_record(path, T::HEADERS, &record)?;
        }
        self.records.push(record);
        Ok(())
    }

    /// Replace the record with the same ID and rewrite the file.
    ///
    /// Returns the previous version.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::NotFound` if no record has that ID, or the write
    /// error after restoring the previous version.
    pub fn update(&mut self, record: T) -> Result<T, StoreError> {
        let index = self.index_of(record.id())?;
        let previous = std::mem::replace(&mut self.records[index], record);
        if let Err(e) = self.save_all() {
            self.records[index] = previous;
            return Err(e);
        }
        Ok(previous)
    }

    /// Remove the record with `id` and rewrite the file.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::NotFound` if no record has that ID, or the write
    /// error after reinserting the record.
    pub fn delete(&mut self, id: &str) -> Result<T, StoreError> {
        let index = self.index_of(id)?;
        let removed = self.records.remove(index);
        if let Err(e) = self.save_all() {
            self.records.insert(index, removed);
            return Err(e);
        }
        Ok(removed)
    }

    /// Keep only records matching `keep`, rewriting the file once if
    /// anything was removed. Returns the removed records.
    ///
    /// # Errors
    ///
    /// Returns the write error after restoring the original list.
    pub fn retain(&mut self, mut keep: impl FnMut(&T) -> bool) -> Result<Vec<T>, StoreError> {
        let (kept, removed): (Vec<T>, Vec<T>) =
            self.records.iter().cloned().partition(|r| keep(r));
        if removed.is_empty() {
            return Ok(removed);
        }
        let original = std::mem::replace(&mut self.records, kept);
        if let Err(e) = self.save_all() {
            self.records = original;
            return Err(e);
        }
        Ok(removed)
    }

    /// Rewrite the backing file from memory.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the file cannot be written.
    pub fn save_all(&self) -> Result<(), StoreError> {
        match &self.path {
            Some(path) => csv_file::write_records(path, T::HEADERS, &self.records),
            None => Ok(()),
        }
    }

    /// Discard memory and re-read the backing file.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the file cannot be parsed; memory is left as
    /// it was.
    pub fn reload(&mut self) -> Result<(), StoreError> {
        if let Some(path) = &self.path {
            self.records = csv_file::read_records(path)?;
        }
        Ok(())
    }

    fn check_insert(&self, record: &T) -> Result<(), StoreError> {
        let prefix = record.id_prefix();
        if !ids::is_valid_id(prefix, record.id()) {
            return Err(StoreError::InvalidId {
                entity: T::ENTITY,
                id: record.id().to_string(),
                prefix: prefix.to_string(),
            });
        }
        if self.contains(record.id()) {
            return Err(StoreError::Duplicate {
                entity: T::ENTITY,
                id: record.id().to_string(),
            });
        }
        Ok(())
    }

    fn index_of(&self, id: &str) -> Result<usize, StoreError> {
        self.records
            .iter()
            .position(|r| r.id() == id)
            .ok_or_else(|| StoreError::not_found(T::ENTITY, id))
    }
}
