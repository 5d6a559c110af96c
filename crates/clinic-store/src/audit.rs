//! JSONL audit trail writer and reader.
//!
//! Appends `AuditRecord` lines to `audit.jsonl` in the data directory using
//! `serde_jsonlines::append_json_lines`, one line per mutation.

use std::path::{Path, PathBuf};

use chrono::Utc;

use clinic_core::audit::AuditRecord;
use clinic_core::enums::{AuditOp, EntityType};

use crate::error::StoreError;

/// Filter criteria for audit queries.
#[derive(Debug, Default, Clone)]
pub struct AuditFilter {
    pub entity: Option<EntityType>,
    pub id: Option<String>,
    pub actor: Option<String>,
    pub op: Option<AuditOp>,
    pub limit: Option<u32>,
}

impl AuditFilter {
    fn matches(&self, record: &AuditRecord) -> bool {
        self.entity.is_none_or(|e| e == record.entity)
            && self.id.as_deref().is_none_or(|id| id == record.id)
            && self
                .actor
                .as_deref()
                .is_none_or(|a| a.eq_ignore_ascii_case(&record.actor))
            && self.op.is_none_or(|op| op == record.op)
    }
}

/// Appends audit records to a JSONL file.
pub struct AuditTrail {
    path: PathBuf,
    enabled: bool,
}

impl AuditTrail {
    /// Create a trail writing to `path`, creating its directory.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Io` if the directory cannot be created.
    pub fn new(path: PathBuf) -> Result<Self, StoreError> {
        if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
            std::fs::create_dir_all(dir).map_err(|e| StoreError::io(dir, e))?;
        }
        Ok(Self {
            path,
            enabled: true,
        })
    }

    /// A trail that records nothing.
    #[must_use]
    pub const fn disabled() -> Self {
        Self {
            path: PathBuf::new(),
            enabled: false,
        }
    }

    /// Set whether writing is enabled.
    ///
    /// Seeding turns this off so demo data is not recorded as edits.
    pub const fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    #[must_use]
    pub const fn is_enabled(&self) -> bool {
        self.enabled
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Append one record.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Io` if the file write fails.
    pub fn append(&self, record: &AuditRecord) -> Result<(), StoreError> {
        if !self.enabled {
            return Ok(());
        }
        serde_jsonlines::append_json_lines(&self.path, [record])
            .map_err(|e| StoreError::io(&self.path, e))
    }

    /// Build and append a record stamped with the current time.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Io` if the file write fails.
    pub fn log(
        &self,
        actor: &str,
        op: AuditOp,
        entity: EntityType,
        id: &str,
        data: serde_json::Value,
    ) -> Result<(), StoreError> {
        self.append(&AuditRecord {
            v: 1,
            ts: Utc::now().to_rfc3339(),
            actor: actor.to_string(),
            op,
            entity,
            id: id.to_string(),
            data,
        })
    }

    /// Every record in file order. A missing file, or a disabled trail,
    /// reads as empty.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Io` if a line cannot be parsed.
    pub fn read_all(&self) -> Result<Vec<AuditRecord>, StoreError> {
        if !self.enabled || !self.path.exists() {
            return Ok(Vec::new());
        }
        let lines = serde_jsonlines::json_lines::<AuditRecord, _>(&self.path)
            .map_err(|e| StoreError::io(&self.path, e))?;
        lines
            .collect::<std::io::Result<Vec<_>>>()
            .map_err(|e| StoreError::io(&self.path, e))
    }

    /// Records matching `filter`, newest first.
    ///
    /// # Errors
    ///
    /// Same as [`Self::read_all`].
    pub fn query(&self, filter: &AuditFilter) -> Result<Vec<AuditRecord>, StoreError> {
        let mut records: Vec<AuditRecord> = self
            .read_all()?
            .into_iter()
            .filter(|r| filter.matches(r))
            .collect();
        records.reverse();
        if let Some(limit) = filter.limit {
            records.truncate(limit as usize);
        }
        Ok(records)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn trail_in(dir: &tempfile::TempDir) -> AuditTrail {
        AuditTrail::new(dir.path().join("audit.jsonl")).unwrap()
    }

    #[test]
    fn disabled_writes_nothing() {
        let trail = AuditTrail::disabled();
        trail
            .log("ST001", AuditOp::Create, EntityType::Patient, "P001", serde_json::Value::Null)
            .unwrap();
        assert!(trail.read_all().unwrap().is_empty());
    }

    #[test]
    fn log_appends_lines_in_order() {
        let dir = tempfile::TempDir::new().unwrap();
        let trail = trail_in(&dir);
        trail
            .log("ST001", AuditOp::Create, EntityType::Patient, "P001", serde_json::json!({}))
            .unwrap();
        trail
            .log("C001", AuditOp::Update, EntityType::Patient, "P001", serde_json::json!({"postcode": "CF10 1AA"}))
            .unwrap();

        let records = trail.read_all().unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].op, AuditOp::Create);
        assert_eq!(records[1].data["postcode"], "CF10 1AA");
    }

    #[test]
    fn query_filters_newest_first() {
        let dir = tempfile::TempDir::new().unwrap();
        let trail = trail_in(&dir);
        for id in ["A001", "A002", "A003"] {
            trail
                .log("C001", AuditOp::Create, EntityType::Appointment, id, serde_json::Value::Null)
                .unwrap();
        }
        trail
            .log("ST001", AuditOp::Delete, EntityType::Patient, "P004", serde_json::Value::Null)
            .unwrap();

        let filter = AuditFilter {
            entity: Some(EntityType::Appointment),
            limit: Some(2),
            ..AuditFilter::default()
        };
        let ids: Vec<String> = trail.query(&filter).unwrap().into_iter().map(|r| r.id).collect();
        assert_eq!(ids, vec!["A003", "A002"]);

        let by_actor = AuditFilter {
            actor: Some("st001".into()),
            ..AuditFilter::default()
        };
        assert_eq!(trail.query(&by_actor).unwrap().len(), 1);
    }

    #[test]
    fn lines_without_version_default_to_one() {
        let dir = tempfile::TempDir::new().unwrap();
        let trail = trail_in(&dir);
        std::fs::write(
            trail.path(),
            "{\"ts\":\"2026-01-01T00:00:00+00:00\",\"actor\":\"C001\",\"op\":\"delete\",\"entity\":\"referral\",\"id\":\"R001\",\"data\":null}\n",
        )
        .unwrap();
        let records = trail.read_all().unwrap();
        assert_eq!(records[0].v, 1);
        assert_eq!(records[0].entity, EntityType::Referral);
    }
}
