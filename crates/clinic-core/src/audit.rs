//! JSONL audit operation envelope.
//!
//! Every mutation made through `ClinicStore` is recorded as an `AuditRecord`
//! line in `audit.jsonl` next to the CSV files. The CSV files stay the source
//! of truth; the audit trail records who changed what and when.
//!
//! The `v` field supports schema versioning: old lines without a `v` field
//! deserialize with `v == 1` via `#[serde(default)]`.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::{AuditOp, EntityType};

/// Default audit version for backward compatibility with old JSONL lines.
const fn default_audit_version() -> u32 {
    1
}

/// A single mutation recorded in the audit trail.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct AuditRecord {
    /// Schema version. Defaults to 1 for lines without this field.
    #[serde(default = "default_audit_version")]
    pub v: u32,

    /// RFC 3339 timestamp of the operation.
    pub ts: String,

    /// Login identifier of whoever made the change.
    pub actor: String,

    /// What kind of mutation this represents.
    pub op: AuditOp,

    /// Which record type was affected.
    pub entity: EntityType,

    /// ID of the affected record.
    pub id: String,

    /// Operation payload: the full record for `Create`, changed fields for
    /// `Update`, removal counts for `Purge`.
    pub data: serde_json::Value,
}
