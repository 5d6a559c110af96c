use chrono::{NaiveDate, NaiveTime};
use serde::de::DeserializeOwned;

use clinic_core::time_format::hhmm;

/// Parse a snake_case enum value using serde-deserialization.
pub fn parse_enum<T>(raw: &str, field: &str) -> anyhow::Result<T>
where
    T: DeserializeOwned,
{
    let normalized = raw.trim().to_ascii_lowercase().replace(['-', ' '], "_");
    let json = format!("\"{normalized}\"");
    serde_json::from_str(&json).map_err(|error| anyhow::anyhow!("invalid {field} '{raw}': {error}"))
}

/// Parse a `YYYY-MM-DD` date.
pub fn parse_date(raw: &str, field: &str) -> anyhow::Result<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|error| anyhow::anyhow!("invalid {field} '{raw}' (expected YYYY-MM-DD): {error}"))
}

/// Like [`parse_date`], but an empty value means "no date".
pub fn parse_optional_date(raw: &str, field: &str) -> anyhow::Result<Option<NaiveDate>> {
    if raw.trim().is_empty() {
        Ok(None)
    } else {
        parse_date(raw, field).map(Some)
    }
}

/// Parse an `HH:MM` clock time.
pub fn parse_time(raw: &str, field: &str) -> anyhow::Result<NaiveTime> {
    hhmm::parse(raw)
        .map_err(|error| anyhow::anyhow!("invalid {field} '{raw}' (expected HH:MM): {error}"))
}

/// An ID flag where an empty value means "none".
#[must_use]
pub fn optional_id(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}
