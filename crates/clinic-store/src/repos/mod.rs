//! Record operations for every clinic entity.
//!
//! Each module adds methods to `ClinicStore` via `impl ClinicStore` blocks.

pub mod appointment;
pub mod cleanup;
pub mod clinician;
pub mod facility;
pub mod patient;
pub mod prescription;
pub mod referral;
pub mod staff;

use crate::error::StoreError;

/// Case-insensitive substring match of `needle` against any of `fields`.
/// No needle matches everything.
pub(crate) fn text_matches(needle: Option<&str>, fields: &[&str]) -> bool {
    let Some(needle) = needle.map(str::trim).filter(|n| !n.is_empty()) else {
        return true;
    };
    let needle = needle.to_lowercase();
    fields.iter().any(|f| f.to_lowercase().contains(&needle))
}

/// Case-insensitive equality, where `None` matches anything.
pub(crate) fn eq_ignore_case(wanted: Option<&str>, actual: &str) -> bool {
    wanted.is_none_or(|w| w.trim().eq_ignore_ascii_case(actual.trim()))
}

pub(crate) fn limited<T>(mut items: Vec<T>, limit: Option<u32>) -> Vec<T> {
    if let Some(limit) = limit {
        items.truncate(limit as usize);
    }
    items
}

pub(crate) fn require(field: &str, value: &str) -> Result<(), StoreError> {
    if value.trim().is_empty() {
        return Err(StoreError::Validation(format!("{field} is required")));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_match_ignores_case_and_blank_needle() {
        assert!(text_matches(Some("smi"), &["John", "Smith"]));
        assert!(text_matches(Some("  "), &["anything"]));
        assert!(text_matches(None, &[]));
        assert!(!text_matches(Some("jones"), &["John", "Smith"]));
    }

    #[test]
    fn require_rejects_whitespace() {
        assert!(require("first_name", "  ").is_err());
        assert!(require("first_name", "Ann").is_ok());
    }
}
