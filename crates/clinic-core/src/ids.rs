//! ID prefix constants and sequential ID generation.
//!
//! Every record is keyed by a prefix followed by a zero-padded sequence
//! number: `P001`, `RX012`, `ST004`. New IDs are allocated by scanning the
//! existing IDs for the highest number under the same prefix.

pub const PREFIX_PATIENT: &str = "P";
pub const PREFIX_CLINICIAN: &str = "C";
pub const PREFIX_STAFF: &str = "ST";
pub const PREFIX_APPOINTMENT: &str = "A";
pub const PREFIX_PRESCRIPTION: &str = "RX";
pub const PREFIX_REFERRAL: &str = "R";
pub const PREFIX_SURGERY: &str = "S";
pub const PREFIX_HOSPITAL: &str = "H";
pub const PREFIX_FACILITY: &str = "F";

/// Every prefix in use, longest first so prefix matching never confuses
/// `ST` with `S` or `RX` with `R`.
pub const ALL_PREFIXES: &[&str] = &[
    PREFIX_STAFF,
    PREFIX_PRESCRIPTION,
    PREFIX_PATIENT,
    PREFIX_CLINICIAN,
    PREFIX_APPOINTMENT,
    PREFIX_REFERRAL,
    PREFIX_SURGERY,
    PREFIX_HOSPITAL,
    PREFIX_FACILITY,
];

/// Minimum number of digits after the prefix.
pub const ID_DIGITS: usize = 3;

/// Numeric suffix of `id` when it is exactly `prefix` followed by digits.
#[must_use]
pub fn sequence_number(prefix: &str, id: &str) -> Option<u64> {
    let digits = id.strip_prefix(prefix)?;
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    digits.parse().ok()
}

/// Format a prefixed ID, zero-padded to [`ID_DIGITS`].
#[must_use]
pub fn format_id(prefix: &str, number: u64) -> String {
    format!("{prefix}{number:0width$}", width = ID_DIGITS)
}

/// Allocate the next ID under `prefix` given the IDs already in use.
///
/// IDs under other prefixes are ignored, including longer prefixes that
/// share a first letter (`ST001` does not count towards `S`).
#[must_use]
pub fn next_id<'a, I>(prefix: &str, existing: I) -> String
where
    I: IntoIterator<Item = &'a str>,
{
    let max = existing
        .into_iter()
        .filter_map(|id| sequence_number(prefix, id))
        .max()
        .unwrap_or(0);
    format_id(prefix, max + 1)
}

/// Whether `id` is `prefix` followed by at least [`ID_DIGITS`] digits.
#[must_use]
pub fn is_valid_id(prefix: &str, id: &str) -> bool {
    id.strip_prefix(prefix)
        .is_some_and(|digits| digits.len() >= ID_DIGITS && digits.bytes().all(|b| b.is_ascii_digit()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn first_id_when_empty() {
        assert_eq!(next_id(PREFIX_PATIENT, []), "P001");
    }

    #[test]
    fn next_id_uses_highest_not_count() {
        let ids = ["P001", "P007", "P003"];
        assert_eq!(next_id(PREFIX_PATIENT, ids), "P008");
    }

    #[test]
    fn next_id_ignores_other_prefixes() {
        let ids = ["ST004", "S002", "SX9"];
        assert_eq!(next_id(PREFIX_SURGERY, ids), "S003");
        assert_eq!(next_id(PREFIX_STAFF, ids), "ST005");
    }

    #[test]
    fn next_id_grows_past_padding() {
        assert_eq!(next_id(PREFIX_REFERRAL, ["R999"]), "R1000");
    }

    #[test]
    fn rx_is_not_counted_as_referral() {
        assert_eq!(next_id(PREFIX_REFERRAL, ["RX010", "R002"]), "R003");
    }

    #[rstest]
    #[case("P", "P001", true)]
    #[case("P", "P1234", true)]
    #[case("P", "P01", false)]
    #[case("P", "p001", false)]
    #[case("P", "P00A", false)]
    #[case("RX", "RX001", true)]
    #[case("R", "RX001", false)]
    #[case("ST", "ST010", true)]
    fn validates_id_format(#[case] prefix: &str, #[case] id: &str, #[case] valid: bool) {
        assert_eq!(is_valid_id(prefix, id), valid);
    }

    #[test]
    fn all_prefixes_longest_first_for_shared_letters() {
        let st = ALL_PREFIXES.iter().position(|p| *p == "ST").unwrap();
        let s = ALL_PREFIXES.iter().position(|p| *p == "S").unwrap();
        let rx = ALL_PREFIXES.iter().position(|p| *p == "RX").unwrap();
        let r = ALL_PREFIXES.iter().position(|p| *p == "R").unwrap();
        assert!(st < s);
        assert!(rx < r);
    }
}
