//! Serde adapter for `HH:MM` clock times.
//!
//! Appointment times are stored without seconds. Use with
//! `#[serde(with = "crate::time_format::hhmm")]`.

pub mod hhmm {
    use chrono::NaiveTime;
    use serde::{Deserialize, Deserializer, Serializer, de};

    pub const FORMAT: &str = "%H:%M";

    /// Parse `HH:MM`, also accepting `HH:MM:SS`.
    ///
    /// # Errors
    ///
    /// Returns the `chrono` parse error when neither format matches.
    pub fn parse(raw: &str) -> Result<NaiveTime, chrono::ParseError> {
        let raw = raw.trim();
        NaiveTime::parse_from_str(raw, FORMAT)
            .or_else(|_| NaiveTime::parse_from_str(raw, "%H:%M:%S"))
    }

    pub fn serialize<S: Serializer>(time: &NaiveTime, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(&time.format(FORMAT))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveTime, D::Error> {
        let raw = String::deserialize(deserializer)?;
        parse(&raw).map_err(|e| de::Error::custom(format!("invalid time '{raw}': {e}")))
    }

}
