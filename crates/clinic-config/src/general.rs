use serde::{Deserialize, Serialize};

/// Settings that are not about storage or login.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct GeneralConfig {
    /// Row cap for `list` and `audit` when `--limit` is not given.
    pub default_limit: u32,
    /// Printed at the top of referral letters and in `clinic init` output.
    pub clinic_name: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            default_limit: 50,
            clinic_name: "clinicdesk".into(),
        }
    }
}
