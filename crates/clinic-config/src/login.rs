//! Login behaviour.

use serde::{Deserialize, Serialize};

const fn default_true() -> bool {
    true
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoginConfig {
    /// Accept a bare role name ("admin", "receptionist", ...) as a login
    /// identifier when it matches no record.
    #[serde(default = "default_true")]
    pub allow_role_names: bool,

    /// Accept "developer" as a login identifier.
    #[serde(default = "default_true")]
    pub developer_enabled: bool,
}

impl Default for LoginConfig {
    fn default() -> Self {
        Self {
            allow_role_names: true,
            developer_enabled: true,
        }
    }
}
