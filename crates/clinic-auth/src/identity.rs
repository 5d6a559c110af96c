//! The logged-in user.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use clinic_core::enums::{Panel, Role};
use clinic_core::responses::LoginResponse;

use crate::permissions;

/// A resolved login. Serialized as-is into the session file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    /// What the user typed, normalized: a record ID in canonical case or a
    /// role name.
    pub identifier: String,
    pub role: Role,
    /// The patient, clinician or staff ID behind this login. `None` for
    /// bare role-name logins.
    pub user_id: Option<String>,
    pub display_name: String,
    pub logged_in_at: DateTime<Utc>,
}

impl Identity {
    /// Identity for a bare role-name login.
    #[must_use]
    pub fn for_role(role: Role) -> Self {
        Self {
            identifier: role.as_str().to_string(),
            role,
            user_id: None,
            display_name: role.label().to_string(),
            logged_in_at: Utc::now(),
        }
    }

    /// The patient ID every read must be restricted to, for patient logins.
    #[must_use]
    pub fn patient_scope(&self) -> Option<&str> {
        match self.role {
            Role::Patient => self.user_id.as_deref(),
            _ => None,
        }
    }

    /// Name recorded as `actor` in the audit trail.
    #[must_use]
    pub fn actor(&self) -> &str {
        self.user_id.as_deref().unwrap_or(&self.identifier)
    }

    #[must_use]
    pub fn greeting(&self) -> String {
        format!("Welcome, {} ({})", self.display_name, self.role.label())
    }

    /// Panels this identity can open, in dashboard order.
    #[must_use]
    pub fn visible_panels(&self) -> Vec<Panel> {
        permissions::visible_panels(self.role)
    }

    #[must_use]
    pub fn to_login_response(&self) -> LoginResponse {
        LoginResponse {
            identifier: self.identifier.clone(),
            role: self.role,
            display_name: self.display_name.clone(),
            logged_in_at: self.logged_in_at,
            panels: self.visible_panels(),
        }
    }
}
