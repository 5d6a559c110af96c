use clinic_core::enums::{Access, Panel, Role};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AuthError {
    #[error("login identifier must not be empty")]
    EmptyIdentifier,

    #[error("unknown login identifier: {0}")]
    UnknownIdentifier(String),

    #[error("patients log in with their patient ID, not the word \"patient\"")]
    PatientIdRequired,

    #[error("{role} lacks {needed} access to {panel}")]
    Forbidden {
        role: Role,
        panel: Panel,
        needed: Access,
    },

    #[error("the {panel} panel is not available to {role}")]
    PanelHidden { role: Role, panel: Panel },

    #[error("patients may only see their own records (requested {requested})")]
    OutOfScope { requested: String },

    #[error("not logged in: run `clinic login <identifier>` or pass --as")]
    NotLoggedIn,

    #[error("session store error: {0}")]
    SessionStore(String),
}
