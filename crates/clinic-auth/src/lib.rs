//! # clinic-auth
//!
//! Who is using clinicdesk, and what they may touch.
//!
//! Login is by identifier only: a patient, clinician or staff ID, or a bare
//! role name when the configuration allows it. The resolved [`Identity`]
//! carries a [`Role`](clinic_core::enums::Role), which the permission matrix
//! maps to an access level per dashboard panel.
//!
//! - [`login`]: identifier to identity resolution
//! - [`permissions`]: role/panel access matrix and guards
//! - [`navigation`]: the role-gated dashboard shell
//! - [`session`]: the identity persisted between CLI invocations

pub mod error;
pub mod identity;
pub mod login;
pub mod navigation;
pub mod permissions;
pub mod session;

pub use error::AuthError;
pub use identity::Identity;
pub use login::{refresh_identity, resolve_login};
pub use navigation::Dashboard;
pub use permissions::{access, ensure, ensure_patient_scope};
pub use session::SessionStore;
