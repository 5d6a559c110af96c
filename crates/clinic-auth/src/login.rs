//! Identifier to identity resolution.

use chrono::Utc;

use clinic_config::LoginConfig;
use clinic_core::enums::Role;
use clinic_store::ClinicStore;
use clinic_store::record::Record;
use clinic_store::repository::CsvRepository;

use crate::error::AuthError;
use crate::identity::Identity;

fn find_ignore_case<'a, T: Record>(repo: &'a CsvRepository<T>, id: &str) -> Option<&'a T> {
    repo.get_all()
        .iter()
        .find(|record| record.id().eq_ignore_ascii_case(id))
}

fn from_record(id: &str, role: Role, display_name: String) -> Identity {
    Identity {
        identifier: id.to_string(),
        role,
        user_id: Some(id.to_string()),
        display_name,
        logged_in_at: Utc::now(),
    }
}

/// Map a staff `role` column to a login role. Staff can never log in as a
/// patient or as the developer.
fn staff_role(label: &str) -> Role {
    match Role::parse_label(label) {
        Some(Role::Patient | Role::Developer) | None => {
            tracing::debug!(label, "staff role not recognised; using receptionist");
            Role::Receptionist
        }
        Some(role) => role,
    }
}

/// Resolve what was typed at the login prompt.
///
/// Probes patients, then clinicians, then staff by ID (case-insensitive),
/// then bare role names when `options.allow_role_names` is set.
///
/// # Errors
///
/// - `AuthError::EmptyIdentifier` for a blank identifier.
/// - `AuthError::PatientIdRequired` for the bare word "patient".
/// - `AuthError::UnknownIdentifier` when nothing matches, including
///   "developer" while `options.developer_enabled` is off.
pub fn resolve_login(
    store: &ClinicStore,
    identifier: &str,
    options: &LoginConfig,
) -> Result<Identity, AuthError> {
    let identifier = identifier.trim();
    if identifier.is_empty() {
        return Err(AuthError::EmptyIdentifier);
    }

    if let Some(patient) = find_ignore_case(store.patients(), identifier) {
        return Ok(from_record(&patient.patient_id, Role::Patient, patient.full_name()));
    }

    if let Some(clinician) = find_ignore_case(store.clinicians(), identifier) {
        let role = if clinician.is_nurse() { Role::Nurse } else { Role::Gp };
        return Ok(from_record(&clinician.clinician_id, role, clinician.display_name()));
    }

    if let Some(member) = find_ignore_case(store.staff(), identifier) {
        return Ok(from_record(
            &member.staff_id,
            staff_role(&member.role),
            member.full_name(),
        ));
    }

    if options.allow_role_names {
        match Role::parse_label(identifier) {
            Some(Role::Patient) => return Err(AuthError::PatientIdRequired),
            Some(Role::Developer) if !options.developer_enabled => {}
            Some(role) => return Ok(Identity::for_role(role)),
            None => {}
        }
    }

    tracing::debug!(identifier, "login identifier matched nothing");
    Err(AuthError::UnknownIdentifier(identifier.to_string()))
}

/// Re-resolve a stored identity against the current records, so a deleted
/// user or a changed staff role takes effect on the next command. The
/// original login time is kept.
///
/// # Errors
///
/// Returns `AuthError::NotLoggedIn` if the identity no longer resolves.
pub fn refresh_identity(
    store: &ClinicStore,
    identity: &Identity,
    options: &LoginConfig,
) -> Result<Identity, AuthError> {
    match resolve_login(store, &identity.identifier, options) {
        Ok(fresh) => Ok(Identity {
            logged_in_at: identity.logged_in_at,
            ..fresh
        }),
        Err(error) => {
            tracing::warn!(identifier = %identity.identifier, %error, "stored login no longer valid");
            Err(AuthError::NotLoggedIn)
        }
    }
}
