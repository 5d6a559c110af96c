use clinic_auth::{Identity, ensure, ensure_patient_scope};
use clinic_core::enums::{Access, Panel, Role};

use crate::context::AppContext;

/// The current identity, provided it has `needed` access on `panel`.
pub fn require(ctx: &AppContext, panel: Panel, needed: Access) -> anyhow::Result<&Identity> {
    let identity = ctx.identity()?;
    ensure(identity, panel, needed)?;
    Ok(identity)
}

/// Audit actor name for a write on `panel`.
pub fn writer(ctx: &AppContext, panel: Panel) -> anyhow::Result<String> {
    Ok(require(ctx, panel, Access::Write)?.actor().to_string())
}

/// Fail when a patient login reaches for a record naming someone else.
pub fn check_owner(identity: &Identity, patient_id: &str) -> anyhow::Result<()> {
    ensure_patient_scope(identity, patient_id)?;
    Ok(())
}

/// The patient filter a list command may use: a patient login is pinned to
/// their own ID, everyone else gets what they asked for.
pub fn scoped_patient(
    identity: &Identity,
    requested: Option<&str>,
) -> anyhow::Result<Option<String>> {
    match identity.patient_scope() {
        Some(own) => {
            if let Some(requested) = requested {
                check_owner(identity, requested)?;
            }
            Ok(Some(own.to_string()))
        }
        None => Ok(requested.map(str::to_string)),
    }
}

/// The logged-in clinician's ID, used as the default author of clinical
/// records.
pub fn clinician_id(identity: &Identity) -> Option<&str> {
    match identity.role {
        Role::Gp | Role::Nurse => identity.user_id.as_deref(),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;
    use clinic_core::enums::Role;
    use pretty_assertions::assert_eq;

    use super::*;

    fn identity(role: Role, user_id: Option<&str>) -> Identity {
        Identity {
            identifier: user_id.unwrap_or("admin").into(),
            role,
            user_id: user_id.map(Into::into),
            display_name: "Test".into(),
            logged_in_at: Utc::now(),
        }
    }

    #[test]
    fn patient_is_pinned_to_own_id() {
        let patient = identity(Role::Patient, Some("P001"));
        assert_eq!(scoped_patient(&patient, None).unwrap(), Some("P001".into()));
        assert_eq!(scoped_patient(&patient, Some("P001")).unwrap(), Some("P001".into()));
        assert!(scoped_patient(&patient, Some("P002")).is_err());
    }

    #[test]
    fn staff_filters_freely() {
        let receptionist = identity(Role::Receptionist, Some("ST002"));
        assert_eq!(scoped_patient(&receptionist, None).unwrap(), None);
        assert_eq!(
            scoped_patient(&receptionist, Some("P002")).unwrap(),
            Some("P002".into())
        );
    }

    #[test]
    fn only_clinicians_author_by_default() {
        assert_eq!(clinician_id(&identity(Role::Gp, Some("C001"))), Some("C001"));
        assert_eq!(clinician_id(&identity(Role::Gp, None)), None);
        assert_eq!(clinician_id(&identity(Role::Admin, Some("ST001"))), None);
    }
}
