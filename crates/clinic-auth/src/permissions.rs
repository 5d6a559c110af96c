//! Role/panel access matrix.
//!
//! Patients get `Read` on their own clinical panels; the row-level
//! restriction to their own ID is applied through
//! [`Identity::patient_scope`] and [`ensure_patient_scope`].

use clinic_core::enums::{Access, Panel, Role};

use crate::error::AuthError;
use crate::identity::Identity;

/// Access level `role` has on `panel`.
#[must_use]
pub const fn access(role: Role, panel: Panel) -> Access {
    use Access::{Hidden, Read, Write};

    match (role, panel) {
        (Role::Developer, _) => Write,

        (Role::Gp, Panel::Staff) => Hidden,
        (Role::Gp, Panel::Clinicians | Panel::Facilities) => Read,
        (Role::Gp, _) => Write,

        (Role::Nurse, Panel::Staff) => Hidden,
        (Role::Nurse, Panel::Appointments) => Write,
        (Role::Nurse, _) => Read,

        (Role::Admin, Panel::Prescriptions) => Hidden,
        (Role::Admin, Panel::Referrals) => Read,
        (Role::Admin, _) => Write,

        (Role::Receptionist, Panel::Patients | Panel::Appointments) => Write,
        (Role::Receptionist, Panel::Clinicians | Panel::Facilities) => Read,
        (Role::Receptionist, _) => Hidden,

        (
            Role::Patient,
            Panel::Patients | Panel::Appointments | Panel::Prescriptions | Panel::Referrals,
        ) => Read,
        (Role::Patient, _) => Hidden,
    }
}

/// Panels `role` can see, in dashboard order.
#[must_use]
pub fn visible_panels(role: Role) -> Vec<Panel> {
    Panel::ALL
        .into_iter()
        .filter(|panel| access(role, *panel) != Access::Hidden)
        .collect()
}

/// Fail unless `identity` has at least `needed` access on `panel`.
///
/// # Errors
///
/// Returns `AuthError::PanelHidden` when the panel is hidden from the role,
/// or `AuthError::Forbidden` when it is visible but the level is too low.
pub fn ensure(identity: &Identity, panel: Panel, needed: Access) -> Result<(), AuthError> {
    let granted = access(identity.role, panel);
    if granted.allows(needed) {
        return Ok(());
    }
    tracing::debug!(
        role = identity.role.as_str(),
        panel = panel.as_str(),
        granted = granted.as_str(),
        needed = needed.as_str(),
        "access denied"
    );
    if granted == Access::Hidden {
        Err(AuthError::PanelHidden {
            role: identity.role,
            panel,
        })
    } else {
        Err(AuthError::Forbidden {
            role: identity.role,
            panel,
            needed,
        })
    }
}

/// Fail when a patient login asks for another patient's records.
///
/// # Errors
///
/// Returns `AuthError::OutOfScope` if `patient_id` is not the logged-in
/// patient's own ID.
pub fn ensure_patient_scope(identity: &Identity, patient_id: &str) -> Result<(), AuthError> {
    match identity.patient_scope() {
        Some(own) if !own.eq_ignore_ascii_case(patient_id) => Err(AuthError::OutOfScope {
            requested: patient_id.to_string(),
        }),
        _ => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case(Role::Gp, Panel::Patients, Access::Write)]
    #[case(Role::Gp, Panel::Clinicians, Access::Read)]
    #[case(Role::Gp, Panel::Staff, Access::Hidden)]
    #[case(Role::Gp, Panel::Prescriptions, Access::Write)]
    #[case(Role::Gp, Panel::Facilities, Access::Read)]
    #[case(Role::Nurse, Panel::Patients, Access::Read)]
    #[case(Role::Nurse, Panel::Appointments, Access::Write)]
    #[case(Role::Nurse, Panel::Prescriptions, Access::Read)]
    #[case(Role::Nurse, Panel::Staff, Access::Hidden)]
    #[case(Role::Admin, Panel::Staff, Access::Write)]
    #[case(Role::Admin, Panel::Prescriptions, Access::Hidden)]
    #[case(Role::Admin, Panel::Referrals, Access::Read)]
    #[case(Role::Receptionist, Panel::Patients, Access::Write)]
    #[case(Role::Receptionist, Panel::Appointments, Access::Write)]
    #[case(Role::Receptionist, Panel::Clinicians, Access::Read)]
    #[case(Role::Receptionist, Panel::Prescriptions, Access::Hidden)]
    #[case(Role::Receptionist, Panel::Referrals, Access::Hidden)]
    #[case(Role::Patient, Panel::Patients, Access::Read)]
    #[case(Role::Patient, Panel::Referrals, Access::Read)]
    #[case(Role::Patient, Panel::Clinicians, Access::Hidden)]
    #[case(Role::Patient, Panel::Facilities, Access::Hidden)]
    #[case(Role::Developer, Panel::Staff, Access::Write)]
    fn matrix(#[case] role: Role, #[case] panel: Panel, #[case] expected: Access) {
        assert_eq!(access(role, panel), expected);
    }

    #[test]
    fn developer_sees_every_panel() {
        assert_eq!(visible_panels(Role::Developer), Panel::ALL.to_vec());
    }

    #[test]
    fn receptionist_panels_in_tab_order() {
        assert_eq!(
            visible_panels(Role::Receptionist),
            vec![
                Panel::Patients,
                Panel::Clinicians,
                Panel::Appointments,
                Panel::Facilities
            ]
        );
    }

    fn login(role: Role, user_id: &str) -> Identity {
        Identity {
            identifier: user_id.into(),
            role,
            user_id: Some(user_id.into()),
            display_name: "Test".into(),
            logged_in_at: Utc::now(),
        }
    }

    #[test]
    fn ensure_distinguishes_hidden_from_read_only() {
        let nurse = login(Role::Nurse, "C002");
        assert!(ensure(&nurse, Panel::Appointments, Access::Write).is_ok());
        assert!(matches!(
            ensure(&nurse, Panel::Prescriptions, Access::Write),
            Err(AuthError::Forbidden { needed: Access::Write, .. })
        ));
        assert!(matches!(
            ensure(&nurse, Panel::Staff, Access::Read),
            Err(AuthError::PanelHidden { panel: Panel::Staff, .. })
        ));
    }

    #[test]
    fn forbidden_message_names_role_and_panel() {
        let err = ensure(&login(Role::Admin, "ST001"), Panel::Referrals, Access::Write).unwrap_err();
        assert_eq!(err.to_string(), "Admin lacks write access to referrals");
    }

    #[test]
    fn patient_scope_guard() {
        let patient = login(Role::Patient, "P001");
        assert!(ensure_patient_scope(&patient, "P001").is_ok());
        assert!(ensure_patient_scope(&patient, "p001").is_ok());
        assert!(matches!(
            ensure_patient_scope(&patient, "P002"),
            Err(AuthError::OutOfScope { .. })
        ));
        assert!(ensure_patient_scope(&login(Role::Gp, "C001"), "P002").is_ok());
    }
}
