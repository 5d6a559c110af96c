//! Login, dashboard and session working together over a seeded data dir.

use pretty_assertions::assert_eq;

use clinic_auth::{
    AuthError, Dashboard, SessionStore, ensure, ensure_patient_scope, refresh_identity, resolve_login,
};
use clinic_config::LoginConfig;
use clinic_core::enums::{Access, Panel, Role};
use clinic_store::seed::seed_demo;
use clinic_store::{ClinicStore, StorePaths};

fn seeded(dir: &std::path::Path) -> ClinicStore {
    let mut store = ClinicStore::open(&StorePaths::in_dir(dir), None).unwrap();
    seed_demo(&mut store, "developer").unwrap();
    store
}

#[test]
fn patient_login_survives_between_commands() {
    let dir = tempfile::TempDir::new().unwrap();
    let store = seeded(dir.path());
    let options = LoginConfig::default();
    let sessions = SessionStore::new(dir.path().join(".clinic-session.json"));

    let identity = resolve_login(&store, "p001", &options).unwrap();
    sessions.save(&identity).unwrap();

    // Next command: fresh process, files reopened.
    let store = ClinicStore::open(&StorePaths::in_dir(dir.path()), None).unwrap();
    let restored = refresh_identity(&store, &sessions.require().unwrap(), &options).unwrap();
    assert_eq!(restored, identity);
    assert_eq!(restored.patient_scope(), Some("P001"));

    assert!(ensure(&restored, Panel::Appointments, Access::Read).is_ok());
    assert!(matches!(
        ensure(&restored, Panel::Appointments, Access::Write),
        Err(AuthError::Forbidden { .. })
    ));
    assert!(ensure_patient_scope(&restored, "P002").is_err());
}

#[test]
fn staff_dashboard_follows_staff_role() {
    let dir = tempfile::TempDir::new().unwrap();
    let store = seeded(dir.path());
    let manager = resolve_login(&store, "ST001", &LoginConfig::default()).unwrap();
    assert_eq!(manager.role, Role::Admin);

    let mut dashboard = Dashboard::for_identity(&manager);
    assert_eq!(dashboard.to_response().greeting, "Welcome, Gwen Thomas (Admin)");
    assert!(dashboard.switch_to(Panel::Staff).is_ok());
    assert!(dashboard.switch_to(Panel::Prescriptions).is_err());
}

#[test]
fn logout_clears_session() {
    let dir = tempfile::TempDir::new().unwrap();
    let store = seeded(dir.path());
    let sessions = SessionStore::new(dir.path().join(".clinic-session.json"));
    sessions
        .save(&resolve_login(&store, "C002", &LoginConfig::default()).unwrap())
        .unwrap();

    assert!(sessions.clear().unwrap());
    assert!(matches!(sessions.require(), Err(AuthError::NotLoggedIn)));
}
