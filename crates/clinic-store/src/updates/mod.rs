//! Update builder types for record mutations.
//!
//! Each builder produces an update struct with `Option` fields. Only `Some`
//! fields are applied to the stored record; `Option<Option<_>>` fields can
//! clear a value. The update is serialized as the audit `data` payload
//! (changed fields only).

pub mod appointment;
pub mod clinician;
pub mod facility;
pub mod patient;
pub mod prescription;
pub mod referral;
pub mod staff;

/// Overwrite `target` when `value` is set.
pub(crate) fn set<T: Clone>(target: &mut T, value: Option<&T>) {
    if let Some(value) = value {
        target.clone_from(value);
    }
}
