use crate::{form::FieldMap, value::Value};

///
/// FormStatus
///
/// The single externally observable output of the gate: `can_submit`
/// drives the Save control's enabled state, with the two inputs kept
/// visible for diagnostics.
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct FormStatus {
    pub is_valid: bool,
    pub is_dirty: bool,
    pub can_submit: bool,
}

///
/// evaluate
/// Compute the submit gate for the current form state.
///
/// Pure and synchronous; re-run on every field-change event. With no
/// baseline (create mode) dirtiness is vacuously true and gating
/// relies on validity alone.
///
#[must_use]
pub fn evaluate(current: &FieldMap, required: &[&str], baseline: Option<&FieldMap>) -> FormStatus {
    let valid = is_valid(current, required);
    let dirty = baseline.is_none_or(|baseline| is_dirty(current, baseline));

    FormStatus {
        is_valid: valid,
        is_dirty: dirty,
        can_submit: valid && dirty,
    }
}

/// True iff every required name has a filled (post-trim) value.
#[must_use]
pub fn is_valid(current: &FieldMap, required: &[&str]) -> bool {
    required
        .iter()
        .all(|name| current.value(name).is_some_and(Value::is_filled))
}

/// True iff at least one tracked field differs from the baseline.
///
/// Comparison is plain value inequality over the union of both key
/// sets, so a field the baseline is missing entirely counts as
/// differing (conservatively dirty).
#[must_use]
pub fn is_dirty(current: &FieldMap, baseline: &FieldMap) -> bool {
    current
        .keys()
        .chain(baseline.keys())
        .any(|name| current.value(name) != baseline.value(name))
}

///
/// TESTS
///
