use crate::{
    form::{FieldMap, FormStatus, evaluate},
    model::RecordModel,
    patch::RecordPatch,
    sanitize::sanitize_fields,
    traits::{FieldValues, RecordKind},
    value::Value,
};
use thiserror::Error as ThisError;

///
/// FormError
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
pub enum FormError {
    #[error("unknown form field: {field}")]
    UnknownField { field: String },
}

///
/// FormSession
///
/// One editing surface's lifecycle: a baseline captured when editing
/// began (absent for create mode), the current field values, and the
/// submit gate derived from both.
///
/// The session owns the form state exclusively; evaluation is pure,
/// so dropping the session is cancel with no side effects.
///

#[derive(Clone, Debug)]
pub struct FormSession {
    model: &'static RecordModel,
    baseline: Option<FieldMap>,
    current: FieldMap,
}

impl FormSession {
    /// Start a create-mode session with every field unset.
    #[must_use]
    pub fn create<R: RecordKind>() -> Self {
        Self {
            model: R::MODEL,
            baseline: None,
            current: FieldMap::new(),
        }
    }

    /// Start an edit-mode session, capturing the record as baseline.
    #[must_use]
    pub fn edit<R: RecordKind + FieldValues>(record: &R) -> Self {
        let baseline = FieldMap::from_record(record);

        Self {
            model: R::MODEL,
            baseline: Some(baseline.clone()),
            current: baseline,
        }
    }

    #[must_use]
    pub const fn is_edit(&self) -> bool {
        self.baseline.is_some()
    }

    #[must_use]
    pub const fn model(&self) -> &'static RecordModel {
        self.model
    }

    /// Record a field edit. Input is kept verbatim; trimming only
    /// happens at validity checks and on submit.
    pub fn set_field(
        &mut self,
        name: &str,
        value: impl Into<Value>,
    ) -> Result<(), FormError> {
        if self.model.field(name).is_none() {
            return Err(FormError::UnknownField {
                field: name.to_string(),
            });
        }
        self.current.set(name, value);

        Ok(())
    }

    #[must_use]
    pub fn field(&self, name: &str) -> Option<&Value> {
        self.current.value(name)
    }

    /// Re-evaluate the submit gate against the current state.
    #[must_use]
    pub fn status(&self) -> FormStatus {
        let required: Vec<&str> = self.model.required_fields().collect();

        evaluate(&self.current, &required, self.baseline.as_ref())
    }

    #[must_use]
    pub fn can_submit(&self) -> bool {
        self.status().can_submit
    }

    /// Discard edits, restoring the baseline (or empty, for create).
    pub fn reset(&mut self) {
        self.current = self.baseline.clone().unwrap_or_default();
    }

    /// Consume the session into the patch to submit.
    ///
    /// Values are sanitized first, then only fields differing from the
    /// baseline are emitted; create mode emits every set field. A field
    /// cleared relative to the baseline patches to `Value::Null`.
    #[must_use]
    pub fn into_patch(mut self) -> RecordPatch {
        sanitize_fields(&mut self.current);

        let mut patch = RecordPatch::new();
        match &self.baseline {
            None => {
                for (name, value) in self.current.iter() {
                    if !value.is_null() {
                        patch.set(name.clone(), value.clone());
                    }
                }
            }
            Some(baseline) => {
                for name in self.current.keys().chain(baseline.keys()) {
                    let current = self.current.value(name);
                    if current != baseline.value(name) {
                        patch.set(name.clone(), current.cloned().unwrap_or(Value::Null));
                    }
                }
            }
        }

        patch
    }
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;
    use crate::user::{User, fixtures};

    #[test]
    fn create_session_starts_invalid_and_vacuously_dirty() {
        let session = FormSession::create::<User>();
        let status = session.status();

        assert!(!session.is_edit());
        assert!(status.is_dirty);
        assert!(!status.is_valid);
        assert!(!status.can_submit);
    }

    #[test]
    fn create_session_submits_once_required_fields_are_filled() {
        let mut session = FormSession::create::<User>();
        session.set_field("firstName", "Becky").unwrap();
        session.set_field("lastName", "Thatcher").unwrap();
        session.set_field("email", "becky@example.com").unwrap();
        assert!(!session.can_submit());

        session.set_field("type", "basic").unwrap();
        assert!(session.can_submit());
    }

    #[test]
    fn edit_session_starts_clean() {
        let session = FormSession::edit(&fixtures::tom_sawyer());
        let status = session.status();

        assert!(session.is_edit());
        assert!(status.is_valid);
        assert!(!status.is_dirty);
        assert!(!status.can_submit);
    }

    #[test]
    fn edit_then_revert_returns_to_clean() {
        let mut session = FormSession::edit(&fixtures::tom_sawyer());

        session.set_field("firstName", "Thomas").unwrap();
        assert!(session.can_submit());

        session.set_field("firstName", "Tom").unwrap();
        assert!(!session.can_submit());
    }

    #[test]
    fn unknown_field_is_rejected() {
        let mut session = FormSession::create::<User>();
        let err = session.set_field("nickname", "Huck").unwrap_err();

        assert_eq!(
            err,
            FormError::UnknownField {
                field: "nickname".to_string()
            }
        );
    }

    #[test]
    fn primary_key_is_not_an_editable_field() {
        let mut session = FormSession::edit(&fixtures::tom_sawyer());
        assert!(session.set_field("id", "other").is_err());
    }

    #[test]
    fn reset_restores_the_baseline() {
        let mut session = FormSession::edit(&fixtures::tom_sawyer());
        session.set_field("lastName", "Finn").unwrap();

        session.reset();
        assert_eq!(session.field("lastName"), Some(&Value::from("Sawyer")));
        assert!(!session.can_submit());
    }

    #[test]
    fn into_patch_contains_only_changed_fields() {
        let mut session = FormSession::edit(&fixtures::tom_sawyer());
        session.set_field("firstName", "Thomas").unwrap();

        let patch = session.into_patch();
        assert_eq!(patch.len(), 1);
        assert_eq!(patch.value("firstName"), Some(&Value::from("Thomas")));
    }

    #[test]
    fn into_patch_emits_null_for_cleared_optional_field() {
        let mut session = FormSession::edit(&fixtures::tom_sawyer());
        session.set_field("phoneNumber", "").unwrap();

        let patch = session.into_patch();
        assert_eq!(patch.value("phoneNumber"), Some(&Value::Null));
    }

    #[test]
    fn whitespace_only_edit_sanitizes_to_no_patch() {
        let mut tom = fixtures::tom_sawyer();
        tom.phone_number = None;

        let mut session = FormSession::edit(&tom);
        session.set_field("phoneNumber", "   ").unwrap();

        let patch = session.into_patch();
        assert!(patch.is_empty());
    }

    #[test]
    fn create_patch_skips_unset_fields() {
        let mut session = FormSession::create::<User>();
        session.set_field("firstName", "Becky").unwrap();
        session.set_field("phoneNumber", "").unwrap();

        let patch = session.into_patch();
        assert_eq!(patch.len(), 1);
        assert_eq!(patch.value("firstName"), Some(&Value::from("Becky")));
    }
}
