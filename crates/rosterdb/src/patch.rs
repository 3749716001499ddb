//! Field-level patches: the submit payload produced by a form session
//! and applied to a stored record by a repository.

use crate::value::Value;
use derive_more::{Deref, DerefMut};
use std::collections::BTreeMap;
use thiserror::Error as ThisError;

///
/// PatchError
///
/// Structured failures for user-driven patch application.
///

#[remain::sorted]
#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
pub enum PatchError {
    #[error("field is not patchable: {field}")]
    ImmutableField { field: String },

    #[error("invalid value for {field}: {reason}")]
    InvalidValue { field: String, reason: String },

    #[error("unknown patch field: {field}")]
    UnknownField { field: String },
}

impl PatchError {
    pub(crate) fn invalid(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidValue {
            field: field.into(),
            reason: reason.into(),
        }
    }
}

///
/// RecordPatch
///
/// An ordered map of field name to new value, carrying only the fields
/// to change. `Value::Null` clears an optional field.
///

#[derive(Clone, Debug, Default, Deref, DerefMut, Eq, PartialEq)]
pub struct RecordPatch(BTreeMap<String, Value>);

impl RecordPatch {
    #[must_use]
    pub const fn new() -> Self {
        Self(BTreeMap::new())
    }

    pub fn set(&mut self, field: impl Into<String>, value: impl Into<Value>) {
        self.insert(field.into(), value.into());
    }

    #[must_use]
    pub fn value(&self, field: &str) -> Option<&Value> {
        self.get(field)
    }
}

impl FromIterator<(String, Value)> for RecordPatch {
    fn from_iter<I: IntoIterator<Item = (String, Value)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

///
/// PatchRecord
///
/// Records that can absorb a single patched field. Implementations own
/// the string-to-typed conversion for each field and reject anything
/// outside the model.
///

pub trait PatchRecord {
    fn apply_field(&mut self, field: &str, value: &Value) -> Result<(), PatchError>;
}

///
/// apply_patch
/// Apply every field of a patch to a record, failing on the first
/// rejected field. Fields are applied in name order.
///
pub fn apply_patch<R: PatchRecord>(record: &mut R, patch: &RecordPatch) -> Result<(), PatchError> {
    for (field, value) in patch.iter() {
        record.apply_field(field, value)?;
    }

    Ok(())
}

///
/// TESTS
///
