use crate::{
    traits::{FieldValues, RecordKind},
    value::Value,
};
use derive_more::{Deref, DerefMut};
use std::collections::BTreeMap;

///
/// FieldMap
///
/// The form's working state: an ordered mapping from field name to
/// scalar value. Built empty for create mode, or projected from a
/// record for edit mode.
///

#[derive(Clone, Debug, Default, Deref, DerefMut, Eq, PartialEq)]
pub struct FieldMap(BTreeMap<String, Value>);

impl FieldMap {
    #[must_use]
    pub const fn new() -> Self {
        Self(BTreeMap::new())
    }

    /// Project a record's tracked fields into form state.
    #[must_use]
    pub fn from_record<R: RecordKind + FieldValues>(record: &R) -> Self {
        let mut fields = Self::new();
        for name in R::MODEL.field_names() {
            if let Some(value) = record.get_value(name) {
                fields.insert(name.to_string(), value);
            }
        }

        fields
    }

    /// Set a field, accepting anything convertible into a [`Value`].
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<Value>) {
        self.insert(name.into(), value.into());
    }

    /// Field value, or `None` when the field is not present at all.
    #[must_use]
    pub fn value(&self, name: &str) -> Option<&Value> {
        self.get(name)
    }
}

impl From<BTreeMap<String, Value>> for FieldMap {
    fn from(fields: BTreeMap<String, Value>) -> Self {
        Self(fields)
    }
}

impl FromIterator<(String, Value)> for FieldMap {
    fn from_iter<I: IntoIterator<Item = (String, Value)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

///
/// TESTS
///
