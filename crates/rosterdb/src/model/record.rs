use crate::model::field::FieldModel;

///
/// RecordModel
/// Minimal runtime model for one record type.
///

#[derive(Debug)]
pub struct RecordModel {
    /// Fully-qualified Rust type path (for diagnostics).
    pub path: &'static str,
    /// Stable external name used in keys and telemetry.
    pub record_name: &'static str,
    /// Primary key field name. Not form-tracked and never patchable.
    pub primary_key: &'static str,
    /// Ordered form-tracked field list (authoritative for gating).
    pub fields: &'static [FieldModel],
}

impl RecordModel {
    /// Look up a tracked field by name.
    #[must_use]
    pub fn field(&self, name: &str) -> Option<&'static FieldModel> {
        self.fields.iter().find(|field| field.name == name)
    }

    /// Names of the fields that must be filled before submission.
    pub fn required_fields(&self) -> impl Iterator<Item = &'static str> {
        self.fields
            .iter()
            .filter(|field| field.is_required())
            .map(|field| field.name)
    }

    /// Names of every tracked field, in declaration order.
    pub fn field_names(&self) -> impl Iterator<Item = &'static str> {
        self.fields.iter().map(|field| field.name)
    }
}

///
/// TESTS
///
