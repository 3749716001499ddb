use crate::{model::RecordModel, value::Value};
use std::fmt::{Debug, Display};

// ============================================================================
// FOUNDATIONAL KINDS
// ============================================================================
//
// These traits define *where* something lives in the system,
// not what data it contains.
//

///
/// Path
/// Fully-qualified type path.
///

pub trait Path {
    const PATH: &'static str;
}

///
/// FreshKey
///
/// Key types that can mint a new, unique value. Repositories use this
/// to assign identity on create; callers never pick their own keys.
///

pub trait FreshKey {
    fn fresh() -> Self;
}

// ============================================================================
// RECORD IDENTITY & SCHEMA
// ============================================================================

///
/// RecordKind
///
/// A record type bound to its key and static model.
///
/// `key()` is `None` until a repository assigns identity on create;
/// an absent key is the definition of "new/unsaved".
///

pub trait RecordKind: Path + Clone + Debug {
    type Key: Clone + Debug + Display + Ord + FreshKey;

    const RECORD_NAME: &'static str;
    const MODEL: &'static RecordModel;

    fn key(&self) -> Option<Self::Key>;

    fn set_key(&mut self, key: Self::Key);
}

// ============================================================================
// RECORD VALUES
// ============================================================================

///
/// FieldValues
///
/// Projects a record's tracked fields into form values.
///
/// `None` means the record has no such field; `Value::Null` means the
/// field exists but is currently unset.
///

pub trait FieldValues {
    fn get_value(&self, field: &str) -> Option<Value>;
}
