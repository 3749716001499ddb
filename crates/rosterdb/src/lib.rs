//! Core runtime for Rosterdb: typed records, form dirty/validity gating,
//! repository-backed stores, and the ergonomics exported via the `prelude`.
#![warn(unreachable_pub)]

// public exports are one module level down
pub mod error;
pub mod form;
pub mod model;
pub mod obs;
pub mod patch;
pub mod sanitize;
pub mod store;
pub mod traits;
pub mod user;
pub mod validate;
pub mod value;

///
/// Prelude
///
/// Prelude contains only domain vocabulary.
/// No errors, stores, sinks, or helpers are re-exported here.
///

pub mod prelude {
    pub use crate::{
        form::{FieldMap, FormSession, FormStatus, evaluate},
        model::{FieldModel, RecordModel},
        traits::{FieldValues, Path, RecordKind},
        user::{User, UserId, UserType},
        value::Value,
    };
}
