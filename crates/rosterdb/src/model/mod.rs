mod field;
mod record;

pub use field::{FieldKind, FieldModel, FieldPresence};
pub use record::RecordModel;
