//! Form state and the dirty/validity gate for the Save control.

mod fields;
mod session;
mod tracker;

pub use fields::FieldMap;
pub use session::{FormError, FormSession};
pub use tracker::{FormStatus, evaluate, is_dirty, is_valid};
