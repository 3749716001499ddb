use crate::{form::FormError, patch::PatchError, store::StoreError, validate::ValidateError};
use thiserror::Error as ThisError;

///
/// Error
///
/// Crate-level error combining the module taxonomies. The submit gate
/// itself is pure and never appears here; only form wiring, patching,
/// validation, and storage can fail.
///

#[remain::sorted]
#[derive(Clone, Debug, ThisError)]
pub enum Error {
    #[error(transparent)]
    Form(#[from] FormError),

    #[error(transparent)]
    Patch(#[from] PatchError),

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    Validate(#[from] ValidateError),
}

///
/// TESTS
///
