//! Repository abstraction and the mock data sources behind it.
//!
//! The form layer never talks to a store directly; it produces a
//! [`RecordPatch`](crate::patch::RecordPatch) and a collaborator applies
//! it through whichever [`Repository`] the surface was handed.

mod memory;
mod raw;

pub use memory::MemoryStore;
pub use raw::{MAX_ROW_BYTES, RawRow, RawRowError, RawStore, RowDecodeError};

use crate::{
    patch::{PatchError, PatchRecord, RecordPatch},
    traits::RecordKind,
};
use std::fmt::Display;
use thiserror::Error as ThisError;

///
/// StoreError
///

#[remain::sorted]
#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
pub enum StoreError {
    #[error("store corruption: {message}")]
    Corrupt { message: String },

    #[error("create requires an unsaved record, key already assigned: {key}")]
    KeyAlreadyAssigned { key: String },

    #[error("record has no key")]
    MissingKey,

    #[error("key not found: {key}")]
    NotFound { key: String },

    #[error(transparent)]
    Patch(#[from] PatchError),

    #[error("row exceeds max size: {len} bytes (limit {MAX_ROW_BYTES})")]
    RowTooLarge { len: usize },
}

impl StoreError {
    pub(crate) fn not_found(key: impl Display) -> Self {
        Self::NotFound {
            key: key.to_string(),
        }
    }

    pub(crate) fn corrupt(message: impl Into<String>) -> Self {
        Self::Corrupt {
            message: message.into(),
        }
    }

    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

///
/// Repository
///
/// The storage seam for one record type: list, fetch-by-key, create
/// with repository-assigned identity, and patch-based update.
///
/// `get` distinguishes "absent" (`Ok(None)`) from a store failure;
/// `update` treats an absent key as an error because the caller named
/// a specific record.
///

pub trait Repository<R: RecordKind + PatchRecord> {
    fn list(&self) -> Result<Vec<R>, StoreError>;

    fn get(&self, key: &R::Key) -> Result<Option<R>, StoreError>;

    /// Store an unsaved record, assigning a fresh key. Returns the
    /// record as stored.
    fn create(&mut self, record: R) -> Result<R, StoreError>;

    /// Patch the record under `key` and return the updated copy.
    fn update(&mut self, key: &R::Key, patch: &RecordPatch) -> Result<R, StoreError>;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
