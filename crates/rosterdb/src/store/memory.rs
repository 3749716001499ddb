use crate::{
    obs::sink::{StoreEvent, record},
    patch::{PatchRecord, RecordPatch, apply_patch},
    store::{Repository, StoreError},
    traits::{FreshKey, RecordKind},
};
use derive_more::{Deref, DerefMut};
use std::collections::BTreeMap;

///
/// MemoryStore
///
/// The in-memory mock data source: decoded records keyed by primary
/// key. Fresh installs seed it from `user::fixtures`.
///

#[derive(Clone, Debug, Default, Deref, DerefMut)]
pub struct MemoryStore<R: RecordKind>(BTreeMap<R::Key, R>);

impl<R: RecordKind> MemoryStore<R> {
    #[must_use]
    pub const fn new() -> Self {
        Self(BTreeMap::new())
    }

    /// Preload already-keyed records, e.g. a seed roster.
    pub fn with_records(records: impl IntoIterator<Item = R>) -> Result<Self, StoreError> {
        let mut store = Self::new();
        for item in records {
            let key = item.key().ok_or(StoreError::MissingKey)?;
            store.insert(key, item);
        }

        Ok(store)
    }
}

impl<R: RecordKind + PatchRecord> Repository<R> for MemoryStore<R> {
    fn list(&self) -> Result<Vec<R>, StoreError> {
        let rows: Vec<R> = self.values().cloned().collect();
        record(StoreEvent::List {
            record: R::RECORD_NAME,
            rows: rows.len() as u64,
        });

        Ok(rows)
    }

    fn get(&self, key: &R::Key) -> Result<Option<R>, StoreError> {
        let found = self.0.get(key).cloned();
        record(StoreEvent::Load {
            record: R::RECORD_NAME,
            found: found.is_some(),
        });

        Ok(found)
    }

    fn create(&mut self, mut item: R) -> Result<R, StoreError> {
        if let Some(key) = item.key() {
            return Err(StoreError::KeyAlreadyAssigned {
                key: key.to_string(),
            });
        }

        let key = R::Key::fresh();
        debug_assert!(!self.contains_key(&key), "fresh key must be unused");
        item.set_key(key.clone());
        self.insert(key, item.clone());
        record(StoreEvent::Create {
            record: R::RECORD_NAME,
        });

        Ok(item)
    }

    fn update(&mut self, key: &R::Key, patch: &RecordPatch) -> Result<R, StoreError> {
        let Some(item) = self.0.get_mut(key) else {
            record(StoreEvent::Load {
                record: R::RECORD_NAME,
                found: false,
            });

            return Err(StoreError::not_found(key));
        };

        // Patch a copy first so a rejected patch leaves the row intact.
        let mut updated = item.clone();
        if let Err(err) = apply_patch(&mut updated, patch) {
            record(StoreEvent::PatchRejected {
                record: R::RECORD_NAME,
            });

            return Err(err.into());
        }

        *item = updated.clone();
        record(StoreEvent::Update {
            record: R::RECORD_NAME,
        });

        Ok(updated)
    }

    fn len(&self) -> usize {
        self.0.len()
    }
}

///
/// TESTS
///
