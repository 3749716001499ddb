use crate::{
    obs::sink::{StoreEvent, record},
    patch::{PatchRecord, RecordPatch, apply_patch},
    store::{Repository, StoreError},
    traits::{FreshKey, RecordKind},
};
use derive_more::{Deref, DerefMut};
use serde::{Serialize, de::DeserializeOwned};
use std::collections::BTreeMap;
use thiserror::Error as ThisError;

/// Max serialized bytes for a single row to keep value loads bounded.
pub const MAX_ROW_BYTES: usize = 64 * 1024;

///
/// RawRowError
///

#[derive(Debug, ThisError)]
pub enum RawRowError {
    #[error("row exceeds max size: {len} bytes (limit {MAX_ROW_BYTES})")]
    TooLarge { len: usize },
}

impl From<RawRowError> for StoreError {
    fn from(err: RawRowError) -> Self {
        match err {
            RawRowError::TooLarge { len } => Self::RowTooLarge { len },
        }
    }
}

///
/// RowDecodeError
///

#[derive(Debug, ThisError)]
pub enum RowDecodeError {
    #[error("row failed to deserialize")]
    Deserialize,
}

impl From<RowDecodeError> for StoreError {
    fn from(err: RowDecodeError) -> Self {
        Self::corrupt(err.to_string())
    }
}

///
/// RawRow
///
/// One record held in its serialized wire form, decoded on read. This
/// is the serialized-store variant of the original surface's
/// local-storage backing.
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RawRow(Vec<u8>);

impl RawRow {
    pub fn try_new(bytes: Vec<u8>) -> Result<Self, RawRowError> {
        if bytes.len() > MAX_ROW_BYTES {
            return Err(RawRowError::TooLarge { len: bytes.len() });
        }

        Ok(Self(bytes))
    }

    pub fn encode<R: Serialize>(item: &R) -> Result<Self, StoreError> {
        let bytes = serde_json::to_vec(item)
            .map_err(|err| StoreError::corrupt(format!("row failed to serialize: {err}")))?;

        Self::try_new(bytes).map_err(StoreError::from)
    }

    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    #[must_use]
    pub const fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn try_decode<R: DeserializeOwned>(&self) -> Result<R, RowDecodeError> {
        serde_json::from_slice(&self.0).map_err(|_| RowDecodeError::Deserialize)
    }
}

///
/// RawStore
///
/// Mock data source that keeps rows serialized, like the original's
/// local-storage store kept JSON strings. Reads decode on demand and
/// surface corruption instead of panicking.
///

#[derive(Clone, Debug, Default, Deref, DerefMut)]
pub struct RawStore<R: RecordKind>(BTreeMap<R::Key, RawRow>);

impl<R: RecordKind> RawStore<R> {
    #[must_use]
    pub const fn new() -> Self {
        Self(BTreeMap::new())
    }

    /// Sum of bytes used by all stored rows.
    #[must_use]
    pub fn row_bytes(&self) -> usize {
        self.values().map(RawRow::len).sum()
    }
}

impl<R> RawStore<R>
where
    R: RecordKind + Serialize,
{
    /// Preload already-keyed records, e.g. a seed roster.
    pub fn with_records(records: impl IntoIterator<Item = R>) -> Result<Self, StoreError> {
        let mut store = Self::new();
        for item in records {
            let key = item.key().ok_or(StoreError::MissingKey)?;
            store.insert(key, RawRow::encode(&item)?);
        }

        Ok(store)
    }
}

impl<R> Repository<R> for RawStore<R>
where
    R: RecordKind + PatchRecord + Serialize + DeserializeOwned,
{
    fn list(&self) -> Result<Vec<R>, StoreError> {
        let mut rows = Vec::with_capacity(self.0.len());
        for raw in self.values() {
            rows.push(raw.try_decode::<R>()?);
        }
        record(StoreEvent::List {
            record: R::RECORD_NAME,
            rows: rows.len() as u64,
        });

        Ok(rows)
    }

    fn get(&self, key: &R::Key) -> Result<Option<R>, StoreError> {
        let found = match self.0.get(key) {
            None => None,
            Some(raw) => Some(raw.try_decode::<R>()?),
        };
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
        item.set_key(key.clone());
        self.insert(key, RawRow::encode(&item)?);
        record(StoreEvent::Create {
            record: R::RECORD_NAME,
        });

        Ok(item)
    }

    fn update(&mut self, key: &R::Key, patch: &RecordPatch) -> Result<R, StoreError> {
        let Some(raw) = self.0.get(key) else {
            record(StoreEvent::Load {
                record: R::RECORD_NAME,
                found: false,
            });

            return Err(StoreError::not_found(key));
        };

        let mut item: R = raw.try_decode()?;
        if let Err(err) = apply_patch(&mut item, patch) {
            record(StoreEvent::PatchRejected {
                record: R::RECORD_NAME,
            });

            return Err(err.into());
        }

        self.insert(key.clone(), RawRow::encode(&item)?);
        record(StoreEvent::Update {
            record: R::RECORD_NAME,
        });

        Ok(item)
    }

    fn len(&self) -> usize {
        self.0.len()
    }
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        patch::RecordPatch,
        user::{User, UserId, UserType, fixtures},
    };

    #[test]
    fn rows_round_trip_through_their_wire_form() {
        let store = RawStore::with_records(fixtures::mock_roster()).unwrap();
        let roster = store.list().unwrap();

        assert_eq!(roster, fixtures::mock_roster());
    }

    #[test]
    fn get_decodes_a_single_row() {
        let store = RawStore::with_records(fixtures::mock_roster()).unwrap();
        let key = fixtures::tom_sawyer().id.unwrap();

        let tom = store.get(&key).unwrap().unwrap();
        assert_eq!(tom, fixtures::tom_sawyer());
    }

    #[test]
    fn create_assigns_a_key_and_persists_the_row() {
        let mut store: RawStore<User> = RawStore::new();
        let stored = store
            .create(User {
                id: None,
                first_name: "Becky".to_string(),
                last_name: "Thatcher".to_string(),
                phone_number: None,
                email: "becky@example.com".to_string(),
                user_type: UserType::Basic,
            })
            .unwrap();

        let key = stored.id.expect("create must assign an id");
        assert_eq!(store.get(&key).unwrap(), Some(stored));
    }

    #[test]
    fn update_rewrites_the_serialized_row() {
        let mut store = RawStore::with_records(fixtures::mock_roster()).unwrap();
        let key = fixtures::tom_sawyer().id.unwrap();

        let mut patch = RecordPatch::new();
        patch.set("firstName", "Thomas");
        let updated = store.update(&key, &patch).unwrap();

        assert_eq!(updated.first_name, "Thomas");
        assert_eq!(store.get(&key).unwrap().unwrap().first_name, "Thomas");
    }

    #[test]
    fn corrupt_row_surfaces_as_store_corruption() {
        let mut store: RawStore<User> = RawStore::new();
        let key = UserId::generate();
        store.insert(key, RawRow::try_new(b"not json".to_vec()).unwrap());

        let err = store.get(&key).unwrap_err();
        assert!(matches!(err, StoreError::Corrupt { .. }));
        assert!(store.list().is_err());
    }

    #[test]
    fn oversized_row_is_rejected() {
        let err = RawRow::try_new(vec![0u8; MAX_ROW_BYTES + 1]).unwrap_err();
        assert!(matches!(err, RawRowError::TooLarge { .. }));
    }

    #[test]
    fn row_bytes_tracks_stored_size() {
        let store = RawStore::with_records(vec![fixtures::tom_sawyer()]).unwrap();
        assert!(store.row_bytes() > 0);
        assert_eq!(
            store.row_bytes(),
            store.values().map(RawRow::len).sum::<usize>()
        );
    }
}
