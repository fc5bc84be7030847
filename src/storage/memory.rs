use super::Accessor;
use crate::error::{Result, RoomqlError};
use crate::model::Entity;
use std::collections::BTreeMap;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

/// Accessor backed by an in-process map keyed by entity id.
///
/// Listings come back ordered by id. Updates upsert.
pub struct MemoryStore<E> {
    entries: RwLock<BTreeMap<String, E>>,
}

impl<E: Entity> MemoryStore<E> {
    pub fn new() -> Self {
        Self {
            entries: RwLock::new(BTreeMap::new()),
        }
    }

    /// Builds a store pre-populated with `entities`.
    pub fn with_entries(entities: impl IntoIterator<Item = E>) -> Self {
        let entries = entities
            .into_iter()
            .map(|e| (e.id().to_string(), e))
            .collect();
        Self {
            entries: RwLock::new(entries),
        }
    }

    pub fn len(&self) -> Result<usize> {
        Ok(self.read()?.len())
    }

    pub fn is_empty(&self) -> Result<bool> {
        Ok(self.read()?.is_empty())
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, BTreeMap<String, E>>> {
        self.entries
            .read()
            .map_err(|_| RoomqlError::Storage(format!("{} store lock poisoned", E::KIND)))
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, BTreeMap<String, E>>> {
        self.entries
            .write()
            .map_err(|_| RoomqlError::Storage(format!("{} store lock poisoned", E::KIND)))
    }
}

impl<E: Entity> Default for MemoryStore<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: Entity> Accessor<E> for MemoryStore<E> {
    fn create(&self, entity: E) -> Result<E> {
        let mut entries = self.write()?;
        if entries.contains_key(entity.id()) {
            return Err(RoomqlError::Storage(format!(
                "{} with id '{}' already exists",
                E::KIND,
                entity.id()
            )));
        }
        entries.insert(entity.id().to_string(), entity.clone());
        Ok(entity)
    }

    fn fetch_by_id(&self, id: &str) -> Result<Option<E>> {
        Ok(self.read()?.get(id).cloned())
    }

    fn fetch_all(&self) -> Result<Option<Vec<E>>> {
        Ok(Some(self.read()?.values().cloned().collect()))
    }

    fn update(&self, id: &str, entity: E) -> Result<E> {
        self.write()?.insert(id.to_string(), entity.clone());
        Ok(entity)
    }

    fn delete(&self, id: &str) -> Result<bool> {
        Ok(self.write()?.remove(id).is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Room;

    #[test]
    fn test_create_then_fetch() {
        let store = MemoryStore::new();
        store.create(Room::new("1", 1.0, 2.0, 3.0)).unwrap();
        assert_eq!(
            store.fetch_by_id("1").unwrap(),
            Some(Room::new("1", 1.0, 2.0, 3.0))
        );
        assert_eq!(store.fetch_by_id("2").unwrap(), None);
    }

    #[test]
    fn test_duplicate_create_is_a_storage_error() {
        let store = MemoryStore::new();
        store.create(Room::new("1", 1.0, 2.0, 3.0)).unwrap();
        let err = store.create(Room::new("1", 4.0, 5.0, 6.0)).unwrap_err();
        assert!(matches!(err, RoomqlError::Storage(_)));
        assert!(err.to_string().contains("Room with id '1' already exists"));
    }

    #[test]
    fn test_empty_store_lists_empty_collection() {
        let store: MemoryStore<Room> = MemoryStore::new();
        assert_eq!(store.fetch_all().unwrap(), Some(Vec::new()));
        assert!(store.is_empty().unwrap());
    }

    #[test]
    fn test_listing_is_ordered_by_id() {
        let store = MemoryStore::with_entries([
            Room::new("b", 1.0, 1.0, 1.0),
            Room::new("a", 2.0, 2.0, 2.0),
        ]);
        let ids: Vec<String> = store
            .fetch_all()
            .unwrap()
            .unwrap()
            .into_iter()
            .map(|r| r.id)
            .collect();
        assert_eq!(ids, vec!["a", "b"]);
    }

    #[test]
    fn test_update_upserts_and_delete_reports() {
        let store = MemoryStore::new();
        store.update("5", Room::new("5", 1.0, 1.0, 1.0)).unwrap();
        assert_eq!(store.len().unwrap(), 1);
        assert!(store.delete("5").unwrap());
        assert!(!store.delete("5").unwrap());
    }

    #[test]
    fn test_poisoned_lock_is_a_storage_error() {
        let store = std::sync::Arc::new(MemoryStore::with_entries([Room::new(
            "1", 1.0, 1.0, 1.0,
        )]));
        let poisoner = store.clone();
        let _ = std::thread::spawn(move || {
            let _guard = poisoner.entries.write().unwrap();
            panic!("writer died");
        })
        .join();

        assert!(matches!(store.len(), Err(RoomqlError::Storage(_))));
        assert!(matches!(store.is_empty(), Err(RoomqlError::Storage(_))));
        assert!(matches!(store.fetch_by_id("1"), Err(RoomqlError::Storage(_))));
    }
}
