//! Key-value stores the session gate persists into.
//!
//! The gate only needs `get`/`set`/`remove` on string values. Stores are
//! synchronous: a browser's store is loaded into a [`SessionStorage`] snapshot
//! at the start of a request and committed back once the action is done.

use std::collections::{BTreeMap, HashMap};

use tower_sessions::Session;

/// Local persistent key-value store with get/set/remove semantics.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: String);
    fn remove(&mut self, key: &str);
}

impl<T: KeyValueStore + ?Sized> KeyValueStore for &mut T {
    fn get(&self, key: &str) -> Option<String> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: String) {
        (**self).set(key, value);
    }

    fn remove(&mut self, key: &str) {
        (**self).remove(key);
    }
}

/// Process-local store.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryStorage {
    entries: HashMap<String, String>,
}

impl MemoryStorage {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl KeyValueStore for MemoryStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: String) {
        self.entries.insert(key.to_owned(), value);
    }

    fn remove(&mut self, key: &str) {
        self.entries.remove(key);
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Pending {
    Set(String),
    Remove,
}

/// Snapshot of selected keys of a browser's tower-sessions session.
///
/// Reads see pending writes. Nothing reaches the session until [`commit`].
///
/// [`commit`]: SessionStorage::commit
#[derive(Debug, Clone, Default)]
pub struct SessionStorage {
    loaded: HashMap<String, String>,
    pending: BTreeMap<String, Pending>,
}

impl SessionStorage {
    /// Load `keys` from the session.
    ///
    /// Values that are not JSON strings are surfaced in their JSON text form;
    /// the gate treats them as malformed and removes them on its first check.
    ///
    /// # Errors
    ///
    /// Returns an error if the session store cannot be read.
    pub async fn load(
        session: &Session,
        keys: &[&str],
    ) -> Result<Self, tower_sessions::session::Error> {
        let mut loaded = HashMap::with_capacity(keys.len());
        for key in keys {
            match session.get::<serde_json::Value>(key).await? {
                Some(serde_json::Value::String(value)) => {
                    loaded.insert((*key).to_owned(), value);
                }
                Some(other) => {
                    loaded.insert((*key).to_owned(), other.to_string());
                }
                None => {}
            }
        }
        Ok(Self {
            loaded,
            pending: BTreeMap::new(),
        })
    }

    /// Whether anything was written or removed since loading.
    #[must_use]
    pub fn is_dirty(&self) -> bool {
        !self.pending.is_empty()
    }

    /// Apply pending writes and removals to the session and keep using the
    /// snapshot. Afterwards it is clean and matches the session.
    ///
    /// # Errors
    ///
    /// Returns an error if the session store cannot be written. Changes not
    /// yet applied stay pending.
    pub async fn flush(&mut self, session: &Session) -> Result<(), tower_sessions::session::Error> {
        while let Some((key, change)) = self.pending.pop_first() {
            let applied = match &change {
                Pending::Set(value) => session.insert(&key, value).await,
                Pending::Remove => session.remove_value(&key).await.map(|_| ()),
            };
            if let Err(e) = applied {
                self.pending.insert(key, change);
                return Err(e);
            }
            match change {
                Pending::Set(value) => {
                    self.loaded.insert(key, value);
                }
                Pending::Remove => {
                    self.loaded.remove(&key);
                }
            }
        }
        Ok(())
    }

    /// Apply pending writes and removals to the session.
    ///
    /// # Errors
    ///
    /// Returns an error if the session store cannot be written.
    pub async fn commit(mut self, session: &Session) -> Result<(), tower_sessions::session::Error> {
        self.flush(session).await
    }
}

impl KeyValueStore for SessionStorage {
    fn get(&self, key: &str) -> Option<String> {
        match self.pending.get(key) {
            Some(Pending::Set(value)) => Some(value.clone()),
            Some(Pending::Remove) => None,
            None => self.loaded.get(key).cloned(),
        }
    }

    fn set(&mut self, key: &str, value: String) {
        self.pending.insert(key.to_owned(), Pending::Set(value));
    }

    fn remove(&mut self, key: &str) {
        self.pending.insert(key.to_owned(), Pending::Remove);
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::sync::Arc;

    use tower_sessions::MemoryStore;

    use super::*;

    #[test]
    fn test_memory_storage_round_trip() {
        let mut storage = MemoryStorage::new();
        assert!(storage.get("k").is_none());

        storage.set("k", "v".to_string());
        assert_eq!(storage.get("k").as_deref(), Some("v"));
        assert_eq!(storage.len(), 1);

        storage.remove("k");
        storage.remove("k");
        assert!(storage.is_empty());
    }

    #[test]
    fn test_snapshot_reads_see_pending_writes() {
        let mut storage = SessionStorage::default();
        storage.loaded.insert("k".to_string(), "old".to_string());

        assert_eq!(storage.get("k").as_deref(), Some("old"));
        assert!(!storage.is_dirty());

        storage.set("k", "new".to_string());
        assert_eq!(storage.get("k").as_deref(), Some("new"));

        storage.remove("k");
        assert!(storage.get("k").is_none());
        assert!(storage.is_dirty());
    }

    #[tokio::test]
    async fn test_commit_writes_through_to_session() {
        let session = Session::new(None, Arc::new(MemoryStore::default()), None);
        session.insert("gone", "x").await.unwrap();
        session.insert("kept", "y").await.unwrap();

        let mut storage = SessionStorage::load(&session, &["gone", "kept", "new"])
            .await
            .unwrap();
        assert_eq!(storage.get("gone").as_deref(), Some("x"));
        assert!(storage.get("new").is_none());

        storage.remove("gone");
        storage.set("new", "z".to_string());
        storage.commit(&session).await.unwrap();

        assert!(session.get::<String>("gone").await.unwrap().is_none());
        assert_eq!(session.get::<String>("kept").await.unwrap().as_deref(), Some("y"));
        assert_eq!(session.get::<String>("new").await.unwrap().as_deref(), Some("z"));
    }

    #[tokio::test]
    async fn test_flush_leaves_a_clean_snapshot() {
        let session = Session::new(None, Arc::new(MemoryStore::default()), None);
        session.insert("stale", "x").await.unwrap();

        let mut storage = SessionStorage::load(&session, &["stale", "fresh"])
            .await
            .unwrap();
        storage.remove("stale");
        storage.set("fresh", "y".to_string());
        storage.flush(&session).await.unwrap();

        assert!(!storage.is_dirty());
        assert!(storage.get("stale").is_none());
        assert_eq!(storage.get("fresh").as_deref(), Some("y"));
        assert!(session.get::<String>("stale").await.unwrap().is_none());
        assert_eq!(session.get::<String>("fresh").await.unwrap().as_deref(), Some("y"));
    }

    #[tokio::test]
    async fn test_non_string_values_are_surfaced_raw() {
        let session = Session::new(None, Arc::new(MemoryStore::default()), None);
        session.insert("k", 42).await.unwrap();

        let storage = SessionStorage::load(&session, &["k"]).await.unwrap();
        assert_eq!(storage.get("k").as_deref(), Some("42"));
    }
}
