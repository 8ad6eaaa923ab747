use serde::{Serialize, de::DeserializeOwned};

use crate::{Favorites, KeyValueStore, StorageError, WeeklyPlan};

pub const DEFAULT_PLAN_KEY: &str = "rfmp.plan.v1";
pub const DEFAULT_FAVORITES_KEY: &str = "rfmp.favs.v1";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StorageKeys {
    pub plan: String,
    pub favorites: String,
}

impl Default for StorageKeys {
    fn default() -> Self {
        Self {
            plan: DEFAULT_PLAN_KEY.to_owned(),
            favorites: DEFAULT_FAVORITES_KEY.to_owned(),
        }
    }
}

/// Logical documents kept in the store.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Document {
    Plan,
    Favorites,
}

/// Reads and writes the plan and favorites documents.
///
/// Nothing is cached: every load goes back to the store so a write made by
/// another context is always observed.
pub struct Persistence<S> {
    store: S,
    keys: StorageKeys,
}

impl<S: KeyValueStore> Persistence<S> {
    pub fn new(store: S, keys: StorageKeys) -> Self {
        Self { store, keys }
    }

    pub fn document(&self, key: &str) -> Option<Document> {
        if key == self.keys.plan {
            Some(Document::Plan)
        } else if key == self.keys.favorites {
            Some(Document::Favorites)
        } else {
            None
        }
    }

    pub fn load_plan(&self) -> WeeklyPlan {
        self.load(&self.keys.plan)
    }

    pub fn save_plan(&self, plan: &WeeklyPlan) -> Result<(), StorageError> {
        self.save(&self.keys.plan, plan)
    }

    pub fn load_favorites(&self) -> Favorites {
        self.load(&self.keys.favorites)
    }

    pub fn save_favorites(&self, favorites: &Favorites) -> Result<(), StorageError> {
        self.save(&self.keys.favorites, favorites)
    }

    /// Deletes both documents. Both removals are attempted even if one fails.
    pub fn reset_all(&self) -> Result<(), StorageError> {
        let plan = self.store.remove(&self.keys.plan);
        let favorites = self.store.remove(&self.keys.favorites);
        plan.and(favorites)?;

        tracing::info!("plan and favorites reset");

        Ok(())
    }

    fn load<T: DeserializeOwned + Default>(&self, key: &str) -> T {
        let raw = match self.store.get(key) {
            Ok(Some(raw)) => raw,
            Ok(None) => return T::default(),
            Err(err) => {
                tracing::warn!(key, err = %err, "failed to read document, using default");

                return T::default();
            }
        };

        // `null` is what an emptied document looks like
        match serde_json::from_str::<Option<T>>(&raw) {
            Ok(value) => value.unwrap_or_default(),
            Err(err) => {
                tracing::warn!(key, err = %err, "corrupt document, using default");

                T::default()
            }
        }
    }

    fn save<T: Serialize>(&self, key: &str, value: &T) -> Result<(), StorageError> {
        let raw = serde_json::to_string(value)?;

        if let Err(err) = self.store.set(key, &raw) {
            tracing::error!(key, err = %err, "failed to write document");

            return Err(err);
        }

        tracing::debug!(key, "document saved");

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::MemoryStore;

    use super::*;

    #[test]
    fn document_lookup_by_key() {
        let persistence = Persistence::new(MemoryStore::new(), StorageKeys::default());

        assert_eq!(persistence.document("rfmp.plan.v1"), Some(Document::Plan));
        assert_eq!(persistence.document("rfmp.favs.v1"), Some(Document::Favorites));
        assert_eq!(persistence.document("theme"), None);
    }

    #[test]
    fn null_document_loads_default() {
        let store = MemoryStore::new();
        store.set(DEFAULT_PLAN_KEY, "null").unwrap();
        store.set(DEFAULT_FAVORITES_KEY, "null").unwrap();
        let persistence = Persistence::new(store, StorageKeys::default());

        assert!(persistence.load_plan().is_empty());
        assert!(persistence.load_favorites().is_empty());
    }
}
