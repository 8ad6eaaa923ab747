/// Origin-scoped string key-value storage, the shape of `window.localStorage`.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, crate::StorageError>;

    fn set(&self, key: &str, value: &str) -> Result<(), crate::StorageError>;

    fn remove(&self, key: &str) -> Result<(), crate::StorageError>;
}

/// Notification that another browsing context changed the store.
///
/// `key` is `None` when the whole store was cleared.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StorageChange {
    pub key: Option<String>,
}

impl StorageChange {
    pub fn key(key: impl Into<String>) -> Self {
        Self {
            key: Some(key.into()),
        }
    }

    pub fn cleared() -> Self {
        Self { key: None }
    }
}
