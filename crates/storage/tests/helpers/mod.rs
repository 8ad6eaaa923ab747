use mealweek_storage::{MemoryStore, Persistence, StorageKeys};

pub fn persistence(store: &MemoryStore) -> Persistence<MemoryStore> {
    Persistence::new(store.clone(), StorageKeys::default())
}
