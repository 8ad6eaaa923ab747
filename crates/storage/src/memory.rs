use std::{
    cell::{Cell, RefCell},
    collections::BTreeMap,
    rc::Rc,
};

use tokio::sync::broadcast;

use crate::{KeyValueStore, StorageChange, StorageError};

const CHANGE_CAPACITY: usize = 64;

struct Origin {
    items: RefCell<BTreeMap<String, String>>,
    contexts: RefCell<Vec<(u64, broadcast::Sender<StorageChange>)>>,
    next_context: Cell<u64>,
    quota: Cell<Option<usize>>,
}

impl Origin {
    fn used_bytes(&self) -> usize {
        self.items
            .borrow()
            .iter()
            .map(|(k, v)| k.len() + v.len())
            .sum()
    }

    fn notify_others(&self, from: u64, change: StorageChange) {
        for (context, sender) in self.contexts.borrow().iter() {
            if *context == from {
                continue;
            }

            // no receivers yet is fine
            let _ = sender.send(change.clone());
        }
    }
}

/// One browsing context on an origin. Leaving it detaches its change feed.
struct Context {
    origin: Rc<Origin>,
    id: u64,
    changes: broadcast::Sender<StorageChange>,
}

impl Drop for Context {
    fn drop(&mut self) {
        self.origin
            .contexts
            .borrow_mut()
            .retain(|(context, _)| *context != self.id);
    }
}

/// In-memory store shared by every browsing context of one origin.
///
/// Clones are the same context. Writes made through one context are
/// announced to the subscribers of every other context, never to the writer.
#[derive(Clone)]
pub struct MemoryStore {
    context: Rc<Context>,
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryStore {
    pub fn new() -> Self {
        let origin = Rc::new(Origin {
            items: RefCell::new(BTreeMap::new()),
            contexts: RefCell::new(Vec::new()),
            next_context: Cell::new(0),
            quota: Cell::new(None),
        });

        Self::attach(origin)
    }

    fn attach(origin: Rc<Origin>) -> Self {
        let id = origin.next_context.get();
        origin.next_context.set(id + 1);

        let (changes, _) = broadcast::channel(CHANGE_CAPACITY);
        origin.contexts.borrow_mut().push((id, changes.clone()));

        Self {
            context: Rc::new(Context {
                origin,
                id,
                changes,
            }),
        }
    }

    fn origin(&self) -> &Origin {
        &self.context.origin
    }

    /// Opens another browsing context (a second tab) on the same origin.
    pub fn open_context(&self) -> Self {
        Self::attach(self.context.origin.clone())
    }

    pub fn subscribe(&self) -> broadcast::Receiver<StorageChange> {
        self.context.changes.subscribe()
    }

    /// Caps the total size of keys and values, mirroring browser quotas.
    pub fn set_quota(&self, bytes: Option<usize>) {
        self.origin().quota.set(bytes);
    }

    pub fn clear(&self) {
        self.origin().items.borrow_mut().clear();
        self.origin()
            .notify_others(self.context.id, StorageChange::cleared());
    }

    pub fn keys(&self) -> Vec<String> {
        self.origin().items.borrow().keys().cloned().collect()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.origin().items.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        if let Some(quota) = self.origin().quota.get() {
            let current = self
                .origin()
                .items
                .borrow()
                .get(key)
                .map(|v| key.len() + v.len())
                .unwrap_or_default();
            let after = self.origin().used_bytes() - current + key.len() + value.len();

            if after > quota {
                return Err(StorageError::QuotaExceeded {
                    key: key.to_owned(),
                });
            }
        }

        let previous = self
            .origin()
            .items
            .borrow_mut()
            .insert(key.to_owned(), value.to_owned());

        if previous.as_deref() != Some(value) {
            self.origin()
                .notify_others(self.context.id, StorageChange::key(key));
        }

        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        let removed = self.origin().items.borrow_mut().remove(key);

        if removed.is_some() {
            self.origin()
                .notify_others(self.context.id, StorageChange::key(key));
        }

        Ok(())
    }
}
