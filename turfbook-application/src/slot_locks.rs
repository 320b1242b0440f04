use std::{collections::HashSet, sync::Arc};

use parking_lot::{Condvar, Mutex};

use super::SlotKey;

#[derive(Debug, Default)]
struct Registry {
    held: Mutex<HashSet<SlotKey>>,
    released: Condvar,
}

/// Exclusive locks scoped to a single slot.
///
/// Only keys that are currently locked occupy memory. Locks on
/// different slots never block each other.
#[derive(Debug, Clone, Default)]
pub struct SlotLocks {
    registry: Arc<Registry>,
}

/// Releases the lock of a slot when dropped.
#[derive(Debug)]
pub struct SlotGuard {
    registry: Arc<Registry>,
    key: SlotKey,
}

impl SlotLocks {
    pub fn new() -> Self {
        Self::default()
    }

    /// Blocks until the slot is available.
    pub fn lock(&self, key: &SlotKey) -> SlotGuard {
        let mut held = self.registry.held.lock();
        while held.contains(key) {
            self.registry.released.wait(&mut held);
        }
        held.insert(key.clone());
        SlotGuard {
            registry: Arc::clone(&self.registry),
            key: key.clone(),
        }
    }

    pub fn is_locked(&self, key: &SlotKey) -> bool {
        self.registry.held.lock().contains(key)
    }

    pub fn locked_count(&self) -> usize {
        self.registry.held.lock().len()
    }
}

impl Drop for SlotGuard {
    fn drop(&mut self) {
        let removed = self.registry.held.lock().remove(&self.key);
        debug_assert!(removed);
        self.registry.released.notify_all();
    }
}
