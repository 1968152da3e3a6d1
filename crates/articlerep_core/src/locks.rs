//! Per-key lock tables.
//!
//! The repository serializes mutation per key, not globally: one lock per
//! article-id slot (pre-allocated, addressed directly by id) and one lock
//! per author name and keyword (created on first use). Lock tables only
//! hand out locks; callers decide what each lock guards.

use crate::error::{RepoError, RepoResult};
use crate::types::ArticleId;
use parking_lot::{Mutex, RwLock};
use std::collections::HashMap;
use std::sync::Arc;

/// Pre-allocated lock table for the dense article-id space.
///
/// One slot per id in `[0, capacity)`. The slot for a given id exists for
/// the table's whole lifetime, so holding the slot's lock gives exclusive
/// access to all repository state keyed by that id.
pub(crate) struct IdLockTable {
    slots: Box<[Mutex<()>]>,
}

impl IdLockTable {
    /// Creates a table with one lock slot per id in `[0, capacity)`.
    pub(crate) fn new(capacity: usize) -> Self {
        Self {
            slots: (0..capacity).map(|_| Mutex::new(())).collect(),
        }
    }

    /// Returns the lock slot for `id`, or an out-of-capacity error.
    pub(crate) fn lock_for(&self, id: ArticleId) -> RepoResult<&Mutex<()>> {
        self.slots
            .get(id.as_usize())
            .ok_or_else(|| RepoError::id_out_of_capacity(id, self.slots.len()))
    }

    /// Returns the number of id slots.
    pub(crate) fn capacity(&self) -> usize {
        self.slots.len()
    }
}

/// Lazily-populated lock table keyed by author name or keyword.
///
/// Locks are created atomically on first use and never removed: once a key
/// has been written, its lock persists for the repository's lifetime even
/// after the corresponding index entry is deleted. The table therefore
/// grows monotonically with the set of distinct keys ever seen, and lock
/// absence is a reliable signal that a key has never been written.
pub(crate) struct KeyLockTable {
    locks: RwLock<HashMap<String, Arc<Mutex<()>>>>,
}

impl KeyLockTable {
    /// Creates an empty table with the given sizing hint.
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            locks: RwLock::new(HashMap::with_capacity(capacity)),
        }
    }

    /// Returns the lock for `key` if one has ever been created.
    pub(crate) fn get(&self, key: &str) -> Option<Arc<Mutex<()>>> {
        self.locks.read().get(key).cloned()
    }

    /// Returns the lock for `key`, installing one if absent.
    ///
    /// The install happens under the table's write lock, so two threads
    /// racing on a fresh key always end up sharing a single lock.
    pub(crate) fn get_or_create(&self, key: &str) -> Arc<Mutex<()>> {
        if let Some(lock) = self.get(key) {
            return lock;
        }
        let mut locks = self.locks.write();
        Arc::clone(
            locks
                .entry(key.to_owned())
                .or_insert_with(|| Arc::new(Mutex::new(()))),
        )
    }

    /// Returns the number of distinct keys ever locked.
    pub(crate) fn len(&self) -> usize {
        self.locks.read().len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    #[test]
    fn id_slot_in_range() {
        let table = IdLockTable::new(4);
        assert_eq!(table.capacity(), 4);
        assert!(table.lock_for(ArticleId::new(3)).is_ok());
    }

    #[test]
    fn id_slot_out_of_range() {
        let table = IdLockTable::new(4);
        let err = table.lock_for(ArticleId::new(4)).unwrap_err();
        assert!(matches!(
            err,
            RepoError::IdOutOfCapacity { capacity: 4, .. }
        ));
    }

    #[test]
    fn key_lock_absent_until_created() {
        let table = KeyLockTable::with_capacity(8);
        assert!(table.get("alice").is_none());
        table.get_or_create("alice");
        assert!(table.get("alice").is_some());
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn get_or_create_returns_same_lock() {
        let table = KeyLockTable::with_capacity(8);
        let a = table.get_or_create("ml");
        let b = table.get_or_create("ml");
        assert!(Arc::ptr_eq(&a, &b));
    }

    #[test]
    fn racing_creators_share_one_lock() {
        let table = Arc::new(KeyLockTable::with_capacity(8));

        let handles: Vec<_> = (0..8)
            .map(|_| {
                let table = Arc::clone(&table);
                thread::spawn(move || table.get_or_create("contended"))
            })
            .collect();

        let locks: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();
        assert!(locks.windows(2).all(|w| Arc::ptr_eq(&w[0], &w[1])));
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn key_lock_provides_mutual_exclusion() {
        let table = Arc::new(KeyLockTable::with_capacity(8));
        let lock = table.get_or_create("shared");
        let (tx, rx) = std::sync::mpsc::channel();

        let handle = {
            let table = Arc::clone(&table);
            thread::spawn(move || {
                let lock = table.get_or_create("shared");
                let _guard = lock.lock();
                tx.send(()).unwrap();
                thread::sleep(std::time::Duration::from_millis(50));
            })
        };

        // Wait until the other thread holds the lock, then contend on it.
        rx.recv().unwrap();
        let start = std::time::Instant::now();
        let _guard = lock.lock();
        assert!(start.elapsed() >= std::time::Duration::from_millis(40));
        handle.join().unwrap();
    }
}
