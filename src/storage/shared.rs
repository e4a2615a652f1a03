//! Thread-shareable storage handle.

use std::sync::Arc;

use parking_lot::{Mutex, MutexGuard};

use crate::storage::LibraryStorage;

/// A cloneable handle to one [`LibraryStorage`] behind a single lock.
///
/// The whole storage is guarded by one `Mutex`, so every operation run
/// through [`SharedStorage::with`] is one atomic step as seen by other
/// handles. Single-threaded callers should use `LibraryStorage` directly.
///
/// Neither the binary nor the [`Shell`](crate::Shell) goes through this
/// type; it is for library callers that drive one inventory from several
/// threads.
///
/// # Example
/// ```
/// use library_inventory::{Item, LibraryStorage, SharedStorage};
///
/// let shared = SharedStorage::new(LibraryStorage::new(1));
/// let other = shared.clone();
///
/// shared.with(|lib| lib.add_item(Item::magazine("M", "d", 1, "E", "A"), 0, 0))?;
/// assert_eq!(other.with(|lib| lib.item_count()), 1);
/// # Ok::<(), library_inventory::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct SharedStorage {
    inner: Arc<Mutex<LibraryStorage>>,
}

impl SharedStorage {
    pub fn new(storage: LibraryStorage) -> Self {
        Self {
            inner: Arc::new(Mutex::new(storage)),
        }
    }

    /// Run `f` with exclusive access to the storage.
    pub fn with<T>(&self, f: impl FnOnce(&mut LibraryStorage) -> T) -> T {
        let mut guard = self.inner.lock();
        f(&mut *guard)
    }

    /// Acquire the lock directly, for callers that chain several operations.
    #[inline]
    pub fn lock(&self) -> MutexGuard<'_, LibraryStorage> {
        self.inner.lock()
    }
}

impl From<LibraryStorage> for SharedStorage {
    fn from(storage: LibraryStorage) -> Self {
        Self::new(storage)
    }
}
