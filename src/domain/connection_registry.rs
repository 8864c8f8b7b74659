//! Ordered store of open event-stream clients.
//!
//! [`ConnectionRegistry`] keeps every registered [`ClientHandle`] in
//! connection order behind a single [`Mutex`]. The lock only covers
//! structural changes (append and remove); sends run outside it against
//! shared `Arc` handles.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use super::{ClientHandle, ClientId};

/// Outcome of one walk over the registry.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PassReport {
    /// Handles the action ran on.
    pub delivered: usize,
    /// Dead handles removed during the walk.
    pub pruned: usize,
}

/// Process-wide set of open event-stream clients.
///
/// # Concurrency
///
/// - `register` and pruning are mutually exclusive.
/// - [`for_each_live`](Self::for_each_live) invokes its action without
///   holding the lock, so sends from overlapping passes may interleave.
/// - [`count`](Self::count) reads an atomic mirror of the sequence length
///   and may briefly lag a concurrent mutation.
#[derive(Debug, Default)]
pub struct ConnectionRegistry {
    clients: Mutex<Vec<Arc<ClientHandle>>>,
    /// Always written under the `clients` lock.
    count: AtomicUsize,
}

impl ConnectionRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a handle at the end of the fan-out order.
    pub fn register(&self, handle: Arc<ClientHandle>) {
        let id = handle.id();
        let mut clients = self.lock();
        clients.push(handle);
        self.count.store(clients.len(), Ordering::Release);
        drop(clients);
        tracing::debug!(client_id = %id, "client registered");
    }

    /// Walks the registry once in connection order.
    ///
    /// Handles that report dead are removed and skipped; every other
    /// handle is passed to `action`. The walk covers the handles present
    /// when it starts. A handle that dies while `action` runs stays
    /// registered until the next walk.
    pub fn for_each_live<F>(&self, mut action: F) -> PassReport
    where
        F: FnMut(&ClientHandle),
    {
        let snapshot = self.lock().clone();
        let mut report = PassReport::default();

        for handle in snapshot {
            if handle.is_dead() {
                if self.remove(handle.id()) {
                    report.pruned += 1;
                }
                continue;
            }
            action(&handle);
            report.delivered += 1;
        }

        report
    }

    /// Returns the number of registered handles.
    #[must_use]
    pub fn count(&self) -> usize {
        self.count.load(Ordering::Acquire)
    }

    /// Returns `true` if no handle is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.count() == 0
    }

    /// Removes the handle with the given id, if still present.
    ///
    /// Returns `false` when an overlapping walk already removed it.
    fn remove(&self, id: ClientId) -> bool {
        let mut clients = self.lock();
        let Some(position) = clients.iter().position(|c| c.id() == id) else {
            return false;
        };
        clients.remove(position);
        self.count.store(clients.len(), Ordering::Release);
        drop(clients);
        tracing::debug!(client_id = %id, "dead client pruned");
        true
    }

    fn lock(&self) -> MutexGuard<'_, Vec<Arc<ClientHandle>>> {
        self.clients.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
