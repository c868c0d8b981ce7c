// ── Watched employee list ──
//
// The `watch` channel's value *is* the list: every mutation builds a new
// `Vec` under the channel's write lock and swaps it in, so the published
// snapshot and the store contents can never drift apart. The version is
// bumped under the same lock.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use tokio::sync::watch;

use super::Snapshot;
use crate::model::{Employee, EmployeeId};

/// Ordered employee list with snapshot publication.
///
/// Every mutation publishes a freshly allocated snapshot; subscribers
/// holding an older `Arc` keep seeing exactly what they were handed.
pub(crate) struct EmployeeList {
    /// Current snapshot; doubles as the authoritative sequence.
    snapshot: watch::Sender<Snapshot>,

    /// Bumped once per published snapshot, inside the send closure, so a
    /// reader that sees a snapshot never sees an older version.
    version: AtomicU64,
}

impl EmployeeList {
    pub(crate) fn new() -> Self {
        let (snapshot, _) = watch::channel(Arc::new(Vec::new()));
        Self {
            snapshot,
            version: AtomicU64::new(0),
        }
    }

    /// Replace the whole sequence. Returns the published snapshot.
    pub(crate) fn replace(&self, employees: Vec<Employee>) -> Snapshot {
        let snap = Arc::new(employees);
        self.snapshot.send_modify(|current| {
            *current = Arc::clone(&snap);
            self.bump_version();
        });
        snap
    }

    /// Append one employee.
    pub(crate) fn push(&self, employee: Employee) {
        self.snapshot.send_modify(|snap| {
            let mut next = Vec::with_capacity(snap.len() + 1);
            next.extend(snap.iter().cloned());
            next.push(employee);
            *snap = Arc::new(next);
            self.bump_version();
        });
    }

    /// Insert at `index`, clamped to the current length.
    pub(crate) fn insert(&self, index: usize, employee: Employee) {
        self.snapshot.send_modify(|snap| {
            let mut next = Vec::clone(snap);
            next.insert(index.min(next.len()), employee);
            *snap = Arc::new(next);
            self.bump_version();
        });
    }

    /// Replace the employee carrying `id`. Publishes only on a hit.
    pub(crate) fn replace_by_id(&self, id: EmployeeId, employee: Employee) -> bool {
        self.snapshot.send_if_modified(|snap| {
            let Some(pos) = snap.iter().position(|e| e.id == Some(id)) else {
                return false;
            };
            let mut next = Vec::clone(snap);
            next[pos] = employee;
            *snap = Arc::new(next);
            self.bump_version();
            true
        })
    }

    /// Remove the employee carrying `id`, returning its former position.
    pub(crate) fn remove_by_id(&self, id: EmployeeId) -> Option<(usize, Employee)> {
        let mut removed = None;
        self.snapshot.send_if_modified(|snap| {
            let Some(pos) = snap.iter().position(|e| e.id == Some(id)) else {
                return false;
            };
            let mut next = Vec::clone(snap);
            removed = Some((pos, next.remove(pos)));
            *snap = Arc::new(next);
            self.bump_version();
            true
        });
        removed
    }

    pub(crate) fn get_by_id(&self, id: EmployeeId) -> Option<Employee> {
        self.snapshot
            .borrow()
            .iter()
            .find(|e| e.id == Some(id))
            .cloned()
    }

    pub(crate) fn position_of(&self, id: EmployeeId) -> Option<usize> {
        self.snapshot.borrow().iter().position(|e| e.id == Some(id))
    }

    /// Get the current snapshot (cheap `Arc` clone).
    pub(crate) fn snapshot(&self) -> Snapshot {
        self.snapshot.borrow().clone()
    }

    pub(crate) fn subscribe(&self) -> watch::Receiver<Snapshot> {
        self.snapshot.subscribe()
    }

    pub(crate) fn len(&self) -> usize {
        self.snapshot.borrow().len()
    }

    pub(crate) fn version(&self) -> u64 {
        self.version.load(Ordering::SeqCst)
    }

    fn bump_version(&self) {
        self.version.fetch_add(1, Ordering::SeqCst);
    }
}
