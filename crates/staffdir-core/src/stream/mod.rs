// ── Reactive employee streams ──
//
// Subscription types for consuming list changes from the EmployeeStore,
// plus the search helpers that run over their snapshots.

mod debounce;
mod filter;

use std::pin::Pin;
use std::task::{Context, Poll};

use futures_core::Stream;
use tokio::sync::watch;
use tokio_stream::wrappers::WatchStream;

use crate::store::Snapshot;

pub use debounce::{SEARCH_DEBOUNCE, debounce_queries};
pub use filter::{EmployeeFilter, filter_employees};

/// A subscription to the employee list.
///
/// Provides both point-in-time snapshot access and change notification
/// via [`changed()`](Self::changed) or by converting to a `Stream`.
/// Nothing but snapshots ever travels through it: operation errors are
/// returned by the operations themselves.
pub struct EmployeeStream {
    current: Snapshot,
    receiver: watch::Receiver<Snapshot>,
}

impl EmployeeStream {
    pub(crate) fn new(mut receiver: watch::Receiver<Snapshot>) -> Self {
        let current = receiver.borrow_and_update().clone();
        Self { current, receiver }
    }

    /// The snapshot captured at subscription time or by the last `changed()`.
    pub fn current(&self) -> &Snapshot {
        &self.current
    }

    /// The latest snapshot (may have changed since `current()`).
    pub fn latest(&self) -> Snapshot {
        self.receiver.borrow().clone()
    }

    /// Wait for the next change, returning the new snapshot.
    ///
    /// Intermediate snapshots published while the caller was busy are
    /// skipped. Returns `None` only once every store handle is dropped.
    pub async fn changed(&mut self) -> Option<Snapshot> {
        self.receiver.changed().await.ok()?;
        let snap = self.receiver.borrow_and_update().clone();
        self.current = snap.clone();
        Some(snap)
    }

    /// Convert into a `Stream` that yields the current snapshot first,
    /// then one per change.
    pub fn into_stream(self) -> EmployeeWatchStream {
        EmployeeWatchStream {
            inner: WatchStream::new(self.receiver),
        }
    }
}

/// `Stream` adapter backed by a `watch::Receiver`.
pub struct EmployeeWatchStream {
    inner: WatchStream<Snapshot>,
}

impl Stream for EmployeeWatchStream {
    type Item = Snapshot;

    fn poll_next(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        Pin::new(&mut self.inner).poll_next(cx)
    }
}
