// ── Session employee store ──
//
// Explicitly constructed, cheaply cloneable handle over the employee
// list and the API client. One store per application session; clones
// share state.

use std::sync::Arc;

use staffdir_api::DirectoryClient;

use super::list::EmployeeList;
use crate::config::{DeletePolicy, DirectoryConfig};
use crate::error::CoreError;
use crate::model::{Employee, EmployeeId};
use crate::stream::{EmployeeStream, filter_employees};

/// An immutable point-in-time copy of the employee list.
pub type Snapshot = Arc<Vec<Employee>>;

/// Single source of truth for the employee list visible to the UI.
///
/// Reads are synchronous and reflect the last fetched or mutated state,
/// never the server's live state. Mutating operations live in
/// `operations.rs`.
#[derive(Clone)]
pub struct EmployeeStore {
    inner: Arc<StoreInner>,
}

struct StoreInner {
    client: DirectoryClient,
    list: EmployeeList,
    delete_policy: DeletePolicy,
}

impl EmployeeStore {
    /// Build a store and its HTTP client from configuration. Does not
    /// touch the network; call [`fetch_all()`](Self::fetch_all) to load.
    pub fn new(config: &DirectoryConfig) -> Result<Self, CoreError> {
        let client = DirectoryClient::new(config.base_url.clone(), &config.transport())?;
        Ok(Self::with_client(client, config.delete_policy))
    }

    /// Build a store around an existing client.
    pub fn with_client(client: DirectoryClient, delete_policy: DeletePolicy) -> Self {
        Self {
            inner: Arc::new(StoreInner {
                client,
                list: EmployeeList::new(),
                delete_policy,
            }),
        }
    }

    pub fn delete_policy(&self) -> DeletePolicy {
        self.inner.delete_policy
    }

    pub(crate) fn client(&self) -> &DirectoryClient {
        &self.inner.client
    }

    pub(crate) fn list(&self) -> &EmployeeList {
        &self.inner.list
    }

    // ── Reads ────────────────────────────────────────────────────────

    /// The current snapshot.
    pub fn snapshot(&self) -> Snapshot {
        self.inner.list.snapshot()
    }

    pub fn len(&self) -> usize {
        self.inner.list.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Number of snapshots published since construction.
    pub fn version(&self) -> u64 {
        self.inner.list.version()
    }

    /// Look up an employee in the local list. Never touches the network.
    pub fn find_by_id(&self, id: EmployeeId) -> Option<Employee> {
        self.inner.list.get_by_id(id)
    }

    /// Current position of the employee carrying `id`.
    pub fn position_of(&self, id: EmployeeId) -> Option<usize> {
        self.inner.list.position_of(id)
    }

    /// Filter the current snapshot by free-text query.
    pub fn search(&self, query: &str) -> Vec<Employee> {
        filter_employees(&self.snapshot(), query)
    }

    // ── Subscriptions ────────────────────────────────────────────────

    /// Subscribe to list snapshots. The current snapshot is available
    /// immediately; later ones arrive once per mutation, latest wins.
    pub fn subscribe(&self) -> EmployeeStream {
        EmployeeStream::new(self.inner.list.subscribe())
    }
}

impl std::fmt::Debug for EmployeeStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EmployeeStore")
            .field("base_url", &self.inner.client.base_url().as_str())
            .field("len", &self.len())
            .field("delete_policy", &self.inner.delete_policy)
            .finish()
    }
}
