// ── Store operations ──
//
// Each operation pairs one REST call with one local mutation. Fetch,
// create and update mutate only after the server confirms; delete
// removes locally first and reconciles per `DeletePolicy`. Updates and
// deletes locate their target by id at mutation time, so a positional
// index captured before the await can never hit the wrong record.

use staffdir_api::UserRecord;
use tracing::{debug, info, warn};

use super::{EmployeeStore, Snapshot};
use crate::config::DeletePolicy;
use crate::error::{CoreError, RemoteOperation};
use crate::model::{Employee, EmployeeId};

/// Result of a delete. Deletes never return `Err`: failures are logged
/// and reported here.
#[derive(Debug)]
#[must_use]
pub enum DeleteOutcome {
    /// Invalid input; nothing was removed and no request was sent.
    Rejected(CoreError),
    /// Removed locally and on the server.
    Deleted,
    /// Removed locally; the server call failed and the removal stands.
    RemoteFailed(CoreError),
    /// The server call failed and the local removal was undone.
    RolledBack(CoreError),
}

impl DeleteOutcome {
    /// `true` if the employee is absent from the local list afterwards.
    pub fn is_removed(&self) -> bool {
        matches!(self, Self::Deleted | Self::RemoteFailed(_))
    }

    pub fn error(&self) -> Option<&CoreError> {
        match self {
            Self::Deleted => None,
            Self::Rejected(e) | Self::RemoteFailed(e) | Self::RolledBack(e) => Some(e),
        }
    }
}

impl EmployeeStore {
    /// Load every employee, replacing the local list wholesale.
    ///
    /// On failure the local list is left as it was and nothing is published.
    pub async fn fetch_all(&self) -> Result<Snapshot, CoreError> {
        let records = self
            .client()
            .list_users()
            .await
            .map_err(|e| CoreError::remote(RemoteOperation::Fetch, e))?;

        let employees: Vec<Employee> = records.into_iter().map(Employee::from).collect();
        info!(count = employees.len(), "employee list loaded");
        Ok(self.list().replace(employees))
    }

    /// Create an employee and append the server's copy to the list.
    pub async fn create(&self, employee: Employee) -> Result<Employee, CoreError> {
        if employee.is_blank() {
            return Err(CoreError::MissingRecord);
        }

        let record = UserRecord::from(employee);
        let created = self
            .client()
            .create_user(&record)
            .await
            .map_err(|e| CoreError::remote(RemoteOperation::Create, e))?;

        let created = Employee::from(created);
        self.list().push(created.clone());
        info!(id = ?created.id, "employee created");
        Ok(created)
    }

    /// Update the employee shown at `index`.
    ///
    /// The index is validated against the current list before any request;
    /// the mutation itself is addressed by the record's id.
    pub async fn update_at(&self, index: usize, employee: Employee) -> Result<Employee, CoreError> {
        let len = self.len();
        if index >= len {
            return Err(CoreError::InvalidIndex { index, len });
        }
        self.update(employee).await
    }

    /// Update an employee by id and replace the local copy in place.
    pub async fn update(&self, employee: Employee) -> Result<Employee, CoreError> {
        let id = employee.id.ok_or(CoreError::MissingId)?;

        let record = UserRecord::from(employee);
        let updated = self
            .client()
            .update_user(id.get(), &record)
            .await
            .map_err(|e| CoreError::remote(RemoteOperation::Update, e))?;

        let mut updated = Employee::from(updated);
        if updated.id.is_none() {
            updated.id = Some(id);
        }

        if self.list().replace_by_id(id, updated.clone()) {
            info!(%id, "employee updated");
        } else {
            warn!(%id, "updated employee is no longer in the local list");
        }
        Ok(updated)
    }

    /// Delete the employee shown at `index` whose id is `id`.
    ///
    /// Rejects without any request when `index` is out of bounds, `id`
    /// is blank or malformed, or the employee at `index` carries another id.
    pub async fn delete_at(&self, index: usize, id: &str) -> DeleteOutcome {
        let len = self.len();
        if index >= len {
            let err = CoreError::InvalidIndex { index, len };
            warn!(error = %err, "delete rejected");
            return DeleteOutcome::Rejected(err);
        }

        let id = match id.parse::<EmployeeId>() {
            Ok(id) => id,
            Err(err) => {
                warn!(error = %err, "delete rejected");
                return DeleteOutcome::Rejected(err);
            }
        };

        if self.position_of(id) != Some(index) {
            let err = CoreError::IdMismatch { index, id };
            warn!(error = %err, "delete rejected");
            return DeleteOutcome::Rejected(err);
        }

        self.delete(id).await
    }

    /// Remove an employee locally, then on the server.
    ///
    /// An id missing from the local list is rejected without a request.
    pub async fn delete(&self, id: EmployeeId) -> DeleteOutcome {
        let Some((pos, employee)) = self.list().remove_by_id(id) else {
            let err = CoreError::UnknownId { id };
            warn!(error = %err, "delete rejected");
            return DeleteOutcome::Rejected(err);
        };
        debug!(%id, position = pos, "employee removed locally");

        match self.client().delete_user(id.get()).await {
            Ok(()) => {
                info!(%id, "employee deleted");
                DeleteOutcome::Deleted
            }
            Err(e) => {
                let err = CoreError::remote(RemoteOperation::Delete, e);
                warn!(%id, error = %err, "remote delete failed");
                match self.delete_policy() {
                    DeletePolicy::Rollback => {
                        self.list().insert(pos, employee);
                        info!(%id, position = pos, "local removal rolled back");
                        DeleteOutcome::RolledBack(err)
                    }
                    DeletePolicy::Optimistic => DeleteOutcome::RemoteFailed(err),
                }
            }
        }
    }
}
