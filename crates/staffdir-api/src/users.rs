// `/User` resource endpoints

use tracing::debug;

use crate::client::DirectoryClient;
use crate::error::Error;
use crate::models::UserRecord;

impl DirectoryClient {
    /// List every employee record.
    ///
    /// `GET /User`. An empty or `null` body yields an empty list.
    pub async fn list_users(&self) -> Result<Vec<UserRecord>, Error> {
        let url = self.users_url()?;
        debug!("listing users");
        Ok(self.get(url).await?.unwrap_or_default())
    }

    /// Create an employee record, returning the stored record.
    ///
    /// `POST /User`. The returned record carries the server-assigned `id`.
    /// If the server answers without a body, the submitted record is echoed.
    pub async fn create_user(&self, record: &UserRecord) -> Result<UserRecord, Error> {
        let url = self.users_url()?;
        debug!(nombre = record.nombre.as_deref(), "creating user");
        let created = self.post(url, record).await?;
        Ok(created.unwrap_or_else(|| record.clone()))
    }

    /// Replace the employee record with the given `id`.
    ///
    /// `PUT /User/{id}`. An empty response body echoes the submitted record.
    pub async fn update_user(&self, id: i64, record: &UserRecord) -> Result<UserRecord, Error> {
        let url = self.user_url(id)?;
        debug!(id, "updating user");
        let updated = self.put(url, record).await?;
        Ok(updated.unwrap_or_else(|| record.clone()))
    }

    /// Delete the employee record with the given `id`.
    ///
    /// `DELETE /User/{id}`
    pub async fn delete_user(&self, id: i64) -> Result<(), Error> {
        let url = self.user_url(id)?;
        debug!(id, "deleting user");
        self.delete(url).await
    }
}
