// Directory API wire types
//
// The server speaks Spanish field names. Every field is optional on the
// wire; absent fields are omitted on serialization so a create request
// never carries an `id`.

use serde::{Deserialize, Serialize};

/// An employee record as exchanged with the `/User` resource.
///
/// ```json
/// { "id": 1, "nombre": "John", "apellido": "Doe",
///   "email": "john@example.com", "profesion": "Developer" }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nombre: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub apellido: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profesion: Option<String>,
}
