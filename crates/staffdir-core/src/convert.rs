// ── API-to-domain type conversions ──
//
// Bridges `staffdir_api::UserRecord` (Spanish wire names) and the
// canonical `Employee`. Both directions are lossless.

use staffdir_api::UserRecord;

use crate::model::{Employee, EmployeeId};

impl From<UserRecord> for Employee {
    fn from(record: UserRecord) -> Self {
        Self {
            id: record.id.map(EmployeeId::new),
            first_name: record.nombre,
            last_name: record.apellido,
            email: record.email,
            profession: record.profesion,
        }
    }
}

impl From<&Employee> for UserRecord {
    fn from(employee: &Employee) -> Self {
        Self {
            id: employee.id.map(EmployeeId::get),
            nombre: employee.first_name.clone(),
            apellido: employee.last_name.clone(),
            email: employee.email.clone(),
            profesion: employee.profession.clone(),
        }
    }
}

impl From<Employee> for UserRecord {
    fn from(employee: Employee) -> Self {
        Self {
            id: employee.id.map(EmployeeId::get),
            nombre: employee.first_name,
            apellido: employee.last_name,
            email: employee.email,
            profesion: employee.profession,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_fields_map_to_employee() {
        let record = UserRecord {
            id: Some(5),
            nombre: Some("Jane".into()),
            apellido: Some("Smith".into()),
            email: Some("jane@example.com".into()),
            profesion: Some("Designer".into()),
        };

        let employee = Employee::from(record);

        assert_eq!(employee.id, Some(EmployeeId::new(5)));
        assert_eq!(employee.first_name.as_deref(), Some("Jane"));
        assert_eq!(employee.last_name.as_deref(), Some("Smith"));
        assert_eq!(employee.profession.as_deref(), Some("Designer"));
    }

    #[test]
    fn new_employee_has_no_wire_id() {
        let employee = Employee {
            first_name: Some("Bob".into()),
            ..Employee::default()
        };
        let record = UserRecord::from(&employee);
        assert!(record.id.is_none());
        assert_eq!(record.nombre.as_deref(), Some("Bob"));
    }
}
