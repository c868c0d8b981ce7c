// ── Filter predicates for employee snapshots ──
//
// Used by the CLI search to filter snapshots without re-querying the API.

use crate::model::Employee;

/// Filter predicate for employee lists.
pub enum EmployeeFilter {
    All,
    /// Case-insensitive substring over full name, email and profession.
    /// Holds the normalized (trimmed, lowercased) needle.
    Query(String),
    /// Exact profession, ignoring case.
    Profession(String),
    /// Records the server has not assigned an id to.
    MissingId,
    Custom(Box<dyn Fn(&Employee) -> bool + Send + Sync>),
}

impl EmployeeFilter {
    /// Build a free-text filter. Blank queries match everything.
    pub fn query(raw: &str) -> Self {
        let needle = raw.trim().to_lowercase();
        if needle.is_empty() {
            Self::All
        } else {
            Self::Query(needle)
        }
    }

    pub fn matches(&self, employee: &Employee) -> bool {
        match self {
            Self::All => true,
            Self::Query(needle) => matches_query(employee, needle),
            Self::Profession(p) => employee
                .profession
                .as_deref()
                .is_some_and(|own| own.trim().eq_ignore_ascii_case(p.trim())),
            Self::MissingId => employee.id.is_none(),
            Self::Custom(f) => f(employee),
        }
    }

    /// Collect the matching employees into a new `Vec`, preserving order.
    pub fn apply(&self, employees: &[Employee]) -> Vec<Employee> {
        employees
            .iter()
            .filter(|e| self.matches(e))
            .cloned()
            .collect()
    }
}

/// Filter `employees` by a free-text query.
///
/// Blank queries return the full list, always as a new `Vec`.
pub fn filter_employees(employees: &[Employee], query: &str) -> Vec<Employee> {
    EmployeeFilter::query(query).apply(employees)
}

fn matches_query(employee: &Employee, needle: &str) -> bool {
    let lowered = |field: Option<&str>| field.unwrap_or_default().to_lowercase();

    employee.full_name().to_lowercase().contains(needle)
        || lowered(employee.email.as_deref()).contains(needle)
        || lowered(employee.profession.as_deref()).contains(needle)
}
