// ── Domain model ──
//
// Canonical employee types. Field names are normalized away from the
// API's wire vocabulary; see `convert.rs` for the mapping.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

// ── EmployeeId ──────────────────────────────────────────────────────

/// Server-assigned numeric identifier of an employee.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EmployeeId(i64);

impl EmployeeId {
    pub const fn new(raw: i64) -> Self {
        Self(raw)
    }

    pub const fn get(self) -> i64 {
        self.0
    }
}

impl fmt::Display for EmployeeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for EmployeeId {
    type Err = CoreError;

    /// Blank input is a missing id; anything non-numeric is invalid.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(CoreError::MissingId);
        }
        trimmed
            .parse::<i64>()
            .map(Self)
            .map_err(|_| CoreError::InvalidId {
                value: trimmed.to_owned(),
            })
    }
}

impl From<i64> for EmployeeId {
    fn from(raw: i64) -> Self {
        Self(raw)
    }
}

// ── Employee ────────────────────────────────────────────────────────

/// A single directory entry. Every field is optional until the server
/// assigns an `id` on create.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    pub id: Option<EmployeeId>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub profession: Option<String>,
}

impl Employee {
    /// `"{first} {last}"`, with missing parts rendered empty.
    pub fn full_name(&self) -> String {
        format!(
            "{} {}",
            self.first_name.as_deref().unwrap_or_default(),
            self.last_name.as_deref().unwrap_or_default()
        )
    }

    /// Human-facing name, falling back to the email or id.
    pub fn display_name(&self) -> String {
        let name = self.full_name();
        let name = name.trim();
        if !name.is_empty() {
            return name.to_owned();
        }
        if let Some(email) = self.email.as_deref().filter(|e| !e.trim().is_empty()) {
            return email.to_owned();
        }
        self.id
            .map_or_else(|| "(unnamed)".to_owned(), |id| format!("#{id}"))
    }

    /// `true` when the record carries no data at all.
    pub fn is_blank(&self) -> bool {
        fn blank(field: Option<&String>) -> bool {
            field.is_none_or(|v| v.trim().is_empty())
        }

        self.id.is_none()
            && blank(self.first_name.as_ref())
            && blank(self.last_name.as_ref())
            && blank(self.email.as_ref())
            && blank(self.profession.as_ref())
    }
}
