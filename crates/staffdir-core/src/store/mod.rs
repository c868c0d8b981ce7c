// ── Reactive employee store ──
//
// In-memory employee list with push-based change notification, and the
// CRUD operations that keep it in step with the directory API.

mod employee_store;
mod list;
mod operations;

pub use employee_store::{EmployeeStore, Snapshot};
pub use operations::DeleteOutcome;
