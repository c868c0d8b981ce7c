//! Reactive data layer between `staffdir-api` and UI consumers.
//!
//! - **[`EmployeeStore`]**: Session-scoped, cheaply cloneable handle over the
//!   in-memory employee list. Each CRUD operation coordinates one REST call
//!   with one local mutation, and every mutation publishes a fresh snapshot
//!   through a `tokio::sync::watch` channel.
//!
//! - **[`EmployeeStream`]**: Subscription handle vended by the store.
//!   Exposes `current()` / `latest()` / `changed()` and converts into a
//!   `Stream` that replays the current list first.
//!
//! - **Search** ([`filter_employees`], [`EmployeeFilter`]): pure filtering
//!   over snapshots, plus [`debounce_queries`] to coalesce keystrokes.
//!
//! - **Domain model** ([`model`]): [`Employee`] and [`EmployeeId`], converted
//!   from the API's wire records.

pub mod config;
pub mod convert;
pub mod error;
pub mod model;
pub mod store;
pub mod stream;

// ── Primary re-exports ──────────────────────────────────────────────
pub use config::{DEFAULT_BASE_URL, DeletePolicy, DirectoryConfig, TlsVerification};
pub use error::{CoreError, RemoteFailure, RemoteOperation};
pub use model::{Employee, EmployeeId};
pub use store::{DeleteOutcome, EmployeeStore, Snapshot};
pub use stream::{
    EmployeeFilter, EmployeeStream, EmployeeWatchStream, SEARCH_DEBOUNCE, debounce_queries,
    filter_employees,
};
