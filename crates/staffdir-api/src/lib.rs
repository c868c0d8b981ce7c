// staffdir-api: Async Rust client for the employee directory REST API

pub mod client;
pub mod error;
pub mod models;
pub mod transport;
mod users;

pub use client::DirectoryClient;
pub use error::Error;
pub use models::UserRecord;
pub use transport::{TlsMode, TransportConfig};
