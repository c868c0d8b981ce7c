// ── Runtime connection configuration ──
//
// These types describe *how* to reach the directory API and how the
// store reconciles failed deletes. They never touch disk: the CLI
// builds a `DirectoryConfig` and hands it in.

use std::path::PathBuf;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use staffdir_api::{TlsMode, TransportConfig};
use strum::{Display, EnumString};
use url::Url;

/// Host serving the `/User` resource when nothing else is configured.
pub const DEFAULT_BASE_URL: &str = "http://arsene.azurewebsites.net";

/// What the store does with an optimistic local removal when the remote
/// DELETE fails.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, Display, EnumString,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum DeletePolicy {
    /// Keep the removal. Local and server state may diverge until the
    /// next fetch.
    #[default]
    Optimistic,
    /// Restore the removed employee at its former position.
    Rollback,
}

/// TLS verification strategy.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum TlsVerification {
    /// System CA store (strict).
    #[default]
    SystemDefaults,
    /// Custom CA certificate file.
    CustomCa(PathBuf),
    /// Skip verification (self-signed test servers).
    DangerAcceptInvalid,
}

/// Configuration for one directory session.
#[derive(Debug, Clone)]
pub struct DirectoryConfig {
    /// API host root; `/User` is appended per request.
    pub base_url: Url,
    pub tls: TlsVerification,
    /// Per-request timeout. `None` leaves requests pending indefinitely.
    pub timeout: Option<Duration>,
    pub delete_policy: DeletePolicy,
}

impl DirectoryConfig {
    pub fn new(base_url: Url) -> Self {
        Self {
            base_url,
            tls: TlsVerification::default(),
            timeout: None,
            delete_policy: DeletePolicy::default(),
        }
    }

    pub(crate) fn transport(&self) -> TransportConfig {
        let tls = match &self.tls {
            TlsVerification::SystemDefaults => TlsMode::System,
            TlsVerification::CustomCa(path) => TlsMode::CustomCa(path.clone()),
            TlsVerification::DangerAcceptInvalid => TlsMode::DangerAcceptInvalid,
        };
        TransportConfig {
            tls,
            timeout: self.timeout,
        }
    }
}
