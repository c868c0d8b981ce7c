//! CLI configuration: a TOML file plus `STAFFDIR_*` environment variables,
//! resolved against `GlobalOpts` flag overrides into a `DirectoryConfig`.

use std::path::{Path, PathBuf};
use std::time::Duration;

use directories::ProjectDirs;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use url::Url;

use staffdir_core::{DEFAULT_BASE_URL, DeletePolicy, DirectoryConfig, TlsVerification};

use crate::cli::GlobalOpts;
use crate::error::CliError;

const ENV_PREFIX: &str = "STAFFDIR_";

// ── TOML config struct ──────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Config {
    /// Directory service base URL; `/User` is appended per request.
    #[serde(default = "default_api_url")]
    pub api_url: String,

    /// Request timeout in seconds. Unset waits indefinitely.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeout: Option<u64>,

    #[serde(default)]
    pub insecure: bool,

    /// Path to a PEM CA certificate.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ca_cert: Option<PathBuf>,

    #[serde(default)]
    pub delete_policy: DeletePolicy,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
            timeout: None,
            insecure: false,
            ca_cert: None,
            delete_policy: DeletePolicy::default(),
        }
    }
}

fn default_api_url() -> String {
    DEFAULT_BASE_URL.into()
}

// ── Config file path ────────────────────────────────────────────────

/// Resolve the config file path: `--config` first, then platform conventions.
pub fn config_path(global: &GlobalOpts) -> PathBuf {
    global.config.clone().unwrap_or_else(default_config_path)
}

fn default_config_path() -> PathBuf {
    ProjectDirs::from("com", "staffdir", "staffdir").map_or_else(
        || {
            let mut p = PathBuf::from(std::env::var("HOME").unwrap_or_else(|_| ".".into()));
            p.push(".config");
            p.push("staffdir");
            p.push("config.toml");
            p
        },
        |dirs| dirs.config_dir().join("config.toml"),
    )
}

// ── Loading / saving ────────────────────────────────────────────────

/// Load the config from defaults, then the TOML file (if present), then env.
pub fn load_config(path: &Path) -> Result<Config, CliError> {
    let figment = Figment::new()
        .merge(Serialized::defaults(Config::default()))
        .merge(Toml::file(path))
        .merge(Env::prefixed(ENV_PREFIX).only(&["api_url", "timeout", "ca_cert", "delete_policy"]));

    Ok(figment.extract()?)
}

/// Serialize config to TOML and write it to `path`.
pub fn save_config(cfg: &Config, path: &Path) -> Result<(), CliError> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let toml_str = toml::to_string_pretty(cfg)?;
    std::fs::write(path, toml_str)?;
    Ok(())
}

// ── Resolution ──────────────────────────────────────────────────────

/// Translate the loaded `Config` plus global flags into a `DirectoryConfig`.
///
/// Flags take priority over file and environment values.
pub fn resolve(cfg: &Config, global: &GlobalOpts) -> Result<DirectoryConfig, CliError> {
    let base_url = parse_base_url(global.api_url.as_deref().unwrap_or(&cfg.api_url))?;

    let tls = if global.insecure || cfg.insecure {
        TlsVerification::DangerAcceptInvalid
    } else if let Some(ref ca_path) = cfg.ca_cert {
        TlsVerification::CustomCa(ca_path.clone())
    } else {
        TlsVerification::SystemDefaults
    };

    let timeout = global
        .timeout
        .or(cfg.timeout)
        .filter(|secs| *secs > 0)
        .map(Duration::from_secs);

    let mut config = DirectoryConfig::new(base_url);
    config.tls = tls;
    config.timeout = timeout;
    config.delete_policy = cfg.delete_policy;
    Ok(config)
}

pub fn parse_base_url(raw: &str) -> Result<Url, CliError> {
    let invalid = || CliError::Validation {
        field: "api-url".into(),
        reason: format!("invalid URL: {raw}"),
    };
    let url: Url = raw.trim().parse().map_err(|_| invalid())?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(invalid());
    }
    Ok(url)
}
