// Directory API HTTP client
//
// Wraps `reqwest::Client` with resource URL construction, status mapping
// and lenient body decoding. Endpoint methods live in `users.rs` as
// inherent methods to keep this module focused on transport mechanics.

use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{debug, trace};
use url::Url;

use crate::error::Error;
use crate::transport::TransportConfig;

/// Resource path of the employee collection, relative to the base URL.
pub const USERS_PATH: &str = "User";

/// Longest slice of an error body carried into error messages.
const BODY_PREVIEW_CHARS: usize = 200;

/// Raw HTTP client for the employee directory API.
///
/// All methods return decoded payloads. Empty and `null` bodies decode to
/// `None` so callers decide what "no content" means for each endpoint.
#[derive(Debug, Clone)]
pub struct DirectoryClient {
    http: reqwest::Client,
    base_url: Url,
}

impl DirectoryClient {
    /// Create a new client from a `TransportConfig`.
    ///
    /// `base_url` is the API host root (e.g. `http://arsene.azurewebsites.net`);
    /// the `/User` resource is appended per request.
    pub fn new(base_url: Url, transport: &TransportConfig) -> Result<Self, Error> {
        let http = transport.build_client()?;
        Ok(Self { http, base_url })
    }

    /// Create a client with a pre-built `reqwest::Client`.
    pub fn with_client(http: reqwest::Client, base_url: Url) -> Self {
        Self { http, base_url }
    }

    /// The API base URL.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    // ── URL builders ─────────────────────────────────────────────────

    /// `{base}/User`
    pub(crate) fn users_url(&self) -> Result<Url, Error> {
        let base = self.base_url.as_str().trim_end_matches('/');
        Ok(Url::parse(&format!("{base}/{USERS_PATH}"))?)
    }

    /// `{base}/User/{id}`
    pub(crate) fn user_url(&self, id: i64) -> Result<Url, Error> {
        let base = self.base_url.as_str().trim_end_matches('/');
        Ok(Url::parse(&format!("{base}/{USERS_PATH}/{id}"))?)
    }

    // ── Request helpers ──────────────────────────────────────────────

    pub(crate) async fn get<T: DeserializeOwned>(&self, url: Url) -> Result<Option<T>, Error> {
        debug!("GET {}", url);
        let resp = self.http.get(url).send().await?;
        Self::parse_body(resp).await
    }

    pub(crate) async fn post<T: DeserializeOwned>(
        &self,
        url: Url,
        body: &(impl Serialize + Sync),
    ) -> Result<Option<T>, Error> {
        debug!("POST {}", url);
        let resp = self.http.post(url).json(body).send().await?;
        Self::parse_body(resp).await
    }

    pub(crate) async fn put<T: DeserializeOwned>(
        &self,
        url: Url,
        body: &(impl Serialize + Sync),
    ) -> Result<Option<T>, Error> {
        debug!("PUT {}", url);
        let resp = self.http.put(url).json(body).send().await?;
        Self::parse_body(resp).await
    }

    /// Send a DELETE request. The acknowledgement body is discarded.
    pub(crate) async fn delete(&self, url: Url) -> Result<(), Error> {
        debug!("DELETE {}", url);
        let resp = self.http.delete(url).send().await?;
        let resp = Self::check_status(resp).await?;
        let ack = resp.text().await?;
        trace!(ack = %preview(&ack), "delete acknowledged");
        Ok(())
    }

    // ── Response handling ────────────────────────────────────────────

    /// Map non-2xx responses to `Error::Api` with a body preview.
    async fn check_status(resp: reqwest::Response) -> Result<reqwest::Response, Error> {
        let status = resp.status();
        if status.is_success() {
            return Ok(resp);
        }

        let body = resp.text().await.unwrap_or_default();
        let message = if body.trim().is_empty() {
            status
                .canonical_reason()
                .unwrap_or("unexpected status")
                .to_owned()
        } else {
            preview(&body)
        };
        Err(Error::Api {
            status: status.as_u16(),
            message,
        })
    }

    async fn parse_body<T: DeserializeOwned>(resp: reqwest::Response) -> Result<Option<T>, Error> {
        let resp = Self::check_status(resp).await?;
        let body = resp.text().await?;

        let trimmed = body.trim();
        if trimmed.is_empty() || trimmed == "null" {
            trace!("empty response body");
            return Ok(None);
        }

        serde_json::from_str(trimmed)
            .map(Some)
            .map_err(|e| Error::Deserialization {
                message: format!("{e} (body preview: {:?})", preview(trimmed)),
                body: body.clone(),
            })
    }
}

fn preview(body: &str) -> String {
    body.chars().take(BODY_PREVIEW_CHARS).collect()
}
