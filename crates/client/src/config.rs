//! Client configuration: where the backend lives and which paths it serves.

use anyhow::{bail, Context, Result};
use socialdash_shared::{API_BASE, LOGIN_PATH, LOGOUT_PATH, WS_POSTS_PATH};
use url::Url;

/// Default origin for native builds when `SOCIALDASH_ORIGIN` is unset.
pub const DEFAULT_ORIGIN: &str = "http://127.0.0.1:8001";

#[derive(Debug, Clone, PartialEq)]
pub struct ClientConfig {
    /// Scheme, host and port of the page (and of the backend).
    pub origin: Url,
    pub api_base: String,
    pub login_path: String,
    pub logout_path: String,
    pub ws_path: String,
}

impl ClientConfig {
    pub fn new(origin: Url) -> Self {
        Self {
            origin,
            api_base: API_BASE.to_string(),
            login_path: LOGIN_PATH.to_string(),
            logout_path: LOGOUT_PATH.to_string(),
            ws_path: WS_POSTS_PATH.to_string(),
        }
    }

    pub fn from_origin(origin: &str) -> Result<Self> {
        let url = Url::parse(origin).with_context(|| format!("invalid origin: {origin}"))?;
        match url.scheme() {
            "http" | "https" => {}
            other => bail!("unsupported origin scheme: {other}"),
        }
        if url.host_str().is_none() {
            bail!("origin has no host: {origin}");
        }
        Ok(Self::new(url))
    }

    /// Derive the configuration for the current platform.
    ///
    /// - Web: the page's `window.location.origin`.
    /// - Native: `SOCIALDASH_ORIGIN`, defaulting to [`DEFAULT_ORIGIN`].
    pub fn load() -> Result<Self> {
        #[cfg(target_arch = "wasm32")]
        {
            let origin = web_sys::window()
                .context("no window")?
                .location()
                .origin()
                .map_err(|e| anyhow::anyhow!("cannot read location: {e:?}"))?;
            Self::from_origin(&origin)
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            let origin =
                std::env::var("SOCIALDASH_ORIGIN").unwrap_or_else(|_| DEFAULT_ORIGIN.to_string());
            Self::from_origin(&origin)
        }
    }

    fn host_with_port(&self) -> String {
        let host = self.origin.host_str().unwrap_or("localhost");
        match self.origin.port() {
            Some(port) => format!("{host}:{port}"),
            None => host.to_string(),
        }
    }

    fn http_base(&self) -> String {
        format!("{}://{}", self.origin.scheme(), self.host_with_port())
    }

    /// Absolute URL of an API endpoint, e.g. `api_url("/me")`.
    pub fn api_url(&self, path: &str) -> String {
        let base = self.api_base.trim_end_matches('/');
        let path = path.trim_start_matches('/');
        format!("{}{base}/{path}", self.http_base())
    }

    /// Push-refresh socket URL. `https` pages use `wss`.
    pub fn ws_url(&self, token: &str) -> String {
        let scheme = if self.origin.scheme() == "https" { "wss" } else { "ws" };
        format!(
            "{scheme}://{}{}?token={}",
            self.host_with_port(),
            self.ws_path,
            urlencoding::encode(token)
        )
    }
}
