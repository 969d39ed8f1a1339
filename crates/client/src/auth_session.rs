//! Bearer-token session and the auth context shared with the views.

use std::sync::Arc;

use dioxus::prelude::*;
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE};

use crate::api_client::ApiClient;
use crate::config::ClientConfig;
use crate::shell::{BrowserNavigator, Navigator};
use crate::storage;

/// The caller's credentials. Passed explicitly to everything that talks to
/// the backend instead of being read from storage ad hoc.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Session {
    token: Option<String>,
}

impl Session {
    pub fn new(token: Option<String>) -> Self {
        Self {
            token: token.filter(|t| !t.trim().is_empty()),
        }
    }

    pub fn with_token(token: impl Into<String>) -> Self {
        Self::new(Some(token.into()))
    }

    /// Session backed by the persisted token, if any.
    pub fn load() -> Self {
        Self::new(storage::load_token())
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    /// Headers for an authenticated JSON request.
    ///
    /// Without a token the browser is sent to the login page and the returned
    /// map is empty; the request that follows is expected to fail.
    pub fn auth_headers(&self, config: &ClientConfig, navigator: &dyn Navigator) -> HeaderMap {
        let mut headers = HeaderMap::new();
        let Some(token) = self.token.as_deref() else {
            navigator.redirect(&config.login_path);
            return headers;
        };
        match HeaderValue::from_str(&format!("Bearer {token}")) {
            Ok(value) => {
                headers.insert(AUTHORIZATION, value);
                headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
            }
            Err(_) => {
                crate::log_error!("Stored token is not a valid header value");
                navigator.redirect(&config.login_path);
            }
        }
        headers
    }
}

/// Authentication context provided to the app.
#[derive(Clone, Copy)]
pub struct AuthContext {
    pub session: Signal<Session>,
    pub config: Signal<ClientConfig>,
}

/// Provider component: loads the stored token once and exposes the context.
#[component]
pub fn AuthProvider(config: ClientConfig, children: Element) -> Element {
    let session = use_signal(Session::load);
    let config = use_signal(move || config);

    use_context_provider(|| AuthContext { session, config });

    children
}

impl AuthContext {
    /// API client bound to the current session.
    pub fn client(&self) -> ApiClient {
        ApiClient::new(
            self.config.peek().clone(),
            self.session.peek().clone(),
            Arc::new(BrowserNavigator),
        )
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.read().is_authenticated()
    }

    /// Forget the token and leave for the logout page.
    pub fn logout(&mut self) {
        storage::clear_token();
        self.session.set(Session::default());
        let path = self.config.peek().logout_path.clone();
        BrowserNavigator.redirect(&path);
    }
}
