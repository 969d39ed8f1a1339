//! HTTP client for the dashboard REST backend.

use std::sync::Arc;

use reqwest::{Client, Method, RequestBuilder};
use serde::de::DeserializeOwned;
use serde::Serialize;
use socialdash_shared::{
    Account, AddAccountRequest, ApiError, Connection, Post, SchedulePostRequest,
    SchedulePostResponse, PATH_ACCOUNTS, PATH_ADD_ACCOUNT, PATH_FOLLOWERS, PATH_FOLLOWING,
    PATH_POSTS, PATH_SCHEDULE,
};

use crate::auth_session::Session;
use crate::config::ClientConfig;
use crate::shell::Navigator;

/// Bearer-authenticated client. Every request rebuilds its headers from the
/// session, so a missing token sends the user to the login page.
#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    config: ClientConfig,
    session: Session,
    navigator: Arc<dyn Navigator>,
}

impl ApiClient {
    pub fn new(config: ClientConfig, session: Session, navigator: Arc<dyn Navigator>) -> Self {
        Self {
            client: Client::new(),
            config,
            session,
            navigator,
        }
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let url = self.config.api_url(path);
        crate::log_debug!("{} {}", method, url);
        let headers = self
            .session
            .auth_headers(&self.config, self.navigator.as_ref());
        self.client.request(method, url).headers(headers)
    }

    async fn send(&self, rb: RequestBuilder) -> Result<String, ApiError> {
        let resp = rb.send().await.map_err(|e| ApiError::Network(e.to_string()))?;

        let status = resp.status().as_u16();
        let is_success = resp.status().is_success();
        let text = resp
            .text()
            .await
            .map_err(|e| ApiError::Network(format!("failed to read body: {e}")))?;

        if !is_success {
            return Err(ApiError::Http { status, body: text });
        }
        Ok(text)
    }

    fn decode<T: DeserializeOwned>(text: &str) -> Result<T, ApiError> {
        let text = if text.trim().is_empty() { "null" } else { text };
        serde_json::from_str(text).map_err(|e| ApiError::Deserialize(e.to_string()))
    }

    /// GET a JSON array. Entries that do not decode are logged and skipped;
    /// only a body that is not an array fails the whole call.
    pub async fn get_list<T: DeserializeOwned>(&self, path: &str) -> Result<Vec<T>, ApiError> {
        let entries: Vec<serde_json::Value> = self.get_json(path).await?;
        Ok(entries
            .into_iter()
            .enumerate()
            .filter_map(|(idx, entry)| match serde_json::from_value(entry) {
                Ok(item) => Some(item),
                Err(e) => {
                    crate::log_warn!("Skipping entry {} of {}: {}", idx, path, e);
                    None
                }
            })
            .collect())
    }

    pub async fn get_json<TRes: DeserializeOwned>(&self, path: &str) -> Result<TRes, ApiError> {
        let text = self.send(self.request(Method::GET, path)).await?;
        Self::decode(&text)
    }

    pub async fn post_json<TReq: Serialize, TRes: DeserializeOwned>(
        &self,
        path: &str,
        body: &TReq,
    ) -> Result<TRes, ApiError> {
        let body = serde_json::to_vec(body).map_err(|e| ApiError::Deserialize(e.to_string()))?;
        let text = self.send(self.request(Method::POST, path).body(body)).await?;
        Self::decode(&text)
    }

    pub async fn delete(&self, path: &str) -> Result<(), ApiError> {
        self.send(self.request(Method::DELETE, path)).await?;
        Ok(())
    }

    // --- Accounts ---

    pub async fn list_accounts(&self) -> Result<Vec<Account>, ApiError> {
        self.get_list(PATH_ACCOUNTS).await
    }

    pub async fn add_account(&self, req: &AddAccountRequest) -> Result<(), ApiError> {
        self.post_json::<_, serde_json::Value>(PATH_ADD_ACCOUNT, req)
            .await
            .map(|_| ())
    }

    pub async fn delete_account(&self, platform: &str, username: &str) -> Result<(), ApiError> {
        self.delete(&format!(
            "/{}/{}",
            urlencoding::encode(platform),
            urlencoding::encode(username)
        ))
        .await
    }

    // --- Posts ---

    pub async fn list_posts(&self) -> Result<Vec<Post>, ApiError> {
        self.get_list(PATH_POSTS).await
    }

    pub async fn schedule_post(
        &self,
        req: &SchedulePostRequest,
    ) -> Result<SchedulePostResponse, ApiError> {
        self.post_json(PATH_SCHEDULE, req).await
    }

    // --- Followers / following ---

    pub async fn list_followers(&self) -> Result<Vec<Connection>, ApiError> {
        self.get_list(PATH_FOLLOWERS).await
    }

    pub async fn list_following(&self) -> Result<Vec<Connection>, ApiError> {
        self.get_list(PATH_FOLLOWING).await
    }

    pub async fn unfollow(&self, username: &str) -> Result<(), ApiError> {
        self.delete(&format!("{PATH_FOLLOWING}/{}", urlencoding::encode(username)))
            .await
    }
}

impl std::fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiClient")
            .field("origin", &self.config.origin.as_str())
            .field("authenticated", &self.session.is_authenticated())
            .finish()
    }
}
