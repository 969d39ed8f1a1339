//! socialdash client: dashboard for linked social-media accounts.
//!
//! Fetches accounts, posts, followers and following from the REST backend
//! with a bearer token, renders them with Dioxus, and re-fetches accounts and
//! posts whenever the push-refresh WebSocket delivers a message.

pub mod logging;

pub mod actions;
pub mod api_client;
pub mod auth_session;
pub mod config;
pub mod panels;
pub mod shell;
pub mod storage;
pub mod ws;

pub mod components;
pub mod hooks;
pub mod views;

pub use api_client::ApiClient;
pub use auth_session::{AuthContext, AuthProvider, Session};
pub use config::ClientConfig;
