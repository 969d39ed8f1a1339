//! Endpoint paths and WebSocket protocol constants.

use std::time::Duration;

/// Base path of every REST endpoint.
pub const API_BASE: &str = "/accounts";

pub const PATH_ACCOUNTS: &str = "/me";
pub const PATH_ADD_ACCOUNT: &str = "/add-platform";
pub const PATH_POSTS: &str = "/tweets";
pub const PATH_SCHEDULE: &str = "/schedule";
pub const PATH_FOLLOWERS: &str = "/followers";
pub const PATH_FOLLOWING: &str = "/following";

pub const LOGIN_PATH: &str = "/auth/login";
pub const LOGOUT_PATH: &str = "/auth/logout";

/// Push-refresh socket; the token travels as the `token` query parameter.
pub const WS_POSTS_PATH: &str = "/ws/posts/";

/// localStorage key holding the bearer token.
pub const TOKEN_STORAGE_KEY: &str = "token";

/// Close code the server uses to reject a token. Never reconnect after it.
pub const CLOSE_INVALID_TOKEN: u16 = 4000;

/// Close code reported when the socket dropped or never opened.
pub const CLOSE_ABNORMAL: u16 = 1006;

/// Fixed delay before every reconnect attempt.
pub const RECONNECT_DELAY: Duration = Duration::from_secs(3);
