//! Mutating dashboard actions.
//!
//! Each action is one request/response round trip. Destructive ones ask for
//! confirmation first. On success the caller re-fetches the lists named in
//! the returned [`Refresh`]; nothing is patched locally.

use chrono::{DateTime, Local, NaiveDateTime, TimeZone, Utc};
use socialdash_shared::{AddAccountRequest, ApiError, SchedulePostRequest};

use crate::api_client::ApiClient;
use crate::panels::format_local_in;
use crate::shell::Dialogs;

/// Which lists to re-fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Refresh {
    pub accounts: bool,
    pub posts: bool,
    pub followers: bool,
    pub following: bool,
}

impl Refresh {
    pub const ACCOUNTS: Self = Self {
        accounts: true,
        posts: false,
        followers: false,
        following: false,
    };
    pub const POSTS: Self = Self {
        accounts: false,
        posts: true,
        followers: false,
        following: false,
    };
    pub const CONNECTIONS: Self = Self {
        accounts: false,
        posts: false,
        followers: true,
        following: true,
    };
    /// What a push notification re-fetches.
    pub const PUSH: Self = Self {
        accounts: true,
        posts: true,
        followers: false,
        following: false,
    };
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActionOutcome {
    Completed(Refresh),
    /// The user declined the confirmation dialog.
    Cancelled,
    /// Local validation failed; nothing was sent.
    Rejected,
    Failed,
}

pub async fn add_account(
    api: &ApiClient,
    dialogs: &dyn Dialogs,
    platform: &str,
    username: &str,
) -> ActionOutcome {
    let req = AddAccountRequest {
        platform: platform.to_string(),
        username: username.to_string(),
    };
    match api.add_account(&req).await {
        Ok(()) => {
            dialogs.alert("Account added successfully!");
            ActionOutcome::Completed(Refresh::ACCOUNTS)
        }
        Err(e) => {
            crate::log_error!("Add account failed: {}", e);
            dialogs.alert(&format!("Error: {}", e.detail_or("Failed to add account")));
            ActionOutcome::Failed
        }
    }
}

pub async fn delete_account(
    api: &ApiClient,
    dialogs: &dyn Dialogs,
    platform: &str,
    username: &str,
) -> ActionOutcome {
    if !dialogs.confirm(&format!(
        "Are you sure you want to delete @{username} ({platform})?"
    )) {
        return ActionOutcome::Cancelled;
    }

    match api.delete_account(platform, username).await {
        Ok(()) => {
            dialogs.alert(&format!("Account @{username} deleted successfully"));
            ActionOutcome::Completed(Refresh::ACCOUNTS)
        }
        Err(e) => {
            crate::log_error!("Delete account failed: {}", e);
            dialogs.alert(&format!(
                "Error deleting account: {}",
                e.detail_or("Failed to delete account")
            ));
            ActionOutcome::Failed
        }
    }
}

pub async fn unfollow(api: &ApiClient, dialogs: &dyn Dialogs, username: &str) -> ActionOutcome {
    if !dialogs.confirm(&format!("Are you sure you want to unfollow @{username}?")) {
        return ActionOutcome::Cancelled;
    }

    match api.unfollow(username).await {
        Ok(()) => {
            dialogs.alert(&format!("Unfollowed @{username}"));
            ActionOutcome::Completed(Refresh::CONNECTIONS)
        }
        Err(e) => {
            crate::log_error!("Unfollow failed: {}", e);
            dialogs.alert(&format!(
                "Error unfollowing user: {}",
                e.detail_or("Failed to unfollow user")
            ));
            ActionOutcome::Failed
        }
    }
}

/// Convert a `datetime-local` input value (`2025-03-01T14:30`) in `tz` to
/// the UTC form the backend expects (`2025-03-01T13:30:00.000Z`).
pub fn local_input_to_utc<Tz: TimeZone>(input: &str, tz: &Tz) -> Option<String> {
    let naive = ["%Y-%m-%dT%H:%M", "%Y-%m-%dT%H:%M:%S", "%Y-%m-%dT%H:%M:%S%.f"]
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(input.trim(), fmt).ok())?;
    let local = tz.from_local_datetime(&naive).earliest()?;
    Some(
        local
            .with_timezone(&Utc)
            .format("%Y-%m-%dT%H:%M:%S%.3fZ")
            .to_string(),
    )
}

pub async fn schedule_post_in<Tz>(
    api: &ApiClient,
    dialogs: &dyn Dialogs,
    content: &str,
    scheduled_time: &str,
    tz: &Tz,
) -> ActionOutcome
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    if content.is_empty() || scheduled_time.is_empty() {
        dialogs.alert("Please fill out both fields");
        return ActionOutcome::Rejected;
    }

    let Some(scheduled_time) = local_input_to_utc(scheduled_time, tz) else {
        dialogs.alert("Please enter a valid date and time");
        return ActionOutcome::Rejected;
    };

    let req = SchedulePostRequest {
        content: content.to_string(),
        scheduled_time,
    };

    match api.schedule_post(&req).await {
        Ok(resp) => {
            let when = resp
                .scheduled_time
                .map(|ts: DateTime<Utc>| format_local_in(ts, tz))
                .unwrap_or_else(|| "Invalid Date".to_string());
            dialogs.alert(&format!("{} (Scheduled at {})", resp.msg, when));
            ActionOutcome::Completed(Refresh::POSTS)
        }
        Err(e @ ApiError::Http { .. }) => {
            crate::log_error!("Schedule post rejected: {}", e);
            dialogs.alert(&format!(
                "Error: {}",
                e.detail_or("An unexpected error occurred.")
            ));
            ActionOutcome::Failed
        }
        Err(e) => {
            crate::log_error!("Schedule post failed: {}", e);
            dialogs.alert("Error scheduling post");
            ActionOutcome::Failed
        }
    }
}

/// Schedule a post, reading the time input in the viewer's local zone.
pub async fn schedule_post(
    api: &ApiClient,
    dialogs: &dyn Dialogs,
    content: &str,
    scheduled_time: &str,
) -> ActionOutcome {
    schedule_post_in(api, dialogs, content, scheduled_time, &Local).await
}
