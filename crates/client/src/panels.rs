//! View models: what each dashboard section shows for a given fetch result.
//!
//! Each panel is rebuilt from scratch from the latest response, never merged
//! with what was shown before.

use chrono::{DateTime, Local, TimeZone, Utc};
use socialdash_shared::{Account, ApiError, Connection, Post, PostStatus};

/// `toLocaleString`-style rendering, e.g. `3/1/2025, 2:30:00 PM`.
pub fn format_local_in<Tz>(ts: DateTime<Utc>, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    ts.with_timezone(tz)
        .format("%-m/%-d/%Y, %-I:%M:%S %p")
        .to_string()
}

pub fn format_local(ts: DateTime<Utc>) -> String {
    format_local_in(ts, &Local)
}

/// Contents of one list container.
#[derive(Debug, Clone, PartialEq)]
pub enum ListPanel<T> {
    Loading,
    Empty,
    Items(Vec<T>),
    Failed,
}

impl<T> ListPanel<T> {
    pub fn from_fetch<R>(res: Result<Vec<R>, ApiError>, row: impl FnMut(R) -> T) -> Self {
        match res {
            Ok(items) => Self::from_items(items.into_iter().map(row).collect()),
            Err(e) => {
                crate::log_error!("Fetch failed: {}", e);
                Self::Failed
            }
        }
    }

    pub fn from_items(items: Vec<T>) -> Self {
        if items.is_empty() {
            Self::Empty
        } else {
            Self::Items(items)
        }
    }

    pub fn items(&self) -> &[T] {
        match self {
            Self::Items(items) => items,
            _ => &[],
        }
    }
}

// --- Accounts ---

#[derive(Debug, Clone, PartialEq)]
pub struct AccountRow {
    pub username: String,
    pub platform: String,
    /// `@alice (twitter)`
    pub handle: String,
    /// `10 followers · 3 following`
    pub stats: String,
}

impl From<Account> for AccountRow {
    fn from(acc: Account) -> Self {
        let platform = acc.platform_label().to_string();
        Self {
            handle: format!("@{} ({})", acc.username, platform),
            stats: format!(
                "{} followers · {} following",
                acc.followers_count, acc.following_count
            ),
            username: acc.username,
            platform,
        }
    }
}

pub const ACCOUNTS_EMPTY: &str = "No accounts linked";
pub const ACCOUNTS_ERROR: &str = "Error loading accounts";

pub fn accounts_panel(res: Result<Vec<Account>, ApiError>) -> ListPanel<AccountRow> {
    ListPanel::from_fetch(res, AccountRow::from)
}

// --- Posts ---

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PostSection {
    Feed,
    Schedule,
}

impl PostSection {
    pub fn container_id(self) -> &'static str {
        match self {
            Self::Feed => "posts-list",
            Self::Schedule => "scheduled-posts-list",
        }
    }

    pub fn empty_message(self) -> &'static str {
        match self {
            Self::Feed => "No recent posts to display.",
            Self::Schedule => "No scheduled posts to display.",
        }
    }

    pub fn error_message(self) -> &'static str {
        match self {
            Self::Feed => "⚠️ Error loading posts",
            Self::Schedule => "⚠️ Error loading scheduled posts",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PostCard {
    pub text: String,
    /// Rendered after `Status: `.
    pub status_text: String,
}

impl PostCard {
    /// Card for a displayable post; `None` for statuses neither section shows.
    pub fn new<Tz>(post: Post, tz: &Tz) -> Option<Self>
    where
        Tz: TimeZone,
        Tz::Offset: std::fmt::Display,
    {
        // The backend has no separate scheduled time on posts; created_at is
        // what it sends for both buckets.
        let status_text = match post.status {
            PostStatus::Scheduled => {
                let when = match post.created_at {
                    Some(ts) => format_local_in(ts, tz),
                    None => {
                        crate::log_warn!("Scheduled post has no readable created_at");
                        "Invalid Date".to_string()
                    }
                };
                format!("Scheduled (will post at {when})")
            }
            PostStatus::Published => "published".to_string(),
            PostStatus::Other => return None,
        };
        let text = post
            .text
            .filter(|t| !t.is_empty())
            .unwrap_or_else(|| "No text".to_string());
        Some(Self { text, status_text })
    }
}

/// Both post containers, filled from a single `/tweets` response.
#[derive(Debug, Clone, PartialEq)]
pub struct PostBoard {
    pub feed: ListPanel<PostCard>,
    pub schedule: ListPanel<PostCard>,
}

impl PostBoard {
    pub fn loading() -> Self {
        Self {
            feed: ListPanel::Loading,
            schedule: ListPanel::Loading,
        }
    }

    pub fn from_fetch_in<Tz>(res: Result<Vec<Post>, ApiError>, tz: &Tz) -> Self
    where
        Tz: TimeZone,
        Tz::Offset: std::fmt::Display,
    {
        let posts = match res {
            Ok(posts) => posts,
            Err(e) => {
                crate::log_error!("Failed to fetch posts: {}", e);
                return Self {
                    feed: ListPanel::Failed,
                    schedule: ListPanel::Failed,
                };
            }
        };

        let mut feed = Vec::new();
        let mut schedule = Vec::new();
        for post in posts {
            let published = post.is_published();
            match PostCard::new(post, tz) {
                Some(card) if published => feed.push(card),
                Some(card) => schedule.push(card),
                None => {}
            }
        }

        Self {
            feed: ListPanel::from_items(feed),
            schedule: ListPanel::from_items(schedule),
        }
    }

    pub fn from_fetch(res: Result<Vec<Post>, ApiError>) -> Self {
        Self::from_fetch_in(res, &Local)
    }

    pub fn section(&self, section: PostSection) -> &ListPanel<PostCard> {
        match section {
            PostSection::Feed => &self.feed,
            PostSection::Schedule => &self.schedule,
        }
    }
}

// --- Followers / following ---

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConnectionList {
    Followers,
    Following,
}

impl ConnectionList {
    pub fn container_id(self) -> &'static str {
        match self {
            Self::Followers => "followers-list",
            Self::Following => "following-list",
        }
    }

    /// Headline and hint shown for an empty list.
    pub fn empty_message(self) -> (&'static str, &'static str) {
        match self {
            Self::Followers => (
                "✨ You don't have any followers yet!",
                "Share your profile to connect with others.",
            ),
            Self::Following => (
                "😔 You aren't following anyone yet.",
                "Find someone to follow and start connecting!",
            ),
        }
    }

    pub fn error_message(self) -> &'static str {
        match self {
            Self::Followers => "Error loading followers. Please try again later.",
            Self::Following => "Error loading who you're following. Please try again.",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Avatar {
    Picture { url: String, alt: String },
    /// Generic silhouette.
    Fallback,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConnectionRow {
    /// Target of the unfollow action; `None` when the backend sent no username.
    pub username: Option<String>,
    /// `@bob`, or `@Unknown`
    pub handle: String,
    pub name: String,
    pub avatar: Avatar,
}

impl From<Connection> for ConnectionRow {
    fn from(c: Connection) -> Self {
        let username = c.username.filter(|u| !u.is_empty());
        let avatar = match c.profile_pic_url.filter(|u| !u.is_empty()) {
            Some(url) => Avatar::Picture {
                url,
                alt: username.clone().unwrap_or_default(),
            },
            None => Avatar::Fallback,
        };
        Self {
            handle: format!("@{}", username.as_deref().unwrap_or("Unknown")),
            name: c.name.unwrap_or_default(),
            username,
            avatar,
        }
    }
}

pub fn connections_panel(res: Result<Vec<Connection>, ApiError>) -> ListPanel<ConnectionRow> {
    ListPanel::from_fetch(res, ConnectionRow::from)
}
