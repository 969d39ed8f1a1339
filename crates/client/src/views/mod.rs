//! View components for the dashboard.

pub mod accounts;
pub mod connections;
pub mod dashboard;
pub mod posts;

pub use accounts::{AccountsPanel, AddAccountForm};
pub use connections::ConnectionsPanel;
pub use dashboard::{ConnectionBadge, Dashboard};
pub use posts::{PostList, PostsPanel, SchedulePostForm};
