pub mod refresh;

pub use refresh::{use_refresh_provider, use_refresh_signals, use_refreshable_resource, RefreshSignals};
