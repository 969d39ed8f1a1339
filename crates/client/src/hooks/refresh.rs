use std::future::Future;

use dioxus::prelude::*;

use crate::actions::Refresh;

/// One trigger signal per dashboard list. Writing a trigger re-runs every
/// resource created from it with [`use_refreshable_resource`].
///
/// ### Example
///
/// ```rust,ignore
/// let refresh = use_refresh_signals();
/// let accounts = use_refreshable_resource(refresh.accounts, move || async move {
///     client.list_accounts().await
/// });
///
/// rsx! {
///     button { onclick: move |_| refresh.apply(Refresh::ACCOUNTS), "Reload" }
/// }
/// ```
#[derive(Clone, Copy, PartialEq)]
pub struct RefreshSignals {
    pub accounts: Signal<()>,
    pub posts: Signal<()>,
    pub followers: Signal<()>,
    pub following: Signal<()>,
}

impl RefreshSignals {
    /// Re-fetch every list named in `refresh`.
    pub fn apply(mut self, refresh: Refresh) {
        if refresh.accounts {
            self.accounts.set(());
        }
        if refresh.posts {
            self.posts.set(());
        }
        if refresh.followers {
            self.followers.set(());
        }
        if refresh.following {
            self.following.set(());
        }
    }
}

/// Create the triggers and put them in context.
pub fn use_refresh_provider() -> RefreshSignals {
    use_context_provider(|| RefreshSignals {
        accounts: Signal::new(()),
        posts: Signal::new(()),
        followers: Signal::new(()),
        following: Signal::new(()),
    })
}

/// See [`RefreshSignals`].
pub fn use_refresh_signals() -> RefreshSignals {
    use_context::<RefreshSignals>()
}

/// `use_resource` that also re-runs whenever `trigger` is written.
pub fn use_refreshable_resource<T, F>(
    trigger: Signal<()>,
    mut future: impl FnMut() -> F + 'static,
) -> Resource<T>
where
    T: 'static,
    F: Future<Output = T> + 'static,
{
    use_resource(move || {
        trigger.read();
        future()
    })
}
