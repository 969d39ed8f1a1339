//! Blocking browser primitives: confirmation dialogs, alerts and navigation.
//!
//! Actions and the API client take these as trait objects so they can run
//! against recording fakes in tests.

pub trait Dialogs {
    /// Block until the user accepts or declines.
    fn confirm(&self, message: &str) -> bool;
    fn alert(&self, message: &str);
}

pub trait Navigator: Send + Sync {
    /// Leave the current page for `path` on the same origin.
    fn redirect(&self, path: &str);
}

/// `window.confirm` / `window.alert` in the browser. Native builds have no
/// modal primitive, so they log and accept.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserDialogs;

impl Dialogs for BrowserDialogs {
    #[cfg(target_arch = "wasm32")]
    fn confirm(&self, message: &str) -> bool {
        web_sys::window()
            .and_then(|w| w.confirm_with_message(message).ok())
            .unwrap_or(false)
    }

    #[cfg(not(target_arch = "wasm32"))]
    fn confirm(&self, message: &str) -> bool {
        crate::log_warn!("confirm (auto-accepted): {}", message);
        true
    }

    #[cfg(target_arch = "wasm32")]
    fn alert(&self, message: &str) {
        if let Some(window) = web_sys::window() {
            let _ = window.alert_with_message(message);
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    fn alert(&self, message: &str) {
        crate::log_info!("alert: {}", message);
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserNavigator;

impl Navigator for BrowserNavigator {
    #[cfg(target_arch = "wasm32")]
    fn redirect(&self, path: &str) {
        let Some(window) = web_sys::window() else {
            return;
        };
        if let Err(e) = window.location().set_href(path) {
            crate::log_error!("Navigation to {} failed: {:?}", path, e);
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    fn redirect(&self, path: &str) {
        crate::log_warn!("Navigation requested to {}", path);
    }
}
