//! Persistent client state.
//!
//! The only value persisted is the bearer token:
//! - Web: `localStorage["token"]`, stored raw so pages outside this client
//!   (the login form) can write it.
//! - Desktop: a file per key in the platform config directory, e.g.
//!   `~/.config/socialdash/token` on Linux.

use socialdash_shared::TOKEN_STORAGE_KEY;

/// Read the stored bearer token. Blank values count as absent.
pub fn load_token() -> Option<String> {
    load_raw(TOKEN_STORAGE_KEY).filter(|t| !t.trim().is_empty())
}

pub fn clear_token() {
    remove_raw(TOKEN_STORAGE_KEY);
}

// =========================================
// Web (WASM) implementation
// =========================================

#[cfg(target_arch = "wasm32")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok()?
}

#[cfg(target_arch = "wasm32")]
fn load_raw(key: &str) -> Option<String> {
    local_storage()?.get_item(key).ok()?
}

#[cfg(target_arch = "wasm32")]
fn remove_raw(key: &str) {
    if let Some(storage) = local_storage() {
        let _ = storage.remove_item(key);
    }
}

// =========================================
// Desktop (native) implementation
// =========================================

#[cfg(not(target_arch = "wasm32"))]
fn file_path(key: &str) -> Option<std::path::PathBuf> {
    let dir = dirs::config_dir()?.join("socialdash");
    if !dir.exists() {
        std::fs::create_dir_all(&dir).ok()?;
    }
    let safe_key = key.replace(['/', '\\', ':', '*', '?', '"', '<', '>', '|'], "_");
    Some(dir.join(safe_key))
}

#[cfg(not(target_arch = "wasm32"))]
fn load_raw(key: &str) -> Option<String> {
    let path = file_path(key)?;
    std::fs::read_to_string(path)
        .ok()
        .map(|s| s.trim_end().to_string())
}

#[cfg(not(target_arch = "wasm32"))]
fn remove_raw(key: &str) {
    if let Some(path) = file_path(key) {
        let _ = std::fs::remove_file(path);
    }
}
