//! LocalStorage 封装模块
//!
//! Backs [`TokenStorage`] with `window.localStorage`. Values are written
//! raw (no JSON quoting), so the token keys stay readable by plain scripts.

use edutech::TokenStorage;

/// `window.localStorage`, or nothing when the browser refuses access
/// (private mode, sandboxed iframe). Reads then come back empty and
/// writes report `false`.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserStorage;

impl BrowserStorage {
    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok()?
    }
}

impl TokenStorage for BrowserStorage {
    fn get(&self, key: &str) -> Option<String> {
        Self::storage()?.get_item(key).ok()?
    }

    fn set(&self, key: &str, value: &str) -> bool {
        let ok = Self::storage()
            .and_then(|s| s.set_item(key, value).ok())
            .is_some();
        if !ok {
            tracing::warn!(key, "localStorage write failed");
        }
        ok
    }

    fn delete(&self, key: &str) -> bool {
        Self::storage()
            .and_then(|s| s.remove_item(key).ok())
            .is_some()
    }
}
