use crate::models::User;
use serde::{Deserialize, Serialize};

pub(crate) const TOKEN_KEY: &str = "access_token";
pub(crate) const USER_KEY: &str = "current_user";

fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

pub(crate) fn load_token() -> Option<String> {
    local_storage().and_then(|s| s.get_item(TOKEN_KEY).ok().flatten())
}

pub(crate) fn save_token(token: &str) {
    if let Some(storage) = local_storage() {
        let _ = storage.set_item(TOKEN_KEY, token);
    }
}

/// Clears everything the session persisted. Token and cached profile go
/// together; a token without a profile is re-fetched on next start.
pub(crate) fn clear_session() {
    if let Some(storage) = local_storage() {
        let _ = storage.remove_item(TOKEN_KEY);
        let _ = storage.remove_item(USER_KEY);
    }
}

pub(crate) fn load_json<T: for<'de> Deserialize<'de>>(key: &str) -> Option<T> {
    let json = local_storage()?.get_item(key).ok().flatten()?;
    serde_json::from_str(&json).ok()
}

pub(crate) fn save_json<T: Serialize>(key: &str, value: &T) {
    if let Ok(json) = serde_json::to_string(value) {
        if let Some(storage) = local_storage() {
            let _ = storage.set_item(key, &json);
        }
    }
}

pub(crate) fn load_cached_user() -> Option<User> {
    load_json(USER_KEY)
}

pub(crate) fn save_cached_user(user: &User) {
    save_json(USER_KEY, user);
}
