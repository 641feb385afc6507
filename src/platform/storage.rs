//! LocalStorage JSON helpers.

use serde::de::DeserializeOwned;
use serde::Serialize;
use web_sys::Storage;

fn local_storage() -> Option<Storage> {
    web_sys::window()
        .and_then(|w| w.local_storage().ok())
        .flatten()
}

/// Read and parse a stored JSON value. A corrupt entry is logged and
/// treated as absent so it never wedges startup.
pub fn read_json<T: DeserializeOwned>(key: &str) -> Option<T> {
    let storage = local_storage()?;
    let json = storage.get_item(key).ok()??;
    match serde_json::from_str(&json) {
        Ok(value) => Some(value),
        Err(err) => {
            log::warn!("discarding unreadable '{key}' entry: {err}");
            None
        }
    }
}

/// Serialize and store a value. Best effort; quota and privacy-mode
/// failures are ignored.
pub fn write_json<T: Serialize>(key: &str, value: &T) {
    let Some(storage) = local_storage() else {
        return;
    };
    if let Ok(json) = serde_json::to_string(value) {
        let _ = storage.set_item(key, &json);
    }
}
