use gloo_console::error as console_error;
use gloo_storage::{LocalStorage, Storage};

// plain strings under the caller's key, with no prefix and no json
// encoding, so the session token sits in local storage exactly as the
// backend issued it

pub fn set_local_storage(key: &str, value: &str) -> () {
    LocalStorage::raw()
        .set_item(key, value)
        .unwrap_or_else(|err| console_error!(format!("Failed to set local storage {key}: {err:?}")))
}

pub fn get_local_storage(key: &str) -> Option<String> {
    LocalStorage::raw().get_item(key).unwrap_or_else(|err| {
        console_error!(format!("Failed to fetch local storage {key}: {err:?}"));
        None
    })
}

pub fn delete_local_storage(key: &str) -> () {
    LocalStorage::raw()
        .remove_item(key)
        .unwrap_or_else(|err| console_error!(format!("Failed to clear local storage {key}: {err:?}")))
}
