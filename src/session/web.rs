//! Browser `localStorage` slot.

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{DomException, Storage};

use crate::core::StoreError;

use super::slot::SessionSlot;

/// `window.localStorage`, when the page has one.
///
/// Private browsing modes and sandboxed frames may deny storage; every
/// call then fails with `StoreError::Unavailable`. A full store fails
/// writes with `StoreError::QuotaExceeded`.
pub struct LocalStorageSlot {
    storage: Option<Storage>,
}

impl LocalStorageSlot {
    pub fn new() -> Self {
        let storage = web_sys::window().and_then(|window| window.local_storage().ok().flatten());
        if storage.is_none() {
            log::warn!("localStorage is not available; the session will not persist");
        }
        Self { storage }
    }

    fn storage(&self) -> Result<&Storage, StoreError> {
        self.storage
            .as_ref()
            .ok_or_else(|| StoreError::Unavailable("localStorage is not available".to_string()))
    }
}

impl Default for LocalStorageSlot {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionSlot for LocalStorageSlot {
    fn read(&self, key: &str) -> Result<Option<String>, StoreError> {
        self.storage()?
            .get_item(key)
            .map_err(|err| js_error(&err, 0))
    }

    fn write(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        self.storage()?
            .set_item(key, value)
            .map_err(|err| js_error(&err, value.len()))
    }
}

fn js_error(err: &JsValue, needed: usize) -> StoreError {
    match err.dyn_ref::<DomException>() {
        Some(exception) => {
            StoreError::from_storage_exception(&exception.name(), &exception.message(), needed)
        }
        None => StoreError::Unavailable(format!("{err:?}")),
    }
}
