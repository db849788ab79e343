use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use contracts::domain::common::EntityId;
use web_sys::window;

pub const USER_KEY: &str = "user";
pub const TOKEN_KEY: &str = "token";
/// Written by older builds, removed on logout
pub const LEGACY_TOKEN_KEY: &str = "authToken";

/// Per-user cart kept by the storefront
pub fn cart_key(user_id: EntityId) -> String {
    format!("carrito_{}", user_id)
}

/// Key/value persistence behind the session
pub trait SessionStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    fn remove(&self, key: &str);
}

/// Browser `localStorage`
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalStore;

fn get_local_storage() -> Option<web_sys::Storage> {
    window()?.local_storage().ok()?
}

impl SessionStore for LocalStore {
    fn get(&self, key: &str) -> Option<String> {
        get_local_storage()?.get_item(key).ok()?
    }

    fn set(&self, key: &str, value: &str) {
        if let Some(storage) = get_local_storage() {
            if storage.set_item(key, value).is_err() {
                log::warn!("localStorage: no se pudo guardar '{}'", key);
            }
        }
    }

    fn remove(&self, key: &str) {
        if let Some(storage) = get_local_storage() {
            let _ = storage.remove_item(key);
        }
    }
}

/// In-memory store, used off the browser
#[derive(Debug, Clone, Default)]
pub struct MemoryStore(Rc<RefCell<HashMap<String, String>>>);

impl MemoryStore {
    pub fn contains(&self, key: &str) -> bool {
        self.0.borrow().contains_key(key)
    }
}

impl SessionStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.0.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.0.borrow_mut().insert(key.to_string(), value.to_string());
    }

    fn remove(&self, key: &str) {
        self.0.borrow_mut().remove(key);
    }
}

/// Bearer token of the current session, if any
pub fn stored_token() -> Option<String> {
    LocalStore.get(TOKEN_KEY).filter(|t| !t.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_store() {
        let store = MemoryStore::default();
        assert_eq!(store.get(TOKEN_KEY), None);

        store.set(TOKEN_KEY, "abc");
        let shared = store.clone();
        assert_eq!(shared.get(TOKEN_KEY).as_deref(), Some("abc"));

        shared.remove(TOKEN_KEY);
        assert!(!store.contains(TOKEN_KEY));
    }

    #[test]
    fn test_cart_key() {
        assert_eq!(cart_key(7), "carrito_7");
    }
}
