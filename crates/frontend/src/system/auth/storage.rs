use std::cell::RefCell;
use std::collections::HashMap;

use contracts::system::auth::UserInfo;
use web_sys::window;

use super::context::Session;

const TOKEN_KEY: &str = "token";
const USER_KEY: &str = "user";

/// Key/value store the session is persisted in.
pub trait SessionStorage {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    fn remove(&self, key: &str);
}

/// `window.localStorage`. Every call is a no-op outside a browser.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalStorage;

fn get_local_storage() -> Option<web_sys::Storage> {
    window()?.local_storage().ok()?
}

impl SessionStorage for LocalStorage {
    fn get(&self, key: &str) -> Option<String> {
        get_local_storage()?.get_item(key).ok()?
    }

    fn set(&self, key: &str, value: &str) {
        if let Some(storage) = get_local_storage() {
            if let Err(e) = storage.set_item(key, value) {
                log::error!("localStorage.setItem({}) failed: {:?}", key, e);
            }
        }
    }

    fn remove(&self, key: &str) {
        if let Some(storage) = get_local_storage() {
            let _ = storage.remove_item(key);
        }
    }
}

#[derive(Debug, Default)]
pub struct MemoryStorage {
    values: RefCell<HashMap<String, String>>,
}

impl SessionStorage for MemoryStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.values.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.values
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
    }

    fn remove(&self, key: &str) {
        self.values.borrow_mut().remove(key);
    }
}

/// Both keys must be present and `user` must parse, otherwise there is no
/// session.
pub fn load_session(storage: &impl SessionStorage) -> Option<Session> {
    let token = storage.get(TOKEN_KEY).filter(|t| !t.is_empty())?;
    let raw = storage.get(USER_KEY)?;
    match serde_json::from_str::<UserInfo>(&raw) {
        Ok(user) => Some(Session { token, user }),
        Err(e) => {
            log::warn!("ignoring stored user: {}", e);
            None
        }
    }
}

pub fn save_session(storage: &impl SessionStorage, session: &Session) {
    match serde_json::to_string(&session.user) {
        Ok(user) => {
            storage.set(TOKEN_KEY, &session.token);
            storage.set(USER_KEY, &user);
        }
        Err(e) => log::error!("failed to serialize user: {}", e),
    }
}

pub fn clear_session(storage: &impl SessionStorage) {
    storage.remove(TOKEN_KEY);
    storage.remove(USER_KEY);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session() -> Session {
        Session {
            token: "jwt".into(),
            user: UserInfo {
                id: "u1".into(),
                username: "sm".into(),
                name: Some("Store Keeper".into()),
                email: None,
                role: "StoreManager".into(),
            },
        }
    }

    #[test]
    fn round_trip_and_clear() {
        let storage = MemoryStorage::default();
        assert_eq!(load_session(&storage), None);

        save_session(&storage, &session());
        assert_eq!(storage.get("token").as_deref(), Some("jwt"));
        assert_eq!(load_session(&storage), Some(session()));

        clear_session(&storage);
        assert_eq!(load_session(&storage), None);
        assert_eq!(storage.get("user"), None);
    }

    #[test]
    fn corrupt_user_is_no_session() {
        let storage = MemoryStorage::default();
        storage.set("token", "jwt");
        storage.set("user", "{not json");
        assert_eq!(load_session(&storage), None);
    }

    #[test]
    fn token_without_user_is_no_session() {
        let storage = MemoryStorage::default();
        storage.set("token", "jwt");
        assert_eq!(load_session(&storage), None);
    }
}
