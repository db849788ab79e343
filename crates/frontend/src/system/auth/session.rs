//! Session of the signed-in user.
//!
//! [`Session`] is provided once at the app root. Persistence goes through a
//! [`SessionStore`], so restore and logout rules run the same against
//! `localStorage` and the in-memory store.

use contracts::system::auth::{LoginResponse, SessionUser};
use leptos::prelude::*;

use super::storage::{cart_key, LocalStore, SessionStore, LEGACY_TOKEN_KEY, TOKEN_KEY, USER_KEY};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionData {
    pub user: SessionUser,
    pub token: String,
}

impl SessionData {
    /// Restores a persisted session.
    ///
    /// Both `user` and `token` must be present and the user must parse;
    /// otherwise both keys are removed.
    pub fn restore(store: &impl SessionStore) -> Option<Self> {
        let user = store.get(USER_KEY);
        let token = store.get(TOKEN_KEY).filter(|t| !t.is_empty());

        let restored = match (user, token) {
            (Some(user), Some(token)) => match serde_json::from_str::<SessionUser>(&user) {
                Ok(user) => Some(SessionData { user, token }),
                Err(e) => {
                    log::error!("Sesión guardada ilegible: {}", e);
                    None
                }
            },
            _ => None,
        };

        if restored.is_none() {
            store.remove(USER_KEY);
            store.remove(TOKEN_KEY);
        }
        restored
    }

    pub fn persist(&self, store: &impl SessionStore) {
        match serde_json::to_string(&self.user) {
            Ok(user) => {
                store.set(USER_KEY, &user);
                store.set(TOKEN_KEY, &self.token);
            }
            Err(e) => log::error!("No se pudo guardar la sesión: {}", e),
        }
    }

    /// Removes every session key, including the user's cart
    pub fn clear(store: &impl SessionStore, user: Option<&SessionUser>) {
        if let Some(user) = user {
            store.remove(&cart_key(user.id));
        }
        store.remove(USER_KEY);
        store.remove(TOKEN_KEY);
        store.remove(LEGACY_TOKEN_KEY);
    }
}

impl From<LoginResponse> for SessionData {
    fn from(response: LoginResponse) -> Self {
        SessionData {
            user: response.usuario,
            token: response.token,
        }
    }
}

/// Reactive session context
#[derive(Clone, Copy)]
pub struct Session {
    current: RwSignal<Option<SessionData>>,
}

impl Session {
    /// Session restored from `localStorage`
    pub fn restore() -> Self {
        let current = SessionData::restore(&LocalStore);
        match &current {
            Some(data) => log::debug!("Sesión restaurada: {}", data.user.email),
            None => log::debug!("Sin sesión guardada"),
        }
        Self {
            current: RwSignal::new(current),
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.current.with(|c| c.is_some())
    }

    pub fn is_admin(&self) -> bool {
        self.current
            .with(|c| c.as_ref().map(|d| d.user.is_admin()).unwrap_or(false))
    }

    pub fn current_user(&self) -> Option<SessionUser> {
        self.current.with(|c| c.as_ref().map(|d| d.user.clone()))
    }

    pub fn login(&self, data: SessionData) {
        data.persist(&LocalStore);
        log::info!("Sesión iniciada: {}", data.user.email);
        self.current.set(Some(data));
    }

    pub fn logout(&self) {
        let user = self.current.with_untracked(|c| c.as_ref().map(|d| d.user.clone()));
        SessionData::clear(&LocalStore, user.as_ref());
        log::info!("Sesión cerrada");
        self.current.set(None);
    }
}

/// Session from context. Outside the app root this is an anonymous session.
pub fn use_session() -> Session {
    use_context::<Session>().unwrap_or_else(|| {
        log::warn!("Session no encontrada en el contexto");
        Session {
            current: RwSignal::new(None),
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::system::auth::storage::MemoryStore;
    use contracts::system::auth::UserRole;

    fn user(role: UserRole) -> SessionUser {
        SessionUser {
            id: 3,
            name: String::new(),
            nombre: "Ana".into(),
            apellido: "Pérez".into(),
            email: "ana@example.com".into(),
            role,
        }
    }

    fn session(role: UserRole) -> SessionData {
        SessionData {
            user: user(role),
            token: "abc.def".into(),
        }
    }

    #[test]
    fn test_persist_then_restore() {
        let store = MemoryStore::default();
        session(UserRole::Admin).persist(&store);

        let restored = SessionData::restore(&store).unwrap();
        assert_eq!(restored, session(UserRole::Admin));
        assert!(restored.user.is_admin());
    }

    #[test]
    fn test_partial_session_is_wiped() {
        let store = MemoryStore::default();
        store.set(USER_KEY, &serde_json::to_string(&user(UserRole::Client)).unwrap());

        assert_eq!(SessionData::restore(&store), None);
        assert!(!store.contains(USER_KEY));

        let store = MemoryStore::default();
        store.set(TOKEN_KEY, "abc");
        assert_eq!(SessionData::restore(&store), None);
        assert!(!store.contains(TOKEN_KEY));
    }

    #[test]
    fn test_corrupt_user_is_wiped() {
        let store = MemoryStore::default();
        store.set(USER_KEY, "{not json");
        store.set(TOKEN_KEY, "abc");

        assert_eq!(SessionData::restore(&store), None);
        assert!(!store.contains(USER_KEY));
        assert!(!store.contains(TOKEN_KEY));
    }

    #[test]
    fn test_clear_removes_cart_and_legacy_token() {
        let store = MemoryStore::default();
        session(UserRole::Client).persist(&store);
        store.set(LEGACY_TOKEN_KEY, "old");
        store.set(&cart_key(3), "[]");
        store.set(&cart_key(4), "[]");

        SessionData::clear(&store, Some(&user(UserRole::Client)));

        assert!(!store.contains(USER_KEY));
        assert!(!store.contains(TOKEN_KEY));
        assert!(!store.contains(LEGACY_TOKEN_KEY));
        assert!(!store.contains(&cart_key(3)));
        assert!(store.contains(&cart_key(4)));
    }
}
