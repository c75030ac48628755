//! # Auth State
//!
//! The single bearer-token slot that represents the signed-in state.
//!
//! There is at most one session per client: a successful login overwrites
//! whatever token was there. Concurrent logins are not coordinated against
//! each other; the last one to complete wins, which is acceptable because
//! both tokens are valid and interchangeable.

use std::sync::RwLock;

use tracing::info;

use shopfront_store::{LocalStore, StoreResult};

/// Tauri-managed auth state.
///
/// ## Thread Safety
/// `RwLock` because reads dominate: every admin navigation consults
/// `is_authenticated`, while writes happen only at login/logout.
#[derive(Debug)]
pub struct AuthState {
    token: RwLock<Option<String>>,
    store: LocalStore,
}

impl AuthState {
    /// Loads the persisted token, if any (the remembered session).
    pub fn load(store: LocalStore) -> Self {
        AuthState {
            token: RwLock::new(store.load_token()),
            store,
        }
    }

    /// Stores a freshly issued token in memory and on disk.
    pub fn set_token(&self, token: String) -> StoreResult<()> {
        self.store.save_token(&token)?;
        *self.token.write().expect("Auth lock poisoned") = Some(token);
        info!("signed in");
        Ok(())
    }

    /// Clears the session from memory and disk. Idempotent.
    pub fn logout(&self) -> StoreResult<()> {
        self.store.clear_token()?;
        *self.token.write().expect("Auth lock poisoned") = None;
        info!("signed out");
        Ok(())
    }

    /// True iff a token is present.
    pub fn is_authenticated(&self) -> bool {
        self.token.read().expect("Auth lock poisoned").is_some()
    }

    /// The current token, if any.
    pub fn token(&self) -> Option<String> {
        self.token.read().expect("Auth lock poisoned").clone()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_store() -> (tempfile::TempDir, LocalStore) {
        let dir = tempfile::tempdir().unwrap();
        let store = LocalStore::new(dir.path()).unwrap();
        (dir, store)
    }

    #[test]
    fn test_token_survives_reload() {
        let (_dir, store) = temp_store();

        let state = AuthState::load(store.clone());
        assert!(!state.is_authenticated());

        state.set_token("abc123".to_string()).unwrap();
        assert!(state.is_authenticated());

        let reloaded = AuthState::load(store);
        assert_eq!(reloaded.token(), Some("abc123".to_string()));
    }

    #[test]
    fn test_logout_clears_memory_and_disk() {
        let (_dir, store) = temp_store();

        let state = AuthState::load(store.clone());
        state.set_token("abc123".to_string()).unwrap();

        state.logout().unwrap();
        assert!(!state.is_authenticated());
        assert_eq!(state.token(), None);

        // Disk is clear too: a fresh load sees no session
        let reloaded = AuthState::load(store);
        assert!(!reloaded.is_authenticated());
    }

    #[test]
    fn test_logout_is_idempotent() {
        let (_dir, store) = temp_store();
        let state = AuthState::load(store);

        state.logout().unwrap();
        state.logout().unwrap();
        assert!(!state.is_authenticated());
    }

    #[test]
    fn test_last_login_wins() {
        let (_dir, store) = temp_store();
        let state = AuthState::load(store);

        state.set_token("first".to_string()).unwrap();
        state.set_token("second".to_string()).unwrap();

        assert_eq!(state.token(), Some("second".to_string()));
    }
}
