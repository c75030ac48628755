//! # Auth Commands
//!
//! Tauri commands for login, logout, session status, and the profile lookup.
//!
//! ## Route Guard Contract
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Admin Route Guard                                    │
//! │                                                                         │
//! │  Frontend router, before rendering /admin:                              │
//! │                                                                         │
//! │    const { isAuthenticated } = await invoke('auth_status');             │
//! │    if (!isAuthenticated) {                                              │
//! │      // remember where the user wanted to go...                         │
//! │      navigate('/login', { state: { from: '/admin' } });                 │
//! │    }                                                                    │
//! │                                                                         │
//! │  After a successful invoke('login'), the login view forwards to the    │
//! │  remembered destination.                                                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::Serialize;
use tauri::State;
use tracing::debug;

use crate::error::CommandError;
use crate::state::{ApiState, AuthState};
use shopfront_core::{Credentials, User};

/// Session status for the frontend and its route guard.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthStatus {
    pub is_authenticated: bool,
}

/// Logs in against the storefront API and stores the bearer token.
///
/// On rejection the server's own message is surfaced when present, else a
/// generic fallback; the session stays unauthenticated. Concurrent logins
/// are not coordinated: the last one to complete wins the token slot.
#[tauri::command]
pub async fn login(
    api: State<'_, ApiState>,
    auth: State<'_, AuthState>,
    username: String,
    password: String,
) -> Result<AuthStatus, CommandError> {
    debug!(%username, "login command");

    let token = api
        .client()
        .login(&Credentials { username, password })
        .await?;
    auth.set_token(token)?;

    Ok(AuthStatus {
        is_authenticated: true,
    })
}

/// Clears the session from memory and disk. Idempotent.
#[tauri::command]
pub fn logout(auth: State<'_, AuthState>) -> Result<AuthStatus, CommandError> {
    debug!("logout command");

    auth.logout()?;
    Ok(AuthStatus {
        is_authenticated: false,
    })
}

/// Returns whether a session is present. The admin route guard reads this.
#[tauri::command]
pub fn auth_status(auth: State<'_, AuthState>) -> AuthStatus {
    AuthStatus {
        is_authenticated: auth.is_authenticated(),
    }
}

/// Fetches the signed-in user's profile. GET /users/{id} with the token.
#[tauri::command]
pub async fn get_profile(
    api: State<'_, ApiState>,
    auth: State<'_, AuthState>,
    user_id: u64,
) -> Result<User, CommandError> {
    debug!(user_id, "get_profile command");

    let token = auth
        .token()
        .ok_or_else(|| CommandError::auth("Not signed in"))?;

    Ok(api.client().get_user(user_id, &token).await?)
}
