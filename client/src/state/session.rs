//! Persisted session and the auth lifecycle flows built on it.
//!
//! SYSTEM CONTEXT
//! ==============
//! The session is three independent storage entries: access token, refresh
//! token, and the cached user profile. Login overwrites all three, logout
//! removes all three, and nothing else writes them.
//!
//! The flows here (`bootstrap`, `login`, `register`, `logout`) are generic over
//! the store and the API so they run unchanged in the browser and in tests.
//! `SessionContext` wraps them with reactive state for the UI.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use crate::config::{ACCESS_TOKEN_KEY, REFRESH_TOKEN_KEY, USER_KEY};
use crate::net::api::AuthApi;
use crate::net::error::ApiError;
use crate::net::types::{LoginRequest, UserProfile};
use crate::state::auth::AuthState;
use crate::state::registration::{RegistrationForm, ValidationError};
use crate::util::storage::KeyValueStore;

/// Typed access to the three session entries in a [`KeyValueStore`].
#[derive(Clone, Debug, Default)]
pub struct SessionStore<S> {
    store: S,
}

impl<S: KeyValueStore> SessionStore<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn inner(&self) -> &S {
        &self.store
    }

    /// Overwrite all three entries. Token shape is not checked.
    pub fn save(&self, access_token: &str, refresh_token: &str, user: &UserProfile) {
        self.store.set(ACCESS_TOKEN_KEY, access_token);
        self.store.set(REFRESH_TOKEN_KEY, refresh_token);
        self.store.save_json(USER_KEY, user);
    }

    /// Remove all three entries. Safe to call repeatedly.
    pub fn clear(&self) {
        self.store.remove(ACCESS_TOKEN_KEY);
        self.store.remove(REFRESH_TOKEN_KEY);
        self.store.remove(USER_KEY);
    }

    /// An access token is present. Says nothing about validity or expiry.
    pub fn is_authenticated(&self) -> bool {
        self.access_token().is_some()
    }

    pub fn access_token(&self) -> Option<String> {
        self.store.get(ACCESS_TOKEN_KEY).filter(|token| !token.is_empty())
    }

    pub fn refresh_token(&self) -> Option<String> {
        self.store.get(REFRESH_TOKEN_KEY)
    }

    /// The profile cached at login; `None` when missing or unreadable.
    pub fn cached_user(&self) -> Option<UserProfile> {
        self.store.load_json(USER_KEY)
    }
}

/// Settle the startup auth state.
///
/// Without a token nothing is fetched. With one, the current user is fetched
/// once; any failure clears the session.
pub async fn bootstrap<S: KeyValueStore, A: AuthApi>(session: &SessionStore<S>, api: &A) -> AuthState {
    let Some(token) = session.access_token() else {
        log::debug!("session: no access token, starting anonymous");
        return AuthState::Anonymous;
    };

    match api.current_user(&token).await {
        Ok(user) => {
            log::info!("session: restored user #{}", user.id);
            AuthState::Authenticated(user)
        }
        Err(e) => {
            log::warn!("session: {} ({e}); clearing session", demotion_reason(&e));
            session.clear();
            AuthState::Anonymous
        }
    }
}

/// Log wording for a bootstrap demotion.
pub fn demotion_reason(error: &ApiError) -> &'static str {
    if error.is_auth_failure() { "stored token rejected" } else { "current-user fetch failed" }
}

/// Log in and persist the session. A failed attempt writes nothing.
///
/// # Errors
///
/// Returns the API failure unchanged; the prior session, if any, is kept.
pub async fn login<S: KeyValueStore, A: AuthApi>(
    session: &SessionStore<S>,
    api: &A,
    cedula: &str,
    password: &str,
) -> Result<UserProfile, ApiError> {
    let request = LoginRequest { cedula: cedula.to_owned(), password: password.to_owned() };
    match api.login(&request).await {
        Ok(resp) => {
            session.save(&resp.access, &resp.refresh, &resp.user);
            log::info!("session: logged in user #{}", resp.user.id);
            Ok(resp.user)
        }
        Err(e) => {
            log::warn!("session: login failed: {e}");
            Err(e)
        }
    }
}

/// Remove the session. Idempotent.
pub fn logout<S: KeyValueStore>(session: &SessionStore<S>) {
    session.clear();
    log::info!("session: logged out");
}

/// Why a registration attempt did not produce a logged-in user.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum RegisterError {
    #[error(transparent)]
    Invalid(#[from] ValidationError),
    #[error("registration failed: {0}")]
    Register(ApiError),
    #[error("auto-login failed: {0}")]
    AutoLogin(ApiError),
}

impl RegisterError {
    /// Message for the registration form.
    pub fn user_message(&self) -> String {
        const FALLBACK: &str = "Error al registrarse. Verifica los datos.";
        match self {
            Self::Invalid(e) => e.to_string(),
            Self::Register(e) | Self::AutoLogin(e) => e.user_message(FALLBACK),
        }
    }
}

/// Validate, create the account, then log in with the same credentials.
///
/// Validation runs before any request, so an invalid form never reaches the
/// API.
///
/// # Errors
///
/// Returns the validation failure, the registration failure, or the
/// auto-login failure, in that order of precedence.
pub async fn register<S: KeyValueStore, A: AuthApi>(
    session: &SessionStore<S>,
    api: &A,
    form: &RegistrationForm,
) -> Result<UserProfile, RegisterError> {
    let payload = form.validate()?;
    api.register(&payload).await.map_err(RegisterError::Register)?;
    log::info!("session: registration accepted");
    login(session, api, &payload.cedula, &payload.password)
        .await
        .map_err(RegisterError::AutoLogin)
}
