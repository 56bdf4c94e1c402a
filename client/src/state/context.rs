//! Process-wide session context shared through Leptos context.
//!
//! SYSTEM CONTEXT
//! ==============
//! `App` provides one `SessionContext`; pages and components read
//! `state` reactively instead of touching storage. `init` runs the bootstrap
//! once, `login`/`register` promote to authenticated, and `logout` forces a
//! full page load so no component keeps state from the old session.

use leptos::prelude::*;

use crate::net::api::HttpApi;
use crate::net::error::ApiError;
use crate::net::types::UserProfile;
use crate::state::auth::AuthState;
use crate::state::registration::RegistrationForm;
use crate::state::session::{self, RegisterError, SessionStore};
use crate::util::storage::LocalStorage;

#[derive(Clone, Copy, Debug)]
pub struct SessionContext {
    pub state: RwSignal<AuthState>,
}

impl SessionContext {
    /// Create the context in `Loading` and provide it to descendants.
    pub fn provide() -> Self {
        let ctx = Self { state: RwSignal::new(AuthState::Loading) };
        provide_context(ctx);
        ctx
    }

    pub fn expect() -> Self {
        expect_context::<Self>()
    }

    /// Persistent session backed by `localStorage`.
    pub fn store() -> SessionStore<LocalStorage> {
        SessionStore::new(LocalStorage)
    }

    /// Run the startup bootstrap once. Browser only; SSR stays `Loading`.
    pub fn init(self) {
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let settled = session::bootstrap(&Self::store(), &HttpApi::from_config()).await;
            self.state.set(settled);
        });
    }

    /// Log in and publish the authenticated state.
    ///
    /// # Errors
    ///
    /// Returns the API failure; the state and stored session are unchanged.
    pub async fn login(self, cedula: &str, password: &str) -> Result<UserProfile, ApiError> {
        let user = session::login(&Self::store(), &HttpApi::from_config(), cedula, password).await?;
        self.state.set(AuthState::Authenticated(user.clone()));
        Ok(user)
    }

    /// Register, auto-login, and publish the authenticated state.
    ///
    /// # Errors
    ///
    /// Returns the validation, registration, or auto-login failure.
    pub async fn register(self, form: &RegistrationForm) -> Result<UserProfile, RegisterError> {
        let user = session::register(&Self::store(), &HttpApi::from_config(), form).await?;
        self.state.set(AuthState::Authenticated(user.clone()));
        Ok(user)
    }

    /// Clear the session and reload on `redirect_to`.
    pub fn logout(self, redirect_to: &str) {
        session::logout(&Self::store());
        self.state.set(AuthState::Anonymous);
        #[cfg(feature = "hydrate")]
        {
            if let Some(window) = web_sys::window() {
                let _ = window.location().set_href(redirect_to);
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = redirect_to;
        }
    }

    /// Access token for authorized list requests.
    pub fn access_token() -> Option<String> {
        Self::store().access_token()
    }
}
