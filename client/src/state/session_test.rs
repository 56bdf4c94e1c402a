use std::cell::{Cell, RefCell};

use futures::executor::block_on;

use super::*;
use crate::net::types::{LoginResponse, RegisterPayload, RoleFlags};
use crate::state::registration::SelfRole;
use crate::util::storage::MemoryStore;

// =============================================================
// Helpers
// =============================================================

fn user() -> UserProfile {
    UserProfile {
        id: 42,
        cedula: "12345678".to_owned(),
        first_name: "Ana".to_owned(),
        last_name: "Pérez".to_owned(),
        email: "ana@example.com".to_owned(),
        full_name: None,
        telefono: None,
        roles: RoleFlags { es_jugador: true, es_arbitro: false, es_admin_aso: false },
    }
}

fn login_ok() -> Result<LoginResponse, ApiError> {
    Ok(LoginResponse { access: "access-1".to_owned(), refresh: "refresh-1".to_owned(), user: user() })
}

fn rejected(detail: &str) -> ApiError {
    ApiError::Rejected { status: 401, detail: Some(detail.to_owned()) }
}

/// Scripted API that records every call it receives.
struct FakeApi {
    login_result: Result<LoginResponse, ApiError>,
    me_result: Result<UserProfile, ApiError>,
    register_result: Result<(), ApiError>,
    login_calls: Cell<u32>,
    me_calls: Cell<u32>,
    me_tokens: RefCell<Vec<String>>,
    registered: RefCell<Vec<RegisterPayload>>,
}

impl FakeApi {
    fn new() -> Self {
        Self {
            login_result: login_ok(),
            me_result: Ok(user()),
            register_result: Ok(()),
            login_calls: Cell::new(0),
            me_calls: Cell::new(0),
            me_tokens: RefCell::new(Vec::new()),
            registered: RefCell::new(Vec::new()),
        }
    }

    fn network_calls(&self) -> u32 {
        self.login_calls.get() + self.me_calls.get() + u32::try_from(self.registered.borrow().len()).unwrap()
    }
}

impl AuthApi for FakeApi {
    async fn login(&self, _request: &LoginRequest) -> Result<LoginResponse, ApiError> {
        self.login_calls.set(self.login_calls.get() + 1);
        self.login_result.clone()
    }

    async fn current_user(&self, access_token: &str) -> Result<UserProfile, ApiError> {
        self.me_calls.set(self.me_calls.get() + 1);
        self.me_tokens.borrow_mut().push(access_token.to_owned());
        self.me_result.clone()
    }

    async fn register(&self, payload: &RegisterPayload) -> Result<(), ApiError> {
        self.registered.borrow_mut().push(payload.clone());
        self.register_result.clone()
    }
}

fn session_keys() -> Vec<String> {
    vec!["access_token".to_owned(), "refresh_token".to_owned(), "user".to_owned()]
}

fn stored_session() -> SessionStore<MemoryStore> {
    let session = SessionStore::new(MemoryStore::new());
    session.save("stale-token", "stale-refresh", &user());
    session
}

fn registration(password: &str, password2: &str) -> RegistrationForm {
    RegistrationForm {
        cedula: "12345678".to_owned(),
        email: "ana@example.com".to_owned(),
        first_name: "Ana".to_owned(),
        last_name: "Pérez".to_owned(),
        telefono: String::new(),
        role: SelfRole::Player,
        password: password.to_owned(),
        password2: password2.to_owned(),
    }
}

// =============================================================
// SessionStore
// =============================================================

#[test]
fn save_writes_exactly_three_entries() {
    let session = SessionStore::new(MemoryStore::new());
    session.save("a", "r", &user());
    assert_eq!(session.inner().keys(), session_keys());
    assert_eq!(session.access_token().as_deref(), Some("a"));
    assert_eq!(session.refresh_token().as_deref(), Some("r"));
    assert_eq!(session.cached_user(), Some(user()));
}

#[test]
fn save_overwrites_previous_session() {
    let session = stored_session();
    session.save("fresh", "fresh-refresh", &user());
    assert_eq!(session.access_token().as_deref(), Some("fresh"));
    assert_eq!(session.inner().keys().len(), 3);
}

#[test]
fn is_authenticated_tracks_access_token_presence() {
    let session = SessionStore::new(MemoryStore::new());
    assert!(!session.is_authenticated());
    session.inner().set("access_token", "");
    assert!(!session.is_authenticated());
    session.inner().set("access_token", "not-even-a-jwt");
    assert!(session.is_authenticated());
}

#[test]
fn cached_user_fails_soft_on_malformed_entry() {
    let session = SessionStore::new(MemoryStore::new());
    session.inner().set("user", "{\"id\":");
    assert_eq!(session.cached_user(), None);
}

#[test]
fn clear_leaves_unrelated_keys() {
    let session = stored_session();
    session.inner().set("theme", "dark");
    session.clear();
    assert_eq!(session.inner().keys(), vec!["theme".to_owned()]);
}

// =============================================================
// bootstrap
// =============================================================

#[test]
fn bootstrap_without_token_is_anonymous_and_does_not_fetch() {
    let session = SessionStore::new(MemoryStore::new());
    let api = FakeApi::new();
    assert_eq!(block_on(bootstrap(&session, &api)), AuthState::Anonymous);
    assert_eq!(api.me_calls.get(), 0);
}

#[test]
fn bootstrap_with_token_and_successful_fetch_is_authenticated() {
    let session = stored_session();
    let mut api = FakeApi::new();
    let mut fresh = user();
    fresh.first_name = "Ana María".to_owned();
    api.me_result = Ok(fresh.clone());

    assert_eq!(block_on(bootstrap(&session, &api)), AuthState::Authenticated(fresh));
    assert_eq!(api.me_calls.get(), 1);
    assert_eq!(*api.me_tokens.borrow(), vec!["stale-token".to_owned()]);
    assert!(session.is_authenticated());
}

#[test]
fn bootstrap_with_failed_fetch_clears_all_entries() {
    let session = stored_session();
    let mut api = FakeApi::new();
    api.me_result = Err(ApiError::Unauthorized);

    assert_eq!(block_on(bootstrap(&session, &api)), AuthState::Anonymous);
    assert!(session.inner().is_empty());
}

#[test]
fn bootstrap_network_failure_also_demotes() {
    let session = stored_session();
    let mut api = FakeApi::new();
    api.me_result = Err(ApiError::Network("offline".to_owned()));

    assert_eq!(block_on(bootstrap(&session, &api)), AuthState::Anonymous);
    assert!(!session.is_authenticated());
}

#[test]
fn demotion_reason_separates_rejected_tokens_from_outages() {
    assert_eq!(demotion_reason(&ApiError::Unauthorized), "stored token rejected");
    assert_eq!(demotion_reason(&ApiError::Network("offline".to_owned())), "current-user fetch failed");
    assert_eq!(
        demotion_reason(&ApiError::Rejected { status: 500, detail: None }),
        "current-user fetch failed"
    );
}

// =============================================================
// login / logout
// =============================================================

#[test]
fn login_success_persists_three_entries() {
    let session = SessionStore::new(MemoryStore::new());
    let api = FakeApi::new();

    let user = block_on(login(&session, &api, "12345678", "secret-pass")).unwrap();
    assert_eq!(user.id, 42);
    assert_eq!(session.inner().keys(), session_keys());
    assert_eq!(session.access_token().as_deref(), Some("access-1"));
}

#[test]
fn login_failure_persists_nothing() {
    let session = SessionStore::new(MemoryStore::new());
    let mut api = FakeApi::new();
    api.login_result = Err(rejected("No active account found with the given credentials"));

    let err = block_on(login(&session, &api, "12345678", "wrong")).unwrap_err();
    assert_eq!(err.user_message("Cédula o contraseña incorrecta"), "No active account found with the given credentials");
    assert!(session.inner().is_empty());
}

#[test]
fn login_failure_keeps_prior_session() {
    let session = stored_session();
    let mut api = FakeApi::new();
    api.login_result = Err(ApiError::Network("offline".to_owned()));

    assert!(block_on(login(&session, &api, "12345678", "x")).is_err());
    assert_eq!(session.access_token().as_deref(), Some("stale-token"));
}

#[test]
fn logout_twice_matches_logout_once() {
    let once = stored_session();
    logout(&once);

    let twice = stored_session();
    logout(&twice);
    logout(&twice);

    assert_eq!(once.inner().keys(), twice.inner().keys());
    assert!(twice.inner().is_empty());
}

// =============================================================
// register
// =============================================================

#[test]
fn register_short_password_makes_no_request() {
    let session = SessionStore::new(MemoryStore::new());
    let api = FakeApi::new();

    let err = block_on(register(&session, &api, &registration("abcdefg", "abcdefg"))).unwrap_err();
    assert_eq!(err, RegisterError::Invalid(ValidationError::PasswordTooShort { min: 8 }));
    assert_eq!(api.network_calls(), 0);
}

#[test]
fn register_mismatch_makes_no_request() {
    let session = SessionStore::new(MemoryStore::new());
    let api = FakeApi::new();

    let err = block_on(register(&session, &api, &registration("abcdefgh", "hgfedcba"))).unwrap_err();
    assert_eq!(err, RegisterError::Invalid(ValidationError::PasswordMismatch));
    assert_eq!(api.network_calls(), 0);
}

#[test]
fn register_sends_non_admin_payload_then_auto_logs_in() {
    let session = SessionStore::new(MemoryStore::new());
    let api = FakeApi::new();

    let user = block_on(register(&session, &api, &registration("abcdefgh", "abcdefgh"))).unwrap();
    assert_eq!(user.id, 42);

    let sent = api.registered.borrow();
    assert_eq!(sent.len(), 1);
    assert!(!sent[0].es_admin_aso);
    assert_eq!(api.login_calls.get(), 1);
    assert_eq!(session.inner().keys(), session_keys());
}

#[test]
fn register_api_rejection_skips_login() {
    let session = SessionStore::new(MemoryStore::new());
    let mut api = FakeApi::new();
    api.register_result = Err(ApiError::Rejected { status: 400, detail: Some("ya existe".to_owned()) });

    let err = block_on(register(&session, &api, &registration("abcdefgh", "abcdefgh"))).unwrap_err();
    assert_eq!(err.user_message(), "ya existe");
    assert_eq!(api.login_calls.get(), 0);
    assert!(session.inner().is_empty());
}

#[test]
fn register_error_without_detail_uses_generic_message() {
    let err = RegisterError::AutoLogin(ApiError::Network("offline".to_owned()));
    assert_eq!(err.user_message(), "Error al registrarse. Verifica los datos.");
}
