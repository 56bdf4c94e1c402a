//! REST API helpers for communicating with the association API.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): every call returns [`ApiError::Unavailable`] since the
//! session lives in browser storage and only the browser can use it.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Result` outputs instead of panics so auth/list fetch failures
//! degrade UI behavior without crashing hydration. Nothing is retried.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use serde::de::DeserializeOwned;

use super::error::ApiError;
use super::types::{LoginRequest, LoginResponse, RegisterPayload, UserProfile};

/// Server collections rendered by the list views.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Collection {
    Tournaments,
    Courts,
    Matches,
    Users,
}

impl Collection {
    /// Path relative to the API base.
    pub fn path(self) -> &'static str {
        match self {
            Self::Tournaments => "/torneos/",
            Self::Courts => "/canchas/",
            Self::Matches => "/partidos/",
            Self::Users => "/usuarios/",
        }
    }
}

pub const LOGIN_PATH: &str = "/auth/login/";
pub const CURRENT_USER_PATH: &str = "/usuarios/me/";
pub const REGISTER_PATH: &str = "/usuarios/register/";

/// Join the API base and a path with exactly one slash between them.
fn endpoint(base: &str, path: &str) -> String {
    format!("{}/{}", base.trim_end_matches('/'), path.trim_start_matches('/'))
}

#[cfg(any(test, feature = "hydrate"))]
fn bearer(token: &str) -> String {
    format!("Bearer {token}")
}

/// Auth operations the session flows depend on.
///
/// `HttpApi` is the browser implementation; tests script their own.
#[allow(async_fn_in_trait)]
pub trait AuthApi {
    /// Exchange a cédula and password for tokens and the user profile.
    async fn login(&self, request: &LoginRequest) -> Result<LoginResponse, ApiError>;

    /// Fetch the profile that owns `access_token`.
    async fn current_user(&self, access_token: &str) -> Result<UserProfile, ApiError>;

    /// Create an account. The response body is not used.
    async fn register(&self, payload: &RegisterPayload) -> Result<(), ApiError>;
}

/// HTTP client bound to one API base URL.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpApi {
    base: String,
}

impl HttpApi {
    pub fn new(base: impl Into<String>) -> Self {
        Self { base: base.into() }
    }

    /// Client for the base URL chosen at build time.
    pub fn from_config() -> Self {
        Self::new(crate::config::api_base())
    }

    pub fn url(&self, path: &str) -> String {
        endpoint(&self.base, path)
    }

    /// GET a collection and flatten either response shape into items.
    ///
    /// # Errors
    ///
    /// Returns the transport, status, or decode failure of the request.
    pub async fn list<T: DeserializeOwned>(
        &self,
        collection: Collection,
        access_token: Option<&str>,
    ) -> Result<Vec<T>, ApiError> {
        let value: serde_json::Value = self.get_json(collection.path(), access_token).await?;
        super::types::decode_list(value).map_err(|e| ApiError::Decode(e.to_string()))
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str, access_token: Option<&str>) -> Result<T, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let mut request = gloo_net::http::Request::get(&self.url(path));
            if let Some(token) = access_token {
                request = request.header("Authorization", &bearer(token));
            }
            let resp = request.send().await.map_err(|e| ApiError::Network(e.to_string()))?;
            read_json(resp).await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (path, access_token);
            Err(ApiError::Unavailable)
        }
    }

    async fn post_json<B: serde::Serialize, T: DeserializeOwned>(&self, path: &str, body: &B) -> Result<T, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let resp = gloo_net::http::Request::post(&self.url(path))
                .json(body)
                .map_err(|e| ApiError::Network(e.to_string()))?
                .send()
                .await
                .map_err(|e| ApiError::Network(e.to_string()))?;
            read_json(resp).await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (path, body);
            Err(ApiError::Unavailable)
        }
    }
}

#[cfg(feature = "hydrate")]
async fn read_json<T: DeserializeOwned>(resp: gloo_net::http::Response) -> Result<T, ApiError> {
    if !resp.ok() {
        let status = resp.status();
        let body = resp.text().await.unwrap_or_default();
        return Err(ApiError::from_status(status, &body));
    }
    resp.json::<T>().await.map_err(|e| ApiError::Decode(e.to_string()))
}

impl AuthApi for HttpApi {
    async fn login(&self, request: &LoginRequest) -> Result<LoginResponse, ApiError> {
        self.post_json(LOGIN_PATH, request).await
    }

    async fn current_user(&self, access_token: &str) -> Result<UserProfile, ApiError> {
        self.get_json(CURRENT_USER_PATH, Some(access_token)).await
    }

    async fn register(&self, payload: &RegisterPayload) -> Result<(), ApiError> {
        let _created: serde_json::Value = self.post_json(REGISTER_PATH, payload).await?;
        Ok(())
    }
}
