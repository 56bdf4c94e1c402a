//! Build-time client configuration and well-known route/storage names.
//!
//! SYSTEM CONTEXT
//! ==============
//! The API base URL is baked in at compile time from `ASOPADEL_API_BASE`
//! because the WASM bundle has no process environment to read at runtime.
//! Everything else here is a fixed name shared by several modules.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

/// API base used when `ASOPADEL_API_BASE` is unset at build time.
pub const DEFAULT_API_BASE: &str = "/api";

/// `localStorage` key holding the access token.
pub const ACCESS_TOKEN_KEY: &str = "access_token";
/// `localStorage` key holding the refresh token.
pub const REFRESH_TOKEN_KEY: &str = "refresh_token";
/// `localStorage` key holding the serialized user profile.
pub const USER_KEY: &str = "user";
/// `localStorage` key holding the theme preference.
pub const THEME_KEY: &str = "theme";

/// Minimum password length accepted by the registration form.
pub const MIN_PASSWORD_LEN: usize = 8;

pub const HOME_PATH: &str = "/";
pub const LOGIN_PATH: &str = "/login";
pub const REGISTER_PATH: &str = "/register";
/// Where a freshly authenticated user lands.
pub const LANDING_PATH: &str = "/dashboard";
/// Target for paths no route matches.
pub const FALLBACK_PATH: &str = HOME_PATH;

/// Resolve the API base URL, without a trailing slash.
pub fn api_base() -> &'static str {
    normalize_base(option_env!("ASOPADEL_API_BASE").unwrap_or(DEFAULT_API_BASE))
}

fn normalize_base(raw: &str) -> &str {
    let trimmed = raw.trim().trim_end_matches('/');
    if trimmed.is_empty() { DEFAULT_API_BASE } else { trimmed }
}
