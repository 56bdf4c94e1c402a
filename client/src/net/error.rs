//! Typed failures for REST calls.
//!
//! ERROR HANDLING
//! ==============
//! `Unauthorized` is the only variant that touches session state (the
//! bootstrap demotes to anonymous on it, and on every other failure of the
//! current-user fetch). Forms and list views render everything else as a
//! message and leave the session alone.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

/// Failure of a single API request.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// Transport failure before any HTTP status was received.
    #[error("network error: {0}")]
    Network(String),
    /// The API rejected the credentials or token (HTTP 401).
    #[error("unauthorized")]
    Unauthorized,
    /// Any other non-success status, with the server's explanation if it gave one.
    #[error("request rejected ({status})")]
    Rejected { status: u16, detail: Option<String> },
    /// A success status whose body did not match the expected shape.
    #[error("unexpected response: {0}")]
    Decode(String),
    /// HTTP is only available in the browser build.
    #[error("not available on server")]
    Unavailable,
}

impl ApiError {
    /// Build the error for a non-success status from its (possibly empty) body.
    pub fn from_status(status: u16, body: &str) -> Self {
        let detail = serde_json::from_str::<serde_json::Value>(body)
            .ok()
            .and_then(|value| detail_message(&value));
        if status == 401 {
            // SimpleJWT answers bad credentials with 401 + detail; keep it for the form.
            return match detail {
                Some(detail) => Self::Rejected { status, detail: Some(detail) },
                None => Self::Unauthorized,
            };
        }
        Self::Rejected { status, detail }
    }

    /// Whether the API refused the caller's credentials or token.
    pub fn is_auth_failure(&self) -> bool {
        matches!(self, Self::Unauthorized | Self::Rejected { status: 401, .. })
    }

    /// Message for a form: the server's explanation, else `fallback`.
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            Self::Rejected { detail: Some(detail), .. } => detail.clone(),
            _ => fallback.to_owned(),
        }
    }
}

/// Pull a human-readable message out of a DRF error body.
///
/// Prefers `detail`, then the first `cedula` field error.
pub fn detail_message(body: &serde_json::Value) -> Option<String> {
    let obj = body.as_object()?;
    obj.get("detail")
        .and_then(first_text)
        .or_else(|| obj.get("cedula").and_then(first_text))
}

fn first_text(value: &serde_json::Value) -> Option<String> {
    match value {
        serde_json::Value::String(s) if !s.trim().is_empty() => Some(s.clone()),
        serde_json::Value::Array(items) => items.iter().find_map(first_text),
        _ => None,
    }
}
