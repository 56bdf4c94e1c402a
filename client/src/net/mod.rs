//! Networking modules for the association REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` performs HTTP calls, `error` classifies their failures, and `types`
//! defines the JSON schema shared with the API.

pub mod api;
pub mod error;
pub mod types;
