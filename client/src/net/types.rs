//! REST DTOs for the association API.
//!
//! DESIGN
//! ======
//! Field names mirror the API's JSON so serde stays schema-driven. Optional
//! fields carry `#[serde(default)]` because list serializers and detail
//! serializers do not always agree on which fields they include.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

/// Role flags as reported by the API.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleFlags {
    #[serde(default)]
    pub es_jugador: bool,
    #[serde(default)]
    pub es_arbitro: bool,
    #[serde(default)]
    pub es_admin_aso: bool,
}

/// A single association role.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Role {
    Player,
    Referee,
    AssociationAdmin,
}

impl Role {
    pub fn label(self) -> &'static str {
        match self {
            Self::Player => "Jugador",
            Self::Referee => "Árbitro",
            Self::AssociationAdmin => "Admin",
        }
    }
}

impl RoleFlags {
    /// Roles in display order: admin, referee, player.
    pub fn roles(self) -> Vec<Role> {
        let mut roles = Vec::new();
        if self.es_admin_aso {
            roles.push(Role::AssociationAdmin);
        }
        if self.es_arbitro {
            roles.push(Role::Referee);
        }
        if self.es_jugador {
            roles.push(Role::Player);
        }
        roles
    }

    pub fn has(self, role: Role) -> bool {
        match role {
            Role::Player => self.es_jugador,
            Role::Referee => self.es_arbitro,
            Role::AssociationAdmin => self.es_admin_aso,
        }
    }
}

/// Authenticated user profile from `/usuarios/me/` or the login response.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    pub id: i64,
    /// National ID; the login identifier.
    pub cedula: String,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub telefono: Option<String>,
    #[serde(flatten)]
    pub roles: RoleFlags,
}

impl UserProfile {
    /// Short name for the navbar: first name, or the cédula when it is blank.
    pub fn display_name(&self) -> &str {
        if self.first_name.trim().is_empty() { &self.cedula } else { &self.first_name }
    }

    /// Full name for tables, preferring the server-computed value.
    pub fn full_name(&self) -> String {
        if let Some(name) = self.full_name.as_deref().filter(|n| !n.trim().is_empty()) {
            return name.to_owned();
        }
        format!("{} {}", self.first_name, self.last_name).trim().to_owned()
    }

    pub fn is_admin(&self) -> bool {
        self.roles.has(Role::AssociationAdmin)
    }
}

/// Body of `POST /auth/login/`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct LoginRequest {
    pub cedula: String,
    pub password: String,
}

/// Successful login response.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct LoginResponse {
    pub access: String,
    pub refresh: String,
    pub user: UserProfile,
}

/// Body of `POST /usuarios/register/`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct RegisterPayload {
    pub cedula: String,
    pub email: String,
    pub password: String,
    pub first_name: String,
    pub last_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub telefono: Option<String>,
    pub es_jugador: bool,
    pub es_arbitro: bool,
    pub es_admin_aso: bool,
}

/// Tournament summary from `/torneos/`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tournament {
    pub id: i64,
    pub nombre: String,
    #[serde(default)]
    pub descripcion: String,
    #[serde(default)]
    pub fecha_inicio: Option<String>,
    #[serde(default)]
    pub fecha_fin: Option<String>,
    #[serde(default)]
    pub estado: String,
    #[serde(default)]
    pub total_partidos: Option<u32>,
}

/// Court from `/canchas/`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Court {
    pub id: i64,
    pub nombre: String,
    #[serde(default)]
    pub descripcion: Option<String>,
    #[serde(default)]
    pub disponible: bool,
    #[serde(default)]
    pub reservas_activas: Option<u32>,
}

/// Match from `/partidos/`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Match {
    pub id: i64,
    #[serde(default)]
    pub torneo_nombre: Option<String>,
    #[serde(default)]
    pub cancha_nombre: Option<String>,
    #[serde(default)]
    pub fecha: Option<String>,
    #[serde(default)]
    pub hora: Option<String>,
    #[serde(default)]
    pub estado: String,
    #[serde(default)]
    pub resultado: Option<String>,
}

/// Progress of a match, derived from its `estado` string.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MatchStatus {
    Scheduled,
    InProgress,
    Finished,
}

impl MatchStatus {
    pub fn from_estado(estado: &str) -> Self {
        match estado.trim().to_ascii_lowercase().as_str() {
            "finalizado" => Self::Finished,
            "en_curso" => Self::InProgress,
            _ => Self::Scheduled,
        }
    }

    /// BEM modifier for the status badge.
    pub fn badge_class(self) -> &'static str {
        match self {
            Self::Scheduled => "badge badge--scheduled",
            Self::InProgress => "badge badge--live",
            Self::Finished => "badge badge--finished",
        }
    }
}

impl Match {
    pub fn status(&self) -> MatchStatus {
        MatchStatus::from_estado(&self.estado)
    }
}

/// A collection response: either a bare array or a paginated envelope.
///
/// Both shapes carry the same items; callers flatten with
/// [`ListPayload::into_items`].
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum ListPayload<T> {
    Bare(Vec<T>),
    Envelope { results: Vec<T> },
}

impl<T> ListPayload<T> {
    pub fn into_items(self) -> Vec<T> {
        match self {
            Self::Bare(items) => items,
            Self::Envelope { results } => results,
        }
    }
}

/// Decode any list response shape into its items.
///
/// # Errors
///
/// Returns the serde error when the value is neither an array nor a
/// `{results: [...]}` envelope of `T`.
pub fn decode_list<T: DeserializeOwned>(value: serde_json::Value) -> Result<Vec<T>, serde_json::Error> {
    serde_json::from_value::<ListPayload<T>>(value).map(ListPayload::into_items)
}
