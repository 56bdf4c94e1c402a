//! Self-registration form model and its client-side checks.

#[cfg(test)]
#[path = "registration_test.rs"]
mod registration_test;

use crate::config::MIN_PASSWORD_LEN;
use crate::net::types::RegisterPayload;

/// Role a visitor may pick for themselves. Admin is never offered.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SelfRole {
    #[default]
    Player,
    Referee,
}

impl SelfRole {
    /// `<select>` option values.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Player => "jugador",
            Self::Referee => "arbitro",
        }
    }

    /// Unknown values fall back to player.
    pub fn parse(raw: &str) -> Self {
        match raw {
            "arbitro" => Self::Referee,
            _ => Self::Player,
        }
    }
}

/// Raw registration form fields as typed by the visitor.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RegistrationForm {
    pub cedula: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub telefono: String,
    pub role: SelfRole,
    pub password: String,
    pub password2: String,
}

/// Form problems caught before any request is sent.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Las contraseñas no coinciden")]
    PasswordMismatch,
    #[error("La contraseña debe tener al menos {min} caracteres")]
    PasswordTooShort { min: usize },
    #[error("Completa los campos obligatorios")]
    MissingField,
}

impl RegistrationForm {
    /// Check the form and build the request body.
    ///
    /// The body never grants the association-admin flag, whatever the form
    /// holds.
    ///
    /// # Errors
    ///
    /// Returns the first [`ValidationError`] found: mismatch, then length,
    /// then missing required fields.
    pub fn validate(&self) -> Result<RegisterPayload, ValidationError> {
        if self.password != self.password2 {
            return Err(ValidationError::PasswordMismatch);
        }
        if self.password.chars().count() < MIN_PASSWORD_LEN {
            return Err(ValidationError::PasswordTooShort { min: MIN_PASSWORD_LEN });
        }
        let required = [&self.cedula, &self.email, &self.first_name, &self.last_name];
        if required.iter().any(|field| field.trim().is_empty()) {
            return Err(ValidationError::MissingField);
        }

        let telefono = self.telefono.trim();
        Ok(RegisterPayload {
            cedula: self.cedula.trim().to_owned(),
            email: self.email.trim().to_owned(),
            password: self.password.clone(),
            first_name: self.first_name.trim().to_owned(),
            last_name: self.last_name.trim().to_owned(),
            telefono: (!telefono.is_empty()).then(|| telefono.to_owned()),
            es_jugador: self.role == SelfRole::Player,
            es_arbitro: self.role == SelfRole::Referee,
            es_admin_aso: false,
        })
    }
}
