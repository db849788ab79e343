use serde::{Deserialize, Serialize};

use crate::domain::common::{null_as_empty, EntityId};

/// Store user role
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    Admin,
    #[default]
    Client,
    #[serde(other)]
    Other,
}

impl UserRole {
    pub fn label(&self) -> &'static str {
        match self {
            UserRole::Admin => "Administrador",
            UserRole::Client => "Cliente",
            UserRole::Other => "Sin rol",
        }
    }
}

/// Signed-in user as returned by `/api/usuarios/login`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionUser {
    pub id: EntityId,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub nombre: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub apellido: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub email: String,
    #[serde(default)]
    pub role: UserRole,
}

impl SessionUser {
    pub fn is_admin(&self) -> bool {
        self.role == UserRole::Admin
    }

    /// "Nombre Apellido", falling back to `name`, then to the email
    pub fn display_name(&self) -> String {
        let full = format!("{} {}", self.nombre.trim(), self.apellido.trim());
        let full = full.trim();
        if !full.is_empty() {
            full.to_string()
        } else if !self.name.trim().is_empty() {
            self.name.trim().to_string()
        } else {
            self.email.clone()
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub message: String,
    pub usuario: SessionUser,
    pub token: String,
}
