use crate::state::session::{Role, Session, UnknownRole};
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Login payload from the auth service. `role` stays a raw string until it is
/// checked against the known roles.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub token: String,
    pub role: String,
}

impl LoginResponse {
    pub fn credentials(&self) -> Result<(&str, Role), ApiError> {
        let role: Role = self.role.parse()?;
        if self.token.is_empty() {
            return Err(ApiError::Decode("login response carried an empty token".into()));
        }
        Ok((&self.token, role))
    }

    pub fn session(&self) -> Result<Session, ApiError> {
        let (token, role) = self.credentials()?;
        Ok(Session::new(token, role))
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterRequest {
    pub username: String,
    pub email: String,
    pub password: String,
    pub role: Role,
}

/// Error body returned by the auth endpoints: `{"error": "..."}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    #[error("Request failed: {0}")]
    Request(String),
    #[error("{message}")]
    Rejected { status: u16, message: String },
    #[error("Failed to parse response: {0}")]
    Decode(String),
    #[error(transparent)]
    UnknownRole(#[from] UnknownRole),
}
