//! API error types
//!
//! Every failure ends up as one toast string: a 401 gets a fixed message,
//! everything else collapses to the route's generic message.

use thiserror::Error;

use super::routes::PlanRoute;

/// Message shown for any 401 from the backend
pub const UNAUTHORIZED_MESSAGE: &str = "Faça login para salvar seus planos.";

/// Errors talking to the backend
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// Backend answered 401
    #[error("Not signed in")]
    Unauthorized,

    /// Any other non-2xx status
    #[error("HTTP status {0}")]
    Status(u16),

    /// Request never got a response
    #[error("Network error: {0}")]
    Network(String),

    /// Response body was not what the route returns
    #[error("Parse error: {0}")]
    Decode(String),

    /// Credentials rejected by the login form
    #[error("Login failed")]
    LoginFailed,
}

impl ApiError {
    /// Text for the toast shown when `route` failed with this error
    pub fn user_message(&self, route: PlanRoute) -> String {
        match self {
            ApiError::Unauthorized => UNAUTHORIZED_MESSAGE.to_string(),
            ApiError::LoginFailed => "E-mail ou senha inválidos.".to_string(),
            _ => route.failure_message().to_string(),
        }
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::Decode(err.to_string())
    }
}

/// Result type for backend calls
pub type ApiResult<T> = Result<T, ApiError>;
