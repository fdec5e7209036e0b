//! Backend routes
//!
//! The HTTP surface this crate consumes. Transports (gloo-net in the
//! browser, reqwest natively) turn a `PlanRoute` into a request.

use crate::plan::PlanId;

/// Path of the backend's form login
pub const LOGIN_PATH: &str = "/login";

/// HTTP methods used by the backend API
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
    Patch,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Delete => "DELETE",
            Method::Patch => "PATCH",
        }
    }
}

impl std::fmt::Display for Method {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One backend endpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlanRoute {
    /// `GET /api/planos`
    List,
    /// `POST /criarplano`
    Create,
    /// `PUT /api/planos/:id`
    Update(PlanId),
    /// `DELETE /api/planos/:id`
    Delete(PlanId),
    /// `PATCH /api/planos/:id/principal`
    SetPrincipal(PlanId),
}

impl PlanRoute {
    pub fn method(&self) -> Method {
        match self {
            PlanRoute::List => Method::Get,
            PlanRoute::Create => Method::Post,
            PlanRoute::Update(_) => Method::Put,
            PlanRoute::Delete(_) => Method::Delete,
            PlanRoute::SetPrincipal(_) => Method::Patch,
        }
    }

    pub fn path(&self) -> String {
        match self {
            PlanRoute::List => "/api/planos".to_string(),
            PlanRoute::Create => "/criarplano".to_string(),
            PlanRoute::Update(id) | PlanRoute::Delete(id) => format!("/api/planos/{}", id),
            PlanRoute::SetPrincipal(id) => format!("/api/planos/{}/principal", id),
        }
    }

    /// Full URL against a base; an empty base yields a same-origin path
    pub fn url(&self, base: &str) -> String {
        format!("{}{}", base.trim_end_matches('/'), self.path())
    }

    /// Whether the request carries the plan as a JSON body
    pub fn has_body(&self) -> bool {
        matches!(self, PlanRoute::Create | PlanRoute::Update(_))
    }

    /// Message shown when this call fails for any reason but a 401
    pub fn failure_message(&self) -> &'static str {
        match self {
            PlanRoute::List => "Erro ao carregar planos.",
            PlanRoute::Create | PlanRoute::Update(_) => "Erro ao salvar plano.",
            PlanRoute::Delete(_) => "Erro ao excluir plano.",
            PlanRoute::SetPrincipal(_) => "Erro ao definir plano principal.",
        }
    }
}

impl std::fmt::Display for PlanRoute {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.method(), self.path())
    }
}
