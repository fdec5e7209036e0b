//! Response interpretation
//!
//! Pure functions from `(status, body)` to outcomes, shared by every
//! transport so the browser and the CLI agree on what a response means.

use serde::{Deserialize, Serialize};

use super::error::{ApiError, ApiResult};
use crate::plan::Plan;

/// Outcome flag of a mutation response
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum MessageStatus {
    Sucesso,
    #[serde(other)]
    Erro,
}

/// Body of every mutation response: `{status, mensagem}`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ApiMessage {
    pub status: MessageStatus,
    #[serde(default)]
    pub mensagem: String,
}

impl ApiMessage {
    pub fn is_success(&self) -> bool {
        self.status == MessageStatus::Sucesso
    }
}

/// What `GET /api/planos` told us
#[derive(Debug, Clone, PartialEq)]
pub enum Listing {
    /// Signed in; the user's plans in backend order
    Plans(Vec<Plan>),
    /// Anything but a plan array: 401, login page, error object
    SignedOut,
}

fn is_success(status: u16) -> bool {
    (200..300).contains(&status)
}

/// Interpret the plan listing response
pub fn interpret_listing(status: u16, body: &str) -> Listing {
    if !is_success(status) {
        tracing::debug!(status, "plan listing refused");
        return Listing::SignedOut;
    }

    match serde_json::from_str::<Vec<Plan>>(body) {
        Ok(plans) => Listing::Plans(plans),
        Err(e) => {
            tracing::debug!(error = %e, "plan listing is not a plan array");
            Listing::SignedOut
        }
    }
}

/// Interpret a create/update/delete/principal response
pub fn interpret_mutation(status: u16, body: &str) -> ApiResult<ApiMessage> {
    if status == 401 {
        return Err(ApiError::Unauthorized);
    }
    if !is_success(status) {
        return Err(ApiError::Status(status));
    }
    Ok(serde_json::from_str(body)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_listing_array_means_signed_in() {
        let body = r#"[{"id": 1, "nome": "A", "principal": true, "linhas": []}]"#;
        match interpret_listing(200, body) {
            Listing::Plans(plans) => {
                assert_eq!(plans.len(), 1);
                assert!(plans[0].principal);
            }
            Listing::SignedOut => panic!("expected plans"),
        }

        assert_eq!(interpret_listing(200, "[]"), Listing::Plans(vec![]));
    }

    #[test]
    fn test_listing_with_unknown_line_kind_is_signed_in() {
        let body = r#"[{"id": 1, "nome": "A", "principal": true, "linhas": [
            {"id": 1, "tipo": "Receita", "descricao": "Salário", "valor": 3000},
            {"id": 2, "tipo": "Investimento", "descricao": "CDB", "valor": 500}
        ]}]"#;

        match interpret_listing(200, body) {
            Listing::Plans(plans) => {
                assert_eq!(plans[0].linhas.len(), 2);
                assert_eq!(plans[0].linhas[1].tipo, "Investimento");
            }
            Listing::SignedOut => panic!("a plan array means signed in"),
        }
    }

    #[test]
    fn test_listing_anything_else_means_signed_out() {
        let unauthorized = r#"{"mensagem": "Faça login para salvar seus planos.", "status": "erro"}"#;
        assert_eq!(interpret_listing(401, unauthorized), Listing::SignedOut);
        assert_eq!(interpret_listing(200, unauthorized), Listing::SignedOut);
        assert_eq!(interpret_listing(200, "<html>login</html>"), Listing::SignedOut);
    }

    #[test]
    fn test_mutation_success() {
        let body = r#"{"mensagem": "Plano salvo com sucesso!", "status": "sucesso"}"#;
        let msg = interpret_mutation(201, body).unwrap();
        assert!(msg.is_success());
        assert_eq!(msg.mensagem, "Plano salvo com sucesso!");
    }

    #[test]
    fn test_mutation_error_status_in_body() {
        let body = r#"{"mensagem": "Algo estranho", "status": "falhou"}"#;
        let msg = interpret_mutation(200, body).unwrap();
        assert_eq!(msg.status, MessageStatus::Erro);
        assert!(!msg.is_success());
    }

    #[test]
    fn test_mutation_failures() {
        assert_eq!(interpret_mutation(401, ""), Err(ApiError::Unauthorized));

        let not_found = r#"{"mensagem": "Plano não encontrado ou acesso negado", "status": "erro"}"#;
        assert_eq!(interpret_mutation(404, not_found), Err(ApiError::Status(404)));

        assert!(matches!(interpret_mutation(200, "oops"), Err(ApiError::Decode(_))));
    }
}
