//! Plan editing error types
//!
//! Client-side rules that reject an action before anything is sent to the
//! backend. `Display` is the message shown to the user.

use thiserror::Error;

/// Errors raised by the plan editor rules
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PlanError {
    /// The user already has the maximum number of plans
    #[error("Limite atingido: exclua algum plano ou edite um existente.")]
    PlanLimitReached { max: usize },

    /// Name is blank or the plan has no lines
    #[error("Preencha o nome e pelo menos uma linha!")]
    IncompleteDraft,

    /// Line index outside the draft
    #[error("Linha {index} inexistente (o plano tem {len} linhas)")]
    LineOutOfRange { index: usize, len: usize },

    /// Kind string is not Receita, Despesa or Meta
    #[error("Tipo de linha desconhecido: {0}")]
    UnknownLineKind(String),
}

/// Result type alias for plan editing
pub type PlanResult<T> = Result<T, PlanError>;
