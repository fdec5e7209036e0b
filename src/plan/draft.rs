//! Plan editor state
//!
//! A `PlanDraft` is the local, unsaved copy of a plan being created or
//! edited. Only one draft exists at a time; the UI keeps it in a signal
//! and the CLI builds one per command.

use super::error::{PlanError, PlanResult};
use super::types::{Line, LineKind, Plan, PlanId};
use crate::api::PlanRoute;

/// Maximum number of plans a user may keep
pub const MAX_PLANS: usize = 4;

/// Name given to a freshly started plan
pub const NEW_PLAN_NAME: &str = "Novo Plano";

/// What a draft will be saved as
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DraftTarget {
    /// Not stored yet, saved with `POST /criarplano`
    New,
    /// Stored plan, saved with `PUT /api/planos/:id`
    Existing(PlanId),
}

/// One editable field of a line
#[derive(Debug, Clone, PartialEq)]
pub enum LineField {
    Kind(LineKind),
    Description(String),
    Value(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct PlanDraft {
    target: DraftTarget,
    plan: Plan,
}

impl PlanDraft {
    /// Start a new plan with one empty line of each kind
    ///
    /// `existing` is the number of plans the user already has.
    pub fn start_new(existing: usize) -> PlanResult<Self> {
        if existing >= MAX_PLANS {
            tracing::debug!(existing, max = MAX_PLANS, "plan limit reached");
            return Err(PlanError::PlanLimitReached { max: MAX_PLANS });
        }

        let plan = LineKind::all()
            .iter()
            .fold(Plan::new(NEW_PLAN_NAME), |plan, kind| {
                plan.line(Line::blank(*kind))
            });

        Ok(Self {
            target: DraftTarget::New,
            plan,
        })
    }

    /// Open a stored plan for editing
    pub fn edit(plan: &Plan) -> Self {
        let target = match plan.id {
            Some(id) => DraftTarget::Existing(id),
            None => DraftTarget::New,
        };

        Self {
            target,
            plan: plan.clone(),
        }
    }

    pub fn target(&self) -> DraftTarget {
        self.target
    }

    pub fn plan(&self) -> &Plan {
        &self.plan
    }

    pub fn name(&self) -> &str {
        &self.plan.nome
    }

    pub fn lines(&self) -> &[Line] {
        &self.plan.linhas
    }

    pub fn into_plan(self) -> Plan {
        self.plan
    }

    pub fn rename(&mut self, nome: impl Into<String>) {
        self.plan.nome = nome.into();
    }

    /// Append an empty income line
    pub fn add_line(&mut self) {
        self.plan.linhas.push(Line::blank(LineKind::Receita));
    }

    pub fn push_line(&mut self, line: Line) {
        self.plan.linhas.push(line);
    }

    /// Drop every line, e.g. before filling a new plan from scratch
    pub fn clear_lines(&mut self) {
        self.plan.linhas.clear();
    }

    pub fn remove_line(&mut self, index: usize) -> PlanResult<Line> {
        self.check_index(index)?;
        Ok(self.plan.linhas.remove(index))
    }

    pub fn update_line(&mut self, index: usize, field: LineField) -> PlanResult<()> {
        self.check_index(index)?;
        let line = &mut self.plan.linhas[index];
        match field {
            LineField::Kind(kind) => line.tipo = kind.as_str().to_string(),
            LineField::Description(text) => line.descricao = text,
            LineField::Value(text) => line.valor = text,
        }
        Ok(())
    }

    /// Check the draft can be sent: a name and at least one line
    pub fn validate(&self) -> PlanResult<()> {
        if self.plan.nome.is_empty() || self.plan.linhas.is_empty() {
            return Err(PlanError::IncompleteDraft);
        }
        Ok(())
    }

    /// Route and body for saving this draft
    pub fn submission(&self) -> PlanResult<(PlanRoute, &Plan)> {
        self.validate()?;
        let route = match self.plan.id {
            Some(id) => PlanRoute::Update(id),
            None => PlanRoute::Create,
        };
        Ok((route, &self.plan))
    }

    fn check_index(&self, index: usize) -> PlanResult<()> {
        let len = self.plan.linhas.len();
        if index >= len {
            return Err(PlanError::LineOutOfRange { index, len });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_start_new_has_default_lines() {
        let draft = PlanDraft::start_new(0).unwrap();

        assert_eq!(draft.target(), DraftTarget::New);
        assert_eq!(draft.name(), "Novo Plano");
        let kinds: Vec<_> = draft.lines().iter().map(|l| l.kind().unwrap()).collect();
        assert_eq!(kinds, vec![LineKind::Receita, LineKind::Despesa, LineKind::Meta]);
        assert!(draft.lines().iter().all(|l| l.descricao.is_empty() && l.valor.is_empty()));
    }

    #[test]
    fn test_fifth_plan_is_rejected() {
        assert!(PlanDraft::start_new(3).is_ok());
        assert_eq!(
            PlanDraft::start_new(4),
            Err(PlanError::PlanLimitReached { max: MAX_PLANS })
        );
        assert!(PlanDraft::start_new(7).is_err());
    }

    #[test]
    fn test_edit_existing_targets_its_id() {
        let plan = Plan::new("Junho")
            .with_id(9)
            .line(Line::new(LineKind::Despesa, "Mercado", "600"));
        let draft = PlanDraft::edit(&plan);

        assert_eq!(draft.target(), DraftTarget::Existing(9));
        assert_eq!(draft.plan(), &plan);
    }

    #[test]
    fn test_line_editing() {
        let mut draft = PlanDraft::start_new(0).unwrap();
        draft.add_line();
        assert_eq!(draft.lines().len(), 4);
        assert_eq!(draft.lines()[3].kind(), Some(LineKind::Receita));

        draft.update_line(3, LineField::Kind(LineKind::Meta)).unwrap();
        draft
            .update_line(3, LineField::Description("Carro".to_string()))
            .unwrap();
        draft.update_line(3, LineField::Value("250".to_string())).unwrap();
        assert_eq!(draft.lines()[3], Line::new(LineKind::Meta, "Carro", "250"));

        let removed = draft.remove_line(0).unwrap();
        assert_eq!(removed.kind(), Some(LineKind::Receita));
        assert_eq!(draft.lines().len(), 3);
        assert_eq!(draft.lines()[0].kind(), Some(LineKind::Despesa));
    }

    #[test]
    fn test_out_of_range_leaves_draft_unchanged() {
        let mut draft = PlanDraft::start_new(0).unwrap();
        let before = draft.clone();

        assert_eq!(
            draft.remove_line(3),
            Err(PlanError::LineOutOfRange { index: 3, len: 3 })
        );
        assert!(draft
            .update_line(10, LineField::Value("1".to_string()))
            .is_err());
        assert_eq!(draft, before);
    }

    #[test]
    fn test_validation() {
        let mut draft = PlanDraft::start_new(0).unwrap();
        assert!(draft.validate().is_ok());

        draft.rename("");
        assert_eq!(draft.validate(), Err(PlanError::IncompleteDraft));

        // Only an empty name is rejected, as the backend does
        draft.rename("   ");
        assert!(draft.validate().is_ok());

        draft.rename("Férias");
        for _ in 0..3 {
            draft.remove_line(0).unwrap();
        }
        assert_eq!(draft.validate(), Err(PlanError::IncompleteDraft));
    }

    #[test]
    fn test_submission_route() {
        let draft = PlanDraft::start_new(1).unwrap();
        let (route, plan) = draft.submission().unwrap();
        assert_eq!(route, PlanRoute::Create);
        assert_eq!(plan.nome, "Novo Plano");

        let stored = Plan::new("Julho")
            .with_id(4)
            .line(Line::new(LineKind::Receita, "Salário", "3000"));
        let draft = PlanDraft::edit(&stored);
        let (route, _) = draft.submission().unwrap();
        assert_eq!(route, PlanRoute::Update(4));
    }
}
