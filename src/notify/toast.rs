//! Toast notifications
//!
//! Each toast walks through `Entering -> Visible -> Leaving` and is then
//! removed. The queue only tracks state; whoever owns it (a Leptos signal
//! in the browser) runs the timers and calls [`ToastQueue::advance`].

use crate::api::{ApiMessage, ApiResult, MessageStatus, PlanRoute};

/// Delay before a new toast slides in
pub const ENTER_DELAY_MS: u32 = 10;
/// Time from creation until a toast starts fading
pub const VISIBLE_MS: u32 = 3000;
/// Fade-out duration before removal
pub const FADE_MS: u32 = 300;

pub type ToastId = u64;

/// Visual flavour of a toast
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ToastKind {
    Success,
    Danger,
    Warning,
    Info,
    /// Unknown category
    Notice,
}

impl ToastKind {
    /// Map a flash category (`success`, `danger`, `warning`, `info`)
    pub fn from_category(category: &str) -> Self {
        match category.trim() {
            "success" => ToastKind::Success,
            "danger" => ToastKind::Danger,
            "warning" => ToastKind::Warning,
            "info" => ToastKind::Info,
            _ => ToastKind::Notice,
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            ToastKind::Success => "✅",
            ToastKind::Danger => "❌",
            ToastKind::Warning => "⚠️",
            ToastKind::Info => "ℹ️",
            ToastKind::Notice => "🔔",
        }
    }

    /// Category name, used as the toast's CSS modifier
    pub fn as_str(&self) -> &'static str {
        match self {
            ToastKind::Success => "success",
            ToastKind::Danger => "danger",
            ToastKind::Warning => "warning",
            ToastKind::Info => "info",
            ToastKind::Notice => "notice",
        }
    }

    pub fn background(&self) -> &'static str {
        match self {
            ToastKind::Success => "#28a745",
            ToastKind::Danger => "#dc3545",
            ToastKind::Warning => "#d39e00",
            ToastKind::Info => "#17a2b8",
            ToastKind::Notice => "#6c757d",
        }
    }
}

impl From<MessageStatus> for ToastKind {
    fn from(status: MessageStatus) -> Self {
        match status {
            MessageStatus::Sucesso => ToastKind::Success,
            MessageStatus::Erro => ToastKind::Danger,
        }
    }
}

/// Where a toast is in its lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastPhase {
    /// In the DOM, not yet visible (lets the CSS transition run)
    Entering,
    Visible,
    /// Fading out
    Leaving,
}

impl ToastPhase {
    /// Milliseconds to wait in this phase before advancing
    pub fn duration_ms(&self) -> u32 {
        match self {
            ToastPhase::Entering => ENTER_DELAY_MS,
            // VISIBLE_MS counts from creation
            ToastPhase::Visible => VISIBLE_MS - ENTER_DELAY_MS,
            ToastPhase::Leaving => FADE_MS,
        }
    }

    /// Next phase, `None` once the toast should be removed
    pub fn next(&self) -> Option<ToastPhase> {
        match self {
            ToastPhase::Entering => Some(ToastPhase::Visible),
            ToastPhase::Visible => Some(ToastPhase::Leaving),
            ToastPhase::Leaving => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub id: ToastId,
    pub kind: ToastKind,
    pub message: String,
    pub phase: ToastPhase,
}

impl Toast {
    pub fn is_visible(&self) -> bool {
        self.phase == ToastPhase::Visible
    }
}

/// Live toasts, oldest first
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ToastQueue {
    next_id: ToastId,
    toasts: Vec<Toast>,
}

impl ToastQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a toast in the `Entering` phase
    pub fn push(&mut self, kind: ToastKind, message: impl Into<String>) -> ToastId {
        let id = self.next_id;
        self.next_id += 1;

        self.toasts.push(Toast {
            id,
            kind,
            message: message.into(),
            phase: ToastPhase::Entering,
        });

        id
    }

    /// Move a toast to its next phase, removing it after `Leaving`
    ///
    /// Returns the new phase, or `None` if the toast is gone.
    pub fn advance(&mut self, id: ToastId) -> Option<ToastPhase> {
        let pos = self.toasts.iter().position(|t| t.id == id)?;

        match self.toasts[pos].phase.next() {
            Some(phase) => {
                self.toasts[pos].phase = phase;
                Some(phase)
            }
            None => {
                self.toasts.remove(pos);
                None
            }
        }
    }

    pub fn dismiss(&mut self, id: ToastId) {
        self.toasts.retain(|t| t.id != id);
    }

    pub fn get(&self, id: ToastId) -> Option<&Toast> {
        self.toasts.iter().find(|t| t.id == id)
    }

    pub fn toasts(&self) -> &[Toast] {
        &self.toasts
    }

    pub fn len(&self) -> usize {
        self.toasts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }
}

/// Toast for the outcome of a mutation call
pub fn mutation_notice(route: PlanRoute, result: &ApiResult<ApiMessage>) -> (ToastKind, String) {
    match result {
        Ok(msg) => (ToastKind::from(msg.status), msg.mensagem.clone()),
        Err(e) => (ToastKind::Danger, e.user_message(route)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::ApiError;

    #[test]
    fn test_category_mapping() {
        assert_eq!(ToastKind::from_category("success"), ToastKind::Success);
        assert_eq!(ToastKind::from_category("danger").icon(), "❌");
        assert_eq!(ToastKind::from_category("warning").icon(), "⚠️");
        assert_eq!(ToastKind::from_category("info").icon(), "ℹ️");
        assert_eq!(ToastKind::from_category("message").icon(), "🔔");
        assert_eq!(ToastKind::from(MessageStatus::Erro), ToastKind::Danger);
    }

    #[test]
    fn test_lifecycle() {
        let mut queue = ToastQueue::new();
        let id = queue.push(ToastKind::Success, "Plano salvo com sucesso!");
        assert_eq!(queue.get(id).map(|t| t.phase), Some(ToastPhase::Entering));
        assert!(!queue.get(id).unwrap().is_visible());

        assert_eq!(queue.advance(id), Some(ToastPhase::Visible));
        assert!(queue.get(id).unwrap().is_visible());
        assert_eq!(queue.advance(id), Some(ToastPhase::Leaving));
        assert_eq!(queue.advance(id), None);
        assert!(queue.is_empty());

        // Advancing a removed toast is a no-op
        assert_eq!(queue.advance(id), None);
    }

    #[test]
    fn test_phase_timings() {
        let total: u32 = [ToastPhase::Entering, ToastPhase::Visible, ToastPhase::Leaving]
            .iter()
            .map(|p| p.duration_ms())
            .sum();
        assert_eq!(total, 3300);

        // Fade starts VISIBLE_MS after creation
        let fade_at = ToastPhase::Entering.duration_ms() + ToastPhase::Visible.duration_ms();
        assert_eq!(fade_at, VISIBLE_MS);
    }

    #[test]
    fn test_independent_toasts() {
        let mut queue = ToastQueue::new();
        let a = queue.push(ToastKind::Info, "a");
        let b = queue.push(ToastKind::Danger, "b");
        assert_ne!(a, b);

        queue.advance(a);
        queue.dismiss(a);
        assert_eq!(queue.len(), 1);
        assert_eq!(queue.toasts()[0].message, "b");
        assert_eq!(queue.toasts()[0].phase, ToastPhase::Entering);
    }

    #[test]
    fn test_mutation_notice() {
        let ok = Ok(ApiMessage {
            status: MessageStatus::Sucesso,
            mensagem: "Plano excluído com sucesso".to_string(),
        });
        assert_eq!(
            mutation_notice(PlanRoute::Delete(1), &ok),
            (ToastKind::Success, "Plano excluído com sucesso".to_string())
        );

        let unauthorized = Err(ApiError::Unauthorized);
        assert_eq!(
            mutation_notice(PlanRoute::Create, &unauthorized),
            (ToastKind::Danger, "Faça login para salvar seus planos.".to_string())
        );

        let failed = Err(ApiError::Status(500));
        assert_eq!(
            mutation_notice(PlanRoute::Create, &failed).1,
            "Erro ao salvar plano."
        );
    }
}
