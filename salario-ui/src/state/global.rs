//! Global Application State
//!
//! Reactive state management using Leptos signals. Every backend call goes
//! through a method here so the toast and reload rules live in one place.

use gloo_timers::callback::Timeout;
use leptos::*;

use salario::notify::{mutation_notice, ToastId};
use salario::{
    ApiMessage, ApiResult, Listing, Plan, PlanDraft, PlanId, PlanRoute, Totals, ToastKind,
    ToastPhase, ToastQueue,
};

use crate::api;

/// Global application state provided to all components
#[derive(Clone, Copy)]
pub struct GlobalState {
    /// Plans as last listed by the backend
    pub plans: RwSignal<Vec<Plan>>,
    /// Whether the last listing returned a plan array
    pub signed_in: RwSignal<bool>,
    /// Plan being created or edited, if any
    pub draft: RwSignal<Option<PlanDraft>>,
    /// Plan awaiting delete confirmation
    pub pending_delete: RwSignal<Option<Plan>>,
    /// Live toasts
    pub toasts: RwSignal<ToastQueue>,
    /// A listing request is in flight
    pub loading: RwSignal<bool>,
}

/// Provide global state to the component tree
pub fn provide_global_state() {
    let state = GlobalState {
        plans: create_rw_signal(Vec::new()),
        signed_in: create_rw_signal(false),
        draft: create_rw_signal(None),
        pending_delete: create_rw_signal(None),
        toasts: create_rw_signal(ToastQueue::new()),
        // Cleared by the first listing
        loading: create_rw_signal(true),
    };

    provide_context(state);
}

pub fn use_global_state() -> GlobalState {
    use_context::<GlobalState>().expect("GlobalState not found")
}

impl GlobalState {
    /// Totals of the principal plan, all zero without one
    pub fn totals(&self) -> Totals {
        self.plans.with(|plans| Totals::for_principal(plans))
    }

    /// Show a toast and run its lifecycle timers
    pub fn notify(&self, kind: ToastKind, message: impl Into<String>) {
        let message = message.into();
        if kind != ToastKind::Success {
            log_warn(&message);
        }

        if let Some(id) = self.toasts.try_update(|queue| queue.push(kind, message)) {
            schedule_toast(self.toasts, id, ToastPhase::Entering);
        }
    }

    /// Toast the outcome of a mutation
    fn notify_result(&self, route: PlanRoute, result: &ApiResult<ApiMessage>) {
        if let Err(e) = result {
            log_warn(&format!("{} failed: {}", route, e));
        }
        let (kind, message) = mutation_notice(route, result);
        self.notify(kind, message);
    }

    /// Refetch the plan list
    ///
    /// A transport failure leaves the current plans in place.
    pub fn reload_plans(&self) {
        let state = *self;
        spawn_local(async move {
            state.loading.set(true);
            match api::fetch_plans().await {
                Ok(Listing::Plans(plans)) => {
                    state.plans.set(plans);
                    state.signed_in.set(true);
                }
                Ok(Listing::SignedOut) => {
                    state.plans.set(Vec::new());
                    state.signed_in.set(false);
                }
                Err(e) => log_warn(&format!("Failed to load plans: {}", e)),
            }
            state.loading.set(false);
        });
    }

    /// Open a fresh draft, unless the plan limit is reached
    pub fn start_new_plan(&self) {
        let existing = self.plans.with(|plans| plans.len());
        match PlanDraft::start_new(existing) {
            Ok(draft) => self.draft.set(Some(draft)),
            Err(e) => self.notify(ToastKind::Danger, e.to_string()),
        }
    }

    /// Open a stored plan in the editor, replacing any open draft
    pub fn edit_plan(&self, plan: &Plan) {
        self.draft.set(Some(PlanDraft::edit(plan)));
    }

    pub fn cancel_draft(&self) {
        self.draft.set(None);
    }

    /// Apply a change to the open draft
    pub fn update_draft<R>(&self, f: impl FnOnce(&mut PlanDraft) -> R) -> Option<R> {
        self.draft.try_update(|draft| draft.as_mut().map(f)).flatten()
    }

    /// Validate and send the open draft
    ///
    /// The draft closes only when the backend answers `sucesso`.
    pub fn save_draft(&self) {
        let Some(draft) = self.draft.get_untracked() else {
            return;
        };
        let (route, plan) = match draft.submission() {
            Ok((route, plan)) => (route, plan.clone()),
            Err(e) => {
                self.notify(ToastKind::Danger, e.to_string());
                return;
            }
        };

        let state = *self;
        spawn_local(async move {
            let result = api::save_plan(&plan).await;
            state.notify_result(route, &result);

            if matches!(&result, Ok(msg) if msg.is_success()) {
                state.draft.set(None);
                state.reload_plans();
            }
        });
    }

    pub fn set_principal(&self, id: PlanId) {
        let state = *self;
        spawn_local(async move {
            let result = api::set_principal(id).await;
            state.notify_result(PlanRoute::SetPrincipal(id), &result);
            state.reload_plans();
        });
    }

    /// Ask for confirmation before deleting
    pub fn request_delete(&self, plan: &Plan) {
        self.pending_delete.set(Some(plan.clone()));
    }

    pub fn cancel_delete(&self) {
        self.pending_delete.set(None);
    }

    /// Delete the plan awaiting confirmation
    pub fn confirm_delete(&self) {
        let Some(plan) = self.pending_delete.get_untracked() else {
            return;
        };
        self.pending_delete.set(None);

        let Some(id) = plan.id else {
            return;
        };

        let state = *self;
        spawn_local(async move {
            let result = api::delete_plan(id).await;
            state.notify_result(PlanRoute::Delete(id), &result);
            state.reload_plans();
        });
    }
}

/// Advance a toast after its current phase elapses, until it is removed
fn schedule_toast(toasts: RwSignal<ToastQueue>, id: ToastId, phase: ToastPhase) {
    Timeout::new(phase.duration_ms(), move || {
        let next = toasts.try_update(|queue| queue.advance(id)).flatten();
        if let Some(phase) = next {
            schedule_toast(toasts, id, phase);
        }
    })
    .forget();
}

fn log_warn(message: &str) {
    web_sys::console::warn_1(&message.into());
}
