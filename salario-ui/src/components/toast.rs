//! Toast Notification Component
//!
//! Renders the toast queue. Timers live in `GlobalState::notify`; this only
//! maps each toast's phase to CSS classes.

use leptos::*;

use salario::notify::ToastId;
use salario::{ToastKind, ToastPhase};

use crate::state::use_global_state;

/// Toast notification container
#[component]
pub fn Toasts() -> impl IntoView {
    let state = use_global_state();

    let ids = move || {
        state
            .toasts
            .with(|queue| queue.toasts().iter().map(|t| t.id).collect::<Vec<_>>())
    };

    view! {
        <div class="notificacoes">
            <For each=ids key=|id| *id children=move |id| view! { <ToastMessage id=id /> } />
        </div>
    }
}

#[component]
fn ToastMessage(id: ToastId) -> impl IntoView {
    let state = use_global_state();

    let Some(toast) = state.toasts.with_untracked(|queue| queue.get(id).cloned()) else {
        return ().into_view();
    };
    let kind = toast.kind;

    let class = move || {
        let phase = state.toasts.with(|queue| queue.get(id).map(|t| t.phase));
        toast_class(kind, phase)
    };

    view! {
        <div
            class=class
            style=format!("background-color: {}", kind.background())
            on:click=move |_| state.toasts.update(|queue| queue.dismiss(id))
        >
            <span class="icon">{kind.icon()}</span>
            " "
            {toast.message}
        </div>
    }
    .into_view()
}

/// CSS classes for a toast; only the visible phase is opaque
fn toast_class(kind: ToastKind, phase: Option<ToastPhase>) -> String {
    match phase {
        Some(ToastPhase::Visible) => format!("notificacao {} visivel", kind.as_str()),
        _ => format!("notificacao {}", kind.as_str()),
    }
}
