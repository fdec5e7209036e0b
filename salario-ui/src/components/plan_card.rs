//! Plan Card Component
//!
//! One stored plan: its lines and actions, or the editor while it is open.

use leptos::*;

use salario::{format_brl, DraftTarget, Line, Plan};

use super::plan_editor::PlanEditor;
use crate::state::use_global_state;

#[component]
pub fn PlanCard(plan: Plan, editing: Memo<Option<DraftTarget>>) -> impl IntoView {
    let id = plan.id;
    let is_editing = move || match (editing.get(), id) {
        (Some(DraftTarget::Existing(open)), Some(id)) => open == id,
        _ => false,
    };

    let class = if plan.principal {
        "plano-card principal"
    } else {
        "plano-card"
    };

    view! {
        <div class=class>
            <Show when=is_editing fallback=move || view! { <PlanSummary plan=plan.clone() /> }>
                <PlanEditor />
            </Show>
        </div>
    }
}

#[component]
fn PlanSummary(plan: Plan) -> impl IntoView {
    let state = use_global_state();

    let principal = plan.principal;
    let make_principal = plan.id.filter(|_| !principal).map(|id| {
        view! {
            <button
                class="btn btn-outline-primary btn-sm me-2"
                on:click=move |_| state.set_principal(id)
            >
                "⭐ Tornar Principal"
            </button>
        }
    });

    let for_edit = plan.clone();
    let for_delete = plan.clone();

    view! {
        <div>
            <div class="plano-cabecalho">
                <h3>{plan.nome.clone()}</h3>
                {principal.then(|| view! { <small class="selo-principal">"PRINCIPAL ⭐"</small> })}
                <div class="plano-acoes">
                    {make_principal}
                    <button
                        class="btn btn-warning btn-sm me-2"
                        title="Editar"
                        on:click=move |_| state.edit_plan(&for_edit)
                    >
                        "✏️"
                    </button>
                    <button
                        class="btn btn-danger btn-sm"
                        title="Excluir"
                        on:click=move |_| state.request_delete(&for_delete)
                    >
                        "❌"
                    </button>
                </div>
            </div>

            {plan
                .linhas
                .into_iter()
                .map(|line| view! { <LineItem line=line /> })
                .collect_view()}
        </div>
    }
}

const UNKNOWN_KIND_COLOR: &str = "#aaaaaa";

#[component]
fn LineItem(line: Line) -> impl IntoView {
    let color = line.kind().map_or(UNKNOWN_KIND_COLOR, |k| k.accent_color());

    view! {
        <div class="linha-item" style=format!("box-shadow: 0 4px 6px -1px {}55", color)>
            <div class="linha-info">
                <span>{line.descricao.clone()}</span>
                <small class="linha-tipo" style=format!("color: {}", color)>
                    {line.tipo.clone()}
                </small>
            </div>
            <span>{format_brl(line.amount())}</span>
        </div>
    }
}
