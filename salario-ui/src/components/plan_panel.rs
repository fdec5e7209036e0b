//! Plans Panel
//!
//! Lists the user's plans and hosts the editor and the delete dialog.

use leptos::*;

use salario::DraftTarget;

use super::confirm_delete::ConfirmDelete;
use super::plan_card::PlanCard;
use super::plan_editor::PlanEditor;
use crate::state::use_global_state;

#[component]
pub fn PlansPanel() -> impl IntoView {
    let state = use_global_state();

    // Changes only when another plan is opened, not on every keystroke
    let editing = create_memo(move |_| state.draft.with(|d| d.as_ref().map(|d| d.target())));

    view! {
        <div id="painel-planos">
            <h2 class="painel-titulo">"Meus Planos Salariais"</h2>
            <p class="painel-subtitulo">"Acompanhe seus ganhos, gastos e metas mês a mês."</p>

            <Show when=move || !state.signed_in.get() && !state.loading.get()>
                <div class="aviso-login">"Faça login para criar e salvar seus planos."</div>
            </Show>

            <div class="lista-planos">
                <Show
                    when=move || !state.plans.with(Vec::is_empty)
                    fallback=|| view! {
                        <div class="lista-vazia">
                            "Nenhum plano cadastrado ainda. Clique no botão "
                            <strong>"\"Criar Novo Plano\""</strong>
                            " para começar a organizar sua vida financeira!"
                        </div>
                    }
                >
                    <For
                        each=move || state.plans.get()
                        key=|plan| plan.clone()
                        children=move |plan| view! { <PlanCard plan=plan editing=editing /> }
                    />
                </Show>
            </div>

            <Show when=move || editing.get() == Some(DraftTarget::New)>
                <div class="plano-card">
                    <PlanEditor />
                </div>
            </Show>

            <ConfirmDelete />

            <button class="btn btn-warning mt-3" on:click=move |_| state.start_new_plan()>
                "Criar Novo Plano"
            </button>
        </div>
    }
}
