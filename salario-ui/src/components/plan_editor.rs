//! Plan Editor Component
//!
//! Form over the open draft. Inputs read the draft through `prop:value` and
//! write back on every input event; rows are keyed by index so typing never
//! rebuilds the row being edited.

use leptos::*;

use salario::{LineField, LineKind};

use crate::state::{use_global_state, GlobalState};

#[component]
pub fn PlanEditor() -> impl IntoView {
    let state = use_global_state();

    let name = move || {
        state
            .draft
            .with(|d| d.as_ref().map(|d| d.name().to_string()).unwrap_or_default())
    };
    let line_count =
        create_memo(move |_| state.draft.with(|d| d.as_ref().map_or(0, |d| d.lines().len())));

    view! {
        <div class="plano-editor">
            <input
                type="text"
                class="form-control mb-2"
                prop:value=name
                on:input=move |ev| {
                    let nome = event_target_value(&ev);
                    state.update_draft(|d| d.rename(nome));
                }
            />

            <div class="tabela">
                <div class="linha cabecalho">
                    <div class="col-tipo">"Tipo"</div>
                    <div class="col-descricao">"Descrição"</div>
                    <div class="col-valor">"Valor"</div>
                </div>

                <For
                    each=move || 0..line_count.get()
                    key=|index| *index
                    children=move |index| view! { <LineRow index=index /> }
                />
            </div>

            <div class="acoes-planos mt-2">
                <button
                    class="btn btn-outline-warning btn-sm me-2"
                    on:click=move |_| {
                        state.update_draft(|d| d.add_line());
                    }
                >
                    "Adicionar Linha"
                </button>
                <button class="btn btn-success btn-sm me-2" on:click=move |_| state.save_draft()>
                    "Salvar Plano"
                </button>
                <button class="btn btn-secondary btn-sm" on:click=move |_| state.cancel_draft()>
                    "Cancelar"
                </button>
            </div>
        </div>
    }
}

/// One editable line of the draft
#[component]
fn LineRow(index: usize) -> impl IntoView {
    let state = use_global_state();

    let line = move || {
        state
            .draft
            .with(|d| d.as_ref().and_then(|d| d.lines().get(index).cloned()))
    };
    let kind = move || line().and_then(|l| l.kind());
    let descricao = move || line().map(|l| l.descricao).unwrap_or_default();
    let valor = move || line().map(|l| l.valor).unwrap_or_default();

    let options = LineKind::all()
        .iter()
        .map(|k| {
            let k = *k;
            view! {
                <option value=k.as_str() selected=move || kind() == Some(k)>
                    {k.as_str()}
                </option>
            }
        })
        .collect_view();

    view! {
        <div class="linha">
            <select
                class="form-select form-select-sm"
                prop:value=move || kind().map(|k| k.as_str()).unwrap_or_default()
                on:change=move |ev| {
                    if let Ok(k) = event_target_value(&ev).parse::<LineKind>() {
                        update_line(state, index, LineField::Kind(k));
                    }
                }
            >
                {options}
            </select>

            <input
                type="text"
                class="form-control form-control-sm"
                placeholder="Descrição"
                required
                prop:value=descricao
                on:input=move |ev| {
                    update_line(state, index, LineField::Description(event_target_value(&ev)));
                }
            />

            <input
                type="number"
                class="form-control form-control-sm"
                placeholder="Valor"
                required
                prop:value=valor
                on:input=move |ev| {
                    update_line(state, index, LineField::Value(event_target_value(&ev)));
                }
            />

            <button
                class="btn btn-danger btn-sm"
                on:click=move |_| {
                    if let Some(Err(e)) = state.update_draft(|d| d.remove_line(index)) {
                        web_sys::console::warn_1(&e.to_string().into());
                    }
                }
            >
                "X"
            </button>
        </div>
    }
}

fn update_line(state: GlobalState, index: usize, field: LineField) {
    if let Some(Err(e)) = state.update_draft(|d| d.update_line(index, field)) {
        web_sys::console::warn_1(&e.to_string().into());
    }
}
