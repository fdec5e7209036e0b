//! Delete confirmation dialog

use leptos::*;

use crate::state::use_global_state;

#[component]
pub fn ConfirmDelete() -> impl IntoView {
    let state = use_global_state();

    move || {
        state.pending_delete.get().map(|plan| {
            view! {
                <div class="modal-fundo">
                    <div class="modal-dialogo">
                        <div class="modal-cabecalho">
                            <h5 class="modal-titulo">"Confirmar Exclusão"</h5>
                            <button
                                type="button"
                                class="btn-close btn-close-white"
                                aria-label="Close"
                                on:click=move |_| state.cancel_delete()
                            />
                        </div>
                        <div class="modal-corpo">
                            <p>
                                "Você tem certeza de que deseja excluir o seu plano "
                                <strong class="text-warning">{plan.nome}</strong>
                                "?"
                            </p>
                        </div>
                        <div class="modal-rodape">
                            <button class="btn btn-danger" on:click=move |_| state.confirm_delete()>
                                "Excluir"
                            </button>
                            <button
                                class="btn btn-secondary me-2"
                                on:click=move |_| state.cancel_delete()
                            >
                                "Cancelar"
                            </button>
                        </div>
                    </div>
                </div>
            }
        })
    }
}
