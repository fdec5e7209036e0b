//! Totals cards: balance, expenses, income and savings goals

use leptos::*;

use salario::{format_brl, Totals};

/// The four dashboard cards
#[component]
pub fn SummaryCards(#[prop(into)] totals: Signal<Totals>) -> impl IntoView {
    view! {
        <div class="dashboard-cards">
            <SummaryCard
                variant="card-balance"
                title="💲 Saldo Atual"
                value=Signal::derive(move || totals.get().saldo())
            />
            <SummaryCard
                variant="card-expenses"
                title="💸 Total de Despesas"
                value=Signal::derive(move || totals.get().despesa)
            />
            <SummaryCard
                variant="card-income"
                title="💰 Total de Receitas"
                value=Signal::derive(move || totals.get().receita)
            />
            <SummaryCard
                variant="card-goal"
                title="🎯 Metas de Economia"
                value=Signal::derive(move || totals.get().meta)
            />
        </div>
    }
}

#[component]
fn SummaryCard(variant: &'static str, title: &'static str, value: Signal<f64>) -> impl IntoView {
    view! {
        <div class=format!("card {}", variant)>
            <h3>{title}</h3>
            <p>{move || format_brl(value.get())}</p>
        </div>
    }
}
