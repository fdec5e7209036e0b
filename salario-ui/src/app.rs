//! App Root Component
//!
//! Wires global state, the flash bootstrap and the dashboard sections.

use leptos::*;

use crate::components::{PieChart, PlansPanel, SummaryCards, Toasts};
use crate::flash::show_flash_messages;
use crate::state::{provide_global_state, use_global_state};

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    // Provide global state to all components
    provide_global_state();
    let state = use_global_state();

    show_flash_messages(&state);
    state.reload_plans();

    let totals = create_memo(move |_| state.totals());

    view! {
        <div class="app">
            <SummaryCards totals=totals />

            <section class="secao-planos">
                <PlansPanel />
            </section>

            <section class="secao-grafico">
                <PieChart />
            </section>

            <Toasts />
        </div>
    }
}
