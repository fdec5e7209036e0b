//! Pie Chart Component
//!
//! Principal plan distribution drawn on an HTML5 canvas. The whole chart is
//! cleared and redrawn whenever the plan list changes.

use leptos::*;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use salario::chart::PieChart as PieChartModel;

use crate::state::use_global_state;

const TEXT_COLOR: &str = "#1e1e2f";
const TITLE_FONT: &str = "bold 18px Segoe UI, Roboto, sans-serif";
/// Space reserved above the pie for the title
const TITLE_HEIGHT: f64 = 40.0;
const EMPTY_FONT: &str = "14px Segoe UI, Roboto, sans-serif";

/// Pie chart of the principal plan, or example data without one
#[component]
pub fn PieChart() -> impl IntoView {
    let state = use_global_state();
    let canvas_ref = create_node_ref::<html::Canvas>();

    let chart = create_memo(move |_| state.plans.with(|plans| PieChartModel::for_plans(plans)));

    create_effect(move |_| {
        let chart = chart.get();
        if let Some(canvas) = canvas_ref.get() {
            draw_pie(&canvas, &chart);
        }
    });

    view! {
        <div class="grafico-container">
            <h2 class="grafico-titulo">{move || chart.with(|c| c.heading)}</h2>
            <canvas node_ref=canvas_ref width="400" height="400" />
            <ChartLegend chart=chart />
        </div>
    }
}

/// Legend below the canvas
#[component]
fn ChartLegend(chart: Memo<PieChartModel>) -> impl IntoView {
    view! {
        <div class="grafico-legenda">
            {move || {
                chart
                    .get()
                    .slices
                    .into_iter()
                    .map(|slice| {
                        view! {
                            <span class="legenda-item">
                                <span
                                    class="legenda-cor"
                                    style=format!("background-color: {}", slice.color)
                                />
                                {slice.label}
                            </span>
                        }
                    })
                    .collect_view()
            }}
        </div>
    }
}

fn draw_pie(canvas: &HtmlCanvasElement, chart: &PieChartModel) {
    let ctx = match canvas.get_context("2d") {
        Ok(Some(ctx)) => match ctx.dyn_into::<CanvasRenderingContext2d>() {
            Ok(ctx) => ctx,
            Err(_) => return,
        },
        _ => return,
    };

    let width = canvas.width() as f64;
    let height = canvas.height() as f64;

    ctx.clear_rect(0.0, 0.0, width, height);

    // Title
    ctx.set_fill_style(&TEXT_COLOR.into());
    ctx.set_text_align("center");
    ctx.set_font(TITLE_FONT);
    let _ = ctx.fill_text_with_max_width(chart.title, width / 2.0, 24.0, width - 10.0);

    let (cx, cy, radius) = pie_layout(width, height);

    let arcs = chart.arcs();
    if arcs.is_empty() {
        ctx.set_font(EMPTY_FONT);
        let _ = ctx.fill_text("Sem valores para exibir", cx, cy);
        return;
    }

    for arc in &arcs {
        ctx.set_fill_style(&arc.color.into());
        ctx.begin_path();
        ctx.move_to(cx, cy);
        let _ = ctx.arc(cx, cy, radius, arc.start, arc.end);
        ctx.close_path();
        ctx.fill();
    }

    if arcs.len() < 2 {
        return;
    }

    // Slice separators
    ctx.set_stroke_style(&"#ffffff".into());
    ctx.set_line_width(2.0);
    for arc in &arcs {
        ctx.begin_path();
        ctx.move_to(cx, cy);
        ctx.line_to(cx + radius * arc.start.cos(), cy + radius * arc.start.sin());
        ctx.stroke();
    }
}

/// Centre and radius of the pie below the title band
fn pie_layout(width: f64, height: f64) -> (f64, f64, f64) {
    let area = height - TITLE_HEIGHT;
    let cx = width / 2.0;
    let cy = TITLE_HEIGHT + area / 2.0;
    let radius = (area.min(width) / 2.0 - 10.0).max(0.0);
    (cx, cy, radius)
}
