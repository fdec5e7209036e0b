//! UI Components
//!
//! Leptos components for the dashboard.

pub mod confirm_delete;
pub mod pie_chart;
pub mod plan_card;
pub mod plan_editor;
pub mod plan_panel;
pub mod summary_cards;
pub mod toast;

pub use pie_chart::PieChart;
pub use plan_panel::PlansPanel;
pub use summary_cards::SummaryCards;
pub use toast::Toasts;
