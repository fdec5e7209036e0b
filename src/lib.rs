//! # Plano Salarial
//!
//! Budget plans made of income, expense and goal lines. One plan is the
//! user's principal plan; its totals feed the dashboard cards and a pie
//! chart.
//!
//! The backend that stores plans is consumed over HTTP, never implemented
//! here. This crate holds the logic both frontends share:
//!
//! - [`plan`]: data model, totals and the plan editor rules
//! - [`api`]: backend routes and what their responses mean
//! - [`notify`]: toast lifecycle and flash messages
//! - [`chart`]: pie chart slices and geometry
//!
//! With the default `native` feature it also provides [`config`], a
//! reqwest-based [`api::PlanClient`] and the `salario-cli` binary. The
//! browser frontend (`salario-ui`) uses the crate without it.
//!
//! ## Quick Start
//!
//! ```rust
//! use salario::plan::{Line, LineKind, PlanDraft, Totals};
//!
//! let mut draft = PlanDraft::start_new(0).unwrap();
//! draft.rename("Maio");
//! draft.push_line(Line::new(LineKind::Receita, "Salário", "3500"));
//!
//! let totals = Totals::of(draft.plan());
//! assert_eq!(totals.receita, 3500.0);
//! ```

pub mod api;
pub mod chart;
#[cfg(feature = "native")]
pub mod config;
pub mod notify;
pub mod plan;

// Re-export top-level types for convenience
pub use plan::{
    format_brl, DraftTarget, Line, LineField, LineKind, Plan, PlanDraft, PlanError, PlanId,
    PlanResult, Totals, MAX_PLANS,
};

pub use api::{ApiError, ApiMessage, ApiResult, Listing, MessageStatus, PlanRoute};

pub use notify::{FlashMessage, Toast, ToastKind, ToastPhase, ToastQueue};

pub use chart::PieChart;

#[cfg(feature = "native")]
pub use api::PlanClient;

#[cfg(feature = "native")]
pub use config::{Config, ConfigError};
