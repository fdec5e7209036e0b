//! Budget plans
//!
//! - **types**: `Plan`, `Line`, `LineKind`
//! - **totals**: per-kind sums feeding the dashboard cards and the chart
//! - **draft**: editor state and the client-side rules for saving
//! - **error**: errors raised by those rules

pub mod draft;
pub mod error;
pub mod totals;
pub mod types;

pub use draft::{DraftTarget, LineField, PlanDraft, MAX_PLANS, NEW_PLAN_NAME};
pub use error::{PlanError, PlanResult};
pub use totals::{format_brl, Totals};
pub use types::{find_principal, parse_amount, Line, LineKind, Plan, PlanId};
