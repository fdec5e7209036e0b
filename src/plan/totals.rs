//! Per-kind sums of a plan's lines
//!
//! The dashboard cards and the pie chart both read these numbers, always
//! from the principal plan.

use serde::{Deserialize, Serialize};
use std::ops;

use super::types::{find_principal, Line, LineKind, Plan};

/// Running sums of one plan, one bucket per line kind
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Totals {
    pub receita: f64,
    pub despesa: f64,
    pub meta: f64,
}

impl Totals {
    /// Sum every line of a plan
    pub fn of(plan: &Plan) -> Self {
        let mut totals = Totals::default();
        for line in &plan.linhas {
            totals += line;
        }
        totals
    }

    /// Totals of the principal plan, zeros when there is none
    pub fn for_principal(plans: &[Plan]) -> Self {
        find_principal(plans).map(Totals::of).unwrap_or_default()
    }

    /// Current balance: income minus expenses
    pub fn saldo(&self) -> f64 {
        self.receita - self.despesa
    }

    pub fn get(&self, kind: LineKind) -> f64 {
        match kind {
            LineKind::Receita => self.receita,
            LineKind::Despesa => self.despesa,
            LineKind::Meta => self.meta,
        }
    }
}

impl ops::AddAssign<&Line> for Totals {
    fn add_assign(&mut self, line: &Line) {
        let value = line.amount();
        match line.kind() {
            Some(LineKind::Receita) => self.receita += value,
            Some(LineKind::Despesa) => self.despesa += value,
            Some(LineKind::Meta) => self.meta += value,
            None => {}
        }
    }
}

/// Format a value as Brazilian reais with two decimals
pub fn format_brl(value: f64) -> String {
    format!("R$ {:.2}", value)
}
