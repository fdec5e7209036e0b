//! Pie chart model
//!
//! Everything the canvas renderer needs, computed from the plan list:
//! title, slices, colours and arc angles. The frontend only draws.

use std::f64::consts::{FRAC_PI_2, PI};

use crate::plan::{find_principal, LineKind, Plan, Totals};

/// Data shown when no plan is principal
pub const ILLUSTRATIVE_TOTALS: Totals = Totals {
    receita: 1000.0,
    despesa: 500.0,
    meta: 700.0,
};

/// One slice of the pie
#[derive(Debug, Clone, PartialEq)]
pub struct Slice {
    pub kind: LineKind,
    pub label: &'static str,
    pub value: f64,
    pub color: &'static str,
}

/// Angles of a drawn slice, in radians, clockwise from 12 o'clock
#[derive(Debug, Clone, PartialEq)]
pub struct Arc {
    pub color: &'static str,
    pub start: f64,
    pub end: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PieChart {
    /// Heading above the canvas
    pub heading: &'static str,
    /// Title drawn inside the chart
    pub title: &'static str,
    /// True when showing the example data
    pub illustrative: bool,
    pub slices: Vec<Slice>,
}

impl PieChart {
    /// Chart of the principal plan, or the example chart without one
    pub fn for_plans(plans: &[Plan]) -> Self {
        match find_principal(plans) {
            Some(plan) => Self::from_totals(Totals::of(plan), false),
            None => Self::from_totals(ILLUSTRATIVE_TOTALS, true),
        }
    }

    pub fn from_totals(totals: Totals, illustrative: bool) -> Self {
        let (heading, title) = if illustrative {
            (
                "Gráfico Ilustrativo",
                "Exemplo de Gráfico - Crie e defina um plano como principal",
            )
        } else {
            ("Gráfico do Plano Principal", "Distribuição do Plano Principal")
        };

        let slices = LineKind::all()
            .iter()
            .map(|kind| Slice {
                kind: *kind,
                label: kind.plural(),
                value: totals.get(*kind),
                color: slice_color(*kind),
            })
            .collect();

        Self {
            heading,
            title,
            illustrative,
            slices,
        }
    }

    /// Sum of the drawable (non-negative) values
    pub fn total(&self) -> f64 {
        self.slices.iter().map(|s| s.value.max(0.0)).sum()
    }

    /// Arcs to draw, skipping empty slices; empty when the total is zero
    pub fn arcs(&self) -> Vec<Arc> {
        let total = self.total();
        if total <= 0.0 {
            return Vec::new();
        }

        let mut start = -FRAC_PI_2;
        let mut arcs = Vec::with_capacity(self.slices.len());

        for slice in &self.slices {
            let value = slice.value.max(0.0);
            if value == 0.0 {
                continue;
            }
            let end = start + value / total * 2.0 * PI;
            arcs.push(Arc {
                color: slice.color,
                start,
                end,
            });
            start = end;
        }

        arcs
    }
}

/// Fill colour of each slice
pub fn slice_color(kind: LineKind) -> &'static str {
    match kind {
        LineKind::Receita => "rgba(39, 209, 5, 0.8)",
        LineKind::Despesa => "rgba(255, 0, 0, 0.77)",
        LineKind::Meta => "rgba(38, 51, 124, 0.95)",
    }
}
