//! Core data types for budget plans
//!
//! - `Plan`: a named budget scenario with ordered line items
//! - `Line`: one typed monetary entry
//! - `LineKind`: Receita (income), Despesa (expense) or Meta (goal)

use serde::{Deserialize, Deserializer, Serialize};
use std::str::FromStr;

use super::error::PlanError;

/// Backend identifier of a stored plan
pub type PlanId = i64;

/// Kind of a line item
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum LineKind {
    /// Income
    Receita,
    /// Expense
    Despesa,
    /// Savings goal
    Meta,
}

impl LineKind {
    /// All kinds, in display order
    pub fn all() -> &'static [LineKind] {
        &[LineKind::Receita, LineKind::Despesa, LineKind::Meta]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            LineKind::Receita => "Receita",
            LineKind::Despesa => "Despesa",
            LineKind::Meta => "Meta",
        }
    }

    /// Plural label used by the chart legend
    pub fn plural(&self) -> &'static str {
        match self {
            LineKind::Receita => "Receitas",
            LineKind::Despesa => "Despesas",
            LineKind::Meta => "Metas",
        }
    }

    /// Accent colour for the line's card shadow and kind label
    pub fn accent_color(&self) -> &'static str {
        match self {
            LineKind::Receita => "#1dc407",
            LineKind::Despesa => "#FF6347",
            LineKind::Meta => "#6A5ACD",
        }
    }
}

impl std::fmt::Display for LineKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LineKind {
    type Err = PlanError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "Receita" | "receita" => Ok(LineKind::Receita),
            "Despesa" | "despesa" => Ok(LineKind::Despesa),
            "Meta" | "meta" => Ok(LineKind::Meta),
            other => Err(PlanError::UnknownLineKind(other.to_string())),
        }
    }
}

/// A single line item of a plan
///
/// `valor` keeps the text the user typed; it is only turned into a number
/// when summed or displayed (see [`Line::amount`]). `tipo` is free text on
/// the backend, so it is kept as received and read through [`Line::kind`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct Line {
    /// Present on lines the backend already stores
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub tipo: String,
    #[serde(default)]
    pub descricao: String,
    #[serde(default, deserialize_with = "deserialize_valor")]
    pub valor: String,
}

impl Line {
    pub fn new(tipo: LineKind, descricao: impl Into<String>, valor: impl Into<String>) -> Self {
        Self {
            id: None,
            tipo: tipo.as_str().to_string(),
            descricao: descricao.into(),
            valor: valor.into(),
        }
    }

    /// Empty line of the given kind, as shown in a fresh editor row
    pub fn blank(tipo: LineKind) -> Self {
        Self::new(tipo, "", "")
    }

    /// Known kind of this line; `None` for a kind this client does not know
    pub fn kind(&self) -> Option<LineKind> {
        self.tipo.parse().ok()
    }

    /// Numeric value of this line; invalid input counts as zero
    pub fn amount(&self) -> f64 {
        parse_amount(&self.valor)
    }
}

/// A named budget scenario
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct Plan {
    /// Absent until the backend stores the plan
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<PlanId>,
    pub nome: String,
    #[serde(default)]
    pub principal: bool,
    #[serde(default)]
    pub linhas: Vec<Line>,
}

impl Plan {
    pub fn new(nome: impl Into<String>) -> Self {
        Self {
            id: None,
            nome: nome.into(),
            principal: false,
            linhas: Vec::new(),
        }
    }

    /// Builder method: append a line
    pub fn line(mut self, line: Line) -> Self {
        self.linhas.push(line);
        self
    }

    /// Builder method: set the backend id
    pub fn with_id(mut self, id: PlanId) -> Self {
        self.id = Some(id);
        self
    }

    /// Builder method: flag as principal
    pub fn principal(mut self) -> Self {
        self.principal = true;
        self
    }
}

/// First plan flagged as principal, if any
pub fn find_principal(plans: &[Plan]) -> Option<&Plan> {
    plans.iter().find(|p| p.principal)
}

/// Coerce a typed value to a number
///
/// Whitespace is ignored; empty, non-numeric and non-finite input is 0.
pub fn parse_amount(raw: &str) -> f64 {
    match raw.trim().parse::<f64>() {
        Ok(v) if v.is_finite() => v,
        _ => 0.0,
    }
}

/// Accepts `valor` as a JSON string, number or null
fn deserialize_valor<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawValor {
        Text(String),
        Number(f64),
    }

    Ok(match Option::<RawValor>::deserialize(deserializer)? {
        Some(RawValor::Text(s)) => s,
        Some(RawValor::Number(n)) => n.to_string(),
        None => String::new(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_amount() {
        assert_eq!(parse_amount("1500"), 1500.0);
        assert_eq!(parse_amount(" 12.5 "), 12.5);
        assert_eq!(parse_amount(""), 0.0);
        assert_eq!(parse_amount("abc"), 0.0);
        assert_eq!(parse_amount("12,5"), 0.0);
        assert_eq!(parse_amount("NaN"), 0.0);
        assert_eq!(parse_amount("inf"), 0.0);
        assert_eq!(parse_amount("-40"), -40.0);
    }

    #[test]
    fn test_line_kind_from_str() {
        assert_eq!("Receita".parse::<LineKind>().unwrap(), LineKind::Receita);
        assert_eq!("meta".parse::<LineKind>().unwrap(), LineKind::Meta);
        assert!(matches!(
            "Outro".parse::<LineKind>(),
            Err(PlanError::UnknownLineKind(_))
        ));
    }

    #[test]
    fn test_decode_backend_plan() {
        let json = r#"{
            "id": 3,
            "nome": "Março",
            "principal": true,
            "linhas": [
                {"id": 10, "tipo": "Receita", "descricao": "Salário", "valor": 3500.0},
                {"id": 11, "tipo": "Despesa", "descricao": "Aluguel", "valor": 1200.5},
                {"tipo": "Meta", "descricao": "Viagem", "valor": "300"}
            ]
        }"#;

        let plan: Plan = serde_json::from_str(json).unwrap();
        assert_eq!(plan.id, Some(3));
        assert!(plan.principal);
        assert_eq!(plan.linhas.len(), 3);
        assert_eq!(plan.linhas[0].valor, "3500");
        assert_eq!(plan.linhas[1].amount(), 1200.5);
        assert_eq!(plan.linhas[2].valor, "300");
        assert_eq!(plan.linhas[2].id, None);
    }

    #[test]
    fn test_unknown_line_kind_is_kept() {
        let json = r#"{"tipo": "Investimento", "descricao": "CDB", "valor": 200}"#;
        let line: Line = serde_json::from_str(json).unwrap();

        assert_eq!(line.kind(), None);
        assert_eq!(line.tipo, "Investimento");
        assert_eq!(serde_json::to_value(&line).unwrap()["tipo"], "Investimento");
    }

    #[test]
    fn test_encode_new_plan_omits_ids() {
        let plan = Plan::new("Novo Plano").line(Line::new(LineKind::Despesa, "Luz", "90"));
        let value = serde_json::to_value(&plan).unwrap();

        assert!(value.get("id").is_none());
        assert!(value["linhas"][0].get("id").is_none());
        assert_eq!(value["linhas"][0]["tipo"], "Despesa");
        assert_eq!(value["linhas"][0]["valor"], "90");
    }

    #[test]
    fn test_find_principal() {
        let plans = vec![
            Plan::new("A").with_id(1),
            Plan::new("B").with_id(2).principal(),
        ];
        assert_eq!(find_principal(&plans).and_then(|p| p.id), Some(2));
        assert!(find_principal(&plans[..1]).is_none());
    }
}
