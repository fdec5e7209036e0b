//! Plano Salarial CLI
//!
//! Command-line interface to the plans backend:
//! - List plans and show the principal plan's totals
//! - Create, edit, rename and delete plans
//! - Choose the principal plan

use anyhow::{anyhow, bail, Context};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use salario::api::{ApiMessage, Listing, PlanClient, UNAUTHORIZED_MESSAGE};
use salario::config::{generate_default_config, Config, LoggingConfig};
use salario::plan::{format_brl, Line, LineField, LineKind, Plan, PlanDraft, PlanId, Totals};

#[derive(Parser)]
#[command(name = "salario-cli")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Budget plans: income, expenses and goals")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Backend URL (overrides the config file)
    #[arg(long, global = true)]
    pub api_url: Option<String>,

    /// Config file (default: ~/.config/salario/config.toml or ./salario.toml)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Output format (table, json)
    #[arg(short, long, default_value = "table", global = true)]
    pub format: String,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List all plans with their lines
    List,

    /// Show the principal plan's totals
    Totals,

    /// Create a plan
    Create {
        /// Plan name
        #[arg(short, long, default_value = salario::plan::NEW_PLAN_NAME)]
        name: String,
        /// Lines as KIND:DESCRIPTION:VALUE (e.g. Receita:Salário:3500)
        #[arg(short, long = "line")]
        lines: Vec<String>,
    },

    /// Append lines to a plan
    AddLine {
        id: PlanId,
        /// Lines as KIND:DESCRIPTION:VALUE
        #[arg(short, long = "line", required = true)]
        lines: Vec<String>,
    },

    /// Remove a line from a plan (0-based index)
    RemoveLine { id: PlanId, index: usize },

    /// Change a line's value
    SetValue {
        id: PlanId,
        index: usize,
        value: String,
    },

    /// Rename a plan
    Rename { id: PlanId, name: String },

    /// Mark a plan as principal
    Principal { id: PlanId },

    /// Delete a plan
    Delete { id: PlanId },

    /// Generate default config file
    Config {
        /// Output path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let (mut config, source) = Config::resolve(cli.config.as_deref())?;
    if let Some(url) = &cli.api_url {
        config.api.base_url = url.clone();
    }

    init_logging(&config.logging);
    match &source {
        Some(path) => tracing::info!("Loaded config from {:?}", path),
        None => tracing::info!("Using default config with environment overrides"),
    }

    if let Commands::Config { output } = &cli.command {
        let template = generate_default_config();
        match output {
            Some(path) => {
                if let Some(parent) = path.parent() {
                    std::fs::create_dir_all(parent)?;
                }
                std::fs::write(path, &template)?;
                println!("Config written to {:?}", path);
            }
            None => print!("{}", template),
        }
        return Ok(());
    }

    let client = PlanClient::new(&config.api)?;
    if let Some((email, senha)) = config.auth.credentials() {
        client
            .login(email, senha)
            .await
            .map_err(|e| anyhow!("{}", e.user_message(salario::PlanRoute::List)))?;
    }

    let json = cli.format == "json";

    match cli.command {
        Commands::List => {
            let plans = fetch_plans(&client).await?;

            if json {
                println!("{}", serde_json::to_string_pretty(&plans)?);
            } else if plans.is_empty() {
                println!("Nenhum plano cadastrado ainda.");
                println!();
                println!("Crie o primeiro com:");
                println!("  salario-cli create --name \"Maio\" --line Receita:Salário:3500");
            } else {
                for plan in &plans {
                    print_plan(plan);
                }
            }
        }

        Commands::Totals => {
            let plans = fetch_plans(&client).await?;
            let totals = Totals::for_principal(&plans);

            if json {
                let body = serde_json::json!({
                    "receita": totals.receita,
                    "despesa": totals.despesa,
                    "meta": totals.meta,
                    "saldo": totals.saldo(),
                });
                println!("{}", serde_json::to_string_pretty(&body)?);
            } else {
                if !plans.iter().any(|p| p.principal) {
                    println!("(nenhum plano principal definido)");
                }
                println!("{:<22} {}", "Saldo Atual", format_brl(totals.saldo()));
                println!("{:<22} {}", "Total de Despesas", format_brl(totals.despesa));
                println!("{:<22} {}", "Total de Receitas", format_brl(totals.receita));
                println!("{:<22} {}", "Metas de Economia", format_brl(totals.meta));
            }
        }

        Commands::Create { name, lines } => {
            let plans = fetch_plans(&client).await?;

            let mut draft = PlanDraft::start_new(plans.len())?;
            draft.rename(name);
            if !lines.is_empty() {
                draft.clear_lines();
                for raw in &lines {
                    draft.push_line(parse_line(raw)?);
                }
            }

            let (_, plan) = draft.submission()?;
            report(client.save_plan(plan).await, salario::PlanRoute::Create)?;
        }

        Commands::AddLine { id, lines } => {
            let mut draft = edit_plan(&client, id).await?;
            for raw in &lines {
                draft.push_line(parse_line(raw)?);
            }
            save_draft(&client, &draft).await?;
        }

        Commands::RemoveLine { id, index } => {
            let mut draft = edit_plan(&client, id).await?;
            let removed = draft.remove_line(index)?;
            tracing::debug!(id, index, descricao = %removed.descricao, "line removed");
            save_draft(&client, &draft).await?;
        }

        Commands::SetValue { id, index, value } => {
            let mut draft = edit_plan(&client, id).await?;
            draft.update_line(index, LineField::Value(value))?;
            save_draft(&client, &draft).await?;
        }

        Commands::Rename { id, name } => {
            let mut draft = edit_plan(&client, id).await?;
            draft.rename(name);
            save_draft(&client, &draft).await?;
        }

        Commands::Principal { id } => {
            report(
                client.set_principal(id).await,
                salario::PlanRoute::SetPrincipal(id),
            )?;
        }

        Commands::Delete { id } => {
            report(client.delete_plan(id).await, salario::PlanRoute::Delete(id))?;
        }

        Commands::Config { .. } => unreachable!("handled before connecting"),
    }

    Ok(())
}

fn init_logging(config: &LoggingConfig) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!("salario={0},salario_cli={0}", config.level))
    });

    let registry = tracing_subscriber::registry().with(filter);
    if config.format == "json" {
        registry
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        registry.with(fmt::layer().with_writer(std::io::stderr)).init();
    }
}

async fn fetch_plans(client: &PlanClient) -> anyhow::Result<Vec<Plan>> {
    let listing = client
        .list_plans()
        .await
        .with_context(|| format!("Cannot reach the backend at {}", client.base_url()))?;

    match listing {
        Listing::Plans(plans) => Ok(plans),
        Listing::SignedOut => bail!("{}", UNAUTHORIZED_MESSAGE),
    }
}

async fn edit_plan(client: &PlanClient, id: PlanId) -> anyhow::Result<PlanDraft> {
    let plans = fetch_plans(client).await?;
    let plan = plans
        .iter()
        .find(|p| p.id == Some(id))
        .ok_or_else(|| anyhow!("Plano {} não encontrado", id))?;
    Ok(PlanDraft::edit(plan))
}

async fn save_draft(client: &PlanClient, draft: &PlanDraft) -> anyhow::Result<()> {
    let (route, plan) = draft.submission()?;
    report(client.save_plan(plan).await, route)
}

/// Print the backend's reply; a failed call or an `erro` reply exits non-zero
fn report(
    result: salario::ApiResult<ApiMessage>,
    route: salario::PlanRoute,
) -> anyhow::Result<()> {
    match result {
        Ok(msg) if msg.is_success() => {
            println!("{}", msg.mensagem);
            Ok(())
        }
        Ok(msg) => bail!("{}", msg.mensagem),
        Err(e) => {
            tracing::debug!(%route, error = %e, "request failed");
            bail!("{}", e.user_message(route))
        }
    }
}

/// Parse `KIND:DESCRIPTION:VALUE`; the description may itself contain ':'
fn parse_line(raw: &str) -> anyhow::Result<Line> {
    let (kind, rest) = raw
        .split_once(':')
        .ok_or_else(|| anyhow!("Linha inválida '{}': use TIPO:DESCRIÇÃO:VALOR", raw))?;
    let (descricao, valor) = rest
        .rsplit_once(':')
        .ok_or_else(|| anyhow!("Linha inválida '{}': use TIPO:DESCRIÇÃO:VALOR", raw))?;

    let kind: LineKind = kind.parse()?;
    Ok(Line::new(kind, descricao.trim(), valor.trim()))
}

fn print_plan(plan: &Plan) {
    let id = plan.id.map(|id| format!("#{}", id)).unwrap_or_default();
    let badge = if plan.principal { "  PRINCIPAL ⭐" } else { "" };
    println!("{} {}{}", id, plan.nome, badge);
    println!("{}", "-".repeat(56));

    for (i, line) in plan.linhas.iter().enumerate() {
        println!(
            "{:>3}  {:<8} {:<28} {:>12}",
            i,
            line.tipo,
            line.descricao,
            format_brl(line.amount())
        );
    }

    let totals = Totals::of(plan);
    println!(
        "     Receitas {} | Despesas {} | Metas {} | Saldo {}",
        format_brl(totals.receita),
        format_brl(totals.despesa),
        format_brl(totals.meta),
        format_brl(totals.saldo())
    );
    println!();
}
