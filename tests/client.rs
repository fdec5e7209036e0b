//! PlanClient against an in-process stub of the plans backend

#![cfg(feature = "native")]

use axum::{
    extract::{Path, State},
    http::{header, HeaderMap, StatusCode},
    response::{Html, IntoResponse, Response},
    routing::{get, patch, post, put},
    Form, Json, Router,
};
use serde::Deserialize;
use serde_json::json;
use std::sync::{Arc, Mutex};

use salario::api::{ApiError, Listing, PlanRoute, UNAUTHORIZED_MESSAGE};
use salario::config::ApiConfig;
use salario::plan::{Line, LineKind, Plan, PlanDraft, Totals};
use salario::PlanClient;

const EMAIL: &str = "ana@exemplo.com";
const SENHA: &str = "Segr3d@";
const SESSION_COOKIE: &str = "session=ok";

#[derive(Default)]
struct StubDb {
    plans: Vec<Plan>,
    next_id: i64,
}

type Db = Arc<Mutex<StubDb>>;

#[derive(Deserialize)]
struct LoginForm {
    email: String,
    senha: String,
}

fn signed_in(headers: &HeaderMap) -> bool {
    headers
        .get_all(header::COOKIE)
        .iter()
        .filter_map(|v| v.to_str().ok())
        .any(|v| v.split(';').any(|c| c.trim() == SESSION_COOKIE))
}

fn message(status: StatusCode, kind: &str, mensagem: &str) -> Response {
    (status, Json(json!({ "status": kind, "mensagem": mensagem }))).into_response()
}

fn unauthorized() -> Response {
    message(StatusCode::UNAUTHORIZED, "erro", UNAUTHORIZED_MESSAGE)
}

fn not_found() -> Response {
    message(
        StatusCode::NOT_FOUND,
        "erro",
        "Plano não encontrado ou acesso negado",
    )
}

/// Give the plan and its lines backend ids
fn store(db: &mut StubDb, mut plan: Plan, id: i64) -> Plan {
    plan.id = Some(id);
    for line in plan.linhas.iter_mut() {
        db.next_id += 1;
        line.id = Some(db.next_id);
    }
    plan
}

async fn login(Form(form): Form<LoginForm>) -> Response {
    if form.email == EMAIL && form.senha == SENHA {
        (
            StatusCode::FOUND,
            [
                (header::SET_COOKIE, format!("{}; Path=/", SESSION_COOKIE)),
                (header::LOCATION, "/".to_string()),
            ],
        )
            .into_response()
    } else {
        Html("<form>E-mail ou senha inválidos.</form>").into_response()
    }
}

async fn list_plans(State(db): State<Db>, headers: HeaderMap) -> Response {
    if !signed_in(&headers) {
        return unauthorized();
    }
    let db = db.lock().unwrap();
    Json(db.plans.clone()).into_response()
}

async fn create_plan(State(db): State<Db>, headers: HeaderMap, Json(plan): Json<Plan>) -> Response {
    if !signed_in(&headers) {
        return unauthorized();
    }
    let mut db = db.lock().unwrap();
    db.next_id += 1;
    let id = db.next_id;
    let plan = store(&mut db, plan, id);
    db.plans.push(plan);
    message(StatusCode::CREATED, "sucesso", "Plano salvo com sucesso!")
}

async fn update_plan(
    State(db): State<Db>,
    headers: HeaderMap,
    Path(id): Path<i64>,
    Json(plan): Json<Plan>,
) -> Response {
    if !signed_in(&headers) {
        return unauthorized();
    }
    let mut db = db.lock().unwrap();
    let Some(pos) = db.plans.iter().position(|p| p.id == Some(id)) else {
        return not_found();
    };
    let principal = db.plans[pos].principal;
    let mut plan = store(&mut db, plan, id);
    plan.principal = principal;
    db.plans[pos] = plan;
    message(StatusCode::OK, "sucesso", "Plano atualizado com sucesso!")
}

async fn delete_plan(State(db): State<Db>, headers: HeaderMap, Path(id): Path<i64>) -> Response {
    if !signed_in(&headers) {
        return unauthorized();
    }
    let mut db = db.lock().unwrap();
    let before = db.plans.len();
    db.plans.retain(|p| p.id != Some(id));
    if db.plans.len() == before {
        return not_found();
    }
    message(StatusCode::OK, "sucesso", "Plano excluído com sucesso!")
}

async fn set_principal(State(db): State<Db>, headers: HeaderMap, Path(id): Path<i64>) -> Response {
    if !signed_in(&headers) {
        return unauthorized();
    }
    let mut db = db.lock().unwrap();
    if !db.plans.iter().any(|p| p.id == Some(id)) {
        return not_found();
    }
    for plan in db.plans.iter_mut() {
        plan.principal = plan.id == Some(id);
    }
    message(
        StatusCode::OK,
        "sucesso",
        "Plano definido como principal com sucesso!",
    )
}

async fn spawn_backend() -> (String, Db) {
    let db: Db = Arc::new(Mutex::new(StubDb::default()));

    let router = Router::new()
        .route("/login", post(login))
        .route("/api/planos", get(list_plans))
        .route("/criarplano", post(create_plan))
        .route("/api/planos/:id", put(update_plan).delete(delete_plan))
        .route("/api/planos/:id/principal", patch(set_principal))
        .with_state(Arc::clone(&db));

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });

    (format!("http://{}", addr), db)
}

fn client_for(base_url: &str) -> PlanClient {
    PlanClient::new(&ApiConfig {
        base_url: base_url.to_string(),
        request_timeout_secs: 5,
    })
    .unwrap()
}

async fn signed_in_client() -> (PlanClient, Db) {
    let (base_url, db) = spawn_backend().await;
    let client = client_for(&base_url);
    client.login(EMAIL, SENHA).await.unwrap();
    (client, db)
}

async fn plans_of(client: &PlanClient) -> Vec<Plan> {
    match client.list_plans().await.unwrap() {
        Listing::Plans(plans) => plans,
        Listing::SignedOut => panic!("expected to be signed in"),
    }
}

#[tokio::test]
async fn test_signed_out_listing_and_mutations() {
    let (base_url, _db) = spawn_backend().await;
    let client = client_for(&base_url);

    assert_eq!(client.list_plans().await.unwrap(), Listing::SignedOut);

    let err = client.save_plan(&Plan::new("Maio")).await.unwrap_err();
    assert_eq!(err, ApiError::Unauthorized);
    assert_eq!(err.user_message(PlanRoute::Create), UNAUTHORIZED_MESSAGE);
}

#[tokio::test]
async fn test_login_rejects_bad_credentials() {
    let (base_url, _db) = spawn_backend().await;
    let client = client_for(&base_url);

    let err = client.login(EMAIL, "errada").await.unwrap_err();
    assert_eq!(err, ApiError::LoginFailed);
    assert_eq!(client.list_plans().await.unwrap(), Listing::SignedOut);
}

#[tokio::test]
async fn test_create_then_list() {
    let (client, _db) = signed_in_client().await;
    assert!(plans_of(&client).await.is_empty());

    let mut draft = PlanDraft::start_new(0).unwrap();
    draft.rename("Maio");
    draft.clear_lines();
    draft.push_line(Line::new(LineKind::Receita, "Salário", "3500"));
    draft.push_line(Line::new(LineKind::Despesa, "Aluguel", "1200.50"));

    let (route, plan) = draft.submission().unwrap();
    assert_eq!(route, PlanRoute::Create);
    let reply = client.save_plan(plan).await.unwrap();
    assert!(reply.is_success());
    assert_eq!(reply.mensagem, "Plano salvo com sucesso!");

    let plans = plans_of(&client).await;
    assert_eq!(plans.len(), 1);
    assert_eq!(plans[0].nome, "Maio");
    assert!(plans[0].id.is_some());
    assert!(plans[0].linhas.iter().all(|l| l.id.is_some()));

    let totals = Totals::of(&plans[0]);
    assert_eq!(totals.receita, 3500.0);
    assert_eq!(totals.despesa, 1200.5);
}

#[tokio::test]
async fn test_update_existing_plan() {
    let (client, _db) = signed_in_client().await;
    client
        .save_plan(&Plan::new("Junho").line(Line::new(LineKind::Meta, "Viagem", "300")))
        .await
        .unwrap();

    let stored = plans_of(&client).await.remove(0);
    let mut draft = PlanDraft::edit(&stored);
    draft.rename("Junho revisado");
    draft.push_line(Line::new(LineKind::Receita, "Freela", "800"));

    let (route, plan) = draft.submission().unwrap();
    assert_eq!(route, PlanRoute::Update(stored.id.unwrap()));
    assert!(client.save_plan(plan).await.unwrap().is_success());

    let plans = plans_of(&client).await;
    assert_eq!(plans.len(), 1);
    assert_eq!(plans[0].nome, "Junho revisado");
    assert_eq!(plans[0].linhas.len(), 2);
}

#[tokio::test]
async fn test_principal_is_exclusive() {
    let (client, _db) = signed_in_client().await;
    for nome in ["A", "B"] {
        client.save_plan(&Plan::new(nome)).await.unwrap();
    }
    let plans = plans_of(&client).await;
    let (a, b) = (plans[0].id.unwrap(), plans[1].id.unwrap());

    assert!(client.set_principal(a).await.unwrap().is_success());
    assert!(client.set_principal(b).await.unwrap().is_success());

    let principals: Vec<_> = plans_of(&client)
        .await
        .into_iter()
        .filter(|p| p.principal)
        .map(|p| p.id)
        .collect();
    assert_eq!(principals, vec![Some(b)]);
}

#[tokio::test]
async fn test_delete_and_missing_plan() {
    let (client, db) = signed_in_client().await;
    client.save_plan(&Plan::new("Temporário")).await.unwrap();
    let id = plans_of(&client).await[0].id.unwrap();

    let reply = client.delete_plan(id).await.unwrap();
    assert_eq!(reply.mensagem, "Plano excluído com sucesso!");
    assert!(db.lock().unwrap().plans.is_empty());

    let err = client.delete_plan(id).await.unwrap_err();
    assert_eq!(err, ApiError::Status(404));
    assert_eq!(err.user_message(PlanRoute::Delete(id)), "Erro ao excluir plano.");

    let err = client
        .save_plan(&Plan::new("Fantasma").with_id(id))
        .await
        .unwrap_err();
    assert_eq!(err.user_message(PlanRoute::Update(id)), "Erro ao salvar plano.");
}

#[tokio::test]
async fn test_unreachable_backend_is_network_error() {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let client = client_for(&format!("http://{}", addr));
    let err = client.set_principal(1).await.unwrap_err();
    assert!(matches!(err, ApiError::Network(_)));
    assert_eq!(
        err.user_message(PlanRoute::SetPrincipal(1)),
        PlanRoute::SetPrincipal(1).failure_message()
    );
}
