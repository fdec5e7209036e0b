//! HTTP API Client
//!
//! gloo-net transport for the plans backend. What a response means is
//! decided by `salario::api`, shared with the native client.

use gloo_net::http::{Request, RequestBuilder};
use web_sys::RequestCredentials;

use salario::api::{interpret_listing, interpret_mutation, Method};
use salario::{ApiError, ApiMessage, ApiResult, Listing, Plan, PlanId, PlanRoute};

/// Local storage key holding the backend base URL
pub const API_URL_KEY: &str = "salario_api_url";

/// Same origin: routes are requested as relative paths
pub const DEFAULT_API_BASE: &str = "";

/// Get the API base URL from local storage or use default
pub fn get_api_base() -> String {
    let url = web_sys::window()
        .and_then(|window| window.local_storage().ok().flatten())
        .and_then(|storage| storage.get_item(API_URL_KEY).ok().flatten())
        .unwrap_or_else(|| DEFAULT_API_BASE.to_string());
    // Normalize: remove trailing slash
    url.trim_end_matches('/').to_string()
}

/// Fetch the signed-in user's plans
pub async fn fetch_plans() -> ApiResult<Listing> {
    let (status, body) = call(PlanRoute::List, None).await?;
    Ok(interpret_listing(status, &body))
}

/// Create or update, depending on whether the plan has an id
pub async fn save_plan(plan: &Plan) -> ApiResult<ApiMessage> {
    let route = match plan.id {
        Some(id) => PlanRoute::Update(id),
        None => PlanRoute::Create,
    };
    mutate(route, Some(plan)).await
}

pub async fn delete_plan(id: PlanId) -> ApiResult<ApiMessage> {
    mutate(PlanRoute::Delete(id), None).await
}

pub async fn set_principal(id: PlanId) -> ApiResult<ApiMessage> {
    mutate(PlanRoute::SetPrincipal(id), None).await
}

async fn mutate(route: PlanRoute, body: Option<&Plan>) -> ApiResult<ApiMessage> {
    let (status, text) = call(route, body).await?;
    interpret_mutation(status, &text)
}

fn builder(route: PlanRoute, url: &str) -> RequestBuilder {
    let builder = match route.method() {
        Method::Get => Request::get(url),
        Method::Post => Request::post(url),
        Method::Put => Request::put(url),
        Method::Delete => Request::delete(url),
        Method::Patch => Request::patch(url),
    };
    // Session cookie must travel when the backend lives on another origin
    builder.credentials(RequestCredentials::Include)
}

async fn call(route: PlanRoute, body: Option<&Plan>) -> ApiResult<(u16, String)> {
    let url = route.url(&get_api_base());
    let request = builder(route, &url);

    let response = match body {
        Some(plan) => request
            .json(plan)
            .map_err(|e| ApiError::Decode(e.to_string()))?
            .send()
            .await,
        None => request.send().await,
    }
    .map_err(|e| ApiError::Network(e.to_string()))?;

    let status = response.status();
    let text = response
        .text()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;

    Ok((status, text))
}
