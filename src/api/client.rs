//! Native HTTP client for the plans backend
//!
//! Used by the CLI and the integration tests. Keeps the session cookie the
//! backend sets on login, and never follows redirects so a login answer can
//! be told apart from a login page.

use reqwest::{redirect, Client};
use std::time::Duration;

use super::error::{ApiError, ApiResult};
use super::response::{interpret_listing, interpret_mutation, ApiMessage, Listing};
use super::routes::{Method, PlanRoute, LOGIN_PATH};
use crate::config::ApiConfig;
use crate::plan::{Plan, PlanId};

/// Plans backend client
pub struct PlanClient {
    client: Client,
    base_url: String,
}

impl PlanClient {
    /// Create a client with the configured base URL and timeout
    pub fn new(config: &ApiConfig) -> ApiResult<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .cookie_store(true)
            .redirect(redirect::Policy::none())
            .build()
            .map_err(|e| ApiError::Network(e.to_string()))?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Sign in through the backend's login form
    ///
    /// The backend redirects on success and re-renders the form otherwise.
    pub async fn login(&self, email: &str, senha: &str) -> ApiResult<()> {
        let url = format!("{}{}", self.base_url, LOGIN_PATH);

        let response = self
            .client
            .post(&url)
            .form(&[("email", email), ("senha", senha)])
            .send()
            .await
            .map_err(transport_error)?;

        if response.status().is_redirection() {
            tracing::info!(email, "signed in");
            Ok(())
        } else {
            tracing::warn!(email, status = response.status().as_u16(), "login rejected");
            Err(ApiError::LoginFailed)
        }
    }

    /// Fetch the user's plans
    pub async fn list_plans(&self) -> ApiResult<Listing> {
        let (status, body) = self.call(PlanRoute::List, None).await?;
        Ok(interpret_listing(status, &body))
    }

    /// Save a plan: `PUT` when it has an id, `POST /criarplano` otherwise
    pub async fn save_plan(&self, plan: &Plan) -> ApiResult<ApiMessage> {
        let route = match plan.id {
            Some(id) => PlanRoute::Update(id),
            None => PlanRoute::Create,
        };
        self.mutate(route, Some(plan)).await
    }

    pub async fn delete_plan(&self, id: PlanId) -> ApiResult<ApiMessage> {
        self.mutate(PlanRoute::Delete(id), None).await
    }

    pub async fn set_principal(&self, id: PlanId) -> ApiResult<ApiMessage> {
        self.mutate(PlanRoute::SetPrincipal(id), None).await
    }

    /// Send any mutation route and interpret the `{status, mensagem}` reply
    pub async fn mutate(&self, route: PlanRoute, body: Option<&Plan>) -> ApiResult<ApiMessage> {
        let (status, text) = self.call(route, body).await?;
        let result = interpret_mutation(status, &text);

        match &result {
            Ok(msg) => tracing::info!(%route, status, message = %msg.mensagem, "backend replied"),
            Err(e) => tracing::warn!(%route, status, error = %e, "backend call failed"),
        }

        result
    }

    async fn call(&self, route: PlanRoute, body: Option<&Plan>) -> ApiResult<(u16, String)> {
        let url = route.url(&self.base_url);
        tracing::debug!(%route, %url, "sending request");

        let mut request = match route.method() {
            Method::Get => self.client.get(&url),
            Method::Post => self.client.post(&url),
            Method::Put => self.client.put(&url),
            Method::Delete => self.client.delete(&url),
            Method::Patch => self.client.patch(&url),
        };

        if let Some(plan) = body {
            request = request.json(plan);
        }

        let response = request.send().await.map_err(transport_error)?;
        let status = response.status().as_u16();
        let text = response.text().await.map_err(transport_error)?;

        Ok((status, text))
    }
}

fn transport_error(e: reqwest::Error) -> ApiError {
    if e.is_timeout() {
        ApiError::Network("request timed out".to_string())
    } else if e.is_decode() {
        ApiError::Decode(e.to_string())
    } else {
        ApiError::Network(e.to_string())
    }
}
