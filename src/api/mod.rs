//! Backend API
//!
//! The plans backend is consumed, never implemented here. This module
//! names its routes, decides what each response means, and (natively)
//! ships a reqwest client.
//!
//! # Routes
//!
//! ```text
//! GET    /api/planos                 -> [Plan]
//! POST   /criarplano                 -> {status, mensagem}
//! PUT    /api/planos/:id             -> {status, mensagem}
//! DELETE /api/planos/:id             -> {status, mensagem}
//! PATCH  /api/planos/:id/principal   -> {status, mensagem}
//! ```

pub mod error;
pub mod response;
pub mod routes;

#[cfg(feature = "native")]
pub mod client;

pub use error::{ApiError, ApiResult, UNAUTHORIZED_MESSAGE};
pub use response::{interpret_listing, interpret_mutation, ApiMessage, Listing, MessageStatus};
pub use routes::{Method, PlanRoute, LOGIN_PATH};

#[cfg(feature = "native")]
pub use client::PlanClient;
