//! Plano Salarial Dashboard
//!
//! Budget plans dashboard built with Leptos (WASM).
//!
//! # Features
//!
//! - Totals cards for the principal plan
//! - Create, edit, delete and choose the principal plan
//! - Pie chart of the principal plan's distribution
//! - Toasts for backend replies and server flash messages
//!
//! # Architecture
//!
//! This is a client-side rendered (CSR) Leptos application that compiles to
//! WebAssembly. Plan rules, totals and response handling come from the
//! `salario` crate; this crate only renders and talks HTTP via gloo-net.

use leptos::*;

mod api;
mod app;
mod components;
mod flash;
mod state;

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    // Mount the app to the document body
    mount_to_body(|| view! { <app::App /> });
}
