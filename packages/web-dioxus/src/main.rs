//! Autism ABA Partner - Dioxus Web Application
//!
//! Public marketing home page with the hero carousel, plus the session-gated
//! admin panel under `/admin`. State machines live in `partner_core`; this
//! crate renders them.
//!
//! ## Running
//!
//! Development (with hot reload):
//! ```bash
//! BACKEND_URL=http://localhost:8080 dx serve --features web
//! ```
//!
//! Production build:
//! ```bash
//! BACKEND_URL=https://api.example.org dx build --release --features web
//! ```

#![allow(non_snake_case)]

mod app;
mod auth;
mod components;
mod hooks;
mod pages;
mod routes;

use partner_core::config::{self, PortalConfig};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() {
    // Initialize logging (no timestamps: wasm has no wall clock)
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,partner_web=debug,partner_core=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer().without_time())
        .init();

    match PortalConfig::from_env() {
        Ok(loaded) => {
            tracing::info!(backend_url = %loaded.backend_url, "Configuration loaded");
            config::init(loaded);
        }
        Err(e) => {
            tracing::warn!(error = %e, "Invalid configuration, using defaults");
        }
    }

    dioxus::launch(app::App);
}
