//! # API crate — server functions behind the portal main page
//!
//! Every public `async fn` in this file is a Dioxus server function, annotated
//! with `#[get(...)]` and compiled twice: once with the real server logic
//! (behind `#[cfg(feature = "server")]`) and once as a thin client stub that
//! forwards the call over HTTP.
//!
//! ## Modules
//!
//! | Module | Feature gate | Purpose |
//! |--------|-------------|---------|
//! | [`config`] | `server` | Upstream endpoint settings from the environment, and loading `portal.toml` |
//! | [`notice`] | `server` | GraphQL client for the school notice |
//!
//! ## Server functions exposed here
//!
//! - `get_notice` — the current school-wide notice text
//! - `get_portal_config` — links, photo host and service shortcuts for the page

use dioxus::prelude::*;

#[cfg(feature = "server")]
pub mod config;
#[cfg(feature = "server")]
pub mod notice;

pub use domain::PortalConfig;

/// Fetch the current notice from the upstream GraphQL API.
#[cfg(feature = "server")]
#[get("/api/notice")]
pub async fn get_notice() -> Result<String, ServerFnError> {
    let upstream =
        config::UpstreamConfig::from_env().map_err(|e| ServerFnError::new(e.to_string()))?;

    notice::fetch_notice(&upstream).await.map_err(|e| {
        tracing::error!("Notice query failed: {}", e);
        ServerFnError::new(e.to_string())
    })
}

#[cfg(not(feature = "server"))]
#[get("/api/notice")]
pub async fn get_notice() -> Result<String, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

/// Get the deployment's page configuration.
#[cfg(feature = "server")]
#[get("/api/config")]
pub async fn get_portal_config() -> Result<PortalConfig, ServerFnError> {
    config::load_portal_config().map_err(|e| {
        tracing::error!("Failed to load portal config: {}", e);
        ServerFnError::new(e.to_string())
    })
}

#[cfg(not(feature = "server"))]
#[get("/api/config")]
pub async fn get_portal_config() -> Result<PortalConfig, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}
