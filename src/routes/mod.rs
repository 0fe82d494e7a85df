//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! This module binds the host's own HTTP endpoints and stitches them with
//! Leptos SSR rendering under a single Axum router. The WASM bundle is served
//! from `/pkg`, and any other file under the site root (hero image, favicon)
//! is served as-is.

pub mod inference;

use std::path::PathBuf;

use axum::Router;
use axum::http::StatusCode;
use axum::routing::get;
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, generate_route_list};
use tower_http::compression::CompressionLayer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// Host API routes: liveness and the inference health proxy.
pub fn api_routes(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/healthz", get(healthz))
        .route("/api/inference/health", get(inference::inference_health))
        .layer(cors)
        .with_state(state)
}

/// API routes + Leptos SSR + static site assets.
///
/// # Errors
///
/// Returns an error if the Leptos configuration cannot be loaded (missing or
/// malformed `Cargo.toml` `[package.metadata.leptos]` section).
pub fn leptos_app(state: AppState) -> Result<Router, String> {
    let conf = get_configuration(None).map_err(|e| format!("leptos configuration: {e}"))?;
    let leptos_options = conf.leptos_options;
    let routes = generate_route_list(client::app::App);
    let predict_url = state.config.predict_url.clone();

    let leptos_router = Router::new()
        .leptos_routes(&leptos_options, routes, {
            let opts = leptos_options.clone();
            move || client::app::shell(opts.clone(), predict_url.clone())
        })
        .with_state(leptos_options.clone());

    let site_root_path = PathBuf::from(leptos_options.site_root.as_ref());

    Ok(api_routes(state)
        .merge(leptos_router)
        .nest_service("/pkg", ServeDir::new(site_root_path.join("pkg")))
        .fallback_service(ServeDir::new(&site_root_path))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http()))
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}
