use std::{path::PathBuf, sync::Arc};

use anyhow::Context;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    routing::get,
    Router,
};
use clap::Parser;
use site_api::{
    resolve_category, resolve_listing, resolve_missing_route, resolve_post, PageView, SiteContext,
};
use tower_http::trace::TraceLayer;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;
use wp_client::WpClient;

mod config;
mod render;

use config::load_settings;
use render::{Renderer, RENDER_FAILED_HTML};

#[derive(Parser, Debug)]
#[command(about = "Server-rendered front end for a WordPress REST backend")]
struct Cli {
    #[arg(long, default_value = "frontend.toml")]
    config: PathBuf,
    /// Overrides the configured listen port.
    #[arg(long)]
    port: Option<u16>,
}

#[derive(Clone)]
struct AppState {
    site: SiteContext,
    renderer: Arc<Renderer>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let cli = Cli::parse();
    let mut settings = load_settings(&cli.config)?;
    if let Some(port) = cli.port {
        settings.port = port;
    }

    let client_config = settings.client_config().map_err(|error| {
        error!(%error, "refusing to start");
        error
    })?;
    info!(
        mode = client_config.auth.label(),
        api_root = client_config.api_root(),
        timeout_secs = client_config.timeout.as_secs(),
        "upstream client configured"
    );
    let client = WpClient::new(client_config).context("failed to build upstream client")?;
    let renderer = Renderer::new().context("failed to compile templates")?;

    let state = AppState {
        site: SiteContext::new(Arc::new(client)),
        renderer: Arc::new(renderer),
    };
    let app = build_router(Arc::new(state));

    let addr = settings.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    info!(%addr, "frontend listening");
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

async fn shutdown_signal() {
    if let Err(error) = tokio::signal::ctrl_c().await {
        error!(%error, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    info!("shutting down");
}

fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/healthz", get(healthz))
        .route("/", get(home))
        .route("/page/:page", get(home_page))
        .route("/post/:slug", get(single_post))
        .route("/category/:slug", get(category))
        .route("/category/:slug/page/:page", get(category_page))
        .fallback(missing_route)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn healthz() -> &'static str {
    "ok"
}

async fn home(State(state): State<Arc<AppState>>) -> Response {
    let page = resolve_listing(&state.site, None).await;
    respond(&state, page)
}

async fn home_page(State(state): State<Arc<AppState>>, Path(page): Path<String>) -> Response {
    let page = resolve_listing(&state.site, Some(&page)).await;
    respond(&state, page)
}

async fn single_post(State(state): State<Arc<AppState>>, Path(slug): Path<String>) -> Response {
    let page = resolve_post(&state.site, &slug).await;
    respond(&state, page)
}

async fn category(State(state): State<Arc<AppState>>, Path(slug): Path<String>) -> Response {
    let page = resolve_category(&state.site, &slug, None).await;
    respond(&state, page)
}

async fn category_page(
    State(state): State<Arc<AppState>>,
    Path((slug, page)): Path<(String, String)>,
) -> Response {
    let page = resolve_category(&state.site, &slug, Some(&page)).await;
    respond(&state, page)
}

async fn missing_route(State(state): State<Arc<AppState>>) -> Response {
    let page = resolve_missing_route(&state.site).await;
    respond(&state, page)
}

fn respond(state: &AppState, page: PageView) -> Response {
    let status =
        StatusCode::from_u16(page.status.as_u16()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    match state.renderer.render(page.view, &page.context) {
        Ok(html) => (status, Html(html)).into_response(),
        Err(error) => {
            error!(?error, view = ?page.view, "failed to render view");
            (StatusCode::INTERNAL_SERVER_ERROR, Html(RENDER_FAILED_HTML)).into_response()
        }
    }
}

#[cfg(test)]
#[path = "tests/main_tests.rs"]
mod tests;
