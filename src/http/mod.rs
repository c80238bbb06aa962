// http/mod.rs — Axum HTTP server for the tags-diff web UI.
//
// Endpoints:
//   GET  /tags-diff   (entry form)
//   POST /tags-diff   (compare old vs new tag lists)
//   GET  /static/*    (user-provided assets)
//   GET  /health

pub mod diff;
pub mod health;
pub mod page;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::{Context as _, Result};
use axum::{routing::get, Router};
use tower_http::services::ServeDir;
use tracing::info;

use crate::AppContext;

pub async fn serve(ctx: Arc<AppContext>) -> Result<()> {
    let bind = format!("{}:{}", ctx.config.bind_address, ctx.config.port);
    let addr: SocketAddr = bind
        .parse()
        .with_context(|| format!("invalid listen address '{bind}'"))?;

    let router = build_router(ctx);

    info!("listening on http://{}", addr);
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("could not bind {addr}"))?;
    axum::serve(listener, router).await?;
    Ok(())
}

pub fn build_router(ctx: Arc<AppContext>) -> Router {
    let static_files = ServeDir::new(&ctx.config.static_dir);
    Router::new()
        .route("/tags-diff", get(diff::show_form).post(diff::compare))
        .route("/health", get(health::health))
        .nest_service("/static", static_files)
        .with_state(ctx)
}
