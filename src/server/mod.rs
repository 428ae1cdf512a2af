//! HTTP surface
//!
//! Thin axum layer over the agent and generators. Handlers parse the
//! request, run the pipeline, and rely on `Error`'s `IntoResponse` for
//! failure bodies.

pub mod routes;
pub mod state;

use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

pub use state::AppState;

async fn health() -> &'static str {
    "OK"
}

/// Assemble the application router.
pub fn build_router(state: AppState) -> Router {
    let enable_cors = state.config().server.enable_cors;

    let router = Router::new()
        .route("/health", get(health))
        .route("/documents", get(routes::documents::list_documents))
        .route("/ask", post(routes::ask::ask))
        .route("/generate-qcm", post(routes::quiz::generate_quiz))
        .route(
            "/generate-revision-sheet",
            post(routes::sheet::generate_sheet),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    if enable_cors {
        router.layer(CorsLayer::permissive())
    } else {
        router
    }
}

/// Bind and serve until the process is stopped.
pub async fn serve(state: AppState) -> anyhow::Result<()> {
    let addr = format!(
        "{}:{}",
        state.config().server.host,
        state.config().server.port
    );
    let app = build_router(state);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("tutor server listening on {addr}");
    axum::serve(listener, app).await?;
    Ok(())
}
