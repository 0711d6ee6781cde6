use axum::{Router, routing::get};
use configuration::{DashboardConfig, Settings};
use dashboard::Dashboard;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

pub mod error;
pub mod handlers;

/// The shared application state that all handlers can access.
///
/// It is read-only: every request performs its own recomputation.
pub struct AppState {
    pub dashboard: Dashboard,
    /// Control values used for any query parameter the client leaves out.
    pub defaults: DashboardConfig,
}

impl AppState {
    /// Builds the provider and dashboard described by `settings`.
    pub fn from_settings(settings: &Settings) -> anyhow::Result<Self> {
        let provider = api_client::provider_from_settings(&settings.provider)?;
        Ok(Self {
            dashboard: Dashboard::new(provider, &settings.provider)?,
            defaults: settings.dashboard.clone(),
        })
    }
}

/// Defines the application routes.
pub fn router(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/api/health", get(|| async { "OK" }))
        .route("/api/dashboard", get(handlers::get_dashboard))
        .route("/api/dashboard/export.csv", get(handlers::get_export))
        .route("/api/ticker/:symbol", get(handlers::get_ticker_name))
        .with_state(state)
        .layer(cors)
        // This middleware will automatically log information about every incoming request.
        .layer(TraceLayer::new_for_http())
}

/// The main function to configure and run the web server.
pub async fn run_server(addr: SocketAddr, state: AppState) -> anyhow::Result<()> {
    let app = router(Arc::new(state));

    tracing::info!("Web server listening on http://{}", addr);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
