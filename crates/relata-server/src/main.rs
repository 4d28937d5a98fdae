use std::env;
use std::sync::Arc;

use axum::Router;
use axum::routing::{get, post};
use tower_http::cors::{Any, CorsLayer};
use tracing_subscriber::EnvFilter;

mod error;
mod routes;
mod state;

use relata_auth::directory::CredentialDirectory;
use relata_openai::client::OpenAiClient;
use state::AppState;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let generator = match env::var("OPENAI_API_KEY") {
        Ok(key) if !key.is_empty() => Some(OpenAiClient::new(key)),
        _ => {
            tracing::warn!("OPENAI_API_KEY not set; report generation will fail until configured");
            None
        }
    };

    let port: u16 = env::var("RELATA_PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(8080);

    let state = AppState {
        generator,
        directory: Arc::new(CredentialDirectory::seeded()),
    };

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let app = Router::new()
        // Health (no auth)
        .route("/health", get(routes::health::health_check))
        .route("/login", post(routes::auth::login))
        // Catalogs for the form selectors
        .route("/report-types", get(routes::catalog::list_report_types))
        .route(
            "/report-types/{id}/fields",
            get(routes::catalog::get_report_fields),
        )
        .route("/tones", get(routes::catalog::list_tones))
        .route("/genders", get(routes::catalog::list_genders))
        .route("/approaches", get(routes::catalog::list_approaches))
        // Generation and export
        .route("/reports/generate", post(routes::reports::generate_report))
        .route("/reports/export", post(routes::reports::export_report))
        .layer(cors)
        .with_state(state);

    let listener = tokio::net::TcpListener::bind(("0.0.0.0", port)).await?;
    tracing::info!(port, "listening");
    axum::serve(listener, app).await?;

    Ok(())
}
