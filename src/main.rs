use std::sync::Arc;

use tower_http::cors::CorsLayer;

use concierge_backend::config::Settings;
use concierge_backend::routes;
use concierge_backend::services::openai::{CompletionClient, OpenAiClient};
use concierge_backend::services::responder::Responder;
use concierge_backend::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let settings = Settings::from_env();
    let llm = OpenAiClient::from_settings(&settings)
        .map(|client| Arc::new(client) as Arc<dyn CompletionClient>);

    if llm.is_some() {
        tracing::info!(model = %settings.model, "LLM path enabled");
    } else {
        tracing::info!("no API key configured, fallback replies only");
    }

    let state = Arc::new(AppState::new(Responder::with_default_rules(llm)));

    let app = routes::create_router()
        .route(
            "/",
            axum::routing::get(|| async { "Restaurant concierge service is running." }),
        )
        .with_state(state)
        .layer(CorsLayer::very_permissive());

    let listener = tokio::net::TcpListener::bind("0.0.0.0:3000").await?;
    tracing::info!("concierge backend listening at http://localhost:3000");
    axum::serve(listener, app).await?;

    Ok(())
}
