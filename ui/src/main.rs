use axum::extract::State;
use axum::response::Html;
use axum::{Router, routing::get};
use std::net::SocketAddr;

#[derive(Clone)]
struct AppState {
    api_url: String,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    let api_url =
        std::env::var("API_URL").unwrap_or_else(|_| "http://127.0.0.1:8000".to_string());
    let bind_addr: SocketAddr = std::env::var("UI_BIND")
        .unwrap_or_else(|_| "127.0.0.1:8080".to_string())
        .parse()?;

    let state = AppState {
        api_url: normalize_api_url(&api_url),
    };

    let app = Router::new().route("/", get(ui)).with_state(state);

    tracing::info!("UI listening on {}", bind_addr);
    axum::serve(tokio::net::TcpListener::bind(bind_addr).await?, app).await?;

    Ok(())
}

async fn ui(State(state): State<AppState>) -> Html<String> {
    Html(include_str!("ui.html").replace("__API_URL__", &state.api_url))
}

fn normalize_api_url(raw: &str) -> String {
    let trimmed = raw.trim();

    let normalized = if trimmed.starts_with("http://") || trimmed.starts_with("https://") {
        trimmed.to_string()
    } else {
        format!("http://{}", trimmed)
    };

    normalized.trim_end_matches('/').to_string()
}
