use axum::{
    Router,
    extract::Extension,
    http::HeaderValue,
    routing::get,
};
use item_service::items::handlers::{
    handle_create_item, handle_delete_item, handle_get_item, handle_list_items, handle_root,
    handle_update_item,
};
use item_service::items::protocol::{ENDPOINT_ITEM, ENDPOINT_ITEMS, ENDPOINT_ROOT};
use item_service::items::store::ItemStore;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    let args: Vec<String> = std::env::args().collect();

    let mut bind_addr: SocketAddr = "127.0.0.1:8000".parse()?;
    let mut cors_origins: Vec<String> = vec![];

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--bind" => {
                bind_addr = args[i + 1].parse()?;
                i += 2;
            }
            "--cors-origin" => {
                cors_origins.push(args[i + 1].clone());
                i += 2;
            }
            "--help" | "-h" => {
                eprintln!(
                    "Usage: {} [--bind <addr:port>] [--cors-origin <origin>]...",
                    args[0]
                );
                eprintln!("Example: {} --bind 127.0.0.1:8000", args[0]);
                eprintln!(
                    "Example: {} --bind 0.0.0.0:8000 --cors-origin https://shop.example.com",
                    args[0]
                );
                std::process::exit(0);
            }
            _ => {
                i += 1;
            }
        }
    }

    // No origins configured means development mode: allow everything.
    let cors = if cors_origins.is_empty() {
        tracing::warn!("CORS: allowing all origins (development mode)");
        CorsLayer::permissive()
    } else {
        let mut origins: Vec<HeaderValue> = Vec::new();
        for origin in &cors_origins {
            origins.push(origin.parse()?);
        }
        tracing::info!("CORS: restricting to origins {:?}", cors_origins);
        CorsLayer::new()
            .allow_origin(AllowOrigin::list(origins))
            .allow_methods(Any)
            .allow_headers(Any)
    };

    let store = Arc::new(ItemStore::new());

    let app = Router::new()
        .route(ENDPOINT_ROOT, get(handle_root))
        .route(
            ENDPOINT_ITEMS,
            get(handle_list_items).post(handle_create_item),
        )
        .route(
            ENDPOINT_ITEM,
            get(handle_get_item)
                .put(handle_update_item)
                .delete(handle_delete_item),
        )
        .layer(Extension(store))
        .layer(TraceLayer::new_for_http())
        .layer(cors);

    tracing::info!("Item service listening on {}", bind_addr);
    tracing::info!("Press Ctrl+C to shutdown");

    let listener = tokio::net::TcpListener::bind(bind_addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
