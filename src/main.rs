use std::sync::Arc;

use notes_client::{api::NotesApi, config, service::NotesClient, surface::DisplaySurface};

#[tokio::main]
async fn main() {
    // Log setup
    tracing_subscriber::fmt::init();

    // Load config
    let cfg = config::load_config().expect("failed to locate or load config file");
    tracing::info!("Successfully loaded notes client config");
    tracing::info!("Notes service collection: {}", cfg.api.notes_url());

    // Client setup
    let api = NotesApi::new(&cfg).expect("failed to create HTTP client");
    let client = Arc::new(NotesClient::new(api, Arc::new(DisplaySurface::new())));

    // Initial render
    if let Err(e) = client.list_notes().await {
        tracing::error!("Initial notes fetch failed: {e}");
    }

    // Start server
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", cfg.listen_port))
        .await
        .expect("Failed to bind to address");
    let addr = listener.local_addr().expect("Failed to read local address");

    tracing::info!("Notes client starting, listening on {}", addr);

    axum::serve(listener, notes_client::router(client))
        .await
        .expect("Failed to start server");
}
