pub mod api;
pub mod config;
pub mod dto;
pub mod handlers;
pub mod service;
pub mod surface;
pub mod view;

use axum::{
    Router,
    routing::{delete, get},
};
use tower_http::trace::TraceLayer;

use std::sync::Arc;

use service::NotesClient;

pub fn router(client: Arc<NotesClient>) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/health", get(handlers::health_check))
        .route(
            "/notes",
            get(handlers::list_notes).post(handlers::create_note),
        )
        .route("/notes/{id}", delete(handlers::delete_note))
        .with_state(client)
        .layer(TraceLayer::new_for_http())
}
