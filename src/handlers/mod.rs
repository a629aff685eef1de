use axum::{
    Form,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use axum_macros::debug_handler;
use maud::{Markup, html};
use serde::Deserialize;

use std::sync::Arc;

use crate::{dto::NoteId, service::NotesClient, surface::FormFields, view};

#[derive(Debug, Clone, Deserialize)]
pub struct NoteForm {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub content: String,
}

#[debug_handler]
pub async fn index(State(client): State<Arc<NotesClient>>) -> Markup {
    if let Err(e) = client.list_notes().await {
        tracing::error!("failed to load notes: {}", e);
    }
    view::page_html(client.surface(), &FormFields::default())
}

#[debug_handler]
pub async fn list_notes(State(client): State<Arc<NotesClient>>) -> Markup {
    if let Err(e) = client.list_notes().await {
        tracing::error!("failed to refresh notes: {}", e);
    }
    client.surface().contents()
}

#[debug_handler]
pub async fn create_note(
    State(client): State<Arc<NotesClient>>,
    Form(payload): Form<NoteForm>,
) -> Markup {
    let form = FormFields::new(payload.title, payload.content);
    if let Err(e) = client.create_note(&form).await {
        tracing::error!("failed to create note: {}", e);
    }
    html! {
        (client.surface().contents())
        (view::note_form_oob_html(&form))
    }
}

#[debug_handler]
pub async fn delete_note(
    State(client): State<Arc<NotesClient>>,
    Path(id): Path<String>,
) -> Markup {
    let id = NoteId::Text(id);
    if let Err(e) = client.delete_note(&id).await {
        tracing::error!("failed to delete note {}: {}", id, e);
    }
    client.surface().contents()
}

#[debug_handler]
pub async fn health_check() -> Response {
    (StatusCode::OK, "Hello from notes client!").into_response()
}
