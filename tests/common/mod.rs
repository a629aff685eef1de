#![allow(dead_code)]

use axum::{
    Json, Router,
    extract::{Path, State},
    http::{HeaderMap, StatusCode, header::CONTENT_TYPE},
    response::{IntoResponse, Response},
    routing::{delete, get},
};
use notes_client::{
    api::NotesApi,
    config::{Api, Config},
    dto::{Note, NoteId},
    service::NotesClient,
    surface::DisplaySurface,
};
use serde_json::Value;
use tokio::sync::{Notify, oneshot};

use std::{
    sync::{Arc, Mutex},
    time::Duration,
};

#[derive(Debug, Clone)]
pub struct RecordedCreate {
    pub content_type: Option<String>,
    pub body: Value,
}

/// In-process stand-in for the notes REST service.
#[derive(Default)]
pub struct MockNotes {
    notes: Mutex<Vec<Note>>,
    next_id: Mutex<i64>,
    pub created: Mutex<Vec<RecordedCreate>>,
    pub deleted: Mutex<Vec<String>>,
    pub list_status: Mutex<Option<StatusCode>>,
    pub create_status: Mutex<Option<StatusCode>>,
    hold_next_list: Mutex<Option<oneshot::Receiver<()>>>,
    pub list_arrived: Notify,
}

impl MockNotes {
    pub fn seed(&self, notes: &[(i64, &str, &str)]) {
        let notes: Vec<_> = notes
            .iter()
            .map(|&(id, title, content)| (NoteId::Int(id), title, content))
            .collect();
        self.seed_notes(&notes);
    }

    pub fn seed_notes(&self, notes: &[(NoteId, &str, &str)]) {
        let seeded: Vec<Note> = notes
            .iter()
            .map(|(id, title, content)| Note {
                id: id.clone(),
                title: (*title).to_string(),
                content: (*content).to_string(),
            })
            .collect();
        *self.next_id.lock().unwrap() = seeded
            .iter()
            .filter_map(|n| match n.id {
                NoteId::Int(id) => Some(id),
                NoteId::Text(_) => None,
            })
            .max()
            .unwrap_or(0);
        *self.notes.lock().unwrap() = seeded;
    }

    pub fn notes(&self) -> Vec<Note> {
        self.notes.lock().unwrap().clone()
    }

    /// The next list request snapshots the notes on arrival and waits for
    /// the returned sender before answering.
    pub fn hold_next_list(&self) -> oneshot::Sender<()> {
        let (tx, rx) = oneshot::channel();
        *self.hold_next_list.lock().unwrap() = Some(rx);
        tx
    }
}

async fn list(State(mock): State<Arc<MockNotes>>) -> Response {
    let status = *mock.list_status.lock().unwrap();
    if let Some(status) = status {
        return (status, "boom").into_response();
    }

    let snapshot = mock.notes();
    let held = mock.hold_next_list.lock().unwrap().take();
    if let Some(release) = held {
        mock.list_arrived.notify_one();
        let _ = release.await;
    }

    Json(snapshot).into_response()
}

async fn create(
    State(mock): State<Arc<MockNotes>>,
    headers: HeaderMap,
    body: String,
) -> Response {
    let body: Value = serde_json::from_str(&body).unwrap_or(Value::Null);
    mock.created.lock().unwrap().push(RecordedCreate {
        content_type: headers
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string),
        body: body.clone(),
    });

    let status = *mock.create_status.lock().unwrap();
    if let Some(status) = status {
        return (status, "rejected").into_response();
    }

    let id = {
        let mut next_id = mock.next_id.lock().unwrap();
        *next_id += 1;
        *next_id
    };
    let note = Note {
        id: NoteId::Int(id),
        title: body["title"].as_str().unwrap_or_default().to_string(),
        content: body["content"].as_str().unwrap_or_default().to_string(),
    };
    mock.notes.lock().unwrap().push(note.clone());

    (StatusCode::CREATED, Json(note)).into_response()
}

async fn remove(State(mock): State<Arc<MockNotes>>, Path(id): Path<String>) -> StatusCode {
    mock.deleted.lock().unwrap().push(id.clone());

    let mut notes = mock.notes.lock().unwrap();
    let before = notes.len();
    notes.retain(|n| n.id.to_string() != id);

    if notes.len() == before {
        StatusCode::NOT_FOUND
    } else {
        StatusCode::NO_CONTENT
    }
}

/// Starts the mock and returns its base URL (`http://addr/api`).
pub async fn spawn_mock() -> (String, Arc<MockNotes>) {
    let mock = Arc::new(MockNotes::default());

    let router = Router::new()
        .route("/api/notes/", get(list).post(create))
        .route("/api/notes/{id}/", delete(remove))
        .with_state(mock.clone());

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });

    (format!("http://{addr}/api"), mock)
}

pub fn config_for(base_url: &str) -> Config {
    Config {
        api: Api {
            base_url: base_url.to_string(),
        },
        listen_port: 0,
        request_timeout: Duration::from_secs(5),
    }
}

pub fn client_for(base_url: &str) -> Arc<NotesClient> {
    let api = NotesApi::new(&config_for(base_url)).unwrap();
    Arc::new(NotesClient::new(api, Arc::new(DisplaySurface::new())))
}

/// Serves the front end for `client` and returns its base URL.
pub async fn spawn_front(client: Arc<NotesClient>) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, notes_client::router(client))
            .await
            .unwrap();
    });

    format!("http://{addr}")
}

pub fn count_blocks(html: &str) -> usize {
    html.matches(r#"<div class="note">"#).count()
}
