use reqwest::{Client, StatusCode};

use crate::{
    config::{Api, Config},
    dto::{CreateNoteRequest, Note, NoteId},
};

#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("Request to notes service failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Notes service responded with status {0}")]
    Status(StatusCode),

    #[error("Failed to decode notes: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Thin wrapper over the three REST calls of the notes service.
#[derive(Clone)]
pub struct NotesApi {
    client: Client,
    api: Api,
}

impl NotesApi {
    pub fn new(cfg: &Config) -> Result<Self, ClientError> {
        let client = Client::builder().timeout(cfg.request_timeout).build()?;

        Ok(Self {
            client,
            api: cfg.api.clone(),
        })
    }

    pub async fn get_all_notes(&self) -> Result<Vec<Note>, ClientError> {
        let url = self.api.notes_url();
        tracing::debug!("Fetching notes from {}", url);

        let response = self.client.get(&url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ClientError::Status(status));
        }

        let body = response.bytes().await?;
        Ok(serde_json::from_slice(&body)?)
    }

    /// Sends the note and hands back the status without judging it.
    pub async fn create_note(&self, request: &CreateNoteRequest) -> Result<StatusCode, ClientError> {
        let url = self.api.notes_url();
        tracing::debug!("Posting note to {}", url);

        let response = self
            .client
            .post(&url)
            .json(request)
            .send()
            .await?;

        Ok(response.status())
    }

    pub async fn delete_note(&self, id: &NoteId) -> Result<StatusCode, ClientError> {
        let url = self.api.note_url(id);
        tracing::debug!("Deleting note at {}", url);

        let response = self.client.delete(&url).send().await?;

        Ok(response.status())
    }
}
