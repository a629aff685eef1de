use crate::{
    api::{ClientError, NotesApi},
    dto::NoteId,
    surface::{DisplaySurface, FormFields},
    view,
};

use std::sync::Arc;

/// Fetches, renders and mutates notes. Every mutation ends in a full
/// refresh of the display surface.
#[derive(Clone)]
pub struct NotesClient {
    api: NotesApi,
    surface: Arc<DisplaySurface>,
}

impl NotesClient {
    pub const fn new(api: NotesApi, surface: Arc<DisplaySurface>) -> Self {
        Self { api, surface }
    }

    pub fn surface(&self) -> &DisplaySurface {
        &self.surface
    }

    pub async fn list_notes(&self) -> Result<(), ClientError> {
        let ticket = self.surface.begin_render();
        let notes = self.api.get_all_notes().await?;

        if self.surface.apply(ticket, view::notes_html(&notes)) {
            tracing::info!("Rendered {} notes", notes.len());
        } else {
            tracing::warn!("Discarded stale notes snapshot, a newer refresh already rendered");
        }

        Ok(())
    }

    /// Submits whatever the form holds, then clears it and refreshes even
    /// if the submission failed. The submission error wins over the
    /// refresh error.
    pub async fn create_note(&self, form: &FormFields) -> Result<(), ClientError> {
        let request = form.read();
        tracing::info!("Creating note '{}'", request.title);

        let sent = self.api.create_note(&request).await;
        if let Ok(status) = &sent
            && !status.is_success()
        {
            tracing::warn!("Notes service answered create with status {}", status);
        }

        form.clear();
        let refreshed = self.list_notes().await;

        sent?;
        refreshed
    }

    pub async fn delete_note(&self, id: &NoteId) -> Result<(), ClientError> {
        tracing::info!("Deleting note {}", id);

        let sent = self.api.delete_note(id).await;
        if let Ok(status) = &sent
            && !status.is_success()
        {
            tracing::warn!("Notes service answered delete of {} with status {}", id, status);
        }

        let refreshed = self.list_notes().await;

        sent?;
        refreshed
    }
}
