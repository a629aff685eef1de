use maud::{Markup, PreEscaped};

use std::sync::{
    Mutex, MutexGuard,
    atomic::{AtomicU64, Ordering},
};

use crate::dto::CreateNoteRequest;

/// Generation taken by a refresh before it goes to the network.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct RenderTicket(u64);

#[derive(Debug, Default)]
struct Rendered {
    markup: String,
    applied: u64,
}

/// The `#notes` container. Holds rendered markup only, never notes.
#[derive(Debug, Default)]
pub struct DisplaySurface {
    issued: AtomicU64,
    rendered: Mutex<Rendered>,
}

impl DisplaySurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn begin_render(&self) -> RenderTicket {
        RenderTicket(self.issued.fetch_add(1, Ordering::SeqCst) + 1)
    }

    /// Replaces the whole surface unless a newer ticket already landed.
    pub fn apply(&self, ticket: RenderTicket, markup: Markup) -> bool {
        let mut rendered = self.lock();
        if ticket.0 < rendered.applied {
            return false;
        }

        rendered.markup = markup.into_string();
        rendered.applied = ticket.0;
        true
    }

    pub fn contents(&self) -> Markup {
        PreEscaped(self.lock().markup.clone())
    }

    // Rendered state is a plain string swap, so a poisoned lock is still usable
    fn lock(&self) -> MutexGuard<'_, Rendered> {
        self.rendered
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
    }
}

/// Title and content inputs of the create form.
#[derive(Debug, Default)]
pub struct FormFields {
    draft: Mutex<CreateNoteRequest>,
}

impl FormFields {
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            draft: Mutex::new(CreateNoteRequest {
                title: title.into(),
                content: content.into(),
            }),
        }
    }

    pub fn read(&self) -> CreateNoteRequest {
        self.lock().clone()
    }

    pub fn set(&self, title: impl Into<String>, content: impl Into<String>) {
        let mut draft = self.lock();
        draft.title = title.into();
        draft.content = content.into();
    }

    pub fn clear(&self) {
        self.set("", "");
    }

    fn lock(&self) -> MutexGuard<'_, CreateNoteRequest> {
        self.draft
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
    }
}
