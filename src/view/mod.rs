use maud::{DOCTYPE, Markup, html};

use crate::{
    dto::Note,
    surface::{DisplaySurface, FormFields},
};

// === Components ===
// a single note block with its delete control
pub fn note_html(note: &Note) -> Markup {
    let id = note.id.to_string();
    let segment = note.id.path_segment();
    html! {
        div class="note" {
            h3 { (note.title) }
            p { (note.content) }
            button class="btn btn-danger" data-note-id=(id) hx-delete=(format!("/notes/{segment}"))
                hx-target="#notes" hx-swap="innerHTML" { "Delete" }
        }
    }
}

pub fn notes_html(notes: &[Note]) -> Markup {
    html! {
        @for note in notes {
            (note_html(note))
        }
    }
}

// the create form, filled from the current input values
pub fn note_form_html(form: &FormFields) -> Markup {
    let draft = form.read();
    html! {
        form id="note-form" hx-post="/notes" hx-target="#notes" hx-swap="innerHTML" {
            div class="mb-2" {
                input id="note-title" class="form-control" type="text" name="title"
                    placeholder="Title" value=(draft.title);
            }
            div class="mb-2" {
                textarea id="note-content" class="form-control" name="content"
                    placeholder="Content" { (draft.content) }
            }
            button class="btn btn-primary" type="submit" { "Add note" }
        }
    }
}

// the form again, flagged for an out-of-band swap next to a list response
pub fn note_form_oob_html(form: &FormFields) -> Markup {
    html! {
        div id="note-form-slot" hx-swap-oob="true" {
            (note_form_html(form))
        }
    }
}

pub fn page_html(surface: &DisplaySurface, form: &FormFields) -> Markup {
    html! {
        (DOCTYPE)
        html {
            head {
                meta charset="utf-8";
                title { "Notes" }
                link rel="stylesheet" href="https://cdn.jsdelivr.net/npm/bootstrap@5.3.3/dist/css/bootstrap.min.css";
                script src="https://unpkg.com/htmx.org@1.9.10" {}
            }
            body {
                div class="container py-4" {
                    h1 class="mb-4" { "Notes" }
                    div id="note-form-slot" {
                        (note_form_html(form))
                    }
                    div id="notes" class="mt-4" {
                        (surface.contents())
                    }
                }
            }
        }
    }
}
