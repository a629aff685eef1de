use serde::{Deserialize, Serialize};

use std::fmt;

/// Identifier assigned by the notes service. The client never inspects it
/// beyond putting it back into URLs and markup.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum NoteId {
    Int(i64),
    Text(String),
}

impl fmt::Display for NoteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(id) => write!(f, "{id}"),
            Self::Text(id) => f.write_str(id),
        }
    }
}

impl From<i64> for NoteId {
    fn from(id: i64) -> Self {
        Self::Int(id)
    }
}

impl NoteId {
    /// The id percent-encoded as a single URL path segment.
    pub fn path_segment(&self) -> String {
        urlencoding::encode(&self.to_string()).into_owned()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    /// Note ID
    pub id: NoteId,
    /// Note title
    pub title: String,
    /// Note content
    pub content: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateNoteRequest {
    /// Note title
    pub title: String,
    /// Note content
    pub content: String,
}
