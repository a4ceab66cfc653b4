use serde::{Deserialize, Serialize};

use crate::checklist::ChecklistItem;

pub type NoteID = i64;

/// A markdown note. `content` is opaque text to this layer; rendering is the
/// client's concern.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Note {
    pub id: NoteID,
    pub owner_id: i64,
    pub title: String,
    pub content: String,
    pub checklist: Vec<ChecklistItem>,
    pub created_at: String,
    pub updated_at: String,
}

#[derive(Deserialize, Debug)]
pub struct AddNoteRequest {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub checklist: Vec<ChecklistItem>,
}

#[derive(Deserialize, Debug)]
pub struct UpdateNoteRequest {
    pub id: NoteID,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub content: String,
    /// Absent means "leave the stored checklist untouched".
    pub checklist: Option<Vec<ChecklistItem>>,
}
