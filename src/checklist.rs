use serde::{Deserialize, Serialize};

use std::collections::HashSet;

/// One completable item of a Task or Note checklist.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ChecklistItem {
    pub id: String,
    pub text: String,
    pub completed: bool,
}

/// Serializes a checklist into the TEXT blob stored alongside its record.
pub fn encode(items: &[ChecklistItem]) -> String {
    serde_json::to_string(items).unwrap_or_else(|_| String::from("[]"))
}

/// Decodes a stored blob back into an ordered checklist. A missing or
/// malformed blob decodes to the empty list rather than failing.
pub fn decode(blob: Option<String>) -> Vec<ChecklistItem> {
    blob.and_then(|raw| serde_json::from_str(&raw).ok())
        .unwrap_or_default()
}

/// Item ids must be unique within one checklist.
pub fn has_unique_ids(items: &[ChecklistItem]) -> bool {
    let mut seen = HashSet::new();
    items.iter().all(|item| seen.insert(item.id.as_str()))
}
