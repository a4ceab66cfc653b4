use serde::{Deserialize, Serialize};

use crate::boards::data::BoardID;
use crate::checklist::ChecklistItem;

pub type TaskID = i64;

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    Medium,
    High,
}

impl Priority {
    pub fn as_str(self) -> &'static str {
        match self {
            Priority::Low => "low",
            Priority::Medium => "medium",
            Priority::High => "high",
        }
    }

    pub fn parse(value: &str) -> Option<Priority> {
        match value {
            "low" => Some(Priority::Low),
            "medium" => Some(Priority::Medium),
            "high" => Some(Priority::High),
            _ => None,
        }
    }
}

/// The three fixed Kanban stages. Any column is reachable from any other;
/// there is no transition ordering.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum Column {
    Todo,
    InProgress,
    Done,
}

impl Column {
    pub fn as_str(self) -> &'static str {
        match self {
            Column::Todo => "todo",
            Column::InProgress => "inProgress",
            Column::Done => "done",
        }
    }

    pub fn parse(value: &str) -> Option<Column> {
        match value {
            "todo" => Some(Column::Todo),
            "inProgress" => Some(Column::InProgress),
            "done" => Some(Column::Done),
            _ => None,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: TaskID,
    pub board_id: BoardID,
    pub owner_id: i64,
    pub title: String,
    pub description: String,
    pub priority: Priority,
    pub column: Column,
    pub checklist: Vec<ChecklistItem>,
    pub created_at: String,
    pub updated_at: String,
}

#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct AddTaskRequest {
    pub board_id: BoardID,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub priority: Priority,
    #[serde(default)]
    pub checklist: Vec<ChecklistItem>,
}

/// Partial update; absent fields are left untouched.
#[derive(Deserialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTaskRequest {
    pub id: TaskID,
    pub board_id: Option<BoardID>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub priority: Option<Priority>,
    pub column: Option<Column>,
    pub checklist: Option<Vec<ChecklistItem>>,
}
