use rocket::FromForm;
use serde::{Deserialize, Serialize};

use crate::tasks::data::TaskID;

pub type SubtaskID = i64;

/// Child unit of work under a parent task. Subtasks carry no owner column;
/// ownership is always resolved through the parent task.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Subtask {
    pub id: SubtaskID,
    pub task_id: TaskID,
    pub title: String,
    pub completed: bool,
    pub created_at: String,
    pub updated_at: String,
}

#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct AddSubtaskRequest {
    pub task_id: TaskID,
    #[serde(default)]
    pub title: String,
}

#[derive(Deserialize, Debug)]
pub struct UpdateSubtaskRequest {
    pub id: SubtaskID,
    pub title: Option<String>,
    pub completed: Option<bool>,
}

#[derive(FromForm, Debug)]
pub struct SubtaskQuery {
    #[field(name = "taskId")]
    pub task_id: Option<TaskID>,
}
