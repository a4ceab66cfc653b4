use rusqlite::{params, Connection, OptionalExtension, Row};

use crate::api_error::{ApiError, ApiResult};
use crate::data::now_timestamp;
use crate::tasks::data::TaskID;
use crate::tasks::helpers::task_owned;

use super::data::*;

fn subtask_from_row(row: &Row) -> rusqlite::Result<Subtask> {
    Ok(Subtask {
        id: row.get(0)?,
        task_id: row.get(1)?,
        title: row.get(2)?,
        completed: row.get(3)?,
        created_at: row.get(4)?,
        updated_at: row.get(5)?,
    })
}

/// Lists the subtasks of one task, oldest first. The join enforces the
/// two-level ownership check; a foreign task id simply lists nothing.
pub fn get_subtasks_from_db(
    task_id: TaskID,
    owner_id: i64,
    db_connection: &Connection,
) -> ApiResult<Vec<Subtask>> {
    let mut statement = db_connection.prepare(
        "SELECT s.id, s.task_id, s.title, s.completed, s.created_at, s.updated_at
         FROM subtasks s JOIN tasks t ON s.task_id = t.id
         WHERE s.task_id = ?1 AND t.owner_id = ?2
         ORDER BY s.created_at ASC, s.id ASC",
    )?;

    let subtasks = statement
        .query_map(params![task_id, owner_id], subtask_from_row)?
        .collect::<rusqlite::Result<Vec<Subtask>>>()?;

    Ok(subtasks)
}

fn get_subtask_from_db(
    id: SubtaskID,
    owner_id: i64,
    db_connection: &Connection,
) -> ApiResult<Subtask> {
    db_connection
        .query_row(
            "SELECT s.id, s.task_id, s.title, s.completed, s.created_at, s.updated_at
             FROM subtasks s JOIN tasks t ON s.task_id = t.id
             WHERE s.id = ?1 AND t.owner_id = ?2",
            params![id, owner_id],
            subtask_from_row,
        )
        .optional()?
        .ok_or_else(|| ApiError::NotFound(String::from("Subtask not found")))
}

pub fn add_subtask_to_db(
    owner_id: i64,
    request: AddSubtaskRequest,
    db_connection: &Connection,
) -> ApiResult<Subtask> {
    if !task_owned(request.task_id, owner_id, db_connection)? {
        return Err(ApiError::NotFound(String::from("Task not found")));
    }

    let now = now_timestamp();

    db_connection.execute(
        "INSERT INTO subtasks (task_id, title, completed, created_at, updated_at)
         VALUES (?1, ?2, 0, ?3, ?4)",
        params![request.task_id, request.title, now, now],
    )?;

    get_subtask_from_db(db_connection.last_insert_rowid(), owner_id, db_connection)
}

pub fn update_subtask_in_db(
    owner_id: i64,
    request: UpdateSubtaskRequest,
    db_connection: &Connection,
) -> ApiResult<Subtask> {
    let existing = get_subtask_from_db(request.id, owner_id, db_connection)?;

    let title = request.title.unwrap_or(existing.title);
    let completed = request.completed.unwrap_or(existing.completed);

    db_connection.execute(
        "UPDATE subtasks SET title = ?1, completed = ?2, updated_at = ?3 WHERE id = ?4",
        params![title, completed, now_timestamp(), request.id],
    )?;

    get_subtask_from_db(request.id, owner_id, db_connection)
}

pub fn delete_subtask_from_db(
    id: SubtaskID,
    owner_id: i64,
    db_connection: &Connection,
) -> ApiResult<()> {
    get_subtask_from_db(id, owner_id, db_connection)?;

    db_connection.execute("DELETE FROM subtasks WHERE id = ?1", params![id])?;

    Ok(())
}
