use rusqlite::{params, Connection, OptionalExtension, Row};

use crate::api_error::{ApiError, ApiResult};
use crate::boards::helpers::board_owned;
use crate::checklist;
use crate::data::now_timestamp;

use super::data::*;

const TASK_COLUMNS: &str =
    "id, board_id, owner_id, title, description, priority, \"column\", checklist, \
     created_at, updated_at";

fn invalid_column_value(index: usize, what: String) -> rusqlite::Error {
    rusqlite::Error::FromSqlConversionFailure(index, rusqlite::types::Type::Text, what.into())
}

fn task_from_row(row: &Row) -> rusqlite::Result<Task> {
    let priority: String = row.get(5)?;
    let column: String = row.get(6)?;
    let checklist: Option<String> = row.get(7)?;

    Ok(Task {
        id: row.get(0)?,
        board_id: row.get(1)?,
        owner_id: row.get(2)?,
        title: row.get(3)?,
        description: row.get(4)?,
        // Rows are only ever written through the enums; anything else in
        // these columns is row corruption and must not be passed off as a
        // real value.
        priority: Priority::parse(&priority)
            .ok_or_else(|| invalid_column_value(5, format!("invalid priority: {}", priority)))?,
        column: Column::parse(&column)
            .ok_or_else(|| invalid_column_value(6, format!("invalid column: {}", column)))?,
        checklist: checklist::decode(checklist),
        created_at: row.get(8)?,
        updated_at: row.get(9)?,
    })
}

pub fn get_tasks_from_db(owner_id: i64, db_connection: &Connection) -> ApiResult<Vec<Task>> {
    let mut statement = db_connection.prepare(&format!(
        "SELECT {} FROM tasks WHERE owner_id = ?1 ORDER BY created_at DESC, id DESC",
        TASK_COLUMNS
    ))?;

    let tasks = statement
        .query_map(params![owner_id], task_from_row)?
        .collect::<rusqlite::Result<Vec<Task>>>()?;

    Ok(tasks)
}

pub fn get_task_from_db(id: TaskID, owner_id: i64, db_connection: &Connection) -> ApiResult<Task> {
    db_connection
        .query_row(
            &format!(
                "SELECT {} FROM tasks WHERE id = ?1 AND owner_id = ?2",
                TASK_COLUMNS
            ),
            params![id, owner_id],
            task_from_row,
        )
        .optional()?
        .ok_or_else(|| ApiError::NotFound(String::from("Task not found")))
}

pub fn task_owned(id: TaskID, owner_id: i64, db_connection: &Connection) -> ApiResult<bool> {
    let found: Option<i64> = db_connection
        .query_row(
            "SELECT id FROM tasks WHERE id = ?1 AND owner_id = ?2",
            params![id, owner_id],
            |row| row.get(0),
        )
        .optional()?;

    Ok(found.is_some())
}

/// New tasks always start in the todo column. The target board must belong
/// to the same owner.
pub fn add_task_to_db(
    owner_id: i64,
    request: AddTaskRequest,
    db_connection: &Connection,
) -> ApiResult<Task> {
    if !board_owned(request.board_id, owner_id, db_connection)? {
        return Err(ApiError::NotFound(String::from("Board not found")));
    }

    let now = now_timestamp();

    db_connection.execute(
        "INSERT INTO tasks (board_id, owner_id, title, description, priority, \"column\", \
         checklist, created_at, updated_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)",
        params![
            request.board_id,
            owner_id,
            request.title,
            request.description,
            request.priority.as_str(),
            Column::Todo.as_str(),
            checklist::encode(&request.checklist),
            now,
            now
        ],
    )?;

    get_task_from_db(db_connection.last_insert_rowid(), owner_id, db_connection)
}

/// Merges the provided fields over the stored row and refreshes
/// `updated_at`. Moving the task to another board re-verifies ownership of
/// the target.
pub fn update_task_in_db(
    owner_id: i64,
    request: UpdateTaskRequest,
    db_connection: &Connection,
) -> ApiResult<Task> {
    let existing = get_task_from_db(request.id, owner_id, db_connection)?;

    let board_id = request.board_id.unwrap_or(existing.board_id);
    if board_id != existing.board_id && !board_owned(board_id, owner_id, db_connection)? {
        return Err(ApiError::NotFound(String::from("Board not found")));
    }

    let title = request.title.unwrap_or(existing.title);
    let description = request.description.unwrap_or(existing.description);
    let priority = request.priority.unwrap_or(existing.priority);
    let column = request.column.unwrap_or(existing.column);
    let checklist = request.checklist.unwrap_or(existing.checklist);

    db_connection.execute(
        "UPDATE tasks SET board_id = ?1, title = ?2, description = ?3, priority = ?4, \
         \"column\" = ?5, checklist = ?6, updated_at = ?7
         WHERE id = ?8 AND owner_id = ?9",
        params![
            board_id,
            title,
            description,
            priority.as_str(),
            column.as_str(),
            checklist::encode(&checklist),
            now_timestamp(),
            request.id,
            owner_id
        ],
    )?;

    get_task_from_db(request.id, owner_id, db_connection)
}

/// Deletes a task and cascades to its subtasks.
pub fn delete_task_from_db(
    id: TaskID,
    owner_id: i64,
    db_connection: &Connection,
) -> ApiResult<()> {
    if !task_owned(id, owner_id, db_connection)? {
        return Err(ApiError::NotFound(String::from("Task not found")));
    }

    let transaction = db_connection.unchecked_transaction()?;
    transaction.execute("DELETE FROM subtasks WHERE task_id = ?1", params![id])?;
    transaction.execute("DELETE FROM tasks WHERE id = ?1", params![id])?;
    transaction.commit()?;

    Ok(())
}
