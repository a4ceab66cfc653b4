use rusqlite::{params, Connection, OptionalExtension, Row};

use crate::api_error::{ApiError, ApiResult};
use crate::data::now_timestamp;

use super::data::*;

const BOARD_COLUMNS: &str = "id, owner_id, name, description, created_at, updated_at";

fn board_from_row(row: &Row) -> rusqlite::Result<Board> {
    Ok(Board {
        id: row.get(0)?,
        owner_id: row.get(1)?,
        name: row.get(2)?,
        description: row.get(3)?,
        created_at: row.get(4)?,
        updated_at: row.get(5)?,
    })
}

pub fn get_boards_from_db(owner_id: i64, db_connection: &Connection) -> ApiResult<Vec<Board>> {
    let mut statement = db_connection.prepare(&format!(
        "SELECT {} FROM boards WHERE owner_id = ?1 ORDER BY created_at DESC, id DESC",
        BOARD_COLUMNS
    ))?;

    let boards = statement
        .query_map(params![owner_id], board_from_row)?
        .collect::<rusqlite::Result<Vec<Board>>>()?;

    Ok(boards)
}

pub fn get_board_from_db(
    id: BoardID,
    owner_id: i64,
    db_connection: &Connection,
) -> ApiResult<Board> {
    db_connection
        .query_row(
            &format!(
                "SELECT {} FROM boards WHERE id = ?1 AND owner_id = ?2",
                BOARD_COLUMNS
            ),
            params![id, owner_id],
            board_from_row,
        )
        .optional()?
        .ok_or_else(|| ApiError::NotFound(String::from("Board not found")))
}

pub fn board_owned(id: BoardID, owner_id: i64, db_connection: &Connection) -> ApiResult<bool> {
    let found: Option<i64> = db_connection
        .query_row(
            "SELECT id FROM boards WHERE id = ?1 AND owner_id = ?2",
            params![id, owner_id],
            |row| row.get(0),
        )
        .optional()?;

    Ok(found.is_some())
}

pub fn add_board_to_db(
    owner_id: i64,
    request: AddBoardRequest,
    db_connection: &Connection,
) -> ApiResult<Board> {
    let now = now_timestamp();

    db_connection.execute(
        "INSERT INTO boards (owner_id, name, description, created_at, updated_at)
         VALUES (?1, ?2, ?3, ?4, ?5)",
        params![owner_id, request.name, request.description, now, now],
    )?;

    get_board_from_db(db_connection.last_insert_rowid(), owner_id, db_connection)
}

pub fn update_board_in_db(
    owner_id: i64,
    request: UpdateBoardRequest,
    db_connection: &Connection,
) -> ApiResult<Board> {
    let changed = db_connection.execute(
        "UPDATE boards SET name = ?1, description = ?2, updated_at = ?3
         WHERE id = ?4 AND owner_id = ?5",
        params![
            request.name,
            request.description,
            now_timestamp(),
            request.id,
            owner_id
        ],
    )?;

    if changed == 0 {
        return Err(ApiError::NotFound(String::from("Board not found")));
    }

    get_board_from_db(request.id, owner_id, db_connection)
}

/// Deletes a board and cascades to its tasks and their subtasks.
pub fn delete_board_from_db(
    id: BoardID,
    owner_id: i64,
    db_connection: &Connection,
) -> ApiResult<()> {
    if !board_owned(id, owner_id, db_connection)? {
        return Err(ApiError::NotFound(String::from("Board not found")));
    }

    // The cascade is all-or-nothing; a partial delete would orphan tasks.
    let transaction = db_connection.unchecked_transaction()?;
    transaction.execute(
        "DELETE FROM subtasks WHERE task_id IN (SELECT id FROM tasks WHERE board_id = ?1)",
        params![id],
    )?;
    transaction.execute("DELETE FROM tasks WHERE board_id = ?1", params![id])?;
    transaction.execute("DELETE FROM boards WHERE id = ?1", params![id])?;
    transaction.commit()?;

    Ok(())
}
