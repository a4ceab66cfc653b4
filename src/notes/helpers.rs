use rusqlite::{params, Connection, OptionalExtension, Row};

use crate::api_error::{ApiError, ApiResult};
use crate::checklist;
use crate::data::now_timestamp;

use super::data::*;

const NOTE_COLUMNS: &str = "id, owner_id, title, content, checklist, created_at, updated_at";

fn note_from_row(row: &Row) -> rusqlite::Result<Note> {
    let checklist: Option<String> = row.get(4)?;

    Ok(Note {
        id: row.get(0)?,
        owner_id: row.get(1)?,
        title: row.get(2)?,
        content: row.get(3)?,
        checklist: checklist::decode(checklist),
        created_at: row.get(5)?,
        updated_at: row.get(6)?,
    })
}

/// Notes list most-recently-edited first, unlike boards and tasks.
pub fn get_notes_from_db(owner_id: i64, db_connection: &Connection) -> ApiResult<Vec<Note>> {
    let mut statement = db_connection.prepare(&format!(
        "SELECT {} FROM notes WHERE owner_id = ?1 ORDER BY updated_at DESC, id DESC",
        NOTE_COLUMNS
    ))?;

    let notes = statement
        .query_map(params![owner_id], note_from_row)?
        .collect::<rusqlite::Result<Vec<Note>>>()?;

    Ok(notes)
}

pub fn get_note_from_db(id: NoteID, owner_id: i64, db_connection: &Connection) -> ApiResult<Note> {
    db_connection
        .query_row(
            &format!(
                "SELECT {} FROM notes WHERE id = ?1 AND owner_id = ?2",
                NOTE_COLUMNS
            ),
            params![id, owner_id],
            note_from_row,
        )
        .optional()?
        .ok_or_else(|| ApiError::NotFound(String::from("Note not found")))
}

pub fn add_note_to_db(
    owner_id: i64,
    request: AddNoteRequest,
    db_connection: &Connection,
) -> ApiResult<Note> {
    let now = now_timestamp();

    db_connection.execute(
        "INSERT INTO notes (owner_id, title, content, checklist, created_at, updated_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
        params![
            owner_id,
            request.title,
            request.content,
            checklist::encode(&request.checklist),
            now,
            now
        ],
    )?;

    get_note_from_db(db_connection.last_insert_rowid(), owner_id, db_connection)
}

pub fn update_note_in_db(
    owner_id: i64,
    request: UpdateNoteRequest,
    db_connection: &Connection,
) -> ApiResult<Note> {
    let existing = get_note_from_db(request.id, owner_id, db_connection)?;

    let checklist = request.checklist.unwrap_or(existing.checklist);

    db_connection.execute(
        "UPDATE notes SET title = ?1, content = ?2, checklist = ?3, updated_at = ?4
         WHERE id = ?5 AND owner_id = ?6",
        params![
            request.title,
            request.content,
            checklist::encode(&checklist),
            now_timestamp(),
            request.id,
            owner_id
        ],
    )?;

    get_note_from_db(request.id, owner_id, db_connection)
}

pub fn delete_note_from_db(
    id: NoteID,
    owner_id: i64,
    db_connection: &Connection,
) -> ApiResult<()> {
    let changed = db_connection.execute(
        "DELETE FROM notes WHERE id = ?1 AND owner_id = ?2",
        params![id, owner_id],
    )?;

    if changed == 0 {
        return Err(ApiError::NotFound(String::from("Note not found")));
    }

    Ok(())
}
