use rusqlite::{params, Connection, OptionalExtension, Row};

use crate::api_error::ApiResult;

use super::data::{User, UserID};

fn user_from_row(row: &Row) -> rusqlite::Result<User> {
    Ok(User {
        id: row.get(0)?,
        email: row.get(1)?,
        password_hash: row.get(2)?,
        name: row.get(3)?,
    })
}

pub fn find_user_by_email(email: &str, db_connection: &Connection) -> ApiResult<Option<User>> {
    let user = db_connection
        .query_row(
            "SELECT id, email, password_hash, name FROM users WHERE email = ?1",
            params![email],
            user_from_row,
        )
        .optional()?;

    Ok(user)
}

pub fn find_user_by_id(id: UserID, db_connection: &Connection) -> ApiResult<Option<User>> {
    let user = db_connection
        .query_row(
            "SELECT id, email, password_hash, name FROM users WHERE id = ?1",
            params![id],
            user_from_row,
        )
        .optional()?;

    Ok(user)
}

pub fn add_user(
    email: &str,
    password_hash: &str,
    name: &str,
    db_connection: &Connection,
) -> ApiResult<UserID> {
    db_connection.execute(
        "INSERT INTO users (email, password_hash, name) VALUES (?1, ?2, ?3)",
        params![email, password_hash, name],
    )?;

    Ok(db_connection.last_insert_rowid())
}
