use rocket::serde::json::Json;
use rocket::{delete, get, post, put, State};

use crate::api_error::{ApiError, ApiResult};
use crate::auth::session::SessionUser;
use crate::checklist;
use crate::data::{DBConnection, Deleted};

use super::data::*;
use super::helpers::*;

#[get("/notes")]
pub fn get_notes(
    user: SessionUser,
    db_connection: &State<DBConnection>,
) -> ApiResult<Json<Vec<Note>>> {
    let db_connection = db_connection.lock()?;

    get_notes_from_db(user.id, &db_connection).map(Json)
}

#[post("/notes", format = "json", data = "<request>")]
pub fn add_note(
    user: SessionUser,
    request: Json<AddNoteRequest>,
    db_connection: &State<DBConnection>,
) -> ApiResult<Json<Note>> {
    let request = request.into_inner();

    if request.title.trim().is_empty() {
        return Err(ApiError::Validation(String::from("Title required")));
    }
    if !checklist::has_unique_ids(&request.checklist) {
        return Err(ApiError::Validation(String::from(
            "Checklist item ids must be unique",
        )));
    }

    let db_connection = db_connection.lock()?;

    add_note_to_db(user.id, request, &db_connection).map(Json)
}

#[put("/notes", format = "json", data = "<request>")]
pub fn update_note(
    user: SessionUser,
    request: Json<UpdateNoteRequest>,
    db_connection: &State<DBConnection>,
) -> ApiResult<Json<Note>> {
    let request = request.into_inner();

    if request.title.trim().is_empty() {
        return Err(ApiError::Validation(String::from("Title required")));
    }
    if let Some(checklist) = &request.checklist {
        if !checklist::has_unique_ids(checklist) {
            return Err(ApiError::Validation(String::from(
                "Checklist item ids must be unique",
            )));
        }
    }

    let db_connection = db_connection.lock()?;

    update_note_in_db(user.id, request, &db_connection).map(Json)
}

#[delete("/notes?<id>")]
pub fn delete_note(
    user: SessionUser,
    id: Option<i64>,
    db_connection: &State<DBConnection>,
) -> ApiResult<Json<Deleted>> {
    let id = id.ok_or_else(|| ApiError::Validation(String::from("ID required")))?;

    let db_connection = db_connection.lock()?;

    delete_note_from_db(id, user.id, &db_connection)?;
    Ok(Json(Deleted::ok()))
}
