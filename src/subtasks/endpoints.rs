use rocket::serde::json::Json;
use rocket::{delete, get, post, put, State};

use crate::api_error::{ApiError, ApiResult};
use crate::auth::session::SessionUser;
use crate::data::{DBConnection, Deleted};

use super::data::*;
use super::helpers::*;

#[get("/subtasks?<query..>")]
pub fn get_subtasks(
    user: SessionUser,
    query: SubtaskQuery,
    db_connection: &State<DBConnection>,
) -> ApiResult<Json<Vec<Subtask>>> {
    let task_id = query
        .task_id
        .ok_or_else(|| ApiError::Validation(String::from("taskId required")))?;

    let db_connection = db_connection.lock()?;

    get_subtasks_from_db(task_id, user.id, &db_connection).map(Json)
}

#[post("/subtasks", format = "json", data = "<request>")]
pub fn add_subtask(
    user: SessionUser,
    request: Json<AddSubtaskRequest>,
    db_connection: &State<DBConnection>,
) -> ApiResult<Json<Subtask>> {
    let request = request.into_inner();

    if request.title.trim().is_empty() {
        return Err(ApiError::Validation(String::from("Title required")));
    }

    let db_connection = db_connection.lock()?;

    add_subtask_to_db(user.id, request, &db_connection).map(Json)
}

#[put("/subtasks", format = "json", data = "<request>")]
pub fn update_subtask(
    user: SessionUser,
    request: Json<UpdateSubtaskRequest>,
    db_connection: &State<DBConnection>,
) -> ApiResult<Json<Subtask>> {
    let request = request.into_inner();

    if let Some(title) = &request.title {
        if title.trim().is_empty() {
            return Err(ApiError::Validation(String::from("Title required")));
        }
    }

    let db_connection = db_connection.lock()?;

    update_subtask_in_db(user.id, request, &db_connection).map(Json)
}

#[delete("/subtasks?<id>")]
pub fn delete_subtask(
    user: SessionUser,
    id: Option<i64>,
    db_connection: &State<DBConnection>,
) -> ApiResult<Json<Deleted>> {
    let id = id.ok_or_else(|| ApiError::Validation(String::from("id required")))?;

    let db_connection = db_connection.lock()?;

    delete_subtask_from_db(id, user.id, &db_connection)?;
    Ok(Json(Deleted::ok()))
}
