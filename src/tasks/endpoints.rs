use rocket::serde::json::Json;
use rocket::{delete, get, post, put, State};

use crate::api_error::{ApiError, ApiResult};
use crate::auth::session::SessionUser;
use crate::checklist;
use crate::data::{DBConnection, Deleted};

use super::data::*;
use super::helpers::*;

#[get("/tasks")]
pub fn get_tasks(
    user: SessionUser,
    db_connection: &State<DBConnection>,
) -> ApiResult<Json<Vec<Task>>> {
    let db_connection = db_connection.lock()?;

    get_tasks_from_db(user.id, &db_connection).map(Json)
}

#[post("/tasks", format = "json", data = "<request>")]
pub fn add_task(
    user: SessionUser,
    request: Json<AddTaskRequest>,
    db_connection: &State<DBConnection>,
) -> ApiResult<Json<Task>> {
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

    add_task_to_db(user.id, request, &db_connection).map(Json)
}

#[put("/tasks", format = "json", data = "<request>")]
pub fn update_task(
    user: SessionUser,
    request: Json<UpdateTaskRequest>,
    db_connection: &State<DBConnection>,
) -> ApiResult<Json<Task>> {
    let request = request.into_inner();

    if let Some(title) = &request.title {
        if title.trim().is_empty() {
            return Err(ApiError::Validation(String::from("Title required")));
        }
    }
    if let Some(checklist) = &request.checklist {
        if !checklist::has_unique_ids(checklist) {
            return Err(ApiError::Validation(String::from(
                "Checklist item ids must be unique",
            )));
        }
    }

    let db_connection = db_connection.lock()?;

    update_task_in_db(user.id, request, &db_connection).map(Json)
}

#[delete("/tasks?<id>")]
pub fn delete_task(
    user: SessionUser,
    id: Option<i64>,
    db_connection: &State<DBConnection>,
) -> ApiResult<Json<Deleted>> {
    let id = id.ok_or_else(|| ApiError::Validation(String::from("ID required")))?;

    let db_connection = db_connection.lock()?;

    delete_task_from_db(id, user.id, &db_connection)?;
    Ok(Json(Deleted::ok()))
}
