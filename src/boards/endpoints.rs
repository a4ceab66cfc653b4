use rocket::serde::json::Json;
use rocket::{delete, get, post, put, State};

use crate::api_error::{ApiError, ApiResult};
use crate::auth::session::SessionUser;
use crate::data::{DBConnection, Deleted};

use super::data::*;
use super::helpers::*;

#[get("/boards")]
pub fn get_boards(
    user: SessionUser,
    db_connection: &State<DBConnection>,
) -> ApiResult<Json<Vec<Board>>> {
    let db_connection = db_connection.lock()?;

    get_boards_from_db(user.id, &db_connection).map(Json)
}

#[post("/boards", format = "json", data = "<request>")]
pub fn add_board(
    user: SessionUser,
    request: Json<AddBoardRequest>,
    db_connection: &State<DBConnection>,
) -> ApiResult<Json<Board>> {
    let request = request.into_inner();

    if request.name.trim().is_empty() {
        return Err(ApiError::Validation(String::from("Name required")));
    }

    let db_connection = db_connection.lock()?;

    add_board_to_db(user.id, request, &db_connection).map(Json)
}

#[put("/boards", format = "json", data = "<request>")]
pub fn update_board(
    user: SessionUser,
    request: Json<UpdateBoardRequest>,
    db_connection: &State<DBConnection>,
) -> ApiResult<Json<Board>> {
    let request = request.into_inner();

    if request.name.trim().is_empty() {
        return Err(ApiError::Validation(String::from("Name required")));
    }

    let db_connection = db_connection.lock()?;

    update_board_in_db(user.id, request, &db_connection).map(Json)
}

#[delete("/boards?<id>")]
pub fn delete_board(
    user: SessionUser,
    id: Option<i64>,
    db_connection: &State<DBConnection>,
) -> ApiResult<Json<Deleted>> {
    let id = id.ok_or_else(|| ApiError::Validation(String::from("ID required")))?;

    let db_connection = db_connection.lock()?;

    delete_board_from_db(id, user.id, &db_connection)?;
    Ok(Json(Deleted::ok()))
}
