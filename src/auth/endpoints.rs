use rocket::http::CookieJar;
use rocket::serde::json::Json;
use rocket::{get, post, State};

use crate::api_error::{ApiError, ApiResult};
use crate::data::{AppConfig, DBConnection, Deleted};

use super::data::*;
use super::helpers::*;
use super::session::*;

#[post("/auth/register", format = "json", data = "<request>")]
pub fn register(
    request: Json<RegisterRequest>,
    db_connection: &State<DBConnection>,
    config: &State<AppConfig>,
    cookies: &CookieJar<'_>,
) -> ApiResult<Json<AuthResponse>> {
    let request = request.into_inner();

    if request.email.trim().is_empty()
        || request.password.is_empty()
        || request.name.trim().is_empty()
    {
        return Err(ApiError::Validation(String::from("All fields required")));
    }

    let db_connection = db_connection.lock()?;

    if find_user_by_email(&request.email, &db_connection)?.is_some() {
        return Err(ApiError::Validation(String::from("Email already exists")));
    }

    let password_hash = hash_password(&request.password)?;
    let id = add_user(&request.email, &password_hash, &request.name, &db_connection)?;

    set_session_cookie(cookies, issue_session(id, config.session_hours)?);

    Ok(Json(AuthResponse {
        user: UserInfo {
            id,
            email: request.email,
            name: request.name,
        },
    }))
}

#[post("/auth/login", format = "json", data = "<request>")]
pub fn login(
    request: Json<LoginRequest>,
    db_connection: &State<DBConnection>,
    config: &State<AppConfig>,
    cookies: &CookieJar<'_>,
) -> ApiResult<Json<AuthResponse>> {
    let request = request.into_inner();

    if request.email.trim().is_empty() || request.password.is_empty() {
        return Err(ApiError::Validation(String::from(
            "Email and password required",
        )));
    }

    let db_connection = db_connection.lock()?;

    // Unknown email and wrong password are the same failure on the wire.
    let user = match find_user_by_email(&request.email, &db_connection)? {
        Some(user) if verify_password(&request.password, &user.password_hash) => user,
        _ => return Err(ApiError::Auth(String::from("Invalid credentials"))),
    };

    set_session_cookie(cookies, issue_session(user.id, config.session_hours)?);

    Ok(Json(AuthResponse { user: user.into() }))
}

#[post("/auth/logout")]
pub fn logout(cookies: &CookieJar<'_>) -> Json<Deleted> {
    clear_session_cookie(cookies);
    Json(Deleted::ok())
}

#[get("/auth/me")]
pub fn me(
    user: SessionUser,
    db_connection: &State<DBConnection>,
) -> ApiResult<Json<AuthResponse>> {
    let db_connection = db_connection.lock()?;

    let user = find_user_by_id(user.id, &db_connection)?
        .ok_or_else(|| ApiError::Auth(String::from("Unauthorized")))?;

    Ok(Json(AuthResponse { user: user.into() }))
}
