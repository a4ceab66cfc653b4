use rocket::http::{ContentType, Status};
use rocket::response::{self, Responder, Response};
use rocket::{catch, Request};

use std::error::Error;
use std::fmt;
use std::io::Cursor;
use std::sync::PoisonError;

/// Error taxonomy shared by every endpoint. Each variant maps to one HTTP
/// status and an `{"error": ...}` body; internal detail never reaches the
/// client.
#[derive(Debug)]
pub enum ApiError {
    /// Missing or malformed input (400).
    Validation(String),
    /// Missing or invalid session (401).
    Auth(String),
    /// Record absent or not owned by the session user (404). The two cases
    /// are deliberately indistinguishable so existence is not leaked.
    NotFound(String),
    /// Anything unexpected (500). The message is logged server-side only.
    Internal(String),
}

impl ApiError {
    pub fn status(&self) -> Status {
        match self {
            ApiError::Validation(_) => Status::BadRequest,
            ApiError::Auth(_) => Status::Unauthorized,
            ApiError::NotFound(_) => Status::NotFound,
            ApiError::Internal(_) => Status::InternalServerError,
        }
    }

    fn client_message(&self) -> &str {
        match self {
            ApiError::Validation(what) => what,
            ApiError::Auth(what) => what,
            ApiError::NotFound(what) => what,
            ApiError::Internal(_) => "Internal server error",
        }
    }
}

impl Error for ApiError {}
impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ApiError::Validation(what) => write!(f, "validation error: {}", what),
            ApiError::Auth(what) => write!(f, "auth error: {}", what),
            ApiError::NotFound(what) => write!(f, "not found: {}", what),
            ApiError::Internal(what) => write!(f, "internal error: {}", what),
        }
    }
}

impl<T> From<PoisonError<T>> for ApiError {
    fn from(e: PoisonError<T>) -> ApiError {
        ApiError::Internal(e.to_string())
    }
}

impl From<rusqlite::Error> for ApiError {
    fn from(e: rusqlite::Error) -> ApiError {
        match e {
            rusqlite::Error::QueryReturnedNoRows => {
                ApiError::NotFound(String::from("Not found"))
            }
            other => ApiError::Internal(other.to_string()),
        }
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(e: serde_json::Error) -> ApiError {
        ApiError::Internal(e.to_string())
    }
}

impl From<bcrypt::BcryptError> for ApiError {
    fn from(e: bcrypt::BcryptError) -> ApiError {
        ApiError::Internal(e.to_string())
    }
}

impl<'r> Responder<'r, 'static> for ApiError {
    fn respond_to(self, _request: &'r Request<'_>) -> response::Result<'static> {
        if let ApiError::Internal(what) = &self {
            eprintln!("internal error: {}", what);
        }

        let body = serde_json::json!({ "error": self.client_message() }).to_string();
        Response::build()
            .status(self.status())
            .header(ContentType::JSON)
            .sized_body(body.len(), Cursor::new(body))
            .ok()
    }
}

pub type ApiResult<T> = Result<T, ApiError>;

// Catchers shape every error Rocket produces on its own (failed guards,
// unparseable bodies, unknown routes) into the same `{"error": ...}` body
// the handlers return.

#[catch(400)]
pub fn bad_request() -> ApiError {
    ApiError::Validation(String::from("Bad request"))
}

#[catch(401)]
pub fn unauthorized() -> ApiError {
    ApiError::Auth(String::from("Unauthorized"))
}

#[catch(404)]
pub fn not_found() -> ApiError {
    ApiError::NotFound(String::from("Not found"))
}

#[catch(422)]
pub fn unprocessable_entity() -> ApiError {
    ApiError::Validation(String::from("Malformed request body"))
}

#[catch(500)]
pub fn internal_server_error() -> ApiError {
    ApiError::Internal(String::from("unhandled error"))
}
