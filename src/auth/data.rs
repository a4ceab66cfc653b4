use serde::{Deserialize, Serialize};

pub type UserID = i64;

/// Full user row. Never serialized; the password hash stays server-side.
#[derive(Debug, Clone)]
pub struct User {
    pub id: UserID,
    pub email: String,
    pub password_hash: String,
    pub name: String,
}

/// The client-safe projection of a user returned by the auth endpoints.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct UserInfo {
    pub id: UserID,
    pub email: String,
    pub name: String,
}

impl From<User> for UserInfo {
    fn from(user: User) -> UserInfo {
        UserInfo {
            id: user.id,
            email: user.email,
            name: user.name,
        }
    }
}

// Missing fields deserialize to empty strings so the handlers report them
// as validation failures rather than parse failures.
#[derive(Deserialize, Debug, Default)]
#[serde(default)]
pub struct RegisterRequest {
    pub email: String,
    pub password: String,
    pub name: String,
}

#[derive(Deserialize, Debug, Default)]
#[serde(default)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Serialize, Debug)]
pub struct AuthResponse {
    pub user: UserInfo,
}

/// Claim carried inside the session cookie.
#[derive(Serialize, Deserialize, Debug, Clone, Copy)]
pub struct Session {
    pub user_id: UserID,
    pub expires_at: i64,
}
