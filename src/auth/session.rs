use chrono::Utc;
use rocket::http::{Cookie, CookieJar, SameSite, Status};
use rocket::request::{FromRequest, Outcome};
use rocket::Request;

use crate::api_error::ApiResult;

use super::data::{Session, UserID};

pub const SESSION_COOKIE: &str = "session";

pub fn hash_password(plaintext: &str) -> ApiResult<String> {
    Ok(bcrypt::hash(plaintext, bcrypt::DEFAULT_COST)?)
}

pub fn verify_password(plaintext: &str, hash: &str) -> bool {
    bcrypt::verify(plaintext, hash).unwrap_or(false)
}

/// Serializes a session claim for the private cookie. Tamper evidence comes
/// from the cookie's encryption; the value itself is an opaque token to the
/// client.
pub fn issue_session(user_id: UserID, session_hours: i64) -> ApiResult<String> {
    let session = Session {
        user_id,
        expires_at: Utc::now().timestamp() + session_hours * 3600,
    };

    Ok(serde_json::to_string(&session)?)
}

/// Resolves a token back to a user id. Any decode failure or an expired
/// claim is "no session", never an error.
pub fn resolve_session(token: &str) -> Option<UserID> {
    let session: Session = serde_json::from_str(token).ok()?;

    if session.expires_at > Utc::now().timestamp() {
        Some(session.user_id)
    } else {
        None
    }
}

pub fn set_session_cookie(cookies: &CookieJar<'_>, token: String) {
    cookies.add_private(
        Cookie::build((SESSION_COOKIE, token))
            .http_only(true)
            .same_site(SameSite::Lax)
            .path("/"),
    );
}

pub fn clear_session_cookie(cookies: &CookieJar<'_>) {
    cookies.remove_private(Cookie::from(SESSION_COOKIE));
}

/// Request guard resolving the session cookie to a user id. Every protected
/// endpoint takes this guard, so no handler body runs without a valid
/// session; failures surface as 401 through the catcher.
#[derive(Debug, Clone, Copy)]
pub struct SessionUser {
    pub id: UserID,
}

#[rocket::async_trait]
impl<'r> FromRequest<'r> for SessionUser {
    type Error = ();

    async fn from_request(request: &'r Request<'_>) -> Outcome<Self, Self::Error> {
        let resolved = request
            .cookies()
            .get_private(SESSION_COOKIE)
            .and_then(|cookie| resolve_session(cookie.value()));

        match resolved {
            Some(id) => Outcome::Success(SessionUser { id }),
            None => Outcome::Error((Status::Unauthorized, ())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn issued_session_resolves_to_the_same_user() {
        let token = issue_session(42, 1).unwrap();
        assert_eq!(resolve_session(&token), Some(42));
    }

    #[test]
    fn expired_session_resolves_to_none() {
        let session = Session {
            user_id: 42,
            expires_at: Utc::now().timestamp() - 1,
        };
        let token = serde_json::to_string(&session).unwrap();
        assert_eq!(resolve_session(&token), None);
    }

    #[test]
    fn garbage_token_resolves_to_none() {
        assert_eq!(resolve_session("not a session"), None);
        assert_eq!(resolve_session(""), None);
    }

    #[test]
    fn password_hash_verifies_only_the_original() {
        let hash = hash_password("hunter2").unwrap();
        assert!(verify_password("hunter2", &hash));
        assert!(!verify_password("hunter3", &hash));
        assert!(!verify_password("hunter2", "not a hash"));
    }
}
