// src/api/utils.rs

use actix_web::cookie::{Cookie, SameSite};
use actix_web::http::StatusCode;
use actix_web::HttpRequest;
use log::debug;
use uuid::Uuid;
use crate::core::{Config, SessionError, SessionStore};
use crate::models::PasswordGenerationOptions;

pub const SESSION_COOKIE: &str = "passcheck_session";

/// Read the session id from the request cookie, if present and well formed.
pub fn session_id_from_request(req: &HttpRequest) -> Option<Uuid> {
    let cookie = req.cookie(SESSION_COOKIE)?;
    match Uuid::parse_str(cookie.value()) {
        Ok(id) => Some(id),
        Err(_) => {
            debug!("⚠️ Ignoring malformed session cookie");
            None
        }
    }
}

/// The session a request belongs to.
pub struct ResolvedSession {
    pub id: Uuid,
    /// True when the session was created for this request, so the response
    /// has to carry the cookie
    pub fresh: bool,
}

/// Find the caller's live session, starting a new one when there is none.
pub fn resolve_session(req: &HttpRequest, store: &SessionStore) -> ResolvedSession {
    if let Some(id) = session_id_from_request(req) {
        if store.contains(&id) {
            return ResolvedSession { id, fresh: false };
        }
        debug!("Session {} is unknown or expired, starting a new one", id);
    }

    ResolvedSession { id: store.create(), fresh: true }
}

pub fn session_cookie(id: Uuid) -> Cookie<'static> {
    Cookie::build(SESSION_COOKIE, id.to_string())
        .path("/")
        .http_only(true)
        .same_site(SameSite::Strict)
        .finish()
}

pub fn removal_cookie() -> Cookie<'static> {
    let mut cookie = Cookie::build(SESSION_COOKIE, "").path("/").finish();
    cookie.make_removal();
    cookie
}

/// HTTP status for an advisory session rejection.
pub fn session_error_status(error: &SessionError) -> StatusCode {
    match error {
        SessionError::UnknownSession => StatusCode::NOT_FOUND,
        SessionError::RecentlyChecked(_)
        | SessionError::RecentlySaved
        | SessionError::NothingGenerated => StatusCode::CONFLICT,
    }
}

/// Fill unset request fields from config, clamping the length into bounds.
pub fn generation_options(
    config: &Config,
    length: Option<usize>,
    include_numbers: bool,
    include_specials: bool,
) -> PasswordGenerationOptions {
    let length = length
        .unwrap_or(config.default_password_length)
        .clamp(config.min_password_length, config.max_password_length);

    PasswordGenerationOptions { length, include_numbers, include_specials }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::test::TestRequest;
    use std::time::Duration;

    #[test]
    fn reads_valid_cookie() {
        let id = Uuid::new_v4();
        let req = TestRequest::default().cookie(session_cookie(id)).to_http_request();
        assert_eq!(session_id_from_request(&req), Some(id));
    }

    #[test]
    fn ignores_malformed_cookie() {
        let req = TestRequest::default()
            .cookie(Cookie::new(SESSION_COOKIE, "not-a-uuid"))
            .to_http_request();
        assert_eq!(session_id_from_request(&req), None);
    }

    #[test]
    fn resolve_reuses_live_session() {
        let store = SessionStore::new(Duration::from_secs(60));
        let id = store.create();
        let req = TestRequest::default().cookie(session_cookie(id)).to_http_request();

        let resolved = resolve_session(&req, &store);
        assert_eq!(resolved.id, id);
        assert!(!resolved.fresh);
    }

    #[test]
    fn resolve_replaces_unknown_session() {
        let store = SessionStore::new(Duration::from_secs(60));
        let stale = Uuid::new_v4();
        let req = TestRequest::default().cookie(session_cookie(stale)).to_http_request();

        let resolved = resolve_session(&req, &store);
        assert_ne!(resolved.id, stale);
        assert!(resolved.fresh);
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn options_are_clamped() {
        let config = Config::default();
        assert_eq!(generation_options(&config, None, false, false).length, 12);
        assert_eq!(generation_options(&config, Some(3), false, false).length, 8);
        assert_eq!(generation_options(&config, Some(64), true, true).length, 20);
    }

    #[test]
    fn advisory_errors_are_conflicts() {
        assert_eq!(session_error_status(&SessionError::RecentlySaved), StatusCode::CONFLICT);
        assert_eq!(session_error_status(&SessionError::UnknownSession), StatusCode::NOT_FOUND);
    }
}
