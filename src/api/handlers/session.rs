// src/api/handlers/session.rs

use actix_web::http::StatusCode;
use actix_web::{web, HttpRequest, HttpResponse, HttpResponseBuilder};
use log::info;
use crate::api::AppState;
use crate::api::handlers::generator::validate_length;
use crate::api::types::{
    PasswordGenerationRequest, PasswordGenerationResponse, SaveResponse,
    SessionResponse, StrengthRequest, StrengthResponse, SuccessResponse,
};
use crate::api::utils::{
    generation_options, removal_cookie, resolve_session, session_cookie,
    session_error_status, session_id_from_request, ResolvedSession,
};
use crate::core::SessionError;

// Response builder for `status` that also hands out the cookie of a new session
fn respond(session: &ResolvedSession, status: StatusCode) -> HttpResponseBuilder {
    let mut builder = HttpResponse::build(status);
    if session.fresh {
        builder.cookie(session_cookie(session.id));
    }
    builder
}

/// Get session state
///
/// Returns the caller's history, saved list and last generated password.
#[utoipa::path(
    get,
    path = "/api/session",
    tag = "Session",
    responses(
        (status = 200, description = "Session state", body = SessionResponse)
    )
)]
pub async fn get_session(req: HttpRequest, state: web::Data<AppState>) -> HttpResponse {
    let session = resolve_session(&req, &state.sessions);

    let snapshot = state.sessions.with_session(&session.id, |s| SessionResponse {
        success: true,
        history: s.history().to_vec(),
        saved: s.saved().to_vec(),
        last_generated: s.last_generated().map(String::from),
        error: None,
    });

    match snapshot {
        Some(body) => respond(&session, StatusCode::OK).json(body),
        None => unknown_session(),
    }
}

fn unknown_session() -> HttpResponse {
    let e = SessionError::UnknownSession;
    HttpResponse::build(session_error_status(&e)).json(SuccessResponse {
        success: false,
        message: None,
        error: Some(e.to_string()),
    })
}

/// Check a password within the session
///
/// Like `/api/strength`, but records the password in the session history and
/// rejects passwords checked recently.
#[utoipa::path(
    post,
    path = "/api/session/check",
    tag = "Session",
    request_body = StrengthRequest,
    responses(
        (status = 200, description = "Password analysis result", body = StrengthResponse),
        (status = 400, description = "Empty password", body = StrengthResponse),
        (status = 409, description = "Password used recently", body = StrengthResponse)
    )
)]
pub async fn check_password(
    req: HttpRequest,
    state: web::Data<AppState>,
    check_req: web::Json<StrengthRequest>,
) -> HttpResponse {
    let session = resolve_session(&req, &state.sessions);

    if check_req.password.is_empty() {
        return respond(&session, StatusCode::BAD_REQUEST)
            .json(StrengthResponse::failure("Password must not be empty".to_string()));
    }

    let policy = state.config.history;
    let outcome = state
        .sessions
        .with_session(&session.id, |s| s.check(&check_req.password, &policy));

    match outcome {
        Some(Ok(Some(result))) => {
            respond(&session, StatusCode::OK).json(StrengthResponse::from_result(&result))
        }
        Some(Ok(None)) | None => unknown_session(),
        Some(Err(e)) => respond(&session, session_error_status(&e))
            .json(StrengthResponse::failure(e.to_string())),
    }
}

/// Generate a password within the session
///
/// Stores the password as the session's last generated password and in its
/// history.
#[utoipa::path(
    post,
    path = "/api/session/generate",
    operation_id = "session_generate_password",
    tag = "Session",
    request_body = PasswordGenerationRequest,
    responses(
        (status = 200, description = "Generated password", body = PasswordGenerationResponse),
        (status = 400, description = "Length out of bounds", body = PasswordGenerationResponse)
    )
)]
pub async fn generate_password(
    req: HttpRequest,
    state: web::Data<AppState>,
    generation_req: web::Json<PasswordGenerationRequest>,
) -> HttpResponse {
    let session = resolve_session(&req, &state.sessions);

    if let Err(e) = validate_length(&state, generation_req.length) {
        return respond(&session, StatusCode::BAD_REQUEST).json(PasswordGenerationResponse {
            success: false,
            password: None,
            strength: None,
            error: Some(e),
        });
    }

    let options = generation_options(
        &state.config,
        generation_req.length,
        generation_req.include_numbers.unwrap_or(false),
        generation_req.include_specials.unwrap_or(false),
    );

    let password = state
        .sessions
        .with_session(&session.id, |s| s.generate(&state.generator, &options, &state.config.history));

    match password {
        Some(password) => {
            let strength = crate::strength::analyze_password_strength(&password).display_score();
            respond(&session, StatusCode::OK).json(PasswordGenerationResponse {
                success: true,
                password: Some(password),
                strength: Some(strength),
                error: None,
            })
        }
        None => unknown_session(),
    }
}

/// Save the last generated password
#[utoipa::path(
    post,
    path = "/api/session/save",
    tag = "Session",
    responses(
        (status = 200, description = "Password saved", body = SaveResponse),
        (status = 409, description = "Nothing generated, or saved recently", body = SaveResponse)
    )
)]
pub async fn save_password(req: HttpRequest, state: web::Data<AppState>) -> HttpResponse {
    let session = resolve_session(&req, &state.sessions);
    let policy = state.config.history;

    let outcome = state
        .sessions
        .with_session(&session.id, |s| (s.save_generated(&policy), s.saved().len()));

    match outcome {
        Some((Ok(password), saved_count)) => {
            respond(&session, StatusCode::OK).json(SaveResponse {
                success: true,
                password: Some(password),
                saved_count,
                error: None,
            })
        }
        Some((Err(e), saved_count)) => respond(&session, session_error_status(&e)).json(SaveResponse {
            success: false,
            password: None,
            saved_count,
            error: Some(e.to_string()),
        }),
        None => unknown_session(),
    }
}

/// End the session
///
/// Discards the caller's history and saved passwords.
#[utoipa::path(
    delete,
    path = "/api/session",
    tag = "Session",
    responses(
        (status = 200, description = "Session ended", body = SuccessResponse),
        (status = 404, description = "No such session", body = SuccessResponse)
    )
)]
pub async fn end_session(req: HttpRequest, state: web::Data<AppState>) -> HttpResponse {
    let removed = session_id_from_request(&req)
        .map(|id| state.sessions.remove(&id))
        .unwrap_or(false);

    if !removed {
        return unknown_session();
    }

    info!("👋 Session ended via API");
    HttpResponse::Ok().cookie(removal_cookie()).json(SuccessResponse {
        success: true,
        message: Some("Session ended".to_string()),
        error: None,
    })
}
