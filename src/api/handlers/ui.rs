// src/api/handlers/ui.rs
//! HTML pages. Each handler resolves the caller's session, applies the
//! action, and renders the matching view.

use actix_web::http::header;
use actix_web::{web, HttpRequest, HttpResponse};
use log::{debug, info};
use crate::api::AppState;
use crate::api::types::{CheckForm, GenerateForm, ViewQuery};
use crate::api::utils::{generation_options, removal_cookie, resolve_session, session_cookie, session_id_from_request, ResolvedSession};
use crate::core::{SessionError, SessionState};
use crate::models::{StrengthResult, View};
use crate::ui::{self, GenerateViewModel, Notice};

fn html_response(session: &ResolvedSession, page: String) -> HttpResponse {
    let mut builder = HttpResponse::Ok();
    builder.content_type("text/html; charset=utf-8");
    if session.fresh {
        builder.cookie(session_cookie(session.id));
    }
    builder.body(page)
}

fn generate_page(
    state: &AppState,
    session: &SessionState,
    generated: Option<&str>,
    notice: Option<&Notice>,
) -> String {
    let default_options = generation_options(&state.config, None, false, false);
    let options = session.last_options().unwrap_or(&default_options);

    let body = ui::generate_view(&GenerateViewModel {
        options,
        min_length: state.config.min_password_length,
        max_length: state.config.max_password_length,
        generated,
        history: session.history(),
    });

    ui::render_page(View::Generate, notice, &body)
}

// Log line for a check. Carries the length only, never any password text.
fn check_summary(password: &str, result: &StrengthResult) -> String {
    format!(
        "🔍 Checked a {}-character password → score {}",
        password.chars().count(),
        result.display_score()
    )
}

fn session_lost() -> HttpResponse {
    // Only reachable if the session was swept between resolve and use
    HttpResponse::SeeOther()
        .insert_header((header::LOCATION, "/"))
        .finish()
}

/// GET /: render the selected view.
pub async fn index(
    req: HttpRequest,
    state: web::Data<AppState>,
    query: web::Query<ViewQuery>,
) -> HttpResponse {
    let view = query
        .view
        .as_deref()
        .and_then(View::from_slug)
        .unwrap_or_default();
    let session = resolve_session(&req, &state.sessions);

    let page = state.sessions.with_session(&session.id, |s| match view {
        View::Check => ui::render_page(View::Check, None, &ui::check_view(None)),
        View::Generate => generate_page(&state, s, None, None),
        View::Saved => ui::render_page(View::Saved, None, &ui::saved_view(s.saved())),
    });

    match page {
        Some(page) => html_response(&session, page),
        None => session_lost(),
    }
}

/// POST /check: score a password and record it in the session history.
pub async fn check(
    req: HttpRequest,
    state: web::Data<AppState>,
    form: web::Form<CheckForm>,
) -> HttpResponse {
    let session = resolve_session(&req, &state.sessions);
    let policy = state.config.history;

    let outcome = state
        .sessions
        .with_session(&session.id, |s| s.check(&form.password, &policy));

    let page = match outcome {
        Some(Ok(result)) => {
            if let Some(result) = &result {
                debug!("{}", check_summary(&form.password, result));
            }
            ui::render_page(View::Check, None, &ui::check_view(result.as_ref()))
        }
        Some(Err(e)) => {
            let notice = Notice::Error(e.to_string());
            ui::render_page(View::Check, Some(&notice), &ui::check_view(None))
        }
        None => return session_lost(),
    };

    html_response(&session, page)
}

/// POST /generate: generate a password into the session.
pub async fn generate(
    req: HttpRequest,
    state: web::Data<AppState>,
    form: web::Form<GenerateForm>,
) -> HttpResponse {
    let session = resolve_session(&req, &state.sessions);
    let options = generation_options(
        &state.config,
        form.length,
        form.include_numbers,
        form.include_specials,
    );

    let page = state.sessions.with_session(&session.id, |s| {
        let password = s.generate(&state.generator, &options, &state.config.history);
        debug!("🔑 Generated a {}-character password", options.length);
        generate_page(&state, s, Some(&password), None)
    });

    match page {
        Some(page) => html_response(&session, page),
        None => session_lost(),
    }
}

/// POST /save: save the last generated password.
pub async fn save(req: HttpRequest, state: web::Data<AppState>) -> HttpResponse {
    let session = resolve_session(&req, &state.sessions);
    let policy = state.config.history;

    let page = state.sessions.with_session(&session.id, |s| {
        let notice = match s.save_generated(&policy) {
            Ok(_) => Notice::Success("✅ Password saved successfully!".to_string()),
            Err(e @ SessionError::NothingGenerated) => Notice::Info(e.to_string()),
            Err(e) => Notice::Error(e.to_string()),
        };
        generate_page(&state, s, None, Some(&notice))
    });

    match page {
        Some(page) => html_response(&session, page),
        None => session_lost(),
    }
}

/// POST /session/end: forget everything and start over.
pub async fn end_session(req: HttpRequest, state: web::Data<AppState>) -> HttpResponse {
    if let Some(id) = session_id_from_request(&req) {
        if state.sessions.remove(&id) {
            info!("👋 Session ended by user");
        }
    }

    HttpResponse::SeeOther()
        .insert_header((header::LOCATION, "/"))
        .cookie(removal_cookie())
        .finish()
}

#[cfg(test)]
mod tests {
    use actix_web::cookie::Cookie;
    use actix_web::http::StatusCode;
    use actix_web::{test, web, App};
    use crate::api::{routes, AppState};
    use crate::api::utils::SESSION_COOKIE;
    use crate::core::Config;
    use crate::strength::analyze_password_strength;

    fn state() -> web::Data<AppState> {
        web::Data::new(AppState::new(Config::default()))
    }

    fn session_cookie_of<B>(resp: &actix_web::dev::ServiceResponse<B>) -> Option<Cookie<'static>> {
        resp.response()
            .cookies()
            .find(|c| c.name() == SESSION_COOKIE)
            .map(|c| c.into_owned())
    }

    async fn body_string<B: actix_web::body::MessageBody>(resp: actix_web::dev::ServiceResponse<B>) -> String {
        String::from_utf8(test::read_body(resp).await.to_vec()).unwrap()
    }

    #[::core::prelude::v1::test]
    fn check_summary_omits_password_text() {
        let password = "Zq9!secretX";
        let summary = super::check_summary(password, &analyze_password_strength(password));
        assert_eq!(summary, "🔍 Checked a 11-character password → score 5");
        assert!(!summary.contains('Z'));
        assert!(!summary.contains('X'));
    }

    #[actix_web::test]
    async fn index_starts_a_session() {
        let data = state();
        let app = test::init_service(
            App::new().app_data(data.clone()).configure(routes::configure_routes),
        )
        .await;

        let resp = test::call_service(&app, test::TestRequest::get().uri("/").to_request()).await;
        assert_eq!(resp.status(), StatusCode::OK);
        assert!(session_cookie_of(&resp).is_some());
        let body = body_string(resp).await;
        assert!(body.contains("Check Your Password Strength"));
        assert_eq!(data.sessions.len(), 1);
    }

    #[actix_web::test]
    async fn unknown_view_falls_back_to_check() {
        let app = test::init_service(
            App::new().app_data(state()).configure(routes::configure_routes),
        )
        .await;

        let req = test::TestRequest::get().uri("/?view=bogus").to_request();
        let body = body_string(test::call_service(&app, req).await).await;
        assert!(body.contains("Check Your Password Strength"));
    }

    #[actix_web::test]
    async fn repeated_check_is_rejected() {
        let app = test::init_service(
            App::new().app_data(state()).configure(routes::configure_routes),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/check")
            .set_form([("password", "Abc12345!")])
            .to_request();
        let resp = test::call_service(&app, req).await;
        let cookie = session_cookie_of(&resp).unwrap();
        let body = body_string(resp).await;
        assert!(body.contains("Very Strong 💪"));

        let req = test::TestRequest::post()
            .uri("/check")
            .cookie(cookie)
            .set_form([("password", "Abc12345!")])
            .to_request();
        let body = body_string(test::call_service(&app, req).await).await;
        assert!(body.contains("You cannot use the same password from your last 10 password history!"));
        assert!(!body.contains("<progress"));
    }

    #[actix_web::test]
    async fn generate_then_save_twice() {
        let app = test::init_service(
            App::new().app_data(state()).configure(routes::configure_routes),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/generate")
            .set_form([("length", "16"), ("include_numbers", "true")])
            .to_request();
        let resp = test::call_service(&app, req).await;
        let cookie = session_cookie_of(&resp).unwrap();
        let body = body_string(resp).await;
        assert!(body.contains("Your Secure Password"));
        assert!(body.contains("Password History"));
        assert!(body.contains("value=\"16\""));

        let save = || {
            test::TestRequest::post()
                .uri("/save")
                .cookie(cookie.clone())
                .to_request()
        };
        let body = body_string(test::call_service(&app, save()).await).await;
        assert!(body.contains("Password saved successfully!"));

        let body = body_string(test::call_service(&app, save()).await).await;
        assert!(body.contains("This password has been used recently!"));

        let req = test::TestRequest::get()
            .uri("/?view=saved")
            .cookie(cookie.clone())
            .to_request();
        let body = body_string(test::call_service(&app, req).await).await;
        assert!(body.contains("<code>1. "));
        assert!(!body.contains("<code>2. "));
    }

    #[actix_web::test]
    async fn save_before_generate() {
        let app = test::init_service(
            App::new().app_data(state()).configure(routes::configure_routes),
        )
        .await;

        let req = test::TestRequest::post().uri("/save").to_request();
        let body = body_string(test::call_service(&app, req).await).await;
        assert!(body.contains("<div class=\"notice info\">⚠️ No password generated yet!</div>"));
    }

    #[actix_web::test]
    async fn end_session_clears_state() {
        let data = state();
        let app = test::init_service(
            App::new().app_data(data.clone()).configure(routes::configure_routes),
        )
        .await;

        let resp = test::call_service(&app, test::TestRequest::get().uri("/").to_request()).await;
        let cookie = session_cookie_of(&resp).unwrap();

        let req = test::TestRequest::post()
            .uri("/session/end")
            .cookie(cookie)
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::SEE_OTHER);
        assert!(data.sessions.is_empty());
    }
}
