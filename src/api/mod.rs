// src/api/mod.rs
use actix_web::{web, App, HttpServer};
use actix_web::middleware::Logger;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;
use utoipa_redoc::{Redoc, Servable};
use crate::core::{Config, SessionStore};
use crate::generators::PasswordGenerator;

/// State shared by every request handler.
pub struct AppState {
    pub config: Config,
    pub sessions: SessionStore,
    pub generator: PasswordGenerator,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        let sessions = SessionStore::new(config.session_idle_timeout);
        Self {
            config,
            sessions,
            generator: PasswordGenerator::new(),
        }
    }
}

// This will hold our API documentation
#[derive(OpenApi)]
#[openapi(
    paths(
        // Stateless endpoints
        crate::api::handlers::generator::generate_password,
        crate::api::handlers::generator::analyze_password,

        // Session endpoints
        crate::api::handlers::session::get_session,
        crate::api::handlers::session::check_password,
        crate::api::handlers::session::generate_password,
        crate::api::handlers::session::save_password,
        crate::api::handlers::session::end_session
    ),
    components(
        schemas(
            crate::api::types::SuccessResponse,
            crate::api::types::StrengthRequest,
            crate::api::types::StrengthResponse,
            crate::api::types::PasswordGenerationRequest,
            crate::api::types::PasswordGenerationResponse,
            crate::api::types::SessionResponse,
            crate::api::types::SaveResponse,
            crate::models::StrengthLevel,
            crate::models::StrengthResult,
            crate::models::PasswordGenerationOptions
        )
    ),
    tags(
        (name = "Generator", description = "Stateless password generation and strength analysis"),
        (name = "Session", description = "Per-session history and saved passwords")
    ),
    info(
        title = "Passcheck API",
        version = "0.1.0",
        description = "Password strength checker and generator",
        license(name = "MIT")
    )
)]
pub struct ApiDoc;

/// Periodically drop sessions that have been idle past the timeout.
pub fn spawn_session_sweeper(state: web::Data<AppState>) -> tokio::task::JoinHandle<()> {
    let period = state.config.session_sweep_interval;
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(period);
        loop {
            interval.tick().await;
            let removed = state.sessions.cleanup_expired();
            if removed > 0 {
                log::info!("🧹 Swept {} idle session(s), {} active", removed, state.sessions.len());
            }
        }
    })
}

pub async fn start_server(state: web::Data<AppState>) -> std::io::Result<()> {
    let address = state.config.web_address.clone();
    let port = state.config.web_port;
    log::info!("Starting password tool on http://{}:{}", address, port);

    let sweeper = spawn_session_sweeper(state.clone());

    let result = HttpServer::new(move || {
        App::new()
            .wrap(Logger::new("%r %s %Dms"))
            .app_data(state.clone())
            // Add Swagger UI
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}")
                    .url("/api-docs/openapi.json", ApiDoc::openapi())
            )
            // Add Redoc
            .service(Redoc::with_url("/redoc", ApiDoc::openapi()))
            .configure(routes::configure_routes)
    })
    .bind((address.as_str(), port))?
    .run()
    .await;

    sweeper.abort();
    result
}

pub mod types;
pub mod routes;
pub mod handlers;
pub mod utils;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn openapi_lists_every_route() {
        let doc = ApiDoc::openapi();
        let paths: Vec<&String> = doc.paths.paths.keys().collect();
        for expected in [
            "/api/strength",
            "/api/generate",
            "/api/session",
            "/api/session/check",
            "/api/session/generate",
            "/api/session/save",
        ] {
            assert!(paths.iter().any(|p| p.as_str() == expected), "missing {expected}");
        }
    }

    #[actix_web::test]
    async fn sweeper_drops_idle_sessions() {
        let mut config = Config::default();
        config.session_idle_timeout = std::time::Duration::from_millis(0);
        config.session_sweep_interval = std::time::Duration::from_millis(10);
        let state = web::Data::new(AppState::new(config));
        state.sessions.create();

        let handle = spawn_session_sweeper(state.clone());
        tokio::time::sleep(std::time::Duration::from_millis(50)).await;
        handle.abort();

        assert!(state.sessions.is_empty());
    }
}
