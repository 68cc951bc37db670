// src/api/routes.rs
use actix_cors::Cors;
use actix_web::web;
use super::handlers;

fn api_cors() -> Cors {
    Cors::default()
        .allow_any_origin()
        .allowed_methods(vec!["GET", "POST", "DELETE"])
        .allowed_headers(vec!["Content-Type", "Accept"])
        .max_age(3600)
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    // HTML views
    cfg.route("/", web::get().to(handlers::ui::index))
        .route("/check", web::post().to(handlers::ui::check))
        .route("/generate", web::post().to(handlers::ui::generate))
        .route("/save", web::post().to(handlers::ui::save))
        .route("/session/end", web::post().to(handlers::ui::end_session));

    // JSON API
    cfg.service(
        web::scope("/api")
            .wrap(api_cors())
            .route("/strength", web::post().to(handlers::generator::analyze_password))
            .route("/generate", web::post().to(handlers::generator::generate_password))
            .route("/session", web::get().to(handlers::session::get_session))
            .route("/session", web::delete().to(handlers::session::end_session))
            .route("/session/check", web::post().to(handlers::session::check_password))
            .route("/session/generate", web::post().to(handlers::session::generate_password))
            .route("/session/save", web::post().to(handlers::session::save_password))
    );
}
