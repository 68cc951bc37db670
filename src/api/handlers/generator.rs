// src/api/handlers/generator.rs

use actix_web::{web, HttpResponse, Responder};
use crate::api::AppState;
use crate::api::types::{
    PasswordGenerationRequest, PasswordGenerationResponse,
    StrengthRequest, StrengthResponse,
};
use crate::api::utils::generation_options;
use crate::strength;

/// Validate an API generation request against the configured bounds.
pub(crate) fn validate_length(state: &AppState, length: Option<usize>) -> Result<(), String> {
    let config = &state.config;
    match length {
        Some(len) if !config.length_in_bounds(len) => Err(format!(
            "Password length must be between {} and {} characters",
            config.min_password_length, config.max_password_length
        )),
        _ => Ok(()),
    }
}

/// Generate a password
///
/// Generates a random password without touching any session state.
#[utoipa::path(
    post,
    path = "/api/generate",
    tag = "Generator",
    request_body = PasswordGenerationRequest,
    responses(
        (status = 200, description = "Generated password", body = PasswordGenerationResponse),
        (status = 400, description = "Length out of bounds", body = PasswordGenerationResponse)
    )
)]
pub async fn generate_password(
    state: web::Data<AppState>,
    generation_req: web::Json<PasswordGenerationRequest>,
) -> impl Responder {
    if let Err(e) = validate_length(&state, generation_req.length) {
        return HttpResponse::BadRequest().json(PasswordGenerationResponse {
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

    let password = state.generator.generate_password(&options);
    let strength = strength::analyze_password_strength(&password).display_score();

    HttpResponse::Ok().json(PasswordGenerationResponse {
        success: true,
        password: Some(password),
        strength: Some(strength),
        error: None,
    })
}

/// Analyze password strength
///
/// Scores a password and lists what would improve it. Nothing is recorded.
#[utoipa::path(
    post,
    path = "/api/strength",
    tag = "Generator",
    request_body = StrengthRequest,
    responses(
        (status = 200, description = "Password analysis result", body = StrengthResponse)
    )
)]
pub async fn analyze_password(analysis_req: web::Json<StrengthRequest>) -> impl Responder {
    let result = strength::analyze_password_strength(&analysis_req.password);
    HttpResponse::Ok().json(StrengthResponse::from_result(&result))
}
