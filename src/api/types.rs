// src/api/types.rs
use serde::{Serialize, Deserialize};
use utoipa::ToSchema;
use crate::models::{StrengthLevel, StrengthResult};

#[derive(Serialize, Deserialize, ToSchema)]
pub struct SuccessResponse {
    /// Whether the operation was successful
    pub success: bool,
    /// Success message (only present on success)
    pub message: Option<String>,
    /// Error message (only present on failure)
    pub error: Option<String>,
}

// Strength analysis
#[derive(Serialize, Deserialize, ToSchema)]
pub struct StrengthRequest {
    /// Password to score
    pub password: String,
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct StrengthResponse {
    /// Whether the operation was successful
    pub success: bool,
    /// Display score, 1-5
    pub score: u8,
    /// Strength bucket for the score
    pub level: Option<StrengthLevel>,
    /// Human readable label for the level
    pub label: Option<String>,
    /// Progress bar fill, 0.2-1.0
    pub progress: f32,
    /// Improvement hints
    pub suggestions: Vec<String>,
    /// Error message (if operation failed)
    pub error: Option<String>,
}

impl StrengthResponse {
    pub fn from_result(result: &StrengthResult) -> Self {
        let level = result.level();
        Self {
            success: true,
            score: result.display_score(),
            level: Some(level),
            label: Some(level.label().to_string()),
            progress: result.progress(),
            suggestions: result.suggestions.clone(),
            error: None,
        }
    }

    pub fn failure(error: String) -> Self {
        Self {
            success: false,
            score: 0,
            level: None,
            label: None,
            progress: 0.0,
            suggestions: vec![],
            error: Some(error),
        }
    }
}

// Password generation
#[derive(Serialize, Deserialize, ToSchema, Default)]
pub struct PasswordGenerationRequest {
    /// Password length (defaults to the configured default)
    pub length: Option<usize>,
    /// Include digits
    pub include_numbers: Option<bool>,
    /// Include punctuation
    pub include_specials: Option<bool>,
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct PasswordGenerationResponse {
    /// Whether the operation was successful
    pub success: bool,
    /// Generated password
    pub password: Option<String>,
    /// Display strength score of the generated password
    pub strength: Option<u8>,
    /// Error message (if operation failed)
    pub error: Option<String>,
}

// Session
#[derive(Serialize, Deserialize, ToSchema)]
pub struct SessionResponse {
    /// Whether the operation was successful
    pub success: bool,
    /// Recently checked or generated passwords, most recent first
    pub history: Vec<String>,
    /// Saved passwords, oldest first
    pub saved: Vec<String>,
    /// Password produced by the last generate call
    pub last_generated: Option<String>,
    /// Error message (if operation failed)
    pub error: Option<String>,
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct SaveResponse {
    /// Whether the operation was successful
    pub success: bool,
    /// The password that was saved
    pub password: Option<String>,
    /// Number of saved passwords after the call
    pub saved_count: usize,
    /// Error message (if operation failed)
    pub error: Option<String>,
}

// HTML form bodies
#[derive(Deserialize)]
pub struct CheckForm {
    #[serde(default)]
    pub password: String,
}

#[derive(Deserialize)]
pub struct GenerateForm {
    pub length: Option<usize>,
    #[serde(default)]
    pub include_numbers: bool,
    #[serde(default)]
    pub include_specials: bool,
}

#[derive(Deserialize)]
pub struct ViewQuery {
    pub view: Option<String>,
}
