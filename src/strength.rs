// src/strength.rs
use crate::models::StrengthResult;

/// Passwords rejected outright, regardless of composition.
pub const COMMON_PASSWORDS: [&str; 6] = [
    "password", "123456", "qwerty", "iloveyou", "admin", "welcome",
];

pub const MIN_RECOMMENDED_LENGTH: usize = 8;

pub const COMMON_PASSWORD_SUGGESTION: &str = "❌ Avoid common passwords like 'password123'.";
pub const LENGTH_SUGGESTION: &str = "⚠️ Use at least 8 characters.";
pub const UPPERCASE_SUGGESTION: &str = "⚠️ Add at least one uppercase letter.";
pub const LOWERCASE_SUGGESTION: &str = "⚠️ Add at least one lowercase letter.";
pub const DIGIT_SUGGESTION: &str = "ℹ️ Include at least one number.";
pub const SPECIAL_SUGGESTION: &str = "ℹ️ Use special characters (!@#$%^&*).";

pub fn is_common_password(password: &str) -> bool {
    COMMON_PASSWORDS.contains(&password)
}

/// Score a password against the blocklist and the five composition checks.
///
/// The returned score is raw (0-5); use [`StrengthResult::display_score`]
/// for the clamped value shown to users.
pub fn analyze_password_strength(password: &str) -> StrengthResult {
    if is_common_password(password) {
        return StrengthResult {
            score: 1,
            suggestions: vec![COMMON_PASSWORD_SUGGESTION.to_string()],
        };
    }

    let checks: [(bool, &str); 5] = [
        (password.chars().count() >= MIN_RECOMMENDED_LENGTH, LENGTH_SUGGESTION),
        (password.chars().any(char::is_uppercase), UPPERCASE_SUGGESTION),
        (password.chars().any(char::is_lowercase), LOWERCASE_SUGGESTION),
        (password.chars().any(|c| c.is_ascii_digit()), DIGIT_SUGGESTION),
        (password.chars().any(|c| c.is_ascii_punctuation()), SPECIAL_SUGGESTION),
    ];

    let mut score = 0;
    let mut suggestions = Vec::new();

    for (passed, suggestion) in checks {
        if passed {
            score += 1;
        } else {
            suggestions.push(suggestion.to_string());
        }
    }

    StrengthResult { score, suggestions }
}
