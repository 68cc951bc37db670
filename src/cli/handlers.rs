// src/cli/handlers.rs
use anyhow::{bail, Context};
use inquire::Password;
use crate::core::Config;
use crate::generators::PasswordGenerator;
use crate::models::{PasswordGenerationOptions, StrengthResult};
use crate::strength;

// Render a strength result the way the web view lays it out
pub fn format_strength_report(result: &StrengthResult) -> String {
    let mut report = format!(
        "💡 {} ({}/5)\n",
        result.level().label(),
        result.display_score()
    );

    if !result.is_max() {
        report.push_str("Suggestions:\n");
        for suggestion in &result.suggestions {
            report.push_str(&format!("  ✅ {}\n", suggestion));
        }
    }

    report
}

pub fn handle_check(password: Option<String>) -> anyhow::Result<()> {
    let password = match password {
        Some(p) => p,
        None => Password::new("Enter Password:")
            .with_display_mode(inquire::PasswordDisplayMode::Hidden)
            .without_confirmation()
            .prompt()
            .context("Failed to read password")?,
    };

    if password.is_empty() {
        bail!("No password entered");
    }

    let result = strength::analyze_password_strength(&password);
    print!("{}", format_strength_report(&result));

    Ok(())
}

pub fn handle_generate(
    config: &Config,
    length: Option<usize>,
    include_numbers: bool,
    include_specials: bool,
    count: usize,
) -> anyhow::Result<()> {
    let length = length.unwrap_or(config.default_password_length);
    if !config.length_in_bounds(length) {
        bail!(
            "Password length must be between {} and {} characters",
            config.min_password_length,
            config.max_password_length
        );
    }

    let options = PasswordGenerationOptions { length, include_numbers, include_specials };
    let generator = PasswordGenerator::new();

    for i in 1..=count {
        let password = generator.generate_password(&options);
        if count > 1 {
            println!("{}. {}", i, password);
        } else {
            println!("🔑 {}", password);
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn report_lists_suggestions_for_weak_passwords() {
        let report = format_strength_report(&strength::analyze_password_strength("abc"));
        assert!(report.starts_with("💡 Very Weak ❌ (1/5)\n"));
        assert!(report.contains("  ✅ ⚠️ Use at least 8 characters.\n"));
    }

    #[test]
    fn report_for_strong_password_has_no_suggestions() {
        let report = format_strength_report(&strength::analyze_password_strength("Abc12345!"));
        assert_eq!(report, "💡 Very Strong 💪 (5/5)\n");
    }

    #[test]
    fn generate_rejects_out_of_bounds_length() {
        let config = Config::default();
        assert!(handle_generate(&config, Some(4), false, false, 1).is_err());
        assert!(handle_generate(&config, Some(10), true, true, 2).is_ok());
    }

    #[test]
    fn check_rejects_empty_argument() {
        assert!(handle_check(Some(String::new())).is_err());
        assert!(handle_check(Some("hunter2".to_string())).is_ok());
    }
}
