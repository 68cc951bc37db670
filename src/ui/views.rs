// src/ui/views.rs
use crate::models::{PasswordGenerationOptions, StrengthResult};
use crate::utils::escape_html;

fn numbered_list(items: &[String]) -> String {
    items
        .iter()
        .enumerate()
        .map(|(i, pwd)| format!("<code>{}. {}</code>\n", i + 1, escape_html(pwd)))
        .collect()
}

/// The strength-check form, plus the score of the last submission if any.
pub fn check_view(result: Option<&StrengthResult>) -> String {
    let mut html = String::from(
        r#"<h2>🔍 Check Your Password Strength</h2>
<form method="post" action="/check" autocomplete="off">
<label>Enter Password: <input type="password" name="password"></label>
<button type="submit">Check</button>
</form>
"#,
    );

    if let Some(result) = result {
        html.push_str(&format!(
            "<progress value=\"{}\" max=\"5\"></progress>\n<div class=\"level\"><h3>💡 {}</h3></div>\n",
            result.display_score(),
            result.level().label(),
        ));

        if !result.is_max() {
            html.push_str("<h3>Suggestions:</h3>\n<ul>\n");
            for suggestion in &result.suggestions {
                html.push_str(&format!("<li>✅ {}</li>\n", escape_html(suggestion)));
            }
            html.push_str("</ul>\n");
        }
    }

    html
}

pub struct GenerateViewModel<'a> {
    pub options: &'a PasswordGenerationOptions,
    pub min_length: usize,
    pub max_length: usize,
    /// Set only on the response to a generate request
    pub generated: Option<&'a str>,
    pub history: &'a [String],
}

pub fn generate_view(model: &GenerateViewModel<'_>) -> String {
    let checked = |on: bool| if on { " checked" } else { "" };

    let mut html = format!(
        r#"<h2>🔑 Generate a Secure Password</h2>
<form method="post" action="/generate">
<label>Password Length: <input type="range" name="length" min="{min}" max="{max}" value="{length}" oninput="this.nextElementSibling.value = this.value"><output>{length}</output></label><br>
<label><input type="checkbox" name="include_numbers" value="true"{numbers}> Include Numbers</label><br>
<label><input type="checkbox" name="include_specials" value="true"{specials}> Include Special Characters</label><br>
<button type="submit">🛠 Generate Password</button>
</form>
"#,
        min = model.min_length,
        max = model.max_length,
        length = model.options.length,
        numbers = checked(model.options.include_numbers),
        specials = checked(model.options.include_specials),
    );

    if let Some(pwd) = model.generated {
        html.push_str(&format!(
            "<div class=\"notice success\">🔑 Your Secure Password: <code>{}</code></div>\n",
            escape_html(pwd)
        ));
    }

    if !model.history.is_empty() {
        html.push_str("<h3>📜 Password History</h3>\n");
        html.push_str(&numbered_list(model.history));
    }

    html.push_str(
        r#"<form method="post" action="/save">
<button type="submit">💾 Save Password</button>
</form>
"#,
    );

    html
}

pub fn saved_view(saved: &[String]) -> String {
    let mut html = String::from("<h2>💾 Saved Passwords</h2>\n");

    if saved.is_empty() {
        html.push_str("<div class=\"notice info\">⚠️ No saved passwords yet.</div>\n");
    } else {
        html.push_str(&numbered_list(saved));
    }

    html
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::strength::analyze_password_strength;

    #[test]
    fn check_view_without_result_is_just_the_form() {
        let html = check_view(None);
        assert!(html.contains("action=\"/check\""));
        assert!(!html.contains("<progress"));
    }

    #[test]
    fn weak_result_lists_suggestions() {
        let result = analyze_password_strength("abc");
        let html = check_view(Some(&result));
        assert!(html.contains("<progress value=\"1\" max=\"5\">"));
        assert!(html.contains("Very Weak ❌"));
        assert!(html.contains("<li>✅ ⚠️ Use at least 8 characters.</li>"));
    }

    #[test]
    fn strong_result_hides_suggestions() {
        let result = analyze_password_strength("Abc12345!");
        let html = check_view(Some(&result));
        assert!(html.contains("Very Strong 💪"));
        assert!(!html.contains("Suggestions:"));
    }

    #[test]
    fn generate_view_escapes_history() {
        let options = PasswordGenerationOptions { length: 14, include_numbers: true, include_specials: false };
        let history = vec!["<b>&".to_string(), "plain".to_string()];
        let html = generate_view(&GenerateViewModel {
            options: &options,
            min_length: 8,
            max_length: 20,
            generated: Some("a<b"),
            history: &history,
        });

        assert!(html.contains("value=\"14\""));
        assert!(html.contains("name=\"include_numbers\" value=\"true\" checked"));
        assert!(!html.contains("name=\"include_specials\" value=\"true\" checked"));
        assert!(html.contains("Your Secure Password: <code>a&lt;b</code>"));
        assert!(html.contains("<code>1. &lt;b&gt;&amp;</code>"));
        assert!(html.contains("<code>2. plain</code>"));
    }

    #[test]
    fn saved_view_states() {
        assert!(saved_view(&[]).contains("No saved passwords yet."));

        let html = saved_view(&["first".to_string(), "second".to_string()]);
        assert!(html.contains("<code>1. first</code>"));
        assert!(html.contains("<code>2. second</code>"));
    }
}
