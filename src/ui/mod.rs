// src/ui/mod.rs
//! Server-rendered HTML for the three views. Every piece of user-supplied
//! text goes through `escape_html` before it lands in markup.

mod views;

pub use views::*;

use crate::models::View;
use crate::utils::escape_html;

const ACCENT: &str = "#00E5FF";

/// A one-line message shown above the view content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    Success(String),
    Error(String),
    Info(String),
}

impl Notice {
    fn render(&self) -> String {
        let (class, text) = match self {
            Notice::Success(t) => ("notice success", t),
            Notice::Error(t) => ("notice error", t),
            Notice::Info(t) => ("notice info", t),
        };
        format!("<div class=\"{}\">{}</div>", class, escape_html(text))
    }
}

fn sidebar(active: View) -> String {
    let mut items = String::new();
    for view in View::ALL {
        let checked = if view == active { " checked" } else { "" };
        items.push_str(&format!(
            "<label><input type=\"radio\" name=\"view\" value=\"{slug}\" onchange=\"this.form.submit()\"{checked}> {title}</label>\n",
            slug = view.slug(),
            title = view.title(),
            checked = checked,
        ));
    }

    format!(
        r#"<aside class="sidebar">
<h2>🔐 Password Tools</h2>
<form method="get" action="/">
<p>Choose an option:</p>
{items}<noscript><button type="submit">Go</button></noscript>
</form>
<form method="post" action="/session/end">
<button type="submit" class="secondary">End session</button>
</form>
</aside>"#,
        items = items,
    )
}

/// Wrap a rendered view in the full page chrome.
pub fn render_page(active: View, notice: Option<&Notice>, body: &str) -> String {
    let notice = notice.map(Notice::render).unwrap_or_default();

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>🔐 Password Manager</title>
<style>
body {{ margin: 0; font-family: sans-serif; display: flex; background: #0e1117; color: #fafafa; }}
.sidebar {{ width: 260px; padding: 1rem; background: #262730; min-height: 100vh; }}
.sidebar h2 {{ color: {accent}; }}
.sidebar label {{ display: block; margin: .4rem 0; }}
main {{ flex: 1; padding: 1rem 3rem; }}
h1 {{ text-align: center; color: {accent}; }}
.level {{ color: {accent}; }}
.notice {{ padding: 10px; border-radius: 5px; margin: 1rem 0; font-weight: bold; }}
.notice.success {{ background: #1b4d2e; }}
.notice.error {{ background: #5c1f1f; }}
.notice.info {{ background: {accent}; color: #000; text-align: center; }}
code {{ display: block; background: #262730; padding: .5rem; margin: .3rem 0; }}
progress {{ width: 100%; }}
button.secondary {{ margin-top: 2rem; }}
</style>
</head>
<body>
{sidebar}
<main>
<h1>🔐 Secure Password Manager</h1>
<hr>
{notice}
{body}
</main>
</body>
</html>
"#,
        accent = ACCENT,
        sidebar = sidebar(active),
        notice = notice,
        body = body,
    )
}
