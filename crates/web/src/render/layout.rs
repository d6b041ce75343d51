//! Root layout applied to every page.

use super::escape_html;

pub const SITE_NAME: &str = "Acme Dashboard";
pub const STYLESHEET_HREF: &str = "/static/global.css";
/// Single font family used across the dashboard.
pub const FONT_CLASS: &str = "inter";

/// Global stylesheet served at [`STYLESHEET_HREF`].
pub const GLOBAL_CSS: &str = r#"@import url('https://fonts.googleapis.com/css2?family=Inter:wght@400;500;600&display=swap');

*, *::before, *::after { box-sizing: border-box; }
body { margin: 0; color: #111827; background: #ffffff; }
.inter { font-family: 'Inter', sans-serif; }
.antialiased { -webkit-font-smoothing: antialiased; -moz-osx-font-smoothing: grayscale; }
main { max-width: 64rem; margin: 0 auto; padding: 1.5rem; }

.breadcrumbs ol { display: flex; list-style: none; margin: 0 0 1.5rem; padding: 0; font-size: 1.5rem; }
.breadcrumbs li { color: #6b7280; }
.breadcrumbs li.active { color: #111827; }
.breadcrumbs a { color: inherit; text-decoration: none; }
.breadcrumbs .separator { margin: 0 0.75rem; }

.invoice-form { border-radius: 0.375rem; background: #f9fafb; padding: 1.5rem; }
.invoice-form label { display: block; margin-bottom: 0.5rem; font-weight: 500; }
.invoice-form .field { margin-bottom: 1rem; }
.invoice-form .actions { display: flex; justify-content: flex-end; gap: 1rem; margin-top: 1.5rem; }

.status-page { display: flex; flex-direction: column; align-items: center; gap: 0.5rem; margin-top: 4rem; }
"#;

/// Wrap page content in the shared document shell (global stylesheet + font).
///
/// `title` becomes `"{title} | Acme Dashboard"`; `None` uses the site name alone.
pub fn render_document(title: Option<&str>, body: &str) -> String {
    let title = match title {
        Some(t) => format!("{} | {SITE_NAME}", escape_html(t)),
        None => SITE_NAME.to_string(),
    };

    format!(
        concat!(
            "<!DOCTYPE html>\n",
            r#"<html lang="en">"#,
            "<head>",
            r#"<meta charset="utf-8">"#,
            r#"<meta name="viewport" content="width=device-width, initial-scale=1">"#,
            "<title>{title}</title>",
            r#"<link rel="stylesheet" href="{css}">"#,
            "</head>",
            r#"<body class="{font} antialiased">{body}</body>"#,
            "</html>"
        ),
        title = title,
        css = STYLESHEET_HREF,
        font = FONT_CLASS,
        body = body,
    )
}
