//! Breadcrumb trail.

use std::fmt::Write;

use super::escape_html;

/// One element of a navigation trail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Breadcrumb {
    pub label: String,
    pub href: String,
    /// Marks the current page; rendered as plain text instead of a link.
    pub active: bool,
}

impl Breadcrumb {
    pub fn link(label: impl Into<String>, href: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            href: href.into(),
            active: false,
        }
    }

    pub fn current(label: impl Into<String>, href: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            href: href.into(),
            active: true,
        }
    }
}

/// Render a trail left-to-right as `<nav><ol>…</ol></nav>`.
///
/// Entries are separated by `/`. An empty trail yields an empty list.
pub fn render_breadcrumbs(trail: &[Breadcrumb]) -> String {
    let mut html = String::from(r#"<nav aria-label="Breadcrumb" class="breadcrumbs"><ol>"#);

    for (idx, crumb) in trail.iter().enumerate() {
        let label = escape_html(&crumb.label);
        if crumb.active {
            let _ = write!(html, r#"<li aria-current="page" class="active">{label}"#);
        } else {
            let href = escape_html(&crumb.href);
            let _ = write!(html, r#"<li><a href="{href}">{label}</a>"#);
        }
        if idx + 1 < trail.len() {
            html.push_str(r#"<span class="separator">/</span>"#);
        }
        html.push_str("</li>");
    }

    html.push_str("</ol></nav>");
    html
}
