//! HTML rendering: root layout, breadcrumbs, invoice forms, status views.
//!
//! Everything here is a pure `&data -> String` function; handlers wrap the
//! result in `axum::response::Html`.

pub mod breadcrumbs;
pub mod form;
pub mod layout;
pub mod status;

pub use breadcrumbs::{render_breadcrumbs, Breadcrumb};
pub use form::{render_create_form, render_edit_form};
pub use layout::render_document;

/// Escape text for use in HTML element content and quoted attribute values.
pub fn escape_html(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}
