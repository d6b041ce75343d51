//! Not-found and error views.

use super::{escape_html, layout::render_document};

/// 404 view: message plus a link back to the invoice list.
pub fn render_not_found(message: &str) -> String {
    let body = format!(
        concat!(
            r#"<main class="status-page">"#,
            "<h2>404 Not Found</h2>",
            "<p>{message}</p>",
            r#"<a href="/dashboard/invoices">Go Back</a>"#,
            "</main>"
        ),
        message = escape_html(message),
    );
    render_document(Some("Not Found"), &body)
}

/// Generic failure view; details go to the log, not the page.
pub fn render_error() -> String {
    let body = concat!(
        r#"<main class="status-page">"#,
        "<h2>Something went wrong!</h2>",
        "<p>The page could not be loaded. Please try again.</p>",
        r#"<a href="/dashboard/invoices">Go Back</a>"#,
        "</main>"
    );
    render_document(Some("Error"), body)
}
