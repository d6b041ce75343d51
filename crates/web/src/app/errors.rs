use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use thiserror::Error;

use invoicedash_infra::DataError;

use crate::render::status;

/// Why a page could not be rendered.
#[derive(Debug, Error)]
pub enum PageError {
    /// The routed record does not exist; hand off to the not-found view.
    #[error("not found")]
    NotFound,

    #[error("data access failed: {0}")]
    Data(#[from] DataError),
}

impl IntoResponse for PageError {
    fn into_response(self) -> Response {
        match self {
            PageError::NotFound => not_found("Could not find the requested invoice."),
            PageError::Data(e) => {
                tracing::error!(error = %e, "page data load failed");
                (StatusCode::INTERNAL_SERVER_ERROR, Html(status::render_error())).into_response()
            }
        }
    }
}

pub fn not_found(message: &str) -> Response {
    (StatusCode::NOT_FOUND, Html(status::render_not_found(message))).into_response()
}
