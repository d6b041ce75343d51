use axum::{
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};

use crate::app::errors;
use crate::render::layout::GLOBAL_CSS;

pub async fn health() -> StatusCode {
    StatusCode::OK
}

pub async fn global_css() -> impl IntoResponse {
    ([(header::CONTENT_TYPE, "text/css; charset=utf-8")], GLOBAL_CSS)
}

pub async fn fallback() -> Response {
    errors::not_found("Could not find the requested page.")
}
