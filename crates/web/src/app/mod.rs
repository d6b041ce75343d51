//! HTTP application wiring (Axum router + data source).
//!
//! - `pages.rs`: page loaders (fetch records, decide render vs not-found)
//! - `routes/`: HTTP routes + handlers
//! - `errors.rs`: mapping of page errors to responses

use std::sync::Arc;

use axum::{routing::get, Extension, Router};
use tower::ServiceBuilder;

use invoicedash_infra::InvoiceData;

use crate::middleware;

pub mod errors;
pub mod pages;
pub mod routes;

/// Build the full HTTP router (public entrypoint used by `main.rs`).
pub fn build_app(data: Arc<dyn InvoiceData>) -> Router {
    Router::new()
        .route("/health", get(routes::system::health))
        .route("/static/global.css", get(routes::system::global_css))
        .merge(routes::router())
        .fallback(routes::system::fallback)
        .layer(
            ServiceBuilder::new()
                .layer(axum::middleware::from_fn(middleware::log_requests))
                .layer(Extension(data)),
        )
}
