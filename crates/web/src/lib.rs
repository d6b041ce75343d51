//! Invoice dashboard: HTTP server, page loaders and HTML rendering.

pub mod app;
pub mod config;
pub mod middleware;
pub mod render;
