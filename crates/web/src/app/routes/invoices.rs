use std::sync::Arc;

use axum::{
    extract::{Extension, Path},
    response::Html,
    routing::get,
    Router,
};

use invoicedash_core::InvoiceId;
use invoicedash_infra::InvoiceData;

use crate::app::errors::PageError;
use crate::app::pages;

pub fn router() -> Router {
    Router::new()
        .route("/create", get(create_invoice_page))
        .route("/:id/edit", get(edit_invoice_page))
}

pub async fn edit_invoice_page(
    Extension(data): Extension<Arc<dyn InvoiceData>>,
    Path(id): Path<String>,
) -> Result<Html<String>, PageError> {
    // A blank id can never match a record.
    let id = InvoiceId::parse(id).map_err(|_| PageError::NotFound)?;
    let page = pages::load_edit_page(data.as_ref(), &id).await?;
    Ok(Html(page.render()))
}

pub async fn create_invoice_page(
    Extension(data): Extension<Arc<dyn InvoiceData>>,
) -> Result<Html<String>, PageError> {
    let page = pages::load_create_page(data.as_ref()).await?;
    Ok(Html(page.render()))
}
