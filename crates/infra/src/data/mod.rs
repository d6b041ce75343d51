//! Data-access collaborator consumed by the page loaders.
//!
//! Pages never talk to storage directly; they go through [`InvoiceData`], so
//! the HTTP layer can be exercised against any backend (the in-memory store
//! in dev/test).

use std::sync::Arc;

use thiserror::Error;

use invoicedash_core::InvoiceId;
use invoicedash_invoicing::{Customer, Invoice};

pub mod in_memory;
pub mod seed;

pub use in_memory::InMemoryInvoiceData;
pub use seed::SeedData;

/// Failure of a data-access call.
///
/// Absence of a record is *not* an error; lookups return `Ok(None)`.
#[derive(Debug, Error)]
pub enum DataError {
    #[error("data source unavailable: {0}")]
    Unavailable(String),

    #[error("failed to read seed file {path}: {source}")]
    SeedIo {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse seed data: {0}")]
    SeedFormat(#[from] serde_json::Error),
}

/// Read operations the invoice pages depend on.
#[async_trait::async_trait]
pub trait InvoiceData: Send + Sync {
    /// Look up one invoice; `Ok(None)` when no record matches `id`.
    async fn fetch_invoice_by_id(&self, id: &InvoiceId) -> Result<Option<Invoice>, DataError>;

    /// All customers, ordered by name.
    async fn fetch_customers(&self) -> Result<Vec<Customer>, DataError>;
}

#[async_trait::async_trait]
impl<D> InvoiceData for Arc<D>
where
    D: InvoiceData + ?Sized,
{
    async fn fetch_invoice_by_id(&self, id: &InvoiceId) -> Result<Option<Invoice>, DataError> {
        (**self).fetch_invoice_by_id(id).await
    }

    async fn fetch_customers(&self) -> Result<Vec<Customer>, DataError> {
        (**self).fetch_customers().await
    }
}
