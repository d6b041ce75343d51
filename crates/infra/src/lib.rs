//! Infrastructure layer: data-access collaborators backing the dashboard pages.

pub mod data;

pub use data::{DataError, InMemoryInvoiceData, InvoiceData, SeedData};
