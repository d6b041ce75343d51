//! Invoicing records.
//!
//! Plain data passed from the data collaborator to the dashboard pages
//! (no IO, no HTTP, no storage).

pub mod customer;
pub mod invoice;

pub use customer::Customer;
pub use invoice::{Invoice, InvoiceStatus};
