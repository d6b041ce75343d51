use std::collections::HashMap;
use std::sync::RwLock;

use invoicedash_core::{Entity, InvoiceId};
use invoicedash_invoicing::{Customer, Invoice};

use super::{DataError, InvoiceData, SeedData};

/// In-memory data source for tests/dev.
#[derive(Debug, Default)]
pub struct InMemoryInvoiceData {
    invoices: RwLock<HashMap<InvoiceId, Invoice>>,
    customers: RwLock<Vec<Customer>>,
}

impl InMemoryInvoiceData {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store pre-populated from seed data.
    pub fn from_seed(seed: SeedData) -> Self {
        let store = Self::new();
        for customer in seed.customers {
            store.upsert_customer(customer);
        }
        for invoice in seed.invoices {
            store.upsert_invoice(invoice);
        }
        store
    }

    pub fn upsert_invoice(&self, invoice: Invoice) {
        if let Ok(mut map) = self.invoices.write() {
            map.insert(invoice.id().clone(), invoice);
        }
    }

    /// Insert or replace a customer, keeping the list ordered by name.
    pub fn upsert_customer(&self, customer: Customer) {
        if let Ok(mut list) = self.customers.write() {
            list.retain(|c| c.id() != customer.id());
            let pos = list.partition_point(|c| c.name <= customer.name);
            list.insert(pos, customer);
        }
    }
}

#[async_trait::async_trait]
impl InvoiceData for InMemoryInvoiceData {
    async fn fetch_invoice_by_id(&self, id: &InvoiceId) -> Result<Option<Invoice>, DataError> {
        let map = self
            .invoices
            .read()
            .map_err(|_| DataError::Unavailable("invoice store lock poisoned".into()))?;
        Ok(map.get(id).cloned())
    }

    async fn fetch_customers(&self) -> Result<Vec<Customer>, DataError> {
        let list = self
            .customers
            .read()
            .map_err(|_| DataError::Unavailable("customer store lock poisoned".into()))?;
        Ok(list.clone())
    }
}
