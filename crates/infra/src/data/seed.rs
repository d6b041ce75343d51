//! JSON seed data for the in-memory store.

use std::path::Path;

use serde::{Deserialize, Serialize};

use invoicedash_invoicing::{Customer, Invoice};

use super::DataError;

/// Seed file shape: `{ "customers": [...], "invoices": [...] }`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeedData {
    #[serde(default)]
    pub customers: Vec<Customer>,
    #[serde(default)]
    pub invoices: Vec<Invoice>,
}

impl SeedData {
    pub fn from_json(raw: &str) -> Result<Self, DataError> {
        Ok(serde_json::from_str(raw)?)
    }

    pub fn load(path: &Path) -> Result<Self, DataError> {
        let raw = std::fs::read_to_string(path).map_err(|source| DataError::SeedIo {
            path: path.display().to_string(),
            source,
        })?;
        let seed = Self::from_json(&raw)?;
        tracing::info!(
            path = %path.display(),
            customers = seed.customers.len(),
            invoices = seed.invoices.len(),
            "loaded seed data"
        );
        Ok(seed)
    }
}
