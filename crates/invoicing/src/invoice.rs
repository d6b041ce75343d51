use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use invoicedash_core::{CustomerId, Entity, InvoiceId};

/// Invoice status lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InvoiceStatus {
    Pending,
    Paid,
}

impl InvoiceStatus {
    pub const ALL: [InvoiceStatus; 2] = [InvoiceStatus::Pending, InvoiceStatus::Paid];

    pub fn as_str(&self) -> &'static str {
        match self {
            InvoiceStatus::Pending => "pending",
            InvoiceStatus::Paid => "paid",
        }
    }
}

impl core::fmt::Display for InvoiceStatus {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Invoice record as returned by the data collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Invoice {
    pub id: InvoiceId,
    pub customer_id: CustomerId,
    /// Amount in smallest currency unit (e.g., cents).
    pub amount: u64,
    pub status: InvoiceStatus,
    pub date: NaiveDate,
}

impl Invoice {
    /// Amount formatted for the edit form input (`1234` -> `"12.34"`).
    pub fn amount_in_dollars(&self) -> String {
        format!("{}.{:02}", self.amount / 100, self.amount % 100)
    }
}

impl Entity for Invoice {
    type Id = InvoiceId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}
