//! Page loaders for the invoice create/edit screens.
//!
//! A loader fetches what a page needs from the [`InvoiceData`] collaborator
//! and either returns a ready-to-render page or a [`PageError`]. The edit
//! page is never built without a resolved invoice.

use invoicedash_core::InvoiceId;
use invoicedash_infra::InvoiceData;
use invoicedash_invoicing::{Customer, Invoice};

use crate::app::errors::PageError;
use crate::render::{self, Breadcrumb};

pub const INVOICES_HREF: &str = "/dashboard/invoices";
pub const CREATE_INVOICE_HREF: &str = "/dashboard/invoices/create";

pub fn edit_invoice_href(id: &InvoiceId) -> String {
    format!("{INVOICES_HREF}/{id}/edit")
}

/// Trail for the edit page: invoice list, then the current edit page.
pub fn edit_trail(id: &InvoiceId) -> Vec<Breadcrumb> {
    vec![
        Breadcrumb::link("Invoices", INVOICES_HREF),
        Breadcrumb::current("Edit Invoice", edit_invoice_href(id)),
    ]
}

/// Trail for the create page: invoice list, then the current create page.
pub fn create_trail() -> Vec<Breadcrumb> {
    vec![
        Breadcrumb::link("Invoices", INVOICES_HREF),
        Breadcrumb::current("Create Invoice", CREATE_INVOICE_HREF),
    ]
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditInvoicePage {
    pub breadcrumbs: Vec<Breadcrumb>,
    pub invoice: Invoice,
    pub customers: Vec<Customer>,
}

impl EditInvoicePage {
    pub const TITLE: &'static str = "Edit Invoice";

    pub fn render(&self) -> String {
        let body = format!(
            "<main>{}{}</main>",
            render::render_breadcrumbs(&self.breadcrumbs),
            render::render_edit_form(&self.invoice, &self.customers),
        );
        render::render_document(Some(Self::TITLE), &body)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateInvoicePage {
    pub breadcrumbs: Vec<Breadcrumb>,
    pub customers: Vec<Customer>,
}

impl CreateInvoicePage {
    pub const TITLE: &'static str = "Create Invoice";

    pub fn render(&self) -> String {
        let body = format!(
            "<main>{}{}</main>",
            render::render_breadcrumbs(&self.breadcrumbs),
            render::render_create_form(&self.customers),
        );
        render::render_document(Some(Self::TITLE), &body)
    }
}

/// Load the edit page for `id`.
///
/// The invoice and the customer list are fetched concurrently; the first
/// collaborator failure wins. An absent invoice yields
/// [`PageError::NotFound`].
pub async fn load_edit_page(
    data: &dyn InvoiceData,
    id: &InvoiceId,
) -> Result<EditInvoicePage, PageError> {
    let (invoice, customers) =
        tokio::try_join!(data.fetch_invoice_by_id(id), data.fetch_customers())?;

    let Some(invoice) = invoice else {
        tracing::debug!(invoice_id = %id, "invoice not found");
        return Err(PageError::NotFound);
    };

    tracing::debug!(invoice_id = %id, customers = customers.len(), "edit page loaded");
    Ok(EditInvoicePage {
        breadcrumbs: edit_trail(id),
        invoice,
        customers,
    })
}

/// Load the create page. Only the customer list is needed.
pub async fn load_create_page(data: &dyn InvoiceData) -> Result<CreateInvoicePage, PageError> {
    let customers = data.fetch_customers().await?;

    tracing::debug!(customers = customers.len(), "create page loaded");
    Ok(CreateInvoicePage {
        breadcrumbs: create_trail(),
        customers,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::Duration;

    use chrono::NaiveDate;
    use invoicedash_core::CustomerId;
    use invoicedash_infra::DataError;
    use invoicedash_invoicing::InvoiceStatus;
    use proptest::prelude::*;
    use tokio::sync::Barrier;
    use tokio::time::timeout;

    /// Collaborator double that counts calls and can be told to fail.
    #[derive(Default)]
    struct RecordingData {
        invoice: Option<Invoice>,
        customers: Vec<Customer>,
        fail_customers: bool,
        invoice_calls: AtomicUsize,
        customer_calls: AtomicUsize,
    }

    #[async_trait::async_trait]
    impl InvoiceData for RecordingData {
        async fn fetch_invoice_by_id(&self, id: &InvoiceId) -> Result<Option<Invoice>, DataError> {
            self.invoice_calls.fetch_add(1, Ordering::SeqCst);
            Ok(self.invoice.clone().filter(|i| &i.id == id))
        }

        async fn fetch_customers(&self) -> Result<Vec<Customer>, DataError> {
            self.customer_calls.fetch_add(1, Ordering::SeqCst);
            if self.fail_customers {
                return Err(DataError::Unavailable("customers offline".into()));
            }
            Ok(self.customers.clone())
        }
    }

    fn id(raw: &str) -> InvoiceId {
        InvoiceId::parse(raw).unwrap()
    }

    fn customers() -> Vec<Customer> {
        vec![
            Customer::new(CustomerId::parse("c-1").unwrap(), "Amy Burns"),
            Customer::new(CustomerId::parse("c-2").unwrap(), "Lee Robinson"),
        ]
    }

    fn invoice(raw_id: &str) -> Invoice {
        Invoice {
            id: id(raw_id),
            customer_id: CustomerId::parse("c-2").unwrap(),
            amount: 44800,
            status: InvoiceStatus::Pending,
            date: NaiveDate::from_ymd_opt(2023, 8, 19).unwrap(),
        }
    }

    #[tokio::test]
    async fn edit_page_carries_invoice_and_all_customers() {
        let data = RecordingData {
            invoice: Some(invoice("42")),
            customers: customers(),
            ..Default::default()
        };

        let page = load_edit_page(&data, &id("42")).await.unwrap();

        assert_eq!(page.invoice, invoice("42"));
        assert_eq!(page.invoice.id.as_str(), "42");
        assert_eq!(page.customers, customers());
        assert_eq!(data.invoice_calls.load(Ordering::SeqCst), 1);
        assert_eq!(data.customer_calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn absent_invoice_signals_not_found() {
        let data = RecordingData {
            invoice: Some(invoice("42")),
            customers: customers(),
            ..Default::default()
        };

        let err = load_edit_page(&data, &id("missing-99")).await.unwrap_err();
        assert!(matches!(err, PageError::NotFound));
        assert_eq!(data.invoice_calls.load(Ordering::SeqCst), 1);
        assert_eq!(data.customer_calls.load(Ordering::SeqCst), 1);
    }

    /// Collaborator whose two reads only complete once both are in flight.
    struct RendezvousData {
        barrier: Barrier,
        invoice: Option<Invoice>,
        customer_calls: AtomicUsize,
    }

    impl RendezvousData {
        fn new(invoice: Option<Invoice>) -> Self {
            Self {
                barrier: Barrier::new(2),
                invoice,
                customer_calls: AtomicUsize::new(0),
            }
        }
    }

    #[async_trait::async_trait]
    impl InvoiceData for RendezvousData {
        async fn fetch_invoice_by_id(&self, id: &InvoiceId) -> Result<Option<Invoice>, DataError> {
            self.barrier.wait().await;
            Ok(self.invoice.clone().filter(|i| &i.id == id))
        }

        async fn fetch_customers(&self) -> Result<Vec<Customer>, DataError> {
            self.customer_calls.fetch_add(1, Ordering::SeqCst);
            self.barrier.wait().await;
            Ok(customers())
        }
    }

    #[tokio::test]
    async fn edit_page_reads_run_concurrently() {
        let data = RendezvousData::new(Some(invoice("42")));

        let page = timeout(Duration::from_secs(2), load_edit_page(&data, &id("42")))
            .await
            .expect("invoice and customer reads must be in flight together")
            .unwrap();

        assert_eq!(page.invoice.id.as_str(), "42");
        assert_eq!(page.customers, customers());
    }

    #[tokio::test]
    async fn not_found_still_waits_for_customer_read() {
        let data = RendezvousData::new(None);

        let err = timeout(Duration::from_secs(2), load_edit_page(&data, &id("missing-99")))
            .await
            .expect("invoice and customer reads must be in flight together")
            .unwrap_err();

        assert!(matches!(err, PageError::NotFound));
        assert_eq!(data.customer_calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn edit_page_breadcrumbs_are_fixed() {
        let data = RecordingData {
            invoice: Some(invoice("42")),
            ..Default::default()
        };

        let page = load_edit_page(&data, &id("42")).await.unwrap();
        assert_eq!(
            page.breadcrumbs,
            vec![
                Breadcrumb {
                    label: "Invoices".into(),
                    href: "/dashboard/invoices".into(),
                    active: false,
                },
                Breadcrumb {
                    label: "Edit Invoice".into(),
                    href: "/dashboard/invoices/42/edit".into(),
                    active: true,
                },
            ]
        );
    }

    #[tokio::test]
    async fn edit_page_is_idempotent() {
        let data = RecordingData {
            invoice: Some(invoice("42")),
            customers: customers(),
            ..Default::default()
        };

        let first = load_edit_page(&data, &id("42")).await.unwrap();
        let second = load_edit_page(&data, &id("42")).await.unwrap();
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn collaborator_failure_propagates_as_data_error() {
        let data = RecordingData {
            invoice: Some(invoice("42")),
            fail_customers: true,
            ..Default::default()
        };

        let err = load_edit_page(&data, &id("42")).await.unwrap_err();
        assert!(matches!(err, PageError::Data(DataError::Unavailable(_))));
    }

    #[tokio::test]
    async fn create_page_never_looks_up_an_invoice() {
        let data = RecordingData {
            customers: customers(),
            ..Default::default()
        };

        let page = load_create_page(&data).await.unwrap();

        assert_eq!(page.customers, customers());
        assert_eq!(page.breadcrumbs, create_trail());
        assert_eq!(data.invoice_calls.load(Ordering::SeqCst), 0);
        assert_eq!(data.customer_calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn create_trail_is_fixed() {
        assert_eq!(
            create_trail(),
            vec![
                Breadcrumb::link("Invoices", "/dashboard/invoices"),
                Breadcrumb::current("Create Invoice", "/dashboard/invoices/create"),
            ]
        );
    }

    #[test]
    fn rendered_edit_page_contains_trail_and_form() {
        let page = EditInvoicePage {
            breadcrumbs: edit_trail(&id("42")),
            invoice: invoice("42"),
            customers: customers(),
        };
        let html = page.render();

        assert!(html.contains("<title>Edit Invoice | Acme Dashboard</title>"));
        assert!(html.contains(r#"<li aria-current="page" class="active">Edit Invoice</li>"#));
        assert!(html.contains(r#"action="/dashboard/invoices/42""#));
        assert!(html.find("Breadcrumb").unwrap() < html.find("<form").unwrap());
    }

    proptest! {
        #![proptest_config(ProptestConfig {
            cases: 256,
            ..ProptestConfig::default()
        })]

        /// Property: the edit trail is always two entries, list first, edit page active.
        #[test]
        fn edit_trail_shape(raw in "[A-Za-z0-9-]{1,36}") {
            let trail = edit_trail(&id(&raw));
            prop_assert_eq!(trail.len(), 2);
            prop_assert_eq!(&trail[0], &Breadcrumb::link("Invoices", "/dashboard/invoices"));
            prop_assert_eq!(trail[1].label.as_str(), "Edit Invoice");
            prop_assert_eq!(trail[1].href.clone(), format!("/dashboard/invoices/{raw}/edit"));
            prop_assert!(trail[1].active);
        }
    }
}
