//! Invoice create/edit forms.

use std::fmt::Write;

use invoicedash_core::CustomerId;
use invoicedash_invoicing::{Customer, Invoice, InvoiceStatus};

use super::escape_html;

/// Blank form for a new invoice; posts to the invoice collection.
pub fn render_create_form(customers: &[Customer]) -> String {
    render_form("/dashboard/invoices", "Create Invoice", customers, None)
}

/// Form prefilled from `invoice`; posts to the invoice's own URL.
pub fn render_edit_form(invoice: &Invoice, customers: &[Customer]) -> String {
    let action = format!("/dashboard/invoices/{}", invoice.id);
    render_form(&action, "Edit Invoice", customers, Some(invoice))
}

fn render_form(
    action: &str,
    submit_label: &str,
    customers: &[Customer],
    invoice: Option<&Invoice>,
) -> String {
    let mut html = String::new();
    let _ = write!(
        html,
        r#"<form class="invoice-form" method="post" action="{}">"#,
        escape_html(action)
    );

    html.push_str(&customer_select(customers, invoice.map(|i| &i.customer_id)));

    let amount = invoice.map(Invoice::amount_in_dollars).unwrap_or_default();
    let _ = write!(
        html,
        concat!(
            r#"<div class="field"><label for="amount">Choose an amount</label>"#,
            r#"<input id="amount" name="amount" type="number" step="0.01" placeholder="Enter USD amount" value="{}">"#,
            "</div>"
        ),
        escape_html(&amount)
    );

    html.push_str(&status_radios(invoice.map(|i| i.status)));

    let _ = write!(
        html,
        concat!(
            r#"<div class="actions"><a href="/dashboard/invoices">Cancel</a>"#,
            r#"<button type="submit">{}</button></div>"#,
            "</form>"
        ),
        escape_html(submit_label)
    );
    html
}

fn customer_select(customers: &[Customer], selected: Option<&CustomerId>) -> String {
    let mut html = String::from(concat!(
        r#"<div class="field"><label for="customer">Choose customer</label>"#,
        r#"<select id="customer" name="customerId">"#
    ));

    let placeholder_selected = if selected.is_none() { " selected" } else { "" };
    let _ = write!(
        html,
        r#"<option value="" disabled{placeholder_selected}>Select a customer</option>"#
    );

    for customer in customers {
        let is_selected = if selected == Some(&customer.id) { " selected" } else { "" };
        let _ = write!(
            html,
            r#"<option value="{}"{}>{}</option>"#,
            escape_html(customer.id.as_str()),
            is_selected,
            escape_html(&customer.name)
        );
    }

    html.push_str("</select></div>");
    html
}

fn status_radios(current: Option<InvoiceStatus>) -> String {
    let mut html = String::from(r#"<fieldset class="field"><legend>Set the invoice status</legend>"#);
    for status in InvoiceStatus::ALL {
        let checked = if current == Some(status) { " checked" } else { "" };
        let _ = write!(
            html,
            r#"<label><input type="radio" name="status" value="{s}"{checked}> {label}</label>"#,
            s = status.as_str(),
            label = match status {
                InvoiceStatus::Pending => "Pending",
                InvoiceStatus::Paid => "Paid",
            },
        );
    }
    html.push_str("</fieldset>");
    html
}
