//! The single layout-description model consumed by every backend.
//!
//! All strings are resolved and formatted here, once per render. Backends
//! only place them; none of them recompute money, dates or address lines.
//! Section ordering is fixed: logo, company block, number/date header,
//! recipient block, title, item table, account details, totals,
//! amount-in-words, disclaimer, signature, footer.

use std::fs;

use crate::config::RendererConfig;
use crate::document::models::Document;
use crate::document::money::format_usd;
use crate::recipient::model::Recipient;

pub const COMPANY_NAME: &str = "Crown Diamonds LLC";
pub const COMPANY_ADDRESS: [&str; 3] = [
    "20 W 47th St, Suite 402",
    "New York, NY 10036",
    "United States",
];
pub const COMPANY_PHONE: &str = "+1 (212) 555-0147";
pub const COMPANY_EMAIL: &str = "accounts@crowndiamonds.example";

pub const ACCOUNT_DETAILS: [&str; 4] = [
    "Bank: First Meridian Bank, New York",
    "Account Name: Crown Diamonds LLC",
    "Account No: 4821 7730 19",
    "SWIFT: FMRDUS33",
];

pub const DISCLAIMER: &str = "The goods described herein remain the property of \
Crown Diamonds LLC until paid for in full. Any claim regarding weight, quality or \
description must be raised within 3 days of receipt. Certificates accompany the \
stones and form part of this document.";

pub const FOOTER_TEXT: &str =
    "Crown Diamonds LLC is a registered dealer in natural diamonds. All prices in USD.";

pub const SIGNATURE_LINE: &str = "For Crown Diamonds LLC";
pub const SIGNATURE_CAPTION: &str = "Authorized Signatory";

/// Marker rendered in place of the logo when the asset cannot be read.
pub const LOGO_PLACEHOLDER: &str = "[ CROWN DIAMONDS ]";

/// Message rendered in the address block when the recipient cannot be
/// resolved; the block is never silently omitted.
pub const RECIPIENT_UNAVAILABLE: &str = "Recipient details not available";

/// Page margin shared by the CSS `@page` rule and the draw backend.
pub const PAGE_MARGIN_MM: f32 = 12.0;

/// Logo asset, loaded best-effort.
#[derive(Debug, Clone)]
pub enum LogoArt {
    Image(Vec<u8>),
    Placeholder,
}

/// Bill-to block, degraded when the directory lookup failed.
#[derive(Debug, Clone)]
pub enum RecipientBlock {
    Resolved {
        company_name: String,
        lines: Vec<String>,
    },
    Unavailable,
}

/// One preformatted row of the line-item table.
#[derive(Debug, Clone)]
pub struct TableRow {
    pub description: String,
    pub carat: String,
    pub color: String,
    pub clarity: String,
    pub lab: String,
    pub report_no: String,
    pub price_per_carat: String,
    pub line_total: String,
}

/// One labeled row in the computed-totals block.
#[derive(Debug, Clone)]
pub struct TotalRow {
    pub label: &'static str,
    pub value: String,
}

/// Everything a backend needs to place on the page.
#[derive(Debug, Clone)]
pub struct DocumentLayout {
    pub title: &'static str,
    pub document_number: String,
    pub date: String,
    pub due_date: String,
    pub description: Option<String>,
    pub logo: LogoArt,
    pub recipient: RecipientBlock,
    pub rows: Vec<TableRow>,
    /// Total carat weight shown in the table footer.
    pub total_carat: String,
    pub subtotal: String,
    pub adjustments: Vec<TotalRow>,
    pub grand_total: String,
    pub amount_in_words: String,
}

impl DocumentLayout {
    /// Resolve a snapshot into placeable content. `recipient` is `None` when
    /// the directory lookup failed; the logo read is best-effort.
    pub fn build(
        document: &Document,
        recipient: Option<&Recipient>,
        config: &RendererConfig,
    ) -> Self {
        let logo = match fs::read(config.logo_path()) {
            Ok(bytes) => LogoArt::Image(bytes),
            Err(e) => {
                log::warn!(
                    "logo asset {} unreadable ({}), rendering placeholder",
                    config.logo_path().display(),
                    e
                );
                LogoArt::Placeholder
            }
        };

        let recipient_block = match recipient {
            Some(r) => RecipientBlock::Resolved {
                company_name: r.company_name.clone(),
                lines: r.address_lines(),
            },
            None => RecipientBlock::Unavailable,
        };

        let rows = document
            .items
            .iter()
            .map(|item| TableRow {
                description: item.description.clone(),
                carat: format!("{:.2}", item.carat),
                color: item.color.clone(),
                clarity: item.clarity.clone(),
                lab: item.lab.clone(),
                report_no: item.report_no.clone(),
                price_per_carat: format_usd(item.price_per_carat),
                line_total: format_usd(item.line_total()),
            })
            .collect();

        let total_carat: rust_decimal::Decimal =
            document.items.iter().map(|item| item.carat).sum();

        let totals = document.totals();
        let adjustments = vec![
            TotalRow {
                label: "Discount",
                value: negated(document.discount),
            },
            TotalRow {
                label: "Collected Payment",
                value: negated(document.collected_payment),
            },
            TotalRow {
                label: "Shipping",
                value: format_usd(document.shipment_cost),
            },
        ];

        Self {
            title: document.kind.title(),
            document_number: document.document_number.clone(),
            date: document.date.format("%B %-d, %Y").to_string(),
            due_date: document.due_date.format("%B %-d, %Y").to_string(),
            description: document.description.clone(),
            logo,
            recipient: recipient_block,
            rows,
            total_carat: format!("{:.2}", total_carat),
            subtotal: format_usd(totals.subtotal),
            adjustments,
            grand_total: format_usd(totals.grand_total),
            amount_in_words: totals.amount_in_words,
        }
    }
}

fn negated(value: rust_decimal::Decimal) -> String {
    if value.is_zero() {
        format_usd(value)
    } else {
        format!("-{}", format_usd(value))
    }
}
