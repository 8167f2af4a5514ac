//! Core document models: invoice/memo snapshots and their derived totals.
//!
//! A `Document` is created as one unit (header + line items) and handed to
//! the renderers as an immutable snapshot. Totals are never stored; they are
//! recomputed from the items and adjustments on every read.

use chrono::{DateTime, Duration, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use super::money;

/// Discriminator for the two document flavors. Controls only the title text
/// and the numbering prefix; layout is identical between kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum DocumentKind {
    Invoice,
    Memo,
}

impl DocumentKind {
    pub fn title(&self) -> &'static str {
        match self {
            DocumentKind::Invoice => "INVOICE",
            DocumentKind::Memo => "MEMO",
        }
    }

    /// Numbering prefix, ahead of the sequential counter.
    pub fn prefix(&self) -> &'static str {
        match self {
            DocumentKind::Invoice => "CD",
            DocumentKind::Memo => "MM",
        }
    }
}

/// One diamond entry on a document.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct LineItem {
    #[schema(example = "Round Brilliant Cut")]
    pub description: String,
    #[schema(example = "1.02")]
    pub carat: Decimal,
    #[schema(example = "F")]
    pub color: String,
    #[schema(example = "VS1")]
    pub clarity: String,
    #[schema(example = "GIA")]
    pub lab: String,
    #[schema(example = "2141234567")]
    pub report_no: String,
    #[schema(example = "5400.00")]
    pub price_per_carat: Decimal,
}

impl LineItem {
    /// Derived line amount; never stored.
    pub fn line_total(&self) -> Decimal {
        money::line_total(self.carat, self.price_per_carat)
    }
}

/// Fully derived totals block, recomputed on every read.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct Totals {
    pub subtotal: Decimal,
    pub grand_total: Decimal,
    pub amount_in_words: String,
}

/// One invoice or memo snapshot.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct Document {
    pub id: Uuid,
    pub kind: DocumentKind,
    /// Sequential per kind, assigned at creation, immutable afterward.
    #[schema(example = "CD-0005A/0708")]
    pub document_number: String,
    pub date: NaiveDate,
    /// Always `date + payment_terms_days`.
    pub due_date: NaiveDate,
    pub payment_terms_days: i64,
    /// Resolved through the recipient directory at render time.
    pub recipient_id: Uuid,
    pub description: Option<String>,
    pub shipment_cost: Decimal,
    pub discount: Decimal,
    pub collected_payment: Decimal,
    pub items: Vec<LineItem>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Document {
    /// Due date derived from the issue date and payment terms.
    pub fn due_date_for(date: NaiveDate, payment_terms_days: i64) -> NaiveDate {
        date + Duration::days(payment_terms_days)
    }

    pub fn totals(&self) -> Totals {
        let subtotal = money::subtotal(&self.items);
        let grand_total = money::grand_total(
            &self.items,
            self.discount,
            self.collected_payment,
            self.shipment_cost,
        );
        Totals {
            subtotal,
            grand_total,
            amount_in_words: money::amount_in_words(grand_total),
        }
    }
}

/// Request body for creating a document. Header and items arrive together;
/// the document number is assigned server-side.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct CreateDocumentRequest {
    pub kind: DocumentKind,
    /// Issue date; defaults to today when omitted.
    pub date: Option<NaiveDate>,
    /// Defaults to 30 when omitted.
    pub payment_terms_days: Option<i64>,
    pub recipient_id: Uuid,
    pub description: Option<String>,
    pub shipment_cost: Option<Decimal>,
    pub discount: Option<Decimal>,
    pub collected_payment: Option<Decimal>,
    pub items: Vec<LineItem>,
}

/// Partial update. The document number and kind are immutable; the due date
/// is recomputed whenever the date or the terms change.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct UpdateDocumentRequest {
    pub date: Option<NaiveDate>,
    pub payment_terms_days: Option<i64>,
    pub recipient_id: Option<Uuid>,
    pub description: Option<String>,
    pub shipment_cost: Option<Decimal>,
    pub discount: Option<Decimal>,
    pub collected_payment: Option<Decimal>,
    pub items: Option<Vec<LineItem>>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn item(carat: Decimal, price: Decimal) -> LineItem {
        LineItem {
            description: "Round Brilliant Cut".to_string(),
            carat,
            color: "F".to_string(),
            clarity: "VS1".to_string(),
            lab: "GIA".to_string(),
            report_no: "2141234567".to_string(),
            price_per_carat: price,
        }
    }

    #[test]
    fn due_date_follows_payment_terms() {
        let date = NaiveDate::from_ymd_opt(2026, 8, 7).unwrap();
        assert_eq!(
            Document::due_date_for(date, 30),
            NaiveDate::from_ymd_opt(2026, 9, 6).unwrap()
        );
    }

    #[test]
    fn totals_apply_all_adjustments() {
        let doc = Document {
            id: Uuid::new_v4(),
            kind: DocumentKind::Invoice,
            document_number: "CD-0001A/0708".to_string(),
            date: NaiveDate::from_ymd_opt(2026, 8, 7).unwrap(),
            due_date: NaiveDate::from_ymd_opt(2026, 9, 6).unwrap(),
            payment_terms_days: 30,
            recipient_id: Uuid::new_v4(),
            description: None,
            shipment_cost: dec!(25),
            discount: dec!(50),
            collected_payment: dec!(0),
            items: vec![item(dec!(1.00), dec!(500.00)), item(dec!(0.50), dec!(1200.00))],
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };

        let totals = doc.totals();
        assert_eq!(totals.subtotal, dec!(1100.00));
        assert_eq!(totals.grand_total, dec!(1075.00));
    }
}
