//! Direct-drawing backend.
//!
//! Places the same layout content at absolute millimeter coordinates on an
//! A4 page using the printpdf canvas. Column positions and vertical steps
//! live here; everything placed comes preformatted from the layout, so this
//! backend can never disagree with the HTML path on content.

use std::io::BufWriter;

use printpdf::{
    BuiltinFont, IndirectFontRef, Line, Mm, PdfDocument, PdfDocumentReference, PdfLayerReference,
    Point,
};

use super::layout::{
    DocumentLayout, LogoArt, RecipientBlock, ACCOUNT_DETAILS, COMPANY_ADDRESS, COMPANY_EMAIL,
    COMPANY_NAME, COMPANY_PHONE, DISCLAIMER, FOOTER_TEXT, LOGO_PLACEHOLDER, PAGE_MARGIN_MM,
    RECIPIENT_UNAVAILABLE, SIGNATURE_CAPTION, SIGNATURE_LINE,
};
use super::{PdfRenderer, RenderError};

const PAGE_WIDTH: f32 = 210.0;
const PAGE_HEIGHT: f32 = 297.0;
const LEFT: f32 = PAGE_MARGIN_MM;
const RIGHT: f32 = PAGE_WIDTH - PAGE_MARGIN_MM;
const BOTTOM: f32 = 18.0;
const TOP: f32 = PAGE_HEIGHT - PAGE_MARGIN_MM;

// Item table column anchors.
const COL_DESCRIPTION: f32 = LEFT;
const COL_CARAT: f32 = 72.0;
const COL_COLOR: f32 = 88.0;
const COL_CLARITY: f32 = 100.0;
const COL_LAB: f32 = 114.0;
const COL_REPORT: f32 = 128.0;
const COL_PRICE: f32 = 155.0;
const COL_TOTAL: f32 = 178.0;

// Totals block anchors.
const COL_TOTAL_LABEL: f32 = 130.0;
const COL_TOTAL_VALUE: f32 = 168.0;

pub struct DrawRenderer;

/// Top-down cursor over the current page; opens a fresh page when a section
/// would cross the bottom margin.
struct Cursor<'a> {
    doc: &'a PdfDocumentReference,
    layer: PdfLayerReference,
    y: f32,
}

impl<'a> Cursor<'a> {
    fn ensure(&mut self, needed: f32) {
        if self.y - needed < BOTTOM {
            let (page, layer) = self.doc.add_page(Mm(PAGE_WIDTH), Mm(PAGE_HEIGHT), "Layer 1");
            self.layer = self.doc.get_page(page).get_layer(layer);
            self.y = TOP;
        }
    }

    fn advance(&mut self, dy: f32) {
        self.y -= dy;
    }

    fn text(&self, value: &str, size: f32, x: f32, font: &IndirectFontRef) {
        self.layer.use_text(value, size, Mm(x), Mm(self.y), font);
    }

    fn hline(&self, x1: f32, x2: f32) {
        let line = Line {
            points: vec![
                (Point::new(Mm(x1), Mm(self.y)), false),
                (Point::new(Mm(x2), Mm(self.y)), false),
            ],
            is_closed: false,
        };
        self.layer.add_line(line);
    }
}

impl PdfRenderer for DrawRenderer {
    fn name(&self) -> &'static str {
        "draw"
    }

    fn render(&self, layout: &DocumentLayout) -> Result<Vec<u8>, RenderError> {
        let (doc, page1, layer1) = PdfDocument::new(
            &layout.document_number,
            Mm(PAGE_WIDTH),
            Mm(PAGE_HEIGHT),
            "Layer 1",
        );
        let font = doc
            .add_builtin_font(BuiltinFont::Helvetica)
            .map_err(|e| RenderError::Draw(e.to_string()))?;
        let font_bold = doc
            .add_builtin_font(BuiltinFont::HelveticaBold)
            .map_err(|e| RenderError::Draw(e.to_string()))?;
        let font_oblique = doc
            .add_builtin_font(BuiltinFont::HelveticaOblique)
            .map_err(|e| RenderError::Draw(e.to_string()))?;

        let mut cur = Cursor {
            doc: &doc,
            layer: doc.get_page(page1).get_layer(layer1),
            y: TOP - 6.0,
        };

        // Logo and company address block
        match &layout.logo {
            LogoArt::Image(_) => cur.text(COMPANY_NAME, 16.0, LEFT, &font_bold),
            LogoArt::Placeholder => cur.text(LOGO_PLACEHOLDER, 12.0, LEFT, &font_bold),
        }
        cur.text(COMPANY_NAME, 10.0, 140.0, &font_bold);
        for line in COMPANY_ADDRESS {
            cur.advance(4.2);
            cur.text(line, 8.0, 140.0, &font);
        }
        cur.advance(4.2);
        cur.text(COMPANY_PHONE, 8.0, 140.0, &font);
        cur.advance(4.2);
        cur.text(COMPANY_EMAIL, 8.0, 140.0, &font);

        // Number and dates
        cur.advance(10.0);
        cur.text(
            &format!("{} No: {}", layout.title, layout.document_number),
            10.0,
            LEFT,
            &font_bold,
        );
        cur.text(&format!("Date: {}", layout.date), 9.0, 140.0, &font);
        cur.advance(4.5);
        cur.text(&format!("Due Date: {}", layout.due_date), 9.0, 140.0, &font);

        // Recipient block
        cur.advance(9.0);
        cur.text("BILL TO", 7.5, LEFT, &font_bold);
        cur.advance(4.5);
        match &layout.recipient {
            RecipientBlock::Resolved {
                company_name,
                lines,
            } => {
                cur.text(company_name, 10.0, LEFT, &font_bold);
                for line in lines {
                    cur.advance(4.2);
                    cur.text(line, 9.0, LEFT, &font);
                }
            }
            RecipientBlock::Unavailable => {
                cur.text(RECIPIENT_UNAVAILABLE, 9.0, LEFT, &font_oblique);
            }
        }

        // Section title
        cur.advance(11.0);
        cur.text(layout.title, 15.0, 88.0, &font_bold);

        if let Some(ref description) = layout.description {
            cur.advance(6.0);
            cur.text(description, 8.5, LEFT, &font);
        }

        // Item table
        cur.advance(8.0);
        cur.text("DESCRIPTION", 7.5, COL_DESCRIPTION, &font_bold);
        cur.text("CARAT", 7.5, COL_CARAT, &font_bold);
        cur.text("COLOR", 7.5, COL_COLOR, &font_bold);
        cur.text("CLARITY", 7.5, COL_CLARITY, &font_bold);
        cur.text("LAB", 7.5, COL_LAB, &font_bold);
        cur.text("REPORT NO", 7.5, COL_REPORT, &font_bold);
        cur.text("PRICE/CT", 7.5, COL_PRICE, &font_bold);
        cur.text("TOTAL", 7.5, COL_TOTAL, &font_bold);
        cur.advance(2.0);
        cur.hline(LEFT, RIGHT);

        for row in &layout.rows {
            cur.ensure(12.0);
            cur.advance(5.5);
            cur.text(&row.description, 8.5, COL_DESCRIPTION, &font);
            cur.text(&row.carat, 8.5, COL_CARAT, &font);
            cur.text(&row.color, 8.5, COL_COLOR, &font);
            cur.text(&row.clarity, 8.5, COL_CLARITY, &font);
            cur.text(&row.lab, 8.5, COL_LAB, &font);
            cur.text(&row.report_no, 8.5, COL_REPORT, &font);
            cur.text(&row.price_per_carat, 8.5, COL_PRICE, &font);
            cur.text(&row.line_total, 8.5, COL_TOTAL, &font);
        }

        cur.advance(2.5);
        cur.hline(LEFT, RIGHT);
        cur.advance(5.0);
        cur.text("Total", 9.0, COL_DESCRIPTION, &font_bold);
        cur.text(&layout.total_carat, 9.0, COL_CARAT, &font_bold);
        cur.text(&layout.subtotal, 9.0, COL_TOTAL, &font_bold);

        // Account details (left) and computed totals (right)
        cur.ensure(55.0);
        cur.advance(10.0);
        let details_top = cur.y;
        cur.text("ACCOUNT DETAILS", 7.5, LEFT, &font_bold);
        for line in ACCOUNT_DETAILS {
            cur.advance(4.5);
            cur.text(line, 8.5, LEFT, &font);
        }
        let details_bottom = cur.y;

        cur.y = details_top;
        cur.text("Subtotal", 9.0, COL_TOTAL_LABEL, &font);
        cur.text(&layout.subtotal, 9.0, COL_TOTAL_VALUE, &font);
        for adjustment in &layout.adjustments {
            cur.advance(4.8);
            cur.text(adjustment.label, 9.0, COL_TOTAL_LABEL, &font);
            cur.text(&adjustment.value, 9.0, COL_TOTAL_VALUE, &font);
        }
        cur.advance(2.2);
        cur.hline(COL_TOTAL_LABEL, RIGHT);
        cur.advance(4.8);
        cur.text("Grand Total", 10.0, COL_TOTAL_LABEL, &font_bold);
        cur.text(&layout.grand_total, 10.0, COL_TOTAL_VALUE, &font_bold);

        cur.y = cur.y.min(details_bottom);

        // Amount in words
        cur.advance(8.0);
        cur.text(&layout.amount_in_words, 9.0, LEFT, &font_oblique);

        // Disclaimer, wrapped to the printable width
        cur.advance(8.0);
        for line in wrap(DISCLAIMER, 110) {
            cur.ensure(4.0);
            cur.text(&line, 7.5, LEFT, &font);
            cur.advance(3.6);
        }

        // Signature block
        cur.ensure(26.0);
        cur.advance(14.0);
        cur.hline(138.0, RIGHT);
        cur.advance(4.5);
        cur.text(SIGNATURE_LINE, 9.0, 140.0, &font);
        cur.advance(4.2);
        cur.text(SIGNATURE_CAPTION, 8.0, 140.0, &font);

        // Legal footer
        cur.ensure(12.0);
        cur.advance(10.0);
        cur.text(FOOTER_TEXT, 7.5, 40.0, &font);

        let mut writer = BufWriter::new(Vec::<u8>::new());
        doc.save(&mut writer)
            .map_err(|e| RenderError::Draw(e.to_string()))?;
        writer
            .into_inner()
            .map_err(|e| RenderError::Draw(e.to_string()))
    }
}

/// Greedy word wrap at a character budget; builtin fonts have no metrics
/// table here, so the budget is calibrated for 7.5pt Helvetica across the
/// printable width.
fn wrap(text: &str, max_chars: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();
    for word in text.split_whitespace() {
        if !current.is_empty() && current.len() + 1 + word.len() > max_chars {
            lines.push(std::mem::take(&mut current));
        }
        if !current.is_empty() {
            current.push(' ');
        }
        current.push_str(word);
    }
    if !current.is_empty() {
        lines.push(current);
    }
    lines
}
