//! HTML backend: a self-contained document with inline CSS only.
//!
//! The output prints to A4 through a standard browser dialog without margin
//! adjustment, and is byte-identical to what the chromium backend rasterizes,
//! so the two paths cannot disagree on content.

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;

use super::layout::{
    DocumentLayout, LogoArt, RecipientBlock, ACCOUNT_DETAILS, COMPANY_ADDRESS, COMPANY_EMAIL,
    COMPANY_NAME, COMPANY_PHONE, DISCLAIMER, FOOTER_TEXT, LOGO_PLACEHOLDER, PAGE_MARGIN_MM,
    RECIPIENT_UNAVAILABLE, SIGNATURE_CAPTION, SIGNATURE_LINE,
};

const STYLE: &str = r#"
  body { font-family: Helvetica, Arial, sans-serif; font-size: 10pt; color: #1a1a1a; margin: 0; }
  .header { display: flex; justify-content: space-between; align-items: flex-start; }
  .logo img { height: 18mm; }
  .logo-placeholder { font-size: 14pt; font-weight: bold; letter-spacing: 2px; border: 1px solid #1a1a1a; padding: 4px 10px; }
  .company { text-align: right; font-size: 9pt; line-height: 1.4; }
  .company .name { font-size: 11pt; font-weight: bold; }
  .meta { margin-top: 8mm; display: flex; justify-content: space-between; }
  .meta .number { font-weight: bold; }
  .bill-to { margin-top: 6mm; line-height: 1.4; }
  .bill-to .label { font-size: 8pt; text-transform: uppercase; color: #666; }
  .bill-to .missing { color: #a33; font-style: italic; }
  h1.title { font-size: 16pt; letter-spacing: 4px; text-align: center; margin: 8mm 0 4mm 0; }
  table.items { width: 100%; border-collapse: collapse; font-size: 9pt; }
  table.items th { border-bottom: 1.5px solid #1a1a1a; text-align: left; padding: 2mm 1mm; text-transform: uppercase; font-size: 8pt; }
  table.items td { border-bottom: 0.5px solid #ccc; padding: 2mm 1mm; }
  table.items .num { text-align: right; }
  table.items tfoot td { border-top: 1.5px solid #1a1a1a; border-bottom: none; font-weight: bold; }
  .lower { display: flex; justify-content: space-between; margin-top: 6mm; }
  .account { font-size: 8.5pt; line-height: 1.5; }
  .account .label { font-size: 8pt; text-transform: uppercase; color: #666; }
  table.totals { font-size: 9.5pt; min-width: 60mm; }
  table.totals td { padding: 1mm 2mm; }
  table.totals .num { text-align: right; }
  table.totals tr.grand td { border-top: 1.5px solid #1a1a1a; font-weight: bold; }
  .in-words { margin-top: 4mm; font-size: 9pt; font-style: italic; }
  .disclaimer { margin-top: 8mm; font-size: 7.5pt; color: #555; line-height: 1.4; }
  .signature { margin-top: 14mm; text-align: right; }
  .signature .line { border-top: 1px solid #1a1a1a; display: inline-block; padding-top: 1mm; min-width: 55mm; text-align: center; font-size: 9pt; }
  .footer { margin-top: 10mm; font-size: 7.5pt; text-align: center; color: #777; border-top: 0.5px solid #ccc; padding-top: 2mm; }
"#;

/// Render the layout to a complete HTML document string.
pub fn render_html(layout: &DocumentLayout) -> String {
    let logo_html = match &layout.logo {
        LogoArt::Image(bytes) => format!(
            r#"<img src="data:image/png;base64,{}" alt="{}">"#,
            BASE64.encode(bytes),
            COMPANY_NAME
        ),
        LogoArt::Placeholder => {
            format!(r#"<div class="logo-placeholder">{}</div>"#, LOGO_PLACEHOLDER)
        }
    };

    let company_html: String = COMPANY_ADDRESS
        .iter()
        .map(|line| format!("{}<br>", escape(line)))
        .collect();

    let bill_to_html = match &layout.recipient {
        RecipientBlock::Resolved {
            company_name,
            lines,
        } => {
            let address: String = lines
                .iter()
                .map(|line| format!("{}<br>", escape(line)))
                .collect();
            format!("<strong>{}</strong><br>{}", escape(company_name), address)
        }
        RecipientBlock::Unavailable => {
            format!(r#"<span class="missing">{}</span>"#, RECIPIENT_UNAVAILABLE)
        }
    };

    let rows_html: String = layout
        .rows
        .iter()
        .map(|row| {
            format!(
                r#"<tr>
              <td>{}</td>
              <td class="num">{}</td>
              <td>{}</td>
              <td>{}</td>
              <td>{}</td>
              <td>{}</td>
              <td class="num">{}</td>
              <td class="num">{}</td>
            </tr>"#,
                escape(&row.description),
                row.carat,
                escape(&row.color),
                escape(&row.clarity),
                escape(&row.lab),
                escape(&row.report_no),
                row.price_per_carat,
                row.line_total,
            )
        })
        .collect();

    let adjustments_html: String = layout
        .adjustments
        .iter()
        .map(|row| {
            format!(
                r#"<tr><td>{}</td><td class="num">{}</td></tr>"#,
                row.label, row.value
            )
        })
        .collect();

    let account_html: String = ACCOUNT_DETAILS
        .iter()
        .map(|line| format!("{}<br>", escape(line)))
        .collect();

    let description_html = match &layout.description {
        Some(text) => format!(r#"<p class="description">{}</p>"#, escape(text)),
        None => String::new(),
    };

    format!(
        r#"<!DOCTYPE html>
<html>
<head>
<meta charset="utf-8">
<title>{number}</title>
<style>
  @page {{ size: A4; margin: {margin}mm; }}
{style}</style>
</head>
<body>
  <div class="header">
    <div class="logo">{logo}</div>
    <div class="company">
      <div class="name">{company_name}</div>
      {company}
      {phone}<br>{email}
    </div>
  </div>
  <div class="meta">
    <div><span class="number">{title_case} No: {number}</span></div>
    <div>Date: {date}<br>Due Date: {due_date}</div>
  </div>
  <div class="bill-to">
    <div class="label">Bill To</div>
    {bill_to}
  </div>
  <h1 class="title">{title}</h1>
  {description}
  <table class="items">
    <thead>
      <tr>
        <th>Description</th><th class="num">Carat</th><th>Color</th><th>Clarity</th>
        <th>Lab</th><th>Report No</th><th class="num">Price/Ct</th><th class="num">Total</th>
      </tr>
    </thead>
    <tbody>
      {rows}
    </tbody>
    <tfoot>
      <tr>
        <td>Total</td><td class="num">{total_carat}</td>
        <td colspan="5"></td><td class="num">{subtotal}</td>
      </tr>
    </tfoot>
  </table>
  <div class="lower">
    <div class="account">
      <div class="label">Account Details</div>
      {account}
    </div>
    <table class="totals">
      <tr><td>Subtotal</td><td class="num">{subtotal}</td></tr>
      {adjustments}
      <tr class="grand"><td>Grand Total</td><td class="num">{grand_total}</td></tr>
    </table>
  </div>
  <div class="in-words">{amount_in_words}</div>
  <div class="disclaimer">{disclaimer}</div>
  <div class="signature">
    <span class="line">{signature}<br>{signature_caption}</span>
  </div>
  <div class="footer">{footer}</div>
</body>
</html>"#,
        number = escape(&layout.document_number),
        margin = PAGE_MARGIN_MM,
        style = STYLE,
        logo = logo_html,
        company_name = COMPANY_NAME,
        company = company_html,
        phone = COMPANY_PHONE,
        email = COMPANY_EMAIL,
        title_case = title_case(layout.title),
        date = layout.date,
        due_date = layout.due_date,
        bill_to = bill_to_html,
        title = layout.title,
        description = description_html,
        rows = rows_html,
        total_carat = layout.total_carat,
        subtotal = layout.subtotal,
        adjustments = adjustments_html,
        grand_total = layout.grand_total,
        account = account_html,
        amount_in_words = escape(&layout.amount_in_words),
        disclaimer = DISCLAIMER,
        signature = SIGNATURE_LINE,
        signature_caption = SIGNATURE_CAPTION,
        footer = FOOTER_TEXT,
    )
}

fn title_case(title: &str) -> String {
    let mut chars = title.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase(),
        None => String::new(),
    }
}

/// Escape user-supplied text for HTML interpolation.
fn escape(value: &str) -> String {
    value
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
