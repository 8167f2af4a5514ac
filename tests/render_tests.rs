use std::time::Duration;

use chrono::{NaiveDate, Utc};
use crown_diamonds_server::config::RendererConfig;
use crown_diamonds_server::document::{Document, DocumentKind, LineItem};
use crown_diamonds_server::recipient::Recipient;
use crown_diamonds_server::render::html::render_html;
use crown_diamonds_server::render::layout::{
    DocumentLayout, LogoArt, RecipientBlock, LOGO_PLACEHOLDER, RECIPIENT_UNAVAILABLE,
};
use crown_diamonds_server::render::{ChromiumRenderer, DrawRenderer, PdfRenderer, RenderError};
use rust_decimal_macros::dec;
use uuid::Uuid;

fn scenario_document() -> Document {
    let date = NaiveDate::from_ymd_opt(2026, 8, 7).unwrap();
    Document {
        id: Uuid::new_v4(),
        kind: DocumentKind::Invoice,
        document_number: "CD-0005A/0708".to_string(),
        date,
        due_date: Document::due_date_for(date, 30),
        payment_terms_days: 30,
        recipient_id: Uuid::new_v4(),
        description: Some("Memo goods for approval".to_string()),
        shipment_cost: dec!(25),
        discount: dec!(50),
        collected_payment: dec!(0),
        items: vec![
            LineItem {
                description: "Round Brilliant Cut".to_string(),
                carat: dec!(1.00),
                color: "F".to_string(),
                clarity: "VS1".to_string(),
                lab: "GIA".to_string(),
                report_no: "2141234567".to_string(),
                price_per_carat: dec!(500.00),
            },
            LineItem {
                description: "Princess Cut".to_string(),
                carat: dec!(0.50),
                color: "G".to_string(),
                clarity: "VS2".to_string(),
                lab: "IGI".to_string(),
                report_no: "558123456".to_string(),
                price_per_carat: dec!(1200.00),
            },
        ],
        created_at: Utc::now(),
        updated_at: Utc::now(),
    }
}

fn scenario_recipient() -> Recipient {
    Recipient {
        id: Uuid::new_v4(),
        company_name: "Brilliant Gems Inc.".to_string(),
        address_line1: "580 5th Ave".to_string(),
        address_line2: Some("Suite 1200".to_string()),
        city: "New York".to_string(),
        state: "NY".to_string(),
        country: "United States".to_string(),
        postal_code: "10036".to_string(),
    }
}

/// Config whose asset root holds no logo.
fn empty_asset_config() -> (tempfile::TempDir, RendererConfig) {
    let dir = tempfile::tempdir().unwrap();
    let config = RendererConfig {
        asset_root: dir.path().to_path_buf(),
        ..RendererConfig::default()
    };
    (dir, config)
}

#[test]
fn test_layout_resolves_scenario_totals() {
    let (_dir, config) = empty_asset_config();
    let document = scenario_document();
    let recipient = scenario_recipient();

    let layout = DocumentLayout::build(&document, Some(&recipient), &config);

    assert_eq!(layout.subtotal, "$1,100.00");
    assert_eq!(layout.grand_total, "$1,075.00");
    assert_eq!(
        layout.amount_in_words,
        "One Thousand Seventy Five Dollars Only"
    );
    assert_eq!(layout.rows.len(), 2);
    assert_eq!(layout.rows[0].line_total, "$500.00");
    assert_eq!(layout.rows[1].line_total, "$600.00");
    assert_eq!(layout.total_carat, "1.50");
}

#[test]
fn test_missing_logo_degrades_to_placeholder() {
    let (_dir, config) = empty_asset_config();
    let document = scenario_document();
    let recipient = scenario_recipient();

    let layout = DocumentLayout::build(&document, Some(&recipient), &config);
    assert!(matches!(layout.logo, LogoArt::Placeholder));

    let html = render_html(&layout);
    assert!(html.contains(LOGO_PLACEHOLDER));
}

#[test]
fn test_present_logo_is_embedded_inline() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("logo.png"), b"not-really-a-png").unwrap();
    let config = RendererConfig {
        asset_root: dir.path().to_path_buf(),
        ..RendererConfig::default()
    };

    let layout = DocumentLayout::build(&scenario_document(), Some(&scenario_recipient()), &config);
    assert!(matches!(layout.logo, LogoArt::Image(_)));

    let html = render_html(&layout);
    assert!(html.contains("data:image/png;base64,"));
    assert!(!html.contains(LOGO_PLACEHOLDER));
}

#[test]
fn test_unresolved_recipient_renders_explicit_message() {
    let (_dir, config) = empty_asset_config();
    let layout = DocumentLayout::build(&scenario_document(), None, &config);
    assert!(matches!(layout.recipient, RecipientBlock::Unavailable));

    let html = render_html(&layout);
    assert!(html.contains(RECIPIENT_UNAVAILABLE));
}

#[test]
fn test_html_is_self_contained_and_print_ready() {
    let (_dir, config) = empty_asset_config();
    let document = scenario_document();
    let layout = DocumentLayout::build(&document, Some(&scenario_recipient()), &config);

    let html = render_html(&layout);
    assert!(html.starts_with("<!DOCTYPE html>"));
    assert!(html.contains("@page { size: A4; margin: 12mm; }"));
    assert!(!html.contains("<link"));
    assert!(html.contains("<title>CD-0005A/0708</title>"));
    assert!(html.contains("CD-0005A/0708"));
    assert!(html.contains("Brilliant Gems Inc."));
    assert!(html.contains("$1,075.00"));
}

#[test]
fn test_html_escapes_user_text() {
    let (_dir, config) = empty_asset_config();
    let mut document = scenario_document();
    document.items[0].description = "1.0ct <Pear> & \"Fancy\"".to_string();

    let layout = DocumentLayout::build(&document, Some(&scenario_recipient()), &config);
    let html = render_html(&layout);
    assert!(html.contains("1.0ct &lt;Pear&gt; &amp; &quot;Fancy&quot;"));
    assert!(!html.contains("<Pear>"));
}

#[test]
fn test_draw_backend_produces_pdf_bytes() {
    let (_dir, config) = empty_asset_config();
    let layout = DocumentLayout::build(&scenario_document(), Some(&scenario_recipient()), &config);

    let bytes = DrawRenderer.render(&layout).unwrap();
    assert!(bytes.starts_with(b"%PDF"));
    assert!(bytes.len() > 1000);
}

#[test]
fn test_draw_backend_paginates_long_documents() {
    let (_dir, config) = empty_asset_config();
    let mut document = scenario_document();
    let template = document.items[0].clone();
    document.items = (0..60).map(|_| template.clone()).collect();

    let layout = DocumentLayout::build(&document, Some(&scenario_recipient()), &config);
    let bytes = DrawRenderer.render(&layout).unwrap();
    assert!(bytes.starts_with(b"%PDF"));
}

#[test]
fn test_backends_consume_identical_content() {
    // Both PDF paths place preformatted layout strings; agreement on the
    // number, item values and grand total follows from the shared layout.
    let (_dir, config) = empty_asset_config();
    let layout = DocumentLayout::build(&scenario_document(), Some(&scenario_recipient()), &config);

    let html = render_html(&layout);
    for row in &layout.rows {
        assert!(html.contains(&row.line_total));
        assert!(html.contains(&row.report_no));
    }
    assert!(html.contains(&layout.document_number));
    assert!(html.contains(&layout.grand_total));

    assert!(DrawRenderer.render(&layout).is_ok());
}

#[test]
fn test_chromium_launch_failure_is_distinguishable() {
    let (_dir, config) = empty_asset_config();
    let layout = DocumentLayout::build(&scenario_document(), Some(&scenario_recipient()), &config);

    let renderer = ChromiumRenderer::new(
        "definitely-not-an-installed-browser",
        Duration::from_secs(1),
    );
    assert_eq!(renderer.name(), "chromium");

    let err = renderer.render(&layout).unwrap_err();
    match err {
        RenderError::BrowserLaunch { binary, .. } => {
            assert_eq!(binary, "definitely-not-an-installed-browser");
        }
        other => panic!("expected BrowserLaunch, got {other:?}"),
    }
}
