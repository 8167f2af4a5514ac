use chrono::NaiveDate;
use crown_diamonds_server::document::{next_number, DocumentKind};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn test_invoice_number_increments_by_one() {
    let next = next_number(
        DocumentKind::Invoice,
        Some("CD-0004A/0101"),
        date(2026, 8, 7),
    );
    assert_eq!(next, "CD-0005A/0708");
}

#[test]
fn test_invoice_suffix_tracks_issue_date() {
    let next = next_number(
        DocumentKind::Invoice,
        Some("CD-0099A/3012"),
        date(2026, 1, 2),
    );
    assert_eq!(next, "CD-0100A/0201");
}

#[test]
fn test_seed_without_prior_number() {
    assert_eq!(
        next_number(DocumentKind::Invoice, None, date(2026, 8, 7)),
        "CD-0001A/0708"
    );
    assert_eq!(
        next_number(DocumentKind::Memo, None, date(2026, 8, 7)),
        "MM-0001"
    );
}

#[test]
fn test_memo_numbers_have_no_date_suffix() {
    assert_eq!(
        next_number(DocumentKind::Memo, Some("MM-0041"), date(2026, 8, 7)),
        "MM-0042"
    );
}

#[test]
fn test_zero_padding_width_is_preserved() {
    assert_eq!(
        next_number(DocumentKind::Memo, Some("MM-000007"), date(2026, 8, 7)),
        "MM-000008"
    );
}

#[test]
fn test_counter_widens_past_padding() {
    assert_eq!(
        next_number(DocumentKind::Memo, Some("MM-9999"), date(2026, 8, 7)),
        "MM-10000"
    );
}

#[test]
fn test_determinism() {
    let a = next_number(DocumentKind::Invoice, Some("CD-0010A/0101"), date(2026, 5, 5));
    let b = next_number(DocumentKind::Invoice, Some("CD-0010A/0101"), date(2026, 5, 5));
    assert_eq!(a, b);
}
