use crown_diamonds_server::document::money::{
    amount_in_words, format_usd, grand_total, line_total, subtotal,
};
use crown_diamonds_server::document::LineItem;
use rust_decimal::Decimal;
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
fn test_line_total_is_exact() {
    assert_eq!(line_total(dec!(1.00), dec!(500.00)), dec!(500.00));
    assert_eq!(line_total(dec!(0.50), dec!(1200.00)), dec!(600.00));
    // No rounding at computation time; 2-place rounding happens at render.
    assert_eq!(line_total(dec!(0.33), dec!(101.01)), dec!(33.3333));
}

#[test]
fn test_grand_total_end_to_end_scenario() {
    let items = vec![item(dec!(1.00), dec!(500.00)), item(dec!(0.50), dec!(1200.00))];
    assert_eq!(subtotal(&items), dec!(1100.00));
    assert_eq!(
        grand_total(&items, dec!(50), dec!(0), dec!(25)),
        dec!(1075.00)
    );
}

#[test]
fn test_grand_total_is_linear_in_each_adjustment() {
    let items = vec![item(dec!(2.00), dec!(800.00))];
    let base = grand_total(&items, dec!(10), dec!(20), dec!(30));
    let delta = dec!(7.25);

    assert_eq!(
        grand_total(&items, dec!(10) + delta, dec!(20), dec!(30)),
        base - delta
    );
    assert_eq!(
        grand_total(&items, dec!(10), dec!(20) + delta, dec!(30)),
        base - delta
    );
    assert_eq!(
        grand_total(&items, dec!(10), dec!(20), dec!(30) + delta),
        base + delta
    );
}

#[test]
fn test_amount_in_words_zero() {
    assert_eq!(amount_in_words(dec!(0)), "Zero Dollars Only");
}

#[test]
fn test_amount_in_words_with_cents() {
    assert_eq!(
        amount_in_words(dec!(1234.56)),
        "One Thousand Two Hundred Thirty Four Dollars and Fifty Six Cents Only"
    );
}

#[test]
fn test_amount_in_words_negative_matches_positive() {
    let positive = amount_in_words(dec!(5.00));
    assert_eq!(positive, "Five Dollars Only");
    assert_eq!(amount_in_words(dec!(-5.00)), format!("Minus {positive}"));
}

#[test]
fn test_amount_in_words_rounds_fractional_cents() {
    // Fractional cents round before reaching the word tables.
    assert_eq!(
        amount_in_words(dec!(1.005)),
        "One Dollars and One Cents Only"
    );
}

#[test]
fn test_amount_in_words_scales() {
    assert_eq!(
        amount_in_words(dec!(1000000000000)),
        "One Trillion Dollars Only"
    );
    assert_eq!(
        amount_in_words(dec!(999999999999999)),
        "Nine Hundred Ninety Nine Trillion Nine Hundred Ninety Nine Billion \
         Nine Hundred Ninety Nine Million Nine Hundred Ninety Nine Thousand \
         Nine Hundred Ninety Nine Dollars Only"
    );
}

#[test]
fn test_amount_in_words_above_ceiling_falls_back_to_digits() {
    // 10^15 dollars has no scale name; digits are rendered instead.
    assert_eq!(
        amount_in_words(dec!(1000000000000000)),
        "1000000000000000 Dollars Only"
    );
}

#[test]
fn test_format_usd_is_uniform_two_decimals() {
    assert_eq!(format_usd(dec!(1075)), "$1,075.00");
    assert_eq!(format_usd(dec!(0.5)), "$0.50");
    assert_eq!(format_usd(dec!(1234567.891)), "$1,234,567.89");
}
