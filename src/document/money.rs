//! Money arithmetic and formatting.
//!
//! All computation stays in `Decimal`; rounding to two places happens only
//! when a value is formatted for display. Both document kinds format
//! uniformly as USD.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

use super::models::LineItem;

/// `carat * price_per_carat`, exactly. Inputs are validated upstream; this
/// helper has no error path.
pub fn line_total(carat: Decimal, price_per_carat: Decimal) -> Decimal {
    carat * price_per_carat
}

/// Sum of all derived line totals.
pub fn subtotal(items: &[LineItem]) -> Decimal {
    items.iter().map(LineItem::line_total).sum()
}

/// `subtotal - discount - collected_payment + shipment_cost`.
pub fn grand_total(
    items: &[LineItem],
    discount: Decimal,
    collected_payment: Decimal,
    shipment_cost: Decimal,
) -> Decimal {
    subtotal(items) - discount - collected_payment + shipment_cost
}

/// Format a monetary value as USD: `$` symbol, comma thousands separator,
/// exactly two decimal places. Negative values carry a leading minus.
pub fn format_usd(amount: Decimal) -> String {
    let rounded = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    let negative = rounded.is_sign_negative() && !rounded.is_zero();
    let abs = rounded.abs();

    let dollars = abs.trunc();
    let cents = ((abs - dollars) * Decimal::from(100))
        .round()
        .to_u32()
        .unwrap_or(0);

    let digits = dollars.to_string();
    let mut grouped = String::new();
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let sign = if negative { "-" } else { "" };
    format!("{sign}${grouped}.{cents:02}")
}

const ONES: [&str; 20] = [
    "", "One", "Two", "Three", "Four", "Five", "Six", "Seven", "Eight", "Nine", "Ten", "Eleven",
    "Twelve", "Thirteen", "Fourteen", "Fifteen", "Sixteen", "Seventeen", "Eighteen", "Nineteen",
];

const TENS: [&str; 10] = [
    "", "", "Twenty", "Thirty", "Forty", "Fifty", "Sixty", "Seventy", "Eighty", "Ninety",
];

const SCALES: [&str; 5] = ["", "Thousand", "Million", "Billion", "Trillion"];

/// Magnitudes at or above this have no scale name in the table and fall back
/// to a plain digit rendering.
const WORDS_CEILING: u64 = 1_000_000_000_000_000;

fn three_digit_words(n: u64, out: &mut Vec<String>) {
    let hundreds = n / 100;
    let rest = n % 100;

    if hundreds > 0 {
        out.push(ONES[hundreds as usize].to_string());
        out.push("Hundred".to_string());
    }
    if rest >= 20 {
        out.push(TENS[(rest / 10) as usize].to_string());
        if rest % 10 > 0 {
            out.push(ONES[(rest % 10) as usize].to_string());
        }
    } else if rest > 0 {
        out.push(ONES[rest as usize].to_string());
    }
}

fn integer_words(mut n: u64) -> String {
    if n == 0 {
        return "Zero".to_string();
    }

    // Split into thousand-groups, lowest first, then emit highest first.
    let mut groups = Vec::new();
    while n > 0 {
        groups.push(n % 1000);
        n /= 1000;
    }

    let mut words = Vec::new();
    for (scale, group) in groups.iter().enumerate().rev() {
        if *group == 0 {
            continue;
        }
        three_digit_words(*group, &mut words);
        if scale > 0 {
            words.push(SCALES[scale].to_string());
        }
    }
    words.join(" ")
}

/// Render an amount as English words: short-scale grouping up to trillions,
/// a fixed `Dollars` suffix, a `Cents` clause when the fractional part is
/// non-zero, and a `Minus` prefix for negatives. The amount is rounded to
/// two places first, so fractional cents never reach the word tables.
/// Dollar magnitudes of 10^15 or more are outside the scale table and
/// render as plain digits with the same suffix.
pub fn amount_in_words(amount: Decimal) -> String {
    let rounded = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    let negative = rounded.is_sign_negative() && !rounded.is_zero();
    let abs = rounded.abs();

    let dollars_dec = abs.trunc();
    let cents = ((abs - dollars_dec) * Decimal::from(100))
        .round()
        .to_u64()
        .unwrap_or(0);

    let dollar_words = match dollars_dec.to_u64() {
        Some(dollars) if dollars < WORDS_CEILING => integer_words(dollars),
        _ => dollars_dec.to_string(),
    };

    let mut result = String::new();
    if negative {
        result.push_str("Minus ");
    }
    result.push_str(&dollar_words);
    result.push_str(" Dollars");
    if cents > 0 {
        result.push_str(" and ");
        result.push_str(&integer_words(cents));
        result.push_str(" Cents");
    }
    result.push_str(" Only");
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn format_usd_groups_thousands() {
        assert_eq!(format_usd(dec!(9600)), "$9,600.00");
        assert_eq!(format_usd(dec!(1234567.891)), "$1,234,567.89");
        assert_eq!(format_usd(dec!(-5)), "-$5.00");
        assert_eq!(format_usd(dec!(0)), "$0.00");
    }

    #[test]
    fn words_for_teens_and_tens() {
        assert_eq!(amount_in_words(dec!(14)), "Fourteen Dollars Only");
        assert_eq!(amount_in_words(dec!(40)), "Forty Dollars Only");
        assert_eq!(
            amount_in_words(dec!(115)),
            "One Hundred Fifteen Dollars Only"
        );
    }

    #[test]
    fn words_skip_empty_groups() {
        assert_eq!(
            amount_in_words(dec!(1000000)),
            "One Million Dollars Only"
        );
        assert_eq!(
            amount_in_words(dec!(1000001)),
            "One Million One Dollars Only"
        );
    }
}
