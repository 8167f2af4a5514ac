//! Sequential document-number generation.
//!
//! Numbers follow `PREFIX-NNNN` with an alpha series tag and a `/DDMM`
//! issue-date suffix on invoices (e.g. `CD-0005A/0708`); memos carry the
//! bare counter (e.g. `MM-0012`). Given the last issued number this module
//! only computes the next candidate string; uniqueness under concurrent
//! issuance is the store's problem.

use chrono::NaiveDate;
use lazy_static::lazy_static;
use regex::Regex;

use super::models::DocumentKind;

/// Default series tag for invoice numbers.
const SERIES_TAG: &str = "A";
/// Counter width used when seeding a fresh series.
const SEED_WIDTH: usize = 4;

lazy_static! {
    static ref NUMBER_FORMAT: Regex =
        Regex::new(r"^(?P<prefix>[A-Z]+)-(?P<seq>\d+)(?P<tag>[A-Z]*)(?:/(?P<date>\d{4}))?$")
            .expect("document number pattern is valid");
}

/// Compute the next sequential number for `kind`, issued on `issue_date`.
///
/// The numeric run of `last` is incremented by exactly one and re-padded to
/// the same width. With no prior number (or an unparseable one) the series
/// restarts from `0001`.
pub fn next_number(kind: DocumentKind, last: Option<&str>, issue_date: NaiveDate) -> String {
    let (seq, width, tag) = match last.and_then(|value| parse(value)) {
        Some(parsed) => parsed,
        None => {
            if let Some(value) = last {
                log::warn!(
                    "unparseable last document number '{}', reseeding series",
                    value
                );
            }
            (0, SEED_WIDTH, None)
        }
    };

    let next = seq + 1;
    let counter = format!("{next:0width$}");

    match kind {
        DocumentKind::Invoice => {
            let tag = tag.unwrap_or_else(|| SERIES_TAG.to_string());
            format!(
                "{}-{}{}/{}",
                kind.prefix(),
                counter,
                tag,
                issue_date.format("%d%m")
            )
        }
        DocumentKind::Memo => format!("{}-{}", kind.prefix(), counter),
    }
}

fn parse(value: &str) -> Option<(u64, usize, Option<String>)> {
    let caps = NUMBER_FORMAT.captures(value.trim())?;
    let seq_str = caps.name("seq")?.as_str();
    let seq: u64 = seq_str.parse().ok()?;
    let tag = caps
        .name("tag")
        .map(|m| m.as_str())
        .filter(|t| !t.is_empty())
        .map(str::to_string);
    Some((seq, seq_str.len(), tag))
}
