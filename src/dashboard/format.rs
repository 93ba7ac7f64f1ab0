//! Formatting of dates and amounts for display.
//!
//! The dashboard always uses the French locale, whatever the browser's
//! settings.

use time::{Month, OffsetDateTime};
use time_tz::{OffsetDateTimeExt, Tz};

/// Whether an amount is shown as money coming in or going out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum AmountDirection {
    /// Strictly positive amounts.
    Up,
    /// Negative and zero amounts.
    Down,
}

impl AmountDirection {
    pub(super) fn of(amount: f64) -> Self {
        if amount > 0.0 {
            AmountDirection::Up
        } else {
            AmountDirection::Down
        }
    }
}

fn french_month_abbreviation(month: Month) -> &'static str {
    match month {
        Month::January => "janv.",
        Month::February => "févr.",
        Month::March => "mars",
        Month::April => "avr.",
        Month::May => "mai",
        Month::June => "juin",
        Month::July => "juil.",
        Month::August => "août",
        Month::September => "sept.",
        Month::October => "oct.",
        Month::November => "nov.",
        Month::December => "déc.",
    }
}

/// Format a creation time as e.g. "14 mars 2025, 09:26" in `timezone`.
pub(super) fn format_created_at(created_at: OffsetDateTime, timezone: &Tz) -> String {
    let local = created_at.to_timezone(timezone);

    format!(
        "{:02} {} {}, {:02}:{:02}",
        local.day(),
        french_month_abbreviation(local.month()),
        local.year(),
        local.hour(),
        local.minute()
    )
}

/// Avoid printing "-0.00" for negative zero.
fn normalize_zero(amount: f64) -> f64 {
    if amount == 0.0 { 0.0 } else { amount }
}

/// Format an amount with two decimals and an explicit "+" for positive amounts.
pub(super) fn format_signed_amount(amount: f64) -> String {
    match AmountDirection::of(amount) {
        AmountDirection::Up => format!("+{amount:.2}"),
        AmountDirection::Down => format!("{:.2}", normalize_zero(amount)),
    }
}

/// Format an aggregate amount in euros, e.g. "1234.50 €".
pub(super) fn format_euros(amount: f64) -> String {
    format!("{:.2} €", normalize_zero(amount))
}

/// Format a percentage rounded to the nearest whole number, e.g. "50 %".
pub(super) fn format_ratio(ratio: f64) -> String {
    format!("{:.0} %", normalize_zero(ratio.round()))
}
