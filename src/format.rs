//! Human-readable counts and timestamps for the card footer.

use chrono::{DateTime, Utc};

/// Formats numbers and times for display on a card.
pub trait CardFormatter {
    /// Short form of a count, e.g. `1.2k`.
    fn compact_count(&self, value: u64) -> String;

    /// Distance from now to `at`, e.g. `3 hours ago`.
    fn relative_time(&self, at: DateTime<Utc>) -> String;
}

/// English formatter anchored at a fixed "now".
#[derive(Debug, Clone, Copy)]
pub struct HumanFormatter {
    now: DateTime<Utc>,
}

impl HumanFormatter {
    #[must_use]
    pub const fn new(now: DateTime<Utc>) -> Self {
        Self { now }
    }

    /// A formatter anchored at the current time.
    #[must_use]
    pub fn now() -> Self {
        Self::new(Utc::now())
    }
}

impl CardFormatter for HumanFormatter {
    fn compact_count(&self, value: u64) -> String {
        format_compact(value)
    }

    fn relative_time(&self, at: DateTime<Utc>) -> String {
        let seconds = (self.now - at).num_seconds();
        let phrase = humanize_seconds(seconds.unsigned_abs());
        if seconds < 0 {
            format!("in {phrase}")
        } else {
            format!("{phrase} ago")
        }
    }
}

const UNITS: &[(&str, f64)] = &[
    ("t", 1_000_000_000_000.0),
    ("b", 1_000_000_000.0),
    ("m", 1_000_000.0),
    ("k", 1_000.0),
];

/// Abbreviate a count with at most one decimal (`1234` -> `1.2k`).
#[must_use]
pub fn format_compact(value: u64) -> String {
    if value < 1_000 {
        return value.to_string();
    }

    let scaled = value as f64;
    // Smallest unit first; a value that rounds up to 1000 moves to the next unit.
    let mut units = UNITS.iter().rev().peekable();
    while let Some((suffix, scale)) = units.next() {
        let rounded = (scaled / scale * 10.0).round() / 10.0;
        if rounded < 1_000.0 || units.peek().is_none() {
            return format!("{}{suffix}", trim_decimal(rounded));
        }
    }

    value.to_string()
}

fn trim_decimal(value: f64) -> String {
    let text = format!("{value:.1}");
    if let Some(whole) = text.strip_suffix(".0") {
        return whole.to_string();
    }
    text
}

const SECONDS_PER_MONTH: u64 = 2_629_746;
const SECONDS_PER_YEAR: u64 = 31_556_952;

/// Each bucket is judged on the count it prints, so a rounded count of 1
/// reads as the singular phrase.
fn humanize_seconds(seconds: u64) -> String {
    let minutes = round_div(seconds, 60);
    let hours = round_div(seconds, 3_600);
    let days = round_div(seconds, 86_400);
    let months = round_div(seconds, SECONDS_PER_MONTH);
    let years = round_div(seconds, SECONDS_PER_YEAR);

    match seconds {
        0..=44 => "a few seconds".to_string(),
        _ if minutes <= 1 => "a minute".to_string(),
        _ if minutes < 45 => format!("{minutes} minutes"),
        _ if hours <= 1 => "an hour".to_string(),
        _ if hours < 22 => format!("{hours} hours"),
        _ if days <= 1 => "a day".to_string(),
        _ if days < 26 => format!("{days} days"),
        _ if months <= 1 => "a month".to_string(),
        _ if months < 11 => format!("{months} months"),
        _ if years <= 1 => "a year".to_string(),
        _ => format!("{years} years"),
    }
}

const fn round_div(value: u64, unit: u64) -> u64 {
    value.saturating_add(unit / 2) / unit
}
