//! Time normalization: raw cell → canonical 24-hour "HH:MM"
//!
//! Handles spreadsheet fractional-day numbers, bare `H:MM` clock text (with
//! prayer-specific afternoon inference), 12-hour `H:MM AM/PM` text and the
//! dotted / space-separated variants ("1.30", "1 30"). Anything else becomes an
//! empty [`TimeOfDay`]; normalization never fails.

use crate::types::{Cell, PrayerKey, TimeOfDay};
use once_cell::sync::Lazy;
use regex::Regex;

const MINUTES_PER_DAY: f64 = 1440.0;

static MERIDIEM_SUFFIX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)^(.*?)\s*([AP]M)$").expect("valid meridiem pattern"));
static SEPARATORS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[.\s]+").expect("valid separator pattern"));
static BARE_CLOCK: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(\d{1,2}):(\d{2})$").expect("valid clock pattern"));
static TWELVE_HOUR_CLOCK: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(\d{1,2}):(\d{1,2})$").expect("valid 12-hour pattern"));

/// Normalize one raw cell for the given prayer
pub fn normalize(raw: &Cell, prayer: PrayerKey) -> TimeOfDay {
    match raw {
        Cell::Empty => TimeOfDay::empty(),
        Cell::Number(n) => from_day_fraction(*n),
        Cell::Text(s) => from_text(s, prayer),
    }
}

/// Spreadsheet serial time: 1.0 is a full day. Already absolute, so no
/// afternoon inference happens here.
pub fn from_day_fraction(value: f64) -> TimeOfDay {
    if !value.is_finite() {
        return TimeOfDay::empty();
    }
    let total_minutes = (value * MINUTES_PER_DAY).round() as i64;
    let hours = total_minutes.div_euclid(60).rem_euclid(24) as u32;
    let minutes = total_minutes.rem_euclid(60) as u32;
    TimeOfDay::from_hm(hours, minutes)
}

fn from_text(raw: &str, prayer: PrayerKey) -> TimeOfDay {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return TimeOfDay::empty();
    }

    let (clock, meridiem) = match MERIDIEM_SUFFIX.captures(trimmed) {
        Some(caps) => (
            caps.get(1).map_or("", |m| m.as_str()),
            caps.get(2).map(|m| m.as_str().to_ascii_uppercase()),
        ),
        None => (trimmed, None),
    };
    let clock = SEPARATORS.replace_all(clock, ":");

    match meridiem {
        None => {
            let Some((hours, minutes)) = capture_hm(&BARE_CLOCK, &clock) else {
                return TimeOfDay::empty();
            };
            let hours = afternoon_hour(hours, prayer);
            TimeOfDay::from_hm(hours, minutes.min(59))
        }
        Some(period) => {
            let Some((hours, minutes)) = capture_hm(&TWELVE_HOUR_CLOCK, &clock) else {
                return TimeOfDay::empty();
            };
            let hours = match (period.as_str(), hours) {
                ("AM", 12) => 0,
                ("PM", h) if h != 12 => h + 12,
                (_, h) => h,
            };
            TimeOfDay::from_hm(hours.min(23), minutes.min(59))
        }
    }
}

fn capture_hm(pattern: &Regex, text: &str) -> Option<(u32, u32)> {
    let caps = pattern.captures(text)?;
    let hours = caps.get(1)?.as_str().parse().ok()?;
    let minutes = caps.get(2)?.as_str().parse().ok()?;
    Some((hours, minutes))
}

/// Afternoon disambiguation for an hour written without AM/PM.
///
/// - fajr, sunrise: unchanged
/// - dhuhr: 1..=10 → PM; 11 stays late morning; 12 is noon
/// - asr, maghrib, isha: 1..=11 → PM; 12 stays
///
/// 24 wraps to 0 and the result is clamped to 0..=23. Hours already past noon
/// fall outside every shifted range, so applying the rule twice is the same as
/// applying it once.
pub fn afternoon_hour(hours: u32, prayer: PrayerKey) -> u32 {
    let shifted = match prayer {
        PrayerKey::Fajr | PrayerKey::Sunrise => hours,
        PrayerKey::Dhuhr if (1..=10).contains(&hours) => hours + 12,
        PrayerKey::Dhuhr => hours,
        _ if (1..=11).contains(&hours) => hours + 12,
        _ => hours,
    };
    if shifted == 24 {
        0
    } else {
        shifted.min(23)
    }
}

/// Re-apply the afternoon rule to an already normalized time
pub fn enforce_afternoon(time: &TimeOfDay, prayer: PrayerKey) -> TimeOfDay {
    if prayer.is_morning() {
        return time.clone();
    }
    match time.hour_minute() {
        Some((hours, minutes)) => TimeOfDay::from_hm(afternoon_hour(hours, prayer), minutes),
        None => time.clone(),
    }
}
