//! Row mapping: positional spreadsheet row → [`DayRecord`]

use super::normalizer::{enforce_afternoon, normalize};
use crate::types::{Cell, DayRecord, PrayerKey, PrayerTimes, StartTime, TimeOfDay};

/// Number of positional columns in a timetable row
pub const SLOT_COUNT: usize = 10;

/// Prayer owning each column, left to right:
/// fajr start/jamat, sunrise, dhuhr start/jamat, asr start/jamat, maghrib,
/// isha start/jamat.
pub const SLOT_PRAYERS: [PrayerKey; SLOT_COUNT] = [
    PrayerKey::Fajr,
    PrayerKey::Fajr,
    PrayerKey::Sunrise,
    PrayerKey::Dhuhr,
    PrayerKey::Dhuhr,
    PrayerKey::Asr,
    PrayerKey::Asr,
    PrayerKey::Maghrib,
    PrayerKey::Isha,
    PrayerKey::Isha,
];

/// Build the day record for one data row.
///
/// Short rows are padded with empty cells and extra columns are ignored, so
/// this never fails. Non-morning prayers get the afternoon rule a second time
/// on the normalized value; numeric and AM-marked cells are shifted by that
/// pass as well.
///
/// A numeric `0` slot is read as unfilled and yields an empty time, although
/// [`normalize`] on its own maps it to "00:00".
pub fn map_row(row: &[Cell]) -> DayRecord {
    let empty = Cell::Empty;
    let slots: Vec<TimeOfDay> = SLOT_PRAYERS
        .iter()
        .enumerate()
        .map(|(idx, &prayer)| {
            let raw = match row.get(idx) {
                Some(Cell::Number(n)) if *n == 0.0 => &empty,
                Some(cell) => cell,
                None => &empty,
            };
            let time = normalize(raw, prayer);
            if prayer.is_morning() {
                time
            } else {
                enforce_afternoon(&time, prayer)
            }
        })
        .collect();

    let mut slots = slots.into_iter();
    let mut next = || slots.next().unwrap_or_default();

    DayRecord {
        fajr: PrayerTimes {
            start: next(),
            jamat: next(),
        },
        sunrise: StartTime { start: next() },
        dhuhr: PrayerTimes {
            start: next(),
            jamat: next(),
        },
        asr: PrayerTimes {
            start: next(),
            jamat: next(),
        },
        maghrib: StartTime { start: next() },
        isha: PrayerTimes {
            start: next(),
            jamat: next(),
        },
    }
}
