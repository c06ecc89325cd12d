use chrono::NaiveDate;
use serde::ser::{SerializeMap, Serializer};
use serde::Serialize;
use std::fmt;

//==============================================================================
// Raw spreadsheet input
//==============================================================================

/// One cell of the first sheet, as handed over by the importer
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Cell {
    /// Absent cell
    #[default]
    Empty,
    /// Numeric cell (time cells are fractions of a day)
    Number(f64),
    /// Text cell
    Text(String),
}

impl Cell {
    /// True for absent cells and empty strings
    pub fn is_empty(&self) -> bool {
        match self {
            Cell::Empty => true,
            Cell::Text(s) => s.is_empty(),
            Cell::Number(_) => false,
        }
    }
}

impl From<&str> for Cell {
    fn from(s: &str) -> Self {
        Cell::Text(s.to_string())
    }
}

impl From<String> for Cell {
    fn from(s: String) -> Self {
        Cell::Text(s)
    }
}

impl From<f64> for Cell {
    fn from(n: f64) -> Self {
        Cell::Number(n)
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cell::Empty => Ok(()),
            Cell::Number(n) => write!(f, "{}", n),
            Cell::Text(s) => f.write_str(s),
        }
    }
}

/// Positional row of cells; column order follows the sheet layout convention
pub type RawRow = Vec<Cell>;

//==============================================================================
// Prayers
//==============================================================================

/// The six timetable column groups, in chronological order across a day
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PrayerKey {
    Fajr,
    Sunrise,
    Dhuhr,
    Asr,
    Maghrib,
    Isha,
}

impl PrayerKey {
    pub const ALL: [PrayerKey; 6] = [
        PrayerKey::Fajr,
        PrayerKey::Sunrise,
        PrayerKey::Dhuhr,
        PrayerKey::Asr,
        PrayerKey::Maghrib,
        PrayerKey::Isha,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PrayerKey::Fajr => "fajr",
            PrayerKey::Sunrise => "sunrise",
            PrayerKey::Dhuhr => "dhuhr",
            PrayerKey::Asr => "asr",
            PrayerKey::Maghrib => "maghrib",
            PrayerKey::Isha => "isha",
        }
    }

    /// Fajr and sunrise are always before noon and never shifted
    pub fn is_morning(&self) -> bool {
        matches!(self, PrayerKey::Fajr | PrayerKey::Sunrise)
    }

    /// Sunrise and maghrib carry only a start time
    pub fn has_jamat(&self) -> bool {
        !matches!(self, PrayerKey::Sunrise | PrayerKey::Maghrib)
    }
}

impl fmt::Display for PrayerKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

//==============================================================================
// Normalized output
//==============================================================================

/// Canonical 24-hour "HH:MM", or empty when the cell was absent/unparseable
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(transparent)]
pub struct TimeOfDay(String);

impl TimeOfDay {
    pub fn empty() -> Self {
        Self(String::new())
    }

    /// Build from clock fields; callers keep hours in 0..24 and minutes in 0..60
    pub fn from_hm(hours: u32, minutes: u32) -> Self {
        debug_assert!(hours < 24 && minutes < 60);
        Self(format!("{:02}:{:02}", hours, minutes))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Split back into (hours, minutes)
    pub fn hour_minute(&self) -> Option<(u32, u32)> {
        let (h, m) = self.0.split_once(':')?;
        Some((h.parse().ok()?, m.parse().ok()?))
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Prayer with only a start time (sunrise, maghrib)
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct StartTime {
    pub start: TimeOfDay,
}

/// Prayer with a start time and a congregational (jamat) time
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct PrayerTimes {
    pub start: TimeOfDay,
    pub jamat: TimeOfDay,
}

/// All prayer times for one calendar day. Field order is the JSON key order.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct DayRecord {
    pub fajr: PrayerTimes,
    pub sunrise: StartTime,
    pub dhuhr: PrayerTimes,
    pub asr: PrayerTimes,
    pub maghrib: StartTime,
    pub isha: PrayerTimes,
}

impl DayRecord {
    /// Start time of a prayer
    pub fn start(&self, prayer: PrayerKey) -> &TimeOfDay {
        match prayer {
            PrayerKey::Fajr => &self.fajr.start,
            PrayerKey::Sunrise => &self.sunrise.start,
            PrayerKey::Dhuhr => &self.dhuhr.start,
            PrayerKey::Asr => &self.asr.start,
            PrayerKey::Maghrib => &self.maghrib.start,
            PrayerKey::Isha => &self.isha.start,
        }
    }

    /// Jamat time of a prayer, `None` for sunrise and maghrib
    pub fn jamat(&self, prayer: PrayerKey) -> Option<&TimeOfDay> {
        match prayer {
            PrayerKey::Fajr => Some(&self.fajr.jamat),
            PrayerKey::Dhuhr => Some(&self.dhuhr.jamat),
            PrayerKey::Asr => Some(&self.asr.jamat),
            PrayerKey::Isha => Some(&self.isha.jamat),
            PrayerKey::Sunrise | PrayerKey::Maghrib => None,
        }
    }
}

//==============================================================================
// Timetable
//==============================================================================

/// "YYYY-MM-DD" key for a calendar date
pub fn date_key(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// One dated row of the timetable
#[derive(Debug, Clone, PartialEq)]
pub struct TimetableEntry {
    pub date: NaiveDate,
    pub record: DayRecord,
}

/// Date-ordered mapping from calendar day to prayer times.
///
/// Built once per conversion; dates are unique, contiguous and ascending.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Timetable {
    entries: Vec<TimetableEntry>,
}

impl Timetable {
    pub(crate) fn from_entries(entries: Vec<TimetableEntry>) -> Self {
        Self { entries }
    }

    pub fn entries(&self) -> &[TimetableEntry] {
        &self.entries
    }

    pub fn iter(&self) -> impl Iterator<Item = &TimetableEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn first_date(&self) -> Option<NaiveDate> {
        self.entries.first().map(|e| e.date)
    }

    pub fn last_date(&self) -> Option<NaiveDate> {
        self.entries.last().map(|e| e.date)
    }

    /// Look up the record for a date
    pub fn get(&self, date: NaiveDate) -> Option<&DayRecord> {
        let first = self.first_date()?;
        let offset = usize::try_from((date - first).num_days()).ok()?;
        self.entries.get(offset).map(|e| &e.record)
    }
}

impl Serialize for Timetable {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for entry in &self.entries {
            map.serialize_entry(&date_key(entry.date), &entry.record)?;
        }
        map.end()
    }
}
