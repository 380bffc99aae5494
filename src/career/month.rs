use chrono::{NaiveDate, NaiveTime};
use serde::{Serialize, Serializer};

use super::locale::Locale;

const MONTH_NAMES: [(&str, &str); 12] = [
    ("jan", "january"),
    ("feb", "february"),
    ("mar", "march"),
    ("apr", "april"),
    ("may", "may"),
    ("jun", "june"),
    ("jul", "july"),
    ("aug", "august"),
    ("sep", "september"),
    ("oct", "october"),
    ("nov", "november"),
    ("dec", "december"),
];

/// Chronological position of a month label.
///
/// Labels that are not `"<Month> <YYYY>"` become [`SortKey::Malformed`],
/// which orders before every real month and stands for the Unix epoch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum SortKey {
    Malformed,
    Month(NaiveDate),
}

impl SortKey {
    pub fn parse(label: &str) -> Self {
        parse_month(label).map_or(SortKey::Malformed, SortKey::Month)
    }

    pub fn is_malformed(self) -> bool {
        matches!(self, SortKey::Malformed)
    }

    /// First day of the month, or 1970-01-01 for malformed labels.
    pub fn date(self) -> NaiveDate {
        match self {
            SortKey::Month(date) => date,
            SortKey::Malformed => NaiveDate::default(),
        }
    }

    /// Milliseconds since the epoch at UTC midnight of [`SortKey::date`].
    pub fn timestamp_millis(self) -> i64 {
        self.date()
            .and_time(NaiveTime::MIN)
            .and_utc()
            .timestamp_millis()
    }

    pub fn label(self, locale: Locale) -> String {
        locale.format_month(self.date())
    }
}

impl Serialize for SortKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_i64(self.timestamp_millis())
    }
}

/// Parse `"Jan 2023"` / `"january 2023"` into the first day of that month.
pub fn parse_month(label: &str) -> Option<NaiveDate> {
    let mut parts = label.split_whitespace();
    let (name, year) = match (parts.next(), parts.next(), parts.next()) {
        (Some(name), Some(year), None) => (name, year),
        _ => return None,
    };

    let name = name.to_ascii_lowercase();
    let month = MONTH_NAMES
        .iter()
        .position(|(short, full)| name == *short || name == *full || (name == "sept" && *short == "sep"))?;

    if year.len() != 4 || !year.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let year: i32 = year.parse().ok()?;

    NaiveDate::from_ymd_opt(year, month as u32 + 1, 1)
}

/// Display label for a month in the given locale; malformed labels show the
/// epoch month.
pub fn localize_month(label: &str, locale: Locale) -> String {
    SortKey::parse(label).label(locale)
}
