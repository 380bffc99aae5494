use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, NaiveDate};
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use thiserror::Error;

const EN_MONTHS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

const PL_MONTHS: [&str; 12] = [
    "sty", "lut", "mar", "kwi", "maj", "cze", "lip", "sie", "wrz", "paź", "lis", "gru",
];

#[derive(Debug, Error, PartialEq, Eq)]
#[error("Unsupported locale '{0}', expected one of: en-US, pl-PL")]
pub struct UnknownLocale(pub String);

/// Display locales the dashboard is rendered in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Locale {
    #[serde(rename = "en-US")]
    EnUs,
    #[default]
    #[serde(rename = "pl-PL")]
    PlPl,
}

impl Locale {
    pub const ALL: [Locale; 2] = [Locale::EnUs, Locale::PlPl];

    pub fn tag(self) -> &'static str {
        match self {
            Locale::EnUs => "en-US",
            Locale::PlPl => "pl-PL",
        }
    }

    /// Short month + year, e.g. `Jan 2023` or `sty 2023`.
    pub fn format_month(self, date: NaiveDate) -> String {
        let names = match self {
            Locale::EnUs => &EN_MONTHS,
            Locale::PlPl => &PL_MONTHS,
        };
        format!("{} {}", names[date.month0() as usize], date.year())
    }

    /// Group and round a number the way the locale writes it.
    ///
    /// en-US groups every three digits with `,` and uses `.` for decimals.
    /// pl-PL uses a non-breaking space and `,`, and leaves four-digit
    /// numbers ungrouped. Trailing fractional zeros are dropped.
    pub fn format_number(self, value: f64, max_fraction_digits: usize) -> String {
        let (group_sep, decimal_sep, min_grouping_len) = match self {
            Locale::EnUs => (',', '.', 4),
            Locale::PlPl => ('\u{a0}', ',', 5),
        };

        // Halves round away from zero, the way browsers format numbers.
        let rounded = match Decimal::from_f64_retain(value.abs()) {
            Some(exact) => exact
                .round_dp_with_strategy(max_fraction_digits as u32, RoundingStrategy::MidpointAwayFromZero)
                .normalize()
                .to_string(),
            None => format!("{:.*}", max_fraction_digits, value.abs()),
        };
        let (int_part, frac_part) = match rounded.split_once('.') {
            Some((int_part, frac)) => (int_part, frac.trim_end_matches('0')),
            None => (rounded.as_str(), ""),
        };

        let mut out = String::with_capacity(rounded.len() + 4);
        if value < 0.0 && (int_part != "0" || !frac_part.is_empty()) {
            out.push('-');
        }

        let len = int_part.len();
        for (i, digit) in int_part.chars().enumerate() {
            if len >= min_grouping_len && i > 0 && (len - i) % 3 == 0 {
                out.push(group_sep);
            }
            out.push(digit);
        }

        if !frac_part.is_empty() {
            out.push(decimal_sep);
            out.push_str(frac_part);
        }
        out
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for Locale {
    type Err = UnknownLocale;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('_', "-").as_str() {
            "en-us" | "en" => Ok(Locale::EnUs),
            "pl-pl" | "pl" => Ok(Locale::PlPl),
            _ => Err(UnknownLocale(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, 1).unwrap()
    }

    #[test]
    fn formats_short_month_and_year() {
        assert_eq!(Locale::EnUs.format_month(date(2023, 1)), "Jan 2023");
        assert_eq!(Locale::PlPl.format_month(date(2023, 1)), "sty 2023");
        assert_eq!(Locale::PlPl.format_month(date(2022, 10)), "paź 2022");
        assert_eq!(Locale::EnUs.format_month(date(2022, 12)), "Dec 2022");
    }

    #[test]
    fn formats_numbers_in_english() {
        assert_eq!(Locale::EnUs.format_number(12345.67, 3), "12,345.67");
        assert_eq!(Locale::EnUs.format_number(1234.0, 3), "1,234");
        assert_eq!(Locale::EnUs.format_number(999.7, 0), "1,000");
        assert_eq!(Locale::EnUs.format_number(1234567.891, 0), "1,234,568");
        assert_eq!(Locale::EnUs.format_number(0.0, 3), "0");
    }

    #[test]
    fn formats_numbers_in_polish() {
        assert_eq!(Locale::PlPl.format_number(12345.67, 3), "12\u{a0}345,67");
        assert_eq!(Locale::PlPl.format_number(7065.56, 0), "7066");
        assert_eq!(Locale::PlPl.format_number(1234567.0, 3), "1\u{a0}234\u{a0}567");
    }

    #[test]
    fn halves_round_away_from_zero() {
        assert_eq!(Locale::EnUs.format_number(6500.5, 0), "6,501");
        assert_eq!(Locale::EnUs.format_number(7064.5, 0), "7,065");
        assert_eq!(Locale::EnUs.format_number(2.5, 0), "3");
        assert_eq!(Locale::PlPl.format_number(6500.5, 0), "6501");
        assert_eq!(Locale::PlPl.format_number(12344.5, 0), "12\u{a0}345");
        assert_eq!(Locale::PlPl.format_number(0.0625, 3), "0,063");
        assert_eq!(Locale::EnUs.format_number(-2.5, 0), "-3");
    }

    #[test]
    fn negative_numbers_keep_their_sign() {
        assert_eq!(Locale::EnUs.format_number(-1500.25, 3), "-1,500.25");
        assert_eq!(Locale::EnUs.format_number(-0.0001, 3), "0");
    }

    #[test]
    fn parses_locale_tags() {
        assert_eq!("en-US".parse::<Locale>(), Ok(Locale::EnUs));
        assert_eq!("pl_pl".parse::<Locale>(), Ok(Locale::PlPl));
        assert_eq!("PL".parse::<Locale>(), Ok(Locale::PlPl));
        assert_eq!(
            "de-DE".parse::<Locale>(),
            Err(UnknownLocale("de-DE".to_string()))
        );
    }

    #[test]
    fn serializes_as_bcp47_tag() {
        assert_eq!(serde_json::to_string(&Locale::PlPl).unwrap(), "\"pl-PL\"");
    }
}
