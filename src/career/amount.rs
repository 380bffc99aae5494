// Lenient numeric fields for the compensation dataset.
//
// The dataset was exported from a spreadsheet, so amounts show up as JSON
// numbers, as strings with thousands separators ("12,345.67"), as empty
// strings or as null. Anything that cannot be read as a non-negative number
// collapses to zero instead of failing the whole file.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

/// A non-negative amount parsed from a loosely typed JSON value.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
pub struct Amount(f64);

impl Amount {
    pub const ZERO: Amount = Amount(0.0);

    pub fn new(value: f64) -> Self {
        Self(sanitize(value))
    }

    pub fn value(self) -> f64 {
        self.0
    }

    pub fn is_positive(self) -> bool {
        self.0 > 0.0
    }

    /// Read an amount from any JSON value. Numbers are taken as-is, strings go
    /// through [`parse_amount`], everything else is zero.
    pub fn from_json(value: &Value) -> Self {
        match value {
            Value::Number(n) => Self::new(n.as_f64().unwrap_or(0.0)),
            Value::String(s) => Self(parse_amount(s)),
            _ => Self::ZERO,
        }
    }
}

impl From<f64> for Amount {
    fn from(value: f64) -> Self {
        Self::new(value)
    }
}

impl<'de> Deserialize<'de> for Amount {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Option::<Value>::deserialize(deserializer)?;
        Ok(value.as_ref().map(Amount::from_json).unwrap_or_default())
    }
}

impl Serialize for Amount {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_f64(self.0)
    }
}

/// Parse a spreadsheet-style amount.
///
/// Commas are dropped, surrounding whitespace is ignored and the longest
/// numeric prefix is used, so `"12,345.67"` is `12345.67` and `"1500 PLN"` is
/// `1500`. Strings without a leading number are `0`.
pub fn parse_amount(raw: &str) -> f64 {
    let cleaned: String = raw.chars().filter(|c| *c != ',').collect();
    let prefix = numeric_prefix(cleaned.trim());
    sanitize(prefix.parse::<f64>().unwrap_or(0.0))
}

fn sanitize(value: f64) -> f64 {
    if value.is_finite() && value > 0.0 {
        value
    } else {
        0.0
    }
}

fn numeric_prefix(s: &str) -> &str {
    let bytes = s.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+') | Some(b'-')) {
        end += 1;
    }

    let int_start = end;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    let mut digits = end - int_start;

    if end < bytes.len() && bytes[end] == b'.' {
        let frac_start = end + 1;
        let mut frac_end = frac_start;
        while frac_end < bytes.len() && bytes[frac_end].is_ascii_digit() {
            frac_end += 1;
        }
        digits += frac_end - frac_start;
        if digits > 0 {
            end = frac_end;
        }
    }

    if digits == 0 {
        return "";
    }

    // Exponent only counts when at least one digit follows it.
    if end < bytes.len() && (bytes[end] == b'e' || bytes[end] == b'E') {
        let mut exp_end = end + 1;
        if exp_end < bytes.len() && (bytes[exp_end] == b'+' || bytes[exp_end] == b'-') {
            exp_end += 1;
        }
        let exp_digits_start = exp_end;
        while exp_end < bytes.len() && bytes[exp_end].is_ascii_digit() {
            exp_end += 1;
        }
        if exp_end > exp_digits_start {
            end = exp_end;
        }
    }

    &s[..end]
}
