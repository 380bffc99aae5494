use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use super::amount::Amount;

/// Whether a payout was regular salary or a bonus disbursement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub enum PayType {
    #[default]
    Salary,
    Bonus,
}

impl PayType {
    /// Only the exact label `"Bonus"` marks a bonus; anything else is salary.
    pub fn from_label(label: Option<&str>) -> Self {
        match label {
            Some("Bonus") => PayType::Bonus,
            _ => PayType::Salary,
        }
    }

    pub fn is_bonus(self) -> bool {
        matches!(self, PayType::Bonus)
    }

    /// Bonus dominates: once either side is a bonus the result stays one.
    pub fn combine(self, other: PayType) -> PayType {
        if self.is_bonus() || other.is_bonus() {
            PayType::Bonus
        } else {
            PayType::Salary
        }
    }
}

impl<'de> Deserialize<'de> for PayType {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Option::<Value>::deserialize(deserializer)?;
        Ok(PayType::from_label(value.as_ref().and_then(Value::as_str)))
    }
}

/// One raw row of the static compensation dataset.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompensationRecord {
    /// Free-text month label, e.g. `"Jan 2023"`.
    #[serde(default)]
    pub month: String,
    /// Optional timestamp hint exported alongside the label.
    #[serde(default)]
    pub month_unix: Amount,
    #[serde(default)]
    pub gross: Amount,
    #[serde(default)]
    pub net: Amount,
    /// Gross national average for the month.
    #[serde(default)]
    pub gna: Amount,
    #[serde(rename = "type", default)]
    pub kind: PayType,
}

impl CompensationRecord {
    pub fn new(month: impl Into<String>, gross: f64, net: f64, gna: f64, kind: PayType) -> Self {
        Self {
            month: month.into(),
            month_unix: Amount::ZERO,
            gross: gross.into(),
            net: net.into(),
            gna: gna.into(),
            kind,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn parses_spreadsheet_export_row() {
        let record: CompensationRecord = serde_json::from_value(json!({
            "month": "Mar 2023",
            "monthUnix": "1677628800",
            "gross": "12,345.67",
            "net": 8900,
            "gna": "7,065.56",
            "type": "Bonus"
        }))
        .unwrap();

        assert_eq!(record.month, "Mar 2023");
        assert_eq!(record.month_unix.value(), 1_677_628_800.0);
        assert_eq!(record.gross.value(), 12345.67);
        assert_eq!(record.net.value(), 8900.0);
        assert_eq!(record.gna.value(), 7065.56);
        assert_eq!(record.kind, PayType::Bonus);
    }

    #[test]
    fn missing_fields_default_to_zero_salary() {
        let record: CompensationRecord = serde_json::from_value(json!({ "month": "Apr 2023" })).unwrap();
        assert_eq!(record.gross, Amount::ZERO);
        assert_eq!(record.net, Amount::ZERO);
        assert_eq!(record.kind, PayType::Salary);
    }

    #[test]
    fn unknown_type_labels_are_salary() {
        for label in [json!("bonus"), json!("Premia"), json!(1), json!(null)] {
            let record: CompensationRecord =
                serde_json::from_value(json!({ "month": "May 2023", "type": label })).unwrap();
            assert_eq!(record.kind, PayType::Salary);
        }
    }

    #[test]
    fn bonus_dominates_when_combined() {
        assert_eq!(PayType::Salary.combine(PayType::Bonus), PayType::Bonus);
        assert_eq!(PayType::Bonus.combine(PayType::Salary), PayType::Bonus);
        assert_eq!(PayType::Salary.combine(PayType::Salary), PayType::Salary);
    }
}
