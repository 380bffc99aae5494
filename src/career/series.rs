use serde::Serialize;

use super::locale::Locale;
use super::merge::{merge_records, MergedMonth};
use super::month::SortKey;
use super::record::{CompensationRecord, PayType};

/// One month on the chart, ready for the stacked areas and the tooltip.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartPoint {
    pub month: String,
    pub month_unix: f64,
    pub gross: f64,
    pub net: f64,
    pub gna: f64,
    #[serde(rename = "type")]
    pub kind: PayType,
    pub sort_key: SortKey,
    pub month_label: String,
    /// Gross stacked layer; `None` leaves a gap instead of a zero-height area.
    pub gross_layer: Option<f64>,
    /// Net highlighted only in bonus months.
    pub bonus_overlay: Option<f64>,
}

impl ChartPoint {
    pub fn from_merged(merged: MergedMonth, locale: Locale) -> Self {
        let sort_key = SortKey::parse(&merged.month);
        let gross_layer = (merged.gross > 0.0).then_some(merged.gross);
        let bonus_overlay = merged.kind.is_bonus().then_some(merged.net);

        Self {
            month_label: sort_key.label(locale),
            sort_key,
            gross_layer,
            bonus_overlay,
            month: merged.month,
            month_unix: merged.month_unix,
            gross: merged.gross,
            net: merged.net,
            gna: merged.gna,
            kind: merged.kind,
        }
    }

    pub fn is_bonus(&self) -> bool {
        self.kind.is_bonus()
    }
}

/// Turn merged months into chart points in chronological order. Months with
/// equal sort keys keep their input order.
pub fn build_points<I>(merged: I, locale: Locale) -> Vec<ChartPoint>
where
    I: IntoIterator<Item = MergedMonth>,
{
    let mut points: Vec<ChartPoint> = merged
        .into_iter()
        .map(|m| ChartPoint::from_merged(m, locale))
        .collect();
    points.sort_by_key(|p| p.sort_key);
    points
}

/// Full pipeline from raw dataset rows to sorted chart points.
pub fn chart_points(records: &[CompensationRecord], locale: Locale) -> Vec<ChartPoint> {
    build_points(merge_records(records).into_vec(), locale)
}
