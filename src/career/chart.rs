// Composition of the "salary vs national average" chart: which series are
// drawn, in what order, with which colours and names, plus the points and
// hover text the client renders.

use serde::Serialize;

use super::locale::Locale;
use super::record::CompensationRecord;
use super::series::{chart_points, ChartPoint};
use super::tooltip::Tooltip;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum SeriesKind {
    Area,
    Line,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Series {
    /// Field of [`ChartPoint`] plotted by this series.
    pub data_key: &'static str,
    pub name: &'static str,
    pub kind: SeriesKind,
    pub stroke: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fill: Option<&'static str>,
    pub stroke_width: u8,
    pub connect_nulls: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartSpec {
    pub locale: Locale,
    pub title: &'static str,
    pub x_key: &'static str,
    pub series: Vec<Series>,
}

impl ChartSpec {
    pub fn for_locale(locale: Locale) -> Self {
        let pl = locale == Locale::PlPl;
        let area = |data_key: &'static str, name: &'static str, stroke: &'static str, fill: &'static str| Series {
            data_key,
            name,
            kind: SeriesKind::Area,
            stroke,
            fill: Some(fill),
            stroke_width: 1,
            connect_nulls: false,
        };

        Self {
            locale,
            title: if pl {
                "Wynagrodzenie a Średnia Krajowa"
            } else {
                "Salary vs Gross National Average"
            },
            x_key: "monthLabel",
            series: vec![
                area("net", if pl { "Netto" } else { "Net" }, "#0a3d62", "#3c6382"),
                area("grossLayer", if pl { "Brutto" } else { "Gross" }, "#60a3bc", "#82ccdd"),
                area("bonusOverlay", "Bonus dolce vita", "#f7b731", "#fed330"),
                Series {
                    data_key: "gna",
                    name: if pl {
                        "Średnia krajowa brutto"
                    } else {
                        "Gross National Average"
                    },
                    kind: SeriesKind::Line,
                    stroke: "#079992",
                    fill: None,
                    stroke_width: 3,
                    connect_nulls: false,
                },
            ],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderedPoint {
    #[serde(flatten)]
    pub point: ChartPoint,
    pub tooltip: Tooltip,
}

/// Everything the dashboard needs to draw the career chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CareerChart {
    pub chart: ChartSpec,
    pub points: Vec<RenderedPoint>,
}

/// Run the pipeline over the raw dataset and attach chart layout and tooltips.
pub fn render(records: &[CompensationRecord], locale: Locale) -> CareerChart {
    let points = chart_points(records, locale)
        .into_iter()
        .map(|point| RenderedPoint {
            tooltip: Tooltip::for_point(&point, locale),
            point,
        })
        .collect();

    CareerChart {
        chart: ChartSpec::for_locale(locale),
        points,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::career::record::PayType;

    #[test]
    fn series_are_drawn_in_stacking_order() {
        let spec = ChartSpec::for_locale(Locale::EnUs);
        let keys: Vec<_> = spec.series.iter().map(|s| s.data_key).collect();
        assert_eq!(keys, vec!["net", "grossLayer", "bonusOverlay", "gna"]);
        assert_eq!(spec.series[3].kind, SeriesKind::Line);
        assert!(spec.series.iter().all(|s| !s.connect_nulls));
    }

    #[test]
    fn names_follow_the_locale() {
        let pl = ChartSpec::for_locale(Locale::PlPl);
        assert_eq!(pl.title, "Wynagrodzenie a Średnia Krajowa");
        assert_eq!(pl.series[0].name, "Netto");

        let en = ChartSpec::for_locale(Locale::EnUs);
        assert_eq!(en.series[3].name, "Gross National Average");
    }

    #[test]
    fn rendered_points_flatten_with_tooltips() {
        let records = vec![CompensationRecord::new("Jan 2023", 0.0, 5000.0, 6900.0, PayType::Salary)];
        let chart = render(&records, Locale::EnUs);
        let value = serde_json::to_value(&chart).unwrap();

        let point = &value["points"][0];
        assert_eq!(point["monthLabel"], "Jan 2023");
        assert!(point["grossLayer"].is_null());
        assert_eq!(point["tooltip"]["title"], "Jan 2023");
        assert_eq!(point["tooltip"]["lines"][0]["kind"], "net");
        assert_eq!(value["chart"]["xKey"], "monthLabel");
    }

    #[test]
    fn empty_dataset_renders_an_empty_chart() {
        let chart = render(&[], Locale::PlPl);
        assert!(chart.points.is_empty());
        assert_eq!(chart.chart.series.len(), 4);
    }
}
