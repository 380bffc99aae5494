use std::fmt;

use serde::Serialize;

use super::locale::Locale;
use super::series::ChartPoint;

/// Largest number of fraction digits shown for amounts.
const AMOUNT_FRACTION_DIGITS: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum LineKind {
    Gross,
    Net,
    BonusMonth,
    Gna,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TooltipLine {
    pub kind: LineKind,
    pub label: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    pub color: &'static str,
}

impl fmt::Display for TooltipLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.value {
            Some(value) => write!(f, "{} {}", self.label, value),
            None => f.write_str(self.label),
        }
    }
}

/// Hover card for one chart point.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Tooltip {
    pub title: String,
    pub lines: Vec<TooltipLine>,
}

impl Tooltip {
    pub fn for_point(point: &ChartPoint, locale: Locale) -> Self {
        let pl = locale == Locale::PlPl;
        let amount = |v: f64| locale.format_number(v, AMOUNT_FRACTION_DIGITS);
        let mut lines = Vec::with_capacity(4);

        if point.gross > 0.0 {
            lines.push(TooltipLine {
                kind: LineKind::Gross,
                label: if pl { "Brutto:" } else { "Gross:" },
                value: Some(amount(point.gross)),
                color: "#60a3bc",
            });
        }

        let net_label = match (point.is_bonus(), pl) {
            (true, true) => "Netto (z premią):",
            (true, false) => "Net (incl. Bonus):",
            (false, true) => "Netto:",
            (false, false) => "Net:",
        };
        lines.push(TooltipLine {
            kind: LineKind::Net,
            label: net_label,
            value: Some(amount(point.net)),
            color: "#0a3d62",
        });

        if point.is_bonus() {
            lines.push(TooltipLine {
                kind: LineKind::BonusMonth,
                label: if pl {
                    "Miesiąc bonusa dolce vita 💰"
                } else {
                    "Bonus dolce vita month 💰"
                },
                value: None,
                color: "#f7b731",
            });
        }

        lines.push(TooltipLine {
            kind: LineKind::Gna,
            label: if pl { "Średnia krajowa brutto:" } else { "GNA:" },
            value: Some(locale.format_number(point.gna, 0)),
            color: "#079992",
        });

        Self {
            title: point.month_label.clone(),
            lines,
        }
    }

    pub fn text_lines(&self) -> Vec<String> {
        self.lines.iter().map(ToString::to_string).collect()
    }
}

impl fmt::Display for Tooltip {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.title)?;
        for line in &self.lines {
            write!(f, "\n{line}")?;
        }
        Ok(())
    }
}
