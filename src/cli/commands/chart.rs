use std::path::PathBuf;

use clap::Subcommand;

use crate::career::{self, dataset, CareerChart, Locale, SortKey};
use crate::cli::OutputFormat;
use crate::config::config;

#[derive(Subcommand)]
pub enum ChartCommands {
    #[command(about = "Print every chart point with its tooltip")]
    Show {
        #[arg(long, help = "Dataset file (defaults to CAREER_DATA_PATH)")]
        file: Option<PathBuf>,
        #[arg(long, help = "Display locale: en-US or pl-PL")]
        locale: Option<Locale>,
    },

    #[command(about = "Print the tooltip for one month, e.g. \"Jun 2022\"")]
    Tooltip {
        #[arg(help = "Month label as written in the dataset")]
        month: String,
        #[arg(long, help = "Dataset file (defaults to CAREER_DATA_PATH)")]
        file: Option<PathBuf>,
        #[arg(long, help = "Display locale: en-US or pl-PL")]
        locale: Option<Locale>,
    },
}

pub fn handle(cmd: ChartCommands, output_format: OutputFormat) -> anyhow::Result<()> {
    match cmd {
        ChartCommands::Show { file, locale } => {
            let chart = load_chart(file, locale)?;
            match output_format {
                OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&chart)?),
                OutputFormat::Text => {
                    println!("{}", chart.chart.title);
                    for rendered in &chart.points {
                        println!();
                        println!("{}", rendered.tooltip);
                    }
                }
            }
            Ok(())
        }
        ChartCommands::Tooltip { month, file, locale } => {
            let chart = load_chart(file, locale)?;
            let rendered = find_month(&chart, &month)
                .ok_or_else(|| anyhow::anyhow!("Month '{}' not found in dataset", month.trim()))?;

            match output_format {
                OutputFormat::Json => println!("{}", serde_json::to_string_pretty(rendered)?),
                OutputFormat::Text => println!("{}", rendered.tooltip),
            }
            Ok(())
        }
    }
}

fn load_chart(file: Option<PathBuf>, locale: Option<Locale>) -> anyhow::Result<CareerChart> {
    let settings = &config().career;
    let path = file.unwrap_or_else(|| settings.data_path.clone());
    let records = dataset::load(&path)?;
    Ok(career::render(&records, locale.unwrap_or(settings.default_locale)))
}

/// Exact dataset label first, then any label naming the same calendar month.
fn find_month<'a>(chart: &'a CareerChart, month: &str) -> Option<&'a career::chart::RenderedPoint> {
    let month = month.trim();
    if let Some(found) = chart.points.iter().find(|p| p.point.month == month) {
        return Some(found);
    }

    let key = SortKey::parse(month);
    if key.is_malformed() {
        return None;
    }
    chart.points.iter().find(|p| p.point.sort_key == key)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::career::{CompensationRecord, PayType};

    fn chart() -> CareerChart {
        let records = vec![
            CompensationRecord::new("Jun 2022", 12000.0, 8600.0, 6400.0, PayType::Bonus),
            CompensationRecord::new("May 2022", 10000.0, 7100.0, 6400.0, PayType::Salary),
        ];
        career::render(&records, Locale::EnUs)
    }

    #[test]
    fn finds_months_by_exact_label() {
        let chart = chart();
        let found = find_month(&chart, " Jun 2022 ").unwrap();
        assert!(found.point.is_bonus());
    }

    #[test]
    fn finds_months_by_equivalent_label() {
        let chart = chart();
        let found = find_month(&chart, "may 2022").unwrap();
        assert_eq!(found.point.month, "May 2022");
        assert!(find_month(&chart, "June 2022").is_some());
    }

    #[test]
    fn unknown_or_malformed_months_are_not_found() {
        let chart = chart();
        assert!(find_month(&chart, "Jul 2022").is_none());
        assert!(find_month(&chart, "not a month").is_none());
    }
}
