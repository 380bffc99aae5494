// Career chart pipeline.
//
// raw dataset rows → merge by month label → parse/localize month labels →
// derived series (gross layer, bonus overlay) → chart layout + tooltips.
// Everything here is pure and synchronous; the HTTP layer only picks the
// locale and serializes the result.

pub mod amount;
pub mod chart;
pub mod dataset;
pub mod locale;
pub mod merge;
pub mod month;
pub mod record;
pub mod series;
pub mod tooltip;

pub use amount::{parse_amount, Amount};
pub use chart::{render, CareerChart, ChartSpec};
pub use dataset::DatasetError;
pub use locale::{Locale, UnknownLocale};
pub use merge::{merge_records, MergedMonth, MergedMonths};
pub use month::{localize_month, parse_month, SortKey};
pub use record::{CompensationRecord, PayType};
pub use series::{build_points, chart_points, ChartPoint};
pub use tooltip::Tooltip;
