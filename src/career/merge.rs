// Merging of raw dataset rows into one entry per month label.
//
// Payroll exports list a bonus payout as a separate row for the same month,
// so rows sharing a label are folded together: amounts add up, the bonus flag
// sticks, and the timestamp hint keeps its maximum.

use std::collections::HashMap;

use serde::Serialize;

use super::record::{CompensationRecord, PayType};

/// All raw rows sharing one month label, reduced to a single entry.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MergedMonth {
    pub month: String,
    pub month_unix: f64,
    pub gross: f64,
    pub net: f64,
    /// Reference average from the first row seen for this month.
    pub gna: f64,
    #[serde(rename = "type")]
    pub kind: PayType,
}

impl MergedMonth {
    fn from_record(record: &CompensationRecord) -> Self {
        Self {
            month: record.month.clone(),
            month_unix: record.month_unix.value(),
            gross: record.gross.value(),
            net: record.net.value(),
            gna: record.gna.value(),
            kind: record.kind,
        }
    }

    fn absorb(&mut self, record: &CompensationRecord) {
        self.gross += record.gross.value();
        self.net += record.net.value();
        self.kind = self.kind.combine(record.kind);
        self.month_unix = self.month_unix.max(record.month_unix.value());
    }

    pub fn is_bonus(&self) -> bool {
        self.kind.is_bonus()
    }
}

/// Month label → merged entry. Iteration follows first appearance in the
/// input; callers that need chronological order sort afterwards.
#[derive(Debug, Clone, Default)]
pub struct MergedMonths {
    months: Vec<MergedMonth>,
    index: HashMap<String, usize>,
}

impl MergedMonths {
    pub fn get(&self, month: &str) -> Option<&MergedMonth> {
        self.index.get(month).map(|&i| &self.months[i])
    }

    pub fn len(&self) -> usize {
        self.months.len()
    }

    pub fn is_empty(&self) -> bool {
        self.months.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &MergedMonth> {
        self.months.iter()
    }

    pub fn into_vec(self) -> Vec<MergedMonth> {
        self.months
    }

    fn accumulate(mut self, record: &CompensationRecord) -> Self {
        match self.index.get(&record.month) {
            Some(&i) => self.months[i].absorb(record),
            None => {
                self.index.insert(record.month.clone(), self.months.len());
                self.months.push(MergedMonth::from_record(record));
            }
        }
        self
    }
}

/// Fold raw rows into one [`MergedMonth`] per distinct label.
pub fn merge_records<'a, I>(records: I) -> MergedMonths
where
    I: IntoIterator<Item = &'a CompensationRecord>,
{
    records
        .into_iter()
        .fold(MergedMonths::default(), MergedMonths::accumulate)
}
