//! Snapshot addressing.
//!
//! Metrics snapshots are persisted by an external key-value store under a
//! [`SnapshotKey`]. This module defines the key and the comparison periods the
//! reporting layer asks for.

use chrono::{Datelike, Months, NaiveDate};
use serde::{Deserialize, Serialize};

/// Which earlier period a comparison is made against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ComparisonKind {
    /// The month immediately before.
    PreviousMonth,
    /// The same month one year earlier.
    SameMonthLastYear,
}

impl ComparisonKind {
    fn months_back(self) -> u32 {
        match self {
            ComparisonKind::PreviousMonth => 1,
            ComparisonKind::SameMonthLastYear => 12,
        }
    }
}

/// Address of a snapshot: one establishment, one reporting month.
///
/// # Example
///
/// ```
/// use hr_metrics_engine::models::{ComparisonKind, SnapshotKey};
/// use chrono::NaiveDate;
///
/// let key = SnapshotKey::new("est_01", NaiveDate::from_ymd_opt(2025, 3, 17).unwrap());
/// assert_eq!(key.period, NaiveDate::from_ymd_opt(2025, 3, 1).unwrap());
///
/// let previous = key.comparison_key(ComparisonKind::PreviousMonth).unwrap();
/// assert_eq!(previous.period, NaiveDate::from_ymd_opt(2025, 2, 1).unwrap());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SnapshotKey {
    /// Establishment identifier.
    pub establishment_id: String,
    /// First day of the reporting month.
    pub period: NaiveDate,
}

impl SnapshotKey {
    /// Creates a key, normalizing `date` to the first day of its month.
    pub fn new(establishment_id: impl Into<String>, date: NaiveDate) -> Self {
        Self {
            establishment_id: establishment_id.into(),
            period: month_start(date),
        }
    }

    /// Key of the snapshot to compare this one against.
    ///
    /// Returns `None` only when the date arithmetic leaves chrono's range.
    pub fn comparison_key(&self, kind: ComparisonKind) -> Option<SnapshotKey> {
        let period = self
            .period
            .checked_sub_months(Months::new(kind.months_back()))?;
        Some(SnapshotKey {
            establishment_id: self.establishment_id.clone(),
            period,
        })
    }

    /// Human-readable period label, e.g. `2025-03`.
    pub fn period_label(&self) -> String {
        self.period.format("%Y-%m").to_string()
    }
}

/// First day of the month containing `date`.
pub fn month_start(date: NaiveDate) -> NaiveDate {
    date.with_day(1).unwrap_or(date)
}
