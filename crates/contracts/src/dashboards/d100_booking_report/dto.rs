use serde::{Deserialize, Serialize};

/// One bucket of the fixed 12-month series.
///
/// `month` is the calendar month number (1-12); the series is always emitted
/// complete and in month order, so bucket index `i` is month `i + 1`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthSlot {
    pub month: u32,
    /// Thai locale month name, pre-filled even for empty buckets.
    pub name: String,
    pub count: usize,
}

/// Winner of a peak reduction (busiest month / busiest weekday).
///
/// An empty year yields the `{name: "", count: 0}` sentinel.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PeakCategory {
    pub name: String,
    pub count: usize,
}

/// Peak-usage summary for one selected year.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PeakUsage {
    pub month: PeakCategory,
    pub day_of_week: PeakCategory,
    /// Mean booking length in hours; 0.0 when the year has no details.
    pub avg_duration_hours: f64,
}
