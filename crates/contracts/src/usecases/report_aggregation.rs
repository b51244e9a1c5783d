//! Aggregation layer of the report dashboard.
//!
//! Every function takes the immutable bulk payload plus a target year and
//! produces plain view-model rows. The governing policy is "degrade to
//! empty/sentinel, never throw": a missing collection short-circuits to an
//! empty result, an unresolved foreign key is counted under the
//! "unspecified" sentinel, and a detail is only ever dropped when its
//! derived year does not match.

use crate::dashboards::common::CategoryCount;
use crate::dashboards::d100_booking_report::dto::{MonthSlot, PeakCategory, PeakUsage};
use crate::domain::booking::{BookingDataset, UNSPECIFIED};
use crate::shared::dates;
use chrono::Datelike;

/// Increment `name`'s row, appending it on first sight. Keeps first-seen
/// order, which the peak reductions rely on for their tie-break.
pub(crate) fn bump(rows: &mut Vec<CategoryCount>, name: &str) {
    match rows.iter_mut().find(|r| r.name == name) {
        Some(row) => row.count += 1,
        None => rows.push(CategoryCount::new(name, 1)),
    }
}

/// Booking counts per role/position label for one year.
///
/// Left-joins each detail to its header; a detail whose header (or whose
/// header's label) is missing is counted under the sentinel.
pub fn bookings_by_role(data: &BookingDataset, year: i32) -> Vec<CategoryCount> {
    let (Some(_), Some(details)) = (data.headers.as_ref(), data.details.as_ref()) else {
        return Vec::new();
    };
    let headers = data.headers_by_id();

    let mut rows = Vec::new();
    for detail in details {
        if dates::booking_year(&detail.date) != Some(year) {
            continue;
        }
        let role = headers
            .get(detail.booking_id.as_str())
            .and_then(|h| h.position.as_deref())
            .unwrap_or(UNSPECIFIED);
        bump(&mut rows, role);
    }
    rows
}

/// Booking counts per room for one year.
///
/// Counting keys off `Room_ID` (no join needed); display names are resolved
/// only at output time, so two ids sharing a name stay separate rows, the
/// same way the data source reports them.
pub fn bookings_by_room(data: &BookingDataset, year: i32) -> Vec<CategoryCount> {
    let (Some(_), Some(details)) = (data.rooms.as_ref(), data.details.as_ref()) else {
        return Vec::new();
    };

    let mut by_id = Vec::new();
    for detail in details {
        if dates::booking_year(&detail.date) != Some(year) {
            continue;
        }
        bump(&mut by_id, &detail.room_id);
    }

    let names = data.room_names();
    by_id
        .into_iter()
        .map(|row| {
            let name = names.get(row.name.as_str()).copied().unwrap_or(UNSPECIFIED);
            CategoryCount::new(name, row.count)
        })
        .collect()
}

/// Booking counts per branch name for one year.
///
/// Two-step join: detail -> header (branch id) -> branch (display name).
/// Counting keys off the resolved name, so every unresolved step collapses
/// into one sentinel row.
pub fn bookings_by_branch(data: &BookingDataset, year: i32) -> Vec<CategoryCount> {
    let (Some(_), Some(_), Some(details)) = (
        data.headers.as_ref(),
        data.branches.as_ref(),
        data.details.as_ref(),
    ) else {
        return Vec::new();
    };
    let headers = data.headers_by_id();
    let branches = data.branch_names();

    let mut rows = Vec::new();
    for detail in details {
        if dates::booking_year(&detail.date) != Some(year) {
            continue;
        }
        let branch = headers
            .get(detail.booking_id.as_str())
            .and_then(|h| h.branch_id.as_deref())
            .and_then(|id| branches.get(id).copied())
            .unwrap_or(UNSPECIFIED);
        bump(&mut rows, branch);
    }
    rows
}

/// Distinct years observed across all detail dates, newest first.
pub fn available_years(data: &BookingDataset) -> Vec<i32> {
    let Some(details) = data.details.as_ref() else {
        return Vec::new();
    };
    let mut years: Vec<i32> = details
        .iter()
        .filter_map(|d| dates::booking_year(&d.date))
        .collect();
    years.sort_unstable_by(|a, b| b.cmp(a));
    years.dedup();
    years
}

/// Fixed 12-bucket series for one year, pre-labelled with month names.
///
/// Months without bookings keep count 0; the output stays in month-index
/// order, which the consumer relies on.
pub fn monthly_series(data: &BookingDataset, year: i32) -> Vec<MonthSlot> {
    let Some(details) = data.details.as_ref() else {
        return Vec::new();
    };

    let mut months: Vec<MonthSlot> = (1..=12)
        .map(|m| MonthSlot {
            month: m,
            name: dates::month_name(m),
            count: 0,
        })
        .collect();

    for detail in details {
        let Some(date) = dates::parse_booking_date(&detail.date) else {
            continue;
        };
        if date.year() == year {
            months[date.month0() as usize].count += 1;
        }
    }
    months
}

/// Scan in first-seen order; a later category needs a strictly higher count
/// to replace the running maximum, so ties go to the earliest one.
fn peak_of(rows: &[CategoryCount]) -> PeakCategory {
    let mut max = PeakCategory::default();
    for row in rows {
        if row.count > max.count {
            max = PeakCategory {
                name: row.name.clone(),
                count: row.count,
            };
        }
    }
    max
}

/// Busiest month, busiest weekday and average booking duration for one year.
pub fn peak_usage(data: &BookingDataset, year: i32) -> PeakUsage {
    let Some(details) = data.details.as_ref() else {
        return PeakUsage::default();
    };

    let mut month_counts = Vec::new();
    let mut day_counts = Vec::new();
    let mut total_hours = 0.0;
    let mut filtered = 0usize;

    for detail in details {
        let Some(date) = dates::parse_booking_date(&detail.date) else {
            continue;
        };
        if date.year() != year {
            continue;
        }
        filtered += 1;
        bump(&mut month_counts, &dates::month_name(date.month()));
        bump(&mut day_counts, &dates::weekday_name(date));
        total_hours += dates::duration_hours(&detail.start_time, &detail.end_time);
    }

    let avg_duration_hours = if filtered == 0 {
        0.0
    } else {
        total_hours / filtered as f64
    };

    PeakUsage {
        month: peak_of(&month_counts),
        day_of_week: peak_of(&day_counts),
        avg_duration_hours,
    }
}
