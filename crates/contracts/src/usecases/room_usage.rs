//! Two-level room-usage breakdown for the per-room distribution view.
//!
//! Details are grouped by resolved room name first, then within each room by
//! a runtime-selected dimension (branch or role/position). Sub-counts carry
//! both the share of the room's total and the raw count, so the consumer
//! can flip between percentage and absolute display without recomputation.

use crate::dashboards::common::CategoryCount;
use crate::dashboards::d101_room_usage::dto::{CategoryShare, RoomUsage, UsageDimension};
use crate::domain::booking::{BookingDataset, UNSPECIFIED};
use crate::shared::dates;
use crate::usecases::report_aggregation::bump;

/// Per-room category breakdown for one year.
///
/// Needs all four collections; any absent one short-circuits to an empty
/// result. Unresolved joins fall back to the sentinel on either level, so
/// no detail of the target year is dropped.
pub fn room_usage_breakdown(
    data: &BookingDataset,
    year: i32,
    dimension: UsageDimension,
) -> Vec<RoomUsage> {
    let (Some(_), Some(_), Some(_), Some(details)) = (
        data.rooms.as_ref(),
        data.branches.as_ref(),
        data.headers.as_ref(),
        data.details.as_ref(),
    ) else {
        return Vec::new();
    };
    let rooms = data.room_names();
    let branches = data.branch_names();
    let headers = data.headers_by_id();

    let mut buckets: Vec<(String, Vec<CategoryCount>)> = Vec::new();
    for detail in details {
        if dates::booking_year(&detail.date) != Some(year) {
            continue;
        }
        let room = rooms
            .get(detail.room_id.as_str())
            .copied()
            .unwrap_or(UNSPECIFIED);
        let header = headers.get(detail.booking_id.as_str());
        let category = match dimension {
            UsageDimension::Branch => header
                .and_then(|h| h.branch_id.as_deref())
                .and_then(|id| branches.get(id).copied())
                .unwrap_or(UNSPECIFIED),
            UsageDimension::Position => header
                .and_then(|h| h.position.as_deref())
                .unwrap_or(UNSPECIFIED),
        };

        let idx = match buckets.iter().position(|(name, _)| name.as_str() == room) {
            Some(idx) => idx,
            None => {
                buckets.push((room.to_string(), Vec::new()));
                buckets.len() - 1
            }
        };
        bump(&mut buckets[idx].1, category);
    }

    buckets
        .into_iter()
        .map(|(name, categories)| {
            let total: usize = categories.iter().map(|c| c.count).sum();
            let data = categories
                .into_iter()
                .map(|c| CategoryShare {
                    value: format!("{:.2}", c.count as f64 * 100.0 / total as f64),
                    name: c.name,
                    count: c.count,
                })
                .collect();
            RoomUsage { name, data }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dataset() -> BookingDataset {
        serde_json::from_value(serde_json::json!({
            "สาขา": [
                { "Branch_ID": "B1", "สาขา": "IT" },
                { "Branch_ID": "B2", "สาขา": "CS" }
            ],
            "ห้อง": [
                { "Room_ID": "R1", "ชื่อห้อง": "ห้องประชุม" },
                { "Room_ID": "R2", "ชื่อห้อง": "ห้องแลป" }
            ],
            "การจองห้อง": [
                { "Booking_ID": "BK1", "Branch_ID": "B1", "ตำแหน่ง": "นิสิต" },
                { "Booking_ID": "BK2", "Branch_ID": "B2", "ตำแหน่ง": "อาจารย์" },
                { "Booking_ID": "BK3", "Branch_ID": "B1", "ตำแหน่ง": "นิสิต" }
            ],
            "รายละเอียดการจอง": [
                { "Booking_ID": "BK1", "Room_ID": "R1", "วันที่": "2024-01-10",
                  "เวลาเริ่ม": "09:00", "เวลาสิ้นสุด": "10:00" },
                { "Booking_ID": "BK2", "Room_ID": "R1", "วันที่": "2024-01-11",
                  "เวลาเริ่ม": "09:00", "เวลาสิ้นสุด": "10:00" },
                { "Booking_ID": "BK3", "Room_ID": "R1", "วันที่": "2024-01-12",
                  "เวลาเริ่ม": "09:00", "เวลาสิ้นสุด": "10:00" },
                { "Booking_ID": "BK1", "Room_ID": "R2", "วันที่": "2024-02-01",
                  "เวลาเริ่ม": "09:00", "เวลาสิ้นสุด": "10:00" }
            ]
        }))
        .unwrap()
    }

    #[test]
    fn groups_by_room_then_branch() {
        let usage = room_usage_breakdown(&dataset(), 2024, UsageDimension::Branch);
        assert_eq!(usage.len(), 2);

        let meeting = &usage[0];
        assert_eq!(meeting.name, "ห้องประชุม");
        assert_eq!(meeting.data.len(), 2);
        assert_eq!(meeting.data[0].name, "IT");
        assert_eq!(meeting.data[0].count, 2);
        assert_eq!(meeting.data[0].value, "66.67");
        assert_eq!(meeting.data[1].name, "CS");
        assert_eq!(meeting.data[1].value, "33.33");

        let lab = &usage[1];
        assert_eq!(lab.name, "ห้องแลป");
        assert_eq!(lab.data, vec![CategoryShare {
            name: "IT".to_string(),
            value: "100.00".to_string(),
            count: 1,
        }]);
    }

    #[test]
    fn position_dimension_reuses_the_same_buckets() {
        let usage = room_usage_breakdown(&dataset(), 2024, UsageDimension::Position);
        let meeting = &usage[0];
        assert_eq!(meeting.data[0].name, "นิสิต");
        assert_eq!(meeting.data[0].count, 2);
        assert_eq!(meeting.data[1].name, "อาจารย์");
        assert_eq!(meeting.data[1].count, 1);
    }

    #[test]
    fn shares_sum_to_one_hundred_within_rounding() {
        for dimension in [UsageDimension::Branch, UsageDimension::Position] {
            for room in room_usage_breakdown(&dataset(), 2024, dimension) {
                let sum: f64 = room
                    .data
                    .iter()
                    .map(|c| c.value.parse::<f64>().unwrap())
                    .sum();
                assert!((sum - 100.0).abs() < 0.05, "room {}: {}", room.name, sum);
            }
        }
    }

    #[test]
    fn unresolved_keys_fall_back_to_the_sentinel() {
        let data: BookingDataset = serde_json::from_value(serde_json::json!({
            "สาขา": [],
            "ห้อง": [],
            "การจองห้อง": [],
            "รายละเอียดการจอง": [
                { "Booking_ID": "BK9", "Room_ID": "R9", "วันที่": "2024-05-01",
                  "เวลาเริ่ม": "09:00", "เวลาสิ้นสุด": "10:00" }
            ]
        }))
        .unwrap();
        let usage = room_usage_breakdown(&data, 2024, UsageDimension::Branch);
        assert_eq!(usage.len(), 1);
        assert_eq!(usage[0].name, UNSPECIFIED);
        assert_eq!(usage[0].data[0].name, UNSPECIFIED);
        assert_eq!(usage[0].data[0].value, "100.00");
    }

    #[test]
    fn missing_collection_short_circuits() {
        let data: BookingDataset = serde_json::from_value(serde_json::json!({
            "ห้อง": [],
            "การจองห้อง": [],
            "รายละเอียดการจอง": []
        }))
        .unwrap();
        assert!(room_usage_breakdown(&data, 2024, UsageDimension::Branch).is_empty());
    }

    #[test]
    fn year_filter_applies_before_grouping() {
        assert!(room_usage_breakdown(&dataset(), 2022, UsageDimension::Branch).is_empty());
    }
}
