use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Fallback category label used whenever a foreign key does not resolve
/// or a display name is absent from the payload.
pub const UNSPECIFIED: &str = "ไม่ระบุ";

// ---------------------------------------------------------------------------
// Bulk payload
// ---------------------------------------------------------------------------

/// The bulk document returned by `GET /api/booking`.
///
/// Collection keys are the human-language keys of the external data source
/// and must stay exactly as they are on the wire. Every collection is
/// optional: `None` means the key was absent from the payload, which is not
/// the same thing as a present-but-empty array.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BookingDataset {
    /// Branches ("สาขา").
    #[serde(rename = "สาขา", skip_serializing_if = "Option::is_none")]
    pub branches: Option<Vec<Branch>>,
    /// Rooms ("ห้อง").
    #[serde(rename = "ห้อง", skip_serializing_if = "Option::is_none")]
    pub rooms: Option<Vec<Room>>,
    /// Booking headers ("การจองห้อง").
    #[serde(rename = "การจองห้อง", skip_serializing_if = "Option::is_none")]
    pub headers: Option<Vec<BookingHeader>>,
    /// Booking detail lines ("รายละเอียดการจอง").
    #[serde(rename = "รายละเอียดการจอง", skip_serializing_if = "Option::is_none")]
    pub details: Option<Vec<BookingDetail>>,
}

// ---------------------------------------------------------------------------
// Entities
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Branch {
    #[serde(rename = "Branch_ID")]
    pub branch_id: String,
    /// Display name; absent names fall back to [`UNSPECIFIED`] at join time.
    #[serde(rename = "สาขา", skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Room {
    #[serde(rename = "Room_ID")]
    pub room_id: String,
    #[serde(rename = "ชื่อห้อง", skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

/// Umbrella record grouping detail lines under one requester.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookingHeader {
    #[serde(rename = "Booking_ID")]
    pub booking_id: String,
    #[serde(rename = "Branch_ID", skip_serializing_if = "Option::is_none")]
    pub branch_id: Option<String>,
    /// Free-text role/position label (อาจารย์, นิสิต, เจ้าหน้าที่, ...).
    #[serde(rename = "ตำแหน่ง", skip_serializing_if = "Option::is_none")]
    pub position: Option<String>,
}

/// One room reservation occurrence.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookingDetail {
    #[serde(rename = "Booking_ID")]
    pub booking_id: String,
    #[serde(rename = "Room_ID")]
    pub room_id: String,
    /// Calendar date, `YYYY-MM-DD` (an appended `T...` time part is tolerated).
    #[serde(rename = "วันที่")]
    pub date: String,
    #[serde(rename = "เวลาเริ่ม")]
    pub start_time: String,
    #[serde(rename = "เวลาสิ้นสุด")]
    pub end_time: String,
}

// ---------------------------------------------------------------------------
// Join helpers
// ---------------------------------------------------------------------------

impl BookingDataset {
    /// Branch_ID -> display name, absent names already collapsed to the sentinel.
    pub fn branch_names(&self) -> HashMap<&str, &str> {
        self.branches
            .iter()
            .flatten()
            .map(|b| {
                (
                    b.branch_id.as_str(),
                    b.name.as_deref().unwrap_or(UNSPECIFIED),
                )
            })
            .collect()
    }

    /// Room_ID -> display name, absent names already collapsed to the sentinel.
    pub fn room_names(&self) -> HashMap<&str, &str> {
        self.rooms
            .iter()
            .flatten()
            .map(|r| (r.room_id.as_str(), r.name.as_deref().unwrap_or(UNSPECIFIED)))
            .collect()
    }

    /// Booking_ID -> header, for the detail -> header left join.
    pub fn headers_by_id(&self) -> HashMap<&str, &BookingHeader> {
        self.headers
            .iter()
            .flatten()
            .map(|h| (h.booking_id.as_str(), h))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_thai_payload_keys() {
        let raw = serde_json::json!({
            "สาขา": [{ "Branch_ID": "B1", "สาขา": "IT" }],
            "ห้อง": [{ "Room_ID": "R1", "ชื่อห้อง": "ห้องประชุม 1" }],
            "การจองห้อง": [{ "Booking_ID": "BK1", "Branch_ID": "B1", "ตำแหน่ง": "นิสิต" }],
            "รายละเอียดการจอง": [{
                "Booking_ID": "BK1",
                "Room_ID": "R1",
                "วันที่": "2024-03-15",
                "เวลาเริ่ม": "09:00",
                "เวลาสิ้นสุด": "12:00"
            }]
        });
        let data: BookingDataset = serde_json::from_value(raw).unwrap();
        assert_eq!(data.branches.as_ref().unwrap().len(), 1);
        assert_eq!(data.details.as_ref().unwrap()[0].room_id, "R1");
        assert_eq!(
            data.headers.as_ref().unwrap()[0].position.as_deref(),
            Some("นิสิต")
        );
    }

    #[test]
    fn absent_collections_stay_none() {
        let data: BookingDataset = serde_json::from_value(serde_json::json!({})).unwrap();
        assert!(data.branches.is_none());
        assert!(data.details.is_none());
    }

    #[test]
    fn lookup_maps_collapse_missing_names() {
        let data: BookingDataset = serde_json::from_value(serde_json::json!({
            "สาขา": [{ "Branch_ID": "B1" }],
            "ห้อง": [{ "Room_ID": "R1" }]
        }))
        .unwrap();
        assert_eq!(data.branch_names().get("B1"), Some(&UNSPECIFIED));
        assert_eq!(data.room_names().get("R1"), Some(&UNSPECIFIED));
    }
}
