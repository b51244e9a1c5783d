use serde::{Deserialize, Serialize};

/// Second-level grouping dimension on the room-usage view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UsageDimension {
    /// Group each room's bookings by the requester's branch.
    Branch,
    /// Group each room's bookings by the requester's role/position.
    Position,
}

impl UsageDimension {
    pub fn as_str(&self) -> &'static str {
        match self {
            UsageDimension::Branch => "branch",
            UsageDimension::Position => "position",
        }
    }

    pub fn from_str_or_default(s: &str) -> Self {
        match s {
            "position" => UsageDimension::Position,
            _ => UsageDimension::Branch,
        }
    }
}

/// One category slice inside a room bucket.
///
/// `value` is the share of the room's total, formatted to two decimals the
/// way the consumer displays it; `count` keeps the raw number so the display
/// can toggle between the two without recomputation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryShare {
    pub name: String,
    pub value: String,
    pub count: usize,
}

/// Per-room breakdown: `{name, data: [{name, value, count}]}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoomUsage {
    pub name: String,
    pub data: Vec<CategoryShare>,
}
