//! Styling table for the category legends.
//!
//! Known branch and position labels get fixed colours so they look the same
//! on every card; anything else cycles through the fallback palette. Purely
//! presentational, keyed by the category names the aggregation layer emits.

use contracts::dashboards::d101_room_usage::dto::UsageDimension;
use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Fallback cycle for labels without a fixed colour.
pub const PALETTE: [&str; 10] = [
    "#5DB9DD", "#FF7800", "#21562F", "#9B7128", "#403984", "#FF008F", "#224A93", "#FFCC00",
    "#333333", "#FF6384",
];

static BRANCH_COLORS: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        ("IT", "#5DB9DD"),
        ("CS", "#FF7800"),
        ("GIS", "#21562F"),
        ("CMD", "#9B7128"),
        ("IS", "#403984"),
        ("CA", "#FF008F"),
        ("สำนักงานเลขานุการ", "#224A93"),
    ])
});

static POSITION_COLORS: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        ("อาจารย์", "#224A93"),
        ("นิสิต", "#FFCC00"),
        ("เจ้าหน้าที่", "#333333"),
        ("บุคคลภายนอก", "#FF6384"),
    ])
});

/// Colour for a legend entry: the fixed mapping when the label is known,
/// otherwise the palette slot for its position in the list.
pub fn category_color(dimension: UsageDimension, name: &str, index: usize) -> &'static str {
    let mapped = match dimension {
        UsageDimension::Branch => BRANCH_COLORS.get(name),
        UsageDimension::Position => POSITION_COLORS.get(name),
    };
    mapped.copied().unwrap_or(PALETTE[index % PALETTE.len()])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_labels_use_their_fixed_colour() {
        assert_eq!(category_color(UsageDimension::Branch, "IT", 5), "#5DB9DD");
        assert_eq!(
            category_color(UsageDimension::Position, "นิสิต", 0),
            "#FFCC00"
        );
    }

    #[test]
    fn unknown_labels_cycle_the_palette() {
        assert_eq!(category_color(UsageDimension::Branch, "???", 0), PALETTE[0]);
        assert_eq!(
            category_color(UsageDimension::Branch, "???", PALETTE.len() + 1),
            PALETTE[1]
        );
    }
}
