//! Table-header helpers for sortable columns.

use contracts::shared::list_ops::{SortKey, SortSpec};

/// Sort indicator for a column header.
pub fn get_sort_indicator(spec: &SortSpec, key: SortKey) -> &'static str {
    if spec.key == Some(key) {
        if spec.ascending {
            " ▲"
        } else {
            " ▼"
        }
    } else {
        " ⇅"
    }
}

/// CSS class for the indicator, highlighting the active column.
pub fn get_sort_class(spec: &SortSpec, key: SortKey) -> &'static str {
    if spec.key == Some(key) {
        "table__sort-indicator table__sort-indicator--active"
    } else {
        "table__sort-indicator"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn indicator_follows_the_active_key() {
        let mut spec = SortSpec::default();
        assert_eq!(get_sort_indicator(&spec, SortKey::Name), " ⇅");
        spec.toggle(SortKey::Name);
        assert_eq!(get_sort_indicator(&spec, SortKey::Name), " ▲");
        spec.toggle(SortKey::Name);
        assert_eq!(get_sort_indicator(&spec, SortKey::Name), " ▼");
        assert_eq!(get_sort_indicator(&spec, SortKey::Count), " ⇅");
    }

    #[test]
    fn active_column_gets_the_highlight_class() {
        let mut spec = SortSpec::default();
        spec.toggle(SortKey::Count);
        assert!(get_sort_class(&spec, SortKey::Count).contains("--active"));
        assert!(!get_sort_class(&spec, SortKey::Name).contains("--active"));
    }
}
