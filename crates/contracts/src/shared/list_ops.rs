//! Sort/paginate primitives for the report tables.
//!
//! Pure functions over already-aggregated rows; the frontend holds one
//! [`SortSpec`] and one current page per table and re-derives the visible
//! slice on every transition.

use crate::dashboards::common::CategoryCount;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Number of rows per table page on the report dashboard.
pub const PAGE_SIZE: usize = 6;

/// Column a table can be ordered by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortKey {
    Name,
    Count,
}

/// Per-table sort state. `key == None` keeps the aggregation's first-seen
/// row order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortSpec {
    pub key: Option<SortKey>,
    pub ascending: bool,
}

impl Default for SortSpec {
    fn default() -> Self {
        Self {
            key: None,
            ascending: true,
        }
    }
}

impl SortSpec {
    /// Header-click transition: clicking the active key flips the direction,
    /// clicking a new key selects it ascending.
    pub fn toggle(&mut self, key: SortKey) {
        if self.key == Some(key) {
            self.ascending = !self.ascending;
        } else {
            self.key = Some(key);
            self.ascending = true;
        }
    }
}

fn compare(a: &CategoryCount, b: &CategoryCount, key: SortKey) -> Ordering {
    match key {
        SortKey::Name => a.name.cmp(&b.name),
        SortKey::Count => a.count.cmp(&b.count),
    }
}

/// Stable sort of the rows under `spec`; no key means the input order.
pub fn sort_rows(rows: &[CategoryCount], spec: &SortSpec) -> Vec<CategoryCount> {
    let mut sorted = rows.to_vec();
    if let Some(key) = spec.key {
        sorted.sort_by(|a, b| {
            let ord = compare(a, b, key);
            if spec.ascending {
                ord
            } else {
                ord.reverse()
            }
        });
    }
    sorted
}

/// 1-based page slice: `[(page - 1) * page_size, page * page_size)`.
pub fn paginate<T: Clone>(rows: &[T], page: usize, page_size: usize) -> Vec<T> {
    let start = page.saturating_sub(1) * page_size;
    let end = (start + page_size).min(rows.len());
    if start >= rows.len() {
        return Vec::new();
    }
    rows[start..end].to_vec()
}

/// `ceil(total / page_size)`, never below 1 so the pager always has a page.
pub fn total_pages(total: usize, page_size: usize) -> usize {
    if total == 0 {
        1
    } else {
        (total + page_size - 1) / page_size
    }
}

/// Selected year if it is still present in the dataset, otherwise the most
/// recent available one. `available` is expected sorted descending.
pub fn resolve_year(available: &[i32], selected: i32) -> Option<i32> {
    if available.contains(&selected) {
        Some(selected)
    } else {
        available.first().copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rows() -> Vec<CategoryCount> {
        vec![
            CategoryCount::new("นิสิต", 4),
            CategoryCount::new("อาจารย์", 2),
            CategoryCount::new("เจ้าหน้าที่", 4),
            CategoryCount::new("บุคคลภายนอก", 1),
        ]
    }

    #[test]
    fn no_key_keeps_first_seen_order() {
        let spec = SortSpec::default();
        assert_eq!(sort_rows(&rows(), &spec), rows());
    }

    #[test]
    fn sort_by_count_is_stable_idempotent_and_reversible() {
        let spec = SortSpec {
            key: Some(SortKey::Count),
            ascending: true,
        };
        let asc = sort_rows(&rows(), &spec);
        // Equal counts keep input order (นิสิต before เจ้าหน้าที่).
        assert_eq!(asc[0].count, 1);
        assert_eq!(asc[1].name, "อาจารย์");
        assert_eq!(asc[2].name, "นิสิต");
        assert_eq!(asc[3].name, "เจ้าหน้าที่");

        let again = sort_rows(&asc, &spec);
        assert_eq!(again, asc);

        let desc = sort_rows(&asc, &SortSpec {
            key: Some(SortKey::Count),
            ascending: false,
        });
        let mut reversed = asc.clone();
        reversed.reverse();
        assert_eq!(desc, reversed);
    }

    #[test]
    fn sort_by_name_is_lexicographic() {
        let spec = SortSpec {
            key: Some(SortKey::Name),
            ascending: true,
        };
        let sorted = sort_rows(&rows(), &spec);
        let mut names: Vec<String> = rows().into_iter().map(|r| r.name).collect();
        names.sort();
        let got: Vec<String> = sorted.into_iter().map(|r| r.name).collect();
        assert_eq!(got, names);
    }

    #[test]
    fn toggle_flips_active_key_and_resets_new_key() {
        let mut spec = SortSpec::default();
        spec.toggle(SortKey::Name);
        assert_eq!(spec.key, Some(SortKey::Name));
        assert!(spec.ascending);
        spec.toggle(SortKey::Name);
        assert!(!spec.ascending);
        spec.toggle(SortKey::Count);
        assert_eq!(spec.key, Some(SortKey::Count));
        assert!(spec.ascending);
    }

    #[test]
    fn pages_reconstruct_the_sequence() {
        let items: Vec<usize> = (0..20).collect();
        let pages = total_pages(items.len(), PAGE_SIZE);
        assert_eq!(pages, 4);
        let mut rebuilt = Vec::new();
        for page in 1..=pages {
            rebuilt.extend(paginate(&items, page, PAGE_SIZE));
        }
        assert_eq!(rebuilt, items);
        assert!(paginate(&items, pages + 1, PAGE_SIZE).is_empty());
    }

    #[test]
    fn empty_list_still_has_one_page() {
        assert_eq!(total_pages(0, PAGE_SIZE), 1);
        let empty: Vec<usize> = Vec::new();
        assert!(paginate(&empty, 1, PAGE_SIZE).is_empty());
    }

    #[test]
    fn resolve_year_falls_back_to_latest() {
        assert_eq!(resolve_year(&[2025, 2024, 2022], 2024), Some(2024));
        assert_eq!(resolve_year(&[2025, 2024, 2022], 2023), Some(2025));
        assert_eq!(resolve_year(&[], 2024), None);
    }
}
