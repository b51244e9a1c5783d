use serde::{Deserialize, Serialize};

/// One `{name, count}` row produced by the grouping functions.
///
/// Rows keep the first-seen order of the underlying reduction; any sorting
/// is applied later by the view-state layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryCount {
    pub name: String,
    pub count: usize,
}

impl CategoryCount {
    pub fn new(name: impl Into<String>, count: usize) -> Self {
        Self {
            name: name.into(),
            count,
        }
    }
}

/// Sum of counts over a grouping, shown next to each section title.
pub fn total_count(rows: &[CategoryCount]) -> usize {
    rows.iter().map(|r| r.count).sum()
}
