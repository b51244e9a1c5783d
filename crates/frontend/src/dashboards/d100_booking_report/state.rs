use chrono::{Datelike, Utc};
use contracts::shared::list_ops::SortSpec;
use leptos::prelude::*;
use serde::{Deserialize, Serialize};

const STORAGE_KEY: &str = "d100_booking_report_state_v1";

#[derive(Clone, Debug, Serialize, Deserialize)]
struct PersistedState {
    pub selected_year: i32,
}

#[derive(Clone, Debug)]
pub struct BookingReportState {
    pub selected_year: i32,
    /// Distinct years observed in the dataset, newest first.
    pub available_years: Vec<i32>,

    // Sorting, one spec per table
    pub role_sort: SortSpec,
    pub room_sort: SortSpec,
    pub branch_sort: SortSpec,

    // Pagination (1-based)
    pub role_page: usize,
    pub room_page: usize,
    pub branch_page: usize,

    // Load flag
    pub is_loaded: bool,
}

impl Default for BookingReportState {
    fn default() -> Self {
        Self {
            selected_year: Utc::now().date_naive().year(),
            available_years: Vec::new(),
            role_sort: SortSpec::default(),
            room_sort: SortSpec::default(),
            branch_sort: SortSpec::default(),
            role_page: 1,
            room_page: 1,
            branch_page: 1,
            is_loaded: false,
        }
    }
}

fn storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

fn load_persisted() -> Option<PersistedState> {
    let raw = storage()?.get_item(STORAGE_KEY).ok().flatten()?;
    serde_json::from_str::<PersistedState>(&raw).ok()
}

fn save_persisted(st: &PersistedState) {
    let Some(storage) = storage() else { return };
    let Ok(raw) = serde_json::to_string(st) else { return };
    let _ = storage.set_item(STORAGE_KEY, &raw);
}

pub fn persist_state(signal: RwSignal<BookingReportState>) {
    let st = signal.get_untracked();
    save_persisted(&PersistedState {
        selected_year: st.selected_year,
    });
}

pub fn create_state() -> RwSignal<BookingReportState> {
    let mut st = BookingReportState::default();
    if let Some(p) = load_persisted() {
        st.selected_year = p.selected_year;
    }
    RwSignal::new(st)
}
