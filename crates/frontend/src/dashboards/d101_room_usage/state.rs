use chrono::{Datelike, Utc};
use contracts::dashboards::d101_room_usage::dto::UsageDimension;
use leptos::prelude::*;
use serde::{Deserialize, Serialize};

const STORAGE_KEY: &str = "d101_room_usage_state_v1";

#[derive(Clone, Debug, Serialize, Deserialize)]
struct PersistedState {
    pub view_type: String,
    pub show_percentage: bool,
}

#[derive(Clone, Debug)]
pub struct RoomUsageState {
    pub selected_year: i32,
    pub available_years: Vec<i32>,
    /// Second-level grouping toggle (branch or role/position).
    pub view_type: UsageDimension,
    /// Display mode toggle: percentage share vs raw count.
    pub show_percentage: bool,
    pub is_loaded: bool,
}

impl Default for RoomUsageState {
    fn default() -> Self {
        Self {
            selected_year: Utc::now().date_naive().year(),
            available_years: Vec::new(),
            view_type: UsageDimension::Branch,
            show_percentage: true,
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

pub fn persist_state(signal: RwSignal<RoomUsageState>) {
    let st = signal.get_untracked();
    save_persisted(&PersistedState {
        view_type: st.view_type.as_str().to_string(),
        show_percentage: st.show_percentage,
    });
}

pub fn create_state() -> RwSignal<RoomUsageState> {
    let mut st = RoomUsageState::default();
    if let Some(p) = load_persisted() {
        st.view_type = UsageDimension::from_str_or_default(&p.view_type);
        st.show_percentage = p.show_percentage;
    }
    RwSignal::new(st)
}
