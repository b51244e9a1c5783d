use super::super::state::{create_state, persist_state};
use crate::shared::booking_api;
use crate::shared::category_colors::category_color;
use contracts::dashboards::d101_room_usage::dto::{RoomUsage, UsageDimension};
use contracts::domain::booking::BookingDataset;
use contracts::shared::list_ops;
use contracts::usecases::{report_aggregation, room_usage};
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

/// Задержка показа результатов после загрузки, как в прежней версии дашборда.
const REVEAL_DELAY_MS: u32 = 2_000;

/// Per-room distribution view: one card per room with a legend of its
/// category shares, grouped by branch or by role/position.
#[component]
pub fn RoomUsageDashboard() -> impl IntoView {
    let state = create_state();
    let dataset: RwSignal<Option<BookingDataset>> = RwSignal::new(None);
    let (loading, set_loading) = signal(true);

    let load_data = move || {
        set_loading.set(true);
        spawn_local(async move {
            match booking_api::fetch_booking_dataset().await {
                Ok(data) => {
                    TimeoutFuture::new(REVEAL_DELAY_MS).await;
                    let years = report_aggregation::available_years(&data);
                    state.update(|s| {
                        if let Some(year) = list_ops::resolve_year(&years, s.selected_year) {
                            s.selected_year = year;
                        }
                        s.available_years = years;
                        s.is_loaded = true;
                    });
                    dataset.set(Some(data));
                    set_loading.set(false);
                }
                Err(e) => {
                    // Last successfully rendered state stays on screen.
                    log::error!("Failed to load booking dataset: {}", e);
                    set_loading.set(false);
                }
            }
        });
    };

    // Refetch on year or dimension change, same unsequenced cycle as the
    // report dashboard.
    let selected_year = Memo::new(move |_| state.with(|s| s.selected_year));
    let view_type = Memo::new(move |_| state.with(|s| s.view_type));
    Effect::new(move |_| {
        let _ = selected_year.get();
        let _ = view_type.get();
        load_data();
    });

    let usage = Signal::derive(move || {
        dataset.with(|d| {
            d.as_ref()
                .map(|d| room_usage::room_usage_breakdown(d, selected_year.get(), view_type.get()))
                .unwrap_or_default()
        })
    });
    let show_percentage = Signal::derive(move || state.with(|s| s.show_percentage));

    let on_year_change = move |ev: web_sys::Event| {
        if let Ok(year) = event_target_value(&ev).parse::<i32>() {
            state.update(|s| s.selected_year = year);
        }
    };

    view! {
        <div id="d101_room_usage--dashboard" data-page-category="dashboard" class="page page--dashboard">
            <h1 class="page__title">
                {move || {
                    let by = match view_type.get() {
                        UsageDimension::Branch => "สาขา",
                        UsageDimension::Position => "ตำแหน่ง",
                    };
                    format!("📊 แดชบอร์ด : รายงานการใช้ห้องตาม{}", by)
                }}
            </h1>

            {move || if loading.get() {
                view! { <RoomsSkeleton /> }.into_any()
            } else {
                view! {
                    <div class="dashboard-body">
                        <div class="filter-row">
                            <label class="filter-row__label">"เลือกปี:"</label>
                            <select class="year-select" on:change=on_year_change>
                                <For
                                    each=move || state.get().available_years
                                    key=|year| *year
                                    children=move |year| {
                                        view! {
                                            <option
                                                value=year.to_string()
                                                selected=move || selected_year.get() == year
                                            >
                                                {year}
                                            </option>
                                        }
                                    }
                                />
                            </select>
                            <Button
                                appearance=ButtonAppearance::Secondary
                                on_click=move |_| {
                                    state.update(|s| {
                                        s.view_type = match s.view_type {
                                            UsageDimension::Branch => UsageDimension::Position,
                                            UsageDimension::Position => UsageDimension::Branch,
                                        };
                                    });
                                    persist_state(state);
                                }
                            >
                                {move || match view_type.get() {
                                    UsageDimension::Branch => "🔄 ดูตามตำแหน่ง",
                                    UsageDimension::Position => "🔄 ดูตามสาขา",
                                }}
                            </Button>
                            <Button
                                appearance=ButtonAppearance::Secondary
                                on_click=move |_| {
                                    state.update(|s| s.show_percentage = !s.show_percentage);
                                    persist_state(state);
                                }
                            >
                                {move || if show_percentage.get() {
                                    "🔄 แสดงจำนวนครั้ง"
                                } else {
                                    "🔄 แสดงเปอร์เซ็นต์"
                                }}
                            </Button>
                        </div>

                        <div class="room-grid">
                            <For
                                each=move || usage.get()
                                key=|room| room.name.clone()
                                children=move |room| {
                                    view! {
                                        <RoomCard
                                            room=room
                                            dimension=view_type
                                            show_percentage=show_percentage
                                        />
                                    }
                                }
                            />
                        </div>
                    </div>
                }.into_any()
            }}
        </div>
    }
}

/// One room bucket: title plus a colour-coded legend row per category.
#[component]
fn RoomCard(
    room: RoomUsage,
    #[prop(into)] dimension: Signal<UsageDimension>,
    #[prop(into)] show_percentage: Signal<bool>,
) -> impl IntoView {
    view! {
        <div class="room-card">
            <h2 class="room-card__title">{format!("🏠 {}", room.name)}</h2>
            <div class="room-card__legend">
                {room.data.into_iter().enumerate().map(|(i, slice)| {
                    let name = slice.name.clone();
                    let color_key = slice.name;
                    let value = slice.value;
                    let count = slice.count;
                    let row_style = move || {
                        format!(
                            "background-color: {};",
                            category_color(dimension.get(), &color_key, i)
                        )
                    };
                    let label = move || {
                        if show_percentage.get() {
                            format!("{}%", value)
                        } else {
                            format!("{} ครั้ง", count)
                        }
                    };
                    view! {
                        <div class="room-card__legend-row" style=row_style>
                            <span>{name}</span>
                            <span>{label}</span>
                        </div>
                    }
                }).collect_view()}
            </div>
        </div>
    }
}

/// Placeholder card grid shown while the payload loads.
#[component]
fn RoomsSkeleton() -> impl IntoView {
    view! {
        <div class="room-grid">
            {(0..6).map(|_| view! {
                <div class="room-card room-card--skeleton">
                    <div class="skeleton skeleton--bar"></div>
                    <div class="skeleton skeleton--circle"></div>
                    <div class="skeleton skeleton--bar"></div>
                </div>
            }).collect_view()}
        </div>
    }
}
