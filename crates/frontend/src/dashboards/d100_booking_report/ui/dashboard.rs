use super::super::state::{create_state, persist_state};
use crate::shared::booking_api;
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::list_utils::{get_sort_class, get_sort_indicator};
use contracts::dashboards::common::{total_count, CategoryCount};
use contracts::dashboards::d100_booking_report::dto::{MonthSlot, PeakUsage};
use contracts::domain::booking::BookingDataset;
use contracts::shared::list_ops::{self, SortKey, SortSpec, PAGE_SIZE};
use contracts::usecases::report_aggregation;
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

/// Задержка показа результатов после загрузки, как в прежней версии дашборда.
const REVEAL_DELAY_MS: u32 = 2_000;

/// Report dashboard: monthly series, peak summary and the three grouped
/// tables (role/room/branch) over one selected year.
#[component]
pub fn BookingReportDashboard() -> impl IntoView {
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
                        // Год без данных откатывается на самый свежий.
                        if let Some(year) = list_ops::resolve_year(&years, s.selected_year) {
                            s.selected_year = year;
                        }
                        s.available_years = years;
                        s.is_loaded = true;
                    });
                    dataset.set(Some(data));
                    persist_state(state);
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

    // One fetch per selected-year change. Responses are not sequenced or
    // aborted; the last one to arrive wins.
    let selected_year = Memo::new(move |_| state.with(|s| s.selected_year));
    Effect::new(move |_| {
        let _ = selected_year.get();
        load_data();
    });

    let role_rows = Signal::derive(move || {
        dataset.with(|d| {
            d.as_ref()
                .map(|d| report_aggregation::bookings_by_role(d, selected_year.get()))
                .unwrap_or_default()
        })
    });
    let room_rows = Signal::derive(move || {
        dataset.with(|d| {
            d.as_ref()
                .map(|d| report_aggregation::bookings_by_room(d, selected_year.get()))
                .unwrap_or_default()
        })
    });
    let branch_rows = Signal::derive(move || {
        dataset.with(|d| {
            d.as_ref()
                .map(|d| report_aggregation::bookings_by_branch(d, selected_year.get()))
                .unwrap_or_default()
        })
    });
    let monthly = Signal::derive(move || {
        dataset.with(|d| {
            d.as_ref()
                .map(|d| report_aggregation::monthly_series(d, selected_year.get()))
                .unwrap_or_default()
        })
    });
    let peak = Signal::derive(move || {
        dataset.with(|d| {
            d.as_ref()
                .map(|d| report_aggregation::peak_usage(d, selected_year.get()))
                .unwrap_or_default()
        })
    });

    let on_year_change = move |ev: web_sys::Event| {
        if let Ok(year) = event_target_value(&ev).parse::<i32>() {
            state.update(|s| {
                s.selected_year = year;
                s.role_page = 1;
                s.room_page = 1;
                s.branch_page = 1;
            });
            persist_state(state);
        }
    };

    view! {
        <div id="d100_booking_report--dashboard" data-page-category="dashboard" class="page page--dashboard">
            <h1 class="page__title">"📊 แดชบอร์ด : รายงานการจองห้อง"</h1>

            {move || if loading.get() {
                view! { <DashboardSkeleton /> }.into_any()
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
                            <span class="filter-row__hint">
                                {move || format!("(มีข้อมูล {} ปี)", state.with(|s| s.available_years.len()))}
                            </span>
                        </div>

                        <PeakCards peak=peak />

                        <section class="report-card">
                            <div class="report-card__header">
                                <h2>{move || format!("📅 จำนวนการจองรายเดือน ({})", selected_year.get())}</h2>
                            </div>
                            <MonthlyTable series=monthly />
                        </section>

                        <CategorySection
                            title="📍 การจองห้องแยกตามตำแหน่ง"
                            name_label="ตำแหน่ง"
                            accent="report-card__total--sky"
                            year=selected_year
                            rows=role_rows
                            sort=Signal::derive(move || state.with(|s| s.role_sort))
                            page=Signal::derive(move || state.with(|s| s.role_page))
                            on_sort=Callback::new(move |key| state.update(|s| s.role_sort.toggle(key)))
                            on_page_change=Callback::new(move |p| state.update(|s| s.role_page = p))
                        />

                        <CategorySection
                            title="🏠 จำนวนการจองแต่ละห้อง"
                            name_label="ห้อง"
                            accent="report-card__total--amber"
                            year=selected_year
                            rows=room_rows
                            sort=Signal::derive(move || state.with(|s| s.room_sort))
                            page=Signal::derive(move || state.with(|s| s.room_page))
                            on_sort=Callback::new(move |key| state.update(|s| s.room_sort.toggle(key)))
                            on_page_change=Callback::new(move |p| state.update(|s| s.room_page = p))
                        />

                        <CategorySection
                            title="🏢 จำนวนการจองแต่ละสาขา"
                            name_label="สาขา"
                            accent="report-card__total--green"
                            year=selected_year
                            rows=branch_rows
                            sort=Signal::derive(move || state.with(|s| s.branch_sort))
                            page=Signal::derive(move || state.with(|s| s.branch_page))
                            on_sort=Callback::new(move |key| state.update(|s| s.branch_sort.toggle(key)))
                            on_page_change=Callback::new(move |p| state.update(|s| s.branch_page = p))
                        />
                    </div>
                }.into_any()
            }}
        </div>
    }
}

/// Three summary cards: busiest month, busiest weekday, average duration.
#[component]
fn PeakCards(#[prop(into)] peak: Signal<PeakUsage>) -> impl IntoView {
    view! {
        <div class="peak-cards">
            <div class="peak-card">
                <h3 class="peak-card__label">"📅 เดือนที่มีการจองมากที่สุด"</h3>
                <div class="peak-card__value peak-card__value--sky">
                    {move || peak.with(|p| p.month.name.clone())}
                    <span class="peak-card__count">
                        {move || format!("({} ครั้ง)", peak.with(|p| p.month.count))}
                    </span>
                </div>
            </div>
            <div class="peak-card">
                <h3 class="peak-card__label">"📆 วันที่มีการจองมากที่สุด"</h3>
                <div class="peak-card__value peak-card__value--amber">
                    {move || peak.with(|p| p.day_of_week.name.clone())}
                    <span class="peak-card__count">
                        {move || format!("({} ครั้ง)", peak.with(|p| p.day_of_week.count))}
                    </span>
                </div>
            </div>
            <div class="peak-card">
                <h3 class="peak-card__label">"⏰ เวลาที่มีการใช้ห้องเฉลี่ย"</h3>
                <div class="peak-card__value peak-card__value--green">
                    {move || format!("{:.2} ชั่วโมง", peak.with(|p| p.avg_duration_hours))}
                </div>
            </div>
        </div>
    }
}

/// Fixed 12-row month table; the series arrives gap-free and in month order.
#[component]
fn MonthlyTable(#[prop(into)] series: Signal<Vec<MonthSlot>>) -> impl IntoView {
    view! {
        <Table attr:style="width: 100%;">
            <TableHeader>
                <TableRow>
                    <TableHeaderCell resizable=false min_width=140.0>"เดือน"</TableHeaderCell>
                    <TableHeaderCell resizable=false min_width=120.0>"จำนวนการจอง"</TableHeaderCell>
                </TableRow>
            </TableHeader>
            <TableBody>
                <For
                    each=move || series.get()
                    key=|slot| slot.month
                    children=move |slot| {
                        view! {
                            <TableRow>
                                <TableCell>
                                    <TableCellLayout>{slot.name.clone()}</TableCellLayout>
                                </TableCell>
                                <TableCell>
                                    <TableCellLayout>{slot.count}</TableCellLayout>
                                </TableCell>
                            </TableRow>
                        }
                    }
                />
            </TableBody>
        </Table>
    }
}

/// One grouped section: title with total badge, sortable two-column table,
/// prev/next pager over six rows per page.
#[component]
fn CategorySection(
    title: &'static str,
    /// Column header for the category column
    name_label: &'static str,
    /// Accent class of the total badge
    accent: &'static str,
    #[prop(into)] year: Signal<i32>,
    #[prop(into)] rows: Signal<Vec<CategoryCount>>,
    #[prop(into)] sort: Signal<SortSpec>,
    #[prop(into)] page: Signal<usize>,
    on_sort: Callback<SortKey>,
    on_page_change: Callback<usize>,
) -> impl IntoView {
    // Visible slice, indexed so duplicate sentinel names still get unique keys.
    let visible: Signal<Vec<(usize, CategoryCount)>> = Signal::derive(move || {
        let sorted = list_ops::sort_rows(&rows.get(), &sort.get());
        list_ops::paginate(&sorted, page.get(), PAGE_SIZE)
            .into_iter()
            .enumerate()
            .collect()
    });
    let pages = Signal::derive(move || list_ops::total_pages(rows.with(|r| r.len()), PAGE_SIZE));
    let total = Signal::derive(move || total_count(&rows.get()));

    view! {
        <section class="report-card">
            <div class="report-card__header">
                <h2>{move || format!("{} ({})", title, year.get())}</h2>
                <div class=move || format!("report-card__total {}", accent)>
                    {move || format!("รวม: {} ครั้ง", total.get())}
                </div>
            </div>
            <Table attr:style="width: 100%;">
                <TableHeader>
                    <TableRow>
                        <TableHeaderCell resizable=false min_width=140.0>
                            <div
                                class="table__sortable-header"
                                style="cursor:pointer;"
                                on:click=move |_| on_sort.run(SortKey::Name)
                            >
                                {name_label}
                                <span class=move || get_sort_class(&sort.get(), SortKey::Name)>
                                    {move || get_sort_indicator(&sort.get(), SortKey::Name)}
                                </span>
                            </div>
                        </TableHeaderCell>
                        <TableHeaderCell resizable=false min_width=120.0>
                            <div
                                class="table__sortable-header"
                                style="cursor:pointer;"
                                on:click=move |_| on_sort.run(SortKey::Count)
                            >
                                "จำนวนการจอง"
                                <span class=move || get_sort_class(&sort.get(), SortKey::Count)>
                                    {move || get_sort_indicator(&sort.get(), SortKey::Count)}
                                </span>
                            </div>
                        </TableHeaderCell>
                    </TableRow>
                </TableHeader>
                <TableBody>
                    <For
                        each=move || visible.get()
                        key=|(i, row)| (*i, row.name.clone())
                        children=move |(_, row)| {
                            view! {
                                <TableRow>
                                    <TableCell>
                                        <TableCellLayout truncate=true>{row.name.clone()}</TableCellLayout>
                                    </TableCell>
                                    <TableCell>
                                        <TableCellLayout>{row.count}</TableCellLayout>
                                    </TableCell>
                                </TableRow>
                            }
                        }
                    />
                </TableBody>
            </Table>
            <PaginationControls current_page=page total_pages=pages on_page_change=on_page_change />
        </section>
    }
}

/// Placeholder blocks shown while the payload loads.
#[component]
fn DashboardSkeleton() -> impl IntoView {
    view! {
        <div class="skeleton-grid">
            <div class="skeleton skeleton--bar"></div>
            <div class="skeleton-cards">
                {(0..3).map(|_| view! { <div class="skeleton skeleton--card"></div> }).collect_view()}
            </div>
            {(0..4).map(|_| view! { <div class="skeleton skeleton--section"></div> }).collect_view()}
        </div>
    }
}
