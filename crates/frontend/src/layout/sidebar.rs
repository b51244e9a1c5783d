use crate::app::ActivePage;
use crate::shared::icons::icon;
use leptos::prelude::*;

#[component]
pub fn Sidebar() -> impl IntoView {
    let active_page = leptos::context::use_context::<RwSignal<ActivePage>>()
        .expect("ActivePage context not found");

    let item_class = move |page: ActivePage| {
        if active_page.get() == page {
            "sidebar__item sidebar__item--active"
        } else {
            "sidebar__item"
        }
    };

    view! {
        <aside class="sidebar">
            <div class="sidebar__brand">
                <span class="sidebar__logo">"IT"</span>
                <h2 class="sidebar__title">"ระบบรายงานการจองห้อง"</h2>
            </div>
            <ul class="sidebar__nav">
                <li
                    class=move || item_class(ActivePage::BookingReport)
                    on:click=move |_| active_page.set(ActivePage::BookingReport)
                >
                    {icon("dashboard")}
                    <span>"แดชบอร์ด"</span>
                </li>
                <li
                    class=move || item_class(ActivePage::RoomUsage)
                    on:click=move |_| active_page.set(ActivePage::RoomUsage)
                >
                    {icon("rooms")}
                    <span>"ห้อง"</span>
                </li>
            </ul>
        </aside>
    }
}
