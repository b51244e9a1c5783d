use crate::dashboards::d100_booking_report::ui::dashboard::BookingReportDashboard;
use crate::dashboards::d101_room_usage::ui::dashboard::RoomUsageDashboard;
use crate::layout::sidebar::Sidebar;
use leptos::prelude::*;

/// Page currently shown inside the shell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActivePage {
    BookingReport,
    RoomUsage,
}

#[component]
pub fn App() -> impl IntoView {
    // Provide the page-selection signal to the sidebar via context.
    let active_page = RwSignal::new(ActivePage::BookingReport);
    provide_context(active_page);

    view! {
        <div class="app-shell">
            <Sidebar />
            <main class="app-shell__content">
                {move || match active_page.get() {
                    ActivePage::BookingReport => view! { <BookingReportDashboard /> }.into_any(),
                    ActivePage::RoomUsage => view! { <RoomUsageDashboard /> }.into_any(),
                }}
            </main>
        </div>
    }
}
