use crate::dashboards::sales_overview::ui::SalesOverviewDashboard;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    view! {
        <SalesOverviewDashboard />
    }
}
