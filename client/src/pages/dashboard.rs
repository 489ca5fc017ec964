//! Labor-market dashboard landing page.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::routes::paths;

#[component]
pub fn DashboardPage() -> impl IntoView {
    view! {
        <section class="dashboard-page">
            <h1 class="dashboard-page__title">"Labor market insights"</h1>
            <p class="dashboard-page__lead">
                "Explore demand by role, skill and region before you tailor your resume."
            </p>
            <A href={paths::MARKET_REPORT} {..} class="cta">"Open the market report"</A>
        </section>
    }
}
