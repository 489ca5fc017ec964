//! Embedded market report. The report itself is hosted by the BI provider;
//! only its embed URL comes from configuration.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::routes::paths;
use crate::util::config::AppConfig;

#[component]
pub fn MarketReportPage() -> impl IntoView {
    let embed_url = use_context::<AppConfig>().unwrap_or_default().dashboard_embed_url;

    let report = if embed_url.is_empty() {
        log::warn!("market report requested but no embed url is configured");
        view! { <p class="market-report__empty">"The market report is not available right now."</p> }.into_any()
    } else {
        view! {
            <iframe class="market-report__frame" title="Labor market report" src=embed_url allowfullscreen=true></iframe>
        }
        .into_any()
    };

    view! {
        <section class="market-report">
            <A href={paths::DASHBOARD} {..} class="market-report__back">"← Back to dashboard"</A>
            {report}
        </section>
    }
}
