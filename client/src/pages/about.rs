use leptos::prelude::*;

#[component]
pub fn AboutPage() -> impl IntoView {
    view! {
        <section class="about-page">
            <h1>"About"</h1>
            <p>
                "CareerDesk brings resume scoring, job recommendations, labor-market data and "
                "interview practice into one place. Scoring and matching are provided by partner services."
            </p>
        </section>
    }
}
