//! Fallback for unknown routes.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::routes::paths;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <section class="not-found-page">
            <p class="not-found-page__title">
                <span class="not-found-page__oops">"Oops!"</span>
                " We couldn't find the page you were looking for."
            </p>
            <A href={paths::HOME} {..} class="cta">"Back to home"</A>
        </section>
    }
}
