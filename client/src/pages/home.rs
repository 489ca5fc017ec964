//! Landing page.

use leptos::either::Either;
use leptos::prelude::*;
use leptos_router::components::A;

use crate::routes::paths;
use crate::state::session::use_session;

#[component]
pub fn HomePage() -> impl IntoView {
    let session = use_session();
    let signed_in = Memo::new(move |_| {
        session.track();
        session.is_authenticated()
    });

    view! {
        <section class="home-page">
            <h1 class="home-page__title">"Your next role starts with a better resume"</h1>
            <p class="home-page__lead">
                "Upload your CV for a score and job recommendations, explore the labor market, "
                "and practice interviews."
            </p>
            {move || {
                if signed_in.get() {
                    Either::Left(view! {
                        <A href={paths::JOBS} {..} class="cta">"Find matching jobs"</A>
                        <A href={paths::PROFILE} {..} class="cta cta--secondary">"Go to your profile"</A>
                    })
                } else {
                    Either::Right(view! { <A href={paths::SIGN_UP} {..} class="cta">"Get started"</A> })
                }
            }}
        </section>
    }
}
