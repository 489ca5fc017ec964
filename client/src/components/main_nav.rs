//! Top navigation bar.

use leptos::either::Either;
use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_location;

use crate::routes::paths;
use crate::state::session::use_session;

#[component]
pub fn MainNav() -> impl IntoView {
    let session = use_session();
    let location = use_location();

    // Re-read on every navigation and every session write.
    let signed_in = Memo::new(move |_| {
        location.pathname.track();
        session.track();
        session.is_authenticated()
    });

    view! {
        <nav class="main-nav">
            <A href={paths::HOME} {..} class="main-nav__brand">"CareerDesk"</A>
            <div class="main-nav__links">
                <A href=paths::HOME>"Home"</A>
                <A href=paths::ABOUT>"About"</A>
                <A href=paths::DASHBOARD>"Dashboard"</A>
                {move || {
                    if signed_in.get() {
                        Either::Left(view! {
                            <A href=paths::JOBS>"Jobs"</A>
                            <A href=paths::PROFILE>"Profile"</A>
                            <A href=paths::LOGOUT>"Logout"</A>
                        })
                    } else {
                        Either::Right(view! {
                            <A href=paths::SIGN_IN>"Sign in"</A>
                            <A href=paths::SIGN_UP>"Sign up"</A>
                        })
                    }
                }}
            </div>
        </nav>
    }
}
