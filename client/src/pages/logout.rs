//! Logout confirmation page.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::routes::paths;
use crate::state::session::{SessionUpdate, use_session};

#[component]
pub fn LogoutPage() -> impl IntoView {
    let session = use_session();
    let navigate = use_navigate();

    // Clearing the session re-evaluates this page's gate, which arms its own
    // redirect; navigating right away unmounts the page and cancels it.
    let on_logout = move |_| {
        session.write(SessionUpdate::Clear);
        navigate(paths::SIGN_IN, NavigateOptions::default());
    };

    view! {
        <section class="logout-page">
            <div class="logout-card">
                <h2 class="logout-card__title">"Confirm logout"</h2>
                <p class="logout-card__body">"Unsaved changes may be lost after logging out."</p>
                <button class="logout-card__button" on:click=on_logout>"Logout"</button>
            </div>
        </section>
    }
}
