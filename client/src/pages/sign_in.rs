//! Sign-in page: email + password against the identity provider.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::net::identity;
use crate::pages::auth_flow::{FieldInput, ServerError, complete_auth, prepare_submit};
use crate::routes::paths;
use crate::state::auth_form::{AuthForm, Field};
use crate::state::session::use_session;
use crate::util::config::AppConfig;

const REQUIRED: [Field; 2] = [Field::Email, Field::Password];

#[component]
pub fn SignInPage() -> impl IntoView {
    let session = use_session();
    let config = use_context::<AppConfig>().unwrap_or_default();
    let navigate = use_navigate();
    let form = RwSignal::new(AuthForm::default());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let mut submitted = None;
        form.update(|f| submitted = prepare_submit(f, &REQUIRED));
        let Some(values) = submitted else {
            return;
        };

        let session = session.clone();
        let config = config.clone();
        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            let result = identity::sign_in(&config, values.email.trim(), &values.password).await;
            let mut done = false;
            form.update(|f| done = complete_auth(f, &session, result));
            if done {
                navigate(paths::HOME, NavigateOptions::default());
            }
        });
    };

    view! {
        <section class="auth-page">
            <form class="auth-card" on:submit=on_submit novalidate=true>
                <h1 class="auth-card__title">"Welcome back"</h1>
                <p class="auth-card__subtitle">"Sign in to see your resume score and tracked jobs."</p>
                <ServerError form=form/>
                <FieldInput form=form field=Field::Email placeholder="you@example.com"/>
                <FieldInput form=form field=Field::Password placeholder="Your password"/>
                <button class="auth-button" type="submit" disabled=move || form.with(|f| f.loading)>
                    {move || if form.with(|f| f.loading) { "Signing in..." } else { "Sign in" }}
                </button>
                <p class="auth-card__footer">
                    "New here? " <A href=paths::SIGN_UP>"Create an account"</A>
                </p>
            </form>
        </section>
    }
}
