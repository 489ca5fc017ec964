//! Sign-up page: name, email and password.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::net::identity;
use crate::pages::auth_flow::{FieldInput, ServerError, complete_auth, prepare_submit};
use crate::routes::paths;
use crate::state::auth_form::{AuthForm, Field, FormAction};
use crate::state::session::use_session;
use crate::util::config::AppConfig;

const REQUIRED: [Field; 3] = [Field::Name, Field::Email, Field::Password];

#[component]
pub fn SignUpPage() -> impl IntoView {
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
            let result = identity::sign_up(&config, &values.name, values.email.trim(), &values.password).await;
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
                <h1 class="auth-card__title">"Create your account"</h1>
                <p class="auth-card__subtitle">"Join us. It only takes a minute."</p>
                <ServerError form=form/>
                <FieldInput form=form field=Field::Name placeholder="Your full name"/>
                <FieldInput form=form field=Field::Email placeholder="you@example.com"/>
                <FieldInput form=form field=Field::Password placeholder="Choose a password"/>
                <label class="auth-toggle">
                    <input
                        type="checkbox"
                        prop:checked=move || form.with(|f| f.show_password)
                        on:change=move |_| form.update(|f| f.apply(FormAction::ToggleShowPassword))
                    />
                    "Show password"
                </label>
                <button class="auth-button" type="submit" disabled=move || form.with(|f| f.loading)>
                    {move || if form.with(|f| f.loading) { "Creating account..." } else { "Sign up" }}
                </button>
                <p class="auth-card__footer">
                    "Already have an account? " <A href=paths::SIGN_IN>"Sign in"</A>
                </p>
            </form>
        </section>
    }
}
