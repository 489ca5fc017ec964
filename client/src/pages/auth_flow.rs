//! Pieces shared by the sign-in and sign-up pages: submit preparation,
//! completion handling, and the labelled field input.

#[cfg(test)]
#[path = "auth_flow_test.rs"]
mod auth_flow_test;

use leptos::prelude::*;

use crate::net::identity::IdentityError;
use crate::net::types::SignedInUser;
use crate::state::auth_form::{AuthForm, Field, FormAction, FormValues, missing_fields};
use crate::state::session::{SessionSignal, SessionUpdate};

/// Validate required fields and enter the loading state.
///
/// Returns the values to submit, or `None` if a request is already in flight
/// or a required field is blank (all fields are then marked touched so their
/// errors show).
pub(crate) fn prepare_submit(form: &mut AuthForm, required: &[Field]) -> Option<FormValues> {
    if form.loading {
        return None;
    }
    let errors = missing_fields(&form.values, required);
    form.touch_all(required);
    let blocked = !errors.is_empty();
    form.apply(FormAction::SetErrors(errors));
    if blocked {
        return None;
    }
    form.apply(FormAction::SetLoading(true));
    Some(form.values.clone())
}

/// Record the outcome of an auth request. On success the session signal is
/// written; returns whether the caller should navigate away.
pub(crate) fn complete_auth(
    form: &mut AuthForm,
    session: &SessionSignal,
    result: Result<SignedInUser, IdentityError>,
) -> bool {
    match result {
        Ok(user) => {
            form.apply(FormAction::Succeed);
            session.write(SessionUpdate::SignIn(user));
            true
        }
        Err(e) => {
            log::warn!("auth request failed: {e}");
            form.apply(FormAction::SetServerError(e.user_message()));
            false
        }
    }
}

fn input_name(field: Field) -> &'static str {
    match field {
        Field::Name => "name",
        Field::Email => "email",
        Field::Password => "password",
    }
}

/// Labelled input bound to one field of `form`.
#[component]
pub(crate) fn FieldInput(form: RwSignal<AuthForm>, field: Field, placeholder: &'static str) -> impl IntoView {
    let input_type = move || match field {
        Field::Email => "email",
        Field::Password if !form.with(|f| f.show_password) => "password",
        _ => "text",
    };
    let error = move || form.with(|f| f.visible_error(field).map(str::to_owned));

    view! {
        <label class="auth-field">
            <span class="auth-field__label">{field.label()}</span>
            <input
                class="auth-input"
                class:invalid=move || error().is_some()
                type=input_type
                name=input_name(field)
                placeholder=placeholder
                prop:value=move || form.with(|f| f.values.get(field).to_owned())
                on:input=move |ev| form.update(|f| f.apply(FormAction::SetField(field, event_target_value(&ev))))
                on:blur=move |_| form.update(|f| f.apply(FormAction::Touch(field)))
            />
            {move || error().map(|msg| view! { <p class="auth-field__error">{msg}</p> })}
        </label>
    }
}

/// Server-side failure banner.
#[component]
pub(crate) fn ServerError(form: RwSignal<AuthForm>) -> impl IntoView {
    move || {
        form.with(|f| f.server_error.clone())
            .map(|msg| view! { <div class="auth-alert" role="alert">{msg}</div> })
    }
}
