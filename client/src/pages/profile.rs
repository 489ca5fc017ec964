//! Profile page for the signed-in user.
//!
//! Loads the `users/{uid}` profile document on mount and lets the user add
//! skills inline. Name and about are changed on the edit page.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::net::profile::{load_profile, save_profile};
use crate::routes::paths;
use crate::state::profile_draft::ProfileDraft;
use crate::state::session::use_session;
use crate::util::config::AppConfig;

/// First letter of the email, uppercased, for the avatar badge.
pub(crate) fn avatar_initial(email: &str) -> String {
    email.chars().next().map(|c| c.to_uppercase().collect()).unwrap_or_else(|| "?".to_owned())
}

#[component]
pub fn ProfilePage() -> impl IntoView {
    let config = use_context::<AppConfig>().unwrap_or_default();
    let session = use_session();
    let user = session.signed_in_user();

    let fallback_email = user.as_ref().map(|u| u.email.clone()).unwrap_or_default();
    let user_id = user.as_ref().map(|u| u.user_id.clone()).unwrap_or_else(|| "unknown".to_owned());

    let draft = RwSignal::new(ProfileDraft::default());
    let loading = RwSignal::new(true);

    if let Some(user) = user.clone() {
        let config = config.clone();
        leptos::task::spawn_local(async move {
            match load_profile(&config, &user).await {
                Ok(profile) => draft.set(ProfileDraft::new(profile)),
                Err(e) => {
                    log::warn!("profile load failed: {e}");
                    draft.update(|d| d.error = Some(e.user_message()));
                }
            }
            loading.set(false);
        });
    } else {
        loading.set(false);
    }

    let on_add_skill = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let Some(user) = user.clone() else {
            return;
        };
        let mut changed = false;
        draft.update(|d| changed = !d.saving && d.commit_skill_input() && d.begin_save());
        if !changed {
            return;
        }
        let config = config.clone();
        let profile = draft.with_untracked(|d| d.profile.clone());
        leptos::task::spawn_local(async move {
            let error = save_profile(&config, &user, &profile).await.err().map(|e| {
                log::warn!("skill save failed: {e}");
                e.user_message()
            });
            draft.update(|d| d.finish_save(error));
        });
    };

    let email = move || {
        let email = draft.with(|d| d.profile.email.clone());
        if email.is_empty() { fallback_email.clone() } else { email }
    };
    let avatar = {
        let email = email.clone();
        move || avatar_initial(&email())
    };
    let name = move || draft.with(|d| d.profile.name.clone());
    let about = move || draft.with(|d| d.profile.about.clone());
    let skills = move || draft.with(|d| d.profile.skills.clone());

    view! {
        <section class="profile-page">
            <div class="profile-card">
                <div class="profile-card__avatar">{avatar}</div>
                <div class="profile-card__details">
                    <h1 class="profile-card__name">{name}</h1>
                    <p class="profile-card__email">{email}</p>
                    <p class="profile-card__meta">"User ID: " {user_id}</p>
                </div>
                <div class="profile-card__actions">
                    <A href={paths::PROFILE_EDIT} {..} class="profile-card__edit">"Edit profile"</A>
                    <A href={paths::LOGOUT} {..} class="profile-card__logout">"Log out"</A>
                </div>
            </div>

            {move || draft.with(|d| d.error.clone()).map(|msg| view! { <div class="auth-alert" role="alert">{msg}</div> })}

            {move || loading.get().then(|| view! { <p class="profile-page__loading">"Loading profile..."</p> })}

            <div class="profile-section">
                <h2 class="profile-section__title">"About"</h2>
                <p class="profile-section__body">
                    {move || {
                        let about = about();
                        if about.is_empty() { "No information added yet.".to_owned() } else { about }
                    }}
                </p>
            </div>

            <div class="profile-section">
                <h2 class="profile-section__title">"Skills"</h2>
                <div class="skill-chips">
                    {move || {
                        let skills = skills();
                        if skills.is_empty() {
                            view! { <p class="profile-section__body">"No skills added yet."</p> }.into_any()
                        } else {
                            skills
                                .into_iter()
                                .map(|skill| view! { <span class="skill-chip">{skill}</span> })
                                .collect_view()
                                .into_any()
                        }
                    }}
                </div>
                <form class="skill-adder" on:submit=on_add_skill>
                    <input
                        class="skill-adder__input"
                        type="text"
                        placeholder="Add a skill"
                        prop:value=move || draft.with(|d| d.skill_input.clone())
                        on:input=move |ev| draft.update(|d| d.skill_input = event_target_value(&ev))
                    />
                    <button class="skill-adder__button" type="submit" disabled=move || draft.with(|d| d.saving)>
                        "Add"
                    </button>
                </form>
            </div>
        </section>
    }
}
