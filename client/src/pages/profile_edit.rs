//! Profile edit page: name, about and skills, saved in one write.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::net::profile::{load_profile, save_profile};
use crate::routes::paths;
use crate::state::profile_draft::ProfileDraft;
use crate::state::session::use_session;
use crate::util::config::AppConfig;

#[component]
pub fn ProfileEditPage() -> impl IntoView {
    let config = use_context::<AppConfig>().unwrap_or_default();
    let user = use_session().signed_in_user();
    let navigate = use_navigate();

    let draft = RwSignal::new(ProfileDraft::default());
    let loaded = RwSignal::new(false);

    if let Some(user) = user.clone() {
        let config = config.clone();
        leptos::task::spawn_local(async move {
            match load_profile(&config, &user).await {
                Ok(profile) => {
                    draft.set(ProfileDraft::new(profile));
                    loaded.set(true);
                }
                Err(e) => {
                    log::warn!("profile load failed: {e}");
                    draft.update(|d| d.error = Some(e.user_message()));
                }
            }
        });
    }

    let on_save = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let Some(user) = user.clone() else {
            return;
        };
        // Saving before the load finished would overwrite the stored profile
        // with blanks.
        if !loaded.get_untracked() {
            return;
        }
        let mut started = false;
        draft.update(|d| started = d.begin_save());
        if !started {
            return;
        }
        let config = config.clone();
        let navigate = navigate.clone();
        let profile = draft.with_untracked(|d| d.profile.clone());
        leptos::task::spawn_local(async move {
            match save_profile(&config, &user, &profile).await {
                Ok(()) => {
                    draft.update(|d| d.finish_save(None));
                    navigate(paths::PROFILE, NavigateOptions::default());
                }
                Err(e) => {
                    log::warn!("profile save failed: {e}");
                    draft.update(|d| d.finish_save(Some(e.user_message())));
                }
            }
        });
    };

    let on_skill_key = move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Enter" {
            ev.prevent_default();
            draft.update(|d| {
                d.commit_skill_input();
            });
        }
    };

    view! {
        <section class="profile-edit">
            <h1 class="profile-edit__title">"Edit profile"</h1>

            {move || draft.with(|d| d.error.clone()).map(|msg| view! { <div class="auth-alert" role="alert">{msg}</div> })}

            <form class="profile-edit__form" on:submit=on_save>
                <label class="profile-edit__field">
                    <span>"Name"</span>
                    <input
                        type="text"
                        prop:value=move || draft.with(|d| d.profile.name.clone())
                        on:input=move |ev| draft.update(|d| d.profile.name = event_target_value(&ev))
                    />
                </label>

                <label class="profile-edit__field">
                    <span>"Email"</span>
                    <input type="email" readonly prop:value=move || draft.with(|d| d.profile.email.clone())/>
                </label>

                <label class="profile-edit__field">
                    <span>"About"</span>
                    <textarea
                        rows="4"
                        prop:value=move || draft.with(|d| d.profile.about.clone())
                        on:input=move |ev| draft.update(|d| d.profile.about = event_target_value(&ev))
                    ></textarea>
                </label>

                <div class="profile-edit__field">
                    <span>"Skills"</span>
                    <div class="skill-chips">
                        <For
                            each=move || draft.with(|d| d.profile.skills.clone())
                            key=Clone::clone
                            children=move |skill| {
                                let remove = skill.clone();
                                view! {
                                    <span class="skill-chip">
                                        {skill}
                                        <button
                                            type="button"
                                            class="skill-chip__remove"
                                            aria-label="Remove skill"
                                            on:click=move |_| draft.update(|d| d.remove_skill(&remove))
                                        >
                                            "×"
                                        </button>
                                    </span>
                                }
                            }
                        />
                    </div>
                    <div class="skill-adder">
                        <input
                            class="skill-adder__input"
                            type="text"
                            placeholder="Type a skill and press Enter"
                            prop:value=move || draft.with(|d| d.skill_input.clone())
                            on:input=move |ev| draft.update(|d| d.skill_input = event_target_value(&ev))
                            on:keydown=on_skill_key
                        />
                        <button
                            type="button"
                            class="skill-adder__button"
                            on:click=move |_| draft.update(|d| {
                                d.commit_skill_input();
                            })
                        >
                            "Add"
                        </button>
                    </div>
                    <ul class="skill-suggestions">
                        <For
                            each=move || draft.with(ProfileDraft::suggestions)
                            key=Clone::clone
                            children=move |skill| {
                                let pick = skill.clone();
                                view! {
                                    <li>
                                        <button
                                            type="button"
                                            class="skill-suggestions__item"
                                            on:click=move |_| draft.update(|d| d.select_suggestion(&pick))
                                        >
                                            {skill}
                                        </button>
                                    </li>
                                }
                            }
                        />
                    </ul>
                </div>

                <div class="profile-edit__actions">
                    <button type="submit" class="auth-button" disabled=move || draft.with(|d| d.saving) || !loaded.get()>
                        {move || if draft.with(|d| d.saving) { "Saving..." } else { "Save" }}
                    </button>
                    <A href={paths::PROFILE} {..} class="profile-edit__cancel">"Cancel"</A>
                </div>
            </form>
        </section>
    }
}
