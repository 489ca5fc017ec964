//! Job recommendations: upload a resume, list the best matching jobs.

use leptos::prelude::*;

use crate::net::jobs::{match_jobs, picked_resume};
use crate::net::types::JobMatch;
use crate::state::job_search::JobSearch;
use crate::util::config::AppConfig;

#[component]
pub fn JobsPage() -> impl IntoView {
    let config = use_context::<AppConfig>().unwrap_or_default();
    let state = RwSignal::new_local(JobSearch::default());

    let on_pick = move |ev: leptos::ev::Event| {
        let resume = picked_resume(&ev);
        state.update(|s| s.pick(resume));
    };

    let on_search = move |_| {
        let mut started = None;
        state.update(|s| started = s.begin());
        let Some(resume) = started else {
            return;
        };
        let config = config.clone();
        leptos::task::spawn_local(async move {
            let result = match_jobs(&config, &resume).await;
            state.update(|s| s.finish(result));
        });
    };

    let loading = move || state.with(|s| s.loading);

    view! {
        <section class="jobs-page">
            <h1 class="jobs-page__title">"Job Recommendations"</h1>
            <p class="jobs-page__lead">"Upload your resume to see the best matching jobs."</p>

            <div class="jobs-page__controls">
                <input id="resume-upload" class="jobs-page__file" type="file" accept=".pdf" on:change=on_pick/>
                <label for="resume-upload" class="jobs-page__pick">
                    {move || if state.with(|s| s.resume.is_some()) { "Change file" } else { "Upload resume" }}
                </label>
                <span class="jobs-page__filename">
                    {move || state.with(|s| s.resume_name().map(str::to_owned))}
                </span>
                <button class="jobs-page__search" on:click=on_search disabled=loading>
                    {move || if loading() { "Finding your matches..." } else { "Get jobs" }}
                </button>
            </div>

            {move || state.with(|s| s.error.clone()).map(|msg| view! { <div class="auth-alert" role="alert">{msg}</div> })}

            <Show when=loading>
                <div class="jobs-page__loading">
                    "Loading data..."
                    <span class="spinner" aria-hidden="true"></span>
                </div>
            </Show>

            <div class="jobs-grid">
                <For
                    each=move || if loading() { Vec::new() } else { state.with(|s| s.jobs.clone()) }
                    key=|job| (job.title.clone(), job.company.clone(), job.location.clone())
                    children=|job| view! { <JobCard job=job/> }
                />
            </div>
        </section>
    }
}

#[component]
fn JobCard(job: JobMatch) -> impl IntoView {
    let width = format!("width: {}%", job.match_score);
    let apply = job.apply_url.clone().unwrap_or_else(|| "#".to_owned());

    view! {
        <article class="job-card">
            <header class="job-card__header">
                <div>
                    <h3 class="job-card__title">{job.title}</h3>
                    <p class="job-card__meta">{format!("{} • {}", job.company, job.location)}</p>
                </div>
                <span class="job-card__score">{format!("{}%", job.match_score)}</span>
            </header>
            <div class="job-card__bar">
                <div class="job-card__bar-fill" style=width></div>
            </div>
            <SkillList title="Skills match" chip_class="skill-chip skill-chip--have" skills=job.skills/>
            <SkillList title="Missing skills" chip_class="skill-chip skill-chip--missing" skills=job.missing_skills/>
            {(!job.why.is_empty()).then(|| view! { <p class="job-card__why">{job.why}</p> })}
            <a class="job-card__apply" href=apply target="_blank" rel="noopener noreferrer">"Apply"</a>
        </article>
    }
}

/// Labelled chip list; renders nothing when `skills` is empty.
#[component]
fn SkillList(title: &'static str, chip_class: &'static str, skills: Vec<String>) -> impl IntoView {
    (!skills.is_empty()).then(|| {
        view! {
            <div class="job-card__skills">
                <p class="job-card__skills-title">{title}</p>
                <div class="skill-chips">
                    {skills.into_iter().map(|skill| view! { <span class=chip_class>{skill}</span> }).collect_view()}
                </div>
            </div>
        }
    })
}
