//! Job-matching client: posts a resume and returns the top recommendations.
//!
//! Client-side (csr): multipart upload via `gloo-net`.
//! Elsewhere: no resume can be picked, so requests fail with
//! `JobMatchError::Unavailable`.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "jobs_test.rs"]
mod jobs_test;

use super::types::JobMatch;
#[cfg(feature = "csr")]
use super::types::JobMatchResponse;
use crate::util::config::{AppConfig, JOB_MATCH_TOP_K};

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum JobMatchError {
    #[error("no resume selected")]
    NoResume,
    #[error("job matching is only reachable from the browser")]
    Unavailable,
    #[error("network error: {0}")]
    Network(String),
    #[error("job matching rejected the resume with status {status}")]
    Rejected { status: u16 },
    #[error("unexpected job matching response: {0}")]
    Parse(String),
}

impl JobMatchError {
    pub fn user_message(&self) -> String {
        match self {
            Self::NoResume => "Please upload your CV first.".to_owned(),
            Self::Unavailable => "Job matching is not available right now.".to_owned(),
            Self::Network(_) => "Could not reach the job matching service. Try again in a moment.".to_owned(),
            Self::Rejected { .. } | Self::Parse(_) => "Failed to get jobs. Please upload a real CV.".to_owned(),
        }
    }
}

/// Endpoint for `config`, asking for the standard number of matches.
pub fn match_url(config: &AppConfig) -> String {
    format!("{}/match-jobs?top_k={JOB_MATCH_TOP_K}", config.job_match_url)
}

/// A resume the user picked in the browser.
#[derive(Clone, Debug)]
pub struct Resume {
    name: String,
    #[cfg(feature = "csr")]
    file: web_sys::File,
}

impl Resume {
    pub fn name(&self) -> &str {
        &self.name
    }

    #[cfg(all(test, not(feature = "csr")))]
    pub(crate) fn named(name: &str) -> Self {
        Self { name: name.to_owned() }
    }

    #[cfg(feature = "csr")]
    pub fn from_file(file: web_sys::File) -> Self {
        Self { name: file.name(), file }
    }
}

/// The first file selected by a file input's `change` event.
#[cfg(feature = "csr")]
pub fn picked_resume(ev: &leptos::ev::Event) -> Option<Resume> {
    use leptos::prelude::event_target;

    let input: web_sys::HtmlInputElement = event_target(ev);
    input.files()?.get(0).map(Resume::from_file)
}

#[cfg(not(feature = "csr"))]
pub fn picked_resume(_ev: &leptos::ev::Event) -> Option<Resume> {
    None
}

/// Upload `resume` and return the recommended jobs, best first.
///
/// # Errors
///
/// Returns an error if the service is unreachable, rejects the upload, or
/// answers with an unexpected body.
pub async fn match_jobs(config: &AppConfig, resume: &Resume) -> Result<Vec<JobMatch>, JobMatchError> {
    #[cfg(feature = "csr")]
    {
        let form = web_sys::FormData::new().map_err(|_| JobMatchError::Network("form data unavailable".to_owned()))?;
        form.append_with_blob_and_filename("file", &resume.file, &resume.name)
            .map_err(|_| JobMatchError::Network("could not attach resume".to_owned()))?;

        let resp = gloo_net::http::Request::post(&match_url(config))
            .body(form)
            .map_err(|e| JobMatchError::Network(e.to_string()))?
            .send()
            .await
            .map_err(|e| JobMatchError::Network(e.to_string()))?;
        if !resp.ok() {
            return Err(JobMatchError::Rejected { status: resp.status() });
        }
        let body: JobMatchResponse = resp.json().await.map_err(|e| JobMatchError::Parse(e.to_string()))?;
        let jobs: Vec<JobMatch> = body.top_jobs.into_iter().map(JobMatch::from).collect();
        log::info!("job matching returned {} jobs for {}", jobs.len(), resume.name);
        Ok(jobs)
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (config, resume);
        Err(JobMatchError::Unavailable)
    }
}
