//! State for the job recommendations page: the picked resume, the request
//! in flight, and the last results.

#[cfg(test)]
#[path = "job_search_test.rs"]
mod job_search_test;

use crate::net::jobs::{JobMatchError, Resume};
use crate::net::types::JobMatch;

#[derive(Clone, Debug, Default)]
pub struct JobSearch {
    pub resume: Option<Resume>,
    pub loading: bool,
    pub jobs: Vec<JobMatch>,
    pub error: Option<String>,
}

impl JobSearch {
    /// Replace the picked resume. Results for the previous one stay visible
    /// until the next search.
    pub fn pick(&mut self, resume: Option<Resume>) {
        self.resume = resume;
        self.error = None;
    }

    pub fn resume_name(&self) -> Option<&str> {
        self.resume.as_ref().map(Resume::name)
    }

    /// Start a search. Returns the resume to upload, or `None` when a search
    /// is already running or no resume is picked (which records an error).
    pub fn begin(&mut self) -> Option<Resume> {
        if self.loading {
            return None;
        }
        let Some(resume) = self.resume.clone() else {
            self.error = Some(JobMatchError::NoResume.user_message());
            return None;
        };
        self.loading = true;
        self.error = None;
        Some(resume)
    }

    pub fn finish(&mut self, result: Result<Vec<JobMatch>, JobMatchError>) {
        self.loading = false;
        match result {
            Ok(jobs) => {
                if jobs.is_empty() {
                    self.error = Some("No matching jobs found for this CV.".to_owned());
                }
                self.jobs = jobs;
            }
            Err(e) => {
                log::warn!("job matching failed: {e}");
                self.error = Some(e.user_message());
            }
        }
    }
}
