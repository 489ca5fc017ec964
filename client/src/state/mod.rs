//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! `session` is the process-wide auth signal. `auth_form`, `profile_draft`
//! and `job_search` are page-local state for the auth flows, the profile
//! pages and the job recommendations page.

pub mod auth_form;
pub mod job_search;
pub mod profile_draft;
pub mod session;
