//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration and delegates shared pieces to
//! `components`, `auth_flow` and the `state` reducers. Access control is
//! applied by the router, not by the pages themselves.

pub mod about;
pub(crate) mod auth_flow;
pub mod dashboard;
pub mod home;
pub mod jobs;
pub mod logout;
pub mod market_report;
pub mod not_found;
pub mod profile;
pub mod profile_edit;
pub mod sign_in;
pub mod sign_up;
