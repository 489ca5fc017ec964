//! Profile store client: the `users/{uid}` document behind the profile pages.
//!
//! Requests go to the document store's REST API with the session's id token
//! as bearer credentials. A profile that does not exist yet is created on
//! first load, mirroring what a fresh account sees.
//!
//! Client-side (csr): real HTTP calls via `gloo-net`.
//! Elsewhere: calls fail with `ProfileError::Unavailable`.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "profile_test.rs"]
mod profile_test;

use super::types::{PROFILE_FIELDS, SignedInUser, UserProfile};
#[cfg(feature = "csr")]
use super::types::ProfileDocument;
use crate::util::config::AppConfig;

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ProfileError {
    #[error("profile store is not configured")]
    NotConfigured,
    #[error("profile store is only reachable from the browser")]
    Unavailable,
    #[error("network error: {0}")]
    Network(String),
    #[error("profile store rejected the request with status {status}")]
    Rejected { status: u16 },
    #[error("unexpected profile store response: {0}")]
    Parse(String),
}

impl ProfileError {
    pub fn user_message(&self) -> String {
        match self {
            Self::NotConfigured | Self::Unavailable => "Profiles are not available right now.".to_owned(),
            Self::Network(_) => "Could not reach the profile service. Check your connection.".to_owned(),
            Self::Rejected { status: 401 | 403 } => "Your session has expired. Log out and sign in again.".to_owned(),
            Self::Rejected { .. } | Self::Parse(_) => "Could not load or save your profile.".to_owned(),
        }
    }
}

/// Document URL for `user_id`, or `NotConfigured` without a project id.
pub fn document_url(config: &AppConfig, user_id: &str) -> Result<String, ProfileError> {
    if !config.has_profile_store() {
        return Err(ProfileError::NotConfigured);
    }
    Ok(format!(
        "{}/v1/projects/{}/databases/(default)/documents/users/{user_id}",
        config.firestore_base_url, config.firestore_project_id
    ))
}

/// Document URL restricted to the profile fields, so a save never drops
/// fields written by other clients.
pub fn update_url(config: &AppConfig, user_id: &str) -> Result<String, ProfileError> {
    let mask: Vec<String> = PROFILE_FIELDS.iter().map(|field| format!("updateMask.fieldPaths={field}")).collect();
    Ok(format!("{}?{}", document_url(config, user_id)?, mask.join("&")))
}

/// Fetch the signed-in user's profile, creating it if this is their first visit.
///
/// # Errors
///
/// Returns an error if the store is not configured, unreachable, or rejects
/// the credentials.
pub async fn load_profile(config: &AppConfig, user: &SignedInUser) -> Result<UserProfile, ProfileError> {
    #[cfg(feature = "csr")]
    {
        let url = document_url(config, &user.user_id)?;
        let resp = gloo_net::http::Request::get(&url)
            .header("Authorization", &bearer(user))
            .send()
            .await
            .map_err(|e| ProfileError::Network(e.to_string()))?;

        if resp.status() == 404 {
            log::info!("no profile for {}; creating one", user.user_id);
            let profile = UserProfile::initial(&user.email);
            save_profile(config, user, &profile).await?;
            return Ok(profile);
        }
        if !resp.ok() {
            return Err(ProfileError::Rejected { status: resp.status() });
        }
        let doc: ProfileDocument = resp.json().await.map_err(|e| ProfileError::Parse(e.to_string()))?;
        let mut profile = UserProfile::from(&doc);
        if profile.email.is_empty() {
            profile.email.clone_from(&user.email);
        }
        Ok(profile)
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (config, user);
        Err(ProfileError::Unavailable)
    }
}

/// Write `profile` to the signed-in user's document.
///
/// # Errors
///
/// Returns an error if the store is not configured, unreachable, or rejects
/// the write.
pub async fn save_profile(config: &AppConfig, user: &SignedInUser, profile: &UserProfile) -> Result<(), ProfileError> {
    #[cfg(feature = "csr")]
    {
        let url = update_url(config, &user.user_id)?;
        let resp = gloo_net::http::Request::patch(&url)
            .header("Authorization", &bearer(user))
            .json(&profile.to_document())
            .map_err(|e| ProfileError::Parse(e.to_string()))?
            .send()
            .await
            .map_err(|e| ProfileError::Network(e.to_string()))?;
        if !resp.ok() {
            return Err(ProfileError::Rejected { status: resp.status() });
        }
        log::info!("profile saved for {}", user.user_id);
        Ok(())
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (config, user, profile);
        Err(ProfileError::Unavailable)
    }
}

#[cfg(feature = "csr")]
fn bearer(user: &SignedInUser) -> String {
    format!("Bearer {}", user.token)
}
