//! Identity-provider REST client used by the sign-in and sign-up flows.
//!
//! Client-side (csr): real HTTP calls via `gloo-net`.
//! Elsewhere: calls fail with `IdentityError::Unavailable`.
//!
//! ERROR HANDLING
//! ==============
//! Provider rejections arrive as `{"error": {"message": "CODE : detail"}}`.
//! Only the code is kept; `IdentityError::user_message` turns it into copy
//! the pages can show.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "identity_test.rs"]
mod identity_test;

use super::types::SignedInUser;
#[cfg(any(test, feature = "csr"))]
use super::types::IdentityErrorBody;
#[cfg(feature = "csr")]
use super::types::{DisplayNameUpdate, IdentityResponse, PasswordCredentials};
use crate::util::config::AppConfig;

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum IdentityError {
    #[error("identity provider is not configured")]
    NotConfigured,
    #[error("identity provider is only reachable from the browser")]
    Unavailable,
    #[error("network error: {0}")]
    Network(String),
    #[error("identity provider rejected the request: {code}")]
    Rejected { code: String },
    #[error("unexpected identity provider response: {0}")]
    Parse(String),
}

impl IdentityError {
    /// Message suitable for a form's server-error slot.
    pub fn user_message(&self) -> String {
        match self {
            Self::NotConfigured | Self::Unavailable => "Sign-in is not available right now.".to_owned(),
            Self::Network(_) => "Could not reach the sign-in service. Check your connection and try again.".to_owned(),
            Self::Parse(_) => "Unexpected response from the sign-in service.".to_owned(),
            Self::Rejected { code } => rejection_message(code).to_owned(),
        }
    }
}

fn rejection_message(code: &str) -> &'static str {
    match code {
        "EMAIL_EXISTS" => "An account with this email already exists.",
        "EMAIL_NOT_FOUND" | "INVALID_PASSWORD" | "INVALID_LOGIN_CREDENTIALS" => "Incorrect email or password.",
        "INVALID_EMAIL" => "Enter a valid email address.",
        "WEAK_PASSWORD" => "Password should be at least 6 characters.",
        "USER_DISABLED" => "This account has been disabled.",
        "TOO_MANY_ATTEMPTS_TRY_LATER" => "Too many attempts. Try again later.",
        _ => "Sign-in failed. Please try again.",
    }
}

/// Provider operations this client calls.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IdentityOp {
    SignInWithPassword,
    SignUp,
    Update,
}

impl IdentityOp {
    fn path(self) -> &'static str {
        match self {
            Self::SignInWithPassword => "accounts:signInWithPassword",
            Self::SignUp => "accounts:signUp",
            Self::Update => "accounts:update",
        }
    }
}

/// Full URL for `op`, or `NotConfigured` without an API key.
pub fn endpoint(config: &AppConfig, op: IdentityOp) -> Result<String, IdentityError> {
    if !config.has_identity_provider() {
        return Err(IdentityError::NotConfigured);
    }
    Ok(format!("{}/v1/{}?key={}", config.identity_base_url, op.path(), config.identity_api_key))
}

#[cfg(any(test, feature = "csr"))]
/// Extract the provider error code from `"CODE : detail"` messages.
fn error_code(message: &str) -> String {
    message.split(" : ").next().unwrap_or_default().trim().to_owned()
}

#[cfg(any(test, feature = "csr"))]
/// Map a non-2xx response body to an error.
fn rejection(status: u16, body: &str) -> IdentityError {
    match serde_json::from_str::<IdentityErrorBody>(body) {
        Ok(parsed) => IdentityError::Rejected { code: error_code(&parsed.error.message) },
        Err(_) => IdentityError::Rejected { code: format!("HTTP_{status}") },
    }
}

/// Sign in with email and password.
///
/// # Errors
///
/// Returns an error if the provider is not configured, unreachable, or
/// rejects the credentials.
pub async fn sign_in(config: &AppConfig, email: &str, password: &str) -> Result<SignedInUser, IdentityError> {
    #[cfg(feature = "csr")]
    {
        let url = endpoint(config, IdentityOp::SignInWithPassword)?;
        let resp: IdentityResponse = post_json(&url, &PasswordCredentials::new(email, password)).await?;
        log::info!("signed in as {}", resp.email);
        Ok(resp.into())
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (config, email, password);
        Err(IdentityError::Unavailable)
    }
}

/// Create an account, then set its display name.
///
/// A failed display-name update is logged and otherwise ignored; the account
/// exists and the returned credentials are valid.
///
/// # Errors
///
/// Returns an error if the provider is not configured, unreachable, or
/// rejects the sign-up.
pub async fn sign_up(
    config: &AppConfig,
    name: &str,
    email: &str,
    password: &str,
) -> Result<SignedInUser, IdentityError> {
    #[cfg(feature = "csr")]
    {
        let url = endpoint(config, IdentityOp::SignUp)?;
        let resp: IdentityResponse = post_json(&url, &PasswordCredentials::new(email, password)).await?;
        let user = SignedInUser::from(resp);

        let name = name.trim();
        if !name.is_empty() {
            let update = DisplayNameUpdate {
                id_token: user.token.clone(),
                display_name: name.to_owned(),
                return_secure_token: false,
            };
            let update_url = endpoint(config, IdentityOp::Update)?;
            if let Err(e) = post_json::<_, serde_json::Value>(&update_url, &update).await {
                log::warn!("display name update failed: {e}");
            }
        }
        log::info!("account created for {}", user.email);
        Ok(user)
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (config, name, email, password);
        Err(IdentityError::Unavailable)
    }
}

#[cfg(feature = "csr")]
async fn post_json<B, T>(url: &str, body: &B) -> Result<T, IdentityError>
where
    B: serde::Serialize,
    T: serde::de::DeserializeOwned,
{
    let resp = gloo_net::http::Request::post(url)
        .json(body)
        .map_err(|e| IdentityError::Parse(e.to_string()))?
        .send()
        .await
        .map_err(|e| IdentityError::Network(e.to_string()))?;
    if !resp.ok() {
        let status = resp.status();
        let text = resp.text().await.unwrap_or_default();
        return Err(rejection(status, &text));
    }
    resp.json::<T>().await.map_err(|e| IdentityError::Parse(e.to_string()))
}
