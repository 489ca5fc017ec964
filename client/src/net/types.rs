//! Wire DTOs for the identity provider, the job-matching service, and the
//! profile document store.
//!
//! DESIGN
//! ======
//! Field names follow each service's JSON. `SignedInUser`, `JobMatch` and
//! `UserProfile` are the crate-internal shapes pages work with; conversions
//! from the wire shapes live next to them.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Email/password payload for `accounts:signInWithPassword` and `accounts:signUp`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PasswordCredentials {
    pub email: String,
    pub password: String,
    /// Always `true`; the provider only returns an id token when asked.
    pub return_secure_token: bool,
}

impl PasswordCredentials {
    #[must_use]
    pub fn new(email: &str, password: &str) -> Self {
        Self { email: email.to_owned(), password: password.to_owned(), return_secure_token: true }
    }
}

/// Payload for `accounts:update` when setting the display name after sign-up.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DisplayNameUpdate {
    pub id_token: String,
    pub display_name: String,
    pub return_secure_token: bool,
}

/// Successful sign-in or sign-up response body.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IdentityResponse {
    pub id_token: String,
    pub email: String,
    pub local_id: String,
    #[serde(default)]
    pub display_name: Option<String>,
}

/// Error envelope: `{ "error": { "code": 400, "message": "EMAIL_EXISTS" } }`.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct IdentityErrorBody {
    pub error: IdentityErrorDetail,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct IdentityErrorDetail {
    #[serde(default)]
    pub code: u16,
    pub message: String,
}

/// Credentials persisted by the session signal after a successful auth flow.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SignedInUser {
    pub token: String,
    pub email: String,
    pub user_id: String,
}

impl From<IdentityResponse> for SignedInUser {
    fn from(resp: IdentityResponse) -> Self {
        Self { token: resp.id_token, email: resp.email, user_id: resp.local_id }
    }
}

// =============================================================================
// Job matching
// =============================================================================

/// `POST /match-jobs` response body.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct JobMatchResponse {
    #[serde(default)]
    pub top_jobs: Vec<RawJobMatch>,
}

/// One job as the matching service reports it. Optional lists may be
/// missing or `null`.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct RawJobMatch {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub company: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub apply_url: Option<String>,
    /// Cosine similarity in `0.0..=1.0`.
    #[serde(default)]
    pub similarity: f64,
    #[serde(default)]
    pub skills: Option<Vec<String>>,
    #[serde(default, rename = "missingSkills")]
    pub missing_skills: Option<Vec<String>>,
    #[serde(default)]
    pub why: Option<String>,
}

/// A recommended job ready for display.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct JobMatch {
    pub title: String,
    pub company: String,
    pub location: String,
    pub apply_url: Option<String>,
    /// Percentage, `0..=100`.
    pub match_score: u8,
    pub skills: Vec<String>,
    pub missing_skills: Vec<String>,
    pub why: String,
}

/// Similarity as a rounded percentage. Out-of-range and non-finite values clamp.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn match_percent(similarity: f64) -> u8 {
    if !similarity.is_finite() {
        return 0;
    }
    (similarity * 100.0).round().clamp(0.0, 100.0) as u8
}

impl From<RawJobMatch> for JobMatch {
    fn from(raw: RawJobMatch) -> Self {
        Self {
            title: raw.title,
            company: raw.company,
            location: raw.location,
            apply_url: raw.apply_url.filter(|url| !url.trim().is_empty()),
            match_score: match_percent(raw.similarity),
            skills: raw.skills.unwrap_or_default(),
            missing_skills: raw.missing_skills.unwrap_or_default(),
            why: raw.why.unwrap_or_default(),
        }
    }
}

// =============================================================================
// Profile documents
// =============================================================================

/// A document-store value. Only the string and array variants are used;
/// other variants deserialize as empty and are ignored.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentValue {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub string_value: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub array_value: Option<DocumentArray>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentArray {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub values: Vec<DocumentValue>,
}

impl DocumentValue {
    fn string(value: &str) -> Self {
        Self { string_value: Some(value.to_owned()), ..Self::default() }
    }

    fn strings(values: &[String]) -> Self {
        Self {
            array_value: Some(DocumentArray { values: values.iter().map(|v| Self::string(v)).collect() }),
            ..Self::default()
        }
    }
}

/// Document body for reads and writes: `{"fields": {...}}`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileDocument {
    #[serde(default)]
    pub fields: BTreeMap<String, DocumentValue>,
}

impl ProfileDocument {
    fn text(&self, key: &str) -> String {
        self.fields.get(key).and_then(|v| v.string_value.clone()).unwrap_or_default()
    }

    fn list(&self, key: &str) -> Vec<String> {
        self.fields
            .get(key)
            .and_then(|v| v.array_value.as_ref())
            .map(|array| array.values.iter().filter_map(|v| v.string_value.clone()).collect())
            .unwrap_or_default()
    }
}

/// Document field paths written on save.
pub const PROFILE_FIELDS: [&str; 5] = ["name", "email", "about", "skills", "allSkills"];

/// The `users/{uid}` profile.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UserProfile {
    pub name: String,
    pub email: String,
    pub about: String,
    pub skills: Vec<String>,
    /// Every skill the user has ever added; feeds edit suggestions.
    pub all_skills: Vec<String>,
}

impl UserProfile {
    /// Profile created on first visit.
    pub fn initial(email: &str) -> Self {
        Self { name: "User".to_owned(), email: email.to_owned(), ..Self::default() }
    }

    pub fn to_document(&self) -> ProfileDocument {
        let fields = BTreeMap::from([
            ("name".to_owned(), DocumentValue::string(&self.name)),
            ("email".to_owned(), DocumentValue::string(&self.email)),
            ("about".to_owned(), DocumentValue::string(&self.about)),
            ("skills".to_owned(), DocumentValue::strings(&self.skills)),
            ("allSkills".to_owned(), DocumentValue::strings(&self.all_skills)),
        ]);
        ProfileDocument { fields }
    }
}

impl From<&ProfileDocument> for UserProfile {
    fn from(doc: &ProfileDocument) -> Self {
        Self {
            name: doc.text("name"),
            email: doc.text("email"),
            about: doc.text("about"),
            skills: doc.list("skills"),
            all_skills: doc.list("allSkills"),
        }
    }
}
