//! Editable copy of a user profile.
//!
//! The profile page adds skills inline; the edit page changes name, about
//! and skills before saving. Both go through `ProfileDraft` so skill rules
//! (trimmed, non-empty, no duplicates) live in one place.

#[cfg(test)]
#[path = "profile_draft_test.rs"]
mod profile_draft_test;

use crate::net::types::UserProfile;

/// Suggestions shown at most while typing a skill.
const MAX_SUGGESTIONS: usize = 8;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ProfileDraft {
    pub profile: UserProfile,
    pub skill_input: String,
    pub saving: bool,
    pub error: Option<String>,
}

impl ProfileDraft {
    pub fn new(profile: UserProfile) -> Self {
        Self { profile, ..Self::default() }
    }

    /// Add `skill` to the profile and to the suggestion history. Returns
    /// whether the skill list changed.
    pub fn add_skill(&mut self, skill: &str) -> bool {
        let skill = skill.trim();
        if skill.is_empty() || self.profile.skills.iter().any(|s| s == skill) {
            return false;
        }
        self.profile.skills.push(skill.to_owned());
        if !self.profile.all_skills.iter().any(|s| s == skill) {
            self.profile.all_skills.push(skill.to_owned());
        }
        true
    }

    /// Add whatever is typed in the skill box, clearing it on success.
    pub fn commit_skill_input(&mut self) -> bool {
        let input = std::mem::take(&mut self.skill_input);
        let added = self.add_skill(&input);
        if !added {
            self.skill_input = input;
        }
        added
    }

    /// Pick a suggestion: adds it (if new) and clears the skill box.
    pub fn select_suggestion(&mut self, skill: &str) {
        self.add_skill(skill);
        self.skill_input.clear();
    }

    pub fn remove_skill(&mut self, skill: &str) {
        self.profile.skills.retain(|s| s != skill);
    }

    /// Previously used skills containing the typed text, case-insensitively,
    /// minus the ones already on the profile.
    pub fn suggestions(&self) -> Vec<String> {
        let needle = self.skill_input.trim().to_lowercase();
        if needle.is_empty() {
            return Vec::new();
        }
        self.profile
            .all_skills
            .iter()
            .filter(|s| s.to_lowercase().contains(&needle) && !self.profile.skills.contains(*s))
            .take(MAX_SUGGESTIONS)
            .cloned()
            .collect()
    }

    /// Enter the saving state; `false` if a save is already in flight.
    pub fn begin_save(&mut self) -> bool {
        if self.saving {
            return false;
        }
        self.profile.name = self.profile.name.trim().to_owned();
        self.saving = true;
        self.error = None;
        true
    }

    pub fn finish_save(&mut self, error: Option<String>) {
        self.saving = false;
        self.error = error;
    }
}
