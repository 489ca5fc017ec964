use super::*;

fn draft(skills: &[&str], history: &[&str]) -> ProfileDraft {
    ProfileDraft::new(UserProfile {
        name: "Mona".to_owned(),
        email: "mona@example.com".to_owned(),
        about: String::new(),
        skills: skills.iter().map(|s| (*s).to_owned()).collect(),
        all_skills: history.iter().map(|s| (*s).to_owned()).collect(),
    })
}

#[test]
fn add_skill_trims_and_records_history() {
    let mut d = draft(&[], &[]);
    assert!(d.add_skill("  SQL "));
    assert_eq!(d.profile.skills, vec!["SQL"]);
    assert_eq!(d.profile.all_skills, vec!["SQL"]);
}

#[test]
fn add_skill_rejects_blank_and_duplicates() {
    let mut d = draft(&["SQL"], &["SQL"]);
    assert!(!d.add_skill("   "));
    assert!(!d.add_skill("SQL"));
    assert_eq!(d.profile.skills, vec!["SQL"]);
}

#[test]
fn re_adding_a_removed_skill_keeps_history_unique() {
    let mut d = draft(&["SQL"], &["SQL"]);
    d.remove_skill("SQL");
    assert!(d.profile.skills.is_empty());
    assert!(d.add_skill("SQL"));
    assert_eq!(d.profile.all_skills, vec!["SQL"]);
}

#[test]
fn commit_clears_input_only_when_added() {
    let mut d = draft(&["SQL"], &[]);
    d.skill_input = "Python".to_owned();
    assert!(d.commit_skill_input());
    assert_eq!(d.skill_input, "");

    d.skill_input = "SQL".to_owned();
    assert!(!d.commit_skill_input());
    assert_eq!(d.skill_input, "SQL");
}

#[test]
fn suggestions_match_case_insensitively_and_skip_chosen() {
    let mut d = draft(&["Power BI"], &["Python", "Power BI", "PostgreSQL", "Excel"]);
    d.skill_input = "po".to_owned();
    assert_eq!(d.suggestions(), vec!["PostgreSQL"]);

    d.skill_input = "  ".to_owned();
    assert!(d.suggestions().is_empty());
}

#[test]
fn selecting_a_suggestion_adds_it_and_clears_input() {
    let mut d = draft(&[], &["Python"]);
    d.skill_input = "py".to_owned();
    d.select_suggestion("Python");
    assert_eq!(d.profile.skills, vec!["Python"]);
    assert_eq!(d.skill_input, "");
}

#[test]
fn save_cycle_blocks_double_submit_and_records_errors() {
    let mut d = draft(&[], &[]);
    d.profile.name = "  Mona  ".to_owned();
    assert!(d.begin_save());
    assert_eq!(d.profile.name, "Mona");
    assert!(!d.begin_save());

    d.finish_save(Some("Could not save.".to_owned()));
    assert!(!d.saving);
    assert_eq!(d.error.as_deref(), Some("Could not save."));

    assert!(d.begin_save());
    assert_eq!(d.error, None);
}
