use super::*;

fn job(title: &str, score: u8) -> JobMatch {
    JobMatch {
        title: title.to_owned(),
        company: "Acme".to_owned(),
        location: "Cairo".to_owned(),
        apply_url: None,
        match_score: score,
        skills: vec![],
        missing_skills: vec![],
        why: String::new(),
    }
}

#[test]
fn begin_without_resume_asks_for_one() {
    let mut search = JobSearch::default();
    assert!(search.begin().is_none());
    assert!(!search.loading);
    assert_eq!(search.error.as_deref(), Some("Please upload your CV first."));
}

#[test]
fn failed_search_keeps_previous_results_and_reports() {
    let mut search = JobSearch { jobs: vec![job("Analyst", 80)], loading: true, ..JobSearch::default() };
    search.finish(Err(JobMatchError::Rejected { status: 422 }));
    assert!(!search.loading);
    assert_eq!(search.jobs.len(), 1);
    assert_eq!(search.error.as_deref(), Some("Failed to get jobs. Please upload a real CV."));
}

#[test]
fn successful_search_replaces_results() {
    let mut search = JobSearch { jobs: vec![job("Old", 10)], loading: true, ..JobSearch::default() };
    search.finish(Ok(vec![job("Analyst", 87), job("Engineer", 64)]));
    assert!(!search.loading);
    assert_eq!(search.error, None);
    assert_eq!(search.jobs.iter().map(|j| j.title.as_str()).collect::<Vec<_>>(), vec!["Analyst", "Engineer"]);
}

#[test]
fn empty_results_are_reported() {
    let mut search = JobSearch { loading: true, ..JobSearch::default() };
    search.finish(Ok(vec![]));
    assert!(search.jobs.is_empty());
    assert!(search.error.is_some());
}

#[cfg(not(feature = "csr"))]
#[test]
fn begin_with_resume_enters_loading_once() {
    let mut search = JobSearch::default();
    search.pick(Some(Resume::named("cv.pdf")));
    assert_eq!(search.resume_name(), Some("cv.pdf"));

    let resume = search.begin().expect("resume picked");
    assert_eq!(resume.name(), "cv.pdf");
    assert!(search.loading);
    assert!(search.begin().is_none());
}
