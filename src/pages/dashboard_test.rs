use super::*;

fn resume(id: &str, created_at: &str) -> Resume {
    Resume { id: id.to_owned(), filename: format!("{id}.pdf"), created_at: created_at.to_owned() }
}

#[test]
fn resume_summary_counts() {
    assert_eq!(resume_summary(&[]), "No resumes uploaded yet.");
    assert_eq!(resume_summary(&[resume("a", "2026-01-01T00:00:00Z")]), "1 resume uploaded.");
    assert_eq!(
        resume_summary(&[resume("a", "2026-01-01T00:00:00Z"), resume("b", "2026-01-02T00:00:00Z")]),
        "2 resumes uploaded."
    );
}

#[test]
fn recent_resumes_sorts_newest_first_and_limits() {
    let items = vec![
        resume("old", "2025-12-31T23:59:59Z"),
        resume("new", "2026-02-01T00:00:00Z"),
        resume("mid", "2026-01-15T12:00:00Z"),
    ];
    let recent = recent_resumes(items, 2);
    let ids: Vec<_> = recent.iter().map(|r| r.id.as_str()).collect();
    assert_eq!(ids, vec!["new", "mid"]);
}
