use insights_core::{build_summary, find_anomalies, ClassifierConfig, Post};

fn post(author_id: u64, id: u64, title: &str) -> Post {
    Post {
        author_id,
        id,
        title: title.to_string(),
        body: "...".to_string(),
    }
}

// Nine posts across two authors: author 1 has a short title and a duplicated
// pair, author 2 posts the same title six times in a dense id range.
fn sample_batch() -> Vec<Post> {
    vec![
        post(1, 1, "short"),
        post(1, 2, "A unique title for testing"),
        post(1, 3, "A unique title for testing"),
        post(2, 4, "Another title"),
        post(2, 5, "Another title"),
        post(2, 6, "Another title"),
        post(2, 7, "Another title"),
        post(2, 8, "Another title"),
        post(2, 9, "Another title"),
    ]
}

#[test]
fn sample_batch_anomalies() {
    let findings = find_anomalies(&sample_batch(), &ClassifierConfig::default());

    assert!(findings
        .iter()
        .any(|f| f.title == "short" && f.reasons.iter().any(|r| r.contains("shorter"))));
    assert!(findings.iter().any(|f| f.title == "A unique title for testing"
        && f.reasons.iter().any(|r| r.contains("Duplicate"))));
    assert!(findings
        .iter()
        .any(|f| f.author_id == 2 && f.reasons.iter().any(|r| r.contains("burst"))));
    assert!(findings.iter().any(|f| f.author_id == 2
        && f.reasons.iter().any(|r| r.to_lowercase().contains("similar"))));
}

#[test]
fn sample_batch_author_two_reasons_merged_per_post() {
    let findings = find_anomalies(&sample_batch(), &ClassifierConfig::default());

    // Every author-2 post carries one finding with short, duplicate, burst
    // and similarity reasons ("Another title" is 13 characters).
    for id in 4..=9 {
        let for_post: Vec<_> = findings.iter().filter(|f| f.post_id == id).collect();
        assert_eq!(for_post.len(), 1, "expected one merged finding for post {id}");
        assert_eq!(for_post[0].reasons.len(), 4);
    }
}

#[test]
fn sample_batch_summary() {
    let summary = build_summary(&sample_batch());

    assert!(summary.top_users.len() <= 3);
    assert_eq!(summary.top_users.len(), 2);

    // Author 1 used six distinct words, author 2 only two.
    assert_eq!(summary.top_users[0].author_id, 1);
    assert_eq!(summary.top_users[0].unique_word_count, 6);
    assert_eq!(summary.top_users[1].author_id, 2);
    assert_eq!(
        summary.top_users[1].unique_words,
        vec!["another", "title"]
    );

    // "title" appears in eight titles, "another" in six.
    assert_eq!(summary.common_words[0], "title");
    assert_eq!(summary.common_words[1], "another");
    assert!(summary.common_words.len() <= 10);
}

#[test]
fn engine_output_is_deterministic() {
    let batch = sample_batch();
    let config = ClassifierConfig::default();

    let first_findings = serde_json::to_string(&find_anomalies(&batch, &config)).unwrap();
    let second_findings = serde_json::to_string(&find_anomalies(&batch, &config)).unwrap();
    assert_eq!(first_findings, second_findings);

    let first_summary = serde_json::to_string(&build_summary(&batch)).unwrap();
    let second_summary = serde_json::to_string(&build_summary(&batch)).unwrap();
    assert_eq!(first_summary, second_summary);
}

#[test]
fn empty_batch_produces_empty_views() {
    assert!(find_anomalies(&[], &ClassifierConfig::default()).is_empty());
    let summary = build_summary(&[]);
    assert!(summary.top_users.is_empty());
    assert!(summary.common_words.is_empty());
}
