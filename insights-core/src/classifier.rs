use std::collections::HashMap;

use tracing::debug;

use crate::config::ClassifierConfig;
use crate::lexical::similarity_ratio;
use crate::types::{Finding, Post};

const REASON_DUPLICATE: &str = "Duplicate or repeated title";
const REASON_BURST: &str = "Possible posting burst";
const REASON_SIMILAR: &str = "Too many semantically similar titles";

/// Run the four anomaly heuristics over the batch and return one finding
/// per flagged post, reasons merged in heuristic order. Authors are
/// processed in first-seen batch order, posts in original batch order.
pub fn find_anomalies(posts: &[Post], config: &ClassifierConfig) -> Vec<Finding> {
    let mut findings = Vec::new();

    // Group posts by author, keeping first-seen author order.
    let mut groups: Vec<(u64, Vec<&Post>)> = Vec::new();
    let mut index: HashMap<u64, usize> = HashMap::new();
    for post in posts {
        let i = *index.entry(post.author_id).or_insert_with(|| {
            groups.push((post.author_id, Vec::new()));
            groups.len() - 1
        });
        groups[i].1.push(post);
    }

    for (author_id, group) in &groups {
        let mut reasons: Vec<Vec<String>> = vec![Vec::new(); group.len()];

        // 1. Short titles, measured in characters before tokenization.
        for (i, post) in group.iter().enumerate() {
            if post.title.chars().count() < config.short_title_len {
                reasons[i].push(format!(
                    "Title shorter than {} characters",
                    config.short_title_len
                ));
            }
        }

        // 2. Duplicate titles. Normalized string equality, not token sets.
        let mut title_counts: HashMap<String, usize> = HashMap::new();
        for post in group {
            *title_counts.entry(normalize_title(&post.title)).or_insert(0) += 1;
        }
        for (i, post) in group.iter().enumerate() {
            if title_counts[&normalize_title(&post.title)] > 1 {
                reasons[i].push(REASON_DUPLICATE.to_string());
            }
        }

        // 3. Posting bursts: a window of `burst_window` consecutive sorted
        // ids spanning fewer than `burst_span` flags the whole author. The
        // first qualifying window is enough. A zero window disables the
        // pass (`windows(0)` would panic).
        if config.burst_window > 0 && group.len() >= config.burst_window {
            let mut ids: Vec<u64> = group.iter().map(|p| p.id).collect();
            ids.sort_unstable();
            let burst = ids
                .windows(config.burst_window)
                .any(|w| w[w.len() - 1] - w[0] < config.burst_span);
            if burst {
                debug!("Posting burst detected for author {}", author_id);
                for post_reasons in reasons.iter_mut() {
                    post_reasons.push(REASON_BURST.to_string());
                }
            }
        }

        // 4. Semantic similarity: pairwise LCS ratio over titles. O(n^2)
        // per author; per-author batches stay small.
        let mut similar_pairs = 0usize;
        for i in 0..group.len() {
            for j in (i + 1)..group.len() {
                if similarity_ratio(&group[i].title, &group[j].title)
                    > config.similarity_threshold
                {
                    similar_pairs += 1;
                }
            }
        }
        if similar_pairs > group.len() / 2 {
            debug!(
                "Similar title cluster for author {}: {} pairs over threshold",
                author_id, similar_pairs
            );
            for post_reasons in reasons.iter_mut() {
                post_reasons.push(REASON_SIMILAR.to_string());
            }
        }

        for (post, post_reasons) in group.iter().zip(reasons) {
            if !post_reasons.is_empty() {
                findings.push(Finding {
                    author_id: post.author_id,
                    post_id: post.id,
                    title: post.title.clone(),
                    reasons: post_reasons,
                });
            }
        }
    }

    findings
}

fn normalize_title(title: &str) -> String {
    title.trim().to_lowercase()
}
