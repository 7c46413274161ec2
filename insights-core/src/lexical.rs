use std::collections::{BTreeSet, HashMap};
use std::sync::OnceLock;

use regex::Regex;

use crate::types::Post;

static WORD: OnceLock<Regex> = OnceLock::new();

fn word_pattern() -> &'static Regex {
    WORD.get_or_init(|| Regex::new(r"\w+").expect("static word pattern"))
}

/// Lower-case `text` and split it into maximal runs of word characters
/// (alphanumerics and underscore). Punctuation and whitespace separate
/// tokens and are dropped. Pure and total; empty input yields no tokens.
pub fn tokenize(text: &str) -> Vec<String> {
    let lowered = text.to_lowercase();
    word_pattern()
        .find_iter(&lowered)
        .map(|m| m.as_str().to_string())
        .collect()
}

/// Count token frequency across all post titles. First-seen order is
/// preserved so downstream ranking can break frequency ties stably.
pub fn word_frequency(posts: &[Post]) -> Vec<(String, usize)> {
    let mut counts: Vec<(String, usize)> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();
    for post in posts {
        for token in tokenize(&post.title) {
            match index.get(&token) {
                Some(&i) => counts[i].1 += 1,
                None => {
                    index.insert(token.clone(), counts.len());
                    counts.push((token, 1));
                }
            }
        }
    }
    counts
}

/// Map each author to the distinct tokens used across their titles.
/// Authors appear in first-appearance order; each vocabulary iterates
/// lexicographically.
pub fn author_vocabulary(posts: &[Post]) -> Vec<(u64, BTreeSet<String>)> {
    let mut vocab: Vec<(u64, BTreeSet<String>)> = Vec::new();
    let mut index: HashMap<u64, usize> = HashMap::new();
    for post in posts {
        let i = *index.entry(post.author_id).or_insert_with(|| {
            vocab.push((post.author_id, BTreeSet::new()));
            vocab.len() - 1
        });
        vocab[i].1.extend(tokenize(&post.title));
    }
    vocab
}

/// Character-level similarity between two strings based on the longest
/// common subsequence: `2 * lcs / (|a| + |b|)`, in [0, 1]. Symmetric, and
/// 1.0 for identical strings (two empty strings included).
pub fn similarity_ratio(a: &str, b: &str) -> f64 {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    if a.is_empty() && b.is_empty() {
        return 1.0;
    }

    // Two-row LCS table; quadratic in title length, fine for short titles.
    let mut prev = vec![0usize; b.len() + 1];
    let mut curr = vec![0usize; b.len() + 1];
    for &ca in &a {
        for (j, &cb) in b.iter().enumerate() {
            curr[j + 1] = if ca == cb {
                prev[j] + 1
            } else {
                prev[j + 1].max(curr[j])
            };
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    let lcs = prev[b.len()];
    (2.0 * lcs as f64) / ((a.len() + b.len()) as f64)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn post(author_id: u64, id: u64, title: &str) -> Post {
        Post {
            author_id,
            id,
            title: title.to_string(),
            body: "...".to_string(),
        }
    }

    #[test]
    fn tokenize_strips_punctuation_and_lowercases() {
        assert_eq!(tokenize("Hello, World!"), vec!["hello", "world"]);
    }

    #[test]
    fn tokenize_empty_input() {
        assert!(tokenize("").is_empty());
        assert!(tokenize("...!?").is_empty());
    }

    #[test]
    fn tokenize_keeps_digits_and_underscores() {
        assert_eq!(tokenize("post_42 v2"), vec!["post_42", "v2"]);
    }

    #[test]
    fn word_frequency_preserves_first_seen_order() {
        let posts = vec![
            post(1, 1, "alpha beta"),
            post(1, 2, "beta gamma beta"),
        ];
        let counts = word_frequency(&posts);
        assert_eq!(
            counts,
            vec![
                ("alpha".to_string(), 1),
                ("beta".to_string(), 3),
                ("gamma".to_string(), 1),
            ]
        );
    }

    #[test]
    fn author_vocabulary_deduplicates_case_insensitively() {
        let posts = vec![
            post(1, 1, "Rust rust RUST"),
            post(2, 2, "other words"),
            post(1, 3, "rust again"),
        ];
        let vocab = author_vocabulary(&posts);
        assert_eq!(vocab.len(), 2);
        assert_eq!(vocab[0].0, 1);
        let words: Vec<&str> = vocab[0].1.iter().map(String::as_str).collect();
        assert_eq!(words, vec!["again", "rust"]);
    }

    #[test]
    fn similarity_ratio_bounds() {
        assert_eq!(similarity_ratio("same title", "same title"), 1.0);
        assert_eq!(similarity_ratio("", ""), 1.0);
        assert_eq!(similarity_ratio("abc", "xyz"), 0.0);
        assert_eq!(similarity_ratio("abc", ""), 0.0);
    }

    #[test]
    fn similarity_ratio_is_symmetric() {
        let forward = similarity_ratio("a unique title", "a unique titles");
        let backward = similarity_ratio("a unique titles", "a unique title");
        assert_eq!(forward, backward);
        assert!(forward > 0.85);
    }
}
