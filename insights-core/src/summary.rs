use crate::lexical::{author_vocabulary, word_frequency};
use crate::types::{AuthorSummary, Post, Summary};

const TOP_AUTHOR_COUNT: usize = 3;
const COMMON_WORD_COUNT: usize = 10;

/// Build the vocabulary summary: the top authors by distinct title words
/// and the globally most frequent words. Stable sorts preserve first-seen
/// order on ties, so an unchanged batch always summarizes identically.
pub fn build_summary(posts: &[Post]) -> Summary {
    let mut vocab = author_vocabulary(posts);
    vocab.sort_by(|a, b| b.1.len().cmp(&a.1.len()));

    let top_users = vocab
        .into_iter()
        .take(TOP_AUTHOR_COUNT)
        .map(|(author_id, words)| AuthorSummary {
            author_id,
            unique_word_count: words.len(),
            unique_words: words.into_iter().collect(),
        })
        .collect();

    let mut counts = word_frequency(posts);
    counts.sort_by(|a, b| b.1.cmp(&a.1));
    let common_words = counts
        .into_iter()
        .take(COMMON_WORD_COUNT)
        .map(|(word, _)| word)
        .collect();

    Summary {
        top_users,
        common_words,
    }
}
