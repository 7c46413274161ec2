use serde::{Deserialize, Serialize};

/// One post as delivered by the upstream batch endpoint. Field names on
/// the wire follow the upstream JSON shape; serde rejects records missing
/// any required field, which fails the whole batch decode.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Post {
    #[serde(rename = "userId")]
    pub author_id: u64,
    pub id: u64,
    pub title: String,
    pub body: String,
}

/// One flagged post. A post triggering several heuristics gets a single
/// finding with all reasons, in heuristic evaluation order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Finding {
    #[serde(rename = "userId")]
    pub author_id: u64,
    #[serde(rename = "id")]
    pub post_id: u64,
    pub title: String,
    #[serde(rename = "reason")]
    pub reasons: Vec<String>,
}

/// Per-author vocabulary entry: the distinct title words, sorted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthorSummary {
    #[serde(rename = "userId")]
    pub author_id: u64,
    pub unique_words: Vec<String>,
    pub unique_word_count: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Summary {
    pub top_users: Vec<AuthorSummary>,
    pub common_words: Vec<String>,
}
