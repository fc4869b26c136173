#![allow(dead_code)]

use serde::{Deserialize, Serialize};

/// One Q&A record from the F.O.C.U.S knowledge base (`data/chat.json`).
///
/// `tags` are the matchable phrases; `answer` is returned to the user
/// verbatim on a direct hit. A record without a `tags` field deserializes
/// with an empty list and never matches anything.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KnowledgeEntry {
    #[serde(default)]
    pub tags: Vec<String>,
    pub answer: String,
}
