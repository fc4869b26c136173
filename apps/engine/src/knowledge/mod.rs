// Knowledge-base matcher: normalization, tag relevance scoring,
// best-answer search and AI prompt context assembly.

pub mod matching;
pub mod search;

// Re-export the public API consumed by other modules (chat flow, callers).
pub use matching::{calculate_relevance, normalize_text};
pub use search::KnowledgeBase;
