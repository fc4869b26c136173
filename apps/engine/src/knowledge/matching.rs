#![allow(dead_code)]

//! Relevance scoring between a user question and tagged knowledge entries.
//!
//! Pure text matching: no stemming, no embeddings. The weights and the
//! per-tag averaging are calibrated against the thresholds in
//! `knowledge::search` and must move together.

// ────────────────────────────────────────────────────────────────────────────
// Normalization
// ────────────────────────────────────────────────────────────────────────────

/// Punctuation stripped during normalization. Fixed set; everything else
/// (letters in any script, digits, question marks, quotes) passes through.
const PUNCTUATION: &[char] = &[
    '.', ',', '/', '#', '!', '$', '%', '^', '&', '*', ';', ':', '{', '}', '=', '-', '_', '`', '~',
    '(', ')',
];

/// Question tokens with this many characters or fewer carry no signal.
/// Counted in characters, not bytes: "да" is two characters.
const MIN_TOKEN_CHARS: usize = 2;

/// Added when the whole normalized tag occurs inside the question.
const EXACT_PHRASE_SCORE: f64 = 10.0;
/// Added when every tag token fuzzy-matches some question token.
const ALL_TOKENS_SCORE: f64 = 5.0;
/// Weight of the matched-token fraction for partial overlap.
const PARTIAL_WEIGHT: f64 = 3.0;

/// Lowercases, strips the punctuation set, collapses whitespace and trims.
pub fn normalize_text(text: &str) -> String {
    let lowered = text.to_lowercase();
    let stripped: String = lowered.chars().filter(|c| !PUNCTUATION.contains(c)).collect();
    stripped.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Two tokens match when either contains the other.
fn fuzzy_match(a: &str, b: &str) -> bool {
    a.contains(b) || b.contains(a)
}

// ────────────────────────────────────────────────────────────────────────────
// Scoring
// ────────────────────────────────────────────────────────────────────────────

/// Relevance of `question` to a tag list, averaged over the tags.
///
/// Per tag, the first rule that applies wins:
///   whole tag is a substring of the question  → 10
///   every tag token fuzzy-matches             → 5
///   some tag tokens fuzzy-match               → 3 × matched fraction
///
/// The scale is intentionally unbounded (a single-tag exact phrase scores
/// 10.0); the thresholds in `knowledge::search` are tuned to it, so
/// neither side moves alone.
pub fn calculate_relevance(question: &str, tags: &[String]) -> f64 {
    if tags.is_empty() {
        return 0.0;
    }

    let question_norm = normalize_text(question);
    let question_tokens: Vec<&str> = question_norm
        .split_whitespace()
        .filter(|token| token.chars().count() > MIN_TOKEN_CHARS)
        .collect();

    let mut score = 0.0;
    for tag in tags {
        let tag_norm = normalize_text(tag);
        if question_norm.contains(tag_norm.as_str()) {
            score += EXACT_PHRASE_SCORE;
            continue;
        }

        let tag_tokens: Vec<&str> = tag_norm.split_whitespace().collect();
        let matched = tag_tokens
            .iter()
            .filter(|tag_token| {
                question_tokens
                    .iter()
                    .any(|question_token| fuzzy_match(question_token, tag_token))
            })
            .count();

        if matched == tag_tokens.len() {
            score += ALL_TOKENS_SCORE;
        } else if matched > 0 {
            score += matched as f64 / tag_tokens.len() as f64 * PARTIAL_WEIGHT;
        }
    }

    score / tags.len() as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tags(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|t| t.to_string()).collect()
    }

    #[test]
    fn test_normalize_lowercases_and_strips_punctuation() {
        assert_eq!(normalize_text("Привет, Мир!"), "привет мир");
        assert_eq!(normalize_text("C# - это (не) C"), "c это не c");
    }

    #[test]
    fn test_normalize_collapses_and_trims_whitespace() {
        assert_eq!(normalize_text("  как   дела  "), "как дела");
    }

    #[test]
    fn test_normalize_keeps_question_marks() {
        // '?' is outside the fixed punctuation set.
        assert_eq!(normalize_text("Что это?"), "что это?");
    }

    #[test]
    fn test_exact_phrase_scores_ten() {
        let score = calculate_relevance("мобильное приложение для учебы", &tags(&["приложение"]));
        assert_eq!(score, 10.0);
    }

    #[test]
    fn test_score_is_averaged_over_tags() {
        let score = calculate_relevance(
            "расскажи про программирование",
            &tags(&["погода", "программирование"]),
        );
        assert_eq!(score, 5.0);
    }

    #[test]
    fn test_all_tokens_rule_scores_five() {
        // The tag tokens all fuzzy-match, but not as one contiguous phrase.
        let score = calculate_relevance("посоветуй курсы по react", &tags(&["react курсы"]));
        assert_eq!(score, 5.0);
    }

    #[test]
    fn test_partial_overlap_scores_fraction_of_three() {
        let score = calculate_relevance("изучаю python", &tags(&["python данные"]));
        assert_eq!(score, 1.5);
    }

    #[test]
    fn test_empty_tag_list_scores_zero() {
        assert_eq!(calculate_relevance("любой вопрос", &[]), 0.0);
    }

    #[test]
    fn test_empty_question_scores_zero_against_real_tags() {
        assert_eq!(calculate_relevance("", &tags(&["тема"])), 0.0);
    }

    #[test]
    fn test_empty_tag_trivially_matches_as_substring() {
        // An all-punctuation tag normalizes to "" and satisfies the
        // substring rule against any question.
        assert_eq!(calculate_relevance("привет", &tags(&["!!!"])), 10.0);
    }

    #[test]
    fn test_two_char_cyrillic_question_tokens_are_dropped() {
        // "да" survives only if token length is counted in bytes; it must
        // not, so the tag matches on "нет" alone.
        let score = calculate_relevance("скажи да или нет", &tags(&["да нет"]));
        assert_eq!(score, 1.5);
    }

    #[test]
    fn test_fuzzy_match_works_when_tag_token_contains_question_token() {
        let score = calculate_relevance("изучаю script", &tags(&["typescript"]));
        assert_eq!(score, 5.0);
    }

    #[test]
    fn test_fuzzy_match_works_when_question_token_contains_tag_token() {
        let score = calculate_relevance("основы javascript", &tags(&["script основы"]));
        assert_eq!(score, 5.0);
    }

    #[test]
    fn test_scale_is_unbounded_above_one() {
        assert!(calculate_relevance("дурацкий вопрос", &tags(&["вопрос"])) > 1.0);
    }
}
