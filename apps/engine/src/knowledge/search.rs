#![allow(dead_code)]

//! Knowledge-base lookup: direct answers and prompt context for the
//! provider. All reads over an immutable entry list, safe to share.

use tracing::debug;

use crate::knowledge::matching::calculate_relevance;
use crate::models::knowledge::KnowledgeEntry;

#[derive(Debug, Clone, Default)]
pub struct KnowledgeBase {
    entries: Vec<KnowledgeEntry>,
}

impl KnowledgeBase {
    /// Minimum relevance for answering directly from the base, skipping
    /// the provider entirely.
    pub const DIRECT_ANSWER_THRESHOLD: f64 = 0.5;
    /// Minimum relevance for an entry to appear in ranked results.
    pub const RELEVANT_THRESHOLD: f64 = 0.2;
    /// Looser cutoff used when assembling provider prompt context.
    pub const AI_CONTEXT_THRESHOLD: f64 = 0.15;
    pub const DEFAULT_TOP_N: usize = 3;

    pub fn new(entries: Vec<KnowledgeEntry>) -> Self {
        Self { entries }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[KnowledgeEntry] {
        &self.entries
    }

    /// Highest-scoring entry strictly above `threshold`. Catalog order
    /// breaks ties: the earliest top-scoring entry wins.
    pub fn find_best_answer(&self, question: &str, threshold: f64) -> Option<&KnowledgeEntry> {
        let mut best: Option<(&KnowledgeEntry, f64)> = None;
        for entry in &self.entries {
            let relevance = calculate_relevance(question, &entry.tags);
            if relevance > threshold && best.map_or(true, |(_, score)| relevance > score) {
                best = Some((entry, relevance));
            }
        }
        best.map(|(entry, score)| {
            debug!(score, "direct knowledge base hit");
            entry
        })
    }

    /// Up to `top_n` entries strictly above `threshold`, best first.
    /// The sort is stable, so equal scores keep catalog order.
    pub fn find_relevant_answers(
        &self,
        question: &str,
        top_n: usize,
        threshold: f64,
    ) -> Vec<&KnowledgeEntry> {
        let mut scored: Vec<(&KnowledgeEntry, f64)> = self
            .entries
            .iter()
            .map(|entry| (entry, calculate_relevance(question, &entry.tags)))
            .filter(|(_, score)| *score > threshold)
            .collect();
        scored.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));
        scored.truncate(top_n);
        scored.into_iter().map(|(entry, _)| entry).collect()
    }

    /// Context block injected into the chat prompt. Empty string when
    /// nothing clears the loose threshold.
    pub fn context_for_ai(&self, question: &str) -> String {
        let relevant =
            self.find_relevant_answers(question, Self::DEFAULT_TOP_N, Self::AI_CONTEXT_THRESHOLD);
        if relevant.is_empty() {
            return String::new();
        }

        let parts: Vec<String> = relevant
            .iter()
            .enumerate()
            .map(|(index, entry)| format!("Релевантная информация {}:\n{}", index + 1, entry.answer))
            .collect();

        format!(
            "\n\nКонтекст из базы знаний F.O.C.U.S:\n{}\n",
            parts.join("\n\n")
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_entry(tags: &[&str], answer: &str) -> KnowledgeEntry {
        KnowledgeEntry {
            tags: tags.iter().map(|t| t.to_string()).collect(),
            answer: answer.to_string(),
        }
    }

    fn make_base() -> KnowledgeBase {
        KnowledgeBase::new(vec![
            make_entry(
                &["что делает проект", "focus"],
                "F.O.C.U.S - платформа профориентации для Узбекистана",
            ),
            make_entry(
                &["сколько стоит", "цена"],
                "Базовые функции бесплатны",
            ),
            make_entry(
                &["какие профессии", "направления"],
                "14 IT-направлений: от Frontend до Machine Learning",
            ),
        ])
    }

    #[test]
    fn test_finds_direct_answer_for_project_question() {
        let base = make_base();
        let hit = base
            .find_best_answer("Что делает проект?", KnowledgeBase::DIRECT_ANSWER_THRESHOLD)
            .expect("direct hit expected");
        assert!(hit.answer.contains("платформа"));
    }

    #[test]
    fn test_direct_answer_survives_filler_words_in_question() {
        // "ваш" breaks the contiguous phrase, so the tag scores through
        // the all-tokens rule (2.5) instead of the substring rule (5.0).
        // Either way the direct threshold is cleared.
        let base = make_base();
        let hit = base
            .find_best_answer(
                "Что делает ваш проект?",
                KnowledgeBase::DIRECT_ANSWER_THRESHOLD,
            )
            .expect("direct hit expected");
        assert!(hit.answer.contains("платформа"));
    }

    #[test]
    fn test_returns_none_when_nothing_clears_threshold() {
        let base = make_base();
        let miss =
            base.find_best_answer("Какая погода сегодня?", KnowledgeBase::DIRECT_ANSWER_THRESHOLD);
        assert!(miss.is_none());
    }

    #[test]
    fn test_unrelated_question_yields_empty_context() {
        let base = make_base();
        assert_eq!(base.context_for_ai("Какая погода сегодня?"), "");
    }

    #[test]
    fn test_threshold_comparison_is_strict() {
        // "изучаю python" vs ["python данные"] scores exactly 1.5.
        let base = KnowledgeBase::new(vec![make_entry(&["python данные"], "ответ")]);
        assert!(base.find_best_answer("изучаю python", 1.5).is_none());
        assert!(base.find_best_answer("изучаю python", 1.4).is_some());
    }

    #[test]
    fn test_first_entry_wins_ties() {
        let base = KnowledgeBase::new(vec![
            make_entry(&["курсы"], "первый"),
            make_entry(&["курсы"], "второй"),
        ]);
        let hit = base.find_best_answer("посоветуй курсы", 0.5).unwrap();
        assert_eq!(hit.answer, "первый");
    }

    #[test]
    fn test_relevant_answers_are_sorted_by_score_desc() {
        let base = KnowledgeBase::new(vec![
            make_entry(&["python основы"], "частичное совпадение"),
            make_entry(&["python"], "точное совпадение"),
        ]);
        let ranked = base.find_relevant_answers("учу python", 3, KnowledgeBase::RELEVANT_THRESHOLD);
        assert_eq!(ranked.len(), 2);
        assert_eq!(ranked[0].answer, "точное совпадение");
    }

    #[test]
    fn test_top_n_truncates_results() {
        let base = KnowledgeBase::new(vec![
            make_entry(&["резюме"], "a"),
            make_entry(&["резюме"], "b"),
            make_entry(&["резюме"], "c"),
            make_entry(&["резюме"], "d"),
        ]);
        let ranked = base.find_relevant_answers("помоги с резюме", 2, 0.2);
        assert_eq!(ranked.len(), 2);
    }

    #[test]
    fn test_equal_scores_keep_catalog_order() {
        let base = KnowledgeBase::new(vec![
            make_entry(&["резюме"], "a"),
            make_entry(&["резюме"], "b"),
            make_entry(&["резюме"], "c"),
        ]);
        let ranked = base.find_relevant_answers("помоги с резюме", 3, 0.2);
        let answers: Vec<&str> = ranked.iter().map(|e| e.answer.as_str()).collect();
        assert_eq!(answers, ["a", "b", "c"]);
    }

    #[test]
    fn test_raising_threshold_only_removes_entries() {
        // Scores here: first entry 5.5, second 5.0, third 0.
        let base = make_base();
        let question = "Сколько стоит проект focus?";
        let loose = base.find_relevant_answers(question, 3, 0.2);
        let tight = base.find_relevant_answers(question, 3, 5.2);
        assert_eq!(loose.len(), 2);
        assert_eq!(tight.len(), 1);
        for entry in &tight {
            assert!(loose.iter().any(|e| e.answer == entry.answer));
        }
    }

    #[test]
    fn test_context_block_uses_legacy_format() {
        let base = make_base();
        let context = base.context_for_ai("Что делает проект?");
        assert!(context.starts_with("\n\nКонтекст из базы знаний F.O.C.U.S:\n"));
        assert!(context.contains("Релевантная информация 1:\nF.O.C.U.S - платформа"));
        assert!(context.ends_with('\n'));
    }

    #[test]
    fn test_context_numbers_multiple_parts() {
        let base = KnowledgeBase::new(vec![
            make_entry(&["стажировки"], "Стажировки публикуются каждый месяц"),
            make_entry(&["стажировки куда"], "Подайте заявку через платформу"),
        ]);
        let context = base.context_for_ai("расскажи про стажировки");
        assert!(context.contains("Релевантная информация 1:"));
        assert!(context.contains("Релевантная информация 2:"));
    }

    #[test]
    fn test_empty_base_degrades_quietly() {
        let base = KnowledgeBase::default();
        assert!(base.find_best_answer("вопрос", 0.5).is_none());
        assert!(base.find_relevant_answers("вопрос", 3, 0.2).is_empty());
        assert_eq!(base.context_for_ai("вопрос"), "");
    }
}
