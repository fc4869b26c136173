#![allow(dead_code)]

//! Topic-quiz scoring and the downloadable answer-export record.
//! Selections arrive as one `Option<usize>` per question; `None` is an
//! unanswered question.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Quiz {
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub questions: Vec<QuizQuestion>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuizQuestion {
    pub question: String,
    pub options: Vec<String>,
    #[serde(rename = "correctAnswer")]
    pub correct_answer: usize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub explanation: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizScore {
    pub correct: usize,
    pub total: usize,
    /// Rounded percentage of correct answers, 0 for an empty quiz.
    pub percentage: u8,
}

/// One point per selection matching the question's correct index.
/// Unanswered or out-of-range selections score nothing; selections
/// beyond the question list are ignored.
pub fn score_quiz(quiz: &Quiz, selections: &[Option<usize>]) -> QuizScore {
    let total = quiz.questions.len();
    let correct = quiz
        .questions
        .iter()
        .zip(selections.iter().copied().chain(std::iter::repeat(None)))
        .filter(|(question, selection)| *selection == Some(question.correct_answer))
        .count();
    let percentage = if total == 0 {
        0
    } else {
        ((correct as f64 / total as f64) * 100.0).round() as u8
    };
    QuizScore {
        correct,
        total,
        percentage,
    }
}

/// Per-question line in a quiz export. Field names match the legacy
/// download format.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnswerRecord {
    pub question: String,
    #[serde(rename = "selectedOption")]
    pub selected_option: String,
    #[serde(rename = "correctOption")]
    pub correct_option: String,
    #[serde(rename = "isCorrect")]
    pub is_correct: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuizExport {
    #[serde(rename = "topicTitle")]
    pub topic_title: String,
    pub quiz: String,
    pub answers: Vec<AnswerRecord>,
    pub score: usize,
    pub timestamp: DateTime<Utc>,
}

/// Builds the export record for a finished (or abandoned) quiz session.
pub fn export_answers(quiz: &Quiz, topic_title: &str, selections: &[Option<usize>]) -> QuizExport {
    let answers = quiz
        .questions
        .iter()
        .zip(selections.iter().copied().chain(std::iter::repeat(None)))
        .map(|(question, selection)| {
            let selected_option = selection
                .and_then(|index| question.options.get(index))
                .cloned()
                .unwrap_or_else(|| "Не отвечено".to_string());
            AnswerRecord {
                question: question.question.clone(),
                selected_option,
                correct_option: question
                    .options
                    .get(question.correct_answer)
                    .cloned()
                    .unwrap_or_default(),
                is_correct: selection == Some(question.correct_answer),
            }
        })
        .collect();

    QuizExport {
        topic_title: topic_title.to_string(),
        quiz: quiz.title.clone(),
        answers,
        score: score_quiz(quiz, selections).correct,
        timestamp: Utc::now(),
    }
}
