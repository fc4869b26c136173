//! Assistant chat flow. A confident knowledge-base match answers
//! directly with the stored text; everything else goes to the provider
//! with the knowledge-base context block injected into the prompt.

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::errors::EngineError;
use crate::generation::prompts::render_chat_prompt;
use crate::knowledge::search::KnowledgeBase;
use crate::provider::TextGenerator;

/// How a chat answer was produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnswerSource {
    KnowledgeBase,
    Generated,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatAnswer {
    pub answer: String,
    pub source: AnswerSource,
}

/// Answers a user question, preferring a direct knowledge-base hit over
/// a provider round trip. `profession` adds the recommendation context
/// line to the prompt when present.
pub async fn answer_question(
    kb: &KnowledgeBase,
    generator: &dyn TextGenerator,
    question: &str,
    profession: Option<&str>,
) -> Result<ChatAnswer, EngineError> {
    if question.trim().is_empty() {
        return Err(EngineError::Validation(
            "question must not be empty".to_string(),
        ));
    }

    if let Some(entry) = kb.find_best_answer(question, KnowledgeBase::DIRECT_ANSWER_THRESHOLD) {
        info!("question answered from knowledge base");
        return Ok(ChatAnswer {
            answer: entry.answer.clone(),
            source: AnswerSource::KnowledgeBase,
        });
    }

    let context = kb.context_for_ai(question);
    debug!(
        context_len = context.len(),
        "no direct hit, asking the provider"
    );
    let prompt = render_chat_prompt(question, profession, &context);
    let answer = generator.generate_text(&prompt).await?;
    Ok(ChatAnswer {
        answer,
        source: AnswerSource::Generated,
    })
}
