//! Interface-content translation glue over the provider: render the
//! translation prompt, call the model, clean and parse the JSON back.

use serde_json::Value;
use tracing::debug;

use crate::errors::EngineError;
use crate::generation::prompts::render_translate_prompt;
use crate::provider::{strip_json_fences, TextGenerator};

/// Translates a JSON content block into `target_language` (an interface
/// language code such as "ru", "uz-cyrl", "uz-latn"), preserving the
/// structure and translating only the values.
pub async fn translate_value(
    generator: &dyn TextGenerator,
    content: &Value,
    target_language: &str,
) -> Result<Value, EngineError> {
    if target_language.trim().is_empty() {
        return Err(EngineError::Validation(
            "target language must not be empty".to_string(),
        ));
    }
    if content.is_null() {
        return Err(EngineError::Validation(
            "content must not be null".to_string(),
        ));
    }

    let content_json = serde_json::to_string_pretty(content)?;
    let prompt = render_translate_prompt(target_language, &content_json);
    debug!(target_language, "sending translation request");

    let text = generator.generate_text(&prompt).await?;
    Ok(serde_json::from_str(strip_json_fences(&text))?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use serde_json::json;
    use std::sync::Mutex;

    use crate::provider::ProviderError;

    struct CannedTranslator {
        prompts: Mutex<Vec<String>>,
        reply: &'static str,
    }

    impl CannedTranslator {
        fn new(reply: &'static str) -> Self {
            Self {
                prompts: Mutex::new(Vec::new()),
                reply,
            }
        }
    }

    #[async_trait]
    impl TextGenerator for CannedTranslator {
        async fn generate_text(&self, prompt: &str) -> Result<String, ProviderError> {
            self.prompts.lock().unwrap().push(prompt.to_string());
            Ok(self.reply.to_string())
        }
    }

    #[tokio::test]
    async fn test_translates_and_parses_fenced_reply() {
        let generator =
            CannedTranslator::new("```json\n{\"title\": \"Kasb asoslari\"}\n```");
        let content = json!({"title": "Основы профессии"});

        let translated = translate_value(&generator, &content, "uz-latn")
            .await
            .unwrap();
        assert_eq!(translated, json!({"title": "Kasb asoslari"}));
    }

    #[tokio::test]
    async fn test_prompt_carries_language_name_and_content() {
        let generator = CannedTranslator::new("{}");
        let content = json!({"motivation": "Вперед!"});

        translate_value(&generator, &content, "uz-cyrl").await.unwrap();

        let prompts = generator.prompts.lock().unwrap();
        assert!(prompts[0].contains("to Uzbek (Cyrillic)."));
        assert!(prompts[0].contains("\"motivation\": \"Вперед!\""));
    }

    #[tokio::test]
    async fn test_blank_target_language_is_rejected() {
        let generator = CannedTranslator::new("{}");
        let result = translate_value(&generator, &json!({"a": 1}), "  ").await;
        assert!(matches!(result, Err(EngineError::Validation(_))));
    }

    #[tokio::test]
    async fn test_null_content_is_rejected() {
        let generator = CannedTranslator::new("{}");
        let result = translate_value(&generator, &Value::Null, "ru").await;
        assert!(matches!(result, Err(EngineError::Validation(_))));
    }

    #[tokio::test]
    async fn test_non_json_reply_is_invalid_response() {
        let generator = CannedTranslator::new("Вот перевод: заголовок");
        let result = translate_value(&generator, &json!({"a": 1}), "ru").await;
        assert!(matches!(result, Err(EngineError::InvalidResponse(_))));
    }
}
