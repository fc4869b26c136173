#![allow(dead_code)]

// All provider prompt constants for the generation module.
// Placeholders are filled with `.replace` before sending.

use crate::models::module::UserProfile;

/// Learning-module generation prompt. Replace: `{user_name}`,
/// `{interests}`, `{knowledge_level}`, `{priority}`, `{work_style}`,
/// `{psychotype}`, `{learning_style}`.
pub const MODULE_PROMPT_TEMPLATE: &str = r#"Ты — профессиональный преподаватель, карьерный консультант и инженер ИИ для рынка Узбекистана. Проанализируй данные пользователя, подбери идеальную профессию и сгенерируй персонализированный учебный модуль.

Входные данные пользователя:

* Имя: {user_name}
* Интересы: {interests}
* Уровень знаний: {knowledge_level} — «начинающий», «базовый», «средний», «продвинутый»
* Приоритет: {priority}
* Стиль работы: {work_style}
* Психотип: {psychotype}
* Стиль обучения: {learning_style} — «визуальный», «практический», «текстовый», «смешанный»

ЗАДАЧИ:
1. Проанализируй интересы, уровень, приоритеты и психотип пользователя
2. Подбери наиболее подходящую профессию для рынка Узбекистана
3. Сгенерируй персонализированный учебный модуль

Требование к выходу — простой, структурированный JSON. Формат выдачи:

{
  "profession": "Название подобранной профессии на русском",
  "match": 95,
  "salary_uz_sum": "5,000,000 - 15,000,000 сум/месяц",
  "introduction": "2-3 предложения — почему эта профессия подходит, связать с psychotype и interests",
  "topics": [
    {
      "title": "Название темы",
      "summary": "Краткий конспект (3-6 предложений)",
      "examples": ["Пример 1", "Пример 2"],
      "tasks": [
        {
          "title": "Базовое задание",
          "description": "Описание задания с шагами"
        },
        {
          "title": "Продвинутое задание",
          "description": "Более сложное задание"
        }
      ],
      "questions": [
        "Контрольный вопрос 1?",
        "Контрольный вопрос 2?",
        "Контрольный вопрос 3?"
      ]
    }
  ],
  "skill_gaps": [
    "Навык 1 (самый важный)",
    "Навык 2",
    "Навык 3"
  ],
  "learning_plan": {
    "order": ["Тема 1", "Тема 2", "Тема 3"],
    "time_estimates": {
      "Тема 1": "2 недели",
      "Тема 2": "3 недели",
      "Тема 3": "4 недели"
    }
  },
  "resources": [
    {
      "topic": "Тема 1",
      "items": [
        {
          "title": "Название ресурса",
          "url": "https://example.com",
          "type": "YouTube/Udemy/Docs"
        }
      ]
    }
  ],
  "motivation": "2-3 предложения с советом, как удерживать мотивацию"
}

Требования к стилю и длине:

* Язык простой и дружелюбный, без академического жаргона.
* Каждый конспект не более 6 предложений.
* Практические задания чёткие, короткие инструкции (3–6 шагов).
* Максимум лаконичности: весь модуль для уровня «начинающий» — ~600–900 слов; для «средний/продвинутый» — до 1200 слов.
* Учитывай психотип: если психотип интроверт/аналитик — предлагай больше самостоятельных практик и чтения; если экстраверт/практик — включай коллаборативные задания и проекты.
* Генерируй 3-8 тем в зависимости от уровня знаний.
* Учитывай реалии рынка труда Узбекистана.

Доп. условие: если в входных данных нет interests или psychotype, действуй разумно — используй типичный профиль для выбранной профессии и пометь это в introduction: «(профиль сгенерирован на основе типичных характеристик для профессии)».

Выдай результат ТОЛЬКО в виде валидного JSON, без дополнительного текста, кода или markdown разметки."#;

/// Profession line injected into the chat prompt when the user already
/// holds a recommendation. Replace `{profession}`.
pub const PROFESSION_CONTEXT_TEMPLATE: &str =
    "Пользователь получил рекомендацию: {profession}. Отвечай на вопросы в контексте этой профессии.";

/// Assistant chat prompt. Replace: `{system_context}`, `{question}`,
/// `{kb_context}` (the knowledge-base context block, or empty).
pub const CHAT_PROMPT_TEMPLATE: &str = r#"Ты AI-ассистент проекта F.O.C.U.S - навигатор карьеры для Узбекистана. {system_context}

Вопрос пользователя: {question}

Дай краткий, полезный ответ (2-4 предложения) на русском языке. Фокусируйся на практических советах для рынка труда Узбекистана.{kb_context}

Теперь ответь на вопрос пользователя:"#;

/// Content-translation prompt. Replace: `{target_language}` (already a
/// language name, see [`language_name`]) and `{content_json}`.
pub const TRANSLATE_PROMPT_TEMPLATE: &str = r#"You are a professional translator. Translate the following JSON content to {target_language}.

CRITICAL RULES:
1. Return ONLY valid JSON with the same structure
2. Translate all text values, keep keys unchanged
3. Preserve all formatting, line breaks, and special characters
4. Keep technical terms accurate and relevant to the IT/education field
5. Do NOT add any explanations, comments, or markdown formatting

Input JSON:
{content_json}

Return the translated JSON:"#;

/// Maps an interface language code to the English language name used in
/// the translation prompt. Unknown codes pass through unchanged.
pub fn language_name(code: &str) -> &str {
    match code {
        "ru" => "Russian",
        "uz-cyrl" => "Uzbek (Cyrillic)",
        "uz-latn" => "Uzbek (Latin)",
        _ => code,
    }
}

pub(crate) fn non_empty_or<'a>(value: &'a str, fallback: &'a str) -> &'a str {
    if value.trim().is_empty() {
        fallback
    } else {
        value
    }
}

/// Fills the module template from a questionnaire profile, applying the
/// Russian fallbacks for fields the user left blank.
pub fn render_module_prompt(profile: &UserProfile) -> String {
    let interests = profile.interests.join(", ");
    MODULE_PROMPT_TEMPLATE
        .replace(
            "{user_name}",
            non_empty_or(&profile.user_name, "Пользователь"),
        )
        .replace("{interests}", non_empty_or(&interests, "не указаны"))
        .replace("{knowledge_level}", profile.knowledge_level.as_str())
        .replace("{priority}", non_empty_or(&profile.priority, "не указан"))
        .replace("{work_style}", non_empty_or(&profile.work_style, "не указан"))
        .replace(
            "{psychotype}",
            non_empty_or(&profile.psychotype, "не определен"),
        )
        .replace(
            "{learning_style}",
            non_empty_or(&profile.learning_style, "смешанный"),
        )
}

/// Fills the chat template. `kb_context` is inserted verbatim, so the
/// block produced by `KnowledgeBase::context_for_ai` (leading blank line
/// included) slots in as-is and an empty string leaves no trace.
pub fn render_chat_prompt(question: &str, profession: Option<&str>, kb_context: &str) -> String {
    let system_context = profession
        .map(|p| PROFESSION_CONTEXT_TEMPLATE.replace("{profession}", p))
        .unwrap_or_default();
    CHAT_PROMPT_TEMPLATE
        .replace("{system_context}", &system_context)
        .replace("{question}", question)
        .replace("{kb_context}", kb_context)
}

/// Fills the translation template. `content_json` must already be
/// serialized; the language code is mapped through [`language_name`].
pub fn render_translate_prompt(target_language: &str, content_json: &str) -> String {
    TRANSLATE_PROMPT_TEMPLATE
        .replace("{target_language}", language_name(target_language))
        .replace("{content_json}", content_json)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::resource::KnowledgeLevel;

    fn make_profile() -> UserProfile {
        UserProfile {
            user_name: "Алишер".to_string(),
            interests: vec!["технологии".to_string(), "дизайн".to_string()],
            level: String::new(),
            knowledge_level: KnowledgeLevel::Intermediate,
            priority: "высокая зарплата".to_string(),
            work_style: "в команде".to_string(),
            psychotype: "ENFP".to_string(),
            learning_style: "видео".to_string(),
        }
    }

    #[test]
    fn test_module_prompt_fills_every_placeholder() {
        let prompt = render_module_prompt(&make_profile());
        assert!(prompt.contains("* Имя: Алишер"));
        assert!(prompt.contains("* Интересы: технологии, дизайн"));
        assert!(prompt.contains("* Уровень знаний: средний"));
        assert!(prompt.contains("* Психотип: ENFP"));
        assert!(!prompt.contains("{user_name}"));
        assert!(!prompt.contains("{learning_style}"));
    }

    #[test]
    fn test_module_prompt_applies_fallbacks_for_blank_profile() {
        let prompt = render_module_prompt(&UserProfile::default());
        assert!(prompt.contains("* Имя: Пользователь"));
        assert!(prompt.contains("* Интересы: не указаны"));
        assert!(prompt.contains("* Уровень знаний: начинающий"));
        assert!(prompt.contains("* Стиль обучения: смешанный"));
    }

    #[test]
    fn test_module_prompt_keeps_schema_braces_intact() {
        let prompt = render_module_prompt(&make_profile());
        assert!(prompt.contains("\"profession\": \"Название подобранной профессии на русском\""));
        assert!(prompt.contains("\"match\": 95"));
    }

    #[test]
    fn test_chat_prompt_includes_profession_context() {
        let prompt = render_chat_prompt("Как найти работу?", Some("QA-инженер"), "");
        assert!(prompt.contains("Пользователь получил рекомендацию: QA-инженер."));
        assert!(prompt.contains("Вопрос пользователя: Как найти работу?"));
    }

    #[test]
    fn test_chat_prompt_without_profession_has_no_context_line() {
        let prompt = render_chat_prompt("Как найти работу?", None, "");
        assert!(!prompt.contains("рекомендацию"));
        assert!(prompt.starts_with("Ты AI-ассистент проекта F.O.C.U.S"));
    }

    #[test]
    fn test_chat_prompt_embeds_knowledge_context_block() {
        let context = "\n\nКонтекст из базы знаний F.O.C.U.S:\nРелевантная информация 1:\nответ\n";
        let prompt = render_chat_prompt("Что делает ваш проект?", None, context);
        assert!(prompt.contains("Контекст из базы знаний F.O.C.U.S:"));
        assert!(prompt.contains("Релевантная информация 1:"));
    }

    #[test]
    fn test_translate_prompt_maps_known_language_codes() {
        let prompt = render_translate_prompt("uz-latn", "{\"title\": \"Тема\"}");
        assert!(prompt.contains("to Uzbek (Latin)."));
        assert!(prompt.contains("{\"title\": \"Тема\"}"));
    }

    #[test]
    fn test_translate_prompt_passes_unknown_codes_through() {
        assert!(render_translate_prompt("de", "{}").contains("to de."));
        assert_eq!(language_name("ru"), "Russian");
    }
}
