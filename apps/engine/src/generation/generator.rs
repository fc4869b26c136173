//! Learning-module generation pipeline: prompt rendering, the provider
//! call, JSON cleanup/parsing, catalog resource attachment and the mock
//! fallback used when every API key is out of quota.

use std::collections::HashMap;
use std::time::Instant;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};
use uuid::Uuid;

use crate::errors::EngineError;
use crate::generation::prompts::{non_empty_or, render_module_prompt};
use crate::models::module::{LearningModule, LearningPlan, Topic, TopicTask, UserProfile};
use crate::models::resource::{KnowledgeLevel, ResourceGroup, ResourceItem};
use crate::provider::{strip_json_fences, ProviderError, TextGenerator};
use crate::resources::selector::ResourceCatalog;

/// Topic count assumed for resource attachment when the provider returns
/// a module with no topics.
const DEFAULT_TOPICS_COUNT: usize = 3;

/// Model label reported on mock fallback results.
const MOCK_MODEL_LABEL: &str = "Mock Data (API quota exhausted)";

/// Where a returned module came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ModuleSource {
    Generated,
    MockFallback,
}

/// Meta block attached to every generation result.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationMeta {
    pub request_id: Uuid,
    pub timestamp: DateTime<Utc>,
    pub processing_time_ms: u64,
    pub ai_model: String,
    pub source: ModuleSource,
}

/// A finished learning module plus its meta block.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModuleResponse {
    pub data: LearningModule,
    pub meta: GenerationMeta,
}

/// Runs the full pipeline for one questionnaire profile.
///
/// Quota exhaustion (every key tried) degrades to the deterministic mock
/// module instead of failing; any other provider error propagates. The
/// provider's speculative resource links are replaced with real catalog
/// resources whenever the catalog has any for the chosen profession.
pub async fn generate_learning_module(
    generator: &dyn TextGenerator,
    profile: &UserProfile,
    catalog: &ResourceCatalog,
) -> Result<ModuleResponse, EngineError> {
    let started = Instant::now();
    let request_id = Uuid::new_v4();
    info!(%request_id, user = %profile.user_name, "generating learning module");

    let prompt = render_module_prompt(profile);

    let (mut module, source, ai_model) = match generator.generate_text(&prompt).await {
        Ok(text) => {
            let module: LearningModule = serde_json::from_str(strip_json_fences(&text))?;
            (module, ModuleSource::Generated, generator.label().to_string())
        }
        Err(ProviderError::Quota(reason)) => {
            warn!(%request_id, %reason, "all provider keys exhausted, serving mock module");
            (
                mock_learning_module(profile),
                ModuleSource::MockFallback,
                MOCK_MODEL_LABEL.to_string(),
            )
        }
        Err(err) => return Err(EngineError::Provider(err)),
    };

    attach_resources(&mut module, catalog, profile.knowledge_level);

    let meta = GenerationMeta {
        request_id,
        timestamp: Utc::now(),
        processing_time_ms: started.elapsed().as_millis() as u64,
        ai_model,
        source,
    };
    info!(
        %request_id,
        profession = %module.profession,
        topics = module.topics.len(),
        elapsed_ms = meta.processing_time_ms,
        "learning module ready"
    );
    Ok(ModuleResponse { data: module, meta })
}

/// Swaps the module's resource groups for verifiable catalog resources,
/// carrying the generated topic titles onto the groups. A catalog with
/// nothing for the profession leaves the module untouched.
pub fn attach_resources(
    module: &mut LearningModule,
    catalog: &ResourceCatalog,
    level: KnowledgeLevel,
) {
    let topics_count = if module.topics.is_empty() {
        DEFAULT_TOPICS_COUNT
    } else {
        module.topics.len()
    };

    let mut groups = catalog.resources_for_profession(&module.profession, level, topics_count);
    if groups.is_empty() {
        return;
    }
    for (index, group) in groups.iter_mut().enumerate() {
        if let Some(topic) = module.topics.get(index) {
            group.topic = topic.title.clone();
        }
    }
    module.resources = groups;
}

/// Deterministic fallback module served when quota is exhausted on every
/// key. Profession follows the declared interests; the rest is a fixed
/// beginner-friendly curriculum.
pub fn mock_learning_module(profile: &UserProfile) -> LearningModule {
    let profession = mock_profession(&profile.interests);
    let user_name = non_empty_or(&profile.user_name, "Пользователь");
    let psychotype = non_empty_or(&profile.psychotype, "ENFP (гибкий, адаптивный)");
    let interests = profile.interests.join(", ");
    let interests = non_empty_or(&interests, "не указаны");

    LearningModule {
        profession: profession.to_string(),
        match_percent: 92,
        salary_uz_sum: "5,000,000 - 12,000,000 сум/месяц".to_string(),
        introduction: format!(
            "Профессия {profession} отлично подходит для вас, {user_name}! \
             Ваш психотип {psychotype} позволяет эффективно работать в этой области. \
             Выбранные интересы ({interests}) идеально совпадают с требованиями профессии."
        ),
        topics: vec![
            topic(
                "Основы профессии",
                "Введение в профессию. Изучение базовых концепций и терминологии. \
                 Понимание роли специалиста в команде. Знакомство с инструментами и \
                 технологиями. Первые шаги в практике.",
                [
                    "Изучение типичного рабочего дня специалиста",
                    "Обзор популярных инструментов и платформ",
                ],
                [
                    (
                        "Базовое задание",
                        "1. Изучите 3 статьи о профессии. 2. Составьте список из 10 ключевых \
                         терминов. 3. Напишите краткое резюме (200 слов) о том, что делает \
                         специалист.",
                    ),
                    (
                        "Продвинутое задание",
                        "1. Проведите интервью с практикующим специалистом. 2. Создайте \
                         mind-map профессии. 3. Подготовьте презентацию на 5 минут.",
                    ),
                ],
                [
                    "Какие основные обязанности у специалиста?",
                    "Какие инструменты наиболее популярны в этой сфере?",
                    "В чем ключевые отличия от смежных профессий?",
                ],
            ),
            topic(
                "Технические навыки",
                "Освоение ключевых технических компетенций. Изучение современных \
                 инструментов и технологий. Практика на реальных примерах. Развитие \
                 профессиональных навыков. Подготовка к работе над проектами.",
                [
                    "Работа с профессиональными инструментами",
                    "Создание первого учебного проекта",
                ],
                [
                    (
                        "Базовое задание",
                        "1. Установите необходимое ПО. 2. Пройдите вводный туториал. \
                         3. Создайте простой проект по шаблону.",
                    ),
                    (
                        "Продвинутое задание",
                        "1. Создайте проект с нуля. 2. Добавьте 3 функции. 3. Протестируйте \
                         и задокументируйте код.",
                    ),
                ],
                [
                    "Какие технические инструменты вы освоили?",
                    "Как вы решали возникающие проблемы?",
                    "Что было самым сложным в процессе обучения?",
                ],
            ),
            topic(
                "Работа над проектами",
                "Применение знаний на практике. Работа с реальными кейсами. Развитие \
                 навыков планирования. Управление временем и ресурсами. Презентация \
                 результатов работы.",
                [
                    "Разработка pet-проекта для портфолио",
                    "Участие в open-source проектах",
                ],
                [
                    (
                        "Базовое задание",
                        "1. Выберите простой проект. 2. Составьте план работы на неделю. \
                         3. Реализуйте минимальную версию.",
                    ),
                    (
                        "Продвинутое задание",
                        "1. Разработайте полноценный проект. 2. Добавьте документацию. \
                         3. Опубликуйте на GitHub и подготовьте презентацию.",
                    ),
                ],
                [
                    "Как вы планируете работу над проектом?",
                    "Какие методологии разработки вы используете?",
                    "Как вы тестируете свою работу?",
                ],
            ),
            topic(
                "Профессиональное развитие",
                "Построение карьеры в индустрии. Networking и сообщества. Поиск первой \
                 работы или стажировки. Подготовка портфолио. Развитие soft skills.",
                [
                    "Создание профессионального профиля на LinkedIn",
                    "Участие в профессиональных мероприятиях",
                ],
                [
                    (
                        "Базовое задание",
                        "1. Создайте резюме. 2. Оформите портфолио с 3 проектами. \
                         3. Присоединитесь к 2 профессиональным сообществам.",
                    ),
                    (
                        "Продвинутое задание",
                        "1. Подготовьте case study для интервью. 2. Пройдите mock-интервью. \
                         3. Подайте заявки на 5 позиций.",
                    ),
                ],
                [
                    "Что включить в портфолио?",
                    "Как эффективно искать работу?",
                    "Какие soft skills важны для специалиста?",
                ],
            ),
        ],
        skill_gaps: vec![
            "Практический опыт работы с инструментами (самое важное)".to_string(),
            "Знание современных методологий и подходов".to_string(),
            "Навыки работы в команде и коммуникации".to_string(),
            "Понимание бизнес-процессов".to_string(),
            "Английский язык для работы с документацией".to_string(),
        ],
        learning_plan: LearningPlan {
            order: vec![
                "Основы профессии".to_string(),
                "Технические навыки".to_string(),
                "Работа над проектами".to_string(),
                "Профессиональное развитие".to_string(),
            ],
            time_estimates: HashMap::from([
                ("Основы профессии".to_string(), "2-3 недели".to_string()),
                ("Технические навыки".to_string(), "6-8 недель".to_string()),
                ("Работа над проектами".to_string(), "8-12 недель".to_string()),
                ("Профессиональное развитие".to_string(), "постоянно".to_string()),
            ]),
        },
        resources: vec![
            link(
                "Основы профессии",
                &[
                    (
                        "Введение в профессию - полный курс",
                        "https://www.youtube.com/watch?v=example",
                        "YouTube",
                    ),
                    (
                        "Карьера в IT - гайд для начинающих",
                        "https://www.udemy.com/course/example",
                        "Udemy",
                    ),
                ],
            ),
            link(
                "Технические навыки",
                &[
                    ("Официальная документация", "https://docs.example.com", "Docs"),
                    (
                        "Практический курс для начинающих",
                        "https://www.coursera.org/example",
                        "Coursera",
                    ),
                ],
            ),
            link(
                "Работа над проектами",
                &[
                    ("GitHub для начинающих", "https://github.com", "Platform"),
                    ("Идеи для pet-проектов", "https://www.freecodecamp.org", "Resource"),
                ],
            ),
        ],
        motivation: format!(
            "Помните, {user_name}, что обучение — это марафон, а не спринт. \
             Ваш {psychotype} означает, что вы можете находить уникальные подходы к \
             решению задач. Связывайте новые знания с вашими интересами ({interests}), \
             создавайте проекты, которые вам действительно интересны. Присоединяйтесь \
             к сообществам, делитесь своим прогрессом, и не бойтесь ошибок — они \
             лучший учитель!"
        ),
    }
}

/// Interest-keyed profession choice for the mock module, first hit wins.
fn mock_profession(interests: &[String]) -> &'static str {
    if interests.iter().any(|i| i == "design") {
        "UI/UX дизайнер"
    } else if interests.iter().any(|i| i == "data") {
        "Аналитик данных"
    } else if interests.iter().any(|i| i == "business") {
        "Продакт-менеджер"
    } else if interests.iter().any(|i| i == "creative") {
        "Контент-креатор"
    } else {
        "Frontend-разработчик"
    }
}

fn topic(
    title: &str,
    summary: &str,
    examples: [&str; 2],
    tasks: [(&str, &str); 2],
    questions: [&str; 3],
) -> Topic {
    Topic {
        title: title.to_string(),
        summary: summary.to_string(),
        examples: examples.iter().map(|s| s.to_string()).collect(),
        tasks: tasks
            .iter()
            .map(|(task_title, description)| TopicTask {
                title: task_title.to_string(),
                description: description.to_string(),
            })
            .collect(),
        questions: questions.iter().map(|s| s.to_string()).collect(),
    }
}

fn link(topic: &str, items: &[(&str, &str, &str)]) -> ResourceGroup {
    ResourceGroup {
        topic: topic.to_string(),
        items: items
            .iter()
            .map(|(title, url, kind)| ResourceItem {
                title: title.to_string(),
                url: url.to_string(),
                kind: kind.to_string(),
                description: None,
                difficulty: None,
                duration: None,
                tags: None,
            })
            .collect(),
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
