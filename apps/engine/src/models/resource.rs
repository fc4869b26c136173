#![allow(dead_code)]

use serde::{Deserialize, Serialize};

// ────────────────────────────────────────────────────────────────────────────
// Catalog records (data/resources.json)
// ────────────────────────────────────────────────────────────────────────────

/// One curated learning resource from the catalog.
///
/// `direction` ties the resource to a canonical career track (e.g.
/// "Frontend-разработчик"). A record missing `direction` or `tags`
/// deserializes with empty values and simply matches nothing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LearningResource {
    pub id: u32,
    #[serde(default)]
    pub direction: String,
    pub title: String,
    pub url: String,
    #[serde(default)]
    pub description: String,
    pub content_type: ContentType,
    pub difficulty_level: DifficultyLevel,
    pub duration_minutes: Duration,
    #[serde(default)]
    pub tags: Vec<String>,
}

/// Resource media type. Open set: labels outside the known four pass
/// through untouched so older catalogs keep loading.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ContentType {
    Video,
    Article,
    Book,
    Course,
    Other(String),
}

impl From<String> for ContentType {
    fn from(raw: String) -> Self {
        match raw.as_str() {
            "video" => ContentType::Video,
            "article" => ContentType::Article,
            "book" => ContentType::Book,
            "course" => ContentType::Course,
            _ => ContentType::Other(raw),
        }
    }
}

impl From<ContentType> for String {
    fn from(kind: ContentType) -> Self {
        match kind {
            ContentType::Video => "video".to_string(),
            ContentType::Article => "article".to_string(),
            ContentType::Book => "book".to_string(),
            ContentType::Course => "course".to_string(),
            ContentType::Other(raw) => raw,
        }
    }
}

impl ContentType {
    /// Human-facing label shown inside resource groups.
    pub fn label(&self) -> &str {
        match self {
            ContentType::Video => "YouTube",
            ContentType::Article => "Статья",
            ContentType::Book => "Книга",
            ContentType::Course => "Курс",
            ContentType::Other(raw) => raw,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DifficultyLevel {
    Beginner,
    Intermediate,
    Advanced,
}

/// Self-reported user level from the questionnaire. Wire values are the
/// legacy Russian vocabulary.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum KnowledgeLevel {
    #[default]
    #[serde(rename = "начинающий")]
    Beginner,
    #[serde(rename = "базовый")]
    Basic,
    #[serde(rename = "средний")]
    Intermediate,
    #[serde(rename = "продвинутый")]
    Advanced,
}

impl KnowledgeLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            KnowledgeLevel::Beginner => "начинающий",
            KnowledgeLevel::Basic => "базовый",
            KnowledgeLevel::Intermediate => "средний",
            KnowledgeLevel::Advanced => "продвинутый",
        }
    }
}

/// Either a minute count (`45`) or free text (`"6 часов"`). Untagged so
/// both shapes survive a round trip unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Duration {
    Minutes(u32),
    Text(String),
}

// ────────────────────────────────────────────────────────────────────────────
// Selector / module output shapes
// ────────────────────────────────────────────────────────────────────────────

/// A titled bundle of resources shown under one learning topic.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResourceGroup {
    pub topic: String,
    pub items: Vec<ResourceItem>,
}

/// One link inside a group. The selector fills every field; items parsed
/// back from provider JSON carry only title/url/type.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResourceItem {
    pub title: String,
    pub url: String,
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub difficulty: Option<DifficultyLevel>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<Duration>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
}

impl ResourceItem {
    /// Builds the user-facing item for a catalog resource.
    pub fn from_resource(resource: &LearningResource) -> Self {
        Self {
            title: resource.title.clone(),
            url: resource.url.clone(),
            kind: resource.content_type.label().to_string(),
            description: Some(resource.description.clone()),
            difficulty: Some(resource.difficulty_level),
            duration: Some(resource.duration_minutes.clone()),
            tags: Some(resource.tags.clone()),
        }
    }
}
