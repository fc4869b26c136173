#![allow(dead_code)]

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::models::resource::{KnowledgeLevel, ResourceGroup};

/// Questionnaire payload. Field names follow the legacy wire format
/// (mixed camel/snake case) so stored profiles keep deserializing; empty
/// strings get their Russian fallbacks at prompt-render time.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UserProfile {
    #[serde(rename = "userName", default)]
    pub user_name: String,
    #[serde(default)]
    pub interests: Vec<String>,
    /// Free-text self-description from the "уровень" questionnaire step.
    #[serde(default)]
    pub level: String,
    #[serde(default)]
    pub knowledge_level: KnowledgeLevel,
    #[serde(default)]
    pub priority: String,
    #[serde(rename = "workStyle", default)]
    pub work_style: String,
    #[serde(default)]
    pub psychotype: String,
    #[serde(rename = "preferred_learning_style", default)]
    pub learning_style: String,
}

/// The provider's learning-module contract, one-to-one with the JSON
/// schema embedded in the module prompt.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LearningModule {
    pub profession: String,
    /// Percentage fit with the questionnaire, 0-100.
    #[serde(rename = "match")]
    pub match_percent: u8,
    pub salary_uz_sum: String,
    pub introduction: String,
    pub topics: Vec<Topic>,
    #[serde(default)]
    pub skill_gaps: Vec<String>,
    pub learning_plan: LearningPlan,
    #[serde(default)]
    pub resources: Vec<ResourceGroup>,
    pub motivation: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Topic {
    pub title: String,
    pub summary: String,
    #[serde(default)]
    pub examples: Vec<String>,
    #[serde(default)]
    pub tasks: Vec<TopicTask>,
    #[serde(default)]
    pub questions: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TopicTask {
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LearningPlan {
    #[serde(default)]
    pub order: Vec<String>,
    #[serde(default)]
    pub time_estimates: HashMap<String, String>,
}
