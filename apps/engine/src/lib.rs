//! F.O.C.U.S engine: the knowledge-base relevance matcher, learning
//! resource selector and generation pipeline behind the career-guidance
//! platform. The HTTP layer and the concrete AI client live elsewhere;
//! this crate owns the matching/selection logic, the Russian prompt
//! templates and the provider-facing flows behind them.

pub mod catalog;
pub mod config;
pub mod errors;
pub mod generation;
pub mod knowledge;
pub mod logging;
pub mod models;
pub mod provider;
pub mod quiz;
pub mod resources;

pub use catalog::{shared_knowledge_base, shared_resource_catalog};
pub use config::Config;
pub use errors::EngineError;
pub use generation::{
    answer_question, generate_learning_module, translate_value, AnswerSource, ChatAnswer,
    GenerationMeta, ModuleResponse, ModuleSource,
};
pub use knowledge::{calculate_relevance, normalize_text, KnowledgeBase};
pub use models::knowledge::KnowledgeEntry;
pub use models::module::{LearningModule, LearningPlan, Topic, TopicTask, UserProfile};
pub use models::resource::{
    ContentType, DifficultyLevel, Duration, KnowledgeLevel, LearningResource, ResourceGroup,
    ResourceItem,
};
pub use provider::{ProviderError, RotatingGenerator, TextGenerator};
pub use quiz::{export_answers, score_quiz, Quiz, QuizExport, QuizQuestion, QuizScore};
pub use resources::{resolve_directions, ResourceCatalog};
