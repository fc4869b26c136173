// Generation pipeline: module generation, assistant chat, translation.
// All provider calls go through the TextGenerator seam, never a concrete SDK.

pub mod chat;
pub mod generator;
pub mod prompts;
pub mod translate;

pub use chat::{answer_question, AnswerSource, ChatAnswer};
pub use generator::{
    generate_learning_module, mock_learning_module, GenerationMeta, ModuleResponse, ModuleSource,
};
pub use translate::translate_value;
