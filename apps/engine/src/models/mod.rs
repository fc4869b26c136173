pub mod knowledge;
pub mod module;
pub mod resource;
