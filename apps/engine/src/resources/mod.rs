// Resource selection: profession-to-direction resolution, difficulty
// policy and diversified per-topic grouping.

pub mod directions;
pub mod selector;

// Re-export the public API consumed by other modules (generation, callers).
pub use directions::{resolve_directions, DEFAULT_DIRECTION};
pub use selector::{eligible_difficulties, ResourceCatalog};
