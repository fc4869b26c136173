#![allow(dead_code)]

//! Learning-resource selection: direction matching, difficulty
//! filtering, content-type diversification and partitioning into
//! per-topic groups.

use std::collections::HashSet;

use tracing::debug;

use crate::models::resource::{
    ContentType, DifficultyLevel, KnowledgeLevel, LearningResource, ResourceGroup, ResourceItem,
};
use crate::resources::directions::resolve_directions;

/// Padding floor for a selection. Individual type buckets may push the
/// total above this; padding never does.
const SELECTION_TARGET: usize = 5;
/// At most one book enters through the type buckets.
const BOOK_LIMIT: usize = 1;

/// Difficulty levels a user may be offered, by declared knowledge level.
pub fn eligible_difficulties(level: KnowledgeLevel) -> &'static [DifficultyLevel] {
    match level {
        KnowledgeLevel::Beginner | KnowledgeLevel::Basic => {
            &[DifficultyLevel::Beginner, DifficultyLevel::Intermediate]
        }
        KnowledgeLevel::Intermediate => &[
            DifficultyLevel::Beginner,
            DifficultyLevel::Intermediate,
            DifficultyLevel::Advanced,
        ],
        KnowledgeLevel::Advanced => &[DifficultyLevel::Intermediate, DifficultyLevel::Advanced],
    }
}

/// Immutable, in-memory resource catalog (`data/resources.json`).
#[derive(Debug, Clone, Default)]
pub struct ResourceCatalog {
    resources: Vec<LearningResource>,
}

impl ResourceCatalog {
    pub fn new(resources: Vec<LearningResource>) -> Self {
        Self { resources }
    }

    pub fn len(&self) -> usize {
        self.resources.len()
    }

    pub fn is_empty(&self) -> bool {
        self.resources.is_empty()
    }

    pub fn resources(&self) -> &[LearningResource] {
        &self.resources
    }

    /// Diversified, difficulty-appropriate resource groups for a
    /// profession, at most one group per learning topic.
    ///
    /// Groups come back under placeholder titles ("Тема 1", …); the
    /// caller substitutes real topic titles once they are known.
    pub fn resources_for_profession(
        &self,
        profession: &str,
        level: KnowledgeLevel,
        topics_count: usize,
    ) -> Vec<ResourceGroup> {
        if topics_count == 0 {
            return Vec::new();
        }

        let directions = resolve_directions(profession);
        let matched: Vec<&LearningResource> = self
            .resources
            .iter()
            .filter(|resource| directions.contains(&resource.direction.as_str()))
            .collect();
        if matched.is_empty() {
            debug!(profession, "no catalog resources for resolved directions");
            return Vec::new();
        }

        let eligible = eligible_difficulties(level);
        let level_filtered: Vec<&LearningResource> = matched
            .iter()
            .copied()
            .filter(|resource| eligible.contains(&resource.difficulty_level))
            .collect();
        // Nothing at the right difficulty → offer the whole direction pool.
        let pool = if level_filtered.is_empty() {
            matched
        } else {
            level_filtered
        };

        let selected = diversify(&pool, topics_count);
        partition(&selected, topics_count)
    }

    /// Distinct directions in first-occurrence catalog order.
    pub fn all_directions(&self) -> Vec<&str> {
        let mut directions: Vec<&str> = Vec::new();
        for resource in &self.resources {
            if !directions.contains(&resource.direction.as_str()) {
                directions.push(resource.direction.as_str());
            }
        }
        directions
    }
}

/// Picks up to ceil(5/topics) of each type in video→course→article
/// order, then at most one book, then pads from the rest of the pool in
/// catalog order up to the target.
fn diversify<'a>(pool: &[&'a LearningResource], topics_count: usize) -> Vec<&'a LearningResource> {
    let per_type = SELECTION_TARGET.div_ceil(topics_count);

    let mut selected: Vec<&LearningResource> = Vec::new();
    for kind in [ContentType::Video, ContentType::Course, ContentType::Article] {
        selected.extend(
            pool.iter()
                .copied()
                .filter(|resource| resource.content_type == kind)
                .take(per_type),
        );
    }
    selected.extend(
        pool.iter()
            .copied()
            .filter(|resource| resource.content_type == ContentType::Book)
            .take(BOOK_LIMIT),
    );

    if selected.len() < SELECTION_TARGET {
        let chosen: HashSet<u32> = selected.iter().map(|resource| resource.id).collect();
        selected.extend(
            pool.iter()
                .copied()
                .filter(|resource| !chosen.contains(&resource.id))
                .take(SELECTION_TARGET - selected.len()),
        );
    }

    selected
}

/// Splits the selection into at most `topics_count` contiguous groups of
/// ceil(len/topics); trailing empty groups are omitted.
fn partition(selected: &[&LearningResource], topics_count: usize) -> Vec<ResourceGroup> {
    if selected.is_empty() {
        return Vec::new();
    }
    let group_size = selected.len().div_ceil(topics_count);

    (0..topics_count)
        .filter_map(|index| {
            let start = index * group_size;
            if start >= selected.len() {
                return None;
            }
            let end = (start + group_size).min(selected.len());
            let items = selected[start..end]
                .iter()
                .copied()
                .map(ResourceItem::from_resource)
                .collect();
            Some(ResourceGroup {
                topic: format!("Тема {}", index + 1),
                items,
            })
        })
        .collect()
}
