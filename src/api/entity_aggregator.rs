use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::{Entity, EntityCategory};
use crate::render::{CategoryEncoding, entity_encoding};

/// Entities keyed by their literal category code, in first-seen order.
pub type EntityGroups = IndexMap<String, Vec<Entity>>;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EntitySummary {
    pub total: usize,
    pub type_count: usize,
    pub most_common_type_count: usize,
    /// `None` when there are no entities to average over.
    pub avg_entity_length: Option<f64>,
}

/// One row of the per-category distribution list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EntityDistributionRow {
    pub code: String,
    pub encoding: CategoryEncoding,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EntityView {
    pub groups: EntityGroups,
    pub summary: EntitySummary,
    pub distribution: Vec<EntityDistributionRow>,
}

impl EntityView {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.summary.total == 0
    }
}

/// Groups entities by category code, preserving relative order inside each group.
///
/// Unknown codes get their own group under the literal code.
#[must_use]
pub fn group_entities(entities: &[Entity]) -> EntityGroups {
    let mut groups = EntityGroups::new();
    for entity in entities {
        groups
            .entry(entity.label.clone())
            .or_default()
            .push(entity.clone());
    }
    groups
}

#[must_use]
pub fn summarize_entities(entities: &[Entity], groups: &EntityGroups) -> EntitySummary {
    let total = entities.len();
    let most_common_type_count = groups.values().map(Vec::len).max().unwrap_or(0);
    let avg_entity_length = (total > 0).then(|| {
        let chars: usize = entities.iter().map(Entity::text_len).sum();
        chars as f64 / total as f64
    });

    EntitySummary {
        total,
        type_count: groups.len(),
        most_common_type_count,
        avg_entity_length,
    }
}

#[must_use]
pub fn entity_distribution(groups: &EntityGroups) -> Vec<EntityDistributionRow> {
    groups
        .iter()
        .map(|(code, group)| EntityDistributionRow {
            code: code.clone(),
            encoding: entity_encoding(&EntityCategory::from_code(code)),
            count: group.len(),
        })
        .collect()
}

#[must_use]
pub fn derive_entity_view(entities: &[Entity]) -> EntityView {
    let groups = group_entities(entities);
    let summary = summarize_entities(entities, &groups);
    let distribution = entity_distribution(&groups);
    debug!(
        total = summary.total,
        type_count = summary.type_count,
        "derived entity view"
    );

    EntityView {
        groups,
        summary,
        distribution,
    }
}
