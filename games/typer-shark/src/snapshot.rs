use serde::Serialize;
use typer_engine::EntityId;

use crate::enemy::{Enemy, EnemyRegistry};
use crate::phase::GamePhase;
use crate::progression::GameStats;

/// Read-only view of the session handed to the renderer.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot {
    pub enemies: Vec<EnemyView>,
    pub locked_target_id: Option<EntityId>,
    pub stats: GameStats,
    pub phase: GamePhase,
    /// Cumulative defeats this run.
    pub defeats: u32,
    pub typed_preview: TypedPreview,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EnemyView {
    pub id: EntityId,
    pub word: String,
    pub typed_length: usize,
    pub lane: f32,
    pub progress: f32,
    pub wobble_seed: f32,
}

impl From<&Enemy> for EnemyView {
    fn from(e: &Enemy) -> Self {
        Self {
            id: e.id(),
            word: e.word().to_string(),
            typed_length: e.typed_len(),
            lane: e.lane(),
            progress: e.progress(),
            wobble_seed: e.wobble_seed(),
        }
    }
}

/// Locked word split into what has been typed and what remains.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct TypedPreview {
    pub completed: String,
    pub remaining: String,
}

impl TypedPreview {
    pub fn for_target(registry: &EnemyRegistry, locked: Option<EntityId>) -> Self {
        match locked.and_then(|id| registry.get(id)) {
            Some(enemy) => {
                let (completed, remaining) = enemy.typed_split();
                Self {
                    completed: completed.to_string(),
                    remaining: remaining.to_string(),
                }
            }
            None => Self::default(),
        }
    }
}
