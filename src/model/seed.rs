use serde::{Deserialize, Serialize};

use crate::model::participant::Participant;

/// Input for designating a participant as a seed of a stage.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct NewSeedDesignation {
    pub arena_id: String,
    pub stage_id: String,
    pub participant: Participant,
    /// Seed rank, 1 being the strongest
    pub rank_order: i32,
}

/// Partial update of a seed designation. Only fields set to `Some` are written.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct SeedUpdate {
    pub rank_order: Option<i32>,
    pub active: Option<bool>,
    /// `Some(None)` clears the stored reason
    pub deactivation_reason: Option<Option<String>>,
}
