use serde::{Deserialize, Serialize};

use crate::model::{
    participant::Participant,
    policy::{FormationPolicy, GenderPolicy},
};

/// A request to turn a stage roster into pairs.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct FormationRequest {
    pub arena_id: String,
    pub stage_id: String,
    /// Stage display name, copied into the pair history
    pub stage_name: String,
    pub participants: Vec<Participant>,
    #[serde(default)]
    pub formation_policy: FormationPolicy,
    #[serde(default)]
    pub gender_policy: GenderPolicy,
}

impl FormationRequest {
    /// Request with the default policies: seed protection without gender constraint.
    pub fn new(
        arena_id: impl Into<String>,
        stage_id: impl Into<String>,
        stage_name: impl Into<String>,
        participants: Vec<Participant>,
    ) -> Self {
        Self {
            arena_id: arena_id.into(),
            stage_id: stage_id.into(),
            stage_name: stage_name.into(),
            participants,
            formation_policy: FormationPolicy::default(),
            gender_policy: GenderPolicy::default(),
        }
    }

    pub fn with_formation_policy(mut self, formation_policy: FormationPolicy) -> Self {
        self.formation_policy = formation_policy;
        self
    }

    pub fn with_gender_policy(mut self, gender_policy: GenderPolicy) -> Self {
        self.gender_policy = gender_policy;
        self
    }
}
