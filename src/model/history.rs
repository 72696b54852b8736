use serde::{Deserialize, Serialize};

/// Input for registering a formed pair in the pair history.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegisterPairHistory {
    pub arena_id: String,
    pub stage_id: String,
    pub stage_name: String,
    pub participant_1_id: String,
    pub participant_1_name: String,
    pub participant_2_id: String,
    pub participant_2_name: String,
    /// Whether both participants were active seeds when the pair was formed
    pub both_seeds: bool,
}

/// Two seeds that have never been paired together in the arena.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeedCombination {
    pub seed_1_id: String,
    pub seed_2_id: String,
}

/// How many seed-vs-seed pairings remain untried in an arena.
///
/// Computed on demand from the active seeds of a stage and the arena-wide pair history,
/// never persisted.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CombinationStatistics {
    pub total_seeds: usize,
    pub possible_combinations: usize,
    pub realized_combinations: usize,
    pub remaining_combinations: usize,
    pub exhausted: bool,
    pub available_combinations: Vec<SeedCombination>,
}
