//! Factory functions for generating mock database models.
//!
//! Pure functions returning in-memory model instances with standard test values, for tests
//! that need a model without a database round trip.

use chrono::Utc;

use crate::{
    constant::{TEST_ARENA_ID, TEST_STAGE_ID, TEST_STAGE_NAME},
    model::PairHistoryModel,
};

/// Canonical key of an unordered pair: the two IDs sorted ascending and joined by `_`.
pub fn canonical_pair_key(participant_a: &str, participant_b: &str) -> String {
    if participant_a <= participant_b {
        format!("{}_{}", participant_a, participant_b)
    } else {
        format!("{}_{}", participant_b, participant_a)
    }
}

/// Create a mock pair history model of the test stage.
///
/// # Arguments
/// - `id` - Record ID
/// - `participant_1_id` / `participant_2_id` - The paired participants
/// - `both_seeds` - Whether both were seeds when paired
pub fn mock_pair_history_model(
    id: i32,
    participant_1_id: &str,
    participant_2_id: &str,
    both_seeds: bool,
) -> PairHistoryModel {
    PairHistoryModel {
        id,
        arena_id: TEST_ARENA_ID.to_string(),
        stage_id: TEST_STAGE_ID.to_string(),
        stage_name: TEST_STAGE_NAME.to_string(),
        participant_1_id: participant_1_id.to_string(),
        participant_1_name: format!("Participant {}", participant_1_id),
        participant_2_id: participant_2_id.to_string(),
        participant_2_name: format!("Participant {}", participant_2_id),
        pair_key: canonical_pair_key(participant_1_id, participant_2_id),
        both_seeds,
        created_at: Utc::now().naive_utc(),
    }
}
