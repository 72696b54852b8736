use pairing_test_utils::prelude::*;

use crate::{
    error::{seed::SeedError, Error},
    model::{participant::Participant, seed::NewSeedDesignation},
    service::seed::SeedService,
};


fn new_seed(participant_id: &str, rank_order: i32) -> NewSeedDesignation {
    NewSeedDesignation {
        arena_id: TEST_ARENA_ID.to_string(),
        stage_id: TEST_STAGE_ID.to_string(),
        participant: Participant::new(participant_id, format!("Player {}", participant_id)),
        rank_order,
    }
}
