use pairing_test_utils::prelude::*;
use sea_orm::{DatabaseConnection, EntityTrait, PaginatorTrait};

use crate::{
    error::Error,
    model::history::RegisterPairHistory,
    service::{
        history::{PairHistoryService, PAIR_KEY_SEPARATOR},
        seed::SeedService,
    },
};


fn history_service(db: &DatabaseConnection) -> PairHistoryService<'_, SeedService<'_>> {
    PairHistoryService::new(db, SeedService::new(db))
}

fn record(participant_1_id: &str, participant_2_id: &str, both_seeds: bool) -> RegisterPairHistory {
    RegisterPairHistory {
        arena_id: TEST_ARENA_ID.to_string(),
        stage_id: TEST_STAGE_ID.to_string(),
        stage_name: TEST_STAGE_NAME.to_string(),
        participant_1_id: participant_1_id.to_string(),
        participant_1_name: format!("Player {}", participant_1_id),
        participant_2_id: participant_2_id.to_string(),
        participant_2_name: format!("Player {}", participant_2_id),
        both_seeds,
    }
}

async fn history_count(db: &DatabaseConnection) -> Result<u64, TestError> {
    Ok(entity::prelude::PairHistory::find().count(db).await?)
}
