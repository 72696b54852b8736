use chrono::Utc;
use sea_orm::{ActiveValue, EntityTrait};

use crate::{
    constant::{TEST_ARENA_ID, TEST_STAGE_ID, TEST_STAGE_NAME},
    error::TestError,
    fixtures::factory,
    model::PairHistoryModel,
    TestSetup,
};

impl TestSetup {
    pub fn history<'a>(&'a self) -> HistoryFixtures<'a> {
        HistoryFixtures { setup: self }
    }
}

pub struct HistoryFixtures<'a> {
    setup: &'a TestSetup,
}

impl<'a> HistoryFixtures<'a> {
    /// Insert a pair history record for the test stage
    pub async fn insert_record(
        &self,
        participant_1_id: &str,
        participant_2_id: &str,
        both_seeds: bool,
    ) -> Result<PairHistoryModel, TestError> {
        self.insert_record_for_stage(TEST_STAGE_ID, participant_1_id, participant_2_id, both_seeds)
            .await
    }

    /// Insert a pair history record for another stage of the test arena
    pub async fn insert_record_for_stage(
        &self,
        stage_id: &str,
        participant_1_id: &str,
        participant_2_id: &str,
        both_seeds: bool,
    ) -> Result<PairHistoryModel, TestError> {
        Ok(
            entity::prelude::PairHistory::insert(entity::pair_history::ActiveModel {
                arena_id: ActiveValue::Set(TEST_ARENA_ID.to_string()),
                stage_id: ActiveValue::Set(stage_id.to_string()),
                stage_name: ActiveValue::Set(TEST_STAGE_NAME.to_string()),
                participant_1_id: ActiveValue::Set(participant_1_id.to_string()),
                participant_1_name: ActiveValue::Set(format!("Participant {}", participant_1_id)),
                participant_2_id: ActiveValue::Set(participant_2_id.to_string()),
                participant_2_name: ActiveValue::Set(format!("Participant {}", participant_2_id)),
                pair_key: ActiveValue::Set(factory::canonical_pair_key(
                    participant_1_id,
                    participant_2_id,
                )),
                both_seeds: ActiveValue::Set(both_seeds),
                created_at: ActiveValue::Set(Utc::now().naive_utc()),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.state.db)
            .await?,
        )
    }
}
