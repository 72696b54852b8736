use chrono::Utc;
use sea_orm::{ActiveValue, EntityTrait};

use crate::{
    constant::{TEST_ARENA_ID, TEST_STAGE_ID},
    error::TestError,
    model::PairModel,
    TestSetup,
};

impl TestSetup {
    pub fn pair<'a>(&'a self) -> PairFixtures<'a> {
        PairFixtures { setup: self }
    }
}

pub struct PairFixtures<'a> {
    setup: &'a TestSetup,
}

impl<'a> PairFixtures<'a> {
    /// Insert an unclassified pair of the test stage without a group
    pub async fn insert_pair(
        &self,
        participant_1_id: &str,
        participant_2_id: &str,
    ) -> Result<PairModel, TestError> {
        self.insert(TEST_STAGE_ID, participant_1_id, participant_2_id, None)
            .await
    }

    /// Insert an unclassified pair of the test stage assigned to a group
    pub async fn insert_pair_in_group(
        &self,
        participant_1_id: &str,
        participant_2_id: &str,
        group_id: &str,
    ) -> Result<PairModel, TestError> {
        self.insert(
            TEST_STAGE_ID,
            participant_1_id,
            participant_2_id,
            Some(group_id.to_string()),
        )
        .await
    }

    /// Insert an unclassified pair of another stage of the test arena
    pub async fn insert_pair_for_stage(
        &self,
        stage_id: &str,
        participant_1_id: &str,
        participant_2_id: &str,
    ) -> Result<PairModel, TestError> {
        self.insert(stage_id, participant_1_id, participant_2_id, None)
            .await
    }

    async fn insert(
        &self,
        stage_id: &str,
        participant_1_id: &str,
        participant_2_id: &str,
        group_id: Option<String>,
    ) -> Result<PairModel, TestError> {
        let now = Utc::now().naive_utc();

        Ok(
            entity::prelude::StagePair::insert(entity::stage_pair::ActiveModel {
                arena_id: ActiveValue::Set(TEST_ARENA_ID.to_string()),
                stage_id: ActiveValue::Set(stage_id.to_string()),
                participant_1_id: ActiveValue::Set(participant_1_id.to_string()),
                participant_1_name: ActiveValue::Set(format!("Participant {}", participant_1_id)),
                participant_1_level: ActiveValue::Set(None),
                participant_1_gender: ActiveValue::Set(None),
                participant_2_id: ActiveValue::Set(participant_2_id.to_string()),
                participant_2_name: ActiveValue::Set(format!("Participant {}", participant_2_id)),
                participant_2_level: ActiveValue::Set(None),
                participant_2_gender: ActiveValue::Set(None),
                classified: ActiveValue::Set(false),
                group_id: ActiveValue::Set(group_id),
                created_at: ActiveValue::Set(now),
                updated_at: ActiveValue::Set(now),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.state.db)
            .await?,
        )
    }
}
