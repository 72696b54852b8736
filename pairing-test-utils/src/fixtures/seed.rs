use chrono::Utc;
use sea_orm::{ActiveValue, EntityTrait};

use crate::{
    constant::{TEST_ARENA_ID, TEST_STAGE_ID},
    error::TestError,
    model::SeedDesignationModel,
    TestSetup,
};

impl TestSetup {
    pub fn seed<'a>(&'a self) -> SeedFixtures<'a> {
        SeedFixtures { setup: self }
    }
}

pub struct SeedFixtures<'a> {
    setup: &'a TestSetup,
}

impl<'a> SeedFixtures<'a> {
    /// Insert an active seed of the test stage
    pub async fn insert_seed(
        &self,
        participant_id: &str,
        rank_order: i32,
    ) -> Result<SeedDesignationModel, TestError> {
        self.insert_seed_for_stage(TEST_STAGE_ID, participant_id, rank_order)
            .await
    }

    /// Insert an active seed of another stage of the test arena
    pub async fn insert_seed_for_stage(
        &self,
        stage_id: &str,
        participant_id: &str,
        rank_order: i32,
    ) -> Result<SeedDesignationModel, TestError> {
        self.insert(stage_id, participant_id, rank_order, true, None)
            .await
    }

    /// Insert a deactivated seed of the test stage
    pub async fn insert_inactive_seed(
        &self,
        participant_id: &str,
        rank_order: i32,
        reason: Option<&str>,
    ) -> Result<SeedDesignationModel, TestError> {
        self.insert(
            TEST_STAGE_ID,
            participant_id,
            rank_order,
            false,
            reason.map(str::to_string),
        )
        .await
    }

    async fn insert(
        &self,
        stage_id: &str,
        participant_id: &str,
        rank_order: i32,
        active: bool,
        deactivation_reason: Option<String>,
    ) -> Result<SeedDesignationModel, TestError> {
        let now = Utc::now().naive_utc();

        Ok(entity::prelude::SeedDesignation::insert(
            entity::seed_designation::ActiveModel {
                arena_id: ActiveValue::Set(TEST_ARENA_ID.to_string()),
                stage_id: ActiveValue::Set(stage_id.to_string()),
                participant_id: ActiveValue::Set(participant_id.to_string()),
                participant_name: ActiveValue::Set(format!("Participant {}", participant_id)),
                participant_level: ActiveValue::Set(None),
                participant_gender: ActiveValue::Set(None),
                rank_order: ActiveValue::Set(rank_order),
                active: ActiveValue::Set(active),
                deactivation_reason: ActiveValue::Set(deactivation_reason),
                created_at: ActiveValue::Set(now),
                updated_at: ActiveValue::Set(now),
                ..Default::default()
            },
        )
        .exec_with_returning(&self.setup.state.db)
        .await?)
    }
}
