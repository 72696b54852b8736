use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    IntoActiveModel, QueryFilter, QueryOrder, QuerySelect,
};

use crate::model::seed::{NewSeedDesignation, SeedUpdate};

pub struct SeedRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> SeedRepository<'a, C> {
    /// Creates a new instance of [`SeedRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Create a new active seed designation
    pub async fn create(
        &self,
        seed: NewSeedDesignation,
    ) -> Result<entity::seed_designation::Model, DbErr> {
        let now = Utc::now().naive_utc();
        let designation = entity::seed_designation::ActiveModel {
            arena_id: ActiveValue::Set(seed.arena_id),
            stage_id: ActiveValue::Set(seed.stage_id),
            participant_id: ActiveValue::Set(seed.participant.id),
            participant_name: ActiveValue::Set(seed.participant.name),
            participant_level: ActiveValue::Set(seed.participant.level),
            participant_gender: ActiveValue::Set(seed.participant.gender),
            rank_order: ActiveValue::Set(seed.rank_order),
            active: ActiveValue::Set(true),
            deactivation_reason: ActiveValue::Set(None),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        };

        designation.insert(self.db).await
    }

    pub async fn get_by_id(
        &self,
        id: i32,
    ) -> Result<Option<entity::seed_designation::Model>, DbErr> {
        entity::prelude::SeedDesignation::find_by_id(id)
            .one(self.db)
            .await
    }

    /// Get the active designation of a participant in a stage
    pub async fn find_active(
        &self,
        arena_id: &str,
        stage_id: &str,
        participant_id: &str,
    ) -> Result<Option<entity::seed_designation::Model>, DbErr> {
        entity::prelude::SeedDesignation::find()
            .filter(entity::seed_designation::Column::ArenaId.eq(arena_id))
            .filter(entity::seed_designation::Column::StageId.eq(stage_id))
            .filter(entity::seed_designation::Column::ParticipantId.eq(participant_id))
            .filter(entity::seed_designation::Column::Active.eq(true))
            .one(self.db)
            .await
    }

    /// Get the most recent designation of a participant in a stage, active or not
    pub async fn find_latest(
        &self,
        arena_id: &str,
        stage_id: &str,
        participant_id: &str,
    ) -> Result<Option<entity::seed_designation::Model>, DbErr> {
        entity::prelude::SeedDesignation::find()
            .filter(entity::seed_designation::Column::ArenaId.eq(arena_id))
            .filter(entity::seed_designation::Column::StageId.eq(stage_id))
            .filter(entity::seed_designation::Column::ParticipantId.eq(participant_id))
            .order_by_desc(entity::seed_designation::Column::Id)
            .one(self.db)
            .await
    }

    /// Get all active designations of a stage, strongest seed first
    pub async fn get_active_by_stage(
        &self,
        arena_id: &str,
        stage_id: &str,
    ) -> Result<Vec<entity::seed_designation::Model>, DbErr> {
        entity::prelude::SeedDesignation::find()
            .filter(entity::seed_designation::Column::ArenaId.eq(arena_id))
            .filter(entity::seed_designation::Column::StageId.eq(stage_id))
            .filter(entity::seed_designation::Column::Active.eq(true))
            .order_by_asc(entity::seed_designation::Column::RankOrder)
            .order_by_asc(entity::seed_designation::Column::Id)
            .all(self.db)
            .await
    }

    /// Get the participant IDs of all active seeds of a stage in rank order
    pub async fn get_active_participant_ids(
        &self,
        arena_id: &str,
        stage_id: &str,
    ) -> Result<Vec<String>, DbErr> {
        entity::prelude::SeedDesignation::find()
            .select_only()
            .column(entity::seed_designation::Column::ParticipantId)
            .filter(entity::seed_designation::Column::ArenaId.eq(arena_id))
            .filter(entity::seed_designation::Column::StageId.eq(stage_id))
            .filter(entity::seed_designation::Column::Active.eq(true))
            .order_by_asc(entity::seed_designation::Column::RankOrder)
            .order_by_asc(entity::seed_designation::Column::Id)
            .into_tuple::<String>()
            .all(self.db)
            .await
    }

    /// Get which of the provided participant IDs are active seeds of a stage
    pub async fn get_active_participant_ids_in(
        &self,
        arena_id: &str,
        stage_id: &str,
        participant_ids: &[String],
    ) -> Result<Vec<String>, DbErr> {
        entity::prelude::SeedDesignation::find()
            .select_only()
            .column(entity::seed_designation::Column::ParticipantId)
            .filter(entity::seed_designation::Column::ArenaId.eq(arena_id))
            .filter(entity::seed_designation::Column::StageId.eq(stage_id))
            .filter(entity::seed_designation::Column::Active.eq(true))
            .filter(
                entity::seed_designation::Column::ParticipantId
                    .is_in(participant_ids.iter().cloned()),
            )
            .into_tuple::<String>()
            .all(self.db)
            .await
    }

    /// Apply a partial update to a designation
    ///
    /// # Returns
    /// - `Some(Model)` - The updated designation
    /// - `None` - No designation exists with the provided ID
    pub async fn update(
        &self,
        id: i32,
        update: SeedUpdate,
    ) -> Result<Option<entity::seed_designation::Model>, DbErr> {
        let designation = match entity::prelude::SeedDesignation::find_by_id(id)
            .one(self.db)
            .await?
        {
            Some(designation) => designation,
            None => return Ok(None),
        };

        let mut designation_am = designation.into_active_model();
        if let Some(rank_order) = update.rank_order {
            designation_am.rank_order = ActiveValue::Set(rank_order);
        }
        if let Some(active) = update.active {
            designation_am.active = ActiveValue::Set(active);
        }
        if let Some(reason) = update.deactivation_reason {
            designation_am.deactivation_reason = ActiveValue::Set(reason);
        }
        designation_am.updated_at = ActiveValue::Set(Utc::now().naive_utc());

        let designation = designation_am.update(self.db).await?;

        Ok(Some(designation))
    }

    /// Permanently delete every designation of a participant in a stage
    ///
    /// # Returns
    /// The number of deleted rows
    pub async fn delete_for_participant(
        &self,
        arena_id: &str,
        stage_id: &str,
        participant_id: &str,
    ) -> Result<u64, DbErr> {
        let result = entity::prelude::SeedDesignation::delete_many()
            .filter(entity::seed_designation::Column::ArenaId.eq(arena_id))
            .filter(entity::seed_designation::Column::StageId.eq(stage_id))
            .filter(entity::seed_designation::Column::ParticipantId.eq(participant_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}
