use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
    QueryOrder, QuerySelect,
};

use crate::model::history::RegisterPairHistory;

pub struct PairHistoryRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> PairHistoryRepository<'a, C> {
    /// Creates a new instance of [`PairHistoryRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Create a new pair history record
    ///
    /// # Arguments
    /// - `record` - The pair to record, participants are stored in the order provided
    /// - `pair_key` - Canonical key of the pair, see [`crate::service::history::pair_key`]
    pub async fn create(
        &self,
        record: RegisterPairHistory,
        pair_key: String,
    ) -> Result<entity::pair_history::Model, DbErr> {
        let history = entity::pair_history::ActiveModel {
            arena_id: ActiveValue::Set(record.arena_id),
            stage_id: ActiveValue::Set(record.stage_id),
            stage_name: ActiveValue::Set(record.stage_name),
            participant_1_id: ActiveValue::Set(record.participant_1_id),
            participant_1_name: ActiveValue::Set(record.participant_1_name),
            participant_2_id: ActiveValue::Set(record.participant_2_id),
            participant_2_name: ActiveValue::Set(record.participant_2_name),
            pair_key: ActiveValue::Set(pair_key),
            both_seeds: ActiveValue::Set(record.both_seeds),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        history.insert(self.db).await
    }

    /// Get the record of a pair within a single stage
    pub async fn find_by_key(
        &self,
        arena_id: &str,
        stage_id: &str,
        pair_key: &str,
    ) -> Result<Option<entity::pair_history::Model>, DbErr> {
        entity::prelude::PairHistory::find()
            .filter(entity::pair_history::Column::ArenaId.eq(arena_id))
            .filter(entity::pair_history::Column::StageId.eq(stage_id))
            .filter(entity::pair_history::Column::PairKey.eq(pair_key))
            .one(self.db)
            .await
    }

    /// Get any arena-wide record of the pair formed while both participants were seeds
    pub async fn find_seed_pair_by_key(
        &self,
        arena_id: &str,
        pair_key: &str,
    ) -> Result<Option<entity::pair_history::Model>, DbErr> {
        entity::prelude::PairHistory::find()
            .filter(entity::pair_history::Column::ArenaId.eq(arena_id))
            .filter(entity::pair_history::Column::PairKey.eq(pair_key))
            .filter(entity::pair_history::Column::BothSeeds.eq(true))
            .one(self.db)
            .await
    }

    /// Get the keys of every seed-vs-seed pair formed in the arena, across all stages
    ///
    /// A pair formed in several stages appears once per stage.
    pub async fn get_seed_pair_keys(&self, arena_id: &str) -> Result<Vec<String>, DbErr> {
        entity::prelude::PairHistory::find()
            .select_only()
            .column(entity::pair_history::Column::PairKey)
            .filter(entity::pair_history::Column::ArenaId.eq(arena_id))
            .filter(entity::pair_history::Column::BothSeeds.eq(true))
            .into_tuple::<String>()
            .all(self.db)
            .await
    }

    /// Get records where the participant occupies the first slot
    pub async fn get_by_first_participant(
        &self,
        arena_id: &str,
        participant_id: &str,
    ) -> Result<Vec<entity::pair_history::Model>, DbErr> {
        entity::prelude::PairHistory::find()
            .filter(entity::pair_history::Column::ArenaId.eq(arena_id))
            .filter(entity::pair_history::Column::Participant1Id.eq(participant_id))
            .order_by_desc(entity::pair_history::Column::CreatedAt)
            .all(self.db)
            .await
    }

    /// Get records where the participant occupies the second slot
    pub async fn get_by_second_participant(
        &self,
        arena_id: &str,
        participant_id: &str,
    ) -> Result<Vec<entity::pair_history::Model>, DbErr> {
        entity::prelude::PairHistory::find()
            .filter(entity::pair_history::Column::ArenaId.eq(arena_id))
            .filter(entity::pair_history::Column::Participant2Id.eq(participant_id))
            .order_by_desc(entity::pair_history::Column::CreatedAt)
            .all(self.db)
            .await
    }

    /// Delete every record of a stage
    ///
    /// # Returns
    /// The number of deleted rows
    pub async fn delete_by_stage(&self, arena_id: &str, stage_id: &str) -> Result<u64, DbErr> {
        let result = entity::prelude::PairHistory::delete_many()
            .filter(entity::pair_history::Column::ArenaId.eq(arena_id))
            .filter(entity::pair_history::Column::StageId.eq(stage_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}
