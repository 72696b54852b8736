use chrono::Utc;
use migration::Expr;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, Condition, ConnectionTrait, DbErr, EntityTrait,
    IntoActiveModel, QueryFilter, QueryOrder,
};

use crate::model::participant::Participant;

pub struct PairRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> PairRepository<'a, C> {
    /// Creates a new instance of [`PairRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Insert a batch of pairs for a stage
    ///
    /// # Notes
    /// - Pairs are inserted unclassified and without a group
    /// - If you need transactional behavior, pass a transaction as the connection
    pub async fn create_many(
        &self,
        arena_id: &str,
        stage_id: &str,
        pairs: &[(Participant, Participant)],
    ) -> Result<Vec<entity::stage_pair::Model>, DbErr> {
        if pairs.is_empty() {
            return Ok(Vec::new());
        }

        let now = Utc::now().naive_utc();
        let pairs = pairs.iter().map(|(first, second)| entity::stage_pair::ActiveModel {
            arena_id: ActiveValue::Set(arena_id.to_string()),
            stage_id: ActiveValue::Set(stage_id.to_string()),
            participant_1_id: ActiveValue::Set(first.id.clone()),
            participant_1_name: ActiveValue::Set(first.name.clone()),
            participant_1_level: ActiveValue::Set(first.level),
            participant_1_gender: ActiveValue::Set(first.gender),
            participant_2_id: ActiveValue::Set(second.id.clone()),
            participant_2_name: ActiveValue::Set(second.name.clone()),
            participant_2_level: ActiveValue::Set(second.level),
            participant_2_gender: ActiveValue::Set(second.gender),
            classified: ActiveValue::Set(false),
            group_id: ActiveValue::Set(None),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        });

        entity::prelude::StagePair::insert_many(pairs)
            .exec_with_returning(self.db)
            .await
    }

    pub async fn get_by_stage(
        &self,
        arena_id: &str,
        stage_id: &str,
    ) -> Result<Vec<entity::stage_pair::Model>, DbErr> {
        entity::prelude::StagePair::find()
            .filter(entity::stage_pair::Column::ArenaId.eq(arena_id))
            .filter(entity::stage_pair::Column::StageId.eq(stage_id))
            .order_by_asc(entity::stage_pair::Column::Id)
            .all(self.db)
            .await
    }

    pub async fn get_by_group(
        &self,
        group_id: &str,
    ) -> Result<Vec<entity::stage_pair::Model>, DbErr> {
        entity::prelude::StagePair::find()
            .filter(entity::stage_pair::Column::GroupId.eq(group_id))
            .order_by_asc(entity::stage_pair::Column::Id)
            .all(self.db)
            .await
    }

    /// Get every pair of the arena the participant belongs to, in either slot
    pub async fn get_by_participant(
        &self,
        arena_id: &str,
        participant_id: &str,
    ) -> Result<Vec<entity::stage_pair::Model>, DbErr> {
        entity::prelude::StagePair::find()
            .filter(entity::stage_pair::Column::ArenaId.eq(arena_id))
            .filter(
                Condition::any()
                    .add(entity::stage_pair::Column::Participant1Id.eq(participant_id))
                    .add(entity::stage_pair::Column::Participant2Id.eq(participant_id)),
            )
            .order_by_asc(entity::stage_pair::Column::Id)
            .all(self.db)
            .await
    }

    /// Set the classified flag of a pair
    ///
    /// # Returns
    /// - `Some(Model)` - The updated pair
    /// - `None` - No pair exists with the provided ID
    pub async fn update_classified(
        &self,
        pair_id: i32,
        classified: bool,
    ) -> Result<Option<entity::stage_pair::Model>, DbErr> {
        let pair = match entity::prelude::StagePair::find_by_id(pair_id)
            .one(self.db)
            .await?
        {
            Some(pair) => pair,
            None => return Ok(None),
        };

        let mut pair_am = pair.into_active_model();
        pair_am.classified = ActiveValue::Set(classified);
        pair_am.updated_at = ActiveValue::Set(Utc::now().naive_utc());

        let pair = pair_am.update(self.db).await?;

        Ok(Some(pair))
    }

    /// Set the classified flag of many pairs at once
    ///
    /// # Returns
    /// The number of updated pairs, IDs that don't exist are silently skipped
    pub async fn update_classified_many(
        &self,
        pair_ids: &[i32],
        classified: bool,
    ) -> Result<u64, DbErr> {
        if pair_ids.is_empty() {
            return Ok(0);
        }

        let result = entity::prelude::StagePair::update_many()
            .col_expr(entity::stage_pair::Column::Classified, Expr::value(classified))
            .col_expr(
                entity::stage_pair::Column::UpdatedAt,
                Expr::value(Utc::now().naive_utc()),
            )
            .filter(entity::stage_pair::Column::Id.is_in(pair_ids.iter().copied()))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    /// Delete every pair of a stage
    ///
    /// # Returns
    /// The number of deleted rows
    pub async fn delete_by_stage(&self, arena_id: &str, stage_id: &str) -> Result<u64, DbErr> {
        let result = entity::prelude::StagePair::delete_many()
            .filter(entity::stage_pair::Column::ArenaId.eq(arena_id))
            .filter(entity::stage_pair::Column::StageId.eq(stage_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}
