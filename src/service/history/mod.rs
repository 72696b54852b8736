//! Pair history ledger.
//!
//! Every formed pair is recorded under a canonical, order-independent key (see [`pair_key`]).
//! Records flagged `both_seeds` drive the seed combination statistics the formation engine
//! consults before deciding whether seed protection still means anything: once every seed
//! has met every other seed in the arena there is nothing left to protect.

#[cfg(test)]
mod tests;

use std::collections::{HashMap, HashSet};

use async_trait::async_trait;
use dioxus_logger::tracing;
use sea_orm::{ConnectionTrait, DatabaseConnection, DatabaseTransaction, TransactionTrait};

use crate::{
    data::history::PairHistoryRepository,
    error::Error,
    model::{
        db::PairHistoryModel,
        history::{CombinationStatistics, RegisterPairHistory, SeedCombination},
    },
    service::seed::SeedLookup,
};

/// Separator between the two participant IDs of a pair key.
pub const PAIR_KEY_SEPARATOR: &str = "_";

/// Canonical key of an unordered pair: both IDs sorted ascending, joined by
/// [`PAIR_KEY_SEPARATOR`]. `pair_key(a, b) == pair_key(b, a)` for any `a`, `b`.
pub fn pair_key(participant_a: &str, participant_b: &str) -> String {
    let (first, second) = if participant_a <= participant_b {
        (participant_a, participant_b)
    } else {
        (participant_b, participant_a)
    };

    format!("{}{}{}", first, PAIR_KEY_SEPARATOR, second)
}

/// Seed combination statistics and history writes, as needed by the formation engine.
#[async_trait]
pub trait PairHistory: Send + Sync {
    async fn compute_statistics(&self, arena_id: &str, stage_id: &str) -> CombinationStatistics;

    /// Registers a batch of pairs as part of the caller's transaction.
    async fn register_batch_in(
        &self,
        txn: &DatabaseTransaction,
        records: Vec<RegisterPairHistory>,
    ) -> Result<Vec<PairHistoryModel>, Error>;
}

#[async_trait]
impl<T: PairHistory> PairHistory for &T {
    async fn compute_statistics(&self, arena_id: &str, stage_id: &str) -> CombinationStatistics {
        (**self).compute_statistics(arena_id, stage_id).await
    }

    async fn register_batch_in(
        &self,
        txn: &DatabaseTransaction,
        records: Vec<RegisterPairHistory>,
    ) -> Result<Vec<PairHistoryModel>, Error> {
        (**self).register_batch_in(txn, records).await
    }
}

pub struct PairHistoryService<'a, S: SeedLookup> {
    db: &'a DatabaseConnection,
    seeds: S,
}

impl<'a, S: SeedLookup> PairHistoryService<'a, S> {
    /// Creates a new instance of [`PairHistoryService`]
    ///
    /// # Arguments
    /// - `db` - Database connection reference
    /// - `seeds` - Source of the active seeds used by [`Self::compute_statistics`]
    pub fn new(db: &'a DatabaseConnection, seeds: S) -> Self {
        Self { db, seeds }
    }

    /// Canonical key of an unordered pair, see [`pair_key`].
    pub fn normalize(participant_a: &str, participant_b: &str) -> String {
        pair_key(participant_a, participant_b)
    }

    /// Records a pair, or returns the existing record if the pair is already recorded for the
    /// stage.
    ///
    /// The `both_seeds` flag is stored exactly as supplied.
    ///
    /// # Returns
    /// - `Ok(PairHistoryModel)` - The new or existing record
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn register(&self, record: RegisterPairHistory) -> Result<PairHistoryModel, Error> {
        register_one(self.db, record).await
    }

    /// Records many pairs in a single transaction.
    ///
    /// Returns one record per input, in input order. Pairs already recorded for their stage,
    /// including duplicates within the batch, are returned rather than inserted again. Either
    /// every new record is written or none is.
    ///
    /// # Returns
    /// - `Ok(Vec<PairHistoryModel>)` - One record per input, empty for an empty batch
    /// - `Err(Error::DbErr)` - Database operation failed, nothing was written
    pub async fn register_batch(
        &self,
        records: Vec<RegisterPairHistory>,
    ) -> Result<Vec<PairHistoryModel>, Error> {
        if records.is_empty() {
            return Ok(Vec::new());
        }

        let txn = self.db.begin().await?;
        let registered = register_many(&txn, records).await?;
        txn.commit().await?;

        Ok(registered)
    }

    /// Whether the two participants were ever paired while both were seeds, anywhere in the
    /// arena. `false` if the lookup fails.
    pub async fn was_pair_formed(
        &self,
        arena_id: &str,
        participant_a: &str,
        participant_b: &str,
    ) -> bool {
        let history_repo = PairHistoryRepository::new(self.db);
        let key = pair_key(participant_a, participant_b);

        match history_repo.find_seed_pair_by_key(arena_id, &key).await {
            Ok(record) => record.is_some(),
            Err(e) => {
                tracing::warn!(
                    arena_id = %arena_id,
                    pair_key = %key,
                    "Failed to look up pair history, treating pair as new: {}",
                    e
                );
                false
            }
        }
    }

    /// Keys of every seed-vs-seed pair formed in the arena, across all stages.
    ///
    /// Returns an empty set if the lookup fails.
    pub async fn realized_seed_combinations(&self, arena_id: &str) -> HashSet<String> {
        let history_repo = PairHistoryRepository::new(self.db);

        match history_repo.get_seed_pair_keys(arena_id).await {
            Ok(keys) => keys.into_iter().collect(),
            Err(e) => {
                tracing::warn!(
                    arena_id = %arena_id,
                    "Failed to load realized seed combinations, returning none: {}",
                    e
                );
                HashSet::new()
            }
        }
    }

    /// Computes how many seed-vs-seed pairings of the stage's active seeds remain untried.
    ///
    /// `realized_combinations` counts every distinct seed pair key recorded in the arena, so
    /// pairs involving seeds that are no longer active still count against the total.
    pub async fn compute_statistics(&self, arena_id: &str, stage_id: &str) -> CombinationStatistics {
        let seed_ids = self.seeds.active_seed_ids(arena_id, stage_id).await;
        let realized = self.realized_seed_combinations(arena_id).await;

        combination_statistics(&seed_ids, &realized)
    }

    /// Every record of the arena the participant appears in, most recent first.
    ///
    /// Returns an empty list if the lookup fails.
    pub async fn list_for_participant(
        &self,
        arena_id: &str,
        participant_id: &str,
    ) -> Vec<PairHistoryModel> {
        let history_repo = PairHistoryRepository::new(self.db);

        let records = async {
            let mut records = history_repo
                .get_by_first_participant(arena_id, participant_id)
                .await?;
            records.extend(
                history_repo
                    .get_by_second_participant(arena_id, participant_id)
                    .await?,
            );
            Ok::<_, sea_orm::DbErr>(records)
        }
        .await;

        match records {
            Ok(mut records) => {
                records.sort_by(|a, b| {
                    b.created_at
                        .cmp(&a.created_at)
                        .then_with(|| b.id.cmp(&a.id))
                });
                records.dedup_by_key(|record| record.id);
                records
            }
            Err(e) => {
                tracing::warn!(
                    arena_id = %arena_id,
                    participant_id = %participant_id,
                    "Failed to list pair history for participant, returning none: {}",
                    e
                );
                Vec::new()
            }
        }
    }

    /// Deletes every record of a stage in one transaction.
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of deleted records, 0 when the stage had none
    /// - `Err(Error::DbErr)` - Database operation failed, nothing was deleted
    pub async fn clear_for_stage(&self, arena_id: &str, stage_id: &str) -> Result<u64, Error> {
        let txn = self.db.begin().await?;
        let deleted = PairHistoryRepository::new(&txn)
            .delete_by_stage(arena_id, stage_id)
            .await?;
        txn.commit().await?;

        tracing::debug!(
            arena_id = %arena_id,
            stage_id = %stage_id,
            deleted = deleted,
            "Cleared pair history for stage"
        );

        Ok(deleted)
    }
}

#[async_trait]
impl<S: SeedLookup> PairHistory for PairHistoryService<'_, S> {
    async fn compute_statistics(&self, arena_id: &str, stage_id: &str) -> CombinationStatistics {
        PairHistoryService::compute_statistics(self, arena_id, stage_id).await
    }

    async fn register_batch_in(
        &self,
        txn: &DatabaseTransaction,
        records: Vec<RegisterPairHistory>,
    ) -> Result<Vec<PairHistoryModel>, Error> {
        register_many(txn, records).await
    }
}

/// Builds the statistics for a rank-ordered list of seed IDs and the set of realized keys.
pub(crate) fn combination_statistics(
    seed_ids: &[String],
    realized: &HashSet<String>,
) -> CombinationStatistics {
    let total_seeds = seed_ids.len();
    let possible_combinations = if total_seeds >= 2 {
        total_seeds * (total_seeds - 1) / 2
    } else {
        0
    };
    let realized_combinations = realized.len();
    let remaining_combinations = possible_combinations.saturating_sub(realized_combinations);

    let mut available_combinations = Vec::new();
    for (i, seed_1) in seed_ids.iter().enumerate() {
        for seed_2 in &seed_ids[i + 1..] {
            if !realized.contains(&pair_key(seed_1, seed_2)) {
                available_combinations.push(SeedCombination {
                    seed_1_id: seed_1.clone(),
                    seed_2_id: seed_2.clone(),
                });
            }
        }
    }

    CombinationStatistics {
        total_seeds,
        possible_combinations,
        realized_combinations,
        remaining_combinations,
        exhausted: remaining_combinations == 0,
        available_combinations,
    }
}

async fn register_one<C: ConnectionTrait>(
    db: &C,
    record: RegisterPairHistory,
) -> Result<PairHistoryModel, Error> {
    let history_repo = PairHistoryRepository::new(db);
    let key = pair_key(&record.participant_1_id, &record.participant_2_id);

    if let Some(existing) = history_repo
        .find_by_key(&record.arena_id, &record.stage_id, &key)
        .await?
    {
        return Ok(existing);
    }

    Ok(history_repo.create(record, key).await?)
}

async fn register_many<C: ConnectionTrait>(
    db: &C,
    records: Vec<RegisterPairHistory>,
) -> Result<Vec<PairHistoryModel>, Error> {
    let mut seen: HashMap<(String, String, String), PairHistoryModel> = HashMap::new();
    let mut registered = Vec::with_capacity(records.len());

    for record in records {
        let seen_key = (
            record.arena_id.clone(),
            record.stage_id.clone(),
            pair_key(&record.participant_1_id, &record.participant_2_id),
        );

        let model = match seen.get(&seen_key) {
            Some(model) => model.clone(),
            None => {
                let model = register_one(db, record).await?;
                seen.insert(seen_key, model.clone());
                model
            }
        };

        registered.push(model);
    }

    Ok(registered)
}
