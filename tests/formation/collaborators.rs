use std::sync::Mutex;

use async_trait::async_trait;
use pairing::{
    error::Error,
    model::{
        db::PairHistoryModel,
        formation::FormationRequest,
        history::{CombinationStatistics, RegisterPairHistory},
        policy::FormationPolicy,
    },
    service::{history::PairHistory, seed::SeedLookup},
};
use sea_orm::DatabaseTransaction;

use super::*;

/// Seed lookup answering with a fixed list regardless of the stage
struct FixedSeeds(Vec<String>);

#[async_trait]
impl SeedLookup for FixedSeeds {
    async fn active_seed_ids(&self, _arena_id: &str, _stage_id: &str) -> Vec<String> {
        self.0.clone()
    }
}

/// Pair history keeping registrations in memory
#[derive(Default)]
struct RecordingHistory {
    exhausted: bool,
    records: Mutex<Vec<RegisterPairHistory>>,
}

#[async_trait]
impl PairHistory for RecordingHistory {
    async fn compute_statistics(&self, _arena_id: &str, _stage_id: &str) -> CombinationStatistics {
        CombinationStatistics {
            total_seeds: 2,
            possible_combinations: 1,
            realized_combinations: if self.exhausted { 1 } else { 0 },
            remaining_combinations: if self.exhausted { 0 } else { 1 },
            exhausted: self.exhausted,
            available_combinations: Vec::new(),
        }
    }

    async fn register_batch_in(
        &self,
        _txn: &DatabaseTransaction,
        records: Vec<RegisterPairHistory>,
    ) -> Result<Vec<PairHistoryModel>, Error> {
        let registered = records
            .iter()
            .enumerate()
            .map(|(i, record)| {
                factory::mock_pair_history_model(
                    i as i32 + 1,
                    &record.participant_1_id,
                    &record.participant_2_id,
                    record.both_seeds,
                )
            })
            .collect();
        self.records.lock().unwrap().extend(records);

        Ok(registered)
    }
}

/// Pair history whose writes always fail
struct FailingHistory;

#[async_trait]
impl PairHistory for FailingHistory {
    async fn compute_statistics(&self, _arena_id: &str, _stage_id: &str) -> CombinationStatistics {
        CombinationStatistics {
            total_seeds: 0,
            possible_combinations: 0,
            realized_combinations: 0,
            remaining_combinations: 0,
            exhausted: true,
            available_combinations: Vec::new(),
        }
    }

    async fn register_batch_in(
        &self,
        _txn: &DatabaseTransaction,
        _records: Vec<RegisterPairHistory>,
    ) -> Result<Vec<PairHistoryModel>, Error> {
        Err(Error::InternalError("history unavailable".to_string()))
    }
}

/// Expect no pair to persist when the history registration fails
#[tokio::test]
async fn rolls_back_pairs_when_history_fails() -> Result<(), TestError> {
    let test = test_setup_with_pairing_tables!()?;

    let mut engine = PairFormationService::new(
        &test.state.db,
        FixedSeeds(Vec::new()),
        FailingHistory,
        DeterministicRng::from_seed(1),
    );
    let result = engine
        .form_pairs(FormationRequest::new(
            TEST_ARENA_ID,
            TEST_STAGE_ID,
            TEST_STAGE_NAME,
            numbered_roster(6),
        ))
        .await;

    assert!(matches!(result, Err(Error::InternalError(_))));
    assert!(engine
        .find_by_stage(TEST_ARENA_ID, TEST_STAGE_ID)
        .await
        .unwrap()
        .is_empty());

    Ok(())
}

/// Expect one history record per pair, flagged only when both participants are seeds
#[tokio::test]
async fn registers_one_history_record_per_pair() -> Result<(), TestError> {
    let test = test_setup_with_pairing_tables!()?;
    let history = RecordingHistory::default();

    let mut engine = PairFormationService::new(
        &test.state.db,
        FixedSeeds(vec!["s1".to_string(), "s2".to_string()]),
        &history,
        DeterministicRng::from_seed(1),
    );
    let pairs = engine
        .form_pairs(
            FormationRequest::new(
                TEST_ARENA_ID,
                TEST_STAGE_ID,
                "Quarter finals",
                roster(&["s1", "s2"]),
            )
            .with_formation_policy(FormationPolicy::Random),
        )
        .await
        .unwrap();

    let records = history.records.lock().unwrap();
    assert_eq!(pairs.len(), 1);
    assert_eq!(records.len(), 1);
    assert!(records[0].both_seeds);
    assert_eq!(records[0].stage_name, "Quarter finals");
    assert_eq!(records[0].participant_1_id, pairs[0].participant_1_id);
    assert_eq!(records[0].participant_2_id, pairs[0].participant_2_id);

    Ok(())
}

/// Expect the seed list of the lookup, not the database, to drive protection
#[tokio::test]
async fn protects_seeds_from_injected_lookup() -> Result<(), TestError> {
    let test = test_setup_with_pairing_tables!()?;
    let history = RecordingHistory::default();
    let participants = roster(&["s1", "s2", "n1", "n2"]);

    let mut engine = PairFormationService::new(
        &test.state.db,
        FixedSeeds(vec!["s1".to_string(), "s2".to_string()]),
        &history,
        DeterministicRng::from_seed(9),
    );
    let pairs = engine
        .form_pairs(FormationRequest::new(
            TEST_ARENA_ID,
            TEST_STAGE_ID,
            TEST_STAGE_NAME,
            participants.clone(),
        ))
        .await
        .unwrap();

    assert_partition(pair_ids(&pairs), &participants);
    let records = history.records.lock().unwrap();
    assert!(records.iter().all(|record| !record.both_seeds));
    for (first, second) in pair_ids(&pairs) {
        assert_ne!(first.starts_with('s'), second.starts_with('s'));
    }

    Ok(())
}
