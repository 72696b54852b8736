use pairing::model::formation::FormationRequest;

use super::*;

/// Expect formed pairs to be readable by stage and by participant
#[tokio::test]
async fn finds_formed_pairs() -> Result<(), TestError> {
    let test = test_setup_with_pairing_tables!()?;
    let participants = numbered_roster(6);

    let mut engine = engine(&test.state.db, 4);
    let formed = engine
        .form_pairs(FormationRequest::new(
            TEST_ARENA_ID,
            TEST_STAGE_ID,
            TEST_STAGE_NAME,
            participants,
        ))
        .await
        .unwrap();

    let by_stage = engine.find_by_stage(TEST_ARENA_ID, TEST_STAGE_ID).await.unwrap();
    assert_eq!(by_stage, formed);

    let by_participant = engine.find_by_participant(TEST_ARENA_ID, "p0").await.unwrap();
    assert_eq!(by_participant.len(), 1);
    assert!(
        by_participant[0].participant_1_id == "p0" || by_participant[0].participant_2_id == "p0"
    );

    Ok(())
}

/// Expect pairs of a group only
#[tokio::test]
async fn finds_pairs_by_group() -> Result<(), TestError> {
    let test = test_setup_with_pairing_tables!()?;
    let grouped = test.pair().insert_pair_in_group("a", "b", "group-a").await?;
    test.pair().insert_pair_in_group("c", "d", "group-b").await?;
    test.pair().insert_pair("e", "f").await?;

    let engine = engine(&test.state.db, 1);
    let pairs = engine.find_by_group("group-a").await.unwrap();

    assert_eq!(pairs, vec![grouped]);

    Ok(())
}

/// Expect the classified flag to be set on one pair, None for an unknown pair
#[tokio::test]
async fn marks_pair_classified() -> Result<(), TestError> {
    let test = test_setup_with_pairing_tables!()?;
    let pair = test.pair().insert_pair("a", "b").await?;

    let engine = engine(&test.state.db, 1);
    let classified = engine.mark_classified(pair.id, true).await.unwrap();
    let missing = engine.mark_classified(pair.id + 1, true).await.unwrap();

    assert!(classified.unwrap().classified);
    assert!(missing.is_none());

    let unclassified = engine.mark_classified(pair.id, false).await.unwrap();
    assert!(!unclassified.unwrap().classified);

    Ok(())
}

/// Expect the flag to be set on every listed pair that exists
#[tokio::test]
async fn marks_many_pairs_classified() -> Result<(), TestError> {
    let test = test_setup_with_pairing_tables!()?;
    let first = test.pair().insert_pair("a", "b").await?;
    let second = test.pair().insert_pair("c", "d").await?;
    test.pair().insert_pair("e", "f").await?;

    let engine = engine(&test.state.db, 1);
    let updated = engine
        .mark_classified_many(&[first.id, second.id], true)
        .await
        .unwrap();
    let none = engine.mark_classified_many(&[], true).await.unwrap();

    assert_eq!(updated, 2);
    assert_eq!(none, 0);
    let classified = engine
        .find_by_stage(TEST_ARENA_ID, TEST_STAGE_ID)
        .await
        .unwrap()
        .into_iter()
        .filter(|pair| pair.classified)
        .count();
    assert_eq!(classified, 2);

    Ok(())
}

/// Expect the stage's pairs to be deleted while its history survives
#[tokio::test]
async fn deletes_stage_pairs_but_keeps_history() -> Result<(), TestError> {
    let test = test_setup_with_pairing_tables!()?;

    let mut engine = engine(&test.state.db, 6);
    engine
        .form_pairs(FormationRequest::new(
            TEST_ARENA_ID,
            TEST_STAGE_ID,
            TEST_STAGE_NAME,
            numbered_roster(4),
        ))
        .await
        .unwrap();
    test.pair().insert_pair_for_stage("stage-2", "x", "y").await?;

    let deleted = engine
        .delete_all_for_stage(TEST_ARENA_ID, TEST_STAGE_ID)
        .await
        .unwrap();

    assert_eq!(deleted, 2);
    assert!(engine
        .find_by_stage(TEST_ARENA_ID, TEST_STAGE_ID)
        .await
        .unwrap()
        .is_empty());
    assert_eq!(engine.find_by_stage(TEST_ARENA_ID, "stage-2").await.unwrap().len(), 1);
    let history_service = PairHistoryService::new(&test.state.db, SeedService::new(&test.state.db));
    assert_eq!(history_service.list_for_participant(TEST_ARENA_ID, "p0").await.len(), 1);

    Ok(())
}
