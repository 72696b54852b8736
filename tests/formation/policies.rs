use pairing::model::{
    formation::FormationRequest,
    policy::{FormationPolicy, GenderPolicy},
};

use super::*;

/// Roster cycling through every level and, every fifth participant, no level at all
fn mixed_level_roster(size: usize) -> Vec<Participant> {
    numbered_roster(size)
        .into_iter()
        .enumerate()
        .map(|(i, participant)| match i % 5 {
            0 | 3 => participant.with_level(SkillLevel::Advanced),
            1 => participant.with_level(SkillLevel::Beginner),
            2 => participant.with_level(SkillLevel::Intermediate),
            _ => participant,
        })
        .collect()
}

/// Expect every even roster to be split into length/2 pairs under every open policy
#[tokio::test]
async fn pairs_every_participant_exactly_once() -> Result<(), TestError> {
    let test = test_setup_with_pairing_tables!()?;

    let mut engine = engine(&test.state.db, 11);
    for (stage, size) in (2..=20).step_by(2).enumerate() {
        for formation_policy in [
            FormationPolicy::SeedProtected,
            FormationPolicy::Balanced,
            FormationPolicy::SameLevel,
            FormationPolicy::Random,
        ] {
            let stage_id = format!("stage-{}-{:?}", stage, formation_policy);
            let participants = mixed_level_roster(size);
            let request = FormationRequest::new(
                TEST_ARENA_ID,
                stage_id.as_str(),
                TEST_STAGE_NAME,
                participants.clone(),
            )
            .with_formation_policy(formation_policy);

            let result = engine.form_pairs(request).await;

            assert!(result.is_ok(), "Error: {:?}", result);
            let pairs = result.unwrap();
            assert_eq!(pairs.len(), size / 2);
            assert_partition(pair_ids(&pairs), &participants);
        }
    }

    Ok(())
}

/// Expect two advanced and two beginner participants to form two advanced/beginner pairs
#[tokio::test]
async fn balanced_pairs_advanced_with_beginners() -> Result<(), TestError> {
    let test = test_setup_with_pairing_tables!()?;
    let participants = vec![
        levelled("a1", SkillLevel::Advanced),
        levelled("a2", SkillLevel::Advanced),
        levelled("b1", SkillLevel::Beginner),
        levelled("b2", SkillLevel::Beginner),
    ];

    let mut engine = engine(&test.state.db, 3);
    let pairs = engine
        .form_pairs(
            FormationRequest::new(TEST_ARENA_ID, TEST_STAGE_ID, TEST_STAGE_NAME, participants)
                .with_formation_policy(FormationPolicy::Balanced),
        )
        .await
        .unwrap();

    assert_eq!(pairs.len(), 2);
    for pair in &pairs {
        let levels: HashSet<_> = [pair.participant_1_level, pair.participant_2_level]
            .into_iter()
            .collect();
        assert_eq!(
            levels,
            HashSet::from([Some(SkillLevel::Advanced), Some(SkillLevel::Beginner)])
        );
    }

    Ok(())
}

/// Expect same-level pairing to keep levels together
#[tokio::test]
async fn same_level_keeps_levels_together() -> Result<(), TestError> {
    let test = test_setup_with_pairing_tables!()?;
    let participants = vec![
        levelled("a1", SkillLevel::Advanced),
        levelled("i1", SkillLevel::Intermediate),
        levelled("b1", SkillLevel::Beginner),
        levelled("a2", SkillLevel::Advanced),
        levelled("i2", SkillLevel::Intermediate),
        levelled("b2", SkillLevel::Beginner),
    ];

    let mut engine = engine(&test.state.db, 5);
    let pairs = engine
        .form_pairs(
            FormationRequest::new(TEST_ARENA_ID, TEST_STAGE_ID, TEST_STAGE_NAME, participants)
                .with_formation_policy(FormationPolicy::SameLevel),
        )
        .await
        .unwrap();

    assert_eq!(pairs.len(), 3);
    for pair in &pairs {
        assert_eq!(pair.participant_1_level, pair.participant_2_level);
    }

    Ok(())
}

/// Expect mixed pairing to always pair one male with one female
#[tokio::test]
async fn mixed_pairs_opposite_genders() -> Result<(), TestError> {
    let test = test_setup_with_pairing_tables!()?;
    let participants = vec![
        gendered("m1", SkillLevel::Advanced, Gender::Male),
        gendered("m2", SkillLevel::Intermediate, Gender::Male),
        gendered("m3", SkillLevel::Beginner, Gender::Male),
        Participant::new("m4", "Player m4").with_gender(Gender::Male),
        gendered("f1", SkillLevel::Advanced, Gender::Female),
        gendered("f2", SkillLevel::Advanced, Gender::Female),
        gendered("f3", SkillLevel::Beginner, Gender::Female),
        gendered("f4", SkillLevel::Intermediate, Gender::Female),
    ];

    let mut engine = engine(&test.state.db, 8);
    for (stage_id, formation_policy) in [
        ("mixed-balanced", FormationPolicy::Balanced),
        ("mixed-same-level", FormationPolicy::SameLevel),
        ("mixed-default", FormationPolicy::SeedProtected),
    ] {
        let pairs = engine
            .form_pairs(
                FormationRequest::new(
                    TEST_ARENA_ID,
                    stage_id,
                    TEST_STAGE_NAME,
                    participants.clone(),
                )
                .with_formation_policy(formation_policy)
                .with_gender_policy(GenderPolicy::Mixed),
            )
            .await
            .unwrap();

        assert_partition(pair_ids(&pairs), &participants);
        for pair in &pairs {
            assert_ne!(pair.participant_1_gender, pair.participant_2_gender);
        }
    }

    Ok(())
}

/// Expect mixed balanced pairing to cross advanced and beginner levels across genders
#[tokio::test]
async fn mixed_balanced_crosses_levels() -> Result<(), TestError> {
    let test = test_setup_with_pairing_tables!()?;
    let participants = vec![
        gendered("m-adv", SkillLevel::Advanced, Gender::Male),
        gendered("m-beg", SkillLevel::Beginner, Gender::Male),
        gendered("f-adv", SkillLevel::Advanced, Gender::Female),
        gendered("f-beg", SkillLevel::Beginner, Gender::Female),
    ];

    let mut engine = engine(&test.state.db, 2);
    let pairs = engine
        .form_pairs(
            FormationRequest::new(TEST_ARENA_ID, TEST_STAGE_ID, TEST_STAGE_NAME, participants)
                .with_formation_policy(FormationPolicy::Balanced)
                .with_gender_policy(GenderPolicy::Mixed),
        )
        .await
        .unwrap();

    let formed: HashSet<(&str, &str)> = pair_ids(&pairs).into_iter().collect();
    assert_eq!(
        formed,
        HashSet::from([("m-adv", "f-beg"), ("f-adv", "m-beg")])
    );

    Ok(())
}

/// Expect the same RNG seed to form the same pairs
#[tokio::test]
async fn same_rng_seed_forms_same_pairs() -> Result<(), TestError> {
    let first_test = test_setup_with_pairing_tables!()?;
    let second_test = test_setup_with_pairing_tables!()?;
    let participants = mixed_level_roster(12);

    let mut formed = Vec::new();
    for test in [&first_test, &second_test] {
        let mut engine = engine(&test.state.db, 42);
        let pairs = engine
            .form_pairs(
                FormationRequest::new(
                    TEST_ARENA_ID,
                    TEST_STAGE_ID,
                    TEST_STAGE_NAME,
                    participants.clone(),
                )
                .with_formation_policy(FormationPolicy::Balanced),
            )
            .await
            .unwrap();
        let ids: Vec<(String, String)> = pairs
            .into_iter()
            .map(|pair| (pair.participant_1_id, pair.participant_2_id))
            .collect();
        formed.push(ids);
    }

    assert_eq!(formed[0], formed[1]);

    Ok(())
}
