use pairing::{
    error::{formation::FormationError, Error, ErrorKind},
    model::{
        formation::FormationRequest,
        policy::{FormationPolicy, GenderPolicy},
    },
};

use super::*;

const FORMATION_POLICIES: [FormationPolicy; 4] = [
    FormationPolicy::SeedProtected,
    FormationPolicy::Balanced,
    FormationPolicy::SameLevel,
    FormationPolicy::Random,
];

/// Expect an odd roster to be rejected under every policy combination, with nothing written
#[tokio::test]
async fn rejects_odd_roster_for_every_policy() -> Result<(), TestError> {
    let test = test_setup_with_pairing_tables!()?;
    let participants = vec![
        gendered("m1", SkillLevel::Advanced, Gender::Male),
        gendered("f1", SkillLevel::Beginner, Gender::Female),
        gendered("m2", SkillLevel::Beginner, Gender::Male),
    ];

    let mut engine = engine(&test.state.db, 1);
    for formation_policy in FORMATION_POLICIES {
        for gender_policy in [GenderPolicy::Open, GenderPolicy::Mixed] {
            let request = FormationRequest::new(
                TEST_ARENA_ID,
                TEST_STAGE_ID,
                TEST_STAGE_NAME,
                participants.clone(),
            )
            .with_formation_policy(formation_policy)
            .with_gender_policy(gender_policy);

            let result = engine.form_pairs(request).await;

            assert!(
                matches!(
                    result,
                    Err(Error::FormationError(FormationError::OddParticipantCount(3)))
                ),
                "{:?}/{:?}: {:?}",
                formation_policy,
                gender_policy,
                result
            );
        }
    }
    assert!(engine
        .find_by_stage(TEST_ARENA_ID, TEST_STAGE_ID)
        .await
        .unwrap()
        .is_empty());

    Ok(())
}

/// Expect a participant listed twice to be rejected as invalid state
#[tokio::test]
async fn rejects_duplicate_participant() -> Result<(), TestError> {
    let test = test_setup_with_pairing_tables!()?;
    let participants = roster(&["a", "b", "c", "a"]);

    let mut engine = engine(&test.state.db, 1);
    let result = engine
        .form_pairs(FormationRequest::new(
            TEST_ARENA_ID,
            TEST_STAGE_ID,
            TEST_STAGE_NAME,
            participants,
        ))
        .await;

    let err = result.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidState);
    assert!(matches!(
        err,
        Error::FormationError(FormationError::DuplicateParticipant(id)) if id == "a"
    ));

    Ok(())
}

/// Expect unequal gender counts to be rejected whatever the formation policy
#[tokio::test]
async fn rejects_gender_imbalance_for_every_formation_policy() -> Result<(), TestError> {
    let test = test_setup_with_pairing_tables!()?;
    let participants = vec![
        gendered("m1", SkillLevel::Advanced, Gender::Male),
        gendered("m2", SkillLevel::Beginner, Gender::Male),
        gendered("m3", SkillLevel::Intermediate, Gender::Male),
        gendered("f1", SkillLevel::Beginner, Gender::Female),
    ];

    let mut engine = engine(&test.state.db, 1);
    for formation_policy in FORMATION_POLICIES {
        let request = FormationRequest::new(
            TEST_ARENA_ID,
            TEST_STAGE_ID,
            TEST_STAGE_NAME,
            participants.clone(),
        )
        .with_formation_policy(formation_policy)
        .with_gender_policy(GenderPolicy::Mixed);

        let result = engine.form_pairs(request).await;

        assert!(
            matches!(
                result,
                Err(Error::FormationError(FormationError::GenderImbalance {
                    male: 3,
                    female: 1
                }))
            ),
            "{:?}: {:?}",
            formation_policy,
            result
        );
    }

    Ok(())
}

/// Expect mixed pairing to require a gender for every participant
#[tokio::test]
async fn rejects_missing_gender_in_mixed_mode() -> Result<(), TestError> {
    let test = test_setup_with_pairing_tables!()?;
    let participants = vec![
        gendered("m1", SkillLevel::Advanced, Gender::Male),
        levelled("x", SkillLevel::Beginner),
    ];

    let mut engine = engine(&test.state.db, 1);
    let result = engine
        .form_pairs(
            FormationRequest::new(TEST_ARENA_ID, TEST_STAGE_ID, TEST_STAGE_NAME, participants)
                .with_gender_policy(GenderPolicy::Mixed),
        )
        .await;

    assert!(matches!(
        result,
        Err(Error::FormationError(FormationError::MissingGender(id))) if id == "x"
    ));

    Ok(())
}

/// Expect an empty roster to form no pairs
#[tokio::test]
async fn empty_roster_forms_nothing() -> Result<(), TestError> {
    let test = test_setup_with_pairing_tables!()?;

    let mut engine = engine(&test.state.db, 1);
    let result = engine
        .form_pairs(FormationRequest::new(
            TEST_ARENA_ID,
            TEST_STAGE_ID,
            TEST_STAGE_NAME,
            Vec::new(),
        ))
        .await;

    assert!(result.is_ok(), "Error: {:?}", result);
    assert!(result.unwrap().is_empty());

    Ok(())
}
