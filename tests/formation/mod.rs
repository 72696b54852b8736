use std::collections::HashSet;

use pairing::{
    model::participant::{Gender, Participant, SkillLevel},
    service::{
        formation::PairFormationService,
        history::PairHistoryService,
        seed::SeedService,
    },
    util::rng::DeterministicRng,
};
use pairing_test_utils::prelude::*;
use sea_orm::DatabaseConnection;

mod collaborators;
mod policies;
mod stage_pairs;
mod validation;

type Engine<'a> = PairFormationService<
    'a,
    SeedService<'a>,
    PairHistoryService<'a, SeedService<'a>>,
    DeterministicRng,
>;

/// Engine backed by the test database with a seeded RNG
fn engine(db: &DatabaseConnection, rng_seed: u64) -> Engine<'_> {
    PairFormationService::new(
        db,
        SeedService::new(db),
        PairHistoryService::new(db, SeedService::new(db)),
        DeterministicRng::from_seed(rng_seed),
    )
}

fn roster(ids: &[&str]) -> Vec<Participant> {
    ids.iter()
        .map(|id| Participant::new(*id, format!("Player {}", id)))
        .collect()
}

fn numbered_roster(size: usize) -> Vec<Participant> {
    (0..size)
        .map(|i| Participant::new(format!("p{}", i), format!("Player {}", i)))
        .collect()
}

fn levelled(id: &str, level: SkillLevel) -> Participant {
    Participant::new(id, format!("Player {}", id)).with_level(level)
}

fn gendered(id: &str, level: SkillLevel, gender: Gender) -> Participant {
    levelled(id, level).with_gender(gender)
}

/// Asserts every participant of the roster appears in exactly one pair
fn assert_partition<'a>(
    pairs: impl IntoIterator<Item = (&'a str, &'a str)>,
    roster: &[Participant],
) {
    let mut seen = HashSet::new();
    let mut count = 0;
    for (first, second) in pairs {
        assert!(seen.insert(first.to_string()), "{} paired twice", first);
        assert!(seen.insert(second.to_string()), "{} paired twice", second);
        count += 1;
    }

    assert_eq!(count * 2, roster.len());
    let expected: HashSet<String> = roster.iter().map(|p| p.id.clone()).collect();
    assert_eq!(seen, expected);
}

fn pair_ids(pairs: &[pairing::model::db::PairModel]) -> Vec<(&str, &str)> {
    pairs
        .iter()
        .map(|pair| (pair.participant_1_id.as_str(), pair.participant_2_id.as_str()))
        .collect()
}
