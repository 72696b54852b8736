//! Pairing strategies.
//!
//! Pure, synchronous functions turning a validated roster into pairs. Every bucket is shuffled
//! with the injected [`RandomSource`] before use, then consumed by a fixed priority cascade.
//! Callers guarantee an even roster (and, for the mixed strategies, equal gender counts), so
//! every participant ends up in exactly one pair.

use crate::{
    model::participant::{Participant, SkillLevel},
    util::rng::RandomSource,
};

pub type Pairing = (Participant, Participant);

/// Participants split by skill level, each bucket independently shuffled.
#[derive(Default)]
struct LevelBuckets {
    advanced: Vec<Participant>,
    intermediate: Vec<Participant>,
    beginner: Vec<Participant>,
    /// Participants without a recorded level, only paired with the leftovers
    unlevelled: Vec<Participant>,
}

impl LevelBuckets {
    fn split<R: RandomSource>(rng: &mut R, participants: Vec<Participant>) -> Self {
        let mut buckets = Self::default();
        for participant in participants {
            match participant.level {
                Some(SkillLevel::Advanced) => buckets.advanced.push(participant),
                Some(SkillLevel::Intermediate) => buckets.intermediate.push(participant),
                Some(SkillLevel::Beginner) => buckets.beginner.push(participant),
                None => buckets.unlevelled.push(participant),
            }
        }

        Self {
            advanced: rng.shuffled(buckets.advanced),
            intermediate: rng.shuffled(buckets.intermediate),
            beginner: rng.shuffled(buckets.beginner),
            unlevelled: rng.shuffled(buckets.unlevelled),
        }
    }

    fn into_remaining(self) -> Vec<Participant> {
        let mut remaining = self.advanced;
        remaining.extend(self.intermediate);
        remaining.extend(self.beginner);
        remaining.extend(self.unlevelled);
        remaining
    }
}

/// Pairs the heads of two buckets until either runs out.
fn pair_across(first: &mut Vec<Participant>, second: &mut Vec<Participant>, pairs: &mut Vec<Pairing>) {
    let count = first.len().min(second.len());
    pairs.extend(first.drain(..count).zip(second.drain(..count)));
}

/// Pairs members of one bucket with each other, leaving at most one behind.
fn pair_within(bucket: &mut Vec<Participant>, pairs: &mut Vec<Pairing>) {
    let count = bucket.len() / 2 * 2;
    pairs.extend(pair_sequential(bucket.drain(..count)));
}

/// Pairs participants in order: 0-1, 2-3, ...
fn pair_sequential(participants: impl IntoIterator<Item = Participant>) -> Vec<Pairing> {
    let mut participants = participants.into_iter();
    let mut pairs = Vec::new();
    while let (Some(first), Some(second)) = (participants.next(), participants.next()) {
        pairs.push((first, second));
    }
    pairs
}

/// Shuffles the whole roster once and pairs it sequentially.
pub fn free<R: RandomSource>(rng: &mut R, participants: Vec<Participant>) -> Vec<Pairing> {
    pair_sequential(rng.shuffled(participants))
}

/// Gives every seed a non-seed partner, then pairs the remaining non-seeds with each other.
pub fn seed_protected<R: RandomSource>(
    rng: &mut R,
    seeds: Vec<Participant>,
    normal: Vec<Participant>,
) -> Vec<Pairing> {
    let mut seeds = rng.shuffled(seeds);
    let mut normal = rng.shuffled(normal);

    let mut pairs = Vec::with_capacity((seeds.len() + normal.len()) / 2);
    pair_across(&mut seeds, &mut normal, &mut pairs);
    pairs.extend(pair_sequential(seeds.into_iter().chain(normal)));

    pairs
}

/// Maximizes the level spread inside each pair, falling back to same-level pairs only when
/// no diversifying partner is left.
pub fn balanced<R: RandomSource>(rng: &mut R, participants: Vec<Participant>) -> Vec<Pairing> {
    let mut pairs = Vec::with_capacity(participants.len() / 2);
    let mut b = LevelBuckets::split(rng, participants);

    pair_across(&mut b.advanced, &mut b.beginner, &mut pairs);
    pair_across(&mut b.advanced, &mut b.intermediate, &mut pairs);
    pair_across(&mut b.intermediate, &mut b.beginner, &mut pairs);
    pair_within(&mut b.intermediate, &mut pairs);
    pair_within(&mut b.advanced, &mut pairs);
    pair_within(&mut b.beginner, &mut pairs);
    pairs.extend(pair_sequential(b.into_remaining()));

    pairs
}

/// Pairs participants of the same level, stragglers of different levels last.
pub fn same_level<R: RandomSource>(rng: &mut R, participants: Vec<Participant>) -> Vec<Pairing> {
    let mut pairs = Vec::with_capacity(participants.len() / 2);
    let mut b = LevelBuckets::split(rng, participants);

    pair_within(&mut b.advanced, &mut pairs);
    pair_within(&mut b.intermediate, &mut pairs);
    pair_within(&mut b.beginner, &mut pairs);
    pairs.extend(pair_sequential(b.into_remaining()));

    pairs
}

/// Opposite-gender pairs with the widest level spread available.
///
/// `male` and `female` must be the same length.
pub fn mixed_balanced<R: RandomSource>(
    rng: &mut R,
    male: Vec<Participant>,
    female: Vec<Participant>,
) -> Vec<Pairing> {
    let mut pairs = Vec::with_capacity(male.len());
    let mut m = LevelBuckets::split(rng, male);
    let mut f = LevelBuckets::split(rng, female);

    pair_across(&mut m.advanced, &mut f.beginner, &mut pairs);
    pair_across(&mut f.advanced, &mut m.beginner, &mut pairs);
    pair_across(&mut m.advanced, &mut f.intermediate, &mut pairs);
    pair_across(&mut f.advanced, &mut m.intermediate, &mut pairs);
    pair_across(&mut m.intermediate, &mut f.beginner, &mut pairs);
    pair_across(&mut f.intermediate, &mut m.beginner, &mut pairs);
    pair_across(&mut m.intermediate, &mut f.intermediate, &mut pairs);
    pair_across(&mut m.advanced, &mut f.advanced, &mut pairs);
    pair_across(&mut m.beginner, &mut f.beginner, &mut pairs);
    pair_across(&mut m.into_remaining(), &mut f.into_remaining(), &mut pairs);

    pairs
}

/// Opposite-gender pairs of the same level, then any opposite-gender leftovers.
///
/// `male` and `female` must be the same length.
pub fn mixed_same_level<R: RandomSource>(
    rng: &mut R,
    male: Vec<Participant>,
    female: Vec<Participant>,
) -> Vec<Pairing> {
    let mut pairs = Vec::with_capacity(male.len());
    let mut m = LevelBuckets::split(rng, male);
    let mut f = LevelBuckets::split(rng, female);

    pair_across(&mut m.advanced, &mut f.advanced, &mut pairs);
    pair_across(&mut m.intermediate, &mut f.intermediate, &mut pairs);
    pair_across(&mut m.beginner, &mut f.beginner, &mut pairs);
    pair_across(&mut m.into_remaining(), &mut f.into_remaining(), &mut pairs);

    pairs
}
