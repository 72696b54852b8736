//! Pair formation engine.
//!
//! Turns a stage roster into pairs according to a [`FormationPolicy`] and a [`GenderPolicy`],
//! then persists the pairs and records them in the pair history. Structural problems with the
//! roster are rejected before any pairing work or I/O happens. The pair inserts and the history
//! writes share one transaction, so a stage never ends up with pairs the history doesn't know
//! about.

pub mod strategy;

use std::collections::HashSet;

use dioxus_logger::tracing;
use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::{
    data::pair::PairRepository,
    error::{formation::FormationError, Error},
    model::{
        db::PairModel,
        formation::FormationRequest,
        history::RegisterPairHistory,
        participant::{Gender, Participant},
        policy::{FormationPolicy, GenderPolicy},
    },
    service::{
        history::{PairHistory, PairHistoryService},
        seed::{SeedLookup, SeedService},
    },
    util::rng::{RandomSource, SystemRng},
};

use self::strategy::Pairing;

pub struct PairFormationService<'a, S: SeedLookup, H: PairHistory, R: RandomSource> {
    db: &'a DatabaseConnection,
    seeds: S,
    history: H,
    rng: R,
}

impl<'a> PairFormationService<'a, SeedService<'a>, PairHistoryService<'a, SeedService<'a>>, SystemRng> {
    /// Engine backed by the database seed registry and pair history, shuffling with the
    /// thread-local RNG.
    pub fn from_connection(db: &'a DatabaseConnection) -> Self {
        Self::new(
            db,
            SeedService::new(db),
            PairHistoryService::new(db, SeedService::new(db)),
            SystemRng,
        )
    }
}

impl<'a, S: SeedLookup, H: PairHistory, R: RandomSource> PairFormationService<'a, S, H, R> {
    /// Creates a new instance of [`PairFormationService`]
    ///
    /// # Arguments
    /// - `db` - Database connection reference, pairs are written through it
    /// - `seeds` - Source of the stage's active seeds
    /// - `history` - Seed combination statistics and history writes
    /// - `rng` - Shuffles every bucket before it is paired
    pub fn new(db: &'a DatabaseConnection, seeds: S, history: H, rng: R) -> Self {
        Self {
            db,
            seeds,
            history,
            rng,
        }
    }

    /// Forms the pairs of a stage and persists them along with their history records.
    ///
    /// Strategy selection:
    /// - [`GenderPolicy::Mixed`] pairs one male with one female. [`FormationPolicy::Balanced`]
    ///   diversifies levels inside each pair, any other formation policy matches levels.
    /// - [`FormationPolicy::Balanced`] diversifies levels inside each pair.
    /// - [`FormationPolicy::SameLevel`] matches levels.
    /// - [`FormationPolicy::Random`] pairs freely.
    /// - [`FormationPolicy::SeedProtected`] gives every active seed a non-seed partner, unless
    ///   every seed has already met every other seed in the arena, in which case pairing is free.
    ///
    /// # Returns
    /// - `Ok(Vec<PairModel>)` - The persisted pairs, every participant in exactly one of them
    /// - `Err(Error::FormationError(_))` - The roster can't be paired under the requested
    ///   policies, nothing was written
    /// - `Err(Error::DbErr)` - Database operation failed, nothing was written
    pub async fn form_pairs(&mut self, request: FormationRequest) -> Result<Vec<PairModel>, Error> {
        validate_roster(&request.participants, request.gender_policy)?;

        let FormationRequest {
            arena_id,
            stage_id,
            stage_name,
            participants,
            formation_policy,
            gender_policy,
        } = request;

        if participants.is_empty() {
            return Ok(Vec::new());
        }

        let roster_size = participants.len();

        tracing::debug!(
            arena_id = %arena_id,
            stage_id = %stage_id,
            participants = roster_size,
            formation_policy = ?formation_policy,
            gender_policy = ?gender_policy,
            "Forming stage pairs"
        );

        let pairs = match gender_policy {
            GenderPolicy::Mixed => {
                let (male, female): (Vec<_>, Vec<_>) = participants
                    .into_iter()
                    .partition(|participant| participant.gender == Some(Gender::Male));

                if formation_policy == FormationPolicy::Balanced {
                    strategy::mixed_balanced(&mut self.rng, male, female)
                } else {
                    strategy::mixed_same_level(&mut self.rng, male, female)
                }
            }
            GenderPolicy::Open => match formation_policy {
                FormationPolicy::Balanced => strategy::balanced(&mut self.rng, participants),
                FormationPolicy::SameLevel => strategy::same_level(&mut self.rng, participants),
                FormationPolicy::Random => strategy::free(&mut self.rng, participants),
                FormationPolicy::SeedProtected => {
                    self.seed_protected(&arena_id, &stage_id, participants)
                        .await?
                }
            },
        };

        if pairs.len() * 2 != roster_size {
            return Err(Error::InternalError(format!(
                "Formed {} pairs from a roster of {}",
                pairs.len(),
                roster_size
            )));
        }

        let seed_ids: HashSet<String> = self
            .seeds
            .active_seed_ids(&arena_id, &stage_id)
            .await
            .into_iter()
            .collect();

        let records = pairs
            .iter()
            .map(|(first, second)| RegisterPairHistory {
                arena_id: arena_id.clone(),
                stage_id: stage_id.clone(),
                stage_name: stage_name.clone(),
                participant_1_id: first.id.clone(),
                participant_1_name: first.name.clone(),
                participant_2_id: second.id.clone(),
                participant_2_name: second.name.clone(),
                both_seeds: seed_ids.contains(&first.id) && seed_ids.contains(&second.id),
            })
            .collect();

        let txn = self.db.begin().await?;
        let created = PairRepository::new(&txn)
            .create_many(&arena_id, &stage_id, &pairs)
            .await?;
        self.history.register_batch_in(&txn, records).await?;
        txn.commit().await?;

        tracing::debug!(
            arena_id = %arena_id,
            stage_id = %stage_id,
            pairs = created.len(),
            "Formed stage pairs"
        );

        Ok(created)
    }

    async fn seed_protected(
        &mut self,
        arena_id: &str,
        stage_id: &str,
        participants: Vec<Participant>,
    ) -> Result<Vec<Pairing>, Error> {
        let seed_ids: HashSet<String> = self
            .seeds
            .active_seed_ids(arena_id, stage_id)
            .await
            .into_iter()
            .collect();

        let (seeds, normal): (Vec<_>, Vec<_>) = participants
            .into_iter()
            .partition(|participant| seed_ids.contains(&participant.id));

        if seeds.len() > normal.len() {
            return Err(FormationError::SeedsOutnumberPartners {
                seeds: seeds.len(),
                partners: normal.len(),
            }
            .into());
        }

        let statistics = self.history.compute_statistics(arena_id, stage_id).await;

        if statistics.exhausted && seeds.len() >= 2 {
            tracing::debug!(
                arena_id = %arena_id,
                stage_id = %stage_id,
                seeds = seeds.len(),
                realized = statistics.realized_combinations,
                "Seed combinations exhausted, falling back to free pairing"
            );

            let mut roster = seeds;
            roster.extend(normal);
            return Ok(strategy::free(&mut self.rng, roster));
        }

        Ok(strategy::seed_protected(&mut self.rng, seeds, normal))
    }

    /// Pairs of a stage in creation order.
    pub async fn find_by_stage(
        &self,
        arena_id: &str,
        stage_id: &str,
    ) -> Result<Vec<PairModel>, Error> {
        let pair_repo = PairRepository::new(self.db);

        Ok(pair_repo.get_by_stage(arena_id, stage_id).await?)
    }

    pub async fn find_by_group(&self, group_id: &str) -> Result<Vec<PairModel>, Error> {
        let pair_repo = PairRepository::new(self.db);

        Ok(pair_repo.get_by_group(group_id).await?)
    }

    /// Every pair of the arena the participant belongs to.
    pub async fn find_by_participant(
        &self,
        arena_id: &str,
        participant_id: &str,
    ) -> Result<Vec<PairModel>, Error> {
        let pair_repo = PairRepository::new(self.db);

        Ok(pair_repo.get_by_participant(arena_id, participant_id).await?)
    }

    /// Sets the classified flag of a pair.
    ///
    /// # Returns
    /// - `Ok(Some(PairModel))` - The updated pair
    /// - `Ok(None)` - No pair exists with the provided ID
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn mark_classified(
        &self,
        pair_id: i32,
        classified: bool,
    ) -> Result<Option<PairModel>, Error> {
        let pair_repo = PairRepository::new(self.db);

        Ok(pair_repo.update_classified(pair_id, classified).await?)
    }

    /// Sets the classified flag of many pairs at once, returning how many were updated.
    pub async fn mark_classified_many(
        &self,
        pair_ids: &[i32],
        classified: bool,
    ) -> Result<u64, Error> {
        let pair_repo = PairRepository::new(self.db);

        Ok(pair_repo.update_classified_many(pair_ids, classified).await?)
    }

    /// Deletes every pair of a stage, returning how many were deleted.
    ///
    /// The pair history is left untouched.
    pub async fn delete_all_for_stage(&self, arena_id: &str, stage_id: &str) -> Result<u64, Error> {
        let pair_repo = PairRepository::new(self.db);

        let deleted = pair_repo.delete_by_stage(arena_id, stage_id).await?;

        tracing::debug!(
            arena_id = %arena_id,
            stage_id = %stage_id,
            deleted = deleted,
            "Deleted stage pairs"
        );

        Ok(deleted)
    }
}

/// Rejects rosters that no strategy can pair.
fn validate_roster(
    participants: &[Participant],
    gender_policy: GenderPolicy,
) -> Result<(), FormationError> {
    if participants.len() % 2 != 0 {
        return Err(FormationError::OddParticipantCount(participants.len()));
    }

    let mut seen = HashSet::with_capacity(participants.len());
    for participant in participants {
        if !seen.insert(participant.id.as_str()) {
            return Err(FormationError::DuplicateParticipant(participant.id.clone()));
        }
    }

    if gender_policy == GenderPolicy::Mixed {
        let mut male = 0;
        let mut female = 0;
        for participant in participants {
            match participant.gender {
                Some(Gender::Male) => male += 1,
                Some(Gender::Female) => female += 1,
                None => return Err(FormationError::MissingGender(participant.id.clone())),
            }
        }

        if male != female {
            return Err(FormationError::GenderImbalance { male, female });
        }
    }

    Ok(())
}
