//! Seed registry.
//!
//! A seed is a participant flagged as a protected top player of a stage. At most one active
//! designation exists per (arena, stage, participant); deactivation is a soft delete that keeps
//! the row and its reason, while [`SeedService::remove`] deletes permanently.
//!
//! Mutations propagate every error. The lookup helpers consulted opportunistically by other
//! components ([`SeedService::is_seed`], [`SeedService::filter_seeds`],
//! [`SeedService::active_seed_ids`]) log failures and fall back to an empty answer instead.

#[cfg(test)]
mod tests;

use async_trait::async_trait;
use dioxus_logger::tracing;
use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::{
    data::seed::SeedRepository,
    error::{seed::SeedError, Error},
    model::{
        db::SeedDesignationModel,
        seed::{NewSeedDesignation, SeedUpdate},
    },
};

/// Read access to the active seeds of a stage.
#[async_trait]
pub trait SeedLookup: Send + Sync {
    /// Participant IDs of the active seeds of a stage in rank order, empty on failure.
    async fn active_seed_ids(&self, arena_id: &str, stage_id: &str) -> Vec<String>;
}

#[async_trait]
impl<T: SeedLookup> SeedLookup for &T {
    async fn active_seed_ids(&self, arena_id: &str, stage_id: &str) -> Vec<String> {
        (**self).active_seed_ids(arena_id, stage_id).await
    }
}

pub struct SeedService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> SeedService<'a> {
    /// Creates a new instance of [`SeedService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Designates a participant as an active seed of a stage.
    ///
    /// # Returns
    /// - `Ok(SeedDesignationModel)` - The new active designation
    /// - `Err(Error::SeedError(SeedError::AlreadySeeded))` - The participant is already an active
    ///   seed of the stage
    /// - `Err(Error::SeedError(SeedError::InvalidOrder))` - Rank order below 1
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn designate(&self, seed: NewSeedDesignation) -> Result<SeedDesignationModel, Error> {
        validate_rank_order(seed.rank_order)?;

        let seed_repo = SeedRepository::new(self.db);

        if seed_repo
            .find_active(&seed.arena_id, &seed.stage_id, &seed.participant.id)
            .await?
            .is_some()
        {
            return Err(SeedError::AlreadySeeded {
                stage_id: seed.stage_id,
                participant_id: seed.participant.id,
            }
            .into());
        }

        let designation = seed_repo.create(seed).await?;

        tracing::debug!(
            arena_id = %designation.arena_id,
            stage_id = %designation.stage_id,
            participant_id = %designation.participant_id,
            rank_order = designation.rank_order,
            "Designated seed"
        );

        Ok(designation)
    }

    /// Gets the active designation of a participant, if any.
    pub async fn find_by_participant(
        &self,
        arena_id: &str,
        stage_id: &str,
        participant_id: &str,
    ) -> Result<Option<SeedDesignationModel>, Error> {
        let seed_repo = SeedRepository::new(self.db);

        Ok(seed_repo
            .find_active(arena_id, stage_id, participant_id)
            .await?)
    }

    /// Lists the active seeds of a stage, strongest first.
    pub async fn list_active(
        &self,
        arena_id: &str,
        stage_id: &str,
    ) -> Result<Vec<SeedDesignationModel>, Error> {
        let seed_repo = SeedRepository::new(self.db);

        Ok(seed_repo.get_active_by_stage(arena_id, stage_id).await?)
    }

    /// Whether the participant is an active seed of the stage, `false` if the lookup fails.
    pub async fn is_seed(&self, arena_id: &str, stage_id: &str, participant_id: &str) -> bool {
        match self
            .find_by_participant(arena_id, stage_id, participant_id)
            .await
        {
            Ok(designation) => designation.is_some(),
            Err(e) => {
                tracing::warn!(
                    participant_id = %participant_id,
                    stage_id = %stage_id,
                    "Failed to check seed status, treating participant as unseeded: {}",
                    e
                );
                false
            }
        }
    }

    /// Applies a partial update to a designation.
    ///
    /// Only the fields set on `update` are written, along with the updated timestamp.
    ///
    /// # Returns
    /// - `Ok(())` - Designation updated
    /// - `Err(Error::SeedError(SeedError::IdNotFound))` - No designation with the provided ID
    /// - `Err(Error::SeedError(SeedError::AlreadySeeded))` - Activating would create a second
    ///   active designation for the participant
    /// - `Err(Error::SeedError(SeedError::InvalidOrder))` - Rank order below 1
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn update(&self, id: i32, update: SeedUpdate) -> Result<(), Error> {
        if let Some(rank_order) = update.rank_order {
            validate_rank_order(rank_order)?;
        }

        let seed_repo = SeedRepository::new(self.db);

        if update.active == Some(true) {
            let designation = seed_repo
                .get_by_id(id)
                .await?
                .ok_or(SeedError::IdNotFound(id))?;

            ensure_no_other_active(&seed_repo, &designation).await?;
        }

        seed_repo
            .update(id, update)
            .await?
            .ok_or(SeedError::IdNotFound(id))?;

        Ok(())
    }

    /// Deactivates the active designation of a participant, keeping the row.
    ///
    /// # Returns
    /// - `Ok(())` - Designation deactivated
    /// - `Err(Error::SeedError(SeedError::NotFound))` - The participant has no active designation
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn deactivate(
        &self,
        arena_id: &str,
        stage_id: &str,
        participant_id: &str,
        reason: Option<String>,
    ) -> Result<(), Error> {
        let seed_repo = SeedRepository::new(self.db);

        let designation = seed_repo
            .find_active(arena_id, stage_id, participant_id)
            .await?
            .ok_or_else(|| not_found(stage_id, participant_id))?;

        seed_repo
            .update(
                designation.id,
                SeedUpdate {
                    active: Some(false),
                    deactivation_reason: Some(reason),
                    ..Default::default()
                },
            )
            .await?
            .ok_or(SeedError::IdNotFound(designation.id))?;

        tracing::debug!(
            participant_id = %participant_id,
            stage_id = %stage_id,
            "Deactivated seed"
        );

        Ok(())
    }

    /// Reactivates the most recent designation of a participant and clears its reason.
    ///
    /// # Returns
    /// - `Ok(())` - Designation active
    /// - `Err(Error::SeedError(SeedError::NotFound))` - The participant was never designated
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn reactivate(
        &self,
        arena_id: &str,
        stage_id: &str,
        participant_id: &str,
    ) -> Result<(), Error> {
        let seed_repo = SeedRepository::new(self.db);

        let designation = seed_repo
            .find_latest(arena_id, stage_id, participant_id)
            .await?
            .ok_or_else(|| not_found(stage_id, participant_id))?;

        ensure_no_other_active(&seed_repo, &designation).await?;

        seed_repo
            .update(
                designation.id,
                SeedUpdate {
                    active: Some(true),
                    deactivation_reason: Some(None),
                    ..Default::default()
                },
            )
            .await?
            .ok_or(SeedError::IdNotFound(designation.id))?;

        Ok(())
    }

    /// Permanently deletes every designation of a participant in a stage.
    ///
    /// # Returns
    /// - `Ok(())` - Designations deleted
    /// - `Err(Error::SeedError(SeedError::NotFound))` - The participant was never designated
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn remove(
        &self,
        arena_id: &str,
        stage_id: &str,
        participant_id: &str,
    ) -> Result<(), Error> {
        let seed_repo = SeedRepository::new(self.db);

        let deleted = seed_repo
            .delete_for_participant(arena_id, stage_id, participant_id)
            .await?;

        if deleted == 0 {
            return Err(not_found(stage_id, participant_id).into());
        }

        Ok(())
    }

    /// Rewrites the rank order of the listed active seeds to their position in the list.
    ///
    /// The first participant becomes rank 1. All updates commit together or not at all.
    ///
    /// # Returns
    /// - `Ok(Vec<SeedDesignationModel>)` - The reordered designations, strongest first
    /// - `Err(Error::SeedError(SeedError::NotFound))` - A listed participant is not an active seed
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn reorder(
        &self,
        arena_id: &str,
        stage_id: &str,
        participant_ids: &[String],
    ) -> Result<Vec<SeedDesignationModel>, Error> {
        let txn = self.db.begin().await?;
        let seed_repo = SeedRepository::new(&txn);

        let mut reordered = Vec::with_capacity(participant_ids.len());
        for (position, participant_id) in participant_ids.iter().enumerate() {
            let designation = seed_repo
                .find_active(arena_id, stage_id, participant_id)
                .await?
                .ok_or_else(|| not_found(stage_id, participant_id))?;

            let rank_order = i32::try_from(position + 1).map_err(|_| {
                Error::InternalError(format!("Seed list of {} is too long", participant_ids.len()))
            })?;

            let designation = seed_repo
                .update(
                    designation.id,
                    SeedUpdate {
                        rank_order: Some(rank_order),
                        ..Default::default()
                    },
                )
                .await?
                .ok_or(SeedError::IdNotFound(designation.id))?;

            reordered.push(designation);
        }

        txn.commit().await?;

        Ok(reordered)
    }

    /// Returns the candidates that are active seeds of the stage, in candidate order.
    ///
    /// Returns an empty list if the lookup fails.
    pub async fn filter_seeds(
        &self,
        arena_id: &str,
        stage_id: &str,
        candidate_ids: &[String],
    ) -> Vec<String> {
        if candidate_ids.is_empty() {
            return Vec::new();
        }

        let seed_repo = SeedRepository::new(self.db);

        match seed_repo
            .get_active_participant_ids_in(arena_id, stage_id, candidate_ids)
            .await
        {
            Ok(seed_ids) => candidate_ids
                .iter()
                .filter(|id| seed_ids.contains(id))
                .cloned()
                .collect(),
            Err(e) => {
                tracing::warn!(
                    stage_id = %stage_id,
                    "Failed to filter seeds, returning none: {}",
                    e
                );
                Vec::new()
            }
        }
    }

    /// Participant IDs of the active seeds of the stage in rank order.
    ///
    /// Returns an empty list if the lookup fails.
    pub async fn active_seed_ids(&self, arena_id: &str, stage_id: &str) -> Vec<String> {
        let seed_repo = SeedRepository::new(self.db);

        match seed_repo
            .get_active_participant_ids(arena_id, stage_id)
            .await
        {
            Ok(seed_ids) => seed_ids,
            Err(e) => {
                tracing::warn!(
                    stage_id = %stage_id,
                    "Failed to list active seed IDs, returning none: {}",
                    e
                );
                Vec::new()
            }
        }
    }
}

#[async_trait]
impl SeedLookup for SeedService<'_> {
    async fn active_seed_ids(&self, arena_id: &str, stage_id: &str) -> Vec<String> {
        SeedService::active_seed_ids(self, arena_id, stage_id).await
    }
}

fn validate_rank_order(rank_order: i32) -> Result<(), SeedError> {
    if rank_order < 1 {
        return Err(SeedError::InvalidOrder(rank_order));
    }

    Ok(())
}

fn not_found(stage_id: &str, participant_id: &str) -> SeedError {
    SeedError::NotFound {
        stage_id: stage_id.to_string(),
        participant_id: participant_id.to_string(),
    }
}

/// Errors if another designation of the same participant is already active.
async fn ensure_no_other_active<C: sea_orm::ConnectionTrait>(
    seed_repo: &SeedRepository<'_, C>,
    designation: &SeedDesignationModel,
) -> Result<(), Error> {
    if let Some(active) = seed_repo
        .find_active(
            &designation.arena_id,
            &designation.stage_id,
            &designation.participant_id,
        )
        .await?
    {
        if active.id != designation.id {
            return Err(SeedError::AlreadySeeded {
                stage_id: designation.stage_id.clone(),
                participant_id: designation.participant_id.clone(),
            }
            .into());
        }
    }

    Ok(())
}
