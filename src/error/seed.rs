//! Seed registry error types.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SeedError {
    #[error("Participant {participant_id} is already an active seed for stage {stage_id}")]
    AlreadySeeded {
        stage_id: String,
        participant_id: String,
    },
    #[error("No seed designation found for participant {participant_id} in stage {stage_id}")]
    NotFound {
        stage_id: String,
        participant_id: String,
    },
    #[error("Seed designation ID {0} not found")]
    IdNotFound(i32),
    /// Rank order must be a positive integer, 1 being the strongest seed.
    #[error("Invalid seed rank order {0}: rank order must be 1 or greater")]
    InvalidOrder(i32),
}
