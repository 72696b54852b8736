//! Pair formation error types.
//!
//! Every variant describes a structural precondition of the roster that makes the requested
//! formation impossible. These are surfaced to the caller with a specific message and are
//! never recovered from inside the engine.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum FormationError {
    #[error("Cannot form pairs from an odd number of participants ({0})")]
    OddParticipantCount(usize),
    #[error("Participant {0} appears more than once in the roster")]
    DuplicateParticipant(String),
    #[error("Participant {0} has no gender recorded, which mixed-gender pairing requires")]
    MissingGender(String),
    #[error(
        "Mixed-gender pairing requires equal numbers of male and female participants \
        (got {male} male, {female} female)"
    )]
    GenderImbalance { male: usize, female: usize },
    #[error(
        "Impossible to protect all seeds: not enough non-seed partners \
        ({seeds} seeds, {partners} non-seed participants)"
    )]
    SeedsOutnumberPartners { seeds: usize, partners: usize },
}
