//! Error types for the pairing engine.
//!
//! Errors are grouped per domain (seed registry, pair formation, configuration) and aggregated
//! into a single [`Error`] type using `thiserror`'s `#[from]` conversions, so every service
//! method can propagate failures with `?`. The controller layer that sits on top of this crate
//! maps errors onto client responses through [`Error::kind`] and decides whether a failed
//! call is worth retrying through [`Error::to_retry_strategy`].

pub mod config;
pub mod formation;
pub mod retry;
pub mod seed;

use thiserror::Error;

use crate::error::{config::ConfigError, formation::FormationError, seed::SeedError};

/// Main error type for the pairing engine.
///
/// # Error Categories
/// - Seed registry errors (duplicate designation, missing designation, invalid rank)
/// - Formation errors (structural preconditions the roster does not satisfy)
/// - Configuration errors (missing/invalid environment variables)
/// - Database errors, propagated unchanged from SeaORM
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration error (missing or invalid environment variables).
    #[error(transparent)]
    ConfigError(#[from] ConfigError),
    /// Seed registry error (conflicting or missing seed designations).
    #[error(transparent)]
    SeedError(#[from] SeedError),
    /// Pair formation precondition violated by the supplied roster.
    #[error(transparent)]
    FormationError(#[from] FormationError),
    /// Internal error indicating a bug in the pairing engine.
    ///
    /// This error should never occur in normal operation.
    #[error("Internal error in the pairing engine, this indicates a bug: {0:?}")]
    InternalError(String),
    /// Database error (query failures, connection issues, constraint violations).
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),
}

/// Coarse error classification exposed to the controller layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// A structural precondition was violated; never recovered silently.
    InvalidState,
    /// An active seed designation already exists for the participant.
    Conflict,
    /// The referenced seed designation does not exist.
    NotFound,
    /// Persistence or configuration failure.
    Infrastructure,
}

impl Error {
    /// Classifies the error for translation into a client-facing response.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::SeedError(SeedError::AlreadySeeded { .. }) => ErrorKind::Conflict,
            Self::SeedError(SeedError::NotFound { .. })
            | Self::SeedError(SeedError::IdNotFound(_)) => ErrorKind::NotFound,
            Self::SeedError(SeedError::InvalidOrder(_)) => ErrorKind::InvalidState,
            Self::FormationError(_) => ErrorKind::InvalidState,
            Self::ConfigError(_) | Self::InternalError(_) | Self::DbErr(_) => {
                ErrorKind::Infrastructure
            }
        }
    }
}
