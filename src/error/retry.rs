use sea_orm::DbErr;

use super::Error;

/// Strategy for handling errors in a retry context
#[derive(Debug, PartialEq, Eq)]
pub enum ErrorRetryStrategy {
    /// Retry with backoff (transient infrastructure errors)
    Retry,
    /// Failed permanently (bad input or a bug)
    Fail,
}

impl Error {
    /// Determine error retry strategy based upon application Error type
    ///
    /// Formation writes its pairs and history in a single transaction, so a caller may
    /// safely repeat a `form_pairs` call that failed with a retryable error.
    pub fn to_retry_strategy(&self) -> ErrorRetryStrategy {
        match self {
            Self::DbErr(db_err) => {
                match db_err {
                    // Connection acquisition errors - transient, should retry
                    DbErr::ConnectionAcquire(_) => ErrorRetryStrategy::Retry,
                    // Connection errors - transient, should retry
                    DbErr::Conn(_) => ErrorRetryStrategy::Retry,

                    // All other database errors are permanent failures:
                    // - Query errors (constraint violations, syntax errors, etc.)
                    // - Type conversion errors
                    // - Record not found/inserted/updated
                    _ => ErrorRetryStrategy::Fail,
                }
            }

            // Roster & registry errors - the same input fails the same way every time
            Self::SeedError(_) => ErrorRetryStrategy::Fail,
            Self::FormationError(_) => ErrorRetryStrategy::Fail,

            // Configuration errors - permanent failures, won't resolve with retry
            Self::ConfigError(_) => ErrorRetryStrategy::Fail,

            // InternalError - permanent failures (bug in the engine)
            Self::InternalError(_) => ErrorRetryStrategy::Fail,
        }
    }
}
