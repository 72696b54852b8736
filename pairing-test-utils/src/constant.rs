//! Identifiers shared across tests.
//!
//! Fixtures default to these values so tests only spell out the arena or stage when they
//! need a second one.

/// Arena used by fixtures unless a test provides its own.
pub static TEST_ARENA_ID: &str = "arena-1";

/// Stage used by fixtures unless a test provides its own.
pub static TEST_STAGE_ID: &str = "stage-1";

/// Display name of [`TEST_STAGE_ID`].
pub static TEST_STAGE_NAME: &str = "Stage 1";
