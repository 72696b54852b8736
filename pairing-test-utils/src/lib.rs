//! Shared test utilities for the pairing engine.
//!
//! Provides an in-memory SQLite [`TestSetup`], macros creating the tables a test needs,
//! database fixtures inserting seeds, history records and pairs, and pure factories for
//! in-memory models.

pub mod constant;
pub mod error;
pub mod fixtures;
pub mod model;
pub mod setup;

pub use error::TestError;
pub use setup::{TestAppState, TestSetup};

pub mod prelude {
    pub use crate::{
        constant::{TEST_ARENA_ID, TEST_STAGE_ID, TEST_STAGE_NAME},
        fixtures::factory,
        test_setup_with_pairing_tables, test_setup_with_tables, TestError, TestSetup,
    };
}
