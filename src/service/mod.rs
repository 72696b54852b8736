//! Service layer for business logic and orchestration.
//!
//! - `seed` - the seed registry: protected top players of a stage
//! - `history` - the pair history ledger and seed combination statistics
//! - `formation` - the pair formation engine composing the two
//!
//! The engine talks to the registry and the ledger through the narrow [`seed::SeedLookup`]
//! and [`history::PairHistory`] traits so either can be replaced in tests or by an
//! alternative seeding policy.

pub mod formation;
pub mod history;
pub mod seed;
