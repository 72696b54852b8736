//! Test fixture modules for database records.
//!
//! - `seed` - seed designations, active or deactivated
//! - `history` - pair history records
//! - `pair` - stage pairs
//! - `factory` - in-memory models that never touch the database

pub mod factory;
pub mod history;
pub mod pair;
pub mod seed;
