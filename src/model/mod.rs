//! Data models shared between the services and their callers.
//!
//! - `db` - type aliases for the SeaORM entity models
//! - `formation` - a formation request: roster plus policies
//! - `participant` - roster entries handed to the formation engine
//! - `policy` - formation and gender policies selecting a pairing strategy
//! - `seed` - inputs for creating and updating seed designations
//! - `history` - pair history registration input and combination statistics

pub mod db;
pub mod formation;
pub mod history;
pub mod participant;
pub mod policy;
pub mod seed;
