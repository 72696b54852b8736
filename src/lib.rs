//! Pair formation and seeding engine.
//!
//! Turns the roster of a tournament stage into pairs of participants, protecting seeded
//! players from each other for as long as the arena's pair history allows. The crate is
//! organised in layers:
//!
//! - [`data`] - SeaORM repositories, generic over connections and transactions
//! - [`service`] - Seed registry, pair history ledger and the formation engine
//! - [`model`] - Request and response types shared by the services
//! - [`error`] - Domain errors aggregated into [`error::Error`]
//! - [`config`] / [`startup`] - Environment configuration and database bootstrap

pub mod config;
pub mod data;
pub mod error;
pub mod model;
pub mod service;
pub mod startup;
pub mod util;
