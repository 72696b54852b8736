//! Data repositories.
//!
//! Each repository wraps one table and is generic over `ConnectionTrait`, so the same
//! queries run against a pooled connection or inside a transaction. Repositories return
//! `DbErr` unchanged; deciding what a failure means is left to the service layer.

pub mod history;
pub mod pair;
pub mod seed;

#[cfg(test)]
mod tests;
