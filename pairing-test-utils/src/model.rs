//! Database model type aliases for test utilities.
//!
//! These aliases match those in the main pairing crate to keep tests consistent with it.

/// Type alias for a seed designation database model.
pub type SeedDesignationModel = entity::seed_designation::Model;

/// Type alias for a pair history database model.
pub type PairHistoryModel = entity::pair_history::Model;

/// Type alias for a stage pair database model.
pub type PairModel = entity::stage_pair::Model;
