//! Database model type aliases.
//!
//! These aliases provide a single point of reference for the SeaORM entity models used
//! throughout the crate without importing from the generated `entity` crate directly.

/// Type alias for a seed designation database model.
///
/// # Fields (from `entity::seed_designation::Model`)
/// - `id` - Primary key
/// - `arena_id` / `stage_id` / `participant_id` - The seeded participant and where
/// - `participant_name`, `participant_level`, `participant_gender` - Snapshot of the participant
/// - `rank_order` - Seed rank, 1 being the strongest
/// - `active` / `deactivation_reason` - Soft-delete state
/// - `created_at` / `updated_at` - Timestamps
pub type SeedDesignationModel = entity::seed_designation::Model;

/// Type alias for a pair history database model.
///
/// Records are immutable once created. `pair_key` is the canonical, order-independent
/// identity of the two participants and `both_seeds` records whether both were active
/// seeds when the pair was formed.
pub type PairHistoryModel = entity::pair_history::Model;

/// Type alias for a stage pair database model.
///
/// A pair of participants competing together in a stage. `classified` is set by downstream
/// logic once the pair advances, `group_id` is an opaque group reference.
pub type PairModel = entity::stage_pair::Model;
