use serde::{Deserialize, Serialize};

/// How participants are matched with each other.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FormationPolicy {
    /// Every active seed is paired with a non-seed partner.
    #[default]
    SeedProtected,
    /// Diversify skill levels within each pair.
    Balanced,
    /// Pair participants of the same skill level together.
    SameLevel,
    /// Plain random pairing.
    Random,
}

/// Gender constraint applied on top of the formation policy.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GenderPolicy {
    /// No gender constraint.
    #[default]
    Open,
    /// Every pair is one male and one female participant.
    Mixed,
}
