use serde::Serialize;
use strum::{EnumCount, EnumIter, EnumString, FromRepr};

/// The six player statistics, in the order race and class adjustments list
/// them.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, EnumIter, EnumCount, EnumString, FromRepr,
)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
#[repr(u8)]
pub enum Stat {
    Str = 0,
    Int = 1,
    Wis = 2,
    Dex = 3,
    Con = 4,
    Chr = 5,
}

/// Player skills, in the order race and class skill lines list them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, EnumIter, EnumCount, FromRepr)]
#[repr(u8)]
pub enum Skill {
    Disarm = 0,
    Device = 1,
    Save = 2,
    Stealth = 3,
    Search = 4,
    SearchFrequency = 5,
    ToHitMelee = 6,
    ToHitBow = 7,
    ToHitThrow = 8,
    Digging = 9,
}
