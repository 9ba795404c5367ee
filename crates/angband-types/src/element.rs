use bitflags::bitflags;
use serde::Serialize;
use strum::{EnumCount, EnumIter, EnumString, FromRepr, IntoStaticStr};

/// Projectable elements objects can resist, be branded with, or be harmed by.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    EnumIter,
    EnumCount,
    EnumString,
    FromRepr,
    IntoStaticStr,
)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
#[repr(u8)]
pub enum Element {
    Acid = 0,
    Elec = 1,
    Fire = 2,
    Cold = 3,
    Pois = 4,
    Light = 5,
    Dark = 6,
    Sound = 7,
    Shard = 8,
    Nexus = 9,
    Nether = 10,
    Chaos = 11,
    Disen = 12,
}

impl Element {
    /// The four elements that destroy unprotected objects.
    pub const BASE: [Self; 4] = [Self::Acid, Self::Elec, Self::Fire, Self::Cold];
}

bitflags! {
    /// How an object reacts to an element.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
    pub struct ElementFlags: u8 {
        const HATES  = 0x01;
        const IGNORE = 0x02;
    }
}

/// Per-element resistance level and reaction flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub struct ElementInfo {
    pub res_level: i16,
    pub flags: ElementFlags,
}

impl ElementInfo {
    pub const NONE: Self = Self {
        res_level: 0,
        flags: ElementFlags::empty(),
    };
}
