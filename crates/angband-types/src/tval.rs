use serde::Serialize;
use strum::{EnumCount, EnumIter, EnumString, FromRepr, IntoStaticStr};

/// Object type values (`TV_*`). The discriminant is the numeric tval used in
/// data files and as the index of the object base table.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    EnumIter,
    EnumCount,
    EnumString,
    FromRepr,
    IntoStaticStr,
)]
#[strum(ascii_case_insensitive)]
#[repr(u8)]
pub enum Tval {
    #[strum(serialize = "skeleton")]
    Skeleton = 1,
    #[strum(serialize = "bottle")]
    Bottle = 2,
    #[strum(serialize = "junk")]
    Junk = 3,
    #[strum(serialize = "spike")]
    Spike = 5,
    #[strum(serialize = "chest")]
    Chest = 7,
    #[strum(serialize = "shot")]
    Shot = 16,
    #[strum(serialize = "arrow")]
    Arrow = 17,
    #[strum(serialize = "bolt")]
    Bolt = 18,
    #[strum(serialize = "bow")]
    Bow = 19,
    #[strum(serialize = "digger")]
    Digging = 20,
    #[strum(serialize = "hafted")]
    Hafted = 21,
    #[strum(serialize = "polearm")]
    Polearm = 22,
    #[strum(serialize = "sword")]
    Sword = 23,
    #[strum(serialize = "boots")]
    Boots = 30,
    #[strum(serialize = "gloves")]
    Gloves = 31,
    #[strum(serialize = "helm")]
    Helm = 32,
    #[strum(serialize = "crown")]
    Crown = 33,
    #[strum(serialize = "shield")]
    Shield = 34,
    #[strum(serialize = "cloak")]
    Cloak = 35,
    #[strum(to_string = "soft armor", serialize = "soft armour")]
    SoftArmor = 36,
    #[strum(to_string = "hard armor", serialize = "hard armour")]
    HardArmor = 37,
    #[strum(to_string = "dragon armor", serialize = "dragon armour")]
    DragonArmor = 38,
    #[strum(serialize = "light")]
    Light = 39,
    #[strum(serialize = "amulet")]
    Amulet = 40,
    #[strum(serialize = "ring")]
    Ring = 45,
    #[strum(serialize = "staff")]
    Staff = 55,
    #[strum(serialize = "wand")]
    Wand = 65,
    #[strum(serialize = "rod")]
    Rod = 66,
    #[strum(serialize = "scroll")]
    Scroll = 70,
    #[strum(serialize = "potion")]
    Potion = 75,
    #[strum(serialize = "flask")]
    Flask = 77,
    #[strum(serialize = "food")]
    Food = 80,
    #[strum(serialize = "magic book")]
    MagicBook = 90,
    #[strum(serialize = "prayer book")]
    PrayerBook = 91,
    #[strum(serialize = "gold")]
    Gold = 100,
}

impl Tval {
    /// One past the highest tval; the size of the object base table.
    pub const MAX: usize = 101;

    /// Resolve a tval written either as its number or as its name.
    pub fn find(text: &str) -> Option<Self> {
        match text.parse::<u8>() {
            Ok(n) => Self::from_repr(n),
            Err(_) => text.parse().ok(),
        }
    }

    pub fn name(self) -> &'static str {
        self.into()
    }

    pub const fn is_book(self) -> bool {
        matches!(self, Self::MagicBook | Self::PrayerBook)
    }
}
