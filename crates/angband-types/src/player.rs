use bitflags::bitflags;
use serde::Serialize;
use strum::{EnumCount, EnumIter, EnumString, FromRepr, IntoStaticStr};

use crate::object_flags::ObjectFlags;
use crate::stat::{Skill, Stat};
use crate::tval::Tval;

pub const PY_MAX_SPELLS: usize = 64;
pub const PY_MAX_LEVEL: usize = 50;
/// One title every five levels.
pub const PY_MAX_TITLES: usize = PY_MAX_LEVEL / 5;
/// Largest stack a class may start with.
pub const START_ITEM_MAX: u32 = 99;
pub const BODY_SLOTS_MAX: usize = 12;

bitflags! {
    /// Player race and class abilities.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
    pub struct PlayerFlags: u16 {
        const FAST_SHOT     = 1 << 0;
        const BRAVERY_30    = 1 << 1;
        const BLESS_WEAPON  = 1 << 2;
        const ZERO_FAIL     = 1 << 3;
        const BEAM          = 1 << 4;
        const CHOOSE_SPELLS = 1 << 5;
        const PSEUDO_ID     = 1 << 6;
        const KNOW_MUSHROOM = 1 << 7;
        const KNOW_ZAPPER   = 1 << 8;
        const SEE_ORE       = 1 << 9;
    }
}

pub type StatAdjust = [i32; Stat::COUNT];
pub type SkillTable = [i32; Skill::COUNT];

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlayerRace {
    pub ridx: usize,
    pub name: String,
    pub r_adj: StatAdjust,
    pub r_skills: SkillTable,
    pub r_mhp: i32,
    pub r_exp: i32,
    pub infra: i32,
    /// Index into the history chart table.
    pub history: Option<usize>,
    pub b_age: i32,
    pub m_age: i32,
    pub m_b_ht: i32,
    pub m_m_ht: i32,
    pub f_b_ht: i32,
    pub f_m_ht: i32,
    pub m_b_wt: i32,
    pub m_m_wt: i32,
    pub f_b_wt: i32,
    pub f_m_wt: i32,
    pub flags: ObjectFlags,
    pub pflags: PlayerFlags,
    /// Bit `n` is set when class `n` is available to this race.
    pub choice: u32,
}

impl PlayerRace {
    pub fn new(ridx: usize, name: impl Into<String>) -> Self {
        Self {
            ridx,
            name: name.into(),
            r_adj: [0; Stat::COUNT],
            r_skills: [0; Skill::COUNT],
            r_mhp: 0,
            r_exp: 0,
            infra: 0,
            history: None,
            b_age: 0,
            m_age: 0,
            m_b_ht: 0,
            m_m_ht: 0,
            f_b_ht: 0,
            f_m_ht: 0,
            m_b_wt: 0,
            m_m_wt: 0,
            f_b_wt: 0,
            f_m_wt: 0,
            flags: ObjectFlags::empty(),
            pflags: PlayerFlags::empty(),
            choice: 0,
        }
    }

    pub fn allows_class(&self, cidx: usize) -> bool {
        cidx < 32 && self.choice & (1 << cidx) != 0
    }
}

/// An item a class starts the game with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StartItem {
    pub tval: Tval,
    pub sval: i32,
    pub kind: usize,
    pub min: u32,
    pub max: u32,
}

/// A class's view of one spell slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ClassSpell {
    pub index: usize,
    pub level: i32,
    pub mana: i32,
    pub fail: i32,
    pub exp: i32,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct MagicInfo {
    pub spell_book: Option<Tval>,
    pub spell_stat: i32,
    pub spell_first: u32,
    pub spell_weight: u32,
    pub spells: Vec<ClassSpell>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlayerClass {
    pub cidx: usize,
    pub name: String,
    pub c_adj: StatAdjust,
    pub c_skills: SkillTable,
    pub x_skills: SkillTable,
    pub c_mhp: i32,
    pub c_exp: i32,
    pub sense_base: i32,
    pub sense_div: i32,
    pub max_attacks: i32,
    pub min_weight: i32,
    pub att_multiply: i32,
    pub magic: MagicInfo,
    pub titles: Vec<String>,
    pub start_items: Vec<StartItem>,
    pub pflags: PlayerFlags,
}

impl PlayerClass {
    pub fn new(cidx: usize, name: impl Into<String>) -> Self {
        Self {
            cidx,
            name: name.into(),
            c_adj: [0; Stat::COUNT],
            c_skills: [0; Skill::COUNT],
            x_skills: [0; Skill::COUNT],
            c_mhp: 0,
            c_exp: 0,
            sense_base: 0,
            sense_div: 0,
            max_attacks: 0,
            min_weight: 0,
            att_multiply: 0,
            magic: MagicInfo::default(),
            titles: Vec::new(),
            start_items: Vec::new(),
            pflags: PlayerFlags::empty(),
        }
    }

    /// Title for a character level, counting from 1.
    pub fn title(&self, level: usize) -> Option<&str> {
        let i = level.saturating_sub(1) / 5;
        self.titles.get(i).map(String::as_str)
    }
}

/// One line of a background history chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HistoryEntry {
    /// Chart id this entry leads to, 0 for none.
    pub next: u32,
    /// Index into the history table, resolved once every chart is loaded.
    pub succ: Option<usize>,
    pub roll: i32,
    pub bonus: i32,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HistoryChart {
    pub idx: u32,
    pub entries: Vec<HistoryEntry>,
}

/// Equipment slot categories.
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
pub enum SlotType {
    None = 0,
    Weapon = 1,
    Bow = 2,
    Ring = 3,
    Amulet = 4,
    Light = 5,
    BodyArmor = 6,
    Cloak = 7,
    Shield = 8,
    Hat = 9,
    Gloves = 10,
    Boots = 11,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BodySlot {
    pub slot_type: SlotType,
    pub name: String,
}

/// An equipment layout that races can use.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BodyLayout {
    pub name: String,
    pub slots: Vec<BodySlot>,
}
