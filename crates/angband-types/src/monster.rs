use serde::Serialize;

use crate::attack::{BlowEffect, BlowMethod};
use crate::color::Color;
use crate::monster_flags::{MonsterFlags, MonsterSpellFlags};
use crate::random::Random;
use crate::tval::Tval;

/// Maximum melee blows per monster race.
pub const MONSTER_BLOW_MAX: usize = 4;
/// Maximum messages per pain set.
pub const PAIN_MESSAGES_MAX: usize = 7;
/// Maximum monster bases a pit can draw from.
pub const PIT_BASES_MAX: usize = 4;

/// Shared properties of a family of monsters, e.g. all dragons.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MonsterBase {
    pub name: String,
    pub text: String,
    pub glyph: char,
    /// Index into the pain message table.
    pub pain: usize,
    pub flags: MonsterFlags,
    pub spell_flags: MonsterSpellFlags,
}

impl MonsterBase {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            text: String::new(),
            glyph: ' ',
            pain: 0,
            flags: MonsterFlags::empty(),
            spell_flags: MonsterSpellFlags::empty(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Blow {
    pub method: BlowMethod,
    pub effect: Option<BlowEffect>,
    pub dice: Random,
}

/// A guaranteed or possible item drop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MonsterDrop {
    pub tval: Option<Tval>,
    pub sval: i32,
    pub kind: Option<usize>,
    pub artifact: Option<usize>,
    pub percent_chance: u32,
    pub min: u32,
    pub max: u32,
}

/// A monster race.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MonsterRace {
    pub ridx: usize,
    pub name: String,
    pub text: String,
    /// Index into the monster base table.
    pub base: Option<usize>,
    pub glyph: char,
    pub color: Color,
    pub speed: i32,
    pub avg_hp: i32,
    pub aaf: i32,
    pub ac: i32,
    pub sleep: i32,
    pub level: i32,
    pub rarity: i32,
    pub power: i32,
    pub mexp: i32,
    pub blows: Vec<Blow>,
    pub flags: MonsterFlags,
    pub spell_flags: MonsterSpellFlags,
    /// Chance out of 100 of casting a spell each turn.
    pub freq_spell: i32,
    pub drops: Vec<MonsterDrop>,
}

impl MonsterRace {
    pub fn new(ridx: usize, name: impl Into<String>) -> Self {
        Self {
            ridx,
            name: name.into(),
            text: String::new(),
            base: None,
            glyph: ' ',
            color: Color::White,
            speed: 0,
            avg_hp: 0,
            aaf: 0,
            ac: 0,
            sleep: 0,
            level: 0,
            rarity: 0,
            power: 0,
            mexp: 0,
            blows: Vec::new(),
            flags: MonsterFlags::empty(),
            spell_flags: MonsterSpellFlags::empty(),
            freq_spell: 0,
            drops: Vec::new(),
        }
    }

    pub fn is_unique(&self) -> bool {
        self.flags.contains(MonsterFlags::UNIQUE)
    }
}

/// One set of pain messages, shared by monster bases.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct PainMessages {
    pub index: usize,
    pub messages: Vec<String>,
}

/// A themed monster pit or nest profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PitProfile {
    pub pit_idx: usize,
    pub name: String,
    pub room_type: u32,
    pub rarity: u32,
    pub ave: u32,
    pub obj_rarity: u32,
    /// Indices into the monster base table.
    pub bases: Vec<usize>,
    pub flags: MonsterFlags,
    pub spell_flags: MonsterSpellFlags,
    pub forbidden_spell_flags: MonsterSpellFlags,
}

impl PitProfile {
    pub fn new(pit_idx: usize, name: impl Into<String>) -> Self {
        Self {
            pit_idx,
            name: name.into(),
            room_type: 0,
            rarity: 0,
            ave: 0,
            obj_rarity: 0,
            bases: Vec::new(),
            flags: MonsterFlags::empty(),
            spell_flags: MonsterSpellFlags::empty(),
            forbidden_spell_flags: MonsterSpellFlags::empty(),
        }
    }
}
