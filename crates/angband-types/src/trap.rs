use bitflags::bitflags;
use serde::Serialize;

use crate::color::Color;
use crate::effect::Effect;
use crate::object_flags::ObjectFlags;
use crate::random::Random;

bitflags! {
    /// Trap and rune flags.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
    pub struct TrapFlags: u16 {
        const TRAP       = 1 << 0;
        const FLOOR      = 1 << 1;
        const DOWN       = 1 << 2;
        const PIT        = 1 << 3;
        const RUNE       = 1 << 4;
        const SPOT       = 1 << 5;
        const GAS        = 1 << 6;
        const DART       = 1 << 7;
        const VISIBLE    = 1 << 8;
        const INVISIBLE  = 1 << 9;
        const MAGICAL    = 1 << 10;
        const SAVE_ARMOR = 1 << 11;
        const SAVE_THROW = 1 << 12;
        const LOCK       = 1 << 13;
        const GLYPH      = 1 << 14;
        const ONETIME    = 1 << 15;
    }
}

/// A trap or rune template.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TrapKind {
    pub tidx: usize,
    pub name: String,
    /// Short name shown when the trap is looked at.
    pub desc: String,
    pub text: String,
    pub glyph: char,
    pub color: Color,
    pub rarity: u32,
    pub min_depth: u32,
    pub max_num: u32,
    /// Difficulty of noticing the trap.
    pub power: Random,
    pub flags: TrapFlags,
    pub effect: Option<Effect>,
    pub effect_dice: Random,
    pub msg: String,
    pub msg_good: String,
    pub msg_bad: String,
    pub msg_xtra: String,
    /// Equipment properties that let the player avoid the trap.
    pub save_flags: ObjectFlags,
}

impl TrapKind {
    pub fn new(tidx: usize, name: impl Into<String>, desc: impl Into<String>) -> Self {
        Self {
            tidx,
            name: name.into(),
            desc: desc.into(),
            text: String::new(),
            glyph: '^',
            color: Color::White,
            rarity: 0,
            min_depth: 0,
            max_num: 0,
            power: Random::ZERO,
            flags: TrapFlags::empty(),
            effect: None,
            effect_dice: Random::ZERO,
            msg: String::new(),
            msg_good: String::new(),
            msg_bad: String::new(),
            msg_xtra: String::new(),
            save_flags: ObjectFlags::empty(),
        }
    }

    pub fn is_rune(&self) -> bool {
        self.flags.contains(TrapFlags::RUNE)
    }
}
