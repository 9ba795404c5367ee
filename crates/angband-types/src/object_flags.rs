use bitflags::bitflags;
use serde::Serialize;
use strum::{EnumCount, EnumIter, EnumString, FromRepr, IntoStaticStr};

bitflags! {
    /// Object property flags shared by bases, kinds, egos, artifacts and
    /// player races.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
    pub struct ObjectFlags: u64 {
        const SUST_STR     = 1 << 0;
        const SUST_INT     = 1 << 1;
        const SUST_WIS     = 1 << 2;
        const SUST_DEX     = 1 << 3;
        const SUST_CON     = 1 << 4;
        const SUST_CHR     = 1 << 5;
        const PROT_FEAR    = 1 << 6;
        const PROT_BLIND   = 1 << 7;
        const PROT_CONF    = 1 << 8;
        const PROT_STUN    = 1 << 9;
        const SLOW_DIGEST  = 1 << 10;
        const FEATHER      = 1 << 11;
        const REGEN        = 1 << 12;
        const TELEPATHY    = 1 << 13;
        const SEE_INVIS    = 1 << 14;
        const FREE_ACT     = 1 << 15;
        const HOLD_LIFE    = 1 << 16;
        const IMPACT       = 1 << 17;
        const BLESSED      = 1 << 18;
        const BURNS_OUT    = 1 << 19;
        const TAKES_FUEL   = 1 << 20;
        const NO_FUEL      = 1 << 21;
        const IMPAIR_HP    = 1 << 22;
        const IMPAIR_MANA  = 1 << 23;
        const AFRAID       = 1 << 24;
        const NO_TELEPORT  = 1 << 25;
        const AGGRAVATE    = 1 << 26;
        const DRAIN_EXP    = 1 << 27;
        const TELEPORT     = 1 << 28;
        const LIGHT_CURSE  = 1 << 29;
        const HEAVY_CURSE  = 1 << 30;
        const PERMA_CURSE  = 1 << 31;
        const STICKY       = 1 << 32;
        const FRAGILE      = 1 << 33;
        const LIGHT_2      = 1 << 34;
        const LIGHT_3      = 1 << 35;
        const DIG_1        = 1 << 36;
        const DIG_2        = 1 << 37;
        const DIG_3        = 1 << 38;
        const EXPLODE      = 1 << 39;
        const TRAP_IMMUNE  = 1 << 40;
        const THROWING     = 1 << 41;
        const SHOW_MODS    = 1 << 42;
        const HIDE_TYPE    = 1 << 43;
    }
}

bitflags! {
    /// Flags that describe how a kind is generated and displayed rather than
    /// what the object does.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
    pub struct KindFlags: u16 {
        const RAND_HI_RES   = 1 << 0;
        const RAND_SUSTAIN  = 1 << 1;
        const RAND_POWER    = 1 << 2;
        const INSTA_ART     = 1 << 3;
        const QUEST_ART     = 1 << 4;
        const EASY_KNOW     = 1 << 5;
        const GOOD          = 1 << 6;
        const SHOW_DICE     = 1 << 7;
        const SHOW_MULT     = 1 << 8;
        const SHOOTS_SHOTS  = 1 << 9;
        const SHOOTS_ARROWS = 1 << 10;
        const SHOOTS_BOLTS  = 1 << 11;
        const RAND_BASE_RES = 1 << 12;
        const RAND_RES_POWER = 1 << 13;
    }
}

/// Numeric object modifiers set through `values` lines.
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
pub enum ObjectModifier {
    Str = 0,
    Int = 1,
    Wis = 2,
    Dex = 3,
    Con = 4,
    Chr = 5,
    Stealth = 6,
    Search = 7,
    Infra = 8,
    Tunnel = 9,
    Speed = 10,
    Blows = 11,
    Shots = 12,
    Might = 13,
    Light = 14,
}
