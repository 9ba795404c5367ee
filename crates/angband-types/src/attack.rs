use serde::Serialize;
use strum::{EnumCount, EnumIter, EnumString, FromRepr, IntoStaticStr};

/// How a monster delivers a melee blow.
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
pub enum BlowMethod {
    Hit = 1,
    Touch = 2,
    Punch = 3,
    Kick = 4,
    Claw = 5,
    Bite = 6,
    Sting = 7,
    Butt = 8,
    Crush = 9,
    Engulf = 10,
    Crawl = 11,
    Drool = 12,
    Spit = 13,
    Gaze = 14,
    Wail = 15,
    Spore = 16,
    Beg = 17,
    Insult = 18,
    Moan = 19,
}

/// What a monster melee blow does beyond raw damage.
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
pub enum BlowEffect {
    Hurt = 1,
    Poison = 2,
    UnBonus = 3,
    UnPower = 4,
    EatGold = 5,
    EatItem = 6,
    EatFood = 7,
    EatLight = 8,
    Acid = 9,
    Elec = 10,
    Fire = 11,
    Cold = 12,
    Blind = 13,
    Confuse = 14,
    Terrify = 15,
    Paralyze = 16,
    LoseStr = 17,
    LoseInt = 18,
    LoseWis = 19,
    LoseDex = 20,
    LoseCon = 21,
    LoseChr = 22,
    LoseAll = 23,
    Shatter = 24,
    #[strum(serialize = "EXP_10")]
    Exp10 = 25,
    #[strum(serialize = "EXP_20")]
    Exp20 = 26,
    #[strum(serialize = "EXP_40")]
    Exp40 = 27,
    #[strum(serialize = "EXP_80")]
    Exp80 = 28,
    Hallu = 29,
}
