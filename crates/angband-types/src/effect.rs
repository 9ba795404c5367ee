use serde::Serialize;
use strum::{EnumCount, EnumIter, EnumString, FromRepr, IntoStaticStr};

/// Effect handlers that objects, traps and terrain can name. Codes start at
/// 1; code 0 is "no effect" and is represented by `Option::None`.
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
pub enum Effect {
    Random = 1,
    Damage = 2,
    HealHp = 3,
    MonHealHp = 4,
    Nourish = 5,
    Crunch = 6,
    Cure = 7,
    TimedSet = 8,
    TimedInc = 9,
    TimedIncNoRes = 10,
    MonTimedInc = 11,
    TimedDec = 12,
    SetNourish = 13,
    Confusing = 14,
    Rune = 15,
    RestoreStat = 16,
    DrainStat = 17,
    LoseRandomStat = 18,
    GainStat = 19,
    RestoreExp = 20,
    GainExp = 21,
    LoseExp = 22,
    DrainMana = 23,
    RestoreMana = 24,
    RemoveCurse = 25,
    RemoveAllCurse = 26,
    Recall = 27,
    DeepDescent = 28,
    AlterReality = 29,
    MapArea = 30,
    DetectDoors = 31,
    DetectStairs = 32,
    DetectGold = 33,
    SenseObjects = 34,
    DetectObjects = 35,
    DetectVisibleMonsters = 36,
    DetectInvisibleMonsters = 37,
    DetectEvil = 38,
    CreateStairs = 39,
    Disenchant = 40,
    Enchant = 41,
    Identify = 42,
    IdentifyPack = 43,
    Recharge = 44,
    ProjectLos = 45,
    ProjectLosAware = 46,
    Acquire = 47,
    Aggravate = 48,
    Summon = 49,
    Banish = 50,
    MassBanish = 51,
    Probe = 52,
    ThrustAway = 53,
    Teleport = 54,
    TeleportTo = 55,
    TeleportLevel = 56,
    Destruction = 57,
    Earthquake = 58,
    Enlightenment = 59,
    LightArea = 60,
    DarkenArea = 61,
    Ball = 62,
    Breath = 63,
    Swarm = 64,
    Star = 65,
    StarBall = 66,
    Bolt = 67,
    Beam = 68,
    BoltOrBeam = 69,
    Line = 70,
    Alter = 71,
    BoltStatus = 72,
    BoltStatusDam = 73,
    BoltAware = 74,
    Touch = 75,
    TouchAware = 76,
    CurseArmor = 77,
    CurseWeapon = 78,
    BrandWeapon = 79,
    BrandAmmo = 80,
    BrandBolts = 81,
    Bizarre = 82,
    Wonder = 83,
    TrapDoor = 84,
    TrapPit = 85,
    TrapPitSpikes = 86,
    TrapPitPoison = 87,
    TrapRuneSummon = 88,
    TrapRuneTeleport = 89,
    TrapSpotFire = 90,
    TrapSpotAcid = 91,
    TrapDartSlow = 92,
    TrapDartLoseStr = 93,
    TrapDartLoseDex = 94,
    TrapDartLoseCon = 95,
    TrapGasBlind = 96,
    TrapGasConfuse = 97,
    TrapGasPoison = 98,
    TrapGasSleep = 99,
}

impl Effect {
    pub fn name(self) -> &'static str {
        self.into()
    }
}
