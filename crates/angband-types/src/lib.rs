pub mod attack;
pub mod color;
pub mod effect;
pub mod element;
pub mod flavor;
pub mod maxima;
pub mod monster;
pub mod monster_flags;
pub mod names;
pub mod object;
pub mod object_flags;
pub mod player;
pub mod random;
pub mod spell;
pub mod stat;
pub mod terrain;
pub mod trap;
pub mod tval;
pub mod vault;

pub use attack::{BlowEffect, BlowMethod};
pub use color::Color;
pub use effect::Effect;
pub use element::{Element, ElementFlags, ElementInfo};
pub use flavor::Flavor;
pub use maxima::Maxima;
pub use monster::{
    Blow, MONSTER_BLOW_MAX, MonsterBase, MonsterDrop, MonsterRace, PAIN_MESSAGES_MAX,
    PIT_BASES_MAX, PainMessages, PitProfile,
};
pub use monster_flags::{MonsterFlags, MonsterSpellFlags};
pub use names::NameSection;
pub use object::{
    Allocation, Artifact, Brand, EGO_TVALS_MAX, EgoItem, EgoTvalRange, ElementTable, ModifierTable,
    NO_MINIMUM, ObjectBase, ObjectKind, Slay,
};
pub use object_flags::{KindFlags, ObjectFlags, ObjectModifier};
pub use player::{
    BODY_SLOTS_MAX, BodyLayout, BodySlot, ClassSpell, HistoryChart, HistoryEntry, MagicInfo,
    PY_MAX_LEVEL, PY_MAX_SPELLS, PY_MAX_TITLES, PlayerClass, PlayerFlags, PlayerRace, START_ITEM_MAX,
    SkillTable, SlotType, StartItem, StatAdjust,
};
pub use random::Random;
pub use spell::Spell;
pub use stat::{Skill, Stat};
pub use terrain::{Feature, TerrainFlags};
pub use trap::{TrapFlags, TrapKind};
pub use tval::Tval;
pub use vault::{VAULT_GREATER, VAULT_LESSER, Vault};
