use bitflags::bitflags;
use serde::Serialize;

bitflags! {
    /// Monster race and monster base flags (the `F:` lines).
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
    pub struct MonsterFlags: u128 {
        const UNIQUE        = 1 << 0;
        const QUESTOR       = 1 << 1;
        const MALE          = 1 << 2;
        const FEMALE        = 1 << 3;
        const CHAR_CLEAR    = 1 << 4;
        const ATTR_RAND     = 1 << 5;
        const ATTR_CLEAR    = 1 << 6;
        const ATTR_MULTI    = 1 << 7;
        const FORCE_DEPTH   = 1 << 8;
        const FORCE_MAXHP   = 1 << 9;
        const FORCE_SLEEP   = 1 << 10;
        const FORCE_EXTRA   = 1 << 11;
        const FRIEND        = 1 << 12;
        const FRIENDS       = 1 << 13;
        const ESCORT        = 1 << 14;
        const ESCORTS       = 1 << 15;
        const NEVER_BLOW    = 1 << 16;
        const NEVER_MOVE    = 1 << 17;
        const RAND_25       = 1 << 18;
        const RAND_50       = 1 << 19;
        const ONLY_GOLD     = 1 << 20;
        const ONLY_ITEM     = 1 << 21;
        const DROP_40       = 1 << 22;
        const DROP_60       = 1 << 23;
        const DROP_1        = 1 << 24;
        const DROP_2        = 1 << 25;
        const DROP_3        = 1 << 26;
        const DROP_4        = 1 << 27;
        const DROP_GOOD     = 1 << 28;
        const DROP_GREAT    = 1 << 29;
        const DROP_20       = 1 << 30;
        const DROP_CORPSE   = 1 << 31;
        const DROP_SKELETON = 1 << 32;
        const STUPID        = 1 << 33;
        const SMART         = 1 << 34;
        const HAS_LIGHT     = 1 << 35;
        const INVISIBLE     = 1 << 36;
        const COLD_BLOOD    = 1 << 37;
        const EMPTY_MIND    = 1 << 38;
        const WEIRD_MIND    = 1 << 39;
        const MULTIPLY      = 1 << 40;
        const REGENERATE    = 1 << 41;
        const POWERFUL      = 1 << 42;
        const OPEN_DOOR     = 1 << 43;
        const BASH_DOOR     = 1 << 44;
        const PASS_WALL     = 1 << 45;
        const KILL_WALL     = 1 << 46;
        const MOVE_BODY     = 1 << 47;
        const KILL_BODY     = 1 << 48;
        const TAKE_ITEM     = 1 << 49;
        const KILL_ITEM     = 1 << 50;
        const ORC           = 1 << 51;
        const TROLL         = 1 << 52;
        const GIANT         = 1 << 53;
        const DRAGON        = 1 << 54;
        const DEMON         = 1 << 55;
        const UNDEAD        = 1 << 56;
        const EVIL          = 1 << 57;
        const ANIMAL        = 1 << 58;
        const METAL         = 1 << 59;
        const NONLIVING     = 1 << 60;
        const HURT_LIGHT    = 1 << 61;
        const HURT_ROCK     = 1 << 62;
        const HURT_FIRE     = 1 << 63;
        const HURT_COLD     = 1 << 64;
        const IM_ACID       = 1 << 65;
        const IM_ELEC       = 1 << 66;
        const IM_FIRE       = 1 << 67;
        const IM_COLD       = 1 << 68;
        const IM_POIS       = 1 << 69;
        const IM_WATER      = 1 << 70;
        const IM_NETHER     = 1 << 71;
        const IM_PLASMA     = 1 << 72;
        const IM_NEXUS      = 1 << 73;
        const IM_DISEN      = 1 << 74;
        const NO_FEAR       = 1 << 75;
        const NO_STUN       = 1 << 76;
        const NO_CONF       = 1 << 77;
        const NO_SLEEP      = 1 << 78;
    }
}

bitflags! {
    /// Innate and magical monster spells (the `S:` lines).
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
    pub struct MonsterSpellFlags: u128 {
        const SHRIEK        = 1 << 0;
        const ARROW_1       = 1 << 1;
        const ARROW_2       = 1 << 2;
        const ARROW_3       = 1 << 3;
        const ARROW_4       = 1 << 4;
        const BR_ACID       = 1 << 5;
        const BR_ELEC       = 1 << 6;
        const BR_FIRE       = 1 << 7;
        const BR_COLD       = 1 << 8;
        const BR_POIS       = 1 << 9;
        const BR_NETH       = 1 << 10;
        const BR_LIGHT      = 1 << 11;
        const BR_DARK       = 1 << 12;
        const BR_CONF       = 1 << 13;
        const BR_SOUN       = 1 << 14;
        const BR_CHAO       = 1 << 15;
        const BR_DISE       = 1 << 16;
        const BR_NEXU       = 1 << 17;
        const BR_TIME       = 1 << 18;
        const BR_INER       = 1 << 19;
        const BR_GRAV       = 1 << 20;
        const BR_SHAR       = 1 << 21;
        const BR_PLAS       = 1 << 22;
        const BR_WALL       = 1 << 23;
        const BR_MANA       = 1 << 24;
        const BOULDER       = 1 << 25;
        const BA_ACID       = 1 << 26;
        const BA_ELEC       = 1 << 27;
        const BA_FIRE       = 1 << 28;
        const BA_COLD       = 1 << 29;
        const BA_POIS       = 1 << 30;
        const BA_NETH       = 1 << 31;
        const BA_WATE       = 1 << 32;
        const BA_MANA       = 1 << 33;
        const BA_DARK       = 1 << 34;
        const DRAIN_MANA    = 1 << 35;
        const MIND_BLAST    = 1 << 36;
        const BRAIN_SMASH   = 1 << 37;
        const CAUSE_1       = 1 << 38;
        const CAUSE_2       = 1 << 39;
        const CAUSE_3       = 1 << 40;
        const CAUSE_4       = 1 << 41;
        const BO_ACID       = 1 << 42;
        const BO_ELEC       = 1 << 43;
        const BO_FIRE       = 1 << 44;
        const BO_COLD       = 1 << 45;
        const BO_POIS       = 1 << 46;
        const BO_NETH       = 1 << 47;
        const BO_WATE       = 1 << 48;
        const BO_MANA       = 1 << 49;
        const BO_PLAS       = 1 << 50;
        const BO_ICEE       = 1 << 51;
        const MISSILE       = 1 << 52;
        const SCARE         = 1 << 53;
        const BLIND         = 1 << 54;
        const CONF          = 1 << 55;
        const SLOW          = 1 << 56;
        const HOLD          = 1 << 57;
        const HASTE         = 1 << 58;
        const HEAL          = 1 << 59;
        const BLINK         = 1 << 60;
        const TPORT         = 1 << 61;
        const TELE_TO       = 1 << 62;
        const TELE_LEVEL    = 1 << 63;
        const DARKNESS      = 1 << 64;
        const TRAPS         = 1 << 65;
        const FORGET        = 1 << 66;
        const S_KIN         = 1 << 67;
        const S_MONSTER     = 1 << 68;
        const S_MONSTERS    = 1 << 69;
        const S_ANIMAL      = 1 << 70;
        const S_SPIDER      = 1 << 71;
        const S_HOUND       = 1 << 72;
        const S_HYDRA       = 1 << 73;
        const S_AINU        = 1 << 74;
        const S_DEMON       = 1 << 75;
        const S_UNDEAD      = 1 << 76;
        const S_DRAGON      = 1 << 77;
        const S_HI_DEMON    = 1 << 78;
        const S_HI_UNDEAD   = 1 << 79;
        const S_HI_DRAGON   = 1 << 80;
        const S_WRAITH      = 1 << 81;
        const S_UNIQUE      = 1 << 82;
    }
}

impl MonsterSpellFlags {
    /// Spells that are breaths rather than cast.
    pub const BREATHS: Self = Self::BR_ACID
        .union(Self::BR_ELEC)
        .union(Self::BR_FIRE)
        .union(Self::BR_COLD)
        .union(Self::BR_POIS);
}
