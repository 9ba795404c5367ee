use serde::Serialize;
use strum::EnumCount;

use crate::color::Color;
use crate::effect::Effect;
use crate::element::{Element, ElementInfo};
use crate::object_flags::{KindFlags, ObjectFlags, ObjectModifier};
use crate::random::Random;
use crate::tval::Tval;

pub type ElementTable = [ElementInfo; Element::COUNT];
pub type ModifierTable = [Random; ObjectModifier::COUNT];

/// Minimum combat bonus value meaning "no minimum".
pub const NO_MINIMUM: i32 = 255;

/// Generation depth range and chance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct Allocation {
    pub prob: i32,
    pub min: i32,
    pub max: i32,
}

/// Extra damage against monsters of a given base.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Slay {
    pub base: String,
    pub multiplier: i32,
}

/// Extra elemental damage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Brand {
    pub element: Element,
    pub multiplier: i32,
}

/// Properties shared by every kind of a tval.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ObjectBase {
    pub tval: Tval,
    pub name: String,
    pub break_perc: i32,
    pub flags: ObjectFlags,
    pub kind_flags: KindFlags,
    pub el_info: ElementTable,
    /// Highest sval of any kind with this tval.
    pub num_svals: i32,
}

impl ObjectBase {
    pub fn new(tval: Tval, name: impl Into<String>, break_perc: i32) -> Self {
        Self {
            tval,
            name: name.into(),
            break_perc,
            flags: ObjectFlags::empty(),
            kind_flags: KindFlags::empty(),
            el_info: [ElementInfo::NONE; Element::COUNT],
            num_svals: 0,
        }
    }
}

/// An object kind: the template for every object with one tval/sval.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ObjectKind {
    pub kidx: usize,
    pub name: String,
    pub text: String,
    pub tval: Option<Tval>,
    pub sval: i32,
    pub glyph: char,
    pub color: Color,
    pub level: i32,
    pub weight: i32,
    pub cost: i32,
    pub alloc: Allocation,
    pub ac: i32,
    pub dd: i32,
    pub ds: i32,
    pub to_h: Random,
    pub to_d: Random,
    pub to_a: Random,
    pub charge: Random,
    pub gen_mult_prob: i32,
    pub stack_size: Random,
    pub pval: Random,
    pub flags: ObjectFlags,
    pub kind_flags: KindFlags,
    pub el_info: ElementTable,
    pub modifiers: ModifierTable,
    pub brands: Vec<Brand>,
    pub slays: Vec<Slay>,
    pub effect: Option<Effect>,
    pub time: Random,
    /// Spells contained in this kind, when it is a book.
    pub spells: Vec<usize>,
}

impl ObjectKind {
    pub fn new(kidx: usize, name: impl Into<String>) -> Self {
        Self {
            kidx,
            name: name.into(),
            text: String::new(),
            tval: None,
            sval: 0,
            glyph: ' ',
            color: Color::White,
            level: 0,
            weight: 0,
            cost: 0,
            alloc: Allocation::default(),
            ac: 0,
            dd: 0,
            ds: 0,
            to_h: Random::ZERO,
            to_d: Random::ZERO,
            to_a: Random::ZERO,
            charge: Random::ZERO,
            gen_mult_prob: 0,
            stack_size: Random::ZERO,
            pval: Random::ZERO,
            flags: ObjectFlags::empty(),
            kind_flags: KindFlags::empty(),
            el_info: [ElementInfo::NONE; Element::COUNT],
            modifiers: [Random::ZERO; ObjectModifier::COUNT],
            brands: Vec::new(),
            slays: Vec::new(),
            effect: None,
            time: Random::ZERO,
            spells: Vec::new(),
        }
    }

    /// The name without its leading `& ` article marker.
    pub fn plain_name(&self) -> &str {
        self.name.strip_prefix("& ").unwrap_or(&self.name)
    }

    pub fn is(&self, tval: Tval, sval: i32) -> bool {
        self.tval == Some(tval) && self.sval == sval
    }
}

/// A range of svals of one tval an ego item may appear on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct EgoTvalRange {
    pub tval: Tval,
    pub min_sval: i32,
    pub max_sval: i32,
}

/// Maximum tval ranges per ego item.
pub const EGO_TVALS_MAX: usize = 3;

/// A named modifier template applied on top of a base kind.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EgoItem {
    pub eidx: usize,
    pub name: String,
    pub text: String,
    pub level: i32,
    pub rarity: i32,
    pub rating: i32,
    pub cost: i32,
    pub alloc: Allocation,
    pub tvals: Vec<EgoTvalRange>,
    /// Kinds this ego can be generated on.
    pub poss_items: Vec<usize>,
    pub to_h: Random,
    pub to_d: Random,
    pub to_a: Random,
    pub min_to_h: i32,
    pub min_to_d: i32,
    pub min_to_a: i32,
    pub xtra: i32,
    pub flags: ObjectFlags,
    pub kind_flags: KindFlags,
    pub el_info: ElementTable,
    pub modifiers: ModifierTable,
    pub brands: Vec<Brand>,
    pub slays: Vec<Slay>,
}

impl EgoItem {
    pub fn new(eidx: usize, name: impl Into<String>) -> Self {
        Self {
            eidx,
            name: name.into(),
            text: String::new(),
            level: 0,
            rarity: 0,
            rating: 0,
            cost: 0,
            alloc: Allocation::default(),
            tvals: Vec::new(),
            poss_items: Vec::new(),
            to_h: Random::ZERO,
            to_d: Random::ZERO,
            to_a: Random::ZERO,
            min_to_h: NO_MINIMUM,
            min_to_d: NO_MINIMUM,
            min_to_a: NO_MINIMUM,
            xtra: 0,
            flags: ObjectFlags::empty(),
            kind_flags: KindFlags::empty(),
            el_info: [ElementInfo::NONE; Element::COUNT],
            modifiers: [Random::ZERO; ObjectModifier::COUNT],
            brands: Vec::new(),
            slays: Vec::new(),
        }
    }
}

/// A unique, individually named object.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Artifact {
    pub aidx: usize,
    pub name: String,
    pub text: String,
    pub tval: Option<Tval>,
    pub sval: i32,
    /// Kind the artifact is made from.
    pub kind: Option<usize>,
    /// Display override for special artifacts.
    pub glyph: Option<char>,
    pub color: Option<Color>,
    pub level: i32,
    pub rarity: i32,
    pub weight: i32,
    pub cost: i32,
    pub alloc: Allocation,
    pub ac: i32,
    pub dd: i32,
    pub ds: i32,
    pub to_h: i32,
    pub to_d: i32,
    pub to_a: i32,
    pub flags: ObjectFlags,
    pub el_info: ElementTable,
    pub modifiers: [i32; ObjectModifier::COUNT],
    pub brands: Vec<Brand>,
    pub slays: Vec<Slay>,
    pub effect: Option<Effect>,
    pub time: Random,
    pub effect_msg: String,
}

impl Artifact {
    pub fn new(aidx: usize, name: impl Into<String>) -> Self {
        Self {
            aidx,
            name: name.into(),
            text: String::new(),
            tval: None,
            sval: 0,
            kind: None,
            glyph: None,
            color: None,
            level: 0,
            rarity: 0,
            weight: 0,
            cost: 0,
            alloc: Allocation::default(),
            ac: 0,
            dd: 0,
            ds: 0,
            to_h: 0,
            to_d: 0,
            to_a: 0,
            flags: ObjectFlags::empty(),
            el_info: [ElementInfo::NONE; Element::COUNT],
            modifiers: [0; ObjectModifier::COUNT],
            brands: Vec::new(),
            slays: Vec::new(),
            effect: None,
            time: Random::ZERO,
            effect_msg: String::new(),
        }
    }
}
