use serde::Serialize;

use crate::tval::Tval;

/// A spell found in a magic or prayer book.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Spell {
    pub sidx: usize,
    pub name: String,
    pub text: String,
    /// Book the spell is written in.
    pub tval: Option<Tval>,
    pub sval: i32,
    /// Position within its book.
    pub snum: u32,
    /// 0 for arcane, 1 for divine.
    pub realm: u32,
    /// Index within its realm.
    pub spell_index: usize,
}

impl Spell {
    pub fn new(sidx: usize, name: impl Into<String>) -> Self {
        Self {
            sidx,
            name: name.into(),
            text: String::new(),
            tval: None,
            sval: 0,
            snum: 0,
            realm: 0,
            spell_index: 0,
        }
    }

    /// Realm of a book tval.
    pub fn realm_of(tval: Tval) -> Option<u32> {
        match tval {
            Tval::MagicBook => Some(0),
            Tval::PrayerBook => Some(1),
            _ => None,
        }
    }
}
