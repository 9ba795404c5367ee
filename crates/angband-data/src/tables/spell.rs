//! `spell.txt`: spells, each written in one book.

use angband_types::{Maxima, ObjectKind, Spell, Tval};

use crate::error::{FinishError, ParseError, ParseErrorKind, RegError};
use crate::lookup::lookup_kind;
use crate::parser::{Fields, Parser};
use crate::records::{DenseTable, Records};
use crate::registry::GameContent;

use super::{FileParser, append, check_cap, reg_version};

pub struct SpellState<'a> {
    kinds: &'a DenseTable<ObjectKind>,
    cap: usize,
    records: Records<Spell>,
}

/// Finished spells plus the (kind, spell) pairs that put each spell in
/// its book.
#[derive(Debug)]
pub struct SpellTables {
    pub spells: DenseTable<Spell>,
    pub books: Vec<(usize, usize)>,
}

fn parse_name(s: &mut SpellState<'_>, f: &Fields<'_>) -> Result<(), ParseError> {
    let idx = f.get_uint("index")?;
    check_cap(s.cap, i64::from(idx))?;
    s.records
        .begin(i64::from(idx), Spell::new(idx as usize, f.get_str("name")?))?;
    Ok(())
}

fn parse_info(s: &mut SpellState<'_>, f: &Fields<'_>) -> Result<(), ParseError> {
    let spell = s.records.current_mut()?;
    let raw = f.get_uint("tval")?;
    let (tval, realm) = u8::try_from(raw)
        .ok()
        .and_then(Tval::from_repr)
        .and_then(|t| Some((t, Spell::realm_of(t)?)))
        .ok_or_else(|| ParseError::new(ParseErrorKind::UnrecognisedTval, raw.to_string()))?;
    let sval = f.get_uint("sval")?;
    let sval = i32::try_from(sval)
        .map_err(|_| ParseError::new(ParseErrorKind::OutOfBounds, format!("sval {sval}")))?;
    spell.tval = Some(tval);
    spell.realm = realm;
    spell.sval = sval;
    spell.snum = f.get_uint("snum")?;
    Ok(())
}

fn parse_desc(s: &mut SpellState<'_>, f: &Fields<'_>) -> Result<(), ParseError> {
    append(&mut s.records.current_mut()?.text, f.get_str("desc")?);
    Ok(())
}

pub struct SpellParser;

impl FileParser for SpellParser {
    type State<'a> = SpellState<'a>;
    type Output = SpellTables;

    fn name(&self) -> &'static str {
        "spell"
    }

    fn init<'a>(&self, content: &'a GameContent) -> Result<Parser<SpellState<'a>>, RegError> {
        let mut p = Parser::new(SpellState {
            kinds: &content.kinds,
            cap: content.maxima.s_max,
            records: Records::new(),
        });
        reg_version(&mut p)?;
        p.reg("N uint index str name", parse_name)?;
        p.reg("I uint tval uint sval uint snum", parse_info)?;
        p.reg("D str desc", parse_desc)?;
        Ok(p)
    }

    /// Number spells within their realm in index order and find each
    /// one's book.
    fn finish(&self, state: SpellState<'_>) -> Result<SpellTables, FinishError> {
        let mut spells = DenseTable::compact(state.records.finish(), "spell")?;
        let mut next_index = [0usize; 2];
        let mut books = Vec::new();
        for (sidx, spell) in spells.iter_mut() {
            let Some(tval) = spell.tval else {
                continue;
            };
            let counter = &mut next_index[spell.realm as usize];
            spell.spell_index = *counter;
            *counter += 1;
            let kidx = lookup_kind(state.kinds, tval, spell.sval).ok_or(
                FinishError::Unresolved {
                    what: "spell",
                    id: sidx,
                    target: "book",
                    reference: i64::from(spell.sval),
                },
            )?;
            books.push((kidx, sidx));
        }
        log::debug!("linked {} spells to books", books.len());
        Ok(SpellTables { spells, books })
    }

    fn commit(&self, output: SpellTables, content: &mut GameContent) -> usize {
        for (kidx, sidx) in output.books {
            if let Some(kind) = content.kinds.get_mut(kidx) {
                kind.spells.push(sidx);
            }
        }
        Maxima::cover(&mut content.maxima.s_max, output.spells.len());
        content.spells = output.spells;
        content.spells.count()
    }

    fn cleanup(&self, content: &mut GameContent) {
        for (_, kind) in content.kinds.iter_mut() {
            kind.spells.clear();
        }
        content.spells = DenseTable::default();
    }
}
