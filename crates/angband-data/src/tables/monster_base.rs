//! `monster_base.txt`: monster families.

use angband_types::{MonsterBase, MonsterFlags, MonsterSpellFlags, PainMessages};

use crate::error::{FinishError, ParseError, ParseErrorKind, RegError};
use crate::lookup::parse_flags;
use crate::parser::{Fields, Parser};
use crate::records::{DenseTable, Records};
use crate::registry::GameContent;

use super::{FileParser, append, reg_version};

pub struct MonsterBaseState<'a> {
    pain: &'a DenseTable<PainMessages>,
    records: Records<MonsterBase>,
}

fn parse_name(s: &mut MonsterBaseState<'_>, f: &Fields<'_>) -> Result<(), ParseError> {
    s.records.push(MonsterBase::new(f.get_str("name")?));
    Ok(())
}

fn parse_glyph(s: &mut MonsterBaseState<'_>, f: &Fields<'_>) -> Result<(), ParseError> {
    s.records.current_mut()?.glyph = f.get_char("glyph")?;
    Ok(())
}

fn parse_pain(s: &mut MonsterBaseState<'_>, f: &Fields<'_>) -> Result<(), ParseError> {
    let pain = f.get_uint("pain")? as usize;
    let base = s.records.current_mut()?;
    if s.pain.get(pain).is_none() {
        return Err(ParseError::new(
            ParseErrorKind::OutOfBounds,
            format!("no pain set {pain}"),
        ));
    }
    base.pain = pain;
    Ok(())
}

fn parse_flags_line(s: &mut MonsterBaseState<'_>, f: &Fields<'_>) -> Result<(), ParseError> {
    let base = s.records.current_mut()?;
    if let Some(flags) = f.opt_str("flags")? {
        base.flags |= parse_flags::<MonsterFlags>(flags)?;
    }
    Ok(())
}

fn parse_spells(s: &mut MonsterBaseState<'_>, f: &Fields<'_>) -> Result<(), ParseError> {
    let base = s.records.current_mut()?;
    if let Some(spells) = f.opt_str("spells")? {
        base.spell_flags |= parse_flags::<MonsterSpellFlags>(spells)?;
    }
    Ok(())
}

fn parse_desc(s: &mut MonsterBaseState<'_>, f: &Fields<'_>) -> Result<(), ParseError> {
    append(&mut s.records.current_mut()?.text, f.get_str("desc")?);
    Ok(())
}

pub struct MonsterBaseParser;

impl FileParser for MonsterBaseParser {
    type State<'a> = MonsterBaseState<'a>;
    type Output = Vec<MonsterBase>;

    fn name(&self) -> &'static str {
        "monster_base"
    }

    fn init<'a>(&self, content: &'a GameContent) -> Result<Parser<MonsterBaseState<'a>>, RegError> {
        let mut p = Parser::new(MonsterBaseState {
            pain: &content.pain,
            records: Records::new(),
        });
        reg_version(&mut p)?;
        p.reg("N str name", parse_name)?;
        p.reg("G char glyph", parse_glyph)?;
        p.reg("M uint pain", parse_pain)?;
        p.reg("F ?str flags", parse_flags_line)?;
        p.reg("S ?str spells", parse_spells)?;
        p.reg("D str desc", parse_desc)?;
        Ok(p)
    }

    fn finish(&self, state: MonsterBaseState<'_>) -> Result<Vec<MonsterBase>, FinishError> {
        if state.records.is_empty() {
            return Err(FinishError::Empty {
                what: "monster_base",
            });
        }
        Ok(state.records.into_vec())
    }

    fn commit(&self, output: Vec<MonsterBase>, content: &mut GameContent) -> usize {
        content.monster_bases = output;
        content.monster_bases.len()
    }

    fn cleanup(&self, content: &mut GameContent) {
        content.monster_bases.clear();
    }
}
