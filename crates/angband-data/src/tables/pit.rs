//! `pit.txt`: monster pit and nest profiles.

use angband_types::{
    Maxima, MonsterBase, MonsterFlags, MonsterSpellFlags, PIT_BASES_MAX, PitProfile,
};

use crate::error::{FinishError, ParseError, ParseErrorKind, RegError};
use crate::lookup::{lookup_monster_base, parse_flags};
use crate::parser::{Fields, Parser};
use crate::records::{DenseTable, Records};
use crate::registry::GameContent;

use super::{FileParser, check_cap, reg_version};

pub struct PitState<'a> {
    bases: &'a [MonsterBase],
    cap: usize,
    records: Records<PitProfile>,
}

fn parse_name(s: &mut PitState<'_>, f: &Fields<'_>) -> Result<(), ParseError> {
    let idx = f.get_uint("index")?;
    check_cap(s.cap, i64::from(idx))?;
    s.records
        .begin(i64::from(idx), PitProfile::new(idx as usize, f.get_str("name")?))?;
    Ok(())
}

fn parse_room(s: &mut PitState<'_>, f: &Fields<'_>) -> Result<(), ParseError> {
    s.records.current_mut()?.room_type = f.get_uint("type")?;
    Ok(())
}

fn parse_alloc(s: &mut PitState<'_>, f: &Fields<'_>) -> Result<(), ParseError> {
    let pit = s.records.current_mut()?;
    pit.rarity = f.get_uint("rarity")?;
    pit.ave = f.get_uint("level")?;
    Ok(())
}

fn parse_obj_rarity(s: &mut PitState<'_>, f: &Fields<'_>) -> Result<(), ParseError> {
    s.records.current_mut()?.obj_rarity = f.get_uint("obj-rarity")?;
    Ok(())
}

fn parse_base(s: &mut PitState<'_>, f: &Fields<'_>) -> Result<(), ParseError> {
    let name = f.get_sym("base")?;
    let pit = s.records.current_mut()?;
    if pit.bases.len() >= PIT_BASES_MAX {
        return Err(ParseError::new(
            ParseErrorKind::TooManyEntries,
            format!("more than {PIT_BASES_MAX} monster bases"),
        ));
    }
    let idx = lookup_monster_base(s.bases, name)
        .ok_or_else(|| ParseError::new(ParseErrorKind::UnrecognisedTval, name))?;
    pit.bases.push(idx);
    Ok(())
}

fn parse_flags_line(s: &mut PitState<'_>, f: &Fields<'_>) -> Result<(), ParseError> {
    let pit = s.records.current_mut()?;
    if let Some(flags) = f.opt_str("flags")? {
        pit.flags |= parse_flags::<MonsterFlags>(flags)?;
    }
    Ok(())
}

fn parse_spells(s: &mut PitState<'_>, f: &Fields<'_>) -> Result<(), ParseError> {
    let pit = s.records.current_mut()?;
    if let Some(spells) = f.opt_str("spells")? {
        pit.spell_flags |= parse_flags::<MonsterSpellFlags>(spells)?;
    }
    Ok(())
}

fn parse_forbidden_spells(s: &mut PitState<'_>, f: &Fields<'_>) -> Result<(), ParseError> {
    let pit = s.records.current_mut()?;
    if let Some(spells) = f.opt_str("spells")? {
        pit.forbidden_spell_flags |= parse_flags::<MonsterSpellFlags>(spells)?;
    }
    Ok(())
}

pub struct PitParser;

impl FileParser for PitParser {
    type State<'a> = PitState<'a>;
    type Output = DenseTable<PitProfile>;

    fn name(&self) -> &'static str {
        "pit"
    }

    fn init<'a>(&self, content: &'a GameContent) -> Result<Parser<PitState<'a>>, RegError> {
        let mut p = Parser::new(PitState {
            bases: &content.monster_bases,
            cap: content.maxima.pit_max,
            records: Records::new(),
        });
        reg_version(&mut p)?;
        p.reg("N uint index str name", parse_name)?;
        p.reg("R uint type", parse_room)?;
        p.reg("A uint rarity uint level", parse_alloc)?;
        p.reg("O uint obj-rarity", parse_obj_rarity)?;
        p.reg("T sym base", parse_base)?;
        p.reg("F ?str flags", parse_flags_line)?;
        p.reg("S ?str spells", parse_spells)?;
        p.reg("s ?str spells", parse_forbidden_spells)?;
        Ok(p)
    }

    fn finish(&self, state: PitState<'_>) -> Result<Self::Output, FinishError> {
        DenseTable::compact(state.records.finish(), "pit")
    }

    fn commit(&self, output: Self::Output, content: &mut GameContent) -> usize {
        let n = output.count();
        Maxima::cover(&mut content.maxima.pit_max, output.len());
        content.pits = output;
        n
    }

    fn cleanup(&self, content: &mut GameContent) {
        content.pits = DenseTable::default();
    }
}
