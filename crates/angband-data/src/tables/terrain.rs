//! `terrain.txt`: dungeon features.

use angband_types::{Feature, Maxima, TerrainFlags};

use crate::error::{FinishError, ParseError, RegError};
use crate::lookup::{lookup_color, lookup_effect, parse_flags};
use crate::parser::{Fields, Parser};
use crate::records::{DenseTable, Records};
use crate::registry::GameContent;

use super::{FileParser, check_cap, reg_version};

#[derive(Debug, Default)]
pub struct TerrainState {
    cap: usize,
    records: Records<Feature>,
}

fn parse_name(s: &mut TerrainState, f: &Fields<'_>) -> Result<(), ParseError> {
    let idx = i64::from(f.get_uint("index")?);
    check_cap(s.cap, idx)?;
    s.records
        .begin(idx, Feature::new(idx as usize, f.get_str("name")?))?;
    Ok(())
}

fn parse_graphics(s: &mut TerrainState, f: &Fields<'_>) -> Result<(), ParseError> {
    let feat = s.records.current_mut()?;
    feat.glyph = f.get_char("glyph")?;
    feat.color = lookup_color(f.get_sym("color")?)?;
    Ok(())
}

fn parse_mimic(s: &mut TerrainState, f: &Fields<'_>) -> Result<(), ParseError> {
    s.records.current_mut()?.mimic = f.get_uint("index")? as usize;
    Ok(())
}

fn parse_priority(s: &mut TerrainState, f: &Fields<'_>) -> Result<(), ParseError> {
    s.records.current_mut()?.priority = f.get_uint("priority")?;
    Ok(())
}

fn parse_flags_line(s: &mut TerrainState, f: &Fields<'_>) -> Result<(), ParseError> {
    let feat = s.records.current_mut()?;
    if let Some(flags) = f.opt_str("flags")? {
        feat.flags |= parse_flags::<TerrainFlags>(flags)?;
    }
    Ok(())
}

fn parse_info(s: &mut TerrainState, f: &Fields<'_>) -> Result<(), ParseError> {
    let feat = s.records.current_mut()?;
    feat.locked = f.get_int("locked")?;
    feat.jammed = f.get_int("jammed")?;
    feat.shopnum = f.get_int("shopnum")?;
    feat.dig = f.get_int("dig")?;
    Ok(())
}

fn parse_effect(s: &mut TerrainState, f: &Fields<'_>) -> Result<(), ParseError> {
    let feat = s.records.current_mut()?;
    feat.effect = Some(lookup_effect(f.get_str("effect")?)?);
    Ok(())
}

pub struct TerrainParser;

impl FileParser for TerrainParser {
    type State<'a> = TerrainState;
    type Output = DenseTable<Feature>;

    fn name(&self) -> &'static str {
        "terrain"
    }

    fn init<'a>(&self, content: &'a GameContent) -> Result<Parser<TerrainState>, RegError> {
        let mut p = Parser::new(TerrainState {
            cap: content.maxima.f_max,
            records: Records::new(),
        });
        reg_version(&mut p)?;
        p.reg("N uint index str name", parse_name)?;
        p.reg("G char glyph sym color", parse_graphics)?;
        p.reg("M uint index", parse_mimic)?;
        p.reg("P uint priority", parse_priority)?;
        p.reg("F ?str flags", parse_flags_line)?;
        p.reg("X int locked int jammed int shopnum int dig", parse_info)?;
        p.reg("E str effect", parse_effect)?;
        Ok(p)
    }

    fn finish(&self, state: TerrainState) -> Result<Self::Output, FinishError> {
        DenseTable::compact(state.records.finish(), "terrain")
    }

    fn commit(&self, output: Self::Output, content: &mut GameContent) -> usize {
        let n = output.count();
        Maxima::cover(&mut content.maxima.f_max, output.len());
        content.features = output;
        n
    }

    fn cleanup(&self, content: &mut GameContent) {
        content.features = DenseTable::default();
    }
}
