//! `object_base.txt`: properties shared by every kind of a tval. The table
//! is indexed by tval.

use angband_types::ObjectBase;

use crate::error::{FinishError, ParseError, ParseErrorKind, RegError};
use crate::lookup::{ObjectFlagSet, lookup_tval};
use crate::parser::{Fields, Parser};
use crate::records::{DenseTable, Records};
use crate::registry::GameContent;

use super::{FileParser, reg_version};

#[derive(Debug, Default)]
pub struct BaseState {
    default_break: i32,
    records: Records<ObjectBase>,
}

fn parse_default(s: &mut BaseState, f: &Fields<'_>) -> Result<(), ParseError> {
    let label = f.get_sym("label")?;
    match label {
        "B" => s.default_break = f.get_int("value")?,
        _ => return Err(ParseError::new(ParseErrorKind::UndefinedDirective, label)),
    }
    Ok(())
}

fn parse_name(s: &mut BaseState, f: &Fields<'_>) -> Result<(), ParseError> {
    let tval = lookup_tval(f.get_sym("tval")?)?;
    let base = ObjectBase::new(tval, f.get_str("name")?, s.default_break);
    s.records.begin(i64::from(tval as u8), base)?;
    Ok(())
}

fn parse_break(s: &mut BaseState, f: &Fields<'_>) -> Result<(), ParseError> {
    s.records.current_mut()?.break_perc = f.get_int("breakage")?;
    Ok(())
}

fn parse_flags_line(s: &mut BaseState, f: &Fields<'_>) -> Result<(), ParseError> {
    let base = s.records.current_mut()?;
    let set = ObjectFlagSet::parse(f.get_str("flags")?)?;
    set.apply(&mut base.flags, &mut base.el_info);
    base.kind_flags |= set.kind_flags;
    Ok(())
}

pub struct ObjectBaseParser;

impl FileParser for ObjectBaseParser {
    type State<'a> = BaseState;
    type Output = DenseTable<ObjectBase>;

    fn name(&self) -> &'static str {
        "object_base"
    }

    fn init<'a>(&self, _: &'a GameContent) -> Result<Parser<BaseState>, RegError> {
        let mut p = Parser::new(BaseState::default());
        reg_version(&mut p)?;
        p.reg("D sym label int value", parse_default)?;
        p.reg("N sym tval str name", parse_name)?;
        p.reg("B int breakage", parse_break)?;
        p.reg("F str flags", parse_flags_line)?;
        Ok(p)
    }

    fn finish(&self, state: BaseState) -> Result<Self::Output, FinishError> {
        DenseTable::compact(state.records.finish(), "object_base")
    }

    fn commit(&self, output: Self::Output, content: &mut GameContent) -> usize {
        let n = output.count();
        content.object_bases = output;
        n
    }

    fn cleanup(&self, content: &mut GameContent) {
        content.object_bases = DenseTable::default();
    }
}
