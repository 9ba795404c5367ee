//! `flavor.txt`: unidentified appearances.

use angband_types::{Flavor, ObjectKind};

use crate::error::{FinishError, ParseError, ParseErrorKind, RegError};
use crate::lookup::{lookup_color, lookup_sval, lookup_tval};
use crate::parser::{Fields, Parser};
use crate::records::{DenseTable, Records};
use crate::registry::GameContent;

use super::{FileParser, append, check_id, reg_version};

pub struct FlavorState<'a> {
    kinds: &'a DenseTable<ObjectKind>,
    records: Records<Flavor>,
}

fn parse_flavor(s: &mut FlavorState<'_>, f: &Fields<'_>) -> Result<(), ParseError> {
    let idx = f.get_uint("index")?;
    check_id(i64::from(idx))?;
    let tval = lookup_tval(f.get_sym("tval")?)?;
    let sval = match f.opt_sym("sval")? {
        Some(name) => Some(
            lookup_sval(s.kinds, tval, name)
                .ok_or_else(|| ParseError::new(ParseErrorKind::UnrecognisedSval, name))?,
        ),
        None => None,
    };
    s.records
        .begin(i64::from(idx), Flavor::new(idx as usize, tval, sval))?;
    Ok(())
}

fn parse_graphics(s: &mut FlavorState<'_>, f: &Fields<'_>) -> Result<(), ParseError> {
    let flavor = s.records.current_mut()?;
    flavor.glyph = f.get_char("glyph")?;
    flavor.color = lookup_color(f.get_sym("color")?)?;
    Ok(())
}

fn parse_desc(s: &mut FlavorState<'_>, f: &Fields<'_>) -> Result<(), ParseError> {
    append(&mut s.records.current_mut()?.text, f.get_str("desc")?);
    Ok(())
}

pub struct FlavorParser;

impl FileParser for FlavorParser {
    type State<'a> = FlavorState<'a>;
    type Output = DenseTable<Flavor>;

    fn name(&self) -> &'static str {
        "flavor"
    }

    fn init<'a>(&self, content: &'a GameContent) -> Result<Parser<FlavorState<'a>>, RegError> {
        let mut p = Parser::new(FlavorState {
            kinds: &content.kinds,
            records: Records::new(),
        });
        reg_version(&mut p)?;
        p.reg("N uint index sym tval ?sym sval", parse_flavor)?;
        p.reg("G char glyph sym color", parse_graphics)?;
        p.reg("D str desc", parse_desc)?;
        Ok(p)
    }

    fn finish(&self, state: FlavorState<'_>) -> Result<Self::Output, FinishError> {
        DenseTable::compact(state.records.finish(), "flavor")
    }

    fn commit(&self, output: Self::Output, content: &mut GameContent) -> usize {
        let n = output.count();
        content.flavors = output;
        n
    }

    fn cleanup(&self, content: &mut GameContent) {
        content.flavors = DenseTable::default();
    }
}
