//! `limits.txt`: declared table sizes.

use angband_types::Maxima;

use crate::error::{FinishError, ParseError, ParseErrorKind, RegError};
use crate::parser::{Fields, Parser};
use crate::registry::GameContent;

use super::{FileParser, reg_version};

fn parse_max(z: &mut Maxima, f: &Fields<'_>) -> Result<(), ParseError> {
    let label = f.get_sym("label")?;
    let value = f.get_int("value")?;
    let value = usize::try_from(value)
        .map_err(|_| ParseError::new(ParseErrorKind::InvalidValue, value.to_string()))?;
    if !z.set(label, value) {
        return Err(ParseError::new(ParseErrorKind::UndefinedDirective, label));
    }
    Ok(())
}

pub struct LimitsParser;

impl FileParser for LimitsParser {
    type State<'a> = Maxima;
    type Output = Maxima;

    fn name(&self) -> &'static str {
        "limits"
    }

    fn init<'a>(&self, _: &'a GameContent) -> Result<Parser<Maxima>, RegError> {
        let mut p = Parser::new(Maxima::NONE);
        reg_version(&mut p)?;
        p.reg("M sym label int value", parse_max)?;
        Ok(p)
    }

    fn finish(&self, state: Maxima) -> Result<Maxima, FinishError> {
        Ok(state)
    }

    fn commit(&self, output: Maxima, content: &mut GameContent) -> usize {
        content.maxima = output;
        [
            output.f_max,
            output.k_max,
            output.a_max,
            output.e_max,
            output.r_max,
            output.mp_max,
            output.s_max,
            output.o_max,
            output.m_max,
            output.pit_max,
        ]
        .iter()
        .filter(|&&v| v != 0)
        .count()
    }

    fn cleanup(&self, content: &mut GameContent) {
        content.maxima = Maxima::NONE;
    }
}
