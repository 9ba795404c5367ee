//! `pain.txt`: the message sets monsters use when hurt.

use angband_types::{PAIN_MESSAGES_MAX, PainMessages};

use crate::error::{FinishError, ParseError, ParseErrorKind, RegError};
use crate::parser::{Fields, Parser};
use crate::records::{DenseTable, Records};
use crate::registry::GameContent;

use super::{FileParser, check_id, reg_version};

fn parse_type(s: &mut Records<PainMessages>, f: &Fields<'_>) -> Result<(), ParseError> {
    let index = f.get_uint("index")?;
    check_id(i64::from(index))?;
    s.begin(
        i64::from(index),
        PainMessages {
            index: index as usize,
            messages: Vec::new(),
        },
    )?;
    Ok(())
}

fn parse_message(s: &mut Records<PainMessages>, f: &Fields<'_>) -> Result<(), ParseError> {
    let pain = s.current_mut()?;
    if pain.messages.len() >= PAIN_MESSAGES_MAX {
        return Err(ParseError::new(
            ParseErrorKind::TooManyEntries,
            format!("pain set {} has more than {PAIN_MESSAGES_MAX} messages", pain.index),
        ));
    }
    pain.messages.push(f.get_str("message")?.to_string());
    Ok(())
}

pub struct PainParser;

impl FileParser for PainParser {
    type State<'a> = Records<PainMessages>;
    type Output = DenseTable<PainMessages>;

    fn name(&self) -> &'static str {
        "pain"
    }

    fn init<'a>(&self, _: &'a GameContent) -> Result<Parser<Records<PainMessages>>, RegError> {
        let mut p = Parser::new(Records::new());
        reg_version(&mut p)?;
        p.reg("N uint index", parse_type)?;
        p.reg("M str message", parse_message)?;
        Ok(p)
    }

    fn finish(&self, state: Records<PainMessages>) -> Result<Self::Output, FinishError> {
        DenseTable::compact(state.finish(), "pain")
    }

    fn commit(&self, output: Self::Output, content: &mut GameContent) -> usize {
        let n = output.count();
        content.pain = output;
        n
    }

    fn cleanup(&self, content: &mut GameContent) {
        content.pain = DenseTable::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_accumulate() {
        let mut p = PainParser.init(&GameContent::default()).unwrap();
        p.parse_str("N:1\nM:shrugs off the attack.\nM:grunts with pain.\nN:2\nM:ignores the attack.\n")
            .unwrap();
        let pain = PainParser.finish(p.into_state()).unwrap();
        assert_eq!(pain.len(), 3);
        assert!(pain.get(0).is_none());
        assert_eq!(pain.get(1).unwrap().messages.len(), 2);
        assert_eq!(pain.get(2).unwrap().messages[0], "ignores the attack.");
    }

    #[test]
    fn too_many_messages() {
        let mut p = PainParser.init(&GameContent::default()).unwrap();
        p.parse("N:1").unwrap();
        for _ in 0..PAIN_MESSAGES_MAX {
            p.parse("M:squeals.").unwrap();
        }
        assert_eq!(
            p.parse("M:squeals.").unwrap_err().kind,
            ParseErrorKind::TooManyEntries
        );
    }

    #[test]
    fn message_before_header() {
        let mut p = PainParser.init(&GameContent::default()).unwrap();
        assert_eq!(
            p.parse("M:squeals.").unwrap_err().kind,
            ParseErrorKind::MissingRecordHeader
        );
    }
}
