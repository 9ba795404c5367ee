//! `names.txt`: word lists for random names.

use angband_types::NameSection;

use crate::error::{FinishError, ParseError, ParseErrorKind, RegError};
use crate::parser::{Fields, Parser};
use crate::records::Records;
use crate::registry::GameContent;

use super::{FileParser, reg_version};

fn parse_section(s: &mut Records<Vec<String>>, f: &Fields<'_>) -> Result<(), ParseError> {
    let section = f.get_int("section")?;
    let known = u8::try_from(section)
        .ok()
        .and_then(NameSection::from_repr)
        .is_some();
    if !known {
        return Err(ParseError::new(
            ParseErrorKind::OutOfBounds,
            format!("no name section {section}"),
        ));
    }
    s.begin(i64::from(section), Vec::new())?;
    Ok(())
}

fn parse_word(s: &mut Records<Vec<String>>, f: &Fields<'_>) -> Result<(), ParseError> {
    s.current_mut()?.push(f.get_str("name")?.to_string());
    Ok(())
}

pub struct NamesParser;

impl FileParser for NamesParser {
    type State<'a> = Records<Vec<String>>;
    type Output = Vec<Vec<String>>;

    fn name(&self) -> &'static str {
        "names"
    }

    fn init<'a>(&self, _: &'a GameContent) -> Result<Parser<Records<Vec<String>>>, RegError> {
        let mut p = Parser::new(Records::new());
        reg_version(&mut p)?;
        p.reg("N int section", parse_section)?;
        p.reg("D str name", parse_word)?;
        Ok(p)
    }

    /// One word list per section slot; slot 0 stays empty.
    fn finish(&self, state: Records<Vec<String>>) -> Result<Vec<Vec<String>>, FinishError> {
        let mut sections = vec![Vec::new(); NameSection::MAX];
        for (id, words) in state.finish() {
            if let Some(slot) = usize::try_from(id).ok().and_then(|i| sections.get_mut(i)) {
                *slot = words;
            }
        }
        Ok(sections)
    }

    fn commit(&self, output: Vec<Vec<String>>, content: &mut GameContent) -> usize {
        content.names = output;
        content.names.iter().map(Vec::len).sum()
    }

    fn cleanup(&self, content: &mut GameContent) {
        content.names.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parser() -> Parser<Records<Vec<String>>> {
        NamesParser.init(&GameContent::default()).unwrap()
    }

    #[test]
    fn sections() {
        let mut p = parser();
        p.parse_str("N:1\nD:adanedhel\nD:adurant\nN:2\nD:abracadabra\n")
            .unwrap();
        let names = NamesParser.finish(p.into_state()).unwrap();
        assert_eq!(names.len(), NameSection::MAX);
        assert!(names[0].is_empty());
        assert_eq!(names[NameSection::Tolkien as usize], ["adanedhel", "adurant"]);
        assert_eq!(names[NameSection::Scroll as usize], ["abracadabra"]);
    }

    #[test]
    fn unknown_section() {
        let mut p = parser();
        for line in ["N:0", "N:3", "N:-1"] {
            assert_eq!(p.parse(line).unwrap_err().kind, ParseErrorKind::OutOfBounds, "{line}");
        }
        assert_eq!(
            p.parse("D:orphan").unwrap_err().kind,
            ParseErrorKind::MissingRecordHeader
        );
    }
}
