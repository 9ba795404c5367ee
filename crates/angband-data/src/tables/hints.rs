use crate::error::{FinishError, ParseError, RegError};
use crate::parser::{Fields, Parser};
use crate::registry::GameContent;

use super::{FileParser, reg_version};

fn parse_hint(s: &mut Vec<String>, f: &Fields<'_>) -> Result<(), ParseError> {
    s.push(f.get_str("text")?.to_string());
    Ok(())
}

pub struct HintsParser;

impl FileParser for HintsParser {
    type State<'a> = Vec<String>;
    type Output = Vec<String>;

    fn name(&self) -> &'static str {
        "hints"
    }

    fn init<'a>(&self, _: &'a GameContent) -> Result<Parser<Vec<String>>, RegError> {
        let mut p = Parser::new(Vec::new());
        reg_version(&mut p)?;
        p.reg("H str text", parse_hint)?;
        Ok(p)
    }

    fn finish(&self, state: Vec<String>) -> Result<Vec<String>, FinishError> {
        Ok(state)
    }

    fn commit(&self, output: Vec<String>, content: &mut GameContent) -> usize {
        content.hints = output;
        content.hints.len()
    }

    fn cleanup(&self, content: &mut GameContent) {
        content.hints.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hints_keep_order() {
        let mut p = HintsParser.init(&GameContent::default()).unwrap();
        p.parse_str(
            "# comment\n\
             H:Stay away from the Grip and Fang: they bite.\n\
             \n\
             H:Read unknown scrolls in town.\n",
        )
        .unwrap();
        let hints = HintsParser.finish(p.into_state()).unwrap();
        assert_eq!(
            hints,
            vec![
                "Stay away from the Grip and Fang: they bite.",
                "Read unknown scrolls in town."
            ]
        );
    }
}
