//! `body.txt`: equipment layouts.

use angband_types::{BODY_SLOTS_MAX, BodyLayout, BodySlot, SlotType};

use crate::error::{FinishError, ParseError, ParseErrorKind, RegError};
use crate::parser::{Fields, Parser};
use crate::records::Records;
use crate::registry::GameContent;

use super::{FileParser, reg_version};

fn parse_body(s: &mut Records<BodyLayout>, f: &Fields<'_>) -> Result<(), ParseError> {
    s.push(BodyLayout {
        name: f.get_str("name")?.to_string(),
        slots: Vec::new(),
    });
    Ok(())
}

fn parse_slot(s: &mut Records<BodyLayout>, f: &Fields<'_>) -> Result<(), ParseError> {
    let body = s.current_mut()?;
    if body.slots.len() >= BODY_SLOTS_MAX {
        return Err(ParseError::new(
            ParseErrorKind::TooManyEntries,
            format!("{} has more than {BODY_SLOTS_MAX} slots", body.name),
        ));
    }
    let ty = f.get_sym("type")?;
    let slot_type = ty
        .parse::<SlotType>()
        .map_err(|_| ParseError::new(ParseErrorKind::InvalidValue, ty))?;
    body.slots.push(BodySlot {
        slot_type,
        name: f.get_str("name")?.to_string(),
    });
    Ok(())
}

pub struct BodyParser;

impl FileParser for BodyParser {
    type State<'a> = Records<BodyLayout>;
    type Output = Vec<BodyLayout>;

    fn name(&self) -> &'static str {
        "body"
    }

    fn init<'a>(&self, _: &'a GameContent) -> Result<Parser<Records<BodyLayout>>, RegError> {
        let mut p = Parser::new(Records::new());
        reg_version(&mut p)?;
        p.reg("body str name", parse_body)?;
        p.reg("slot sym type str name", parse_slot)?;
        Ok(p)
    }

    fn finish(&self, state: Records<BodyLayout>) -> Result<Vec<BodyLayout>, FinishError> {
        if state.is_empty() {
            return Err(FinishError::Empty { what: "body" });
        }
        Ok(state.into_vec())
    }

    fn commit(&self, output: Vec<BodyLayout>, content: &mut GameContent) -> usize {
        content.bodies = output;
        content.bodies.len()
    }

    fn cleanup(&self, content: &mut GameContent) {
        content.bodies.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parser() -> Parser<Records<BodyLayout>> {
        BodyParser.init(&GameContent::default()).unwrap()
    }

    #[test]
    fn humanoid() {
        let mut p = parser();
        p.parse_str(
            "body:Humanoid\n\
             slot:WEAPON:weapon\n\
             slot:BOW:shooting\n\
             slot:RING:ring\n\
             slot:RING:ring\n\
             slot:BODY_ARMOR:body\n",
        )
        .unwrap();
        let bodies = BodyParser.finish(p.into_state()).unwrap();
        assert_eq!(bodies.len(), 1);
        assert_eq!(bodies[0].name, "Humanoid");
        assert_eq!(bodies[0].slots.len(), 5);
        assert_eq!(bodies[0].slots[4].slot_type, SlotType::BodyArmor);
        assert_eq!(bodies[0].slots[1].name, "shooting");
    }

    #[test]
    fn slot_limits() {
        let mut p = parser();
        p.parse("body:Octopus").unwrap();
        assert_eq!(
            p.parse("slot:TENTACLE:arm").unwrap_err().kind,
            ParseErrorKind::InvalidValue
        );
        for _ in 0..BODY_SLOTS_MAX {
            p.parse("slot:RING:ring").unwrap();
        }
        assert_eq!(
            p.parse("slot:RING:ring").unwrap_err().kind,
            ParseErrorKind::TooManyEntries
        );
    }

    #[test]
    fn empty_file() {
        assert_eq!(
            BodyParser.finish(Records::new()),
            Err(FinishError::Empty { what: "body" })
        );
    }

    #[test]
    fn body_before_header() {
        let mut p = parser();
        let e = p.parse("slot:RING:ring").unwrap_err();
        assert_eq!(e.kind, ParseErrorKind::MissingRecordHeader);
        assert!(p.state().current().is_none());
    }
}
