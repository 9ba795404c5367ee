//! `trap.txt`: traps and runes. Records have no explicit index; they are
//! numbered in file order.

use angband_types::{ObjectFlags, TrapFlags, TrapKind};

use crate::error::{FinishError, ParseError, RegError};
use crate::lookup::{lookup_color, lookup_effect, parse_flags};
use crate::parser::{Fields, Parser};
use crate::records::Records;
use crate::registry::GameContent;

use super::{FileParser, append, reg_version};

fn parse_name(s: &mut Records<TrapKind>, f: &Fields<'_>) -> Result<(), ParseError> {
    let tidx = s.len();
    s.push(TrapKind::new(tidx, f.get_sym("name")?, f.get_str("desc")?));
    Ok(())
}

fn parse_graphics(s: &mut Records<TrapKind>, f: &Fields<'_>) -> Result<(), ParseError> {
    let trap = s.current_mut()?;
    trap.glyph = f.get_char("glyph")?;
    trap.color = lookup_color(f.get_sym("color")?)?;
    Ok(())
}

fn parse_appear(s: &mut Records<TrapKind>, f: &Fields<'_>) -> Result<(), ParseError> {
    let trap = s.current_mut()?;
    trap.rarity = f.get_uint("rarity")?;
    trap.min_depth = f.get_uint("mindepth")?;
    trap.max_num = f.get_uint("maxnum")?;
    Ok(())
}

fn parse_visibility(s: &mut Records<TrapKind>, f: &Fields<'_>) -> Result<(), ParseError> {
    s.current_mut()?.power = f.get_rand("visibility")?;
    Ok(())
}

fn parse_flags_line(s: &mut Records<TrapKind>, f: &Fields<'_>) -> Result<(), ParseError> {
    let trap = s.current_mut()?;
    if let Some(flags) = f.opt_str("flags")? {
        trap.flags |= parse_flags::<TrapFlags>(flags)?;
    }
    Ok(())
}

fn parse_effect(s: &mut Records<TrapKind>, f: &Fields<'_>) -> Result<(), ParseError> {
    let trap = s.current_mut()?;
    trap.effect = Some(lookup_effect(f.get_sym("effect")?)?);
    if let Some(dice) = f.opt_rand("dice")? {
        trap.effect_dice = dice;
    }
    Ok(())
}

fn parse_desc(s: &mut Records<TrapKind>, f: &Fields<'_>) -> Result<(), ParseError> {
    append(&mut s.current_mut()?.text, f.get_str("text")?);
    Ok(())
}

fn parse_msg(s: &mut Records<TrapKind>, f: &Fields<'_>) -> Result<(), ParseError> {
    append(&mut s.current_mut()?.msg, f.get_str("text")?);
    Ok(())
}

fn parse_msg_good(s: &mut Records<TrapKind>, f: &Fields<'_>) -> Result<(), ParseError> {
    append(&mut s.current_mut()?.msg_good, f.get_str("text")?);
    Ok(())
}

fn parse_msg_bad(s: &mut Records<TrapKind>, f: &Fields<'_>) -> Result<(), ParseError> {
    append(&mut s.current_mut()?.msg_bad, f.get_str("text")?);
    Ok(())
}

fn parse_msg_xtra(s: &mut Records<TrapKind>, f: &Fields<'_>) -> Result<(), ParseError> {
    append(&mut s.current_mut()?.msg_xtra, f.get_str("text")?);
    Ok(())
}

fn parse_save(s: &mut Records<TrapKind>, f: &Fields<'_>) -> Result<(), ParseError> {
    let trap = s.current_mut()?;
    if let Some(flags) = f.opt_str("flags")? {
        trap.save_flags |= parse_flags::<ObjectFlags>(flags)?;
    }
    Ok(())
}

pub struct TrapParser;

impl FileParser for TrapParser {
    type State<'a> = Records<TrapKind>;
    type Output = Vec<TrapKind>;

    fn name(&self) -> &'static str {
        "trap"
    }

    fn init<'a>(&self, _: &'a GameContent) -> Result<Parser<Records<TrapKind>>, RegError> {
        let mut p = Parser::new(Records::new());
        reg_version(&mut p)?;
        p.reg("name sym name str desc", parse_name)?;
        p.reg("graphics char glyph sym color", parse_graphics)?;
        p.reg("appear uint rarity uint mindepth uint maxnum", parse_appear)?;
        p.reg("visibility rand visibility", parse_visibility)?;
        p.reg("flags ?str flags", parse_flags_line)?;
        p.reg("effect sym effect ?rand dice", parse_effect)?;
        p.reg("desc str text", parse_desc)?;
        p.reg("msg str text", parse_msg)?;
        p.reg("msg-good str text", parse_msg_good)?;
        p.reg("msg-bad str text", parse_msg_bad)?;
        p.reg("msg-xtra str text", parse_msg_xtra)?;
        p.reg("save ?str flags", parse_save)?;
        Ok(p)
    }

    fn finish(&self, state: Records<TrapKind>) -> Result<Vec<TrapKind>, FinishError> {
        if state.is_empty() {
            return Err(FinishError::Empty { what: "trap" });
        }
        Ok(state.into_vec())
    }

    fn commit(&self, output: Vec<TrapKind>, content: &mut GameContent) -> usize {
        content.traps = output;
        content.traps.len()
    }

    fn cleanup(&self, content: &mut GameContent) {
        content.traps.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ParseErrorKind;
    use angband_types::{Color, Effect, Random};

    fn parser() -> Parser<Records<TrapKind>> {
        TrapParser.init(&GameContent::default()).unwrap()
    }

    #[test]
    fn trap_records_in_file_order() {
        let mut p = parser();
        p.parse_str(
            "name:trap door:trap door\n\
             graphics:^:w\n\
             appear:1:0:0\n\
             visibility:1d5\n\
             flags:TRAP | FLOOR | DOWN\n\
             effect:TRAP_DOOR\n\
             desc:A trap door which drops you to the next level \n\
             desc:of the dungeon.\n\
             msg:You fall through a trap door!\n\
             msg-good:You float gently down to the next level.\n\
             save:FEATHER\n\
             name:pit:pit\n\
             graphics:^:s\n\
             effect:DAMAGE:2d6\n",
        )
        .unwrap();
        let traps = TrapParser.finish(p.into_state()).unwrap();
        assert_eq!(traps.len(), 2);

        let door = &traps[0];
        assert_eq!(door.tidx, 0);
        assert_eq!(door.name, "trap door");
        assert_eq!(door.power, Random::new(0, 1, 5, 0));
        assert!(door.flags.contains(TrapFlags::DOWN));
        assert_eq!(door.effect, Some(Effect::TrapDoor));
        assert_eq!(
            door.text,
            "A trap door which drops you to the next level of the dungeon."
        );
        assert_eq!(door.save_flags, ObjectFlags::FEATHER);
        assert_eq!(door.msg_good, "You float gently down to the next level.");

        let pit = &traps[1];
        assert_eq!(pit.tidx, 1);
        assert_eq!(pit.color, Color::Slate);
        assert_eq!(pit.effect_dice, Random::new(0, 2, 6, 0));
    }

    #[test]
    fn body_before_header() {
        let mut p = parser();
        assert_eq!(
            p.parse("appear:1:0:0").unwrap_err().kind,
            ParseErrorKind::MissingRecordHeader
        );
    }

    #[test]
    fn empty_file() {
        let p = parser();
        assert_eq!(
            TrapParser.finish(p.into_state()),
            Err(FinishError::Empty { what: "trap" })
        );
    }
}
