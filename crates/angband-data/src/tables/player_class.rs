//! `p_class.txt`: player classes, their spell slots and starting kit.

use angband_types::{
    ClassSpell, ObjectKind, PY_MAX_SPELLS, PY_MAX_TITLES, PlayerClass, PlayerFlags,
    START_ITEM_MAX, StartItem, Tval,
};

use crate::error::{FinishError, ParseError, ParseErrorKind, RegError};
use crate::lookup::{lookup_kind_by_name, parse_flags};
use crate::parser::{Fields, Parser};
use crate::records::{DenseTable, Records};
use crate::registry::GameContent;

use super::player_race::{SKILL_FIELDS, SKILL_SCHEMA, STAT_FIELDS, STAT_SCHEMA, read_ints};
use super::{FileParser, check_id, reg_version};

pub struct ClassState<'a> {
    kinds: &'a DenseTable<ObjectKind>,
    records: Records<PlayerClass>,
}

fn parse_name(s: &mut ClassState<'_>, f: &Fields<'_>) -> Result<(), ParseError> {
    let idx = f.get_uint("index")?;
    check_id(i64::from(idx))?;
    s.records
        .begin(i64::from(idx), PlayerClass::new(idx as usize, f.get_str("name")?))?;
    Ok(())
}

fn parse_stats(s: &mut ClassState<'_>, f: &Fields<'_>) -> Result<(), ParseError> {
    read_ints(f, &STAT_FIELDS, &mut s.records.current_mut()?.c_adj)
}

fn parse_skills(s: &mut ClassState<'_>, f: &Fields<'_>) -> Result<(), ParseError> {
    read_ints(f, &SKILL_FIELDS, &mut s.records.current_mut()?.c_skills)
}

fn parse_skill_gain(s: &mut ClassState<'_>, f: &Fields<'_>) -> Result<(), ParseError> {
    read_ints(f, &SKILL_FIELDS, &mut s.records.current_mut()?.x_skills)
}

fn parse_info(s: &mut ClassState<'_>, f: &Fields<'_>) -> Result<(), ParseError> {
    let class = s.records.current_mut()?;
    class.c_mhp = f.get_int("mhp")?;
    class.c_exp = f.get_int("exp")?;
    class.sense_base = f.get_int("sense-base")?;
    class.sense_div = f.get_int("sense-div")?;
    Ok(())
}

fn parse_attack(s: &mut ClassState<'_>, f: &Fields<'_>) -> Result<(), ParseError> {
    let class = s.records.current_mut()?;
    class.max_attacks = f.get_int("max-attacks")?;
    class.min_weight = f.get_int("min-weight")?;
    class.att_multiply = f.get_int("att-multiply")?;
    Ok(())
}

fn parse_magic(s: &mut ClassState<'_>, f: &Fields<'_>) -> Result<(), ParseError> {
    let class = s.records.current_mut()?;
    let book = f.get_uint("book")?;
    let tval = u8::try_from(book)
        .ok()
        .and_then(Tval::from_repr)
        .ok_or_else(|| ParseError::new(ParseErrorKind::UnrecognisedTval, book.to_string()))?;
    class.magic.spell_book = Some(tval);
    class.magic.spell_stat = f.get_int("stat")?;
    class.magic.spell_first = f.get_uint("first")?;
    class.magic.spell_weight = f.get_uint("weight")?;
    Ok(())
}

fn parse_spell(s: &mut ClassState<'_>, f: &Fields<'_>) -> Result<(), ParseError> {
    let class = s.records.current_mut()?;
    let index = f.get_uint("spell")? as usize;
    if index >= PY_MAX_SPELLS {
        return Err(ParseError::new(
            ParseErrorKind::OutOfBounds,
            format!("spell {index} is not below {PY_MAX_SPELLS}"),
        ));
    }
    class.magic.spells.push(ClassSpell {
        index,
        level: f.get_int("level")?,
        mana: f.get_int("mana")?,
        fail: f.get_int("fail")?,
        exp: f.get_int("exp")?,
    });
    Ok(())
}

fn parse_title(s: &mut ClassState<'_>, f: &Fields<'_>) -> Result<(), ParseError> {
    let class = s.records.current_mut()?;
    if class.titles.len() >= PY_MAX_TITLES {
        return Err(ParseError::new(
            ParseErrorKind::TooManyEntries,
            format!("{} has more than {PY_MAX_TITLES} titles", class.name),
        ));
    }
    class.titles.push(f.get_str("title")?.to_string());
    Ok(())
}

fn parse_equip(s: &mut ClassState<'_>, f: &Fields<'_>) -> Result<(), ParseError> {
    let class = s.records.current_mut()?;
    let (tval, sval, kind) = lookup_kind_by_name(s.kinds, f.get_sym("tval")?, f.get_sym("sval")?)?;
    let min = f.get_uint("min")?;
    let max = f.get_uint("max")?;
    if min > START_ITEM_MAX || max > START_ITEM_MAX || min > max {
        return Err(ParseError::new(
            ParseErrorKind::InvalidItemNumber,
            format!("{min} to {max}"),
        ));
    }
    class.start_items.push(StartItem {
        tval,
        sval,
        kind,
        min,
        max,
    });
    Ok(())
}

fn parse_flags_line(s: &mut ClassState<'_>, f: &Fields<'_>) -> Result<(), ParseError> {
    let class = s.records.current_mut()?;
    if let Some(flags) = f.opt_str("flags")? {
        class.pflags |= parse_flags::<PlayerFlags>(flags)?;
    }
    Ok(())
}

pub struct ClassParser;

impl FileParser for ClassParser {
    type State<'a> = ClassState<'a>;
    type Output = DenseTable<PlayerClass>;

    fn name(&self) -> &'static str {
        "p_class"
    }

    fn init<'a>(&self, content: &'a GameContent) -> Result<Parser<ClassState<'a>>, RegError> {
        let mut p = Parser::new(ClassState {
            kinds: &content.kinds,
            records: Records::new(),
        });
        reg_version(&mut p)?;
        p.reg("N uint index str name", parse_name)?;
        p.reg(&format!("S {STAT_SCHEMA}"), parse_stats)?;
        p.reg(&format!("C {SKILL_SCHEMA}"), parse_skills)?;
        p.reg(&format!("X {SKILL_SCHEMA}"), parse_skill_gain)?;
        p.reg("I int mhp int exp int sense-base int sense-div", parse_info)?;
        p.reg("A int max-attacks int min-weight int att-multiply", parse_attack)?;
        p.reg("M uint book int stat uint first uint weight", parse_magic)?;
        p.reg("B uint spell int level int mana int fail int exp", parse_spell)?;
        p.reg("T str title", parse_title)?;
        p.reg("E sym tval sym sval uint min uint max", parse_equip)?;
        p.reg("F ?str flags", parse_flags_line)?;
        Ok(p)
    }

    fn finish(&self, state: ClassState<'_>) -> Result<Self::Output, FinishError> {
        DenseTable::compact(state.records.finish(), "p_class")
    }

    fn commit(&self, output: Self::Output, content: &mut GameContent) -> usize {
        let n = output.count();
        content.classes = output;
        n
    }

    fn cleanup(&self, content: &mut GameContent) {
        content.classes = DenseTable::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tables::object::tests::content_with_kinds;
    use angband_types::Skill;

    #[test]
    fn mage() {
        let content = content_with_kinds();
        let mut p = ClassParser.init(&content).unwrap();
        p.parse_str(
            "N:1:Mage\n\
             S:-5:3:0:1:-2:1\n\
             C:30:36:30:2:16:20:34:20:20:0\n\
             X:7:13:9:0:0:0:15:15:15:0\n\
             I:0:30:300:10\n\
             A:4:40:2\n\
             M:90:1:1:300\n\
             B:0:1:1:22:4\n\
             B:1:3:2:24:4\n\
             T:Novice\n\
             T:Apprentice\n\
             E:magic book:Magic for Beginners:1:1\n\
             E:sword:Dagger:1:1\n\
             E:potion:1:1:3\n\
             F:CHOOSE_SPELLS | BEAM\n",
        )
        .unwrap();
        let classes = ClassParser.finish(p.into_state()).unwrap();
        let mage = classes.get(1).unwrap();
        assert_eq!(mage.c_adj[1], 3);
        assert_eq!(mage.x_skills[Skill::ToHitMelee as usize], 15);
        assert_eq!(mage.sense_base, 300);
        assert_eq!(mage.max_attacks, 4);
        assert_eq!(mage.magic.spell_book, Some(Tval::MagicBook));
        assert_eq!(mage.magic.spell_weight, 300);
        assert_eq!(mage.magic.spells.len(), 2);
        assert_eq!(mage.magic.spells[1].mana, 2);
        assert_eq!(mage.title(6), Some("Apprentice"));
        assert_eq!(mage.start_items.len(), 3);
        assert_eq!(mage.start_items[0].kind, 4);
        assert_eq!((mage.start_items[1].tval, mage.start_items[1].sval), (Tval::Sword, 1));
        assert_eq!(mage.start_items[2].max, 3);
        assert_eq!(mage.pflags, PlayerFlags::CHOOSE_SPELLS | PlayerFlags::BEAM);
    }

    #[test]
    fn spell_slot_limit() {
        let content = content_with_kinds();
        let mut p = ClassParser.init(&content).unwrap();
        p.parse("N:0:Warrior").unwrap();
        assert_eq!(
            p.parse("B:64:1:1:1:1").unwrap_err().kind,
            ParseErrorKind::OutOfBounds
        );
    }

    #[test]
    fn start_item_limits() {
        let content = content_with_kinds();
        let mut p = ClassParser.init(&content).unwrap();
        p.parse("N:0:Warrior").unwrap();
        assert_eq!(
            p.parse("E:sword:Dagger:1:100").unwrap_err().kind,
            ParseErrorKind::InvalidItemNumber
        );
        assert_eq!(
            p.parse("E:sword:Broad Axe:1:1").unwrap_err().kind,
            ParseErrorKind::UnrecognisedSval
        );
        assert_eq!(
            p.parse("E:tool:Dagger:1:1").unwrap_err().kind,
            ParseErrorKind::UnrecognisedTval
        );
    }

    #[test]
    fn title_limit() {
        let content = content_with_kinds();
        let mut p = ClassParser.init(&content).unwrap();
        p.parse("N:0:Warrior").unwrap();
        for _ in 0..PY_MAX_TITLES {
            p.parse("T:Rookie").unwrap();
        }
        assert_eq!(
            p.parse("T:Hero").unwrap_err().kind,
            ParseErrorKind::TooManyEntries
        );
    }

    #[test]
    fn body_before_header() {
        let content = content_with_kinds();
        for line in [
            "S:-5:3:0:1:-2:1",
            "C:30:36:30:2:16:20:34:20:20:0",
            "X:7:13:9:0:0:0:15:15:15:0",
            "I:0:30:300:10",
            "A:4:40:2",
            "M:90:1:1:300",
            "B:0:1:1:22:4",
            "T:Novice",
            "E:sword:Dagger:1:1",
            "F:CHOOSE_SPELLS",
        ] {
            let mut p = ClassParser.init(&content).unwrap();
            let e = p.parse(line).unwrap_err();
            assert_eq!(e.kind, ParseErrorKind::MissingRecordHeader, "{line}");
            assert!(p.state().records.current().is_none());
        }
    }

    #[test]
    fn index_ceiling() {
        let content = content_with_kinds();
        let mut p = ClassParser.init(&content).unwrap();
        assert_eq!(
            p.parse("N:70000:Archmage").unwrap_err().kind,
            ParseErrorKind::OutOfBounds
        );
        assert!(p.state().records.is_empty());
    }
}
