//! `p_race.txt`: player races.

use angband_types::{HistoryChart, ObjectFlags, PlayerFlags, PlayerRace, Skill, Stat};
use strum::EnumCount;

use crate::error::{FinishError, ParseError, ParseErrorKind, RegError};
use crate::lookup::{flag_tokens, parse_flags};
use crate::parser::{Fields, Parser};
use crate::records::{DenseTable, Records};
use crate::registry::GameContent;

use super::{FileParser, check_id, reg_version};

/// Field names of a line listing one value per stat.
pub(crate) const STAT_FIELDS: [&str; Stat::COUNT] = ["str", "int", "wis", "dex", "con", "chr"];
/// Field names of a line listing one value per skill.
pub(crate) const SKILL_FIELDS: [&str; Skill::COUNT] = [
    "disarm", "device", "save", "stealth", "search", "srh-freq", "thn", "thb", "throw", "dig",
];

pub(crate) const STAT_SCHEMA: &str = "int str int int int wis int dex int con int chr";
pub(crate) const SKILL_SCHEMA: &str =
    "int disarm int device int save int stealth int search int srh-freq int thn int thb int throw int dig";

/// Read every named int field into `out`, in order.
pub(crate) fn read_ints(f: &Fields<'_>, names: &[&str], out: &mut [i32]) -> Result<(), ParseError> {
    for (slot, name) in out.iter_mut().zip(names) {
        *slot = f.get_int(name)?;
    }
    Ok(())
}

pub struct RaceState<'a> {
    histories: &'a [HistoryChart],
    records: Records<PlayerRace>,
}

fn parse_name(s: &mut RaceState<'_>, f: &Fields<'_>) -> Result<(), ParseError> {
    let idx = f.get_uint("index")?;
    check_id(i64::from(idx))?;
    s.records
        .begin(i64::from(idx), PlayerRace::new(idx as usize, f.get_str("name")?))?;
    Ok(())
}

fn parse_stats(s: &mut RaceState<'_>, f: &Fields<'_>) -> Result<(), ParseError> {
    read_ints(f, &STAT_FIELDS, &mut s.records.current_mut()?.r_adj)
}

fn parse_skills(s: &mut RaceState<'_>, f: &Fields<'_>) -> Result<(), ParseError> {
    read_ints(f, &SKILL_FIELDS, &mut s.records.current_mut()?.r_skills)
}

fn parse_exp(s: &mut RaceState<'_>, f: &Fields<'_>) -> Result<(), ParseError> {
    let race = s.records.current_mut()?;
    race.r_mhp = f.get_int("mhp")?;
    race.r_exp = f.get_int("exp")?;
    race.infra = f.get_int("infra")?;
    Ok(())
}

fn parse_history(s: &mut RaceState<'_>, f: &Fields<'_>) -> Result<(), ParseError> {
    let race = s.records.current_mut()?;
    let hist = f.get_uint("hist")?;
    let chart = s
        .histories
        .iter()
        .position(|c| c.idx == hist)
        .ok_or_else(|| {
            ParseError::new(ParseErrorKind::InvalidValue, format!("no history chart {hist}"))
        })?;
    race.history = Some(chart);
    race.b_age = f.get_int("b-age")?;
    race.m_age = f.get_int("m-age")?;
    Ok(())
}

fn parse_height(s: &mut RaceState<'_>, f: &Fields<'_>) -> Result<(), ParseError> {
    let race = s.records.current_mut()?;
    race.m_b_ht = f.get_int("m-b")?;
    race.m_m_ht = f.get_int("m-m")?;
    race.f_b_ht = f.get_int("f-b")?;
    race.f_m_ht = f.get_int("f-m")?;
    Ok(())
}

fn parse_weight(s: &mut RaceState<'_>, f: &Fields<'_>) -> Result<(), ParseError> {
    let race = s.records.current_mut()?;
    race.m_b_wt = f.get_int("m-b")?;
    race.m_m_wt = f.get_int("m-m")?;
    race.f_b_wt = f.get_int("f-b")?;
    race.f_m_wt = f.get_int("f-m")?;
    Ok(())
}

fn parse_obj_flags(s: &mut RaceState<'_>, f: &Fields<'_>) -> Result<(), ParseError> {
    let race = s.records.current_mut()?;
    if let Some(flags) = f.opt_str("flags")? {
        race.flags |= parse_flags::<ObjectFlags>(flags)?;
    }
    Ok(())
}

fn parse_player_flags(s: &mut RaceState<'_>, f: &Fields<'_>) -> Result<(), ParseError> {
    let race = s.records.current_mut()?;
    if let Some(flags) = f.opt_str("flags")? {
        race.pflags |= parse_flags::<PlayerFlags>(flags)?;
    }
    Ok(())
}

fn parse_choice(s: &mut RaceState<'_>, f: &Fields<'_>) -> Result<(), ParseError> {
    let race = s.records.current_mut()?;
    let Some(classes) = f.opt_str("classes")? else {
        return Ok(());
    };
    for token in flag_tokens(classes) {
        match token.parse::<u32>() {
            Ok(c) if c < u32::BITS => race.choice |= 1 << c,
            _ => return Err(ParseError::new(ParseErrorKind::InvalidValue, token)),
        }
    }
    Ok(())
}

pub struct RaceParser;

impl FileParser for RaceParser {
    type State<'a> = RaceState<'a>;
    type Output = DenseTable<PlayerRace>;

    fn name(&self) -> &'static str {
        "p_race"
    }

    fn init<'a>(&self, content: &'a GameContent) -> Result<Parser<RaceState<'a>>, RegError> {
        let mut p = Parser::new(RaceState {
            histories: &content.histories,
            records: Records::new(),
        });
        reg_version(&mut p)?;
        p.reg("N uint index str name", parse_name)?;
        p.reg(&format!("S {STAT_SCHEMA}"), parse_stats)?;
        p.reg(&format!("R {SKILL_SCHEMA}"), parse_skills)?;
        p.reg("X int mhp int exp int infra", parse_exp)?;
        p.reg("I uint hist int b-age int m-age", parse_history)?;
        p.reg("H int m-b int m-m int f-b int f-m", parse_height)?;
        p.reg("W int m-b int m-m int f-b int f-m", parse_weight)?;
        p.reg("F ?str flags", parse_obj_flags)?;
        p.reg("Y ?str flags", parse_player_flags)?;
        p.reg("C ?str classes", parse_choice)?;
        Ok(p)
    }

    fn finish(&self, state: RaceState<'_>) -> Result<Self::Output, FinishError> {
        DenseTable::compact(state.records.finish(), "p_race")
    }

    fn commit(&self, output: Self::Output, content: &mut GameContent) -> usize {
        let n = output.count();
        content.races = output;
        n
    }

    fn cleanup(&self, content: &mut GameContent) {
        content.races = DenseTable::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn content() -> GameContent {
        let mut content = GameContent::default();
        content.histories = [1, 4]
            .into_iter()
            .map(|idx| HistoryChart {
                idx,
                entries: Vec::new(),
            })
            .collect();
        content
    }

    #[test]
    fn race_record() {
        let content = content();
        let mut p = RaceParser.init(&content).unwrap();
        p.parse_str(
            "N:2:Elf\n\
             S:-1:2:-1:1:-1:1\n\
             R:5:6:6:2:8:12:-5:15:0:0\n\
             X:9:120:3\n\
             I:4:75:75\n\
             H:60:4:54:4\n\
             W:100:6:80:6\n\
             F:SUST_DEX\n\
             Y:SEE_ORE\n\
             C:0 | 1 | 2 | 5\n",
        )
        .unwrap();
        let races = RaceParser.finish(p.into_state()).unwrap();
        let elf = races.get(2).unwrap();
        assert_eq!(elf.r_adj, [-1, 2, -1, 1, -1, 1]);
        assert_eq!(elf.r_skills[Skill::ToHitMelee as usize], -5);
        assert_eq!(elf.r_exp, 120);
        assert_eq!(elf.history, Some(1));
        assert_eq!((elf.m_b_ht, elf.f_m_wt), (60, 6));
        assert_eq!(elf.flags, ObjectFlags::SUST_DEX);
        assert_eq!(elf.pflags, PlayerFlags::SEE_ORE);
        assert!(elf.allows_class(5));
        assert!(!elf.allows_class(3));
    }

    #[test]
    fn history_must_exist() {
        let content = content();
        let mut p = RaceParser.init(&content).unwrap();
        p.parse("N:0:Human").unwrap();
        assert_eq!(
            p.parse("I:2:15:10").unwrap_err().kind,
            ParseErrorKind::InvalidValue
        );
    }

    #[test]
    fn bad_class_choice() {
        let content = content();
        let mut p = RaceParser.init(&content).unwrap();
        p.parse("N:0:Human").unwrap();
        assert_eq!(
            p.parse("C:0 | warrior").unwrap_err().kind,
            ParseErrorKind::InvalidValue
        );
        assert_eq!(p.parse("C:32").unwrap_err().kind, ParseErrorKind::InvalidValue);
    }

    #[test]
    fn body_before_header() {
        let content = content();
        for line in [
            "S:-1:2:-1:1:-1:1",
            "R:5:6:6:2:8:12:-5:15:0:0",
            "X:9:120:3",
            "I:4:75:75",
            "H:60:4:54:4",
            "W:100:6:80:6",
            "F:SUST_DEX",
            "Y:SEE_ORE",
            "C:0 | 1",
        ] {
            let mut p = RaceParser.init(&content).unwrap();
            let e = p.parse(line).unwrap_err();
            assert_eq!(e.kind, ParseErrorKind::MissingRecordHeader, "{line}");
            assert!(p.state().records.current().is_none());
        }
    }
}
