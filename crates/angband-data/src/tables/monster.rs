//! `monster.txt`: monster races.

use angband_rng::MAX_DEPTH;
use angband_types::{
    Artifact, Blow, BlowEffect, BlowMethod, MONSTER_BLOW_MAX, Maxima, MonsterBase, MonsterDrop,
    MonsterFlags, MonsterRace, MonsterSpellFlags, ObjectKind, Random, START_ITEM_MAX,
};

use crate::error::{FinishError, ParseError, ParseErrorKind, RegError};
use crate::lookup::{
    flag_tokens, lookup_artifact_name, lookup_color, lookup_kind_by_name, lookup_monster_base,
    parse_flags,
};
use crate::parser::{Fields, Parser};
use crate::records::{DenseTable, Records};
use crate::registry::GameContent;

use super::{FileParser, append, check_cap, reg_version};

pub struct MonsterState<'a> {
    bases: &'a [MonsterBase],
    kinds: &'a DenseTable<ObjectKind>,
    artifacts: &'a DenseTable<Artifact>,
    cap: usize,
    records: Records<MonsterRace>,
}

fn parse_name(s: &mut MonsterState<'_>, f: &Fields<'_>) -> Result<(), ParseError> {
    let idx = f.get_uint("index")?;
    check_cap(s.cap, i64::from(idx))?;
    s.records
        .begin(i64::from(idx), MonsterRace::new(idx as usize, f.get_str("name")?))?;
    Ok(())
}

fn parse_base(s: &mut MonsterState<'_>, f: &Fields<'_>) -> Result<(), ParseError> {
    let name = f.get_sym("base")?;
    let race = s.records.current_mut()?;
    let idx = lookup_monster_base(s.bases, name)
        .ok_or_else(|| ParseError::new(ParseErrorKind::UnrecognisedTval, name))?;
    let base = &s.bases[idx];
    race.base = Some(idx);
    race.glyph = base.glyph;
    race.flags |= base.flags;
    race.spell_flags |= base.spell_flags;
    Ok(())
}

fn parse_glyph(s: &mut MonsterState<'_>, f: &Fields<'_>) -> Result<(), ParseError> {
    s.records.current_mut()?.glyph = f.get_char("glyph")?;
    Ok(())
}

fn parse_color(s: &mut MonsterState<'_>, f: &Fields<'_>) -> Result<(), ParseError> {
    let race = s.records.current_mut()?;
    race.color = lookup_color(f.get_sym("color")?)?;
    Ok(())
}

fn parse_info(s: &mut MonsterState<'_>, f: &Fields<'_>) -> Result<(), ParseError> {
    let race = s.records.current_mut()?;
    race.speed = f.get_int("speed")?;
    race.avg_hp = f.get_int("hp")?;
    race.aaf = f.get_int("aaf")?;
    race.ac = f.get_int("ac")?;
    race.sleep = f.get_int("sleep")?;
    Ok(())
}

fn parse_power(s: &mut MonsterState<'_>, f: &Fields<'_>) -> Result<(), ParseError> {
    let race = s.records.current_mut()?;
    let level = f.get_int("level")?;
    if !(0..MAX_DEPTH).contains(&level) {
        return Err(ParseError::new(
            ParseErrorKind::OutOfBounds,
            format!("level {level} is outside 0..{MAX_DEPTH}"),
        ));
    }
    race.level = level;
    race.rarity = f.get_int("rarity")?;
    race.power = f.get_int("power")?;
    race.mexp = f.get_int("mexp")?;
    Ok(())
}

fn parse_blow(s: &mut MonsterState<'_>, f: &Fields<'_>) -> Result<(), ParseError> {
    let race = s.records.current_mut()?;
    if race.blows.len() >= MONSTER_BLOW_MAX {
        return Err(ParseError::new(
            ParseErrorKind::TooManyEntries,
            format!("more than {MONSTER_BLOW_MAX} blows"),
        ));
    }
    let method = f.get_sym("method")?;
    let method = method
        .parse::<BlowMethod>()
        .map_err(|_| ParseError::new(ParseErrorKind::UnrecognisedBlow, method))?;
    let effect = f
        .opt_sym("effect")?
        .map(|e| {
            e.parse::<BlowEffect>()
                .map_err(|_| ParseError::new(ParseErrorKind::InvalidEffect, e))
        })
        .transpose()?;
    race.blows.push(Blow {
        method,
        effect,
        dice: f.opt_rand("damage")?.unwrap_or(Random::ZERO),
    });
    Ok(())
}

fn parse_flags_line(s: &mut MonsterState<'_>, f: &Fields<'_>) -> Result<(), ParseError> {
    let race = s.records.current_mut()?;
    if let Some(flags) = f.opt_str("flags")? {
        race.flags |= parse_flags::<MonsterFlags>(flags)?;
    }
    Ok(())
}

fn parse_desc(s: &mut MonsterState<'_>, f: &Fields<'_>) -> Result<(), ParseError> {
    append(&mut s.records.current_mut()?.text, f.get_str("desc")?);
    Ok(())
}

/// `1_IN_x` sets the casting frequency; every other token is a spell.
fn parse_spells(s: &mut MonsterState<'_>, f: &Fields<'_>) -> Result<(), ParseError> {
    let race = s.records.current_mut()?;
    for token in flag_tokens(f.get_str("spells")?) {
        if let Some(x) = token.strip_prefix("1_IN_") {
            match x.parse::<i32>() {
                Ok(x) if (1..=100).contains(&x) => race.freq_spell = 100 / x,
                _ => return Err(ParseError::new(ParseErrorKind::InvalidSpellFreq, token)),
            }
        } else {
            race.spell_flags |= MonsterSpellFlags::from_name(token)
                .ok_or_else(|| ParseError::new(ParseErrorKind::InvalidFlag, token))?;
        }
    }
    Ok(())
}

fn check_quantity(min: u32, max: u32) -> Result<(), ParseError> {
    if min > START_ITEM_MAX || max > START_ITEM_MAX || min > max {
        return Err(ParseError::new(
            ParseErrorKind::InvalidItemNumber,
            format!("{min} to {max}"),
        ));
    }
    Ok(())
}

fn parse_drop(s: &mut MonsterState<'_>, f: &Fields<'_>) -> Result<(), ParseError> {
    let kinds = s.kinds;
    let race = s.records.current_mut()?;
    let (tval, sval, kidx) = lookup_kind_by_name(kinds, f.get_sym("tval")?, f.get_sym("sval")?)?;
    let min = f.get_uint("min")?;
    let max = f.get_uint("max")?;
    check_quantity(min, max)?;
    race.drops.push(MonsterDrop {
        tval: Some(tval),
        sval,
        kind: Some(kidx),
        artifact: None,
        percent_chance: f.get_uint("chance")?,
        min,
        max,
    });
    Ok(())
}

fn parse_drop_artifact(s: &mut MonsterState<'_>, f: &Fields<'_>) -> Result<(), ParseError> {
    let artifacts = s.artifacts;
    let race = s.records.current_mut()?;
    let name = f.get_str("name")?;
    let aidx = lookup_artifact_name(artifacts, name)
        .ok_or_else(|| ParseError::new(ParseErrorKind::InvalidValue, name))?;
    let art = artifacts
        .get(aidx)
        .ok_or_else(|| ParseError::internal(format!("artifact {aidx} vanished")))?;
    race.drops.push(MonsterDrop {
        tval: art.tval,
        sval: art.sval,
        kind: art.kind,
        artifact: Some(aidx),
        percent_chance: 100,
        min: 1,
        max: 1,
    });
    Ok(())
}

pub struct MonsterParser;

impl FileParser for MonsterParser {
    type State<'a> = MonsterState<'a>;
    type Output = DenseTable<MonsterRace>;

    fn name(&self) -> &'static str {
        "monster"
    }

    fn init<'a>(&self, content: &'a GameContent) -> Result<Parser<MonsterState<'a>>, RegError> {
        let mut p = Parser::new(MonsterState {
            bases: &content.monster_bases,
            kinds: &content.kinds,
            artifacts: &content.artifacts,
            cap: content.maxima.r_max,
            records: Records::new(),
        });
        reg_version(&mut p)?;
        p.reg("N uint index str name", parse_name)?;
        p.reg("T sym base", parse_base)?;
        p.reg("G char glyph", parse_glyph)?;
        p.reg("C sym color", parse_color)?;
        p.reg("I int speed int hp int aaf int ac int sleep", parse_info)?;
        p.reg("W int level int rarity int power int mexp", parse_power)?;
        p.reg("B sym method ?sym effect ?rand damage", parse_blow)?;
        p.reg("F ?str flags", parse_flags_line)?;
        p.reg("D str desc", parse_desc)?;
        p.reg("S str spells", parse_spells)?;
        p.reg(
            "drop sym tval sym sval uint chance uint min uint max",
            parse_drop,
        )?;
        p.reg("drop-artifact str name", parse_drop_artifact)?;
        Ok(p)
    }

    fn finish(&self, state: MonsterState<'_>) -> Result<Self::Output, FinishError> {
        DenseTable::compact(state.records.finish(), "monster")
    }

    fn commit(&self, output: Self::Output, content: &mut GameContent) -> usize {
        let n = output.count();
        Maxima::cover(&mut content.maxima.r_max, output.len());
        content.monsters = output;
        n
    }

    fn cleanup(&self, content: &mut GameContent) {
        content.monsters = DenseTable::default();
    }
}
