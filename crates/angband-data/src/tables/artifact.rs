//! `artifact.txt`: artifacts. An artifact naming a kind that does not exist
//! gets a placeholder kind made for it, so the loader works on its own copy
//! of the kind table and commits it back when it changed.

use angband_types::{
    Artifact, Color, Element, ElementFlags, KindFlags, Maxima, ObjectBase, ObjectKind, Tval,
};

use crate::error::{FinishError, ParseError, ParseErrorKind, RegError};
use crate::lookup::{
    ObjectFlagSet, ValueTargets, lookup_color, lookup_effect, lookup_kind, lookup_sval,
    lookup_tval, parse_values,
};
use crate::parser::{Fields, Parser};
use crate::records::{DenseTable, Records};
use crate::registry::GameContent;

use super::object::count_svals;
use super::{FileParser, append, check_cap, parse_alloc, reg_version};

pub struct ArtifactState<'a> {
    bases: &'a DenseTable<ObjectBase>,
    kinds: DenseTable<ObjectKind>,
    kinds_changed: bool,
    cap: usize,
    records: Records<Artifact>,
}

pub struct ArtifactTables {
    pub artifacts: DenseTable<Artifact>,
    /// The kind table with placeholder kinds added, if any were needed.
    pub kinds: Option<DenseTable<ObjectKind>>,
}

fn parse_name(s: &mut ArtifactState<'_>, f: &Fields<'_>) -> Result<(), ParseError> {
    let idx = i64::from(f.get_int("index")?);
    check_cap(s.cap, idx)?;
    let aidx = usize::try_from(idx).unwrap_or_default();
    let art = s.records.begin(idx, Artifact::new(aidx, f.get_str("name")?))?;
    for el in Element::BASE {
        art.el_info[el as usize].flags |= ElementFlags::IGNORE;
    }
    Ok(())
}

/// Append a placeholder kind for an artifact whose kind is missing.
fn dummy_kind(s: &mut ArtifactState<'_>, tval: Tval, name: &str) -> Result<(i32, usize), ParseError> {
    let base = s
        .bases
        .get(tval as usize)
        .ok_or_else(|| ParseError::new(ParseErrorKind::UnrecognisedTval, tval.name()))?;
    let sval = match name.parse() {
        Ok(n) => n,
        Err(_) => {
            s.kinds
                .iter()
                .filter(|(_, k)| k.tval == Some(tval))
                .map(|(_, k)| k.sval)
                .max()
                .unwrap_or(0)
                + 1
        }
    };

    let kidx = s.kinds.len();
    let mut kind = ObjectKind::new(kidx, format!("& {name}~"));
    kind.tval = Some(tval);
    kind.sval = sval;
    kind.glyph = '*';
    kind.color = Color::Red;
    kind.flags = base.flags;
    kind.kind_flags = base.kind_flags | KindFlags::INSTA_ART;
    kind.el_info = base.el_info;
    s.kinds.push(kind);
    s.kinds_changed = true;

    log::debug!("placeholder kind {kidx} for {} {name}", tval.name());
    Ok((sval, kidx))
}

fn parse_info(s: &mut ArtifactState<'_>, f: &Fields<'_>) -> Result<(), ParseError> {
    if s.records.current().is_none() {
        return Err(ParseErrorKind::MissingRecordHeader.into());
    }
    let tval = lookup_tval(f.get_sym("tval")?)?;
    let name = f.get_sym("sval")?;
    let found = lookup_sval(&s.kinds, tval, name)
        .and_then(|sval| lookup_kind(&s.kinds, tval, sval).map(|kidx| (sval, kidx)));
    let (sval, kidx) = match found {
        Some(found) => found,
        None => dummy_kind(s, tval, name)?,
    };

    let art = s.records.current_mut()?;
    art.tval = Some(tval);
    art.sval = sval;
    art.kind = Some(kidx);
    Ok(())
}

fn parse_graphics(s: &mut ArtifactState<'_>, f: &Fields<'_>) -> Result<(), ParseError> {
    let art = s.records.current_mut()?;
    let special = art
        .kind
        .and_then(|k| s.kinds.get(k))
        .is_some_and(|k| k.kind_flags.contains(KindFlags::INSTA_ART));
    if !special {
        return Err(ParseError::new(ParseErrorKind::NotSpecialArtifact, art.name.as_str()));
    }
    art.glyph = Some(f.get_char("glyph")?);
    art.color = Some(lookup_color(f.get_sym("color")?)?);
    Ok(())
}

fn parse_weight(s: &mut ArtifactState<'_>, f: &Fields<'_>) -> Result<(), ParseError> {
    let art = s.records.current_mut()?;
    art.level = f.get_int("level")?;
    art.rarity = f.get_int("rarity")?;
    art.weight = f.get_int("weight")?;
    art.cost = f.get_int("cost")?;
    Ok(())
}

fn parse_alloc_line(s: &mut ArtifactState<'_>, f: &Fields<'_>) -> Result<(), ParseError> {
    let art = s.records.current_mut()?;
    art.alloc = parse_alloc(f.get_int("common")?, f.get_str("minmax")?)?;
    Ok(())
}

fn parse_power(s: &mut ArtifactState<'_>, f: &Fields<'_>) -> Result<(), ParseError> {
    let art = s.records.current_mut()?;
    let hd = f.get_rand("hd")?;
    art.ac = f.get_int("ac")?;
    art.dd = hd.dice;
    art.ds = hd.sides;
    art.to_h = f.get_int("to-h")?;
    art.to_d = f.get_int("to-d")?;
    art.to_a = f.get_int("to-a")?;
    Ok(())
}

fn parse_flags_line(s: &mut ArtifactState<'_>, f: &Fields<'_>) -> Result<(), ParseError> {
    let art = s.records.current_mut()?;
    if let Some(flags) = f.opt_str("flags")? {
        ObjectFlagSet::parse(flags)?.apply(&mut art.flags, &mut art.el_info);
    }
    Ok(())
}

fn parse_effect(s: &mut ArtifactState<'_>, f: &Fields<'_>) -> Result<(), ParseError> {
    let art = s.records.current_mut()?;
    art.effect = Some(lookup_effect(f.get_sym("name")?)?);
    art.time = f.get_rand("time")?;
    Ok(())
}

fn parse_msg(s: &mut ArtifactState<'_>, f: &Fields<'_>) -> Result<(), ParseError> {
    append(&mut s.records.current_mut()?.effect_msg, f.get_str("text")?);
    Ok(())
}

fn parse_values_line(s: &mut ArtifactState<'_>, f: &Fields<'_>) -> Result<(), ParseError> {
    let art = s.records.current_mut()?;
    let values = parse_values(f.get_str("values")?)?;
    ValueTargets {
        modifiers: &mut art.modifiers,
        el_info: &mut art.el_info,
        brands: &mut art.brands,
        slays: &mut art.slays,
    }
    .apply(values, |v| v.is_fixed().then_some(v.base))
}

fn parse_desc(s: &mut ArtifactState<'_>, f: &Fields<'_>) -> Result<(), ParseError> {
    append(&mut s.records.current_mut()?.text, f.get_str("text")?);
    Ok(())
}

pub struct ArtifactParser;

impl FileParser for ArtifactParser {
    type State<'a> = ArtifactState<'a>;
    type Output = ArtifactTables;

    fn name(&self) -> &'static str {
        "artifact"
    }

    fn init<'a>(&self, content: &'a GameContent) -> Result<Parser<ArtifactState<'a>>, RegError> {
        let mut p = Parser::new(ArtifactState {
            bases: &content.object_bases,
            kinds: content.kinds.clone(),
            kinds_changed: false,
            cap: content.maxima.a_max,
            records: Records::new(),
        });
        reg_version(&mut p)?;
        p.reg("N int index str name", parse_name)?;
        p.reg("I sym tval sym sval", parse_info)?;
        p.reg("G char glyph sym color", parse_graphics)?;
        p.reg("W int level int rarity int weight int cost", parse_weight)?;
        p.reg("A int common str minmax", parse_alloc_line)?;
        p.reg("P int ac rand hd int to-h int to-d int to-a", parse_power)?;
        p.reg("F ?str flags", parse_flags_line)?;
        p.reg("E sym name rand time", parse_effect)?;
        p.reg("M str text", parse_msg)?;
        p.reg("values str values", parse_values_line)?;
        p.reg("D str text", parse_desc)?;
        Ok(p)
    }

    fn finish(&self, state: ArtifactState<'_>) -> Result<ArtifactTables, FinishError> {
        let artifacts = DenseTable::compact(state.records.finish(), "artifact")?;
        Ok(ArtifactTables {
            artifacts,
            kinds: state.kinds_changed.then_some(state.kinds),
        })
    }

    fn commit(&self, output: ArtifactTables, content: &mut GameContent) -> usize {
        let n = output.artifacts.count();
        Maxima::cover(&mut content.maxima.a_max, output.artifacts.len());
        content.artifacts = output.artifacts;
        if let Some(kinds) = output.kinds {
            Maxima::cover(&mut content.maxima.k_max, kinds.len());
            content.kinds = kinds;
            count_svals(&mut content.object_bases, &content.kinds);
        }
        n
    }

    fn cleanup(&self, content: &mut GameContent) {
        content.artifacts = DenseTable::default();
    }
}
