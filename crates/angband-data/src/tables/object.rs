//! `object.txt`: object kinds. A kind inherits its base's flags when its
//! tval is bound.

use angband_types::{Maxima, ObjectBase, ObjectKind};

use crate::error::{FinishError, ParseError, ParseErrorKind, RegError};
use crate::lookup::{ObjectFlagSet, ValueTargets, lookup_color, lookup_effect, lookup_tval, parse_values};
use crate::parser::{Fields, Parser};
use crate::records::{DenseTable, Records};
use crate::registry::GameContent;

use super::{FileParser, append, check_cap, parse_alloc, reg_version};

pub struct KindState<'a> {
    bases: &'a DenseTable<ObjectBase>,
    cap: usize,
    records: Records<ObjectKind>,
}

fn parse_name(s: &mut KindState<'_>, f: &Fields<'_>) -> Result<(), ParseError> {
    let idx = i64::from(f.get_int("index")?);
    check_cap(s.cap, idx)?;
    let kidx = usize::try_from(idx).unwrap_or_default();
    s.records
        .begin(idx, ObjectKind::new(kidx, f.get_str("name")?))?;
    Ok(())
}

fn parse_graphics(s: &mut KindState<'_>, f: &Fields<'_>) -> Result<(), ParseError> {
    let kind = s.records.current_mut()?;
    kind.glyph = f.get_char("glyph")?;
    kind.color = lookup_color(f.get_sym("color")?)?;
    Ok(())
}

fn parse_type(s: &mut KindState<'_>, f: &Fields<'_>) -> Result<(), ParseError> {
    let tval = lookup_tval(f.get_sym("tval")?)?;
    let base = s
        .bases
        .get(tval as usize)
        .ok_or_else(|| ParseError::new(ParseErrorKind::UnrecognisedTval, tval.name()))?;
    let kind = s.records.current_mut()?;
    kind.tval = Some(tval);
    kind.sval = f.get_int("sval")?;
    kind.flags |= base.flags;
    kind.kind_flags |= base.kind_flags;
    kind.el_info = base.el_info;
    Ok(())
}

fn parse_info(s: &mut KindState<'_>, f: &Fields<'_>) -> Result<(), ParseError> {
    let kind = s.records.current_mut()?;
    kind.level = f.get_int("level")?;
    kind.weight = f.get_int("weight")?;
    kind.cost = f.get_int("cost")?;
    Ok(())
}

fn parse_alloc_line(s: &mut KindState<'_>, f: &Fields<'_>) -> Result<(), ParseError> {
    let kind = s.records.current_mut()?;
    kind.alloc = parse_alloc(f.get_int("common")?, f.get_str("minmax")?)?;
    Ok(())
}

fn parse_power(s: &mut KindState<'_>, f: &Fields<'_>) -> Result<(), ParseError> {
    let kind = s.records.current_mut()?;
    let hd = f.get_rand("hd")?;
    kind.ac = f.get_int("ac")?;
    kind.dd = hd.dice;
    kind.ds = hd.sides;
    kind.to_h = f.get_rand("to-h")?;
    kind.to_d = f.get_rand("to-d")?;
    kind.to_a = f.get_rand("to-a")?;
    Ok(())
}

fn parse_charges(s: &mut KindState<'_>, f: &Fields<'_>) -> Result<(), ParseError> {
    s.records.current_mut()?.charge = f.get_rand("charges")?;
    Ok(())
}

fn parse_pile(s: &mut KindState<'_>, f: &Fields<'_>) -> Result<(), ParseError> {
    let kind = s.records.current_mut()?;
    kind.gen_mult_prob = f.get_int("prob")?;
    kind.stack_size = f.get_rand("stack")?;
    Ok(())
}

fn parse_flags_line(s: &mut KindState<'_>, f: &Fields<'_>) -> Result<(), ParseError> {
    let kind = s.records.current_mut()?;
    if let Some(flags) = f.opt_str("flags")? {
        let set = ObjectFlagSet::parse(flags)?;
        set.apply(&mut kind.flags, &mut kind.el_info);
        kind.kind_flags |= set.kind_flags;
    }
    Ok(())
}

fn parse_effect(s: &mut KindState<'_>, f: &Fields<'_>) -> Result<(), ParseError> {
    let kind = s.records.current_mut()?;
    kind.effect = Some(lookup_effect(f.get_sym("name")?)?);
    if let Some(time) = f.opt_rand("time")? {
        kind.time = time;
    }
    Ok(())
}

fn parse_values_line(s: &mut KindState<'_>, f: &Fields<'_>) -> Result<(), ParseError> {
    let kind = s.records.current_mut()?;
    let values = parse_values(f.get_str("values")?)?;
    ValueTargets {
        modifiers: &mut kind.modifiers,
        el_info: &mut kind.el_info,
        brands: &mut kind.brands,
        slays: &mut kind.slays,
    }
    .apply(values, Some)
}

fn parse_desc(s: &mut KindState<'_>, f: &Fields<'_>) -> Result<(), ParseError> {
    append(&mut s.records.current_mut()?.text, f.get_str("text")?);
    Ok(())
}

fn parse_pval(s: &mut KindState<'_>, f: &Fields<'_>) -> Result<(), ParseError> {
    s.records.current_mut()?.pval = f.get_rand("pval")?;
    Ok(())
}

/// Record the highest sval of each tval on its base.
pub(crate) fn count_svals(bases: &mut DenseTable<ObjectBase>, kinds: &DenseTable<ObjectKind>) {
    for (_, base) in bases.iter_mut() {
        base.num_svals = kinds
            .iter()
            .filter(|(_, k)| k.tval == Some(base.tval))
            .map(|(_, k)| k.sval)
            .max()
            .unwrap_or(0);
    }
}

pub struct ObjectParser;

impl FileParser for ObjectParser {
    type State<'a> = KindState<'a>;
    type Output = DenseTable<ObjectKind>;

    fn name(&self) -> &'static str {
        "object"
    }

    fn init<'a>(&self, content: &'a GameContent) -> Result<Parser<KindState<'a>>, RegError> {
        let mut p = Parser::new(KindState {
            bases: &content.object_bases,
            cap: content.maxima.k_max,
            records: Records::new(),
        });
        reg_version(&mut p)?;
        p.reg("N int index str name", parse_name)?;
        p.reg("G char glyph sym color", parse_graphics)?;
        p.reg("I sym tval int sval", parse_type)?;
        p.reg("W int level int extra int weight int cost", parse_info)?;
        p.reg("A int common str minmax", parse_alloc_line)?;
        p.reg("P int ac rand hd rand to-h rand to-d rand to-a", parse_power)?;
        p.reg("C rand charges", parse_charges)?;
        p.reg("M int prob rand stack", parse_pile)?;
        p.reg("F ?str flags", parse_flags_line)?;
        p.reg("E sym name ?rand time", parse_effect)?;
        p.reg("values str values", parse_values_line)?;
        p.reg("D str text", parse_desc)?;
        p.reg("pval rand pval", parse_pval)?;
        Ok(p)
    }

    fn finish(&self, state: KindState<'_>) -> Result<Self::Output, FinishError> {
        DenseTable::compact(state.records.finish(), "object")
    }

    fn commit(&self, output: Self::Output, content: &mut GameContent) -> usize {
        let n = output.count();
        Maxima::cover(&mut content.maxima.k_max, output.len());
        content.kinds = output;
        count_svals(&mut content.object_bases, &content.kinds);
        n
    }

    fn cleanup(&self, content: &mut GameContent) {
        content.kinds = DenseTable::default();
    }
}
