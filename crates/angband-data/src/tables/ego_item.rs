//! `ego_item.txt`: ego item templates and the kinds each may appear on.

use angband_types::{EGO_TVALS_MAX, EgoItem, EgoTvalRange, Maxima, ObjectKind, Tval};

use crate::error::{FinishError, ParseError, ParseErrorKind, RegError};
use crate::lookup::{ObjectFlagSet, ValueTargets, lookup_kind_by_name, lookup_tval, parse_values};
use crate::parser::{Fields, Parser};
use crate::records::{DenseTable, Records};
use crate::registry::GameContent;

use super::{FileParser, append, check_cap, parse_alloc, reg_version};

pub struct EgoState<'a> {
    kinds: &'a DenseTable<ObjectKind>,
    cap: usize,
    records: Records<EgoItem>,
}

fn parse_name(s: &mut EgoState<'_>, f: &Fields<'_>) -> Result<(), ParseError> {
    let idx = i64::from(f.get_int("index")?);
    check_cap(s.cap, idx)?;
    let eidx = usize::try_from(idx).unwrap_or_default();
    s.records.begin(idx, EgoItem::new(eidx, f.get_str("name")?))?;
    Ok(())
}

fn parse_info(s: &mut EgoState<'_>, f: &Fields<'_>) -> Result<(), ParseError> {
    let ego = s.records.current_mut()?;
    ego.level = f.get_int("level")?;
    ego.rarity = f.get_int("rarity")?;
    ego.cost = f.get_int("cost")?;
    Ok(())
}

fn parse_alloc_line(s: &mut EgoState<'_>, f: &Fields<'_>) -> Result<(), ParseError> {
    let ego = s.records.current_mut()?;
    ego.alloc = parse_alloc(f.get_int("common")?, f.get_str("minmax")?)?;
    Ok(())
}

fn parse_extra(s: &mut EgoState<'_>, f: &Fields<'_>) -> Result<(), ParseError> {
    let ego = s.records.current_mut()?;
    ego.rating = f.get_int("rating")?;
    ego.xtra = f.get_int("xtra")?;
    Ok(())
}

/// Add every kind of `tval` with an sval in `min..=max` to the ego.
fn add_kinds(
    kinds: &DenseTable<ObjectKind>,
    ego: &mut EgoItem,
    tval: Tval,
    min: i32,
    max: i32,
) -> Result<(), ParseError> {
    let mut found = false;
    for (kidx, kind) in kinds.iter() {
        if kind.tval != Some(tval) || !(min..=max).contains(&kind.sval) {
            continue;
        }
        found = true;
        if !ego.poss_items.contains(&kidx) {
            ego.poss_items.push(kidx);
        }
    }
    if !found {
        return Err(ParseError::new(
            ParseErrorKind::NoKindForEgoType,
            format!("{} {min} to {max}", tval.name()),
        ));
    }
    Ok(())
}

fn parse_tval_range(s: &mut EgoState<'_>, f: &Fields<'_>) -> Result<(), ParseError> {
    let kinds = s.kinds;
    let ego = s.records.current_mut()?;
    if ego.tvals.len() >= EGO_TVALS_MAX {
        return Err(ParseError::new(
            ParseErrorKind::TooManyEntries,
            format!("more than {EGO_TVALS_MAX} tval ranges"),
        ));
    }
    let tval = lookup_tval(f.get_sym("tval")?)?;
    let min_sval = f.get_int("min-sval")?;
    let max_sval = f.get_int("max-sval")?;
    add_kinds(kinds, ego, tval, min_sval, max_sval)?;
    ego.tvals.push(EgoTvalRange {
        tval,
        min_sval,
        max_sval,
    });
    Ok(())
}

fn parse_type(s: &mut EgoState<'_>, f: &Fields<'_>) -> Result<(), ParseError> {
    let kinds = s.kinds;
    let ego = s.records.current_mut()?;
    let tval = lookup_tval(f.get_sym("tval")?)?;
    add_kinds(kinds, ego, tval, i32::MIN, i32::MAX)
}

fn parse_item(s: &mut EgoState<'_>, f: &Fields<'_>) -> Result<(), ParseError> {
    let kinds = s.kinds;
    let ego = s.records.current_mut()?;
    let (_, _, kidx) = lookup_kind_by_name(kinds, f.get_sym("tval")?, f.get_sym("sval")?)?;
    if !ego.poss_items.contains(&kidx) {
        ego.poss_items.push(kidx);
    }
    Ok(())
}

fn parse_combat(s: &mut EgoState<'_>, f: &Fields<'_>) -> Result<(), ParseError> {
    let ego = s.records.current_mut()?;
    ego.to_h = f.get_rand("th")?;
    ego.to_d = f.get_rand("td")?;
    ego.to_a = f.get_rand("ta")?;
    Ok(())
}

fn parse_min_combat(s: &mut EgoState<'_>, f: &Fields<'_>) -> Result<(), ParseError> {
    let ego = s.records.current_mut()?;
    ego.min_to_h = f.get_int("th")?;
    ego.min_to_d = f.get_int("td")?;
    ego.min_to_a = f.get_int("ta")?;
    Ok(())
}

fn parse_flags_line(s: &mut EgoState<'_>, f: &Fields<'_>) -> Result<(), ParseError> {
    let ego = s.records.current_mut()?;
    if let Some(flags) = f.opt_str("flags")? {
        let set = ObjectFlagSet::parse(flags)?;
        set.apply(&mut ego.flags, &mut ego.el_info);
        ego.kind_flags |= set.kind_flags;
    }
    Ok(())
}

fn parse_values_line(s: &mut EgoState<'_>, f: &Fields<'_>) -> Result<(), ParseError> {
    let ego = s.records.current_mut()?;
    let values = parse_values(f.get_str("values")?)?;
    ValueTargets {
        modifiers: &mut ego.modifiers,
        el_info: &mut ego.el_info,
        brands: &mut ego.brands,
        slays: &mut ego.slays,
    }
    .apply(values, Some)
}

fn parse_desc(s: &mut EgoState<'_>, f: &Fields<'_>) -> Result<(), ParseError> {
    append(&mut s.records.current_mut()?.text, f.get_str("text")?);
    Ok(())
}

pub struct EgoItemParser;

impl FileParser for EgoItemParser {
    type State<'a> = EgoState<'a>;
    type Output = DenseTable<EgoItem>;

    fn name(&self) -> &'static str {
        "ego_item"
    }

    fn init<'a>(&self, content: &'a GameContent) -> Result<Parser<EgoState<'a>>, RegError> {
        let mut p = Parser::new(EgoState {
            kinds: &content.kinds,
            cap: content.maxima.e_max,
            records: Records::new(),
        });
        reg_version(&mut p)?;
        p.reg("N int index str name", parse_name)?;
        p.reg("W int level int rarity int pad int cost", parse_info)?;
        p.reg("A int common str minmax", parse_alloc_line)?;
        p.reg("X int rating int xtra", parse_extra)?;
        p.reg("T sym tval int min-sval int max-sval", parse_tval_range)?;
        p.reg("type sym tval", parse_type)?;
        p.reg("item sym tval sym sval", parse_item)?;
        p.reg("C rand th rand td rand ta", parse_combat)?;
        p.reg("M int th int td int ta", parse_min_combat)?;
        p.reg("F ?str flags", parse_flags_line)?;
        p.reg("values str values", parse_values_line)?;
        p.reg("D str text", parse_desc)?;
        Ok(p)
    }

    fn finish(&self, state: EgoState<'_>) -> Result<Self::Output, FinishError> {
        DenseTable::compact(state.records.finish(), "ego_item")
    }

    fn commit(&self, output: Self::Output, content: &mut GameContent) -> usize {
        let n = output.count();
        Maxima::cover(&mut content.maxima.e_max, output.len());
        content.egos = output;
        n
    }

    fn cleanup(&self, content: &mut GameContent) {
        content.egos = DenseTable::default();
    }
}
