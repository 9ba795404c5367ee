//! Resolvers from names used in data files to internal codes and indices.

use angband_types::{
    Artifact, Brand, Color, Effect, Element, ElementFlags, ElementInfo, KindFlags, MonsterBase,
    ObjectFlags, ObjectKind, ObjectModifier, Random, Slay, Tval,
};
use bitflags::Flags;
use strum::EnumCount;

use crate::dice;
use crate::error::{ParseError, ParseErrorKind};
use crate::records::DenseTable;

/// Split a flag list on spaces and `|`.
pub fn flag_tokens(text: &str) -> impl Iterator<Item = &str> {
    text.split([' ', '|']).filter(|t| !t.is_empty())
}

/// Resolve every name in a flag list. Any unknown name fails the whole
/// list.
pub fn parse_flags<F: Flags + Copy>(text: &str) -> Result<F, ParseError> {
    flag_tokens(text).try_fold(F::empty(), |acc, name| {
        F::from_name(name)
            .map(|f| acc.union(f))
            .ok_or_else(|| ParseError::new(ParseErrorKind::InvalidFlag, name))
    })
}

/// A flag line for objects: object flags, kind flags, and `IGNORE_`/`HATES_`
/// element reactions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ObjectFlagSet {
    pub flags: ObjectFlags,
    pub kind_flags: KindFlags,
    pub elements: [ElementFlags; Element::COUNT],
}

impl ObjectFlagSet {
    pub fn parse(text: &str) -> Result<Self, ParseError> {
        let mut set = Self::default();
        for name in flag_tokens(text) {
            if let Some(f) = ObjectFlags::from_name(name) {
                set.flags |= f;
            } else if let Some(f) = KindFlags::from_name(name) {
                set.kind_flags |= f;
            } else if let Some((el, reaction)) = element_flag(name) {
                set.elements[el as usize] |= reaction;
            } else {
                return Err(ParseError::new(ParseErrorKind::InvalidFlag, name));
            }
        }
        Ok(set)
    }

    pub fn apply(&self, flags: &mut ObjectFlags, el_info: &mut [ElementInfo]) {
        *flags |= self.flags;
        for (info, reaction) in el_info.iter_mut().zip(self.elements) {
            info.flags |= reaction;
        }
    }
}

fn element_flag(name: &str) -> Option<(Element, ElementFlags)> {
    if let Some(el) = name.strip_prefix("IGNORE_") {
        el.parse().ok().map(|e| (e, ElementFlags::IGNORE))
    } else if let Some(el) = name.strip_prefix("HATES_") {
        el.parse().ok().map(|e| (e, ElementFlags::HATES))
    } else {
        None
    }
}

/// One property bound by a `values` line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ObjectValue {
    Modifier(ObjectModifier, Random),
    Resist(Element, i32),
    Brand(Element, i32),
    Slay(String, i32),
}

/// Parse `NAME[arg] | NAME[arg] ...`. A token is applied to every category
/// whose naming it matches; a token matching none is invalid.
pub fn parse_values(text: &str) -> Result<Vec<ObjectValue>, ParseError> {
    let mut out = Vec::new();
    for token in flag_tokens(text) {
        let invalid = || ParseError::new(ParseErrorKind::InvalidValue, token);
        let (name, arg) = dice::parse_value_token(token).ok_or_else(invalid)?;
        let before = out.len();

        if let Ok(m) = name.parse::<ObjectModifier>() {
            if let Some(v) = dice::parse_random(arg) {
                out.push(ObjectValue::Modifier(m, v));
            }
        }
        if let Some(el) = name.strip_prefix("RES_").and_then(|e| e.parse().ok()) {
            if let Ok(v) = arg.parse() {
                out.push(ObjectValue::Resist(el, v));
            }
        }
        if let Some(el) = name.strip_prefix("BRAND_").and_then(|e| e.parse().ok()) {
            if let Ok(v) = arg.parse() {
                out.push(ObjectValue::Brand(el, v));
            }
        }
        if let Some(base) = name.strip_prefix("SLAY_").filter(|b| !b.is_empty()) {
            if let Ok(v) = arg.parse() {
                out.push(ObjectValue::Slay(base.to_ascii_lowercase(), v));
            }
        }

        if out.len() == before {
            return Err(invalid());
        }
    }
    Ok(out)
}

/// Targets a `values` line writes into.
pub struct ValueTargets<'a, M> {
    pub modifiers: &'a mut [M],
    pub el_info: &'a mut [ElementInfo],
    pub brands: &'a mut Vec<Brand>,
    pub slays: &'a mut Vec<Slay>,
}

impl<M> ValueTargets<'_, M> {
    /// Write every value into its target, stopping at the first value its
    /// target cannot hold.
    pub fn apply(
        &mut self,
        values: Vec<ObjectValue>,
        modifier: impl Fn(Random) -> Option<M>,
    ) -> Result<(), ParseError> {
        for value in values {
            match value {
                ObjectValue::Modifier(m, v) => {
                    self.modifiers[m as usize] = modifier(v).ok_or_else(|| {
                        ParseError::new(ParseErrorKind::InvalidValue, format!("{m:?} cannot be {v:?}"))
                    })?;
                }
                ObjectValue::Resist(el, v) => {
                    self.el_info[el as usize].res_level = i16::try_from(v).map_err(|_| {
                        ParseError::new(ParseErrorKind::InvalidValue, format!("resistance {v} to {el:?}"))
                    })?;
                }
                ObjectValue::Brand(element, multiplier) => {
                    self.brands.retain(|b| b.element != element);
                    self.brands.push(Brand {
                        element,
                        multiplier,
                    });
                }
                ObjectValue::Slay(base, multiplier) => {
                    self.slays.retain(|s| s.base != base);
                    self.slays.push(Slay { base, multiplier });
                }
            }
        }
        Ok(())
    }
}

pub fn lookup_tval(name: &str) -> Result<Tval, ParseError> {
    Tval::find(name).ok_or_else(|| ParseError::new(ParseErrorKind::UnrecognisedTval, name))
}

pub fn lookup_effect(name: &str) -> Result<Effect, ParseError> {
    name.parse()
        .map_err(|_| ParseError::new(ParseErrorKind::InvalidEffect, name))
}

pub fn lookup_color(text: &str) -> Result<Color, ParseError> {
    Color::parse(text).ok_or_else(|| ParseError::new(ParseErrorKind::InvalidColor, text))
}

/// A kind name as players see it: no leading article marker, no plural
/// markers.
pub fn display_name(name: &str) -> String {
    name.strip_prefix("& ").unwrap_or(name).replace('~', "")
}

/// Find the sval of a kind, given either the number or the kind's name.
pub fn lookup_sval(kinds: &DenseTable<ObjectKind>, tval: Tval, name: &str) -> Option<i32> {
    if let Ok(n) = name.parse() {
        return Some(n);
    }
    kinds
        .iter()
        .find(|(_, k)| k.tval == Some(tval) && display_name(&k.name) == name)
        .map(|(_, k)| k.sval)
}

pub fn lookup_kind(kinds: &DenseTable<ObjectKind>, tval: Tval, sval: i32) -> Option<usize> {
    kinds
        .iter()
        .find(|(_, k)| k.is(tval, sval))
        .map(|(kidx, _)| kidx)
}

/// Resolve a tval/sval name pair to a kind index.
pub fn lookup_kind_by_name(
    kinds: &DenseTable<ObjectKind>,
    tval: &str,
    sval: &str,
) -> Result<(Tval, i32, usize), ParseError> {
    let tval = lookup_tval(tval)?;
    let unknown = || ParseError::new(ParseErrorKind::UnrecognisedSval, sval);
    let sval = lookup_sval(kinds, tval, sval).ok_or_else(unknown)?;
    let kidx = lookup_kind(kinds, tval, sval).ok_or_else(unknown)?;
    Ok((tval, sval, kidx))
}

pub fn lookup_monster_base(bases: &[MonsterBase], name: &str) -> Option<usize> {
    bases.iter().position(|b| b.name == name)
}

/// An artifact by exact name, else the first whose name contains `name`
/// ignoring case.
pub fn lookup_artifact_name(artifacts: &DenseTable<Artifact>, name: &str) -> Option<usize> {
    let exact = artifacts.iter().find(|(_, a)| a.name == name);
    let needle = name.to_lowercase();
    exact
        .or_else(|| {
            artifacts
                .iter()
                .find(|(_, a)| a.name.to_lowercase().contains(&needle))
        })
        .map(|(aidx, _)| aidx)
}
