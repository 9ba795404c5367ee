//! One loader per data file. Each loader registers its directives on a
//! fresh [`Parser`], turns the accumulated records into a table when the
//! file is done, and commits that table into [`GameContent`].

use angband_types::{Allocation, Maxima};

use crate::dice;
use crate::error::{FinishError, ParseError, ParseErrorKind, RegError};
use crate::parser::{Fields, Parser};
use crate::registry::GameContent;

pub mod artifact;
pub mod body;
pub mod ego_item;
pub mod flavor;
pub mod hints;
pub mod history;
pub mod limits;
pub mod monster;
pub mod monster_base;
pub mod names;
pub mod object;
pub mod object_base;
pub mod pain;
pub mod pit;
pub mod player_class;
pub mod player_race;
pub mod spell;
pub mod terrain;
pub mod trap;
pub mod vault;

pub use artifact::ArtifactParser;
pub use body::BodyParser;
pub use ego_item::EgoItemParser;
pub use flavor::FlavorParser;
pub use hints::HintsParser;
pub use history::HistoryParser;
pub use limits::LimitsParser;
pub use monster::MonsterParser;
pub use monster_base::MonsterBaseParser;
pub use names::NamesParser;
pub use object::ObjectParser;
pub use object_base::ObjectBaseParser;
pub use pain::PainParser;
pub use pit::PitParser;
pub use player_class::ClassParser;
pub use player_race::RaceParser;
pub use spell::SpellParser;
pub use terrain::TerrainParser;
pub use trap::TrapParser;
pub use vault::VaultParser;

/// A loader for one data file.
///
/// The state may borrow tables committed by earlier loaders; the output
/// may not, so it can be committed once parsing is over.
pub trait FileParser {
    type State<'a>;
    type Output;

    /// File name without the `.txt` extension.
    fn name(&self) -> &'static str;

    /// Build a parser with every directive of the file registered.
    fn init<'a>(&self, content: &'a GameContent) -> Result<Parser<Self::State<'a>>, RegError>;

    /// Turn the accumulated state into the finished table.
    fn finish(&self, state: Self::State<'_>) -> Result<Self::Output, FinishError>;

    /// Store the finished table, returning how many records it holds.
    fn commit(&self, output: Self::Output, content: &mut GameContent) -> usize;

    /// Drop whatever this loader committed.
    fn cleanup(&self, content: &mut GameContent);
}

/// Handler for directives that are accepted and discarded.
pub(crate) fn ignored<S>(_: &mut S, f: &Fields<'_>) -> Result<(), ParseError> {
    if let Ok(version) = f.get_sym("version") {
        log::debug!("ignoring version line {version}");
    }
    Ok(())
}

/// Register the `V` version line every file may carry.
pub(crate) fn reg_version<S>(p: &mut Parser<S>) -> Result<(), RegError> {
    p.reg("V sym version", ignored::<S>)
}

/// Fail when a header id is negative, or at or above the limit declared
/// in `limits.txt` (or [`Maxima::ID_CEILING`] when none was declared).
pub(crate) fn check_cap(cap: usize, id: i64) -> Result<(), ParseError> {
    match usize::try_from(id) {
        Ok(id) if Maxima::allows(cap, id) => Ok(()),
        _ => Err(ParseError::new(
            ParseErrorKind::OutOfBounds,
            match cap {
                0 => format!("index {id} exceeds {}", Maxima::ID_CEILING),
                cap => format!("index {id} exceeds limit {cap}"),
            },
        )),
    }
}

/// [`check_cap`] for tables `limits.txt` has no entry for.
pub(crate) fn check_id(id: i64) -> Result<(), ParseError> {
    check_cap(0, id)
}

/// Parse `A:<common>:<min> to <max>`.
pub(crate) fn parse_alloc(common: i32, minmax: &str) -> Result<Allocation, ParseError> {
    let (min, max) = dice::parse_range(minmax)
        .ok_or_else(|| ParseError::new(ParseErrorKind::InvalidAllocation, minmax))?;
    let in_range = |v: i32| (0..=255).contains(&v);
    if !in_range(common) || !in_range(min) || !in_range(max) || min > max {
        return Err(ParseError::new(
            ParseErrorKind::OutOfBounds,
            format!("{common}:{minmax}"),
        ));
    }
    Ok(Allocation {
        prob: common,
        min,
        max,
    })
}

/// Append a text line to a field built up over several lines.
pub(crate) fn append(field: &mut String, text: &str) {
    field.push_str(text);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn caps() {
        assert!(check_cap(0, 900).is_ok());
        assert!(check_cap(10, 9).is_ok());
        assert_eq!(check_cap(10, 10).unwrap_err().kind, ParseErrorKind::OutOfBounds);
        assert_eq!(check_cap(10, -1).unwrap_err().kind, ParseErrorKind::OutOfBounds);
        assert_eq!(
            check_cap(0, 4_000_000_000).unwrap_err().kind,
            ParseErrorKind::OutOfBounds
        );
    }

    #[test]
    fn alloc_ranges() {
        assert_eq!(
            parse_alloc(3, "5 to 10").unwrap(),
            Allocation {
                prob: 3,
                min: 5,
                max: 10
            }
        );
        for (common, minmax) in [(3, "5 to 300"), (300, "5 to 10"), (3, "10 to 5"), (-1, "1 to 2")] {
            assert_eq!(
                parse_alloc(common, minmax).unwrap_err().kind,
                ParseErrorKind::OutOfBounds,
                "{common}:{minmax}"
            );
        }
        assert_eq!(
            parse_alloc(3, "5-10").unwrap_err().kind,
            ParseErrorKind::InvalidAllocation
        );
    }
}
