use serde::Serialize;
use strum::{EnumCount, EnumIter, FromRepr};

/// The basic display colors, in the order their single-character codes are
/// assigned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, EnumIter, EnumCount, FromRepr)]
#[repr(u8)]
pub enum Color {
    Dark = 0,
    White = 1,
    Slate = 2,
    Orange = 3,
    Red = 4,
    Green = 5,
    Blue = 6,
    Umber = 7,
    LightDark = 8,
    LightSlate = 9,
    LightPurple = 10,
    Yellow = 11,
    LightRed = 12,
    LightGreen = 13,
    LightBlue = 14,
    LightUmber = 15,
    Purple = 16,
    Violet = 17,
    Teal = 18,
    Mud = 19,
    LightYellow = 20,
    MagentaPink = 21,
    LightTeal = 22,
    LightViolet = 23,
    LightPink = 24,
    Mustard = 25,
    BlueSlate = 26,
    DeepLightBlue = 27,
}

const COLOR_TABLE: [(char, &str); Color::COUNT] = [
    ('d', "Dark"),
    ('w', "White"),
    ('s', "Slate"),
    ('o', "Orange"),
    ('r', "Red"),
    ('g', "Green"),
    ('b', "Blue"),
    ('u', "Umber"),
    ('D', "Light Dark"),
    ('W', "Light Slate"),
    ('P', "Light Purple"),
    ('y', "Yellow"),
    ('R', "Light Red"),
    ('G', "Light Green"),
    ('B', "Light Blue"),
    ('U', "Light Umber"),
    ('p', "Purple"),
    ('v', "Violet"),
    ('t', "Teal"),
    ('m', "Mud"),
    ('Y', "Light Yellow"),
    ('i', "Magenta-Pink"),
    ('T', "Light Teal"),
    ('V', "Light Violet"),
    ('I', "Light Pink"),
    ('M', "Mustard"),
    ('z', "Blue Slate"),
    ('Z', "Deep Light Blue"),
];

impl Color {
    pub const MAX: usize = 28;

    /// The single-character code used in data files.
    pub const fn code(self) -> char {
        COLOR_TABLE[self as usize].0
    }

    pub const fn name(self) -> &'static str {
        COLOR_TABLE[self as usize].1
    }

    /// Look a color up by its single-character code. Codes are case
    /// sensitive: `r` is red, `R` is light red.
    pub fn from_code(c: char) -> Option<Self> {
        COLOR_TABLE
            .iter()
            .position(|&(code, _)| code == c)
            .and_then(|i| Self::from_repr(i as u8))
    }

    /// Look a color up by its full name, ignoring case.
    pub fn from_name(name: &str) -> Option<Self> {
        COLOR_TABLE
            .iter()
            .position(|&(_, n)| n.eq_ignore_ascii_case(name))
            .and_then(|i| Self::from_repr(i as u8))
    }

    /// Resolve a color field: a single character is a code, anything longer
    /// is a full name.
    pub fn parse(text: &str) -> Option<Self> {
        let mut chars = text.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Self::from_code(c),
            (Some(_), Some(_)) => Self::from_name(text),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn count() {
        assert_eq!(Color::COUNT, Color::MAX);
    }

    #[test]
    fn discriminants() {
        assert_eq!(Color::Dark as u8, 0);
        assert_eq!(Color::White as u8, 1);
        assert_eq!(Color::Violet as u8, 17);
        assert_eq!(Color::DeepLightBlue as u8, 27);
    }

    #[test]
    fn codes_are_unique() {
        for c in Color::iter() {
            assert_eq!(Color::from_code(c.code()), Some(c));
        }
    }

    #[test]
    fn names_ignore_case() {
        assert_eq!(Color::from_name("light red"), Some(Color::LightRed));
        assert_eq!(Color::from_name("MAGENTA-PINK"), Some(Color::MagentaPink));
        assert_eq!(Color::from_name("chartreuse"), None);
    }

    #[test]
    fn parse_code_or_name() {
        assert_eq!(Color::parse("v"), Some(Color::Violet));
        assert_eq!(Color::parse("R"), Some(Color::LightRed));
        assert_eq!(Color::parse("Umber"), Some(Color::Umber));
        assert_eq!(Color::parse("x"), None);
        assert_eq!(Color::parse(""), None);
    }
}
