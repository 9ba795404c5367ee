use serde::Serialize;

/// A randomised quantity: `base + dice`d`sides` plus an `m_bonus` that scales
/// with dungeon level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub struct Random {
    pub base: i32,
    pub dice: i32,
    pub sides: i32,
    pub m_bonus: i32,
}

impl Random {
    pub const ZERO: Self = Self::new(0, 0, 0, 0);

    pub const fn new(base: i32, dice: i32, sides: i32, m_bonus: i32) -> Self {
        Self {
            base,
            dice,
            sides,
            m_bonus,
        }
    }

    pub const fn fixed(base: i32) -> Self {
        Self::new(base, 0, 0, 0)
    }

    /// True when only the base is set.
    pub const fn is_fixed(&self) -> bool {
        self.dice == 0 && self.sides == 0 && self.m_bonus == 0
    }

    /// True when the value can differ between two rolls.
    pub const fn is_variable(&self) -> bool {
        (self.dice != 0 && self.sides > 1) || self.m_bonus != 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_is_not_variable() {
        assert!(!Random::fixed(5).is_variable());
        assert!(!Random::new(0, 3, 1, 0).is_variable());
        assert!(Random::new(0, 2, 6, 0).is_variable());
        assert!(Random::new(0, 0, 0, 10).is_variable());
        assert!(Random::fixed(-3).is_fixed());
        assert!(!Random::new(0, 3, 1, 0).is_fixed());
    }
}
