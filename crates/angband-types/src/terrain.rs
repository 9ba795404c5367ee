use bitflags::bitflags;
use serde::Serialize;

use crate::color::Color;
use crate::effect::Effect;

bitflags! {
    /// Terrain feature flags from `terrain.txt`.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
    pub struct TerrainFlags: u16 {
        const PWALK     = 1 << 0;
        const PPASS     = 1 << 1;
        const MWALK     = 1 << 2;
        const MPASS     = 1 << 3;
        const LOOK      = 1 << 4;
        const DIG       = 1 << 5;
        const DOOR      = 1 << 6;
        const EXIT_UP   = 1 << 7;
        const EXIT_DOWN = 1 << 8;
        const PERM      = 1 << 9;
        const TRAP      = 1 << 10;
        const SHOP      = 1 << 11;
        const HIDDEN    = 1 << 12;
        const BORING    = 1 << 13;
    }
}

/// A terrain feature.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Feature {
    pub fidx: usize,
    pub name: String,
    /// Feature this one is displayed as; itself unless overridden.
    pub mimic: usize,
    pub priority: u32,
    pub glyph: char,
    pub color: Color,
    pub flags: TerrainFlags,
    pub locked: i32,
    pub jammed: i32,
    pub shopnum: i32,
    pub dig: i32,
    pub effect: Option<Effect>,
}

impl Feature {
    pub fn new(fidx: usize, name: impl Into<String>) -> Self {
        Self {
            fidx,
            name: name.into(),
            mimic: fidx,
            priority: 0,
            glyph: ' ',
            color: Color::White,
            flags: TerrainFlags::empty(),
            locked: 0,
            jammed: 0,
            shopnum: 0,
            dig: 0,
            effect: None,
        }
    }

    pub fn is_passable(&self) -> bool {
        self.flags.contains(TerrainFlags::PWALK)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_mimics_itself() {
        let f = Feature::new(7, "granite wall");
        assert_eq!(f.mimic, 7);
        assert!(!f.is_passable());
    }
}
