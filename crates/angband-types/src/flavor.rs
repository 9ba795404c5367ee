use serde::Serialize;

use crate::color::Color;
use crate::tval::Tval;

/// An unidentified appearance ("a Blue Potion") for a tval.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Flavor {
    pub fidx: usize,
    pub tval: Tval,
    /// Kind this flavor is fixed to, or `None` when assigned at random.
    pub sval: Option<i32>,
    pub glyph: char,
    pub color: Color,
    pub text: String,
}

impl Flavor {
    pub fn new(fidx: usize, tval: Tval, sval: Option<i32>) -> Self {
        Self {
            fidx,
            tval,
            sval,
            glyph: ' ',
            color: Color::White,
            text: String::new(),
        }
    }
}
