use serde::Serialize;
use strum::{EnumCount, EnumIter, FromRepr};

/// Random name word lists. Section 0 is unused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, EnumIter, EnumCount, FromRepr)]
#[repr(u8)]
pub enum NameSection {
    Tolkien = 1,
    Scroll = 2,
}

impl NameSection {
    /// Number of section slots, including the unused 0.
    pub const MAX: usize = 3;
}
