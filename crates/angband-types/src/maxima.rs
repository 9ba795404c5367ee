use serde::Serialize;

/// Declared table limits from `limits.txt`. Zero means "not declared".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct Maxima {
    pub f_max: usize,
    pub k_max: usize,
    pub a_max: usize,
    pub e_max: usize,
    pub r_max: usize,
    pub mp_max: usize,
    pub s_max: usize,
    pub o_max: usize,
    pub m_max: usize,
    pub pit_max: usize,
}

impl Maxima {
    pub const NONE: Self = Self {
        f_max: 0,
        k_max: 0,
        a_max: 0,
        e_max: 0,
        r_max: 0,
        mp_max: 0,
        s_max: 0,
        o_max: 0,
        m_max: 0,
        pit_max: 0,
    };

    /// Set a limit by its single-letter label.
    pub fn set(&mut self, label: &str, value: usize) -> bool {
        let slot = match label {
            "F" => &mut self.f_max,
            "K" => &mut self.k_max,
            "A" => &mut self.a_max,
            "E" => &mut self.e_max,
            "R" => &mut self.r_max,
            "P" => &mut self.mp_max,
            "S" => &mut self.s_max,
            "O" => &mut self.o_max,
            "M" => &mut self.m_max,
            "I" => &mut self.pit_max,
            _ => return false,
        };
        *slot = value;
        true
    }

    /// Highest record id accepted by a table with no declared cap.
    pub const ID_CEILING: usize = u16::MAX as usize;

    /// Whether `id` fits under a declared cap, or under [`Self::ID_CEILING`]
    /// when none was declared.
    pub fn allows(cap: usize, id: usize) -> bool {
        match cap {
            0 => id <= Self::ID_CEILING,
            cap => id < cap,
        }
    }

    /// Grow a limit to cover a table of `len` slots.
    pub fn cover(limit: &mut usize, len: usize) {
        *limit = (*limit).max(len);
    }
}
