use serde::Serialize;

/// Lesser vault room type and its largest allowed size.
pub const VAULT_LESSER: u32 = 6;
pub const VAULT_LESSER_MAX: (u32, u32) = (22, 33);
/// Greater vault room type and its largest allowed size.
pub const VAULT_GREATER: u32 = 7;
pub const VAULT_GREATER_MAX: (u32, u32) = (44, 66);

/// A hand-designed room. `text` holds the map rows concatenated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Vault {
    pub vidx: usize,
    pub name: String,
    pub typ: u32,
    pub rating: i32,
    pub rows: u32,
    pub cols: u32,
    pub text: String,
}

impl Vault {
    pub fn new(vidx: usize, name: impl Into<String>) -> Self {
        Self {
            vidx,
            name: name.into(),
            typ: 0,
            rating: 0,
            rows: 0,
            cols: 0,
            text: String::new(),
        }
    }

    /// Largest (rows, cols) a vault of this type may declare, if limited.
    pub fn max_size(typ: u32) -> Option<(u32, u32)> {
        match typ {
            VAULT_LESSER => Some(VAULT_LESSER_MAX),
            VAULT_GREATER => Some(VAULT_GREATER_MAX),
            _ => None,
        }
    }

    /// Map row `y`, when the text holds complete rows.
    pub fn row(&self, y: u32) -> Option<&str> {
        let cols = self.cols as usize;
        let start = y as usize * cols;
        self.text.get(start..start + cols)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rows_slice_text() {
        let mut v = Vault::new(1, "Lesser vault (cross)");
        v.cols = 3;
        v.rows = 2;
        v.text = "#.##.#".into();
        assert_eq!(v.row(0), Some("#.#"));
        assert_eq!(v.row(1), Some("#.#"));
        assert_eq!(v.row(2), None);
    }
}
