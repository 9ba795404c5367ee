//! `vault.txt`: hand-designed rooms.

use angband_types::Vault;

use crate::error::{FinishError, ParseError, ParseErrorKind, RegError};
use crate::parser::{Fields, Parser};
use crate::records::{DenseTable, Records};
use crate::registry::GameContent;

use super::{FileParser, append, check_id, reg_version};

fn parse_name(s: &mut Records<Vault>, f: &Fields<'_>) -> Result<(), ParseError> {
    let idx = f.get_uint("index")?;
    check_id(i64::from(idx))?;
    s.begin(i64::from(idx), Vault::new(idx as usize, f.get_str("name")?))?;
    Ok(())
}

fn parse_info(s: &mut Records<Vault>, f: &Fields<'_>) -> Result<(), ParseError> {
    let vault = s.current_mut()?;
    let typ = f.get_uint("type")?;
    let rows = f.get_uint("height")?;
    let cols = f.get_uint("width")?;
    if let Some((max_rows, max_cols)) = Vault::max_size(typ) {
        if rows > max_rows || cols > max_cols {
            return Err(ParseError::new(
                ParseErrorKind::VaultTooBig,
                format!("{cols}x{rows} exceeds {max_cols}x{max_rows}"),
            ));
        }
    }
    vault.typ = typ;
    vault.rating = f.get_int("rating")?;
    vault.rows = rows;
    vault.cols = cols;
    Ok(())
}

fn parse_text(s: &mut Records<Vault>, f: &Fields<'_>) -> Result<(), ParseError> {
    append(&mut s.current_mut()?.text, f.get_str("text")?);
    Ok(())
}

pub struct VaultParser;

impl FileParser for VaultParser {
    type State<'a> = Records<Vault>;
    type Output = DenseTable<Vault>;

    fn name(&self) -> &'static str {
        "vault"
    }

    fn init<'a>(&self, _: &'a GameContent) -> Result<Parser<Records<Vault>>, RegError> {
        let mut p = Parser::new(Records::new());
        reg_version(&mut p)?;
        p.reg("N uint index str name", parse_name)?;
        p.reg("X uint type int rating uint height uint width", parse_info)?;
        p.reg("D str text", parse_text)?;
        Ok(p)
    }

    fn finish(&self, state: Records<Vault>) -> Result<Self::Output, FinishError> {
        DenseTable::compact(state.finish(), "vault")
    }

    fn commit(&self, output: Self::Output, content: &mut GameContent) -> usize {
        let n = output.count();
        content.vaults = output;
        n
    }

    fn cleanup(&self, content: &mut GameContent) {
        content.vaults = DenseTable::default();
    }
}
