//! `p_hist.txt`: character background charts. Each `N` line starts one
//! entry of a chart; an entry's `next` may name a chart further down the
//! file, so successors are resolved only once the whole file is read.

use angband_types::{HistoryChart, HistoryEntry};

use crate::error::{FinishError, ParseError, ParseErrorKind, RegError};
use crate::parser::{Fields, Parser};
use crate::records::Records;
use crate::registry::GameContent;

use super::{FileParser, append, reg_version};

fn parse_entry(s: &mut Records<(u32, HistoryEntry)>, f: &Fields<'_>) -> Result<(), ParseError> {
    let chart = f.get_uint("chart")?;
    let next = f.get_int("next")?;
    let next = u32::try_from(next)
        .map_err(|_| ParseError::new(ParseErrorKind::InvalidValue, format!("next chart {next}")))?;
    let entry = HistoryEntry {
        next,
        succ: None,
        roll: f.get_int("roll")?,
        bonus: f.get_int("bonus")?,
        text: String::new(),
    };
    s.push((chart, entry));
    Ok(())
}

fn parse_text(s: &mut Records<(u32, HistoryEntry)>, f: &Fields<'_>) -> Result<(), ParseError> {
    append(&mut s.current_mut()?.1.text, f.get_str("text")?);
    Ok(())
}

/// Group entries into charts in order of first appearance and point every
/// entry at its successor chart.
fn link(entries: Vec<(u32, HistoryEntry)>) -> Result<Vec<HistoryChart>, FinishError> {
    let mut charts: Vec<HistoryChart> = Vec::new();
    for (idx, entry) in entries {
        match charts.iter_mut().find(|c| c.idx == idx) {
            Some(chart) => chart.entries.push(entry),
            None => charts.push(HistoryChart {
                idx,
                entries: vec![entry],
            }),
        }
    }

    let ids: Vec<u32> = charts.iter().map(|c| c.idx).collect();
    for (pos, chart) in charts.iter_mut().enumerate() {
        for entry in chart.entries.iter_mut().filter(|e| e.next != 0) {
            let succ = ids.iter().position(|&id| id == entry.next).ok_or(
                FinishError::Unresolved {
                    what: "history chart",
                    id: pos,
                    target: "history chart",
                    reference: i64::from(entry.next),
                },
            )?;
            entry.succ = Some(succ);
        }
    }
    Ok(charts)
}

pub struct HistoryParser;

impl FileParser for HistoryParser {
    type State<'a> = Records<(u32, HistoryEntry)>;
    type Output = Vec<HistoryChart>;

    fn name(&self) -> &'static str {
        "p_hist"
    }

    fn init<'a>(&self, _: &'a GameContent) -> Result<Parser<Self::State<'a>>, RegError> {
        let mut p = Parser::new(Records::new());
        reg_version(&mut p)?;
        p.reg("N uint chart int next int roll int bonus", parse_entry)?;
        p.reg("D str text", parse_text)?;
        Ok(p)
    }

    fn finish(&self, state: Self::State<'_>) -> Result<Vec<HistoryChart>, FinishError> {
        if state.is_empty() {
            return Err(FinishError::Empty { what: "p_hist" });
        }
        link(state.finish().into_iter().map(|(_, e)| e).collect())
    }

    fn commit(&self, output: Vec<HistoryChart>, content: &mut GameContent) -> usize {
        content.histories = output;
        content.histories.len()
    }

    fn cleanup(&self, content: &mut GameContent) {
        content.histories.clear();
    }
}
