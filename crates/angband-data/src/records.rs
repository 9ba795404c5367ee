//! Record accumulation while a file is parsed, and compaction into dense
//! id-indexed tables once it is done.

use crate::error::{FinishError, ParseError, ParseErrorKind};

/// Records in the order their headers were seen, plus the one currently
/// being filled in by body directives.
#[derive(Debug)]
pub struct Records<T> {
    done: Vec<(i64, T)>,
    current: Option<(i64, T)>,
}

impl<T> Default for Records<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Records<T> {
    pub fn new() -> Self {
        Self {
            done: Vec::new(),
            current: None,
        }
    }

    /// Start a new record, closing the current one. Fails when `id` was
    /// already used in this file.
    pub fn begin(&mut self, id: i64, record: T) -> Result<&mut T, ParseError> {
        if self.contains(id) {
            return Err(ParseError::new(
                ParseErrorKind::InvalidValue,
                format!("duplicate index {id}"),
            ));
        }
        if let Some(prev) = self.current.take() {
            self.done.push(prev);
        }
        Ok(&mut self.current.insert((id, record)).1)
    }

    /// Start a record without an id of its own.
    pub fn push(&mut self, record: T) -> &mut T {
        if let Some(prev) = self.current.take() {
            self.done.push(prev);
        }
        let id = self.done.len() as i64;
        &mut self.current.insert((id, record)).1
    }

    pub fn current(&self) -> Option<&T> {
        self.current.as_ref().map(|(_, r)| r)
    }

    /// The record body directives apply to.
    pub fn current_mut(&mut self) -> Result<&mut T, ParseError> {
        self.current
            .as_mut()
            .map(|(_, r)| r)
            .ok_or_else(|| ParseErrorKind::MissingRecordHeader.into())
    }

    pub fn contains(&self, id: i64) -> bool {
        self.iter().any(|(i, _)| i == id)
    }

    pub fn len(&self) -> usize {
        self.done.len() + usize::from(self.current.is_some())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// All records so far in file order, the current one last.
    pub fn iter(&self) -> impl Iterator<Item = (i64, &T)> {
        self.done
            .iter()
            .chain(self.current.as_ref())
            .map(|(id, r)| (*id, r))
    }

    /// Close the current record and return everything in file order.
    pub fn finish(mut self) -> Vec<(i64, T)> {
        if let Some(last) = self.current.take() {
            self.done.push(last);
        }
        self.done
    }

    /// Close the current record and return the records without ids.
    pub fn into_vec(self) -> Vec<T> {
        self.finish().into_iter().map(|(_, r)| r).collect()
    }
}

/// A table indexed directly by record id. Ids that no record claimed are
/// empty slots.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DenseTable<T> {
    slots: Vec<Option<T>>,
    order: Vec<usize>,
}

impl<T> Default for DenseTable<T> {
    fn default() -> Self {
        Self {
            slots: Vec::new(),
            order: Vec::new(),
        }
    }
}

impl<T> DenseTable<T> {
    /// Build a table of length `max_id + 1` from accumulated records.
    pub fn compact(records: Vec<(i64, T)>, what: &'static str) -> Result<Self, FinishError> {
        if records.is_empty() {
            return Err(FinishError::Empty { what });
        }
        if let Some(&(id, _)) = records.iter().find(|(id, _)| *id < 0) {
            return Err(FinishError::NegativeId { what, id });
        }

        let max_id = records.iter().map(|(id, _)| *id as usize).max().unwrap_or(0);
        let mut slots: Vec<Option<T>> = Vec::new();
        slots.resize_with(max_id + 1, || None);
        let mut order = Vec::with_capacity(records.len());

        for (id, record) in records {
            let id = id as usize;
            order.push(id);
            slots[id] = Some(record);
        }

        log::debug!("{what}: {} records in {} slots", order.len(), slots.len());
        Ok(Self { slots, order })
    }

    /// Number of slots, including empty ones.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Number of filled slots.
    pub fn count(&self) -> usize {
        self.order.len()
    }

    pub fn get(&self, id: usize) -> Option<&T> {
        self.slots.get(id).and_then(Option::as_ref)
    }

    pub fn get_mut(&mut self, id: usize) -> Option<&mut T> {
        self.slots.get_mut(id).and_then(Option::as_mut)
    }

    /// Append a record after the last slot, returning its id.
    pub fn push(&mut self, record: T) -> usize {
        let id = self.slots.len();
        self.slots.push(Some(record));
        self.order.push(id);
        id
    }

    /// Filled slots in id order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, &T)> {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(id, slot)| slot.as_ref().map(|r| (id, r)))
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = (usize, &mut T)> {
        self.slots
            .iter_mut()
            .enumerate()
            .filter_map(|(id, slot)| slot.as_mut().map(|r| (id, r)))
    }

    /// Ids in the order their records appeared in the file.
    pub fn file_order(&self) -> &[usize] {
        &self.order
    }

    /// The id of the record that followed `id` in the file.
    pub fn next(&self, id: usize) -> Option<usize> {
        let pos = self.order.iter().position(|&i| i == id)?;
        self.order.get(pos + 1).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn body_before_header() {
        let mut r: Records<String> = Records::new();
        let e = r.current_mut().unwrap_err();
        assert_eq!(e.kind, ParseErrorKind::MissingRecordHeader);
        assert!(r.current().is_none());
    }

    #[test]
    fn header_closes_previous() {
        let mut r = Records::new();
        r.begin(3, "a".to_string()).unwrap();
        r.current_mut().unwrap().push('!');
        r.begin(1, "b".to_string()).unwrap();
        assert_eq!(r.current(), Some(&"b".to_string()));
        assert_eq!(r.finish(), vec![(3, "a!".to_string()), (1, "b".to_string())]);
    }

    #[test]
    fn duplicate_ids_are_rejected() {
        let mut r = Records::new();
        r.begin(3, 'a').unwrap();
        r.begin(4, 'b').unwrap();
        let e = r.begin(3, 'c').unwrap_err();
        assert_eq!(e.kind, ParseErrorKind::InvalidValue);
    }

    #[test]
    fn compaction_indexes_by_id() {
        let records = vec![(4, "four"), (1, "one"), (7, "seven")];
        let t = DenseTable::compact(records, "test").unwrap();
        assert_eq!(t.len(), 8);
        assert_eq!(t.count(), 3);
        assert_eq!(t.get(4), Some(&"four"));
        assert_eq!(t.get(7), Some(&"seven"));
        for gap in [0, 2, 3, 5, 6] {
            assert_eq!(t.get(gap), None);
        }
        assert_eq!(t.get(8), None);
    }

    #[test]
    fn compaction_keeps_file_order() {
        let t = DenseTable::compact(vec![(4, 'a'), (1, 'b'), (7, 'c')], "test").unwrap();
        assert_eq!(t.file_order(), &[4, 1, 7]);
        assert_eq!(t.next(4), Some(1));
        assert_eq!(t.next(1), Some(7));
        assert_eq!(t.next(7), None);
        let ids: Vec<usize> = t.iter().map(|(id, _)| id).collect();
        assert_eq!(ids, vec![1, 4, 7]);
    }

    #[test]
    fn compaction_rejects_empty_and_negative() {
        let empty: Vec<(i64, u8)> = Vec::new();
        assert_eq!(
            DenseTable::compact(empty, "test"),
            Err(FinishError::Empty { what: "test" })
        );
        assert_eq!(
            DenseTable::compact(vec![(2, 'a'), (-1, 'b')], "test"),
            Err(FinishError::NegativeId { what: "test", id: -1 })
        );
    }

    #[test]
    fn push_extends() {
        let mut t = DenseTable::compact(vec![(2, 'a')], "test").unwrap();
        assert_eq!(t.push('z'), 3);
        assert_eq!(t.len(), 4);
        assert_eq!(t.get(3), Some(&'z'));
    }
}
