//! Grouping of records by target filename.

use crate::domain::{Pair, Record, BASE_GROUP};
use crate::utils::OrderedMap;

/// Filename → pairs, both in first-seen order. Duplicate keys are kept.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GroupedTable {
    groups: OrderedMap<String, Vec<Pair>>,
}

impl GroupedTable {
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    pub fn get(&self, name: &str) -> Option<&[Pair]> {
        self.groups.get(name).map(Vec::as_slice)
    }

    /// Pairs of the `.env` group, if the table has one.
    pub fn base(&self) -> Option<&[Pair]> {
        self.get(BASE_GROUP)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.groups.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[Pair])> {
        self.groups.iter().map(|(name, pairs)| (name.as_str(), pairs.as_slice()))
    }

    pub fn push(&mut self, record: Record) {
        let file = record.file.clone();
        self.groups.get_or_insert_with(file, Vec::new).push(Pair::from(record));
    }
}

impl FromIterator<Record> for GroupedTable {
    fn from_iter<I: IntoIterator<Item = Record>>(iter: I) -> Self {
        let mut table = Self::default();
        for record in iter {
            table.push(record);
        }
        table
    }
}

pub fn group_records(records: impl IntoIterator<Item = Record>) -> GroupedTable {
    records.into_iter().collect()
}
